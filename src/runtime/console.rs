//! Line-oriented console effects.
//!
//! This module provides the [`Console`] trait and its implementations.
//! Every operation returns an [`IO`], so nothing touches a stream until the
//! effect is forced.
//!
//! # Design
//!
//! - **Trait-based abstraction**: programs are written against `Console`
//!   and run with [`StdConsole`] in production or [`ScriptedConsole`] in
//!   tests.
//! - **Faults as values**: each effect yields `Result<_, ConsoleError>`;
//!   compose them with [`IO::flat_map_ok`] so the first fault ends the chain.
//!
//! # Example
//!
//! ```rust
//! use deferred_io::runtime::{Console, ScriptedConsole};
//!
//! let console = ScriptedConsole::new(["Ada"]);
//! let echo = console
//!     .read_line()
//!     .flat_map_ok({
//!         let console = console.clone();
//!         move |line| console.write_line(format!("hello {line}"))
//!     });
//!
//! assert!(console.output().is_empty());
//! assert!(echo.run_unsafe().is_ok());
//! assert_eq!(console.output(), vec!["hello Ada"]);
//! ```

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::{self, Write as _};
use std::rc::Rc;

use super::ConsoleError;
use crate::effect::{IO, Unit};

/// Deferred access to a line-oriented console.
pub trait Console {
    /// Reads one line, without its line terminator.
    ///
    /// Forcing fails with [`ConsoleError::EndOfInput`] if no line is left.
    fn read_line(&self) -> IO<Result<String, ConsoleError>>;

    /// Writes `text` followed by a newline.
    fn write_line(&self, text: String) -> IO<Result<Unit, ConsoleError>>;
}

/// Console backed by the process's standard input and standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdConsole;

impl Console for StdConsole {
    fn read_line(&self) -> IO<Result<String, ConsoleError>> {
        IO::new(|| {
            let mut buffer = String::new();
            let bytes = io::stdin()
                .read_line(&mut buffer)
                .map_err(ConsoleError::Read)?;
            if bytes == 0 {
                tracing::debug!("standard input is exhausted");
                return Err(ConsoleError::EndOfInput);
            }
            tracing::debug!(bytes, "read line from standard input");
            Ok(strip_line_ending(buffer))
        })
    }

    fn write_line(&self, text: String) -> IO<Result<Unit, ConsoleError>> {
        IO::new(move || {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{text}")
                .and_then(|()| stdout.flush())
                .map_err(ConsoleError::Write)?;
            tracing::debug!(length = text.len(), "wrote line to standard output");
            Ok(Unit)
        })
    }
}

/// Removes one trailing `\n` or `\r\n`.
fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

#[derive(Debug, Default)]
struct Script {
    input: VecDeque<String>,
    output: Vec<String>,
}

/// In-memory console that serves queued input lines and records output.
///
/// Clones share the same script, so a clone can be handed to a program
/// while the original is kept to inspect what was written.
#[derive(Debug, Clone, Default)]
pub struct ScriptedConsole {
    script: Rc<RefCell<Script>>,
}

impl ScriptedConsole {
    /// Creates a console that will answer reads with `input`, in order.
    pub fn new<I, S>(input: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let script = Script {
            input: input.into_iter().map(Into::into).collect(),
            output: Vec::new(),
        };
        Self {
            script: Rc::new(RefCell::new(script)),
        }
    }

    /// Returns every line written so far.
    pub fn output(&self) -> Vec<String> {
        self.script.borrow().output.clone()
    }

    /// Returns how many input lines have not been read yet.
    pub fn remaining_input(&self) -> usize {
        self.script.borrow().input.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&self) -> IO<Result<String, ConsoleError>> {
        let script = Rc::clone(&self.script);
        IO::new(move || {
            script
                .borrow_mut()
                .input
                .pop_front()
                .ok_or(ConsoleError::EndOfInput)
        })
    }

    fn write_line(&self, text: String) -> IO<Result<Unit, ConsoleError>> {
        let script = Rc::clone(&self.script);
        IO::new(move || {
            script.borrow_mut().output.push(text);
            Ok(Unit)
        })
    }
}
