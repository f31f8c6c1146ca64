//! The greeter program as a single effect value.
//!
//! [`program`] only describes the interaction. Forcing the returned
//! [`IO`] performs it, step by step:
//!
//! 1. write [`PROMPT`]
//! 2. read the name
//! 3. read the local time
//! 4. compute the greeting with [`greet`]
//! 5. write the greeting
//!
//! The first fault ends the run; later steps are not performed.

use super::greet;
use crate::effect::{IO, Unit};
use crate::runtime::{Clock, Console, ConsoleError};

/// The question asked before reading the name.
pub const PROMPT: &str = "What's your name?";

/// Builds the greeter program over `console` and `clock`.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use deferred_io::greeting::program;
/// use deferred_io::runtime::{FixedClock, ScriptedConsole};
///
/// let evening = NaiveDate::from_ymd_opt(2024, 3, 1)
///     .and_then(|date| date.and_hms_opt(20, 0, 0))
///     .unwrap();
/// let console = ScriptedConsole::new(["Grace"]);
///
/// let run = program(console.clone(), FixedClock::new(evening));
/// assert!(console.output().is_empty());
///
/// assert!(run.run_unsafe().is_ok());
/// assert_eq!(console.output(), vec!["What's your name?", "Good evening, Grace"]);
/// ```
pub fn program<C, K>(console: C, clock: K) -> IO<Result<Unit, ConsoleError>>
where
    C: Console + Clone + 'static,
    K: Clock + 'static,
{
    let reader = console.clone();
    let writer = console.clone();

    console
        .write_line(PROMPT.to_owned())
        .flat_map_ok(move |Unit| reader.read_line())
        .flat_map_ok(move |name| clock.now().fmap(move |now| Ok(greet(now, &name))))
        .flat_map_ok(move |greeting| {
            tracing::debug!(%greeting, "greeting chosen");
            writer.write_line(greeting)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::{FixedClock, ScriptedConsole};
    use chrono::{NaiveDate, NaiveDateTime};
    use rstest::rstest;

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .and_then(|date| date.and_hms_opt(hour, 0, 0))
            .expect("valid timestamp")
    }

    #[rstest]
    fn building_the_program_performs_nothing() {
        let console = ScriptedConsole::new(["Grace"]);
        let _run = program(console.clone(), FixedClock::new(at(7)));

        assert!(console.output().is_empty());
        assert_eq!(console.remaining_input(), 1);
    }

    #[rstest]
    #[case(7, "Grace", "Good morning, Grace")]
    #[case(13, "  Grace ", "Good afternoon, Grace")]
    #[case(22, "", "Good evening.")]
    fn greets_by_time_of_day(#[case] hour: u32, #[case] input: &str, #[case] expected: &str) {
        let console = ScriptedConsole::new([input]);

        let outcome = program(console.clone(), FixedClock::new(at(hour))).run_unsafe();

        assert!(outcome.is_ok());
        assert_eq!(console.output(), vec![PROMPT, expected]);
    }

    #[rstest]
    fn end_of_input_stops_after_prompt() {
        let console = ScriptedConsole::new(Vec::<String>::new());

        let outcome = program(console.clone(), FixedClock::new(at(7))).run_unsafe();

        assert!(matches!(outcome, Err(ConsoleError::EndOfInput)));
        assert_eq!(console.output(), vec![PROMPT]);
    }
}
