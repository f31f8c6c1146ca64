//! Errors raised by primitive effects.

use std::io;

use thiserror::Error;

/// A fault raised while forcing a console effect.
///
/// # Examples
///
/// ```
/// use deferred_io::runtime::ConsoleError;
///
/// assert_eq!(
///     ConsoleError::EndOfInput.to_string(),
///     "standard input was closed before a line could be read"
/// );
/// ```
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Input ended before a line could be read.
    #[error("standard input was closed before a line could be read")]
    EndOfInput,

    /// Reading from the input stream failed.
    #[error("failed to read a line from standard input")]
    Read(#[source] io::Error),

    /// Writing to the output stream failed.
    #[error("failed to write a line to standard output")]
    Write(#[source] io::Error),
}
