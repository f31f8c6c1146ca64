//! The greeter: a pure decision wired to console and clock effects.
//!
//! - [`greet`]: chooses the greeting text, no I/O
//! - [`program`]: the whole interaction as one [`IO`](crate::effect::IO)

mod greeter;
mod program;

pub use greeter::{DEFAULT_SALUTATION, DayPeriod, greet, salutation};
pub use program::{PROMPT, program};
