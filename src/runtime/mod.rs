//! Primitive effect providers.
//!
//! The effects a program needs from the outside world, each expressed as a
//! request that returns an [`IO`](crate::effect::IO):
//!
//! - [`Console`]: read a line, write a line
//! - [`Clock`]: read the current local time
//!
//! Production implementations are [`StdConsole`] and [`SystemClock`].
//! [`ScriptedConsole`] and [`FixedClock`] stand in for them in tests.

mod clock;
mod console;
mod error;

pub use clock::{Clock, FixedClock, SystemClock};
pub use console::{Console, ScriptedConsole, StdConsole};
pub use error::ConsoleError;
