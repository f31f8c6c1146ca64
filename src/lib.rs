//! # deferred-io
//!
//! Side effects described as values.
//!
//! ## Overview
//!
//! - **Control**: [`Lazy`](control::Lazy), a memoizing cell that runs its
//!   producer at most once
//! - **Effect**: [`IO`](effect::IO), a deferred and memoized side effect
//!   with `fmap` / `flat_map` composition, the [`Unit`](effect::Unit)
//!   terminal value and the [`eff!`] sequencing macro
//! - **Runtime**: console and clock effects behind traits
//! - **Greeting**: a small program built from those effects
//!
//! ## Example
//!
//! ```rust
//! use deferred_io::prelude::*;
//!
//! let console = ScriptedConsole::new(["Ada"]);
//! let shout = console.read_line().map_ok(|name| name.to_uppercase());
//!
//! // Nothing has been read yet
//! assert_eq!(console.remaining_input(), 1);
//! assert_eq!(shout.run_unsafe().ok().as_deref(), Some("ADA"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use deferred_io::prelude::*;
/// ```
pub mod prelude {
    pub use crate::control::*;
    pub use crate::effect::*;
    pub use crate::runtime::*;
}

pub mod control;
pub mod effect;
pub mod greeting;
pub mod runtime;
