//! Effect system for deferred side effect handling.
//!
//! # IO Monad
//!
//! The [`IO`] type represents a computation that may perform side effects.
//! Side effects are deferred until the IO is forced, and run at most once.
//!
//! ```rust
//! use deferred_io::effect::IO;
//!
//! // Create and chain IO actions
//! let io = IO::pure(10)
//!     .fmap(|x| x * 2)
//!     .flat_map(|x| IO::pure(x + 1));
//!
//! // Side effects don't occur until the IO is forced
//! assert_eq!(*io.force(), 21);
//! ```
//!
//! # Terminal Value
//!
//! Effects that exist only for their side effect produce [`Unit`].
//!
//! # Do-Notation with eff! Macro
//!
//! The `eff!` macro provides a convenient syntax for chaining monadic
//! operations, similar to Haskell's do-notation:
//!
//! ```rust
//! use deferred_io::eff;
//! use deferred_io::effect::IO;
//!
//! let io = eff! {
//!     x <= IO::pure(5);
//!     y <= IO::pure(10);
//!     let z = x + y;
//!     IO::pure(z * 2)
//! };
//! assert_eq!(io.run_unsafe(), 30);
//! ```

mod io;
mod result;
mod unit;

pub use io::IO;
pub use unit::Unit;

// =============================================================================
// Do-Notation Macros
// =============================================================================

mod eff_macro;
