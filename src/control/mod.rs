//! Control structures for deferred evaluation.
//!
//! - [`Lazy`]: a memoizing cell that runs its producer at most once
//!
//! # Examples
//!
//! ```rust
//! use deferred_io::control::Lazy;
//!
//! let lazy = Lazy::new(|| {
//!     println!("Computing...");
//!     42
//! });
//! // "Computing..." is not printed yet
//!
//! let value = lazy.force();
//! // Now "Computing..." is printed and value is 42
//! assert_eq!(*value, 42);
//! ```

mod lazy;

pub use lazy::{Lazy, LazyState};
