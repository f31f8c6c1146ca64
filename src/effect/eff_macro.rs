//! eff! macro for do-notation style sequencing of effects.
//!
//! Each `pattern <= expression;` clause is a bind; the clauses read top to
//! bottom in the order their effects run when the result is forced.
//!
//! # Syntax
//!
//! - `pattern <= expression;` - Bind: names the value the effect produces
//! - `let pattern = expression;` - Pure let binding
//! - `yield expression` - Final value, wrapped with `IO::pure`
//! - `expression` - Final expression (already an effect)
//!
//! # Operator Choice: `<=`
//!
//! `<-` is not valid in Rust's macro patterns; `<=` is the closest token
//! that reads as "bind from".
//!
//! # Examples
//!
//! ```rust
//! use deferred_io::eff;
//! use deferred_io::effect::IO;
//!
//! let io = eff! {
//!     first <= IO::new(|| 2);
//!     second <= IO::new(move || first * 10);
//!     let total = first + second;
//!     yield total
//! };
//! assert_eq!(io.run_unsafe(), 22);
//! ```
//!
//! # Implementation Notes
//!
//! The macro expands `pattern <= expression; rest` into:
//! ```rust,ignore
//! expression.flat_map(move |pattern| { /* rest */ })
//! ```
//! so it works with any type that has a `flat_map` method taking a closure.

/// A macro for monadic do-notation style syntax.
///
/// # Syntax
///
/// ```text
/// eff! {
///     pattern <= effect_expression;    // Bind operation (flat_map)
///     let pattern = expression;        // Pure let binding
///     yield expression                 // Final value (IO::pure)
/// }
/// ```
///
/// # Examples
///
/// ```rust
/// use deferred_io::eff;
/// use deferred_io::effect::IO;
///
/// let io = eff! {
///     (a, b) <= IO::pure((1, 2));
///     _ <= IO::new(|| println!("adding"));
///     IO::pure(a + b)
/// };
/// assert_eq!(io.run_unsafe(), 3);
/// ```
#[macro_export]
macro_rules! eff {
    // ==========================================================================
    // Terminal cases
    // ==========================================================================

    // Final value lifted with pure
    (yield $result:expr) => {
        $crate::effect::IO::pure($result)
    };

    // Final expression - return as-is
    ($result:expr) => {
        $result
    };

    // ==========================================================================
    // Bind operation: pattern <= effect; rest
    // ==========================================================================

    ($pattern:ident <= $monad:expr ; $($rest:tt)+) => {
        $monad.flat_map(move |$pattern| {
            $crate::eff!($($rest)+)
        })
    };

    (($($pattern:tt)*) <= $monad:expr ; $($rest:tt)+) => {
        $monad.flat_map(move |($($pattern)*)| {
            $crate::eff!($($rest)+)
        })
    };

    (_ <= $monad:expr ; $($rest:tt)+) => {
        $monad.flat_map(move |_| {
            $crate::eff!($($rest)+)
        })
    };

    // ==========================================================================
    // Let binding: let pattern = expression; rest
    // ==========================================================================

    (let $pattern:ident = $expr:expr ; $($rest:tt)+) => {
        {
            let $pattern = $expr;
            $crate::eff!($($rest)+)
        }
    };

    (let ($($pattern:tt)*) = $expr:expr ; $($rest:tt)+) => {
        {
            let ($($pattern)*) = $expr;
            $crate::eff!($($rest)+)
        }
    };
}
