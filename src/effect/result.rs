//! Combinators for fallible effects.
//!
//! Primitive effects that can fail produce `IO<Result<A, E>>`. The helpers
//! here sequence such effects so that the first `Err` ends the chain: later
//! follow-ups are neither built nor forced, and the error becomes the result
//! of the whole composition.
//!
//! # Examples
//!
//! ```rust
//! use deferred_io::effect::IO;
//!
//! let parsed: IO<Result<i32, String>> = IO::pure(Ok::<_, String>("21"))
//!     .flat_map_ok(|text| IO::pure(text.parse::<i32>().map_err(|error| error.to_string())))
//!     .map_ok(|value| value * 2);
//!
//! assert_eq!(parsed.run_unsafe(), Ok(42));
//! ```

use super::IO;

impl<A: 'static, E: 'static> IO<Result<A, E>> {
    /// Transforms the success value, leaving errors untouched.
    pub fn map_ok<B, F>(self, function: F) -> IO<Result<B, E>>
    where
        F: FnOnce(A) -> B + 'static,
        B: 'static,
    {
        self.fmap(move |result| result.map(function))
    }

    /// Transforms the error value, leaving successes untouched.
    pub fn map_err<E2, F>(self, function: F) -> IO<Result<A, E2>>
    where
        F: FnOnce(E) -> E2 + 'static,
        E2: 'static,
    {
        self.fmap(move |result| result.map_err(function))
    }

    /// Sequences into a follow-up fallible effect.
    ///
    /// If `self` yields `Err`, `function` is never called and the error is
    /// the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deferred_io::effect::IO;
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    ///
    /// let reached = Rc::new(Cell::new(false));
    /// let flag = Rc::clone(&reached);
    ///
    /// let io = IO::pure(Err::<i32, &str>("closed")).flat_map_ok(move |value| {
    ///     flag.set(true);
    ///     IO::pure(Ok(value + 1))
    /// });
    ///
    /// assert_eq!(io.run_unsafe(), Err("closed"));
    /// assert!(!reached.get());
    /// ```
    pub fn flat_map_ok<B, F>(self, function: F) -> IO<Result<B, E>>
    where
        F: FnOnce(A) -> IO<Result<B, E>> + 'static,
        B: 'static,
    {
        self.flat_map(move |result| match result {
            Ok(value) => function(value),
            Err(error) => IO::pure(Err(error)),
        })
    }
}

impl<A: 'static> IO<A> {
    /// Lifts an infallible effect into a fallible one that always succeeds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deferred_io::effect::IO;
    ///
    /// let io = IO::pure(3).attempt::<String>();
    /// assert_eq!(io.run_unsafe(), Ok(3));
    /// ```
    pub fn attempt<E: 'static>(self) -> IO<Result<A, E>> {
        self.fmap(Ok)
    }
}
