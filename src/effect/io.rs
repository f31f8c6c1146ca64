//! IO Monad - Deferred, memoized side effects.
//!
//! The `IO` type represents a computation that may perform side effects.
//! Side effects are not executed until the value is forced, maintaining
//! referential transparency in the code that builds it.
//!
//! # Design Philosophy
//!
//! IO "describes" side effects but doesn't "execute" them. Execution happens
//! only via [`IO::force`] or [`IO::run_unsafe`], which should be called at the
//! program's "edge" (e.g., in the `main` function).
//!
//! Every `IO` owns a [`Lazy`] cell. The first force runs the wrapped action
//! and caches its result; forcing again returns the cached result without
//! repeating the action.
//!
//! # Examples
//!
//! ```rust
//! use deferred_io::effect::IO;
//!
//! // Create a pure IO action
//! let io = IO::pure(42);
//! assert_eq!(io.run_unsafe(), 42);
//!
//! // Chain IO actions
//! let io = IO::pure(10)
//!     .fmap(|x| x * 2)
//!     .flat_map(|x| IO::pure(x + 1));
//! assert_eq!(io.run_unsafe(), 21);
//! ```
//!
//! # Side Effect Deferral
//!
//! ```rust
//! use deferred_io::effect::IO;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let executed = Rc::new(Cell::new(false));
//! let executed_clone = Rc::clone(&executed);
//!
//! let io = IO::new(move || {
//!     executed_clone.set(true);
//!     42
//! });
//!
//! // Not executed yet
//! assert!(!executed.get());
//!
//! // Execute the IO action
//! assert_eq!(*io.force(), 42);
//! assert!(executed.get());
//! ```

use std::cell::Ref;
use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::control::Lazy;

type Action<A> = Box<dyn FnOnce() -> A>;

/// A monad representing deferred side effects.
///
/// `IO<A>` wraps a computation that produces a value of type `A` and may
/// perform side effects. The computation is not executed until the value is
/// forced, and it is executed at most once.
///
/// # Monad Laws
///
/// `IO` satisfies the monad laws, including the order and count of side
/// effects:
///
/// 1. **Left Identity**: `IO::pure(a).flat_map(f) == f(a)`
/// 2. **Right Identity**: `m.flat_map(IO::pure) == m`
/// 3. **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
///
/// # Thread Safety
///
/// `IO` is neither `Send` nor `Sync`. Forcing always happens on the thread
/// that built the effect.
///
/// # Stack Depth
///
/// Forcing recurses once per bind, so a chain of a few hundred thousand
/// `flat_map` calls can overflow the stack.
pub struct IO<A> {
    cell: Lazy<A, Action<A>>,
}

static_assertions::assert_not_impl_any!(IO<i32>: Send, Sync);
static_assertions::assert_not_impl_any!(IO<String>: Send, Sync);

impl<A: 'static> IO<A> {
    /// Creates a new IO action from a closure.
    ///
    /// The closure will not be executed until the IO is forced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deferred_io::effect::IO;
    ///
    /// let io = IO::new(|| {
    ///     println!("Side effect!");
    ///     42
    /// });
    /// // Nothing is printed yet
    /// let result = io.run_unsafe();
    /// // Now "Side effect!" is printed
    /// assert_eq!(result, 42);
    /// ```
    pub fn new<F>(action: F) -> Self
    where
        F: FnOnce() -> A + 'static,
    {
        let action: Action<A> = Box::new(action);
        Self {
            cell: Lazy::new(action),
        }
    }

    /// Alias for [`IO::new`].
    #[inline]
    pub fn of<F>(action: F) -> Self
    where
        F: FnOnce() -> A + 'static,
    {
        Self::new(action)
    }

    /// Wraps a pure value in an IO action.
    ///
    /// The resulting IO is already evaluated and performs no side effects.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deferred_io::effect::IO;
    ///
    /// let io = IO::pure(42);
    /// assert!(io.is_forced());
    /// assert_eq!(io.run_unsafe(), 42);
    /// ```
    pub const fn pure(value: A) -> Self {
        Self {
            cell: Lazy::evaluated(value),
        }
    }

    /// Forces the IO action and borrows its result.
    ///
    /// The first call runs every action this IO was composed from, in the
    /// order they were bound. Later calls return the memoized result.
    ///
    /// # Panics
    ///
    /// Panics if the wrapped action panics, and on every later force of the
    /// same (now poisoned) IO.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deferred_io::effect::IO;
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    ///
    /// let runs = Rc::new(Cell::new(0));
    /// let counter = Rc::clone(&runs);
    /// let io = IO::new(move || {
    ///     counter.set(counter.get() + 1);
    ///     "done"
    /// });
    ///
    /// assert_eq!(*io.force(), "done");
    /// assert_eq!(*io.force(), "done");
    /// assert_eq!(runs.get(), 1);
    /// ```
    pub fn force(&self) -> Ref<'_, A> {
        self.cell.force()
    }

    /// Executes the IO action and returns the result by value.
    ///
    /// If the IO was already forced, the memoized result is returned and
    /// nothing runs again.
    ///
    /// This method is named `run_unsafe` to indicate that it executes
    /// side effects. While it's memory-safe, calling it breaks referential
    /// transparency.
    ///
    /// # Panics
    ///
    /// Panics if the wrapped action panics or the IO is poisoned.
    pub fn run_unsafe(self) -> A {
        self.cell.into_value()
    }

    /// Returns whether this IO holds a memoized result.
    #[inline]
    pub fn is_forced(&self) -> bool {
        self.cell.is_forced()
    }

    /// Transforms the result of an IO action using a function.
    ///
    /// This is the `fmap` operation from Functor. Nothing runs until the
    /// returned IO is forced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deferred_io::effect::IO;
    ///
    /// let io = IO::pure(21).fmap(|x| x * 2);
    /// assert_eq!(io.run_unsafe(), 42);
    /// ```
    pub fn fmap<B, F>(self, function: F) -> IO<B>
    where
        F: FnOnce(A) -> B + 'static,
        B: 'static,
    {
        IO::new(move || function(self.run_unsafe()))
    }

    /// Chains IO actions, passing the result of the first to a function
    /// that produces the second.
    ///
    /// This is the `bind` operation from Monad. Forcing the returned IO
    /// forces `self`, applies `function`, then forces the IO it returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deferred_io::effect::IO;
    ///
    /// let io = IO::pure(10).flat_map(|x| IO::pure(x * 2));
    /// assert_eq!(io.run_unsafe(), 20);
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> IO<B>
    where
        F: FnOnce(A) -> IO<B> + 'static,
        B: 'static,
    {
        IO::new(move || {
            let a = self.run_unsafe();
            let io_b = function(a);
            io_b.run_unsafe()
        })
    }

    /// Alias for `flat_map`.
    ///
    /// This is the conventional Rust name for monadic bind.
    pub fn and_then<B, F>(self, function: F) -> IO<B>
    where
        F: FnOnce(A) -> IO<B> + 'static,
        B: 'static,
    {
        self.flat_map(function)
    }

    /// Binds a follow-up action and combines both results.
    ///
    /// Equivalent to
    /// `self.flat_map(|a| function(&a).fmap(|b| combine(a, b)))`, so a chain
    /// of steps reads as a flat list of named intermediate results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deferred_io::effect::IO;
    ///
    /// let io = IO::pure(String::from("Ada"))
    ///     .flat_map_with(|name| IO::pure(name.len()), |name, length| format!("{name}:{length}"));
    /// assert_eq!(io.run_unsafe(), "Ada:3");
    /// ```
    pub fn flat_map_with<B, C, F, G>(self, function: F, combine: G) -> IO<C>
    where
        F: FnOnce(&A) -> IO<B> + 'static,
        G: FnOnce(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        self.flat_map(move |a| {
            let io_b = function(&a);
            io_b.fmap(move |b| combine(a, b))
        })
    }

    /// Sequences two IO actions, discarding the result of the first.
    ///
    /// The first action is still executed for its side effects.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deferred_io::effect::IO;
    ///
    /// let io = IO::pure(10).then(IO::pure(20));
    /// assert_eq!(io.run_unsafe(), 20);
    /// ```
    pub fn then<B>(self, next: IO<B>) -> IO<B>
    where
        B: 'static,
    {
        self.flat_map(move |_| next)
    }

    /// Combines two IO actions using a function. `self` runs first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deferred_io::effect::IO;
    ///
    /// let io = IO::pure(10).map2(IO::pure(20), |a, b| a + b);
    /// assert_eq!(io.run_unsafe(), 30);
    /// ```
    pub fn map2<B, C, F>(self, other: IO<B>, function: F) -> IO<C>
    where
        F: FnOnce(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        self.flat_map(move |a| other.fmap(move |b| function(a, b)))
    }

    /// Combines two IO actions into a tuple.
    pub fn product<B>(self, other: IO<B>) -> IO<(A, B)>
    where
        B: 'static,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Catches panics in an IO action and converts them to a recovery value.
    ///
    /// If forcing `io` panics, the handler is called with the panic message
    /// and its return value becomes the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deferred_io::effect::IO;
    ///
    /// let panicking = IO::new(|| -> String { panic!("oops") });
    /// let recovered = IO::recover(panicking, |message| format!("recovered from {message}"));
    /// assert_eq!(recovered.run_unsafe(), "recovered from oops");
    /// ```
    pub fn recover<F>(io: Self, handler: F) -> Self
    where
        F: FnOnce(String) -> A + 'static,
    {
        IO::new(move || match catch_unwind(AssertUnwindSafe(|| io.run_unsafe())) {
            Ok(value) => value,
            Err(payload) => {
                let message = if let Some(message) = payload.downcast_ref::<&str>() {
                    (*message).to_string()
                } else if let Some(message) = payload.downcast_ref::<String>() {
                    message.clone()
                } else {
                    "Unknown panic".to_string()
                };
                tracing::debug!(%message, "recovering from panic while forcing IO");
                handler(message)
            }
        })
    }

    /// Forces this IO inside `span`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deferred_io::effect::IO;
    ///
    /// let io = IO::pure(1).fmap(|x| x + 1).instrument(tracing::debug_span!("increment"));
    /// assert_eq!(io.run_unsafe(), 2);
    /// ```
    pub fn instrument(self, span: tracing::Span) -> Self {
        IO::new(move || {
            let _entered = span.enter();
            tracing::trace!("forcing instrumented IO");
            self.run_unsafe()
        })
    }
}

impl<A: fmt::Debug> fmt::Debug for IO<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("IO").field(&self.cell).finish()
    }
}
