//! Deferred evaluation with memoization.
//!
//! This module provides the `Lazy<T, F>` cell that the effect wrapper is
//! built on. A cell starts out holding a producer function, runs it the
//! first time it is forced, and hands out the cached value afterwards.
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
//!
//! // No output yet - computation is deferred
//! println!("Created lazy value");
//!
//! // Now "Computing..." is printed
//! assert_eq!(*lazy.force(), 42);
//!
//! // No recomputation - result is memoized
//! assert_eq!(*lazy.force(), 42);
//! ```

use std::cell::{Ref, RefCell};
use std::fmt;

/// The internal state of a `Lazy` cell.
///
/// Transitions are one-way: `Pending` becomes `Done` on the first force,
/// or `Poisoned` if the producer panics.
#[derive(Debug)]
pub enum LazyState<T, F> {
    /// The producer has not run yet.
    Pending(F),
    /// The producer ran and this is its result.
    Done(T),
    /// The producer panicked. The cell is unusable.
    Poisoned,
}

/// A lazily evaluated value with memoization.
///
/// `Lazy<T, F>` defers computation until the value is first accessed via
/// [`force`](Lazy::force). Once computed, the value is cached and later
/// calls return it without running the producer again.
///
/// # Thread Safety
///
/// This type is NOT thread-safe. The at-most-once guarantee only holds for
/// forcing from a single thread, which `RefCell` enforces.
///
/// # Examples
///
/// ```rust
/// use deferred_io::control::Lazy;
/// use std::cell::Cell;
///
/// let call_count = Cell::new(0);
/// let lazy = Lazy::new(|| {
///     call_count.set(call_count.get() + 1);
///     42
/// });
///
/// assert_eq!(call_count.get(), 0); // Not called yet
///
/// let _ = lazy.force();
/// assert_eq!(call_count.get(), 1); // Called once
///
/// let _ = lazy.force();
/// assert_eq!(call_count.get(), 1); // Still only once - memoized
/// ```
pub struct Lazy<T, F = fn() -> T> {
    state: RefCell<LazyState<T, F>>,
}

impl<T, F: FnOnce() -> T> Lazy<T, F> {
    /// Creates a new cell holding `producer`.
    ///
    /// The producer is not called until [`force`](Lazy::force) is invoked.
    #[inline]
    pub const fn new(producer: F) -> Self {
        Self {
            state: RefCell::new(LazyState::Pending(producer)),
        }
    }

    /// Forces evaluation and returns a reference to the cached value.
    ///
    /// # Panics
    ///
    /// - If the producer panics. The cell is poisoned afterwards.
    /// - If the cell was already poisoned by an earlier panic.
    /// - If the producer forces this same cell again.
    pub fn force(&self) -> Ref<'_, T> {
        let is_pending = {
            let state = self.state.borrow();
            match &*state {
                LazyState::Done(_) => false,
                LazyState::Poisoned => panic!("Lazy instance has been poisoned"),
                LazyState::Pending(_) => true,
            }
        };

        if is_pending {
            self.initialize();
        }

        Ref::map(self.state.borrow(), |state| match state {
            LazyState::Done(value) => value,
            _ => panic!("Lazy should be initialized at this point"),
        })
    }

    /// Consumes the cell and returns the value, running the producer if it
    /// has not run yet.
    ///
    /// # Panics
    ///
    /// Panics if the cell is poisoned, or if the producer panics.
    pub fn into_value(self) -> T {
        match self.state.into_inner() {
            LazyState::Done(value) => value,
            LazyState::Pending(producer) => {
                tracing::trace!("running pending producer");
                producer()
            }
            LazyState::Poisoned => panic!("Lazy instance has been poisoned"),
        }
    }

    /// Takes the producer out, leaving `Poisoned` behind while it runs so
    /// that a panic keeps the cell poisoned.
    fn initialize(&self) {
        let producer = {
            let mut state = self.state.borrow_mut();
            match std::mem::replace(&mut *state, LazyState::Poisoned) {
                LazyState::Pending(producer) => producer,
                LazyState::Done(value) => {
                    *state = LazyState::Done(value);
                    return;
                }
                LazyState::Poisoned => panic!("Lazy instance has been poisoned"),
            }
        };

        tracing::trace!("running pending producer");
        let value = producer();

        *self.state.borrow_mut() = LazyState::Done(value);
    }
}

impl<T, F> Lazy<T, F> {
    /// Creates a cell that is already evaluated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deferred_io::control::Lazy;
    ///
    /// let lazy: Lazy<i32> = Lazy::evaluated(42);
    /// assert!(lazy.is_forced());
    /// ```
    #[inline]
    pub const fn evaluated(value: T) -> Self {
        Self {
            state: RefCell::new(LazyState::Done(value)),
        }
    }

    /// Returns the cached value without forcing.
    ///
    /// Returns `None` while pending or poisoned.
    pub fn get(&self) -> Option<Ref<'_, T>> {
        Ref::filter_map(self.state.borrow(), |state| match state {
            LazyState::Done(value) => Some(value),
            _ => None,
        })
        .ok()
    }

    /// Returns whether the producer has run to completion.
    #[inline]
    pub fn is_forced(&self) -> bool {
        matches!(&*self.state.borrow(), LazyState::Done(_))
    }

    /// Returns whether the producer panicked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deferred_io::control::Lazy;
    /// use std::panic::{AssertUnwindSafe, catch_unwind};
    ///
    /// let lazy = Lazy::new(|| -> i32 { panic!("initialization failed") });
    ///
    /// let _ = catch_unwind(AssertUnwindSafe(|| {
    ///     let _ = lazy.force();
    /// }));
    ///
    /// assert!(lazy.is_poisoned());
    /// ```
    #[inline]
    pub fn is_poisoned(&self) -> bool {
        matches!(&*self.state.borrow(), LazyState::Poisoned)
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Lazy<T, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        match &*state {
            LazyState::Done(value) => formatter.debug_tuple("Lazy").field(value).finish(),
            LazyState::Pending(_) => formatter.debug_tuple("Lazy").field(&"<pending>").finish(),
            LazyState::Poisoned => formatter.debug_tuple("Lazy").field(&"<poisoned>").finish(),
        }
    }
}

// No Deref: force() returns Ref<'_, T>, and forcing should stay visible at
// the call site.
