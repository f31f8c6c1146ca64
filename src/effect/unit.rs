//! The terminal value.
//!
//! [`Unit`] is the result of effects that exist only for their side effect,
//! such as writing a line. It has exactly one value and carries no data.

use std::fmt;

/// The single "no meaningful result" value.
///
/// Every `Unit` is equal to every other `Unit`. Obtain it through
/// [`Unit::INSTANCE`], [`Unit::instance`], `Unit::default()`, or from `()`.
///
/// # Examples
///
/// ```rust
/// use deferred_io::effect::Unit;
///
/// assert_eq!(Unit::instance(), Unit::INSTANCE);
/// assert_eq!(Unit::from(()), Unit::default());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Unit;

impl Unit {
    /// The one and only instance.
    pub const INSTANCE: Self = Self;

    /// Returns the one and only instance.
    #[inline]
    pub const fn instance() -> Self {
        Self::INSTANCE
    }
}

impl From<()> for Unit {
    #[inline]
    fn from((): ()) -> Self {
        Self::INSTANCE
    }
}

impl From<Unit> for () {
    #[inline]
    fn from(_: Unit) -> Self {}
}

impl fmt::Display for Unit {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("()")
    }
}

static_assertions::const_assert_eq!(std::mem::size_of::<Unit>(), 0);
