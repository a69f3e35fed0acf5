//! Terminal operations that turn an `Outcome` back into a plain value.

use crate::Outcome;

impl<S, F> Outcome<S, F> {
    /// The success value, or `recovery` applied to the failure.
    #[inline]
    pub fn if_failed(self, recovery: impl FnOnce(F) -> S) -> S {
        self.either(std::convert::identity, recovery)
    }

    /// The success value, or a value built by `default`.
    #[inline]
    pub fn get_or_else(self, default: impl FnOnce() -> S) -> S {
        self.either(std::convert::identity, |_| default())
    }

    /// The success value, if any.
    #[inline]
    pub fn success_value(self) -> Option<S> {
        self.either(Some, |_| None)
    }

    /// The failure value, if any.
    #[inline]
    pub fn failure_value(self) -> Option<F> {
        self.either(|_| None, Some)
    }
}

impl<T> Outcome<T, T> {
    /// Collapse an outcome whose two sides share a type.
    #[inline]
    pub fn collapse(self) -> T {
        self.either(std::convert::identity, std::convert::identity)
    }
}
