//! Transform combinators: pure functions from one `Outcome` to another.
//!
//! Each combinator invokes its function argument only when the tag matches.
//! The other side passes through untouched and is never inspected.

use crate::Outcome;

impl<S, F> Outcome<S, F> {
    /// Apply `f` to the success value.
    #[inline]
    pub fn map<S2>(self, f: impl FnOnce(S) -> S2) -> Outcome<S2, F> {
        self.either(|value| Outcome::success(f(value)), Outcome::failure)
    }

    /// Chain a step that may itself fail.
    ///
    /// The step may fail with a narrower error type `F2`; it is widened into
    /// `F` through `From`. A composition can grow the set of failure shapes,
    /// never shrink it.
    ///
    /// # Examples
    ///
    /// ```
    /// use verdict_core::Outcome;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct TooBig(u32);
    ///
    /// #[derive(Debug, PartialEq)]
    /// enum OrderError {
    ///     Missing,
    ///     TooBig(TooBig),
    /// }
    ///
    /// impl From<TooBig> for OrderError {
    ///     fn from(e: TooBig) -> Self {
    ///         Self::TooBig(e)
    ///     }
    /// }
    ///
    /// let check = |n: u32| -> Outcome<u32, TooBig> {
    ///     if n > 10 { Outcome::failure(TooBig(n)) } else { Outcome::success(n) }
    /// };
    ///
    /// let order: Outcome<u32, OrderError> = Outcome::success(12);
    /// assert!(order.flat_map(check).is_failure_of(&OrderError::TooBig(TooBig(12))));
    /// ```
    #[inline]
    pub fn flat_map<S2, F2>(self, f: impl FnOnce(S) -> Outcome<S2, F2>) -> Outcome<S2, F>
    where
        F: From<F2>,
    {
        self.either(|value| f(value).map_failure(F::from), Outcome::failure)
    }

    /// Apply `f` to the failure value.
    #[inline]
    pub fn map_failure<F2>(self, f: impl FnOnce(F) -> F2) -> Outcome<S, F2> {
        self.either(Outcome::success, |error| Outcome::failure(f(error)))
    }

    /// Attempt to recover from a failure. A recovered success of a narrower
    /// type `S2` is widened into `S`.
    #[inline]
    pub fn flat_map_failure<S2, F2>(self, f: impl FnOnce(F) -> Outcome<S2, F2>) -> Outcome<S, F2>
    where
        S: From<S2>,
    {
        self.either(Outcome::success, |error| f(error).map(S::from))
    }

    /// Apply a single failure-biased match rule: a failure is offered to the
    /// rule, a success means an earlier rule already matched.
    #[inline]
    pub fn recover_with(self, rule: impl FnOnce(F) -> Outcome<S, F>) -> Self {
        self.either(Outcome::success, rule)
    }

    /// Swap the success and failure roles.
    #[inline]
    pub fn invert(self) -> Outcome<F, S> {
        self.either(Outcome::failure, Outcome::success)
    }

    /// Run a side effect on the success value, returning the outcome unchanged.
    #[inline]
    pub fn on_success_do(self, f: impl FnOnce(&S)) -> Self {
        self.as_ref().either(f, |_| ());
        self
    }

    /// Run a side effect on the failure value, returning the outcome unchanged.
    #[inline]
    pub fn on_failure_do(self, f: impl FnOnce(&F)) -> Self {
        self.as_ref().either(|_| (), f);
        self
    }

    /// Widen the success type to any type it converts into.
    #[inline]
    pub fn widen_success<S2: From<S>>(self) -> Outcome<S2, F> {
        self.map(S2::from)
    }

    /// Widen the failure type to any type it converts into.
    #[inline]
    pub fn widen_failure<F2: From<F>>(self) -> Outcome<S, F2> {
        self.map_failure(F2::from)
    }

    /// Flat-map a fallible closure, turning its `Err` into a failure through
    /// `on_error`.
    #[inline]
    pub fn and_then_try<S2, X>(
        self,
        f: impl FnOnce(S) -> Result<S2, X>,
        on_error: impl FnOnce(X) -> F,
    ) -> Outcome<S2, F> {
        self.flat_map(|value| crate::capture::try_capture(|| f(value), on_error))
    }
}
