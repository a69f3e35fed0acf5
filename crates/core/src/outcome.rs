//! The `Outcome` sum type.
//!
//! An `Outcome<S, F>` holds exactly one of a success value `S` or a failure
//! value `F`. The representation is private: the only way to observe it is the
//! total fold [`Outcome::either`]. Every other operation in this crate is
//! written in terms of that fold.

use either::Either;

/// Exactly one of a success value or a failure value.
///
/// # Examples
///
/// ```
/// use verdict_core::Outcome;
///
/// let parsed: Outcome<i32, String> = Outcome::success(42);
/// let rendered = parsed.either(|n| format!("got {n}"), |e| format!("failed: {e}"));
/// assert_eq!(rendered, "got 42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[must_use]
pub struct Outcome<S, F> {
    repr: Repr<S, F>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
enum Repr<S, F> {
    Success(S),
    Failure(F),
}

impl<S, F> Outcome<S, F> {
    /// Wrap a success value.
    #[inline]
    pub const fn success(value: S) -> Self {
        Self {
            repr: Repr::Success(value),
        }
    }

    /// Wrap a failure value.
    #[inline]
    pub const fn failure(error: F) -> Self {
        Self {
            repr: Repr::Failure(error),
        }
    }

    /// Fold the outcome: exactly one of the two functions is invoked.
    #[inline]
    pub fn either<R>(self, on_success: impl FnOnce(S) -> R, on_failure: impl FnOnce(F) -> R) -> R {
        match self.repr {
            Repr::Success(value) => on_success(value),
            Repr::Failure(error) => on_failure(error),
        }
    }

    /// Borrow both sides, so the outcome can be folded without being consumed.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&S, &F> {
        match &self.repr {
            Repr::Success(value) => Outcome::success(value),
            Repr::Failure(error) => Outcome::failure(error),
        }
    }

    /// Feed the whole outcome into the next pipeline step.
    #[inline]
    pub fn then<R>(self, step: impl FnOnce(Self) -> R) -> R {
        step(self)
    }

    /// True when this is a success equal to `expected`.
    pub fn is_success_of(&self, expected: &S) -> bool
    where
        S: PartialEq,
    {
        self.as_ref().either(|value| value == expected, |_| false)
    }

    /// True when this is a failure equal to `expected`.
    pub fn is_failure_of(&self, expected: &F) -> bool
    where
        F: PartialEq,
    {
        self.as_ref().either(|_| false, |error| error == expected)
    }

    /// Convert into a standard `Result`, success becoming `Ok`.
    #[inline]
    pub fn into_result(self) -> Result<S, F> {
        self.either(Ok, Err)
    }

    /// Convert into an `Either`, success on the left.
    #[inline]
    pub fn into_either(self) -> Either<S, F> {
        self.either(Either::Left, Either::Right)
    }
}

/// Wrap a success value.
#[inline]
pub const fn success<S, F>(value: S) -> Outcome<S, F> {
    Outcome::success(value)
}

/// Wrap a failure value.
#[inline]
pub const fn failure<S, F>(error: F) -> Outcome<S, F> {
    Outcome::failure(error)
}

impl<S, F> From<Result<S, F>> for Outcome<S, F> {
    fn from(result: Result<S, F>) -> Self {
        match result {
            Ok(value) => Self::success(value),
            Err(error) => Self::failure(error),
        }
    }
}

impl<S, F> From<Either<S, F>> for Outcome<S, F> {
    fn from(either: Either<S, F>) -> Self {
        either.either(Self::success, Self::failure)
    }
}

impl<S, F> From<Outcome<S, F>> for Result<S, F> {
    fn from(outcome: Outcome<S, F>) -> Self {
        outcome.into_result()
    }
}
