//! The capture boundary between fallible host code and `Outcome`.
//!
//! A closure's `Err` is a recoverable failure and is converted into an
//! `Outcome` failure. A panic is a fatal fault: nothing here calls
//! `catch_unwind`, so panics keep unwinding past the boundary.

use crate::{Error, Outcome};

/// Call `f`, turning its `Err` into a failure through `on_error`.
pub fn try_capture<S, F, X>(
    f: impl FnOnce() -> Result<S, X>,
    on_error: impl FnOnce(X) -> F,
) -> Outcome<S, F> {
    match f() {
        Ok(value) => Outcome::success(value),
        Err(error) => Outcome::failure(on_error(error)),
    }
}

/// Call `f`, capturing its error as [`Error::Captured`].
pub fn try_to<S, X>(f: impl FnOnce() -> Result<S, X>) -> Outcome<S, Error>
where
    X: std::error::Error + Send + Sync + 'static,
{
    try_capture(f, |error| {
        tracing::debug!(error = %error, "captured recoverable failure");
        Error::captured(error)
    })
}

/// Lift a fallible function into one returning an `Outcome`, reusable across
/// many inputs.
pub fn lift_try<I, O, F, X>(
    f: impl Fn(I) -> Result<O, X>,
    on_error: impl Fn(X) -> F,
) -> impl Fn(I) -> Outcome<O, F> {
    move |input| try_capture(|| f(input), &on_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::ParseIntError;

    #[test]
    fn test_try_capture_success() {
        let outcome = try_capture(|| "42".parse::<i32>(), |e: ParseIntError| e.to_string());
        assert!(outcome.is_success_of(&42));
    }

    #[test]
    fn test_try_capture_maps_error() {
        let outcome = try_capture(|| "x".parse::<i32>(), |_| "not a number");
        assert!(outcome.is_failure_of(&"not a number"));
    }

    #[test]
    fn test_try_to_wraps_in_captured_error() {
        let outcome = try_to(|| "x".parse::<u8>());
        let code = outcome.either(|_| "none", |e| e.code());
        assert_eq!(code, "CAPTURED");
    }

    #[test]
    fn test_lift_try_is_reusable() {
        let parse = lift_try(|s: &str| s.parse::<i32>(), |_| "bad");
        assert!(parse("1").is_success_of(&1));
        assert!(parse("one").is_failure_of(&"bad"));
        assert!(parse("2").is_success_of(&2));
    }

    #[test]
    #[should_panic(expected = "fatal")]
    fn test_panics_are_not_captured() {
        #[allow(clippy::panic)]
        let _ = try_capture(|| -> Result<i32, String> { panic!("fatal") }, |e| e);
    }
}
