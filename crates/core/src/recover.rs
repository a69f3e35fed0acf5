//! Rule builders for the dispatch matcher.
//!
//! Every builder returns a function `I -> Outcome<O, I>`: a success means the
//! rule matched and produced an output, a failure hands the untouched input on
//! to the next rule.

use crate::narrow::Narrow;
use crate::Outcome;

/// Match when the input narrows to `T`, then apply `mapper` to the narrowed value.
///
/// # Examples
///
/// ```
/// use verdict_core::{match_value, recover::if_type};
/// use std::error::Error;
///
/// let failure: Box<dyn Error + Send + Sync> =
///     Box::new(std::io::Error::new(std::io::ErrorKind::Other, "disk"));
///
/// let handled = match_value(failure)
///     .when(if_type(|e: std::io::Error| format!("io: {e}")))
///     .otherwise(|e| format!("unhandled: {e}"));
///
/// assert_eq!(handled, "io: disk");
/// ```
pub fn if_type<T, I, O>(mapper: impl Fn(T) -> O) -> impl Fn(I) -> Outcome<O, I>
where
    I: Narrow<T>,
{
    move |input| Outcome::from(<I as Narrow<T>>::narrow(input)).map(&mapper)
}

/// Match when `test` holds.
pub fn if_is<I, O>(test: impl Fn(&I) -> bool, mapper: impl Fn(I) -> O) -> impl Fn(I) -> Outcome<O, I> {
    move |input| {
        if test(&input) {
            Outcome::success(mapper(input))
        } else {
            Outcome::failure(input)
        }
    }
}

/// Match when `test` does not hold.
pub fn if_not<I, O>(test: impl Fn(&I) -> bool, mapper: impl Fn(I) -> O) -> impl Fn(I) -> Outcome<O, I> {
    if_is(move |input: &I| !test(input), mapper)
}

/// Match when the input equals `expected`.
pub fn if_equals<I, O>(expected: I, mapper: impl Fn(I) -> O) -> impl Fn(I) -> Outcome<O, I>
where
    I: PartialEq,
{
    if_is(move |input: &I| *input == expected, mapper)
}

/// Match when `provider` yields a value, which becomes the output.
pub fn if_present<I, O>(provider: impl Fn(&I) -> Option<O>) -> impl Fn(I) -> Outcome<O, I> {
    move |input| match provider(&input) {
        Some(output) => Outcome::success(output),
        None => Outcome::failure(input),
    }
}

/// Turn an optional failure into an outcome: a present value is a failure,
/// absence becomes a success built by `on_empty`.
pub fn when_absent<S, F>(on_empty: impl Fn() -> S) -> impl Fn(Option<F>) -> Outcome<S, F> {
    move |maybe| match maybe {
        Some(error) => Outcome::failure(error),
        None => Outcome::success(on_empty()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_if_is_matches_and_passes_on() {
        let even = if_is(|n: &i32| n % 2 == 0, |n| format!("{n} is even"));
        assert!(even(4).is_success_of(&"4 is even".to_string()));
        assert!(even(3).is_failure_of(&3));
    }

    #[test]
    fn test_if_not_negates() {
        let odd = if_not(|n: &i32| n % 2 == 0, |n| n * 10);
        assert!(odd(3).is_success_of(&30));
        assert!(odd(4).is_failure_of(&4));
    }

    #[test]
    fn test_if_equals() {
        let four = if_equals(4, |n| format!("{n} sure looks like a 4"));
        assert!(four(4).is_success_of(&"4 sure looks like a 4".to_string()));
        assert!(four(5).is_failure_of(&5));
    }

    #[test]
    fn test_if_present_uses_provided_value() {
        let first_char = if_present(|s: &String| s.chars().next());
        assert!(first_char("abc".to_string()).is_success_of(&'a'));
        assert!(first_char(String::new()).is_failure_of(&String::new()));
    }

    #[test]
    fn test_when_absent() {
        let recover = when_absent(|| "fine");
        assert!(recover(None::<&str>).is_success_of(&"fine"));
        assert!(recover(Some("broken")).is_failure_of(&"broken"));
    }

    #[test]
    fn test_if_type_on_any() {
        use std::any::Any;

        let as_number = if_type(|n: u32| n + 1);
        let hit: Box<dyn Any> = Box::new(41_u32);
        assert!(as_number(hit).either(|n| n == 42, |_| false));

        let miss: Box<dyn Any> = Box::new("nope");
        assert!(as_number(miss).either(|_| false, |_| true));
    }
}
