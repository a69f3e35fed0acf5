//! Functions that turn plain values into outcomes.
//!
//! Each returns a reusable step `I -> Outcome<_, _>` that can be fed into
//! `flat_map` or used at the start of a pipeline.

use std::collections::HashMap;
use std::hash::Hash;

use crate::narrow::Narrow;
use crate::Outcome;

/// Success of the wrapped value, or a failure built by `on_empty`.
pub fn from_option<S, F>(on_empty: impl Fn() -> F) -> impl Fn(Option<S>) -> Outcome<S, F> {
    move |maybe| match maybe {
        Some(value) => Outcome::success(value),
        None => Outcome::failure(on_empty()),
    }
}

/// Success of the input when `test` holds, otherwise a failure built from it.
pub fn if_false<S, F>(
    test: impl Fn(&S) -> bool,
    failure_mapper: impl Fn(&S) -> F,
) -> impl Fn(S) -> Outcome<S, F> {
    move |value| {
        if test(&value) {
            Outcome::success(value)
        } else {
            Outcome::failure(failure_mapper(&value))
        }
    }
}

/// Success of the input when `test` holds, otherwise the fixed `failure`.
pub fn if_false_value<S, F: Clone>(test: impl Fn(&S) -> bool, failure: F) -> impl Fn(S) -> Outcome<S, F> {
    if_false(test, move |_: &S| failure.clone())
}

/// Success of `mapper`'s output when it produces one, otherwise a failure
/// built from the input.
pub fn if_none<I, O, F>(
    mapper: impl Fn(&I) -> Option<O>,
    failure_mapper: impl Fn(&I) -> F,
) -> impl Fn(I) -> Outcome<O, F> {
    move |input| match mapper(&input) {
        Some(output) => Outcome::success(output),
        None => Outcome::failure(failure_mapper(&input)),
    }
}

/// Failure when `checker` yields `value` for the input, otherwise a success of
/// the input itself (not of the checker's output).
pub fn if_yields<S, V, F>(
    checker: impl Fn(&S) -> V,
    value: V,
    failure: impl Fn(&S) -> F,
) -> impl Fn(S) -> Outcome<S, F>
where
    V: PartialEq,
{
    move |input| {
        if checker(&input) == value {
            Outcome::failure(failure(&input))
        } else {
            Outcome::success(input)
        }
    }
}

/// Look keys up in `map`, failing through `failure_provider` on a miss.
pub fn from_map<K, S, F>(
    map: HashMap<K, S>,
    failure_provider: impl Fn(K) -> F,
) -> impl Fn(K) -> Outcome<S, F>
where
    K: Eq + Hash,
    S: Clone,
{
    move |key| match map.get(&key) {
        Some(value) => Outcome::success(value.clone()),
        None => Outcome::failure(failure_provider(key)),
    }
}

/// Narrow the input to `T`; a mismatch is a failure of the untouched input.
pub fn cast_to<T, I>() -> impl Fn(I) -> Outcome<T, I>
where
    I: Narrow<T>,
{
    |input| Outcome::from(<I as Narrow<T>>::narrow(input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::Any;

    #[test]
    fn test_from_option() {
        let lift = from_option(|| "missing");
        assert!(lift(Some(3)).is_success_of(&3));
        assert!(lift(None::<i32>).is_failure_of(&"missing"));
    }

    #[test]
    fn test_if_false_builds_failure_from_input() {
        let positive = if_false(|n: &i32| *n > 0, |n| format!("{n} is not positive"));
        assert!(positive(2).is_success_of(&2));
        assert!(positive(-1).is_failure_of(&"-1 is not positive".to_string()));
    }

    #[test]
    fn test_if_false_value() {
        let short = if_false_value(|s: &&str| s.len() < 4, "too long");
        assert!(short("abc").is_success_of(&"abc"));
        assert!(short("abcd").is_failure_of(&"too long"));
    }

    #[test]
    fn test_if_none() {
        let first_word = if_none(
            |s: &String| s.split_whitespace().next().map(str::to_owned),
            |s| format!("no words in {s:?}"),
        );
        assert!(first_word("hello world".to_string()).is_success_of(&"hello".to_string()));
        assert!(first_word("   ".to_string()).is_failure_of(&"no words in \"   \"".to_string()));
    }

    #[test]
    fn test_if_yields_returns_input_on_success() {
        let nonzero_exit = if_yields(|code: &i32| *code == 0, false, |code| format!("exit {code}"));
        assert!(nonzero_exit(0).is_success_of(&0));
        assert!(nonzero_exit(2).is_failure_of(&"exit 2".to_string()));
    }

    #[test]
    fn test_from_map() {
        let lookup = from_map(HashMap::from([("a", 1), ("b", 2)]), |k| format!("no key {k}"));
        assert!(lookup("b").is_success_of(&2));
        assert!(lookup("z").is_failure_of(&"no key z".to_string()));
    }

    #[test]
    fn test_cast_to() {
        let to_string = cast_to::<String, Box<dyn Any>>();
        let hit: Box<dyn Any> = Box::new("yes".to_string());
        assert!(to_string(hit).is_success_of(&"yes".to_string()));

        let miss: Box<dyn Any> = Box::new(5_i32);
        assert!(to_string(miss).either(|_| false, |original| original.is::<i32>()));
    }
}
