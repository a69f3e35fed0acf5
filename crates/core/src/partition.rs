//! Stable partitioning of outcome sequences.

use itertools::Itertools;

use crate::Outcome;

/// Split outcomes into successes and failures, each in original order.
///
/// # Examples
///
/// ```
/// use verdict_core::{failure, partition::split, success};
///
/// let (ok, bad) = split(vec![success(1), failure("a"), success(2), failure("b")]);
/// assert_eq!(ok, vec![1, 2]);
/// assert_eq!(bad, vec!["a", "b"]);
/// ```
pub fn split<S, F>(outcomes: impl IntoIterator<Item = Outcome<S, F>>) -> (Vec<S>, Vec<F>) {
    outcomes.into_iter().partition_map(Outcome::into_either)
}

/// `success` of every value when nothing failed, otherwise `failure` of every
/// failure.
pub fn successes_or_failures<S, F>(
    outcomes: impl IntoIterator<Item = Outcome<S, F>>,
) -> Outcome<Vec<S>, Vec<F>> {
    let (successes, failures) = split(outcomes);
    if failures.is_empty() {
        Outcome::success(successes)
    } else {
        Outcome::failure(failures)
    }
}

/// Lazily keep only the success values.
pub fn successes<S, F>(outcomes: impl IntoIterator<Item = Outcome<S, F>>) -> impl Iterator<Item = S> {
    outcomes.into_iter().filter_map(Outcome::success_value)
}

/// Lazily keep only the failure values.
pub fn failures<S, F>(outcomes: impl IntoIterator<Item = Outcome<S, F>>) -> impl Iterator<Item = F> {
    outcomes.into_iter().filter_map(Outcome::failure_value)
}
