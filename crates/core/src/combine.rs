//! Merging two independently produced outcomes.

use crate::Outcome;

/// Combine two outcomes under `f`.
///
/// Both outcomes are already evaluated. When both are failures the left one
/// wins; `f` only runs when both are successes.
pub fn combine<A, B, C, F>(
    first: Outcome<A, F>,
    second: Outcome<B, F>,
    f: impl FnOnce(A, B) -> C,
) -> Outcome<C, F> {
    first.either(
        |a| second.either(|b| Outcome::success(f(a, b)), Outcome::failure),
        Outcome::failure,
    )
}

impl<A, F> Outcome<A, F> {
    /// Method form of [`combine`], with `self` taking left priority.
    #[inline]
    pub fn combine_with<B, C>(self, other: Outcome<B, F>, f: impl FnOnce(A, B) -> C) -> Outcome<C, F> {
        combine(self, other, f)
    }
}
