//! The `Validator` trait.

use verdict_core::{LinkList, NonEmptyList, Outcome};

use crate::failed::FailedValidation;

/// A lazily produced, order-significant stream of validation errors.
pub type Errors<'a, E> = Box<dyn Iterator<Item = E> + 'a>;

/// The outcome of validating a `T`.
pub type Validated<T, E> = Outcome<T, FailedValidation<T, E>>;

/// A boxed validator, used where validators of different types are mixed.
pub type BoxedValidator<T, E> = Box<dyn Validator<T, E>>;

/// A check run against a value that yields zero or more errors.
///
/// Errors are produced lazily: a consumer that stops pulling (see
/// [`first_of`](crate::validators::first_of)) stops any validator that has
/// not started yet from running at all.
pub trait Validator<T, E> {
    /// Produce the errors for `item`, in order. An empty stream means valid.
    fn validate<'a>(&'a self, item: &'a T) -> Errors<'a, E>
    where
        E: 'a;

    /// Validate `item`, keeping it on success or pairing it with every error
    /// on failure.
    fn apply(&self, item: T) -> Validated<T, E> {
        let errors: Vec<E> = self.validate(&item).collect();
        match NonEmptyList::from_vec(errors) {
            None => Outcome::success(item),
            Some(errors) => {
                tracing::debug!(errors = errors.len(), "validation rejected value");
                Outcome::failure(FailedValidation::new(item, errors))
            }
        }
    }

    /// Validate the result of an earlier pass.
    ///
    /// A success is validated as by [`Validator::apply`]. A failure is
    /// re-validated against its stored value and the new errors are appended
    /// after the existing ones; the stored value is kept.
    fn apply_outcome(&self, outcome: Validated<T, E>) -> Validated<T, E>
    where
        E: Clone,
    {
        outcome.either(
            |item| self.apply(item),
            |failed| {
                let more: LinkList<E> = self.validate(failed.value()).collect();
                if !more.is_empty() {
                    tracing::debug!(errors = more.len(), "re-validation appended errors");
                }
                Outcome::failure(failed.with_more_errors(&more))
            },
        )
    }

    /// Run `self` then `other`, accumulating the errors of both.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        Self: Sized,
        V: Validator<T, E>,
    {
        And {
            first: self,
            second: other,
        }
    }

    /// Erase the validator's type.
    fn boxed(self) -> BoxedValidator<T, E>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

impl<T, E, V> Validator<T, E> for Box<V>
where
    V: Validator<T, E> + ?Sized,
{
    fn validate<'a>(&'a self, item: &'a T) -> Errors<'a, E>
    where
        E: 'a,
    {
        (**self).validate(item)
    }
}

impl<T, E, V> Validator<T, E> for &V
where
    V: Validator<T, E> + ?Sized,
{
    fn validate<'a>(&'a self, item: &'a T) -> Errors<'a, E>
    where
        E: 'a,
    {
        (**self).validate(item)
    }
}

/// Two validators run in sequence; built by [`Validator::and`].
#[derive(Debug, Clone)]
pub struct And<A, B> {
    first: A,
    second: B,
}

impl<T, E, A, B> Validator<T, E> for And<A, B>
where
    A: Validator<T, E>,
    B: Validator<T, E>,
{
    fn validate<'a>(&'a self, item: &'a T) -> Errors<'a, E>
    where
        E: 'a,
    {
        // The second validator only starts once the first is drained.
        let second = std::iter::once_with(move || self.second.validate(item)).flatten();
        Box::new(self.first.validate(item).chain(second))
    }
}
