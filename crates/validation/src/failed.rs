//! The failure side of a validation.

use verdict_core::{LinkList, NonEmptyList, Outcome};

/// A rejected value together with every error raised against it.
///
/// The value is the one first rejected. Later validation passes only ever
/// append to the error list; they never replace the value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FailedValidation<T, E> {
    value: T,
    errors: NonEmptyList<E>,
}

impl<T, E> FailedValidation<T, E> {
    /// Pair a rejected value with its errors.
    pub const fn new(value: T, errors: NonEmptyList<E>) -> Self {
        Self { value, errors }
    }

    /// The rejected value.
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// The errors, in the order they were raised.
    pub const fn errors(&self) -> &NonEmptyList<E> {
        &self.errors
    }

    /// Split into the value and its errors.
    pub fn into_parts(self) -> (T, NonEmptyList<E>) {
        (self.value, self.errors)
    }

    /// Append `more` after the existing errors, keeping the value.
    #[must_use]
    pub fn with_more_errors(self, more: &LinkList<E>) -> Self
    where
        E: Clone,
    {
        Self {
            errors: self.errors.concat_eager(more),
            value: self.value,
        }
    }

    /// Drop the value and keep the errors as a `Vec`.
    pub fn into_error_list(self) -> Vec<E>
    where
        E: Clone,
    {
        self.errors.to_vec()
    }
}

/// Replace each failed validation with its plain error list.
pub fn treat_failures_as_list<T, E: Clone>(
    outcome: Outcome<T, FailedValidation<T, E>>,
) -> Outcome<T, Vec<E>> {
    outcome.map_failure(FailedValidation::into_error_list)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_more_errors_keeps_value_and_order() {
        let failed = FailedValidation::new(5, NonEmptyList::singleton("odd"));
        let grown = failed.with_more_errors(&LinkList::of(vec!["too small"]));

        assert_eq!(*grown.value(), 5);
        assert_eq!(grown.errors().to_vec(), vec!["odd", "too small"]);
    }

    #[test]
    fn test_equality_is_structural_and_order_sensitive() {
        let a = FailedValidation::new(1, NonEmptyList::of("x", vec!["y"]));
        let b = FailedValidation::new(1, NonEmptyList::of("x", vec!["y"]));
        let c = FailedValidation::new(1, NonEmptyList::of("y", vec!["x"]));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_treat_failures_as_list() {
        let outcome: Outcome<i32, FailedValidation<i32, &str>> =
            Outcome::failure(FailedValidation::new(6, NonEmptyList::of("a", vec!["b"])));
        assert!(treat_failures_as_list(outcome).is_failure_of(&vec!["a", "b"]));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serializes_value_and_errors() -> Result<(), serde_json::Error> {
        let failed = FailedValidation::new(15, NonEmptyList::of("fizz".to_string(), vec!["buzz".to_string()]));
        let json = serde_json::to_string(&failed)?;
        assert_eq!(json, r#"{"value":15,"errors":["fizz","buzz"]}"#);

        let back: FailedValidation<i32, String> = serde_json::from_str(&json)?;
        assert_eq!(back, failed);
        Ok(())
    }
}
