//! # Verdict Validation
//!
//! Accumulating validation over [`verdict_core::Outcome`].
//!
//! A [`Validator`] yields every error it finds instead of stopping at the
//! first. [`Validator::apply`] turns the errors into an outcome: the value
//! itself on success, or a [`FailedValidation`] pairing the value with a
//! non-empty error list. Applying a validator to an already failed outcome
//! appends to that list and keeps the value that was first rejected.
//!
//! ```
//! use verdict_validation::{accept_if, Validator};
//!
//! let is_even = accept_if(|n: &i32| n % 2 == 0, "odd");
//! let big_enough = accept_if(|n: &i32| *n >= 10, "too small");
//!
//! let checked = big_enough.apply_outcome(is_even.apply(5));
//! let errors = checked.failure_value().map(|f| f.into_error_list());
//! assert_eq!(errors, Some(vec!["odd", "too small"]));
//! ```

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

mod failed;
mod validator;
pub mod validators;

pub use failed::{treat_failures_as_list, FailedValidation};
pub use validator::{And, BoxedValidator, Errors, Validated, Validator};
pub use validators::{
    accept_if, accept_if_with, compose, first_of, from_fn, mapping_errors, on, on_derived, on_each, only_if, reject_if,
    reject_if_with, try_on, try_to, Compose,
};
