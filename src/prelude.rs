//! Prelude module - common imports for Verdict
//!
//! Import this module to get all common types and traits:
//! ```rust
//! use verdict::prelude::*;
//! ```

// Re-export functional utilities
pub use itertools::Itertools;
pub use tap::{Pipe, Tap};

// Re-export error types
pub use verdict_core::{BoxError, Error};

// Re-export the outcome algebra
pub use verdict_core::partition::split;
pub use verdict_core::recover::{if_equals, if_is, if_not, if_present, if_type};
pub use verdict_core::{
    combine, failure, lift_try, match_value, success, try_capture, Dispatcher, LinkList, Match, Narrow,
    NonEmptyList, Outcome,
};

// Re-export validation
pub use verdict_validation::{
    accept_if, accept_if_with, compose, first_of, on, on_derived, on_each, only_if, reject_if, reject_if_with, Compose,
    FailedValidation, Validated, Validator,
};
