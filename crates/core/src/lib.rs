//! # Verdict Core
//!
//! Recoverable failure as data: the [`Outcome`] sum type, the combinators that
//! thread it through a pipeline, a short-circuiting dispatch matcher, and the
//! non-empty list the validation crate accumulates errors into.
//!
//! ## Laws (Compiler Enforced)
//!
//! - No `unwrap()` / `expect()` / `panic!()` in library code
//! - No `unsafe` - safe Rust only
//! - An `Outcome` is only observed through [`Outcome::either`]
//!
//! ## Propagation
//!
//! - `map` / `flat_map` stop at the first failure
//! - [`Match`] stops at the first matching rule
//! - Validators in `verdict-validation` accumulate every error
//!
//! Panics are fatal faults and are never caught; see [`capture`].

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod capture;
pub mod combine;
mod error;
pub mod introducers;
pub mod list;
pub mod matcher;
pub mod narrow;
mod outcome;
pub mod partition;
pub mod recover;
mod resolvers;
mod transform;

pub use capture::{lift_try, try_capture, try_to};
pub use combine::combine;
pub use error::{BoxError, Error, Result};
pub use list::{LinkList, NonEmptyList};
pub use matcher::{match_value, BoundMatch, Dispatcher, Match, Rule};
pub use narrow::Narrow;
pub use outcome::{failure, success, Outcome};
