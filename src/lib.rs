#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! # Verdict
//!
//! Railway-oriented failure handling without panics.
//!
//! This library re-exports the Verdict workspace crates:
//!
//! - [`verdict_core`]: the `Outcome` sum type, its combinators, the dispatch
//!   matcher and the persistent error lists
//! - [`verdict_validation`]: accumulating validators built on `Outcome`
//!
//! Most code only needs the prelude:
//!
//! ```
//! use verdict::prelude::*;
//!
//! let halved = success::<i32, String>(8).flat_map(|n| {
//!     if n % 2 == 0 { success(n / 2) } else { failure(format!("{n} is odd")) }
//! });
//! assert!(halved.is_success_of(&4));
//! ```

pub use verdict_core;
pub use verdict_validation;

pub mod prelude;
