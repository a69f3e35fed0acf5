//! Runtime-type narrowing used by type-based dispatch.
//!
//! Rust has no class hierarchy to test membership against, so "is this value
//! of type `T`" is a capability the input type opts into. Boxed trait objects
//! get it from `downcast`, which matches the exact concrete type only.
//! Closed enums implement it by hand, and whatever variants the impl extracts
//! are the ones the tag matches: narrowing to a nested category enum matches
//! every variant inside that category.

use std::any::Any;
use std::error::Error;

/// Attempt to view `self` as a `T`, handing `self` back untouched on mismatch.
pub trait Narrow<T>: Sized {
    /// Narrow into `T`.
    ///
    /// # Errors
    ///
    /// Returns the original value when it is not a `T`.
    fn narrow(self) -> Result<T, Self>;
}

impl<T> Narrow<T> for Box<dyn Error + Send + Sync>
where
    T: Error + 'static,
{
    fn narrow(self) -> Result<T, Self> {
        self.downcast::<T>().map(|boxed| *boxed)
    }
}

impl<T> Narrow<T> for Box<dyn Error>
where
    T: Error + 'static,
{
    fn narrow(self) -> Result<T, Self> {
        self.downcast::<T>().map(|boxed| *boxed)
    }
}

impl<T> Narrow<T> for Box<dyn Any>
where
    T: Any,
{
    fn narrow(self) -> Result<T, Self> {
        self.downcast::<T>().map(|boxed| *boxed)
    }
}
