//! Validator constructors and combinators.
//!
//! Every combinator keeps the error stream lazy. [`compose`] only starts a
//! validator once the ones before it are drained, so wrapping it in
//! [`first_of`] never invokes anything after the first failing validator.

use std::fmt;
use std::iter;
use std::marker::PhantomData;

use crate::validator::{BoxedValidator, Errors, Validator};

// ============================================================================
// Predicates
// ============================================================================

/// Raises one generated error when a predicate disagrees with its expectation.
pub struct AcceptIf<P, G> {
    test: P,
    generate: G,
    accept_when: bool,
}

impl<T, E, P, G> Validator<T, E> for AcceptIf<P, G>
where
    P: Fn(&T) -> bool,
    G: Fn(&T) -> E,
{
    fn validate<'a>(&'a self, item: &'a T) -> Errors<'a, E>
    where
        E: 'a,
    {
        if (self.test)(item) == self.accept_when {
            Box::new(iter::empty())
        } else {
            Box::new(iter::once_with(move || (self.generate)(item)))
        }
    }
}

impl<P, G> fmt::Debug for AcceptIf<P, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AcceptIf")
            .field("accept_when", &self.accept_when)
            .finish_non_exhaustive()
    }
}

/// Accept values passing `test`; reject the rest with `error`.
pub fn accept_if<T, E: Clone>(test: impl Fn(&T) -> bool, error: E) -> impl Validator<T, E> {
    accept_if_with(test, move |_: &T| error.clone())
}

/// Accept values passing `test`; reject the rest with an error built from
/// the value.
pub fn accept_if_with<T, E, P, G>(test: P, generate: G) -> AcceptIf<P, G>
where
    P: Fn(&T) -> bool,
    G: Fn(&T) -> E,
{
    AcceptIf {
        test,
        generate,
        accept_when: true,
    }
}

/// Reject values passing `test` with `error`.
///
/// # Examples
///
/// ```
/// use verdict_validation::{reject_if, Validator};
///
/// let not_zero = reject_if(|n: &i32| *n == 0, "zero");
/// assert!(not_zero.apply(3).is_success_of(&3));
/// assert!(not_zero.apply(0).failure_value().is_some());
/// ```
pub fn reject_if<T, E: Clone>(test: impl Fn(&T) -> bool, error: E) -> impl Validator<T, E> {
    reject_if_with(test, move |_: &T| error.clone())
}

/// Reject values passing `test` with an error built from the value.
pub fn reject_if_with<T, E, P, G>(test: P, generate: G) -> AcceptIf<P, G>
where
    P: Fn(&T) -> bool,
    G: Fn(&T) -> E,
{
    AcceptIf {
        test,
        generate,
        accept_when: false,
    }
}

/// A validator backed by a function returning every error at once.
pub struct FromFn<F> {
    check: F,
}

impl<T, E, F> Validator<T, E> for FromFn<F>
where
    F: Fn(&T) -> Vec<E>,
{
    fn validate<'a>(&'a self, item: &'a T) -> Errors<'a, E>
    where
        E: 'a,
    {
        Box::new((self.check)(item).into_iter())
    }
}

/// Build a validator from a function; an empty `Vec` means valid.
pub fn from_fn<T, E, F>(check: F) -> FromFn<F>
where
    F: Fn(&T) -> Vec<E>,
{
    FromFn { check }
}

/// A validator whose check can itself fail.
pub struct TryTo<F, H, X> {
    check: F,
    on_error: H,
    _error: PhantomData<fn() -> X>,
}

impl<T, E, X, F, H> Validator<T, E> for TryTo<F, H, X>
where
    F: Fn(&T) -> Result<Vec<E>, X>,
    H: Fn(X) -> E,
{
    fn validate<'a>(&'a self, item: &'a T) -> Errors<'a, E>
    where
        E: 'a,
    {
        match (self.check)(item) {
            Ok(errors) => Box::new(errors.into_iter()),
            Err(error) => {
                tracing::trace!("validation check failed, reporting as one error");
                Box::new(iter::once((self.on_error)(error)))
            }
        }
    }
}

/// Build a validator from a fallible check; an `Err` becomes one error via
/// `on_error`.
pub fn try_to<T, E, X, F, H>(check: F, on_error: H) -> TryTo<F, H, X>
where
    F: Fn(&T) -> Result<Vec<E>, X>,
    H: Fn(X) -> E,
{
    TryTo {
        check,
        on_error,
        _error: PhantomData,
    }
}

// ============================================================================
// Composition
// ============================================================================

/// Any number of validators whose errors are concatenated in order.
pub struct Compose<T, E> {
    validators: Vec<BoxedValidator<T, E>>,
}

impl<T, E> Compose<T, E> {
    /// An empty composition. It accepts everything.
    pub const fn new() -> Self {
        Self {
            validators: Vec::new(),
        }
    }

    /// Append a validator.
    #[must_use]
    pub fn with(mut self, validator: impl Validator<T, E> + 'static) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    /// Number of composed validators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// True when nothing has been composed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

impl<T, E> Default for Compose<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> FromIterator<BoxedValidator<T, E>> for Compose<T, E> {
    fn from_iter<I: IntoIterator<Item = BoxedValidator<T, E>>>(iter: I) -> Self {
        Self {
            validators: iter.into_iter().collect(),
        }
    }
}

impl<T, E> fmt::Debug for Compose<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Compose")
            .field("validators", &self.validators.len())
            .finish()
    }
}

impl<T, E> Validator<T, E> for Compose<T, E> {
    fn validate<'a>(&'a self, item: &'a T) -> Errors<'a, E>
    where
        E: 'a,
    {
        Box::new(
            self.validators
                .iter()
                .flat_map(move |validator| validator.validate(item)),
        )
    }
}

/// Compose validators; every one runs and all errors are kept, in order.
///
/// # Examples
///
/// ```
/// use verdict_validation::{compose, reject_if, reject_if_with, Validator};
///
/// let fizzbuzz = compose([
///     reject_if(|n: &i32| n % 3 == 0, "fizz".to_string()).boxed(),
///     reject_if_with(|n: &i32| n % 5 == 0, |n: &i32| format!("{n} is a buzz")).boxed(),
/// ]);
///
/// let failed = fizzbuzz.apply(15).failure_value().map(|f| f.into_error_list());
/// assert_eq!(failed, Some(vec!["fizz".to_string(), "15 is a buzz".to_string()]));
/// ```
pub fn compose<T, E>(validators: impl IntoIterator<Item = BoxedValidator<T, E>>) -> Compose<T, E> {
    validators.into_iter().collect()
}

/// Keeps only the first error of the wrapped validator.
#[derive(Debug, Clone)]
pub struct FirstOf<V> {
    inner: V,
}

impl<T, E, V> Validator<T, E> for FirstOf<V>
where
    V: Validator<T, E>,
{
    fn validate<'a>(&'a self, item: &'a T) -> Errors<'a, E>
    where
        E: 'a,
    {
        Box::new(self.inner.validate(item).take(1))
    }
}

/// Stop at the first error `inner` produces.
pub const fn first_of<V>(inner: V) -> FirstOf<V> {
    FirstOf { inner }
}

/// Runs the wrapped validator only when a predicate holds.
pub struct OnlyIf<P, V> {
    condition: P,
    inner: V,
}

impl<T, E, P, V> Validator<T, E> for OnlyIf<P, V>
where
    P: Fn(&T) -> bool,
    V: Validator<T, E>,
{
    fn validate<'a>(&'a self, item: &'a T) -> Errors<'a, E>
    where
        E: 'a,
    {
        if (self.condition)(item) {
            self.inner.validate(item)
        } else {
            Box::new(iter::empty())
        }
    }
}

/// Validate with `inner` only when `condition` holds; otherwise accept
/// without calling it.
pub fn only_if<T, P, V>(condition: P, inner: V) -> OnlyIf<P, V>
where
    P: Fn(&T) -> bool,
{
    OnlyIf { condition, inner }
}

/// Rewrites each error of the wrapped validator.
pub struct MappingErrors<V, M, E0> {
    inner: V,
    mapping: M,
    _source: PhantomData<fn() -> E0>,
}

impl<T, E0, E1, V, M> Validator<T, E1> for MappingErrors<V, M, E0>
where
    V: Validator<T, E0>,
    M: Fn(&T, E0) -> E1,
{
    fn validate<'a>(&'a self, item: &'a T) -> Errors<'a, E1>
    where
        E1: 'a,
    {
        Box::new(
            self.inner
                .validate(item)
                .map(move |error| (self.mapping)(item, error)),
        )
    }
}

/// Pass every `(item, error)` pair of `inner` through `mapping`.
pub fn mapping_errors<T, E0, E1, V, M>(inner: V, mapping: M) -> MappingErrors<V, M, E0>
where
    V: Validator<T, E0>,
    M: Fn(&T, E0) -> E1,
{
    MappingErrors {
        inner,
        mapping,
        _source: PhantomData,
    }
}

// ============================================================================
// Structure
// ============================================================================

/// Validates a part of the value reached through an accessor.
pub struct On<A, V, T1> {
    accessor: A,
    inner: V,
    _part: PhantomData<fn() -> T1>,
}

impl<T, T1, E, A, V> Validator<T, E> for On<A, V, T1>
where
    A: Fn(&T) -> &T1,
    V: Validator<T1, E>,
{
    fn validate<'a>(&'a self, item: &'a T) -> Errors<'a, E>
    where
        E: 'a,
    {
        self.inner.validate((self.accessor)(item))
    }
}

/// Validate the field `accessor` borrows with `inner`.
///
/// # Examples
///
/// ```
/// use verdict_validation::{accept_if, on, Validator};
///
/// struct User {
///     age: u32,
/// }
///
/// let adult = on(|user: &User| &user.age, accept_if(|age: &u32| *age >= 18, "minor"));
/// assert!(adult.apply(User { age: 12 }).failure_value().is_some());
/// ```
pub fn on<T, T1, E, A, V>(accessor: A, inner: V) -> On<A, V, T1>
where
    A: Fn(&T) -> &T1,
    V: Validator<T1, E>,
{
    On {
        accessor,
        inner,
        _part: PhantomData,
    }
}

/// Validates a value computed from the item rather than borrowed from it.
pub struct OnDerived<A, V, T1> {
    derive: A,
    inner: V,
    _part: PhantomData<fn() -> T1>,
}

impl<T, T1, E, A, V> Validator<T, E> for OnDerived<A, V, T1>
where
    A: Fn(&T) -> T1,
    V: Validator<T1, E>,
{
    fn validate<'a>(&'a self, item: &'a T) -> Errors<'a, E>
    where
        E: 'a,
    {
        let part = (self.derive)(item);
        // The part is owned here, so its errors are drained before it drops.
        let errors: Vec<E> = self.inner.validate(&part).collect();
        Box::new(errors.into_iter())
    }
}

/// Validate the value `derive` computes from the item with `inner`.
///
/// Use [`on`] when the part can be borrowed; this form covers projections
/// such as lengths or normalized copies.
///
/// # Examples
///
/// ```
/// use verdict_validation::{accept_if, on_derived, Validator};
///
/// let short = on_derived(|name: &String| name.chars().count(), accept_if(|n: &usize| *n <= 8, "too long"));
/// assert!(short.apply("ada".to_string()).success_value().is_some());
/// assert!(short.apply("grace hopper".to_string()).failure_value().is_some());
/// ```
pub fn on_derived<T, T1, E, A, V>(derive: A, inner: V) -> OnDerived<A, V, T1>
where
    A: Fn(&T) -> T1,
    V: Validator<T1, E>,
{
    OnDerived {
        derive,
        inner,
        _part: PhantomData,
    }
}

/// Validates every element of a collection reached through an accessor.
pub struct OnEach<A, V, C: ?Sized, T1> {
    accessor: A,
    inner: V,
    _elements: PhantomData<fn(&C) -> &T1>,
}

impl<T, T1, C, E, A, V> Validator<T, E> for OnEach<A, V, C, T1>
where
    C: ?Sized,
    A: Fn(&T) -> &C,
    for<'x> &'x C: IntoIterator<Item = &'x T1>,
    V: Validator<T1, E>,
{
    fn validate<'a>(&'a self, item: &'a T) -> Errors<'a, E>
    where
        E: 'a,
    {
        let elements = IntoIterator::into_iter((self.accessor)(item));
        Box::new(elements.flat_map(move |element| self.inner.validate(element)))
    }
}

/// Validate each element of the collection `accessor` borrows with `inner`,
/// concatenating the errors in iteration order.
pub fn on_each<T, T1, C, E, A, V>(accessor: A, inner: V) -> OnEach<A, V, C, T1>
where
    C: ?Sized,
    A: Fn(&T) -> &C,
    for<'x> &'x C: IntoIterator<Item = &'x T1>,
    V: Validator<T1, E>,
{
    OnEach {
        accessor,
        inner,
        _elements: PhantomData,
    }
}

/// Validates a derived part of the value whose derivation can fail.
pub struct TryOn<A, H, V, T1, X> {
    accessor: A,
    on_error: H,
    inner: V,
    _part: PhantomData<fn() -> (T1, X)>,
}

impl<T, T1, X, E, A, H, V> Validator<T, E> for TryOn<A, H, V, T1, X>
where
    A: Fn(&T) -> Result<T1, X>,
    H: Fn(X) -> E,
    V: Validator<T1, E>,
{
    fn validate<'a>(&'a self, item: &'a T) -> Errors<'a, E>
    where
        E: 'a,
    {
        match (self.accessor)(item) {
            Ok(part) => {
                // The part is owned here, so its errors are drained before it drops.
                let errors: Vec<E> = self.inner.validate(&part).collect();
                Box::new(errors.into_iter())
            }
            Err(error) => {
                tracing::trace!("accessor failed, reporting as one error");
                Box::new(iter::once((self.on_error)(error)))
            }
        }
    }
}

/// Validate the value `accessor` derives with `inner`; an accessor `Err`
/// becomes one error via `on_error`.
pub fn try_on<T, T1, X, E, A, H, V>(accessor: A, on_error: H, inner: V) -> TryOn<A, H, V, T1, X>
where
    A: Fn(&T) -> Result<T1, X>,
    H: Fn(X) -> E,
    V: Validator<T1, E>,
{
    TryOn {
        accessor,
        on_error,
        inner,
        _part: PhantomData,
    }
}
