//! Persistent linked lists and the non-empty list built on them.
//!
//! [`LinkList`] is an immutable, `Arc`-shared list that may be empty. Tails are
//! shared between lists, so `cons` is O(1) and cloning a list is a pointer
//! copy. [`lazy_concat`] builds a view that walks the first list and then the
//! second without copying either; [`eager_concat`] copies the first list's
//! cells and shares the second.
//!
//! [`NonEmptyList`] holds its first element directly, so it cannot be built
//! without at least one element.

use std::fmt;
use std::sync::Arc;

use crate::{Error, Result};

/// An immutable, possibly empty, structurally shared list.
pub struct LinkList<T> {
    node: Arc<Node<T>>,
}

enum Node<T> {
    Nil,
    Cons { head: T, tail: LinkList<T> },
    // Never built with an empty operand, so a Concat node is never empty.
    Concat { first: LinkList<T>, second: LinkList<T> },
}

impl<T> LinkList<T> {
    /// The empty list.
    #[must_use]
    pub fn nil() -> Self {
        Self {
            node: Arc::new(Node::Nil),
        }
    }

    /// Prepend `head` to `tail`, sharing the tail.
    #[must_use]
    pub fn cons(head: T, tail: Self) -> Self {
        Self {
            node: Arc::new(Node::Cons { head, tail }),
        }
    }

    /// Build a list holding `items` in order.
    #[must_use]
    pub fn of(items: Vec<T>) -> Self {
        items
            .into_iter()
            .rev()
            .fold(Self::nil(), |tail, head| Self::cons(head, tail))
    }

    /// True when the list holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(*self.node, Node::Nil)
    }

    /// Number of elements. Walks the whole list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Iterate the elements in order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            pending: vec![self],
        }
    }

    /// Fold on the shape of the list: `on_present` receives the first element
    /// and the rest, `on_empty` runs for the empty list.
    pub fn read<R>(&self, on_present: impl FnOnce(&T, Self) -> R, on_empty: impl FnOnce() -> R) -> R {
        match self.uncons() {
            Some((head, rest)) => on_present(head, rest),
            None => on_empty(),
        }
    }

    fn uncons(&self) -> Option<(&T, Self)> {
        // Right operands of the Concat nodes walked through, innermost last.
        let mut after: Vec<&Self> = Vec::new();
        let mut list = self;
        loop {
            match &*list.node {
                Node::Nil => list = after.pop()?,
                Node::Cons { head, tail } => {
                    let rest = after
                        .iter()
                        .rev()
                        .fold(tail.clone(), |rest, second| lazy_concat(&rest, second));
                    return Some((head, rest));
                }
                Node::Concat { first, second } => {
                    after.push(second);
                    list = first;
                }
            }
        }
    }

    /// Right fold: `combine(x1, combine(x2, ... combine(xn, accumulator)))`.
    pub fn fold_right<R>(&self, accumulator: R, combine: impl Fn(&T, R) -> R) -> R {
        let items: Vec<&T> = self.iter().collect();
        items
            .into_iter()
            .rev()
            .fold(accumulator, |acc, item| combine(item, acc))
    }

    /// Copy the elements out into a `Vec`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// True when both lists are the very same shared structure.
    #[must_use]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.node, &b.node)
    }
}

/// Concatenate without copying.
///
/// Returns `second` itself when `first` is empty and `first` itself when
/// `second` is empty; [`LinkList::ptr_eq`] holds against the returned operand.
#[must_use]
pub fn lazy_concat<T>(first: &LinkList<T>, second: &LinkList<T>) -> LinkList<T> {
    if first.is_empty() {
        second.clone()
    } else if second.is_empty() {
        first.clone()
    } else {
        LinkList {
            node: Arc::new(Node::Concat {
                first: first.clone(),
                second: second.clone(),
            }),
        }
    }
}

/// Concatenate by copying the cells of `first` in front of a shared `second`.
///
/// Returns `second` itself when `first` is empty.
#[must_use]
pub fn eager_concat<T: Clone>(first: &LinkList<T>, second: &LinkList<T>) -> LinkList<T> {
    let items: Vec<&T> = first.iter().collect();
    items
        .into_iter()
        .rev()
        .fold(second.clone(), |tail, head| LinkList::cons(head.clone(), tail))
}

impl<T> Clone for LinkList<T> {
    fn clone(&self) -> Self {
        Self {
            node: Arc::clone(&self.node),
        }
    }
}

// Dropping a node drops its child lists, so the default drop recurses once
// per cell. Uniquely owned children are detached onto a worklist instead.
impl<T> Drop for LinkList<T> {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_children(&mut self.node, &mut pending);
        while let Some(mut node) = pending.pop() {
            detach_children(&mut node, &mut pending);
        }
    }
}

fn detach_children<T>(node: &mut Arc<Node<T>>, pending: &mut Vec<Arc<Node<T>>>) {
    let Some(node) = Arc::get_mut(node) else {
        return;
    };
    match node {
        Node::Nil => {}
        Node::Cons { tail, .. } => pending.push(take_node(tail)),
        Node::Concat { first, second } => {
            pending.push(take_node(second));
            pending.push(take_node(first));
        }
    }
}

fn take_node<T>(list: &mut LinkList<T>) -> Arc<Node<T>> {
    std::mem::replace(&mut list.node, Arc::new(Node::Nil))
}

impl<T> Default for LinkList<T> {
    fn default() -> Self {
        Self::nil()
    }
}

impl<T: PartialEq> PartialEq for LinkList<T> {
    fn eq(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other) || self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkList<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for LinkList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::of(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a LinkList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over a [`LinkList`].
pub struct Iter<'a, T> {
    pending: Vec<&'a LinkList<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(list) = self.pending.pop() {
            match &*list.node {
                Node::Nil => {}
                Node::Cons { head, tail } => {
                    self.pending.push(tail);
                    return Some(head);
                }
                Node::Concat { first, second } => {
                    self.pending.push(second);
                    self.pending.push(first);
                }
            }
        }
        None
    }
}

/// A list statically guaranteed to hold at least one element.
#[derive(Clone, PartialEq, Eq)]
pub struct NonEmptyList<T> {
    first: T,
    rest: LinkList<T>,
}

impl<T> NonEmptyList<T> {
    /// Build from a first element and a possibly empty rest.
    #[must_use]
    pub const fn cons(first: T, rest: LinkList<T>) -> Self {
        Self { first, rest }
    }

    /// Build from a first element followed by `more`.
    #[must_use]
    pub fn of(first: T, more: Vec<T>) -> Self {
        Self::cons(first, LinkList::of(more))
    }

    /// A single-element list.
    #[must_use]
    pub fn singleton(first: T) -> Self {
        Self::cons(first, LinkList::nil())
    }

    /// Build from a `Vec`, or `None` when it is empty.
    #[must_use]
    pub fn from_vec(items: Vec<T>) -> Option<Self> {
        let mut items = items.into_iter();
        items
            .next()
            .map(|first| Self::cons(first, items.collect()))
    }

    /// The first element.
    #[must_use]
    pub const fn first(&self) -> &T {
        &self.first
    }

    /// Everything after the first element.
    #[must_use]
    pub const fn rest(&self) -> &LinkList<T> {
        &self.rest
    }

    /// Number of elements, always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rest.len().saturating_add(1)
    }

    /// Always false; present for API symmetry with other collections.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Iterate the elements in order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        std::iter::once(&self.first).chain(self.rest.iter())
    }

    /// Apply `f` to every element.
    #[must_use]
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> NonEmptyList<U> {
        NonEmptyList::cons(f(&self.first), self.rest.iter().map(f).collect())
    }

    /// Combine all elements left to right, starting from the first.
    #[must_use]
    pub fn reduce(&self, combine: impl Fn(T, &T) -> T) -> T
    where
        T: Clone,
    {
        self.rest.iter().fold(self.first.clone(), combine)
    }

    /// Append `other` as a shared view; the existing cells are not copied.
    #[must_use]
    pub fn concat_lazy(self, other: &LinkList<T>) -> Self {
        Self {
            rest: lazy_concat(&self.rest, other),
            first: self.first,
        }
    }

    /// Append `other`, copying this list's cells.
    #[must_use]
    pub fn concat_eager(self, other: &LinkList<T>) -> Self
    where
        T: Clone,
    {
        Self {
            rest: eager_concat(&self.rest, other),
            first: self.first,
        }
    }

    /// View as a plain [`LinkList`].
    #[must_use]
    pub fn into_link_list(self) -> LinkList<T> {
        LinkList::cons(self.first, self.rest)
    }

    /// Copy the elements out into a `Vec`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T> TryFrom<Vec<T>> for NonEmptyList<T> {
    type Error = Error;

    fn try_from(items: Vec<T>) -> Result<Self> {
        Self::from_vec(items).ok_or(Error::EmptyList)
    }
}

impl<T> From<NonEmptyList<T>> for LinkList<T> {
    fn from(list: NonEmptyList<T>) -> Self {
        list.into_link_list()
    }
}

impl<T: fmt::Debug> fmt::Debug for NonEmptyList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{LinkList, NonEmptyList};

    impl<T: Serialize> Serialize for LinkList<T> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_seq(self.iter())
        }
    }

    impl<'de, T: Deserialize<'de>> Deserialize<'de> for LinkList<T> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            Vec::<T>::deserialize(deserializer).map(LinkList::of)
        }
    }

    impl<T: Serialize> Serialize for NonEmptyList<T> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_seq(self.iter())
        }
    }

    impl<'de, T: Deserialize<'de>> Deserialize<'de> for NonEmptyList<T> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            Vec::<T>::deserialize(deserializer).and_then(|items| {
                NonEmptyList::from_vec(items).ok_or_else(|| D::Error::custom(crate::Error::EmptyList))
            })
        }
    }
}
