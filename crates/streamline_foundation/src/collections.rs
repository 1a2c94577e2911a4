//! Target containers for collected pipeline output.
//!
//! A [`Container`] is a thin wrapper around the `im` crate's persistent data
//! structures. Its [`ContainerKind`] decides whether duplicates collapse and
//! whether mutation is allowed after construction. Cloning is O(1).

use std::fmt;
use std::hash::Hash;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// The shape of a collected container.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ContainerKind {
    /// Input order and duplicates preserved.
    OrderedList,
    /// One representative per equality class, unspecified order.
    UniqueSet,
    /// Read-only [`ContainerKind::OrderedList`].
    ImmutableOrderedList,
    /// Read-only [`ContainerKind::UniqueSet`].
    ImmutableUniqueSet,
}

impl ContainerKind {
    /// Returns true if duplicates collapse in this kind.
    #[must_use]
    pub const fn is_unique(self) -> bool {
        matches!(self, Self::UniqueSet | Self::ImmutableUniqueSet)
    }

    /// Returns true if mutation is rejected after construction.
    #[must_use]
    pub const fn is_immutable(self) -> bool {
        matches!(self, Self::ImmutableOrderedList | Self::ImmutableUniqueSet)
    }

    /// Returns the read-only counterpart of this kind.
    #[must_use]
    pub const fn frozen(self) -> Self {
        match self {
            Self::OrderedList | Self::ImmutableOrderedList => Self::ImmutableOrderedList,
            Self::UniqueSet | Self::ImmutableUniqueSet => Self::ImmutableUniqueSet,
        }
    }

    /// Returns the mutable counterpart of this kind.
    #[must_use]
    pub const fn thawed(self) -> Self {
        match self {
            Self::OrderedList | Self::ImmutableOrderedList => Self::OrderedList,
            Self::UniqueSet | Self::ImmutableUniqueSet => Self::UniqueSet,
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::OrderedList => "ordered list",
            Self::UniqueSet => "unique set",
            Self::ImmutableOrderedList => "immutable ordered list",
            Self::ImmutableUniqueSet => "immutable unique set",
        };
        f.write_str(name)
    }
}

#[derive(Clone)]
enum Items<T>
where
    T: Clone + Eq + Hash,
{
    List(im::Vector<T>),
    Set(im::HashSet<T>),
}

/// A collected sequence of elements.
///
/// Mutation methods return `Result` and fail with
/// [`ErrorKind::ImmutableViolation`](crate::ErrorKind::ImmutableViolation)
/// when the container kind is read-only.
#[derive(Clone)]
pub struct Container<T>
where
    T: Clone + Eq + Hash,
{
    kind: ContainerKind,
    items: Items<T>,
}

impl<T: Clone + Eq + Hash> Container<T> {
    /// Creates an empty container of the given kind.
    #[must_use]
    pub fn new(kind: ContainerKind) -> Self {
        Self::collect(kind, std::iter::empty())
    }

    /// Collects `items` into a container of the given kind.
    #[must_use]
    pub fn collect<I: IntoIterator<Item = T>>(kind: ContainerKind, items: I) -> Self {
        let items = if kind.is_unique() {
            Items::Set(items.into_iter().collect())
        } else {
            Items::List(items.into_iter().collect())
        };
        Self { kind, items }
    }

    /// Returns the kind of this container.
    #[must_use]
    pub fn kind(&self) -> ContainerKind {
        self.kind
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        match &self.items {
            Items::List(v) => v.len(),
            Items::Set(s) => s.len(),
        }
    }

    /// Returns true if the container is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if the container holds an element equal to `value`.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        match &self.items {
            Items::List(v) => v.contains(value),
            Items::Set(s) => s.contains(value),
        }
    }

    /// Returns the element at `index` for list kinds.
    ///
    /// Sets have no stable positions, so this is always `None` for them.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        match &self.items {
            Items::List(v) => v.get(index),
            Items::Set(_) => None,
        }
    }

    /// Returns an iterator over the elements.
    ///
    /// List kinds iterate in insertion order; set kinds in unspecified order.
    pub fn iter(&self) -> Iter<'_, T> {
        match &self.items {
            Items::List(v) => Iter::List(v.iter()),
            Items::Set(s) => Iter::Set(s.iter()),
        }
    }

    /// Adds an element.
    ///
    /// Returns whether the element was added; a set already holding an
    /// equal element is left unchanged.
    ///
    /// # Errors
    /// Returns `ImmutableViolation` if the container kind is read-only.
    pub fn push(&mut self, value: T) -> Result<bool> {
        self.check_mutable("push")?;
        match &mut self.items {
            Items::List(v) => {
                v.push_back(value);
                Ok(true)
            }
            Items::Set(s) => Ok(s.insert(value).is_none()),
        }
    }

    /// Adds every element of `values`.
    ///
    /// # Errors
    /// Returns `ImmutableViolation` if the container kind is read-only.
    pub fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) -> Result<()> {
        self.check_mutable("extend")?;
        for value in values {
            self.push(value)?;
        }
        Ok(())
    }

    /// Removes one element equal to `value`.
    ///
    /// Lists remove the first occurrence. Returns whether anything was removed.
    ///
    /// # Errors
    /// Returns `ImmutableViolation` if the container kind is read-only.
    pub fn remove(&mut self, value: &T) -> Result<bool> {
        self.check_mutable("remove")?;
        match &mut self.items {
            Items::List(v) => match v.index_of(value) {
                Some(index) => {
                    v.remove(index);
                    Ok(true)
                }
                None => Ok(false),
            },
            Items::Set(s) => Ok(s.remove(value).is_some()),
        }
    }

    /// Removes every element.
    ///
    /// # Errors
    /// Returns `ImmutableViolation` if the container kind is read-only.
    pub fn clear(&mut self) -> Result<()> {
        self.check_mutable("clear")?;
        match &mut self.items {
            Items::List(v) => v.clear(),
            Items::Set(s) => s.clear(),
        }
        Ok(())
    }

    /// Returns a read-only view sharing structure with this container.
    #[must_use]
    pub fn frozen(&self) -> Self {
        Self {
            kind: self.kind.frozen(),
            items: self.items.clone(),
        }
    }

    /// Returns a mutable copy sharing structure with this container.
    #[must_use]
    pub fn thawed(&self) -> Self {
        Self {
            kind: self.kind.thawed(),
            items: self.items.clone(),
        }
    }

    /// Copies the elements into a `Vec`, in iteration order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    fn check_mutable(&self, operation: &'static str) -> Result<()> {
        if self.kind.is_immutable() {
            Err(Error::immutable_violation(operation, self.kind))
        } else {
            Ok(())
        }
    }
}

/// Iterator over the elements of a [`Container`].
pub enum Iter<'a, T>
where
    T: Clone + Eq + Hash,
{
    /// Iterating a list in order.
    List(im::vector::Iter<'a, T>),
    /// Iterating a set.
    Set(im::hashset::Iter<'a, T>),
}

impl<'a, T: Clone + Eq + Hash> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::List(it) => it.next(),
            Self::Set(it) => it.next(),
        }
    }
}

impl<T: Clone + Eq + Hash + fmt::Debug> fmt::Debug for Container<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.items {
            Items::List(v) => f.debug_list().entries(v.iter()).finish(),
            Items::Set(s) => f.debug_set().entries(s.iter()).finish(),
        }
    }
}

impl<T: Clone + Eq + Hash> PartialEq for Container<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.kind != other.kind {
            return false;
        }
        match (&self.items, &other.items) {
            (Items::List(a), Items::List(b)) => a == b,
            (Items::Set(a), Items::Set(b)) => a == b,
            _ => false,
        }
    }
}

impl<T: Clone + Eq + Hash> Eq for Container<T> {}

impl<'a, T: Clone + Eq + Hash> IntoIterator for &'a Container<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
