//! Helpers over containers.
//!
//! Containers are described by small capability traits rather than by
//! concrete type, so one generic function serves every container that has
//! the capabilities it needs:
//!
//! - [`Length`]: the number of elements, enough for emptiness queries.
//! - [`Indexed`]: positional access, used by [`indexed`] for fixed arrays
//!   and growable lists.
//! - [`Entries`]: key/value iteration, used by [`mapping`].
//!
//! Lazy sequences need no trait: [`sequence`] accepts any `IntoIterator`.
//!
//! Every container argument is an `Option`. An absent container is always
//! reported as [`Error::MissingArgument`](crate::Error::MissingArgument)
//! carrying the container's [`Shape::NAME`], and is checked before any other
//! argument.

use alloc::collections::{BTreeMap, BTreeSet, VecDeque};

use crate::error::Result;
use crate::validate::require_present;
use crate::Vec;

pub mod indexed;
pub mod mapping;
pub mod sequence;

/// Parameter name used when a container of this shape is missing.
pub trait Shape {
    const NAME: &'static str;
}

pub trait Length: Shape {
    fn length(&self) -> usize;
}

/// Positional access over `0..length()`.
pub trait Indexed: Length {
    type Item;

    fn get_at(&self, index: usize) -> Option<&Self::Item>;

    /// Elements in positional order.
    fn elements(&self) -> impl Iterator<Item = &Self::Item> {
        (0..self.length()).filter_map(move |index| self.get_at(index))
    }
}

/// Key/value iteration. Order is whatever the mapping itself iterates in.
pub trait Entries: Length {
    type Key;
    type Value;

    fn entries(&self) -> impl Iterator<Item = (&Self::Key, &Self::Value)>;
}

pub(crate) const ARRAY: &str = "array";
pub(crate) const LIST: &str = "list";
pub(crate) const DICTIONARY: &str = "dictionary";
pub(crate) const COLLECTION: &str = "collection";

/// Whether `container` has no elements.
///
/// ```
/// use konvenience_core::containers::{is_empty, is_not_empty};
///
/// assert_eq!(is_empty(Some(&Vec::<u8>::new())), Ok(true));
/// assert_eq!(is_not_empty(Some(&[1, 2, 3])), Ok(true));
/// assert!(is_empty(None::<&Vec<u8>>).is_err());
/// ```
pub fn is_empty<C>(container: Option<&C>) -> Result<bool>
where
    C: Length + ?Sized,
{
    let container = require_present(container, C::NAME)?;
    Ok(container.length() == 0)
}

/// Inverse of [`is_empty`], with the same failure on an absent container.
pub fn is_not_empty<C>(container: Option<&C>) -> Result<bool>
where
    C: Length + ?Sized,
{
    is_empty(container).map(|empty| !empty)
}

// ============================================================================
// Growable lists
// ============================================================================

impl<T> Shape for Vec<T> {
    const NAME: &'static str = LIST;
}

impl<T> Length for Vec<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> Indexed for Vec<T> {
    type Item = T;

    fn get_at(&self, index: usize) -> Option<&T> {
        self.get(index)
    }

    fn elements(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T> Shape for VecDeque<T> {
    const NAME: &'static str = LIST;
}

impl<T> Length for VecDeque<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> Indexed for VecDeque<T> {
    type Item = T;

    fn get_at(&self, index: usize) -> Option<&T> {
        self.get(index)
    }

    fn elements(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<A: smallvec::Array> Shape for smallvec::SmallVec<A> {
    const NAME: &'static str = LIST;
}

impl<A: smallvec::Array> Length for smallvec::SmallVec<A> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<A: smallvec::Array> Indexed for smallvec::SmallVec<A> {
    type Item = A::Item;

    fn get_at(&self, index: usize) -> Option<&A::Item> {
        self.as_slice().get(index)
    }

    fn elements(&self) -> impl Iterator<Item = &A::Item> {
        self.iter()
    }
}

// ============================================================================
// Fixed-size arrays
// ============================================================================

impl<T> Shape for [T] {
    const NAME: &'static str = ARRAY;
}

impl<T> Length for [T] {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> Indexed for [T] {
    type Item = T;

    fn get_at(&self, index: usize) -> Option<&T> {
        self.get(index)
    }

    fn elements(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T, const N: usize> Shape for [T; N] {
    const NAME: &'static str = ARRAY;
}

impl<T, const N: usize> Length for [T; N] {
    fn length(&self) -> usize {
        N
    }
}

impl<T, const N: usize> Indexed for [T; N] {
    type Item = T;

    fn get_at(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    fn elements(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

// ============================================================================
// Keyed mappings
// ============================================================================

impl<K, V> Shape for BTreeMap<K, V> {
    const NAME: &'static str = DICTIONARY;
}

impl<K, V> Length for BTreeMap<K, V> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<K, V> Entries for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }
}

impl<K, V, S> Shape for hashbrown::HashMap<K, V, S> {
    const NAME: &'static str = DICTIONARY;
}

impl<K, V, S> Length for hashbrown::HashMap<K, V, S> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> Entries for hashbrown::HashMap<K, V, S> {
    type Key = K;
    type Value = V;

    fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }
}

#[cfg(feature = "std")]
impl<K, V, S> Shape for std::collections::HashMap<K, V, S> {
    const NAME: &'static str = DICTIONARY;
}

#[cfg(feature = "std")]
impl<K, V, S> Length for std::collections::HashMap<K, V, S> {
    fn length(&self) -> usize {
        self.len()
    }
}

#[cfg(feature = "std")]
impl<K, V, S> Entries for std::collections::HashMap<K, V, S> {
    type Key = K;
    type Value = V;

    fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }
}

// ============================================================================
// Plain collections (length only)
// ============================================================================

impl<T> Shape for BTreeSet<T> {
    const NAME: &'static str = COLLECTION;
}

impl<T> Length for BTreeSet<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T, S> Shape for hashbrown::HashSet<T, S> {
    const NAME: &'static str = COLLECTION;
}

impl<T, S> Length for hashbrown::HashSet<T, S> {
    fn length(&self) -> usize {
        self.len()
    }
}

#[cfg(feature = "std")]
impl<T, S> Shape for std::collections::HashSet<T, S> {
    const NAME: &'static str = COLLECTION;
}

#[cfg(feature = "std")]
impl<T, S> Length for std::collections::HashSet<T, S> {
    fn length(&self) -> usize {
        self.len()
    }
}
