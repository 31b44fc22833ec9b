//! Immutable ordered sequence, decoupled from its source collection.
//!
//! `Seq<T>` takes one defensive copy of the source at construction time
//! and never looks at the source again. The buffer is shared behind an
//! `Arc`, so clones are cheap and no mutation API exists.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Immutable ordered sequence of `T`.
///
/// Built once from any finite iterable, preserving its iteration order
/// at the time of the call. Empty input yields an empty sequence.
pub struct Seq<T>(Arc<[T]>);

impl<T> Seq<T> {
    /// The empty sequence.
    pub fn empty() -> Self {
        Seq(Arc::from(Vec::new()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    pub fn first(&self) -> Option<&T> {
        self.0.first()
    }

    pub fn last(&self) -> Option<&T> {
        self.0.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }
}

impl<T> FromIterator<T> for Seq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Seq(iter.into_iter().collect::<Vec<_>>().into())
    }
}

impl<T> From<Vec<T>> for Seq<T> {
    fn from(v: Vec<T>) -> Self {
        Seq(v.into())
    }
}

impl<T: Clone> From<&[T]> for Seq<T> {
    fn from(s: &[T]) -> Self {
        Seq(s.to_vec().into())
    }
}

impl<T, const N: usize> From<[T; N]> for Seq<T> {
    fn from(a: [T; N]) -> Self {
        Seq(a.into_iter().collect::<Vec<_>>().into())
    }
}

impl<T> Default for Seq<T> {
    fn default() -> Self {
        Seq::empty()
    }
}

// Clone shares the buffer; no element copy, no T: Clone bound.
impl<T> Clone for Seq<T> {
    fn clone(&self) -> Self {
        Seq(Arc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for Seq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Seq<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Seq<T> {}

impl<T: Hash> Hash for Seq<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T> Index<usize> for Seq<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<'a, T> IntoIterator for &'a Seq<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Encodes as a plain sequence (a JSON array), not a wrapper object.
impl<T: Serialize> Serialize for Seq<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Seq<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Seq::from(Vec::<T>::deserialize(deserializer)?))
    }
}
