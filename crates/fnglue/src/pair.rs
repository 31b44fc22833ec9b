//! Immutable heterogeneous two-element tuple.

use serde::{Deserialize, Serialize};

/// Immutable pair of values. No identity beyond its two elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pair<T, U> {
    first: T,
    second: U,
}

/// Construct a [`Pair`] from two values.
pub fn pair<T, U>(x: T, y: U) -> Pair<T, U> {
    Pair::new(x, y)
}

impl<T, U> Pair<T, U> {
    pub fn new(first: T, second: U) -> Self {
        Pair { first, second }
    }

    pub fn first(&self) -> &T {
        &self.first
    }

    pub fn second(&self) -> &U {
        &self.second
    }

    /// Consume the pair into a native tuple.
    pub fn into_inner(self) -> (T, U) {
        (self.first, self.second)
    }

    /// New pair with the elements exchanged.
    pub fn swap(self) -> Pair<U, T> {
        Pair::new(self.second, self.first)
    }

    /// New pair with `f` applied to the first element.
    pub fn map_first<V>(self, f: impl FnOnce(T) -> V) -> Pair<V, U> {
        Pair::new(f(self.first), self.second)
    }

    /// New pair with `f` applied to the second element.
    pub fn map_second<V>(self, f: impl FnOnce(U) -> V) -> Pair<T, V> {
        Pair::new(self.first, f(self.second))
    }
}

impl<T, U> From<(T, U)> for Pair<T, U> {
    fn from((first, second): (T, U)) -> Self {
        Pair::new(first, second)
    }
}

impl<T, U> From<Pair<T, U>> for (T, U) {
    fn from(p: Pair<T, U>) -> Self {
        p.into_inner()
    }
}
