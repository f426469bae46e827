//! Iterators over the members of a [`Set`](super::Set).
//!
//! All iterators traverse members in insertion order.

use std::iter::FusedIterator;

use crate::key::HashKey;

/// An iterator over the members of a [`Set`](super::Set).
pub struct Iter<'a, T> {
    pub(super) inner: indexmap::map::Values<'a, HashKey, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

/// An iterator over the hash keys of a [`Set`](super::Set).
pub struct Keys<'a, T> {
    pub(super) inner: indexmap::map::Keys<'a, HashKey, T>,
}

impl<'a, T> Iterator for Keys<'a, T> {
    type Item = &'a HashKey;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Keys<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for Keys<'_, T> {}

/// An owning iterator over the members of a [`Set`](super::Set).
pub struct IntoIter<T> {
    pub(super) inner: indexmap::map::IntoValues<HashKey, T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}
