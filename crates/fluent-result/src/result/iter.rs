//! Zero-or-one element iterators over a result's payload

use core::iter::FusedIterator;

/// Borrowing iterator over the value of the matching variant
///
/// Yields exactly one element when the variant matches, nothing otherwise.
/// Created by [`Result::stream_success`](super::Result::stream_success) and
/// [`Result::stream_failure`](super::Result::stream_failure).
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: core::option::IntoIter<&'a T>,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(value: Option<&'a T>) -> Self {
        Self {
            inner: value.into_iter(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over the value of the matching variant
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    inner: core::option::IntoIter<T>,
}

impl<T> IntoIter<T> {
    pub(super) fn new(value: Option<T>) -> Self {
        Self {
            inner: value.into_iter(),
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
