//! Sequence views and the materialization helpers.

use core::{
    fmt,
    iter::StepBy,
    ops::{Deref, Range},
    slice,
};

use crate::{
    Vec,
    error::{Error, Result},
};

/// A read-only, indexable, finite view over a sequence.
///
/// The view either borrows caller storage or owns a buffer that was filled
/// exactly once from a one-shot source. Both dereference to `[T]`, so the
/// full slice API is available and every read is repeatable.
pub enum SequenceView<'a, T> {
    /// Caller-owned storage; no copy was made.
    Borrowed(&'a [T]),
    /// Buffer materialized from a single-pass source (or a moved vector).
    Owned(Vec<T>),
}

static_assertions::assert_impl_all!(SequenceView<'static, u8>: Send, Sync, Clone);

impl<'a, T> SequenceView<'a, T> {
    /// Drains `source` into an owned buffer.
    ///
    /// This is the only place a one-shot iterator is consumed; everything
    /// downstream reads the buffer.
    pub fn materialize<I>(source: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let items: Vec<T> = source.into_iter().collect();
        tracing::trace!(len = items.len(), "materialized single-pass source");
        SequenceView::Owned(items)
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        match self {
            SequenceView::Borrowed(items) => items,
            SequenceView::Owned(items) => items.as_slice(),
        }
    }

    /// Returns `true` if the view aliases caller storage.
    pub fn is_borrowed(&self) -> bool {
        matches!(self, SequenceView::Borrowed(_))
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= len`.
    pub fn index_at(&self, index: usize) -> Result<&T> {
        let len = self.len();
        self.as_slice()
            .get(index)
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    /// Lazily yields every `step`-th element of `self[start..stop]`.
    ///
    /// `start` and `stop` are clamped to the length of the view, and a missing
    /// `stop` means "until the end". A `start` past `stop` yields nothing.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `step` is zero.
    pub fn slice_at(
        &self,
        start: usize,
        stop: Option<usize>,
        step: usize,
    ) -> Result<StepBy<slice::Iter<'_, T>>> {
        if step == 0 {
            return Err(Error::invalid_argument("step", "must be at least 1"));
        }

        let len = self.len();
        let stop = stop.map_or(len, |stop| stop.min(len));
        let start = start.min(stop);
        Ok(self.as_slice()[start..stop].iter().step_by(step))
    }

    /// Converts into an owned vector, cloning only if the view is borrowed.
    pub fn into_vec(self) -> Vec<T>
    where
        T: Clone,
    {
        match self {
            SequenceView::Borrowed(items) => items.to_vec(),
            SequenceView::Owned(items) => items,
        }
    }

    /// Restricts the view to `range` without copying.
    ///
    /// Callers guarantee `range` lies within `0..len`.
    pub(crate) fn narrow(self, range: Range<usize>) -> Self {
        match self {
            SequenceView::Borrowed(items) => SequenceView::Borrowed(&items[range]),
            SequenceView::Owned(mut items) => {
                items.truncate(range.end);
                items.drain(..range.start);
                SequenceView::Owned(items)
            }
        }
    }
}

impl<T> Deref for SequenceView<'_, T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsRef<[T]> for SequenceView<'_, T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: Clone> Clone for SequenceView<'_, T> {
    fn clone(&self) -> Self {
        match self {
            SequenceView::Borrowed(items) => SequenceView::Borrowed(*items),
            SequenceView::Owned(items) => SequenceView::Owned(items.clone()),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SequenceView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, U> PartialEq<SequenceView<'_, U>> for SequenceView<'_, T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &SequenceView<'_, U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for SequenceView<'_, T> {}

impl<T, U> PartialEq<[U]> for SequenceView<'_, T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T, U> PartialEq<&[U]> for SequenceView<'_, T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T, U> PartialEq<Vec<U>> for SequenceView<'_, T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vec<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T, U, const N: usize> PartialEq<[U; N]> for SequenceView<'_, T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<'a, T> From<&'a [T]> for SequenceView<'a, T> {
    fn from(items: &'a [T]) -> Self {
        SequenceView::Borrowed(items)
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for SequenceView<'a, T> {
    fn from(items: &'a [T; N]) -> Self {
        SequenceView::Borrowed(items.as_slice())
    }
}

impl<'a, T> From<&'a Vec<T>> for SequenceView<'a, T> {
    fn from(items: &'a Vec<T>) -> Self {
        SequenceView::Borrowed(items.as_slice())
    }
}

impl<'a, 'b, T> From<&'b SequenceView<'a, T>> for SequenceView<'b, T> {
    fn from(view: &'b SequenceView<'a, T>) -> Self {
        SequenceView::Borrowed(view.as_slice())
    }
}

impl<T> From<Vec<T>> for SequenceView<'_, T> {
    fn from(items: Vec<T>) -> Self {
        SequenceView::Owned(items)
    }
}

impl<T, const N: usize> From<[T; N]> for SequenceView<'_, T> {
    fn from(items: [T; N]) -> Self {
        SequenceView::Owned(Vec::from(items))
    }
}

impl<T> FromIterator<T> for SequenceView<'_, T> {
    fn from_iter<I: IntoIterator<Item = T>>(source: I) -> Self {
        SequenceView::materialize(source)
    }
}

impl<'s, T> IntoIterator for &'s SequenceView<'_, T> {
    type Item = &'s T;
    type IntoIter = slice::Iter<'s, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

/// Adds [`materialize`](IteratorExt::materialize) to every iterator.
pub trait IteratorExt: Iterator + Sized {
    /// Collects the remaining items into an owned [`SequenceView`].
    fn materialize<'a>(self) -> SequenceView<'a, Self::Item>
    where
        Self::Item: 'a,
    {
        SequenceView::materialize(self)
    }
}

impl<I: Iterator> IteratorExt for I {}

/// Returns the number of elements of a sequence in O(1).
///
/// A one-shot iterator has no length until it is read. Materialize it once
/// and keep the view, so the same buffer serves the count and the elements:
///
/// ```
/// use auxiliary_core::seq::{IteratorExt, length};
///
/// let view = "a b c".split(' ').materialize();
/// assert_eq!(length(&view), 3);
/// assert_eq!(view.len(), 3);
/// assert_eq!(view[2], "c");
/// ```
///
/// Use [`ilen`] when only the count is needed.
pub fn length<'a, T: 'a>(source: impl Into<SequenceView<'a, T>>) -> usize {
    let source: SequenceView<'a, T> = source.into();
    source.len()
}

/// Counts the items of an arbitrary iterable by consuming it.
///
/// A one-shot source is exhausted afterwards. Materialize it first if both the
/// count and the items are needed.
pub fn ilen<I: IntoIterator>(source: I) -> usize {
    source.into_iter().count()
}
