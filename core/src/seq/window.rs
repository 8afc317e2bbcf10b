//! Sliding windows and chunks.
//!
//! ## Invariants
//!
//! * Window `k` starts at `k * step` and never extends past the source.
//! * Without `partial`, every window has exactly `width` elements; there are
//!   `(len - width) / step + 1` of them when `width <= len`, otherwise none.
//! * With `partial`, a window starts at every multiple of `step` below `len`
//!   and trailing windows shrink instead of being dropped.
//! * Windows borrow the parent buffer; a [`Windowed`] keeps its parent alive
//!   and rebuilds the windows on every call to [`Windowed::iter`].

use core::iter::FusedIterator;

use crate::{
    error::{Error, Result},
    seq::SequenceView,
};

/// Placement rules shared by [`Windowed`] and [`Windows`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Shape {
    width: usize,
    step: usize,
    partial: bool,
}

impl Shape {
    fn new(width: usize, step: usize, partial: bool) -> Result<Self> {
        if step == 0 {
            return Err(Error::invalid_argument("step", "must be at least 1"));
        }
        Ok(Self {
            width,
            step,
            partial,
        })
    }

    /// Number of windows over a source of `len` elements.
    #[inline]
    fn count(&self, len: usize) -> usize {
        if self.partial {
            len.div_ceil(self.step)
        } else if self.width <= len {
            (len - self.width) / self.step + 1
        } else {
            0
        }
    }

    /// Bounds of window `k`; callers guarantee `k < count(len)`.
    #[inline]
    fn bounds(&self, k: usize, len: usize) -> (usize, usize) {
        let start = k * self.step;
        let end = start.saturating_add(self.width).min(len);
        (start, end)
    }
}

/// A lazy, restartable sequence of windows over a materialized parent.
///
/// Produced by [`window`] and [`chunk`].
#[derive(Clone, Debug)]
pub struct Windowed<'a, T> {
    source: SequenceView<'a, T>,
    shape: Shape,
}

impl<'a, T> Windowed<'a, T> {
    /// Iterates over the windows. Each call starts over from the first one.
    pub fn iter(&self) -> Windows<'_, T> {
        Windows::with_shape(&self.source, self.shape)
    }

    /// Number of windows.
    pub fn len(&self) -> usize {
        self.shape.count(self.source.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns window `k`, or `None` if there are fewer windows.
    pub fn get(&self, k: usize) -> Option<&[T]> {
        let len = self.source.len();
        if k >= self.shape.count(len) {
            return None;
        }
        let (start, end) = self.shape.bounds(k, len);
        Some(&self.source[start..end])
    }

    /// The parent sequence every window borrows from.
    pub fn source(&self) -> &SequenceView<'a, T> {
        &self.source
    }

    pub fn into_source(self) -> SequenceView<'a, T> {
        self.source
    }
}

impl<'s, T> IntoIterator for &'s Windowed<'_, T> {
    type Item = &'s [T];
    type IntoIter = Windows<'s, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over windows of a borrowed slice.
#[derive(Clone, Debug)]
pub struct Windows<'s, T> {
    items: &'s [T],
    shape: Shape,
    front: usize,
    back: usize,
}

impl<'s, T> Windows<'s, T> {
    fn with_shape(items: &'s [T], shape: Shape) -> Self {
        Self {
            items,
            shape,
            front: 0,
            back: shape.count(items.len()),
        }
    }
}

impl<'s, T> Iterator for Windows<'s, T> {
    type Item = &'s [T];

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let (start, end) = self.shape.bounds(self.front, self.items.len());
        self.front += 1;
        Some(&self.items[start..end])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}

impl<T> DoubleEndedIterator for Windows<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        let (start, end) = self.shape.bounds(self.back, self.items.len());
        Some(&self.items[start..end])
    }
}

impl<T> ExactSizeIterator for Windows<'_, T> {}

impl<T> FusedIterator for Windows<'_, T> {}

/// Sliding windows of `width` elements, advancing by `step`.
///
/// With `partial`, windows near the end shrink rather than being omitted. A
/// `width` of zero yields one empty window per start position.
///
/// ```
/// use auxiliary_core::seq::window;
///
/// let windows = window(&[0, 1, 2, 3, 4, 5], 3, 1, false).unwrap();
/// assert_eq!(windows.len(), 4);
/// assert_eq!(windows.get(3), Some(&[3, 4, 5][..]));
/// ```
///
/// # Errors
///
/// [`Error::InvalidArgument`] if `step` is zero.
pub fn window<'a, T: 'a>(
    source: impl Into<SequenceView<'a, T>>,
    width: usize,
    step: usize,
    partial: bool,
) -> Result<Windowed<'a, T>> {
    let shape = Shape::new(width, step, partial)?;
    Ok(Windowed {
        source: source.into(),
        shape,
    })
}

/// Splits into consecutive, non-overlapping chunks of `width` elements.
///
/// The last chunk holds the remainder and may be shorter.
///
/// # Errors
///
/// [`Error::InvalidArgument`] if `width` is zero.
pub fn chunk<'a, T: 'a>(
    source: impl Into<SequenceView<'a, T>>,
    width: usize,
) -> Result<Windowed<'a, T>> {
    if width == 0 {
        return Err(Error::invalid_argument("width", "must be at least 1"));
    }
    window(source, width, width, true)
}

/// Zero-copy counterpart of [`window`] over a borrowed slice.
///
/// # Errors
///
/// [`Error::InvalidArgument`] if `step` is zero.
pub fn windows<T>(items: &[T], width: usize, step: usize, partial: bool) -> Result<Windows<'_, T>> {
    let shape = Shape::new(width, step, partial)?;
    Ok(Windows::with_shape(items, shape))
}
