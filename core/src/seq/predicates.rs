//! Equality, uniqueness and constancy checks.

use core::hash::Hash;

use hashbrown::HashSet;

use crate::{Vec, seq::SequenceView};

/// Element-wise equality of two sequences.
///
/// Sequences of different lengths are never equal.
pub fn sequences_equal<'a, 'b, T, U>(
    a: impl Into<SequenceView<'a, T>>,
    b: impl Into<SequenceView<'b, U>>,
) -> bool
where
    T: PartialEq<U> + 'a,
    U: 'b,
{
    let (a, b): (SequenceView<'a, T>, SequenceView<'b, U>) = (a.into(), b.into());
    a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x == y)
}

/// Element-wise equality of two arbitrary iterables.
///
/// Both sides are materialized first so their lengths can be compared before
/// any element is.
///
/// ```
/// use auxiliary_core::seq::iter_equal;
///
/// assert!(iter_equal(0..6, vec![0, 1, 2, 3, 4, 5]));
/// assert!(!iter_equal(Vec::<i32>::new(), [0]));
/// ```
pub fn iter_equal<A, B>(a: A, b: B) -> bool
where
    A: IntoIterator,
    B: IntoIterator,
    A::Item: PartialEq<B::Item>,
{
    let a: Vec<A::Item> = a.into_iter().collect();
    let b: Vec<B::Item> = b.into_iter().collect();
    sequences_equal(a, b)
}

/// Returns `true` if no two elements are equal, using a hash set.
///
/// Empty and single-element sequences are unique.
pub fn all_unique<'a, T>(source: impl Into<SequenceView<'a, T>>) -> bool
where
    T: Eq + Hash + 'a,
{
    let source: SequenceView<'a, T> = source.into();
    if source.len() < 2 {
        return true;
    }

    let mut seen = HashSet::with_capacity(source.len());
    source.iter().all(|item| seen.insert(item))
}

/// Uniqueness check for ordered elements: sorts references, then compares
/// neighbours.
pub fn all_unique_ord<'a, T>(source: impl Into<SequenceView<'a, T>>) -> bool
where
    T: Ord + 'a,
{
    let source: SequenceView<'a, T> = source.into();
    let mut sorted: Vec<&T> = source.iter().collect();
    sorted.sort_unstable();
    sorted.windows(2).all(|pair| pair[0] != pair[1])
}

/// Uniqueness check that only needs `PartialEq`, by comparing every pair.
///
/// This is the reference the faster variants must agree with. It is O(n²).
pub fn all_unique_eq<'a, T>(source: impl Into<SequenceView<'a, T>>) -> bool
where
    T: PartialEq + 'a,
{
    let source: SequenceView<'a, T> = source.into();
    tracing::debug!(len = source.len(), "pairwise uniqueness check");

    source
        .iter()
        .enumerate()
        .all(|(i, x)| source[i + 1..].iter().all(|y| x != y))
}

/// Returns `true` if every element equals the first one.
///
/// Reads the input once, so one-shot iterators may be passed directly.
pub fn all_constant<I>(source: I) -> bool
where
    I: IntoIterator,
    I::Item: PartialEq,
{
    let mut items = source.into_iter();
    match items.next() {
        None => true,
        Some(first) => items.all(|item| item == first),
    }
}
