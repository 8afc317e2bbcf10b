//! Tests for windowing and chunking

use super::{IteratorExt, chunk, window, windows};
use crate::{Error, ErrorKind};
use pretty_assertions::assert_eq;

fn collect<'s>(windows: impl IntoIterator<Item = &'s [i32]>) -> Vec<Vec<i32>> {
    windows.into_iter().map(<[i32]>::to_vec).collect()
}

#[test]
fn test_window_full() {
    let values: Vec<i32> = (0..6).collect();

    let windowed = window(&values, 3, 1, false).unwrap();
    assert_eq!(
        collect(&windowed),
        [vec![0, 1, 2], vec![1, 2, 3], vec![2, 3, 4], vec![3, 4, 5]]
    );

    let windowed = window(&values, 6, 1, false).unwrap();
    assert_eq!(collect(&windowed), [vec![0, 1, 2, 3, 4, 5]]);
}

#[test]
fn test_window_wider_than_source_is_empty() {
    let windowed = window((0..6).materialize(), 7, 1, false).unwrap();
    assert!(windowed.is_empty());
    assert_eq!(windowed.iter().next(), None);
}

#[test]
fn test_window_zero_width() {
    let windowed = window(vec![1, 2, 3, 4, 5, 6], 0, 1, false).unwrap();
    assert_eq!(windowed.len(), 7);
    assert!(windowed.iter().all(<[i32]>::is_empty));

    let windowed = window(vec![1, 2, 3, 4, 5, 6], 0, 1, true).unwrap();
    assert_eq!(windowed.len(), 6);
}

#[test]
fn test_window_step_and_partial() {
    let values: Vec<i32> = (0..7).collect();

    let windowed = window(&values, 3, 2, false).unwrap();
    assert_eq!(
        collect(&windowed),
        [vec![0, 1, 2], vec![2, 3, 4], vec![4, 5, 6]]
    );

    let windowed = window(&values, 3, 2, true).unwrap();
    assert_eq!(
        collect(&windowed),
        [vec![0, 1, 2], vec![2, 3, 4], vec![4, 5, 6], vec![6]]
    );

    // Gaps between windows when the step exceeds the width.
    let windowed = window(&values, 1, 3, false).unwrap();
    assert_eq!(collect(&windowed), [vec![0], vec![3], vec![6]]);
}

#[test]
fn test_window_count_formula() {
    for len in 0..12 {
        let values: Vec<i32> = (0..len).collect();
        let len = values.len();
        for width in 0..=len {
            for step in 1..5 {
                let windowed = window(&values, width, step, false).unwrap();
                let expected = (len - width) / step + 1;
                assert_eq!(windowed.len(), expected, "len {len} width {width} step {step}");

                for (k, view) in windowed.iter().enumerate() {
                    assert_eq!(view.len(), width);
                    assert_eq!(view, &values[k * step..k * step + width]);
                }
                assert_eq!(windowed.iter().count(), expected);
            }
        }
    }
}

#[test]
fn test_windowed_is_restartable() {
    let windowed = window((10..15).materialize(), 2, 1, false).unwrap();

    let first = collect(&windowed);
    let second = collect(&windowed);
    assert_eq!(first, second);
    assert_eq!(first.len(), 4);
}

#[test]
fn test_windowed_get_and_reverse() {
    let values = [1, 2, 3, 4, 5];
    let windowed = window(&values, 2, 2, true).unwrap();

    assert_eq!(windowed.get(0), Some(&[1, 2][..]));
    assert_eq!(windowed.get(2), Some(&[5][..]));
    assert_eq!(windowed.get(3), None);

    let reversed: Vec<&[i32]> = windowed.iter().rev().collect();
    assert_eq!(reversed, [&[5][..], &[3, 4], &[1, 2]]);

    let mut iter = windowed.iter();
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.nth(1), Some(&[3, 4][..]));
    assert_eq!(iter.len(), 1);
    assert_eq!(iter.nth(5), None);
    assert_eq!(iter.next(), None);
}

#[test]
fn test_window_rejects_zero_step() {
    let err = window(&[1, 2, 3], 1, 0, false).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Value);
    assert!(windows(&[1, 2, 3], 1, 0, true).is_err());
}

#[test]
fn test_windows_over_slice() {
    let values = [1, 2, 3, 4];
    let sums: Vec<i32> = windows(&values, 2, 1, false)
        .unwrap()
        .map(|pair| pair.iter().sum())
        .collect();
    assert_eq!(sums, [3, 5, 7]);
}

#[test]
fn test_chunk() {
    let values: Vec<i32> = (0..7).collect();

    let chunks = chunk(&values, 3).unwrap();
    assert_eq!(collect(&chunks), [vec![0, 1, 2], vec![3, 4, 5], vec![6]]);

    let chunks = chunk(&values, 7).unwrap();
    assert_eq!(collect(&chunks), [values.clone()]);

    let chunks = chunk(&values, 100).unwrap();
    assert_eq!(chunks.len(), 1);

    let chunks = chunk(Vec::<i32>::new(), 3).unwrap();
    assert!(chunks.is_empty());
}

#[test]
fn test_chunk_zero_width_is_rejected() {
    assert_eq!(
        chunk(&[1, 2, 3], 0).unwrap_err(),
        Error::InvalidArgument {
            name: "width",
            reason: "must be at least 1"
        }
    );
}

#[test]
fn test_chunks_cover_source_exactly() {
    let values: Vec<i32> = (0..23).collect();
    for width in 1..30 {
        let chunks = chunk(&values, width).unwrap();
        let flat: Vec<i32> = chunks.iter().flatten().copied().collect();
        assert_eq!(flat, values, "width {width}");
        assert!(chunks.iter().all(|c| !c.is_empty() && c.len() <= width));
    }
}

#[test]
fn test_windowed_keeps_owned_source() {
    let windowed = chunk("hello".chars().materialize(), 2).unwrap();
    assert!(!windowed.source().is_borrowed());
    assert_eq!(windowed.into_source(), ['h', 'e', 'l', 'l', 'o']);
}
