#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![deny(unsafe_code)]

//! Sequence helpers, numeric helpers, ordered enums and test assertions.
//!
//! The central type is [`SequenceView`]: a read-only, indexable view over
//! either caller-owned storage or a buffer materialized once from a one-shot
//! iterator. Operations that read their input more than once (windowing,
//! chunking, rotation, trimming, uniqueness) take `impl Into<SequenceView>`
//! so that a single-pass source is never consumed twice.
//!
//! ```
//! use auxiliary_core::seq::{chunk, rotate, window};
//!
//! let values = [0, 1, 2, 3, 4, 5, 6];
//!
//! let windows = window(&values, 3, 2, false).unwrap();
//! assert_eq!(windows.iter().collect::<Vec<_>>(), [&[0, 1, 2][..], &[2, 3, 4], &[4, 5, 6]]);
//!
//! let chunks = chunk(&values, 3).unwrap();
//! assert_eq!(chunks.iter().collect::<Vec<_>>(), [&[0, 1, 2][..], &[3, 4, 5], &[6]]);
//!
//! assert_eq!(rotate(&values, -1), [6, 0, 1, 2, 3, 4, 5]);
//! ```

// `#[derive(OrderedEnum)]` expands to `::auxiliary_core::...`, including in
// this crate's own tests.
extern crate self as auxiliary_core;

extern crate alloc;

// Lets the assertion macros name `Vec` and `format!` through `$crate`
// with or without `std`.
#[doc(hidden)]
pub mod shim {
    pub use alloc::{format, string::String, vec::Vec};
}

#[allow(unused_imports)]
pub(crate) use shim::*;

pub mod enums;
pub mod error;
pub mod num;
pub mod option;
pub mod seq;
#[cfg(feature = "std")]
pub mod testing;

pub use enums::OrderedEnum;
pub use error::{Error, ErrorKind, Result};
pub use num::{SupportsAdd, SupportsLessThan, SupportsMul, bind, product_of, sum_of};
pub use option::{default, get, next_or_none};
pub use seq::{
    IteratorExt, KnownLength, SequenceView, Windowed, Windows, after, all_constant, all_unique,
    all_unique_eq, all_unique_ord, chunk, ensure_same_length, flattened, ilen, iter_equal,
    length, rotate, rotated, sequences_equal, skipped, trim, trimmed, window, windows,
};
