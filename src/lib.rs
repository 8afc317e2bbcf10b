#![cfg_attr(not(feature = "std"), no_std)]

//! Auxiliary - Small helpers for sequences, enums, economics and statistics
//!
//! # Overview
//!
//! This crate bundles the workspace crates behind one dependency:
//!
//! - [`seq`]: windowing, chunking, rotation, trimming and uniqueness checks
//!   over a [`SequenceView`]
//! - [`num`] and [`option`]: reductions, clamping and optional-value helpers
//! - [`enums`]: `#[derive(OrderedEnum)]` for declaration-ordered enums
//! - [`economics`]: compounding factors and interest-rate conversions
//! - [`statistics`]: means, medians and measures of spread
//! - `testing` (with `std`): assertions for comparing iterables
//!
//! # Quick Start
//!
//! ```
//! use auxiliary::{IteratorExt, chunk, rotate, statistics, window};
//!
//! // Read a one-shot source once, then reuse it.
//! let readings = [3.0, 5.0, 4.0, 6.0, 8.0, 7.0].into_iter().materialize();
//!
//! let smoothed: Vec<f64> = window(&readings, 3, 1, false)
//!     .unwrap()
//!     .iter()
//!     .map(|w| statistics::mean(w).unwrap())
//!     .collect();
//! assert_eq!(smoothed, [4.0, 5.0, 6.0, 7.0]);
//!
//! assert_eq!(chunk(&readings, 4).unwrap().len(), 2);
//! assert_eq!(rotate(&readings, 2), [4.0, 6.0, 8.0, 7.0, 3.0, 5.0]);
//! ```
//!
//! # Errors
//!
//! Sequence, numeric and option helpers return [`Error`]; use
//! [`Error::kind`] to tell index, value and unwrap failures apart. The
//! statistics helpers wrap it in [`statistics::Error`]. The economics
//! functions never fail and follow IEEE float semantics instead.

// Re-export the core helpers at the top level
pub use auxiliary_core::*;

pub use auxiliary_economics as economics;
pub use auxiliary_statistics as statistics;
