#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![deny(unsafe_code)]

//! Descriptive statistics over floating-point samples.
//!
//! Samples are taken as anything convertible into a
//! [`SequenceView`](auxiliary_core::SequenceView), so slices and vectors are
//! read in place and one-shot iterators are materialized once first.
//!
//! ```
//! use auxiliary_statistics::{mean, median, range, trimmed_mean, variance};
//!
//! let sample = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
//! assert_eq!(mean(&sample).unwrap(), 5.0);
//! assert_eq!(median(&sample).unwrap(), 4.5);
//! assert_eq!(range(&sample).unwrap(), 7.0);
//! assert_eq!(trimmed_mean(&sample, 0.25).unwrap(), 4.5);
//! assert_eq!(variance(&sample).unwrap(), 32.0 / 7.0);
//! ```

extern crate alloc;

pub mod averages;
pub mod error;
pub mod variabilities;

pub use averages::{mean, median, trimmed_mean};
pub use error::{Error, Result};
pub use variabilities::{range, std_dev, variance};
