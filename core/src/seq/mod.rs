//! Sequence helpers.
//!
//! Helpers fall into two groups:
//!
//! - Operations that build a new result (`window`, `chunk`, `rotate`, `trim`,
//!   the uniqueness checks) accept anything convertible into a
//!   [`SequenceView`]. Slices and vectors convert directly; one-shot iterators
//!   go through [`IteratorExt::materialize`] (or [`SequenceView::materialize`])
//!   so they are read exactly once.
//! - Operations that hand back references into their input (`after`,
//!   `rotated`, `trimmed`, `windows`) take a plain slice. A materialized view
//!   derefs to one.

pub mod guard;
pub mod predicates;
pub mod rotate;
pub mod search;
pub mod trim;
pub mod view;
pub mod window;

pub use guard::{KnownLength, ensure_same_length};
pub use predicates::{
    all_constant, all_unique, all_unique_eq, all_unique_ord, iter_equal, sequences_equal,
};
pub use rotate::{rotate, rotated};
pub use search::{after, flattened, skipped};
pub use trim::{trim, trimmed};
pub use view::{IteratorExt, SequenceView, ilen, length};
pub use window::{Windowed, Windows, chunk, window, windows};


#[cfg(test)]
#[path = "window_test.rs"]
mod window_test;
