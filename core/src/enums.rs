//! Enumerations ordered by declaration.
//!
//! [`OrderedEnum`] exposes the variants of a fieldless enum as a static table
//! in declaration order. `#[derive(OrderedEnum)]` builds that table, a
//! constant-time [`index`](OrderedEnum::index), and `PartialOrd`/`Ord`
//! implementations that compare by index:
//!
//! ```
//! use auxiliary_core::OrderedEnum;
//!
//! #[derive(Debug, PartialEq, Eq, OrderedEnum)]
//! enum Street {
//!     Preflop,
//!     Flop,
//!     Turn,
//!     River,
//! }
//!
//! assert!(Street::Preflop < Street::River);
//! assert_eq!(Street::Turn.index(), 2);
//! assert_eq!(Street::Flop.successor(), Some(&Street::Turn));
//! assert_eq!(Street::last(), Some(&Street::River));
//! ```
//!
//! Variants that carry data are rejected at compile time:
//!
//! ```compile_fail
//! use auxiliary_core::OrderedEnum;
//!
//! #[derive(PartialEq, Eq, OrderedEnum)]
//! enum Shape {
//!     Dot,
//!     Circle(f64),
//! }
//! ```
//!
//! So are structs:
//!
//! ```compile_fail
//! use auxiliary_core::OrderedEnum;
//!
//! #[derive(PartialEq, Eq, OrderedEnum)]
//! struct Point {
//!     x: i32,
//! }
//! ```

use core::cmp::Ordering;

pub use auxiliary_macros::OrderedEnum;

/// An enumeration whose variants are totally ordered by declaration.
///
/// Implementations must keep `VARIANTS[self.index()] == *self`.
pub trait OrderedEnum: Sized + 'static {
    /// All variants, in declaration order.
    const VARIANTS: &'static [Self];

    /// Position of this variant in [`VARIANTS`](Self::VARIANTS).
    fn index(&self) -> usize;

    fn from_index(index: usize) -> Option<&'static Self> {
        Self::VARIANTS.get(index)
    }

    fn first() -> Option<&'static Self> {
        Self::VARIANTS.first()
    }

    fn last() -> Option<&'static Self> {
        Self::VARIANTS.last()
    }

    /// The variant declared right after this one, if any.
    fn successor(&self) -> Option<&'static Self> {
        Self::from_index(self.index() + 1)
    }

    /// The variant declared right before this one, if any.
    fn predecessor(&self) -> Option<&'static Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    /// Compares two variants by declaration order.
    fn ordinal_cmp(&self, other: &Self) -> Ordering {
        self.index().cmp(&other.index())
    }
}
