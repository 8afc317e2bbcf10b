//! Procedural macros for auxiliary.
//!
//! - `#[derive(OrderedEnum)]` - Order a fieldless enum by declaration

extern crate proc_macro;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod ordered_enum;

/// Derive `OrderedEnum`, `PartialOrd` and `Ord` for a fieldless enum.
///
/// Variants compare by their position in the declaration, not by their
/// discriminant values. The enum must also implement `PartialEq` and `Eq`,
/// usually by deriving them.
///
/// # Example
///
/// ```ignore
/// use auxiliary_core::OrderedEnum;
///
/// #[derive(Debug, PartialEq, Eq, OrderedEnum)]
/// enum Priority {
///     Low,
///     Medium,
///     High,
/// }
///
/// assert!(Priority::Low < Priority::High);
/// assert_eq!(Priority::Medium.index(), 1);
/// assert_eq!(Priority::VARIANTS.len(), 3);
/// ```
///
/// # Generated Items
///
/// - `OrderedEnum::VARIANTS`: every variant, in declaration order
/// - `OrderedEnum::index`: a `match` from variant to position
/// - `PartialOrd` and `Ord`: comparison by position
///
/// # Restrictions
///
/// - Only enums are accepted
/// - Every variant must be a unit variant
/// - Generic parameters are not supported
#[proc_macro_derive(OrderedEnum)]
pub fn derive_ordered_enum(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    match ordered_enum::expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
