//! Implementation of `#[derive(OrderedEnum)]`
//!
//! Validates that the input is a fieldless, non-generic enum and generates the
//! variant table, the position lookup and the comparison impls.

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DataEnum, DeriveInput, Fields, Ident};

/// Expand the derive for a parsed item.
pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let variants = parse_variants(input)?;
    let name = &input.ident;
    let indices = 0..variants.len();

    Ok(quote! {
        impl ::auxiliary_core::enums::OrderedEnum for #name {
            const VARIANTS: &'static [Self] = &[#(Self::#variants),*];

            #[inline]
            fn index(&self) -> usize {
                match *self {
                    #(Self::#variants => #indices,)*
                }
            }
        }

        impl ::core::cmp::PartialOrd for #name {
            #[inline]
            fn partial_cmp(&self, other: &Self) -> ::core::option::Option<::core::cmp::Ordering> {
                ::core::option::Option::Some(::core::cmp::Ord::cmp(self, other))
            }
        }

        impl ::core::cmp::Ord for #name {
            #[inline]
            fn cmp(&self, other: &Self) -> ::core::cmp::Ordering {
                ::auxiliary_core::enums::OrderedEnum::ordinal_cmp(self, other)
            }
        }
    })
}

/// Collect the variant names in declaration order, rejecting unsupported input.
fn parse_variants(input: &DeriveInput) -> syn::Result<Vec<&Ident>> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "[auxiliary] OrderedEnum cannot be derived for generic enums",
        ));
    }

    let Data::Enum(DataEnum { variants, .. }) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "[auxiliary] OrderedEnum can only be derived for enums",
        ));
    };

    variants
        .iter()
        .map(|variant| match variant.fields {
            Fields::Unit => Ok(&variant.ident),
            _ => Err(syn::Error::new_spanned(
                variant,
                format!(
                    "[auxiliary] variant `{}` carries data; OrderedEnum requires unit variants",
                    variant.ident
                ),
            )),
        })
        .collect()
}
