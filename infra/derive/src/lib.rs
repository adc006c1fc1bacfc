#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros for the storefront crates.
//!
//! Every crate in the workspace declares its error type with [`macro@shop_error`],
//! so errors share one shape: named-field variants, an optional `context` string,
//! and `?`-friendly conversions from upstream errors.

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for defining crate-level error enums.
///
/// # Injected items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * A companion `<Name>Ext<T>` trait with `.context(..)` for `Result<T, Name>` and for
///   `Result<T, Source>` of every variant that wraps a `source` field.
/// * `From<Source>` for every variant with a `source` field.
/// * `From<&'static str>` and `From<String>` when an `Internal { message, context }`
///   variant is present.
/// * A private `format_context` helper for use inside `#[error(..)]` strings. It is a
///   free function, so declare one error enum per module.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum** with named-field variants only.
/// 2. A `context` field, if present, must be `Option<Cow<'static, str>>`.
/// 3. Variants with a `source` field must also have a `context` field.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[shop_derive::shop_error]
/// pub enum CartError {
///     #[error("Invalid line item{}: {message}", format_context(.context))]
///     InvalidItem { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
///
///     #[error("Internal cart error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn shop_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).into()
}
