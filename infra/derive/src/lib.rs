#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the interop crates.
//! Today this is the error-enum attribute used by every crate's error taxonomy.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! interop-derive.workspace = true
//! thiserror.workspace = true
//! ```

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for defining error enums.
///
/// Turns a plain enum into a `thiserror` error with context support.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` when missing.
/// * **Context Support**: Generates a companion `<Name>Ext` trait adding `.context()`
///   to `Result<T, Name>` and to `Result<T, Source>` for every wrapped source type.
/// * **Standard Conversions**: Implements `From<Source>` for variants made only of a
///   `source` and a `context` field, so `?` works on upstream errors.
/// * **Internal Fallback**: `From<&'static str>` and `From<String>` when an `Internal`
///   variant is present.
///
/// # Requirements
///
/// 1. Only enums are accepted.
/// 2. Every variant uses named fields.
/// 3. A `context` field, when present, is `Option<Cow<'static, str>>`.
/// 4. Variants wrapping a source error must carry a `context` field.
///
/// A `format_context` helper is emitted next to the enum for use in messages,
/// so each module hosts at most one annotated enum.
///
/// # Example
///
/// ```rust,ignore
/// use interop_derive::interop_error;
/// use std::borrow::Cow;
///
/// #[interop_error]
/// pub enum LoadError {
///     #[error("I/O error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read(path: &str) -> Result<String, LoadError> {
///     std::fs::read_to_string(path).context("Reading configuration")
/// }
/// ```
#[proc_macro_attribute]
pub fn interop_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}
