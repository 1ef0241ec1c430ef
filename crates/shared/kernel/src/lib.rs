//! # Interop kernel
//!
//! Everything the tool adapters share:
//!
//! * [`validator`]: structural checks on configuration mappings.
//! * [`Component`], [`Converter`], [`Comparator`]: the contracts a pluggable tool implements.
//! * [`CommandLineAdapter`] / [`RestAdapter`]: the generic shapes concrete adapters build on.
//! * [`invocation`]: template expansion, scratch staging for local formats, and
//!   synchronous process execution with guaranteed cleanup.
//! * [`ComponentFactory`] / [`ComponentRegistry`]: name-to-constructor tables and
//!   registries indexed by name and by format.
//! * [`config`]: document and settings loading.
//!
//! ## Example
//! ```rust
//! use interop_kernel::{Bindings, CommandTemplate};
//! use interop_kernel::domain::Token;
//!
//! let template =
//!     CommandTemplate::parse(&serde_json::json!("prov-convert -f FORMAT INPUT OUTPUT")).unwrap();
//! let bindings = Bindings::new().bind(Token::Format, "xml").bind(Token::Input, "a.json");
//! let args = template.expand(&bindings);
//! assert_eq!(args, ["prov-convert", "-f", "xml", "a.json", "OUTPUT"]);
//! ```

pub mod comparator;
pub mod component;
pub mod config;
pub mod converter;
pub mod error;
pub mod invocation;
pub mod registry;
pub mod validator;

pub use interop_domain as domain;

pub use crate::comparator::{Comparator, ComparatorFormats, Comparison};
pub use crate::component::{
    Arg, Bindings, CommandLineAdapter, CommandTemplate, Component, RestAdapter,
};
pub use crate::converter::{Conversion, Converter, ConverterFormats};
pub use crate::error::{
    ComparisonError, ComparisonErrorExt, ConfigError, ConfigErrorExt, ConversionError,
    ConversionErrorExt,
};
pub use crate::registry::{ComponentFactory, ComponentRegistry, Constructor};
