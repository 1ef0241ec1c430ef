//! The component contract and the two generic adapter shapes.

mod command_line;
mod rest;

pub use self::command_line::{Arg, Bindings, CommandLineAdapter, CommandTemplate};
pub use self::rest::RestAdapter;

use crate::error::ConfigError;
use interop_domain::{CanonicalFormat, Configuration};
use serde_json::Value;
use std::fmt::Debug;

/// A pluggable unit configured once from a mapping.
///
/// Implementations are constructed empty by a
/// [`ComponentFactory`](crate::registry::ComponentFactory) and become usable only
/// after `configure` succeeds. They are not mutated afterwards.
pub trait Component: Debug + Send + Sync {
    /// Validates `config` and stores the settings this component understands.
    ///
    /// # Errors
    /// [`ConfigError`] when `config` is not a mapping or lacks what the component needs.
    fn configure(&mut self, config: &Value) -> Result<(), ConfigError>;

    /// The mapping this component was configured with, unrecognised keys included.
    /// Empty until configured.
    fn configuration(&self) -> &Configuration;

    /// Formats under which a registry indexes this component.
    fn declared_formats(&self) -> Vec<CanonicalFormat> {
        Vec::new()
    }
}
