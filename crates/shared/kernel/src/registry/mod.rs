//! Named components, built from a configuration mapping and indexed by format.

mod factory;

pub use self::factory::{ComponentFactory, Constructor};

use crate::component::Component;
use crate::error::{ConfigError, ConfigErrorExt};
use crate::validator;
use indexmap::IndexMap;
use interop_domain::CanonicalFormat;
use interop_domain::constants::CLASS;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::{info, warn};

/// Components by name and by every format they declare.
///
/// A registry is built whole by [`ComponentRegistry::register`]; a failed build
/// yields no registry at all. When two components declare the same format, the
/// one registered later owns that format.
pub struct ComponentRegistry<C: ?Sized> {
    by_name: IndexMap<String, Arc<C>>,
    by_format: IndexMap<CanonicalFormat, Arc<C>>,
}

impl<C: Component + ?Sized> ComponentRegistry<C> {
    /// Builds a registry from a `name -> { class, ... }` mapping, in document order.
    ///
    /// Each entry's `class` is resolved through `factory`, the instance is configured
    /// with the whole entry, then indexed under its name and declared formats.
    ///
    /// # Errors
    /// * [`ConfigError::NotMapping`] / [`ConfigError::NoComponents`] for a non-mapping or
    ///   empty `configs`.
    /// * [`ConfigError::MissingKeys`] when an entry has no `class`.
    /// * [`ConfigError::UnknownComponent`] when `class` is not in `factory`.
    /// * Whatever the component's own `configure` reports, with the entry name as context.
    pub fn register(factory: &ComponentFactory<C>, configs: &Value) -> Result<Self, ConfigError> {
        let configs = validator::as_mapping(configs)?;
        if configs.is_empty() {
            return Err(ConfigError::NoComponents { context: None });
        }

        let mut registry = Self { by_name: IndexMap::new(), by_format: IndexMap::new() };
        for (name, config) in configs {
            let context = || format!("Configuring component '{name}'");
            let entry = validator::as_mapping(config).context(context())?;
            let class = validator::string_value(entry, CLASS).context(context())?;

            let mut component = factory.get_instance(class).context(context())?;
            component.configure(config).context(context())?;
            registry.insert(name, Arc::from(component));
        }

        info!(
            components = registry.by_name.len(),
            formats = registry.by_format.len(),
            "Component registry built"
        );
        Ok(registry)
    }

    fn insert(&mut self, name: &str, component: Arc<C>) {
        for format in component.declared_formats() {
            if let Some(previous) = self.by_format.insert(format, Arc::clone(&component)) {
                let owner = self.name_of(&previous).unwrap_or("?");
                warn!(
                    %format,
                    previous = owner,
                    current = name,
                    "Format already registered, overriding"
                );
            }
        }
        self.by_name.insert(name.to_owned(), component);
    }

    fn name_of(&self, component: &Arc<C>) -> Option<&str> {
        self.by_name.iter().find(|(_, c)| Arc::ptr_eq(c, component)).map(|(name, _)| name.as_str())
    }
}

impl<C: ?Sized> ComponentRegistry<C> {
    #[must_use]
    pub const fn by_name(&self) -> &IndexMap<String, Arc<C>> {
        &self.by_name
    }

    #[must_use]
    pub const fn by_format(&self) -> &IndexMap<CanonicalFormat, Arc<C>> {
        &self.by_format
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<C>> {
        self.by_name.get(name)
    }

    #[must_use]
    pub fn for_format(&self, format: CanonicalFormat) -> Option<&Arc<C>> {
        self.by_format.get(&format)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }
}

impl<C: ?Sized> Clone for ComponentRegistry<C> {
    fn clone(&self) -> Self {
        Self { by_name: self.by_name.clone(), by_format: self.by_format.clone() }
    }
}

impl<C: ?Sized> fmt::Debug for ComponentRegistry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentRegistry")
            .field("by_name", &self.by_name.keys())
            .field("by_format", &self.by_format.keys())
            .finish()
    }
}
