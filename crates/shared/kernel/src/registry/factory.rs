use crate::error::ConfigError;
use indexmap::IndexMap;
use std::fmt;

/// Constructs an empty, unconfigured component.
pub type Constructor<C> = fn() -> Box<C>;

/// An explicit table from qualified class names to constructors.
///
/// ```rust
/// use interop_kernel::{Comparator, ComponentFactory};
///
/// let factory: ComponentFactory<dyn Comparator> = ComponentFactory::new();
/// assert!(factory.get_instance("interop_provpy::ProvPyComparator").is_err());
/// ```
pub struct ComponentFactory<C: ?Sized> {
    constructors: IndexMap<String, Constructor<C>>,
}

impl<C: ?Sized> ComponentFactory<C> {
    #[must_use]
    pub fn new() -> Self {
        Self { constructors: IndexMap::new() }
    }

    /// Adds (or replaces) the constructor registered under `name`.
    #[must_use]
    pub fn register(mut self, name: impl Into<String>, constructor: Constructor<C>) -> Self {
        self.constructors.insert(name.into(), constructor);
        self
    }

    /// Builds a fresh instance of the class registered under `name`.
    ///
    /// # Errors
    /// [`ConfigError::UnknownComponent`] when nothing is registered under `name`.
    pub fn get_instance(&self, name: &str) -> Result<Box<C>, ConfigError> {
        self.constructors
            .get(name)
            .map(|constructor| constructor())
            .ok_or_else(|| ConfigError::UnknownComponent { name: name.to_owned(), context: None })
    }

    /// Registered class names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.constructors.keys().map(String::as_str)
    }
}

impl<C: ?Sized> Default for ComponentFactory<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ?Sized> fmt::Debug for ComponentFactory<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentFactory").field("classes", &self.constructors.keys()).finish()
    }
}
