use super::Component;
use crate::error::ConfigError;
use crate::validator;
use interop_domain::Configuration;
use interop_domain::constants::URL;
use serde_json::Value;

/// A component backed by a REST endpoint. Only the base URL is held here; request
/// handling belongs to whoever embeds it.
#[derive(Debug, Default, Clone)]
pub struct RestAdapter {
    configuration: Configuration,
    url: String,
}

impl RestAdapter {
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Component for RestAdapter {
    /// Requires `url`.
    fn configure(&mut self, config: &Value) -> Result<(), ConfigError> {
        let mapping = validator::as_mapping(config)?;
        let url = validator::string_value(mapping, URL)?.to_owned();

        self.configuration = mapping.clone();
        self.url = url;
        Ok(())
    }

    fn configuration(&self) -> &Configuration {
        &self.configuration
    }
}
