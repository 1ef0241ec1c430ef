//! Structural checks shared by every component's `configure`.

use crate::error::ConfigError;
use indexmap::IndexSet;
use interop_domain::{CanonicalFormat, Configuration};
use serde_json::Value;

/// Declared formats, in configuration order and without duplicates.
pub type FormatSet = IndexSet<CanonicalFormat>;

/// Borrows `config` as a mapping.
///
/// # Errors
/// [`ConfigError::NotMapping`] for any other kind of value.
pub fn as_mapping(config: &Value) -> Result<&Configuration, ConfigError> {
    config.as_object().ok_or_else(|| not_mapping(config))
}

pub(crate) fn not_mapping(value: &Value) -> ConfigError {
    ConfigError::NotMapping { found: kind_of(value).into(), context: None }
}

/// Fails when any of `keys` is absent. Every missing key is reported, in the order given.
///
/// # Errors
/// [`ConfigError::MissingKeys`].
pub fn check_required_keys(config: &Configuration, keys: &[&str]) -> Result<(), ConfigError> {
    let missing: Vec<String> = keys
        .iter()
        .filter(|key| !config.contains_key(**key))
        .map(|key| (*key).to_owned())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::MissingKeys { keys: missing, context: None })
    }
}

/// Reads a required string value.
///
/// # Errors
/// [`ConfigError::MissingKeys`] if absent, [`ConfigError::InvalidValue`] if not a string.
pub fn string_value<'a>(
    config: &'a Configuration,
    key: &'static str,
) -> Result<&'a str, ConfigError> {
    check_required_keys(config, &[key])?;
    config
        .get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| ConfigError::invalid_value(key, "expected a string"))
}

/// Reads a required, non-empty list of canonical formats.
///
/// # Errors
/// * [`ConfigError::MissingKeys`] if absent.
/// * [`ConfigError::InvalidValue`] if not a sequence.
/// * [`ConfigError::EmptyList`] if the sequence is empty.
/// * [`ConfigError::InvalidFormat`] for the first element outside the canonical set.
pub fn formats(config: &Configuration, key: &'static str) -> Result<FormatSet, ConfigError> {
    check_required_keys(config, &[key])?;
    let items = config
        .get(key)
        .and_then(Value::as_array)
        .ok_or_else(|| ConfigError::invalid_value(key, "expected a list of formats"))?;

    if items.is_empty() {
        return Err(ConfigError::EmptyList { key: key.into(), context: None });
    }

    items
        .iter()
        .map(|item| {
            item.as_str().and_then(CanonicalFormat::parse).ok_or_else(|| {
                ConfigError::InvalidFormat { value: scalar_text(item), context: None }
            })
        })
        .collect()
}

/// Renders a scalar the way it reads in a document (`42`, `true`, `json`).
pub fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}
