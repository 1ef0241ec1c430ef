use serde::Deserialize;
use std::path::PathBuf;

/// Raw component configuration: a mapping from keys to arbitrary values.
///
/// Keys keep document order. Unrecognised keys are kept as-is so consumers can
/// read tool-specific extras such as `skip-tests`.
pub type Configuration = serde_json::Map<String, serde_json::Value>;

/// Runtime settings of harness binaries.
///
/// Loaded from an optional settings file layered with `INTEROP__*` environment
/// variables (e.g. `INTEROP__LOG__LEVEL=debug`).
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Harness configuration document. Falls back to the environment variable and
    /// default file name when unset.
    pub configuration: Option<PathBuf>,
    pub log: LogSettings,
}

/// Logging knobs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    pub level: String,
    pub filter: Option<String>,
    pub dir: Option<PathBuf>,
    pub json: bool,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self { level: "info".to_owned(), filter: None, dir: None, json: false }
    }
}
