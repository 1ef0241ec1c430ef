use super::resolve_path;
use crate::component::Component;
use crate::error::ConfigError;
use crate::validator::not_mapping;
use interop_domain::Configuration;
use serde_json::Value;
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Failure to obtain a configuration document.
#[interop_derive::interop_error]
pub enum LoadError {
    #[error("Configuration file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read configuration{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Invalid configuration{}: {source}", format_context(.context))]
    Config { source: ConfigError, context: Option<Cow<'static, str>> },
}

/// Reads a YAML document whose root must be a mapping. Key order is kept.
///
/// # Errors
/// * [`LoadError::NotFound`] if `path` is not a file.
/// * [`LoadError::Config`] carrying [`ConfigError::Malformed`] for malformed YAML, or
///   [`ConfigError::NotMapping`] for a non-mapping root.
/// * [`LoadError::Io`] when the file cannot be read.
pub fn load_configuration(path: &Path) -> Result<Configuration, LoadError> {
    if !path.is_file() {
        return Err(LoadError::NotFound { path: path.to_path_buf() });
    }

    let text = fs::read_to_string(path).context(path.display().to_string())?;
    let document: Value = serde_yaml::from_str(&text)
        .map_err(|e| ConfigError::Malformed { message: e.to_string(), context: None })
        .context(path.display().to_string())?;

    match document {
        Value::Object(mapping) => {
            info!(path = %path.display(), keys = mapping.len(), "Loaded configuration");
            Ok(mapping)
        },
        other => Err::<Configuration, _>(not_mapping(&other)).context(path.display().to_string()),
    }
}

/// Resolves a document path (see [`resolve_path`](super::resolve_path)), loads it and
/// configures `component` with it. Returns the path that was used.
///
/// # Errors
/// [`LoadError`] from loading, or [`LoadError::Config`] from `configure`.
pub fn load_and_configure<C: Component + ?Sized>(
    component: &mut C,
    env_var: &str,
    default: &Path,
    explicit: Option<&Path>,
) -> Result<PathBuf, LoadError> {
    let path = resolve_path(explicit, env_var, default);
    let configuration = load_configuration(&path)?;
    component.configure(&Value::Object(configuration)).context(path.display().to_string())?;
    Ok(path)
}
