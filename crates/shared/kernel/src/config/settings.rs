use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tracing::info;

/// Prefix of environment overrides, e.g. `INTEROP__LOG__LEVEL=debug`.
const ENV_PREFIX: &str = "INTEROP";
const ENV_SEPARATOR: &str = "__";

#[interop_derive::interop_error]
pub enum SettingsError {
    #[error("Settings error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads runtime settings: an optional file layered with `INTEROP__*` environment overrides.
///
/// `env` replaces the process environment as the override source when given.
///
/// # Errors
/// [`SettingsError`] when the file is missing or malformed, or the merged values
/// do not deserialize into `T`.
///
/// # Example
/// ```rust
/// use interop_kernel::config::load_settings;
///
/// #[derive(Default, serde::Deserialize)]
/// struct Settings {
///     verbose: bool,
/// }
///
/// let env = [("INTEROP__VERBOSE".to_owned(), "true".to_owned())].into_iter().collect();
/// let settings: Settings = load_settings(None, Some(env)).unwrap_or_default();
/// assert!(settings.verbose);
/// ```
pub fn load_settings<T>(
    path: Option<&Path>,
    env: Option<config::Map<String, String>>,
) -> Result<T, SettingsError>
where
    T: DeserializeOwned,
{
    let mut builder = Config::builder();
    if let Some(path) = path {
        info!("Loading settings from {}", path.display());
        builder = builder.add_source(File::from(path).required(true));
    }

    let environment =
        Environment::with_prefix(ENV_PREFIX).separator(ENV_SEPARATOR).try_parsing(true).source(env);

    let settings = builder
        .add_source(environment)
        .build()
        .context("Failed to build settings")?
        .try_deserialize::<T>()
        .context("Failed to deserialize settings")?;

    Ok(settings)
}
