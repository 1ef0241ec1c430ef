//! Locating and loading configuration.
//!
//! Two kinds of input live here: harness documents (YAML, see [`load_configuration`])
//! and the binary's own runtime settings (see [`load_settings`]).

mod document;
mod settings;

pub use self::document::{LoadError, LoadErrorExt, load_and_configure, load_configuration};
pub use self::settings::{SettingsError, SettingsErrorExt, load_settings};

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Picks a document path: `explicit` if given, else the path named by `env_var`,
/// else `default`. An empty variable counts as unset.
#[must_use]
pub fn resolve_path(explicit: Option<&Path>, env_var: &str, default: &Path) -> PathBuf {
    resolve_path_with(explicit, env_var, default, |key| std::env::var_os(key))
}

/// [`resolve_path`] with an injected environment lookup.
pub fn resolve_path_with(
    explicit: Option<&Path>,
    env_var: &str,
    default: &Path,
    lookup: impl FnOnce(&str) -> Option<OsString>,
) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    lookup(env_var)
        .filter(|value| !value.is_empty())
        .map_or_else(|| default.to_path_buf(), PathBuf::from)
}
