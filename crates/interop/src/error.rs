use interop_kernel::ConfigError;
use interop_kernel::config::LoadError;
use std::borrow::Cow;

/// A specialized [`HarnessError`] enum of this crate.
#[interop_derive::interop_error]
pub enum HarnessError {
    /// The harness or a converter document could not be loaded.
    #[error("Harness load error{}: {source}", format_context(.context))]
    Load { source: LoadError, context: Option<Cow<'static, str>> },
    /// The document loaded but describes an unusable harness.
    #[error("Harness configuration error{}: {source}", format_context(.context))]
    Config { source: ConfigError, context: Option<Cow<'static, str>> },
    #[error("Harness I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },
}
