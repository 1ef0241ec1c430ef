use super::join;
use interop_domain::Token;
use std::borrow::Cow;

/// Malformed or incomplete configuration.
#[interop_derive::interop_error]
pub enum ConfigError {
    /// The document is not well-formed YAML.
    #[error("Malformed configuration document{}: {message}", format_context(.context))]
    Malformed { message: String, context: Option<Cow<'static, str>> },

    #[error("Configuration must be a mapping{}: found {found}", format_context(.context))]
    NotMapping { found: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Lists every absent key, not just the first.
    #[error("Missing configuration keys{}: {}", format_context(.context), join(.keys))]
    MissingKeys { keys: Vec<String>, context: Option<Cow<'static, str>> },

    #[error("Configuration list is empty{}: {key}", format_context(.context))]
    EmptyList { key: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Not a canonical format{}: {value}", format_context(.context))]
    InvalidFormat { value: String, context: Option<Cow<'static, str>> },

    #[error("Invalid value for '{key}'{}: {message}", format_context(.context))]
    InvalidValue {
        key: Cow<'static, str>,
        message: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },

    /// The class name has no registered constructor.
    #[error("Unknown component class{}: {name}", format_context(.context))]
    UnknownComponent { name: String, context: Option<Cow<'static, str>> },

    #[error("There must be at least one component defined{}", format_context(.context))]
    NoComponents { context: Option<Cow<'static, str>> },

    /// The argument template lacks tokens the adapter binds.
    #[error("Missing tokens in arguments{}: {}", format_context(.context), join(.tokens))]
    MissingTokens { tokens: Vec<Token>, context: Option<Cow<'static, str>> },

    #[error("Internal configuration error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl ConfigError {
    #[must_use]
    pub fn invalid_value(
        key: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::InvalidValue { key: key.into(), message: message.into(), context: None }
    }
}
