use super::Component;
use crate::error::ConfigError;
use crate::validator::{self, scalar_text};
use fxhash::FxHashMap;
use interop_domain::constants::{ARGUMENTS, EXECUTABLE};
use interop_domain::{Configuration, Token};
use serde_json::Value;
use std::ffi::{OsStr, OsString};

/// One element of an argument template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    Literal(String),
    Token(Token),
}

impl Arg {
    fn parse(element: &str) -> Self {
        Token::parse(element).map_or_else(|| Self::Literal(element.to_owned()), Self::Token)
    }
}

/// An ordered argument template, fixed once configured.
///
/// Elements that spell a [`Token`] exactly (`INPUT`, not `--input=INPUT`) are
/// placeholders; everything else is passed through verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandTemplate(Vec<Arg>);

impl CommandTemplate {
    /// Reads a template from a sequence of scalars or from a single
    /// whitespace-separated string.
    ///
    /// # Errors
    /// [`ConfigError::InvalidValue`] for any other shape, or nested values inside the sequence.
    pub fn parse(value: &Value) -> Result<Self, ConfigError> {
        match value {
            Value::String(line) => Ok(Self(line.split_whitespace().map(Arg::parse).collect())),
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::String(_) | Value::Number(_) | Value::Bool(_) => {
                        Ok(Arg::parse(&scalar_text(item)))
                    },
                    _ => Err(ConfigError::invalid_value(ARGUMENTS, "arguments must be scalars")),
                })
                .collect::<Result<_, _>>()
                .map(Self),
            _ => Err(ConfigError::invalid_value(ARGUMENTS, "expected a list or a string")),
        }
    }

    #[must_use]
    pub fn args(&self) -> &[Arg] {
        &self.0
    }

    #[must_use]
    pub fn contains(&self, token: Token) -> bool {
        self.0.contains(&Arg::Token(token))
    }

    /// The subset of `tokens` that never occurs in the template, in the order given.
    #[must_use]
    pub fn missing(&self, tokens: &[Token]) -> Vec<Token> {
        tokens.iter().copied().filter(|token| !self.contains(*token)).collect()
    }

    /// Substitutes every bound placeholder, keeping order. Unbound placeholders are
    /// emitted as their token name.
    #[must_use]
    pub fn expand(&self, bindings: &Bindings) -> Vec<OsString> {
        self.0
            .iter()
            .map(|arg| match arg {
                Arg::Literal(text) => OsString::from(text),
                Arg::Token(token) => bindings
                    .get(*token)
                    .map_or_else(|| OsString::from(token.as_str()), OsStr::to_os_string),
            })
            .collect()
    }
}

/// Concrete values for template placeholders.
#[derive(Debug, Clone, Default)]
pub struct Bindings(FxHashMap<Token, OsString>);

impl Bindings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn bind(mut self, token: Token, value: impl Into<OsString>) -> Self {
        self.0.insert(token, value.into());
        self
    }

    #[must_use]
    pub fn get(&self, token: Token) -> Option<&OsStr> {
        self.0.get(&token).map(OsString::as_os_str)
    }
}

/// A component that runs an external executable with a templated argument list.
#[derive(Debug, Clone, Default)]
pub struct CommandLineAdapter {
    configuration: Configuration,
    executable: String,
    arguments: CommandTemplate,
}

impl CommandLineAdapter {
    /// Builds an adapter whose template must contain every one of `required`.
    ///
    /// # Errors
    /// * [`ConfigError::MissingKeys`] when `executable` or `arguments` is absent.
    /// * [`ConfigError::MissingTokens`] when the template lacks a required token.
    pub fn from_config(config: &Value, required: &[Token]) -> Result<Self, ConfigError> {
        let mapping = validator::as_mapping(config)?;
        validator::check_required_keys(mapping, &[EXECUTABLE, ARGUMENTS])?;

        let executable = validator::string_value(mapping, EXECUTABLE)?.to_owned();
        let arguments = CommandTemplate::parse(&mapping[ARGUMENTS])?;

        let missing = arguments.missing(required);
        if !missing.is_empty() {
            return Err(ConfigError::MissingTokens { tokens: missing, context: None });
        }

        Ok(Self { configuration: mapping.clone(), executable, arguments })
    }

    #[must_use]
    pub fn executable(&self) -> &str {
        &self.executable
    }

    #[must_use]
    pub const fn arguments(&self) -> &CommandTemplate {
        &self.arguments
    }

    /// The executable followed by the expanded template.
    #[must_use]
    pub fn command_line(&self, bindings: &Bindings) -> Vec<OsString> {
        let mut command = Vec::with_capacity(self.arguments.args().len() + 1);
        command.push(OsString::from(&self.executable));
        command.extend(self.arguments.expand(bindings));
        command
    }
}

impl Component for CommandLineAdapter {
    fn configure(&mut self, config: &Value) -> Result<(), ConfigError> {
        *self = Self::from_config(config, &[])?;
        Ok(())
    }

    fn configuration(&self) -> &Configuration {
        &self.configuration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn template(value: &Value) -> CommandTemplate {
        CommandTemplate::parse(value).expect("template")
    }

    #[test]
    fn expansion_keeps_order_and_literals() {
        let args =
            template(&json!(["prov-compare", "-f", "FORMAT1", "-F", "FORMAT2", "FILE1", "FILE2"]));
        let bindings = Bindings::new()
            .bind(Token::Format1, "xml")
            .bind(Token::Format2, "json")
            .bind(Token::File1, "a.provx")
            .bind(Token::File2, "b.json");

        assert_eq!(
            args.expand(&bindings),
            ["prov-compare", "-f", "xml", "-F", "json", "a.provx", "b.json"]
        );
    }

    #[test]
    fn every_occurrence_is_substituted_and_unbound_tokens_stay() {
        let args = template(&json!(["INPUT", "--copy", "INPUT", "OUTPUT"]));
        let bindings = Bindings::new().bind(Token::Input, "in.json");
        assert_eq!(args.expand(&bindings), ["in.json", "--copy", "in.json", "OUTPUT"]);
    }

    #[test]
    fn string_templates_are_split_and_scalars_stringified() {
        assert_eq!(
            template(&json!("-infile  FILE1 -compare FILE2")).args(),
            [
                Arg::Literal("-infile".into()),
                Arg::Token(Token::File1),
                Arg::Literal("-compare".into()),
                Arg::Token(Token::File2),
            ]
        );
        assert_eq!(template(&json!(["-n", 3, true])).expand(&Bindings::new()), ["-n", "3", "true"]);

        assert!(CommandTemplate::parse(&json!([["nested"]])).is_err());
        assert!(CommandTemplate::parse(&json!({ "a": 1 })).is_err());
    }

    #[test]
    fn tokens_match_exactly() {
        let args = template(&json!(["input", "--out=OUTPUT", "FORMAT"]));
        assert_eq!(
            args.missing(&[Token::Input, Token::Output, Token::Format]),
            [Token::Input, Token::Output]
        );
    }

    #[test]
    fn adapter_requires_keys_and_tokens() {
        let err = CommandLineAdapter::from_config(&json!({ "formats": ["json"] }), &[])
            .expect_err("no keys");
        assert!(matches!(
            err,
            ConfigError::MissingKeys { ref keys, .. } if keys == &["executable", "arguments"]
        ));

        let config =
            json!({ "executable": "prov-convert", "arguments": ["-f", "FORMAT", "INPUT"] });
        let required = [Token::Format, Token::Input, Token::Output];
        let err = CommandLineAdapter::from_config(&config, &required).expect_err("OUTPUT missing");
        assert!(matches!(
            err,
            ConfigError::MissingTokens { ref tokens, .. } if tokens == &[Token::Output]
        ));
    }

    #[test]
    fn command_line_prepends_executable_and_retains_configuration() {
        let mut adapter = CommandLineAdapter::default();
        let config = json!({
            "executable": "python",
            "arguments": "prov-convert INPUT",
            "skip-tests": [2],
        });
        adapter.configure(&config).expect("configured");

        let command = adapter.command_line(&Bindings::new().bind(Token::Input, "a.json"));
        assert_eq!(command, ["python", "prov-convert", "a.json"]);
        assert_eq!(adapter.configuration()["skip-tests"], json!([2]));
    }
}
