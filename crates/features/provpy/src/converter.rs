use crate::LOCAL_FORMATS;
use interop_domain::{CanonicalFormat, Configuration, Token};
use interop_kernel::invocation::invoke_converter;
use interop_kernel::{
    CommandLineAdapter, Component, ConfigError, Conversion, ConversionError, Converter,
    ConverterFormats,
};
use serde_json::Value;

/// Runs ProvPy's `prov-convert`.
///
/// ```yaml
/// executable: python
/// arguments: [/home/user/prov/scripts/prov-convert, -f, FORMAT, INPUT, OUTPUT]
/// input-formats: [json]
/// output-formats: [provn, provx, json]
/// ```
#[derive(Debug, Default)]
pub struct ProvPyConverter {
    command: CommandLineAdapter,
    formats: ConverterFormats,
}

impl ProvPyConverter {
    pub const TOKENS: &'static [Token] = &[Token::Format, Token::Input, Token::Output];

    #[must_use]
    pub const fn command(&self) -> &CommandLineAdapter {
        &self.command
    }
}

impl Component for ProvPyConverter {
    fn configure(&mut self, config: &Value) -> Result<(), ConfigError> {
        let command = CommandLineAdapter::from_config(config, Self::TOKENS)?;
        self.formats = ConverterFormats::from_config(command.configuration())?;
        self.command = command;
        Ok(())
    }

    fn configuration(&self) -> &Configuration {
        self.command.configuration()
    }

    fn declared_formats(&self) -> Vec<CanonicalFormat> {
        self.formats.all()
    }
}

impl Converter for ProvPyConverter {
    fn formats(&self) -> &ConverterFormats {
        &self.formats
    }

    fn run_conversion(&self, conversion: &Conversion<'_>) -> Result<(), ConversionError> {
        invoke_converter(&self.command, LOCAL_FORMATS, conversion)
    }
}
