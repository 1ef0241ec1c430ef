use crate::LOCAL_FORMATS;
use interop_domain::{CanonicalFormat, Configuration, Token};
use interop_kernel::invocation::invoke_converter;
use interop_kernel::{
    CommandLineAdapter, Component, ConfigError, Conversion, ConversionError, Converter,
    ConverterFormats,
};
use serde_json::Value;

/// Runs `provconvert` to convert a document.
///
/// ```yaml
/// executable: /home/user/ProvToolbox/bin/provconvert
/// arguments: [-infile, INPUT, -outfile, OUTPUT]
/// input-formats: [provn, ttl, trig, provx, json]
/// output-formats: [provn, ttl, trig, provx, json]
/// ```
///
/// `FORMAT` is optional; when present it receives the canonical output format.
#[derive(Debug, Default)]
pub struct ProvToolboxConverter {
    command: CommandLineAdapter,
    formats: ConverterFormats,
}

impl ProvToolboxConverter {
    pub const TOKENS: &'static [Token] = &[Token::Input, Token::Output];
}

impl Component for ProvToolboxConverter {
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

impl Converter for ProvToolboxConverter {
    fn formats(&self) -> &ConverterFormats {
        &self.formats
    }

    fn run_conversion(&self, conversion: &Conversion<'_>) -> Result<(), ConversionError> {
        invoke_converter(&self.command, LOCAL_FORMATS, conversion)
    }
}
