use crate::LOCAL_FORMATS;
use interop_domain::{CanonicalFormat, Configuration, Token};
use interop_kernel::invocation::invoke_comparator;
use interop_kernel::{
    CommandLineAdapter, Comparator, ComparatorFormats, Comparison, ComparisonError, Component,
    ConfigError,
};
use serde_json::Value;

/// Runs `provconvert -infile FILE1 -compare FILE2`. The format tokens are optional.
#[derive(Debug, Default)]
pub struct ProvToolboxComparator {
    command: CommandLineAdapter,
    formats: ComparatorFormats,
}

impl ProvToolboxComparator {
    pub const TOKENS: &'static [Token] = &[Token::File1, Token::File2];
}

impl Component for ProvToolboxComparator {
    fn configure(&mut self, config: &Value) -> Result<(), ConfigError> {
        let command = CommandLineAdapter::from_config(config, Self::TOKENS)?;
        self.formats = ComparatorFormats::from_config(command.configuration())?;
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

impl Comparator for ProvToolboxComparator {
    fn formats(&self) -> &ComparatorFormats {
        &self.formats
    }

    fn run_comparison(&self, comparison: &Comparison<'_>) -> Result<(), ComparisonError> {
        invoke_comparator(&self.command, LOCAL_FORMATS, comparison)
    }
}
