use crate::LOCAL_FORMATS;
use interop_domain::{CanonicalFormat, Configuration, Token};
use interop_kernel::invocation::invoke_comparator;
use interop_kernel::{
    CommandLineAdapter, Comparator, ComparatorFormats, Comparison, ComparisonError, Component,
    ConfigError,
};
use serde_json::Value;

/// Runs ProvPy's `prov-compare`, e.g. `prov-compare -f xml -F json a.provx b.json`.
///
/// Only the format arguments are renamed; both files are passed as they are.
#[derive(Debug, Default)]
pub struct ProvPyComparator {
    command: CommandLineAdapter,
    formats: ComparatorFormats,
}

impl ProvPyComparator {
    pub const TOKENS: &'static [Token] =
        &[Token::Format1, Token::Format2, Token::File1, Token::File2];
}

impl Component for ProvPyComparator {
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

impl Comparator for ProvPyComparator {
    fn formats(&self) -> &ComparatorFormats {
        &self.formats
    }

    fn run_comparison(&self, comparison: &Comparison<'_>) -> Result<(), ComparisonError> {
        invoke_comparator(&self.command, LOCAL_FORMATS, comparison)
    }
}
