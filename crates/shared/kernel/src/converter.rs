//! The converter contract.

use crate::component::Component;
use crate::error::{ConfigError, ConversionError};
use crate::validator::{self, FormatSet};
use interop_domain::constants::{INPUT_FORMATS, OUTPUT_FORMATS};
use interop_domain::{CanonicalFormat, Configuration};
use std::path::Path;

/// Declared input and output formats of a converter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConverterFormats {
    pub input: FormatSet,
    pub output: FormatSet,
}

impl ConverterFormats {
    /// Reads `input-formats` and `output-formats`, both required and non-empty.
    ///
    /// # Errors
    /// [`ConfigError`] when either list is absent, empty or holds a non-canonical format.
    pub fn from_config(config: &Configuration) -> Result<Self, ConfigError> {
        validator::check_required_keys(config, &[INPUT_FORMATS, OUTPUT_FORMATS])?;
        Ok(Self {
            input: validator::formats(config, INPUT_FORMATS)?,
            output: validator::formats(config, OUTPUT_FORMATS)?,
        })
    }

    /// Union of both sides, inputs first.
    #[must_use]
    pub fn all(&self) -> Vec<CanonicalFormat> {
        let mut all = self.input.clone();
        all.extend(self.output.iter().copied());
        all.into_iter().collect()
    }

    /// Derives both formats from the file extensions and checks them against the
    /// declared sets, then checks the input exists. Touches nothing on disk.
    ///
    /// # Errors
    /// [`ConversionError::UnsupportedFormat`] or [`ConversionError::MissingInput`].
    pub fn check<'a>(
        &self,
        input: &'a Path,
        output: &'a Path,
    ) -> Result<Conversion<'a>, ConversionError> {
        let input_format = supported("input", input, &self.input)?;
        let output_format = supported("output", output, &self.output)?;

        if !input.is_file() {
            return Err(ConversionError::MissingInput { path: input.to_path_buf(), context: None });
        }

        Ok(Conversion { input, output, input_format, output_format })
    }
}

fn supported(
    role: &'static str,
    path: &Path,
    declared: &FormatSet,
) -> Result<CanonicalFormat, ConversionError> {
    CanonicalFormat::from_path(path).filter(|format| declared.contains(format)).ok_or_else(|| {
        ConversionError::UnsupportedFormat { role, format: extension(path), context: None }
    })
}

pub(crate) fn extension(path: &Path) -> String {
    path.extension().map(|ext| ext.to_string_lossy().into_owned()).unwrap_or_default()
}

/// A validated conversion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conversion<'a> {
    pub input: &'a Path,
    pub output: &'a Path,
    pub input_format: CanonicalFormat,
    pub output_format: CanonicalFormat,
}

/// Transforms a document from one canonical format to another.
pub trait Converter: Component {
    fn formats(&self) -> &ConverterFormats;

    /// Performs a conversion whose formats and input have already been checked.
    ///
    /// # Errors
    /// [`ConversionError`] from the underlying tool.
    fn run_conversion(&self, conversion: &Conversion<'_>) -> Result<(), ConversionError>;

    /// Converts `input` into `output`, formats taken from the extensions.
    ///
    /// Unsupported formats and a missing input are reported before any tool runs.
    ///
    /// # Errors
    /// [`ConversionError`].
    fn convert(&self, input: &Path, output: &Path) -> Result<(), ConversionError> {
        let conversion = self.formats().check(input, output)?;
        self.run_conversion(&conversion)
    }
}
