//! The comparator contract.

use crate::component::Component;
use crate::converter::extension;
use crate::error::{ComparisonError, ConfigError};
use crate::validator::{self, FormatSet};
use interop_domain::constants::FORMATS;
use interop_domain::{CanonicalFormat, Configuration};
use std::path::Path;

/// Formats a comparator accepts on either side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComparatorFormats(FormatSet);

impl ComparatorFormats {
    /// Reads the required, non-empty `formats` list.
    ///
    /// # Errors
    /// [`ConfigError`] when absent, empty or holding a non-canonical format.
    pub fn from_config(config: &Configuration) -> Result<Self, ConfigError> {
        validator::formats(config, FORMATS).map(Self)
    }

    #[must_use]
    pub fn contains(&self, format: CanonicalFormat) -> bool {
        self.0.contains(&format)
    }

    #[must_use]
    pub fn all(&self) -> Vec<CanonicalFormat> {
        self.0.iter().copied().collect()
    }

    /// Checks both formats are declared, then that both files exist.
    ///
    /// # Errors
    /// [`ComparisonError::UnsupportedFormat`] or [`ComparisonError::MissingFile`].
    pub fn check<'a>(
        &self,
        file1: &'a Path,
        file2: &'a Path,
        format1: CanonicalFormat,
        format2: CanonicalFormat,
    ) -> Result<Comparison<'a>, ComparisonError> {
        for format in [format1, format2] {
            if !self.contains(format) {
                return Err(ComparisonError::UnsupportedFormat {
                    format: format.to_string(),
                    context: None,
                });
            }
        }
        for file in [file1, file2] {
            if !file.is_file() {
                return Err(ComparisonError::MissingFile {
                    path: file.to_path_buf(),
                    context: None,
                });
            }
        }

        Ok(Comparison { file1, file2, format1, format2 })
    }
}

/// A validated comparison request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison<'a> {
    pub file1: &'a Path,
    pub file2: &'a Path,
    pub format1: CanonicalFormat,
    pub format2: CanonicalFormat,
}

/// Decides whether two documents, possibly in different formats, are semantically equivalent.
pub trait Comparator: Component {
    fn formats(&self) -> &ComparatorFormats;

    /// Runs a comparison whose formats and files have already been checked.
    ///
    /// # Errors
    /// [`ComparisonError`] from the underlying tool.
    fn run_comparison(&self, comparison: &Comparison<'_>) -> Result<(), ComparisonError>;

    /// Succeeds when the documents are equivalent.
    ///
    /// # Errors
    /// [`ComparisonError::NotEquivalent`] when the tool judges them different; any
    /// other variant when the comparison itself could not be carried out.
    fn compare(
        &self,
        file1: &Path,
        file2: &Path,
        format1: CanonicalFormat,
        format2: CanonicalFormat,
    ) -> Result<(), ComparisonError> {
        let comparison = self.formats().check(file1, file2, format1, format2)?;
        self.run_comparison(&comparison)
    }

    /// Like [`compare`](Self::compare), with both formats taken from the file extensions.
    ///
    /// # Errors
    /// See [`compare`](Self::compare).
    fn compare_files(&self, file1: &Path, file2: &Path) -> Result<(), ComparisonError> {
        let format = |path: &Path| {
            CanonicalFormat::from_path(path).ok_or_else(|| ComparisonError::UnsupportedFormat {
                format: extension(path),
                context: None,
            })
        };
        self.compare(file1, file2, format(file1)?, format(file2)?)
    }
}
