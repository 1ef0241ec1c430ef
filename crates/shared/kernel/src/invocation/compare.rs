use super::staging::{LocalFormats, local_format};
use super::{Exit, run};
use crate::comparator::Comparison;
use crate::component::{Bindings, CommandLineAdapter};
use crate::error::ComparisonError;
use interop_domain::{CanonicalFormat, Token};

/// Exit code with which comparison tools report non-equivalent documents.
const NOT_EQUIVALENT: i32 = 1;

/// Runs a comparator tool for an already checked `comparison`.
///
/// `FORMAT1` and `FORMAT2` bind the formats, renamed through `local`; `FILE1` and
/// `FILE2` bind the paths as given. Exit code 0 means equivalent, 1 means not.
///
/// # Errors
/// * [`ComparisonError::NotEquivalent`] on exit code 1.
/// * [`ComparisonError::Exit`] / [`ComparisonError::Terminated`] on any other failure.
/// * [`ComparisonError::Io`] when the tool cannot be launched.
pub fn invoke_comparator(
    adapter: &CommandLineAdapter,
    local: LocalFormats,
    comparison: &Comparison<'_>,
) -> Result<(), ComparisonError> {
    let format =
        |format: CanonicalFormat| local_format(local, format).unwrap_or_else(|| format.as_str());

    let bindings = Bindings::new()
        .bind(Token::Format1, format(comparison.format1))
        .bind(Token::Format2, format(comparison.format2))
        .bind(Token::File1, comparison.file1.as_os_str())
        .bind(Token::File2, comparison.file2.as_os_str());

    let executable = adapter.executable().to_owned();
    match run(&adapter.command_line(&bindings))? {
        Exit::Code(0) => Ok(()),
        Exit::Code(NOT_EQUIVALENT) => {
            Err(ComparisonError::NotEquivalent { executable, code: NOT_EQUIVALENT, context: None })
        },
        Exit::Code(code) => Err(ComparisonError::Exit { executable, code, context: None }),
        Exit::Signal => Err(ComparisonError::Terminated { executable, context: None }),
    }
}
