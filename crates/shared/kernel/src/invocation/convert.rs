use super::staging::{LocalFormats, local_format, with_staging};
use super::{Exit, run};
use crate::component::{Bindings, CommandLineAdapter};
use crate::converter::Conversion;
use crate::error::ConversionError;
use interop_domain::Token;
use std::fs;
use tracing::debug;

/// Runs a converter tool for an already checked `conversion`.
///
/// Formats listed in `local` are handed to the tool under their local name: a
/// remapped input is copied into scratch with the local extension, a remapped
/// output is written in scratch and moved to the requested path on success.
/// `FORMAT` binds the (possibly local) output format, `INPUT` and `OUTPUT` the
/// paths the tool actually sees. Scratch files are gone when this returns, whatever
/// the outcome.
///
/// # Errors
/// * [`ConversionError::Exit`] / [`ConversionError::Terminated`] when the tool fails.
/// * [`ConversionError::MissingOutput`] when it succeeds without writing the output.
/// * [`ConversionError::Io`] for launch, staging and rename failures.
pub fn invoke_converter(
    adapter: &CommandLineAdapter,
    local: LocalFormats,
    conversion: &Conversion<'_>,
) -> Result<(), ConversionError> {
    let local_input = local_format(local, conversion.input_format);
    let local_output = local_format(local, conversion.output_format);
    let format = local_output.unwrap_or_else(|| conversion.output_format.as_str());

    with_staging(conversion.output, |staging| {
        let input = match local_input {
            Some(ext) => staging.stage_input(conversion.input, ext)?,
            None => conversion.input.to_path_buf(),
        };
        let output = match local_output {
            Some(ext) => staging.stage_output(conversion.output, ext)?,
            None => conversion.output.to_path_buf(),
        };

        let bindings = Bindings::new()
            .bind(Token::Format, format)
            .bind(Token::Input, input.as_os_str())
            .bind(Token::Output, output.as_os_str());

        let executable = adapter.executable().to_owned();
        match run(&adapter.command_line(&bindings))? {
            Exit::Code(0) => {},
            Exit::Code(code) => {
                return Err(ConversionError::Exit { executable, code, context: None });
            },
            Exit::Signal => return Err(ConversionError::Terminated { executable, context: None }),
        }

        if !output.is_file() {
            return Err(ConversionError::MissingOutput { path: output, context: None });
        }
        if output != conversion.output {
            debug!(
                from = %output.display(),
                to = %conversion.output.display(),
                "Moving converted document"
            );
            fs::rename(&output, conversion.output)?;
        }

        Ok(())
    })
}
