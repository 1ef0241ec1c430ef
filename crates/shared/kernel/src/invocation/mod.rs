//! Running external tools.
//!
//! The command line is always the adapter's executable followed by its expanded
//! template. Invocation is synchronous and unbounded in time; the calling thread
//! blocks until the child exits.

mod compare;
mod convert;
mod staging;

pub use self::compare::invoke_comparator;
pub use self::convert::invoke_converter;
pub use self::staging::{LocalFormats, local_format};

use std::ffi::OsString;
use std::io;
use std::process::{Command, ExitStatus};
use tracing::debug;

/// How a child process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Exit {
    Code(i32),
    Signal,
}

impl From<ExitStatus> for Exit {
    fn from(status: ExitStatus) -> Self {
        status.code().map_or(Self::Signal, Self::Code)
    }
}

/// Runs `command` to completion. Launch failures (e.g., executable not found)
/// come back as the unmodified [`io::Error`].
pub(crate) fn run(command: &[OsString]) -> io::Result<Exit> {
    let Some((program, args)) = command.split_first() else {
        return Err(io::Error::new(io::ErrorKind::InvalidInput, "empty command line"));
    };

    debug!(command = %render(command), "Invoking external tool");
    let status = Command::new(program).args(args).status()?;
    debug!(?status, "External tool finished");

    Ok(status.into())
}

fn render(command: &[OsString]) -> String {
    command.iter().map(|arg| arg.to_string_lossy()).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_command_is_rejected() {
        let err = run(&[]).expect_err("nothing to run");
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn missing_executable_surfaces_io_error() {
        let err = run(&["/nonexistent/interop-tool".into()]).expect_err("not found");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn render_joins_with_spaces() {
        let command = ["python".into(), "prov-convert".into(), "a b.json".into()];
        assert_eq!(render(&command), "python prov-convert a b.json");
    }
}
