use std::borrow::Cow;
use std::path::PathBuf;

/// Failure of a single `convert` call.
#[interop_derive::interop_error]
pub enum ConversionError {
    /// The file extension is not a declared input/output format.
    #[error("Unsupported {role} format{}: '{format}'", format_context(.context))]
    UnsupportedFormat { role: &'static str, format: String, context: Option<Cow<'static, str>> },

    #[error("Input file not found{}: {}", format_context(.context), .path.display())]
    MissingInput { path: PathBuf, context: Option<Cow<'static, str>> },

    #[error("{executable} returned {code}{}", format_context(.context))]
    Exit { executable: String, code: i32, context: Option<Cow<'static, str>> },

    #[error("{executable} was terminated by a signal{}", format_context(.context))]
    Terminated { executable: String, context: Option<Cow<'static, str>> },

    /// The tool reported success but left no output behind.
    #[error("Output file not found{}: {}", format_context(.context), .path.display())]
    MissingOutput { path: PathBuf, context: Option<Cow<'static, str>> },

    #[error("I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },
}

impl ConversionError {
    /// Exit code observed from the tool, if the failure came from one.
    #[must_use]
    pub const fn exit_code(&self) -> Option<i32> {
        match self {
            Self::Exit { code, .. } => Some(*code),
            _ => None,
        }
    }
}
