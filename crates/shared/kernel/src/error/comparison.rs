use std::borrow::Cow;
use std::path::PathBuf;

/// Failure of a single `compare` call.
#[interop_derive::interop_error]
pub enum ComparisonError {
    #[error("Unsupported format{}: '{format}'", format_context(.context))]
    UnsupportedFormat { format: String, context: Option<Cow<'static, str>> },

    #[error("File not found{}: {}", format_context(.context), .path.display())]
    MissingFile { path: PathBuf, context: Option<Cow<'static, str>> },

    /// The comparator ran and judged the documents different (exit code 1).
    #[error(
        "Documents are not equivalent{}: {executable} returned {code}",
        format_context(.context)
    )]
    NotEquivalent { executable: String, code: i32, context: Option<Cow<'static, str>> },

    #[error("{executable} returned {code}{}", format_context(.context))]
    Exit { executable: String, code: i32, context: Option<Cow<'static, str>> },

    #[error("{executable} was terminated by a signal{}", format_context(.context))]
    Terminated { executable: String, context: Option<Cow<'static, str>> },

    #[error("I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },
}

impl ComparisonError {
    /// Exit code observed from the tool, if the failure came from one.
    #[must_use]
    pub const fn exit_code(&self) -> Option<i32> {
        match self {
            Self::NotEquivalent { code, .. } | Self::Exit { code, .. } => Some(*code),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_not_equivalent(&self) -> bool {
        matches!(self, Self::NotEquivalent { .. })
    }
}
