use interop_derive::interop_error;
use std::borrow::Cow;

// Variants with fields beyond source/context get no `From` impl, but still
// take part in `.context()`.
#[interop_error]
pub enum ToolError {
    #[error("{executable} returned {code}{}", format_context(.context))]
    Exit { executable: String, code: i32, context: Option<Cow<'static, str>> },

    #[error("I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },
}

fn main() {
    let failed: Result<(), ToolError> =
        Err(ToolError::Exit { executable: "tool".to_owned(), code: 2, context: None });
    let err = failed.context("Running tool").unwrap_err();
    assert_eq!(err.to_string(), "tool returned 2 (Running tool)");

    let io: ToolError = std::io::Error::other("disk").into();
    assert!(matches!(io, ToolError::Io { context: None, .. }));
}
