use interop_derive::interop_error;
use std::borrow::Cow;

#[interop_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<String, DemoError> {
    std::fs::read_to_string("/nonexistent").context("Reading demo file")
}

fn main() {
    let err = read().unwrap_err();
    assert!(err.to_string().starts_with("IO error (Reading demo file): "));

    let internal: DemoError = "boom".into();
    assert_eq!(internal.to_string(), "Internal error: boom");
}
