use interop_derive::interop_error;

#[interop_error]
pub enum DemoError {
    #[error("IO error: {source}")]
    Io { source: std::io::Error, context: String },
}

fn main() {}
