//! Command-line interface of `prov-interop`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "prov-interop")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Runs PROV converters and comparators configured for the interoperability harness"
)]
pub(crate) struct Cli {
    /// Harness configuration document (overrides PROV_HARNESS_CONFIGURATION_FILE)
    #[arg(long, short, global = true)]
    pub(crate) config: Option<PathBuf>,

    /// Runtime settings file (log level, log directory); INTEROP__* variables override it
    #[arg(long, global = true)]
    pub(crate) settings: Option<PathBuf>,

    #[command(subcommand)]
    pub(crate) command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Show registered comparators and enumerate the test cases (default)
    List {},
    /// Convert a document with a converter described by its own configuration file
    Convert {
        /// Converter configuration document (must name the adapter in `class`)
        #[arg(long)]
        converter: Option<PathBuf>,
        input: PathBuf,
        output: PathBuf,
    },
    /// Compare two documents with the comparator registered for the second one's format
    Compare { file1: PathBuf, file2: PathBuf },
}
