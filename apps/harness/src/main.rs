#![allow(clippy::print_stdout)]

mod args;

use crate::args::{Cli, Command};
use anyhow::{Context, Result, bail};
use clap::Parser;
use interop::domain::CanonicalFormat;
use interop::domain::config::{LogSettings, Settings};
use interop::kernel::config::load_settings;
use interop::kernel::{Comparator, Converter};
use interop::{Harness, comparator_factory, converter_factory, load_converter, skip_tests};
use interop_logger::{LevelFilter, Logger};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Environment variable naming the converter configuration document.
const CONVERTER_CONFIGURATION_ENV: &str = "PROV_CONVERTER_CONFIGURATION_FILE";
const DEFAULT_CONVERTER_CONFIGURATION: &str = "converter-configuration.yaml";

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings: Settings =
        load_settings(cli.settings.as_deref(), None).context("Critical: Settings are malformed")?;
    let _logger = init_logger(&settings.log)?;

    let config = cli.config.as_deref().or(settings.configuration.as_deref());
    match cli.command.unwrap_or(Command::List {}) {
        Command::List {} => list(config),
        Command::Convert { converter, input, output } => {
            convert(converter.as_deref(), &input, &output)
        },
        Command::Compare { file1, file2 } => compare(config, &file1, &file2),
    }
}

fn init_logger(log: &LogSettings) -> Result<Logger> {
    let level: LevelFilter =
        log.level.parse().with_context(|| format!("Invalid log level '{}'", log.level))?;

    let mut builder = Logger::builder().name(env!("CARGO_BIN_NAME")).level(level);
    if let Some(filter) = &log.filter {
        builder = builder.env_filter(filter);
    }
    if let Some(dir) = &log.dir {
        builder = builder.path(dir).json(log.json);
    }

    Ok(builder.init()?)
}

fn list(config: Option<&Path>) -> Result<()> {
    let harness = Harness::from_file(&comparator_factory(), config)?;

    for (format, comparator) in harness.comparators().by_format() {
        let name = harness
            .comparators()
            .by_name()
            .iter()
            .find(|(_, candidate)| Arc::ptr_eq(candidate, comparator))
            .map_or("?", |(name, _)| name.as_str());
        info!(%format, comparator = name, "Registered comparator");
    }

    let cases = harness.test_cases()?;
    for case in &cases {
        println!("{case}\t{}\t{}", case.file1.display(), case.file2.display());
    }
    info!(count = cases.len(), dir = %harness.test_cases_dir().display(), "Enumerated test cases");
    Ok(())
}

fn convert(explicit: Option<&Path>, input: &Path, output: &Path) -> Result<()> {
    let converter = load_converter(
        &converter_factory(),
        CONVERTER_CONFIGURATION_ENV,
        Path::new(DEFAULT_CONVERTER_CONFIGURATION),
        explicit,
    )?;
    let skipped = skip_tests(&*converter)?;
    if !skipped.is_empty() {
        info!(?skipped, "Converter skips test cases");
    }

    converter.convert(input, output).with_context(|| format!("Converting {}", input.display()))?;
    println!("{}", output.display());
    Ok(())
}

fn compare(config: Option<&Path>, file1: &Path, file2: &Path) -> Result<()> {
    let harness = Harness::from_file(&comparator_factory(), config)?;

    let Some(format) = CanonicalFormat::from_path(file2) else {
        bail!("Not a canonical format: {}", file2.display());
    };
    let Some(comparator) = harness.comparator_for(format) else {
        bail!("No comparator registered for {format}");
    };

    comparator
        .compare_files(file1, file2)
        .with_context(|| format!("Comparing {} with {}", file1.display(), file2.display()))?;
    println!("equivalent");
    Ok(())
}
