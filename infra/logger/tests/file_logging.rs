use interop_logger::{LevelFilter, Logger};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn json_file_logging_writes_structured_lines() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");

    let logger = Logger::builder()
        .name("interop-file-logging")
        .console(false)
        .path(&log_dir)
        .json(true)
        .level(LevelFilter::INFO)
        .init()?;
    assert!(logger.has_file_output());

    tracing::info!(component = "ProvPy", "registered component");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let contents = fs::read_to_string(&log_file)?;
    let line =
        contents.lines().find(|line| line.contains("registered component")).expect("log line");
    let parsed: serde_json::Value = serde_json::from_str(line)?;
    assert_eq!(parsed["fields"]["component"], "ProvPy");

    Ok(())
}
