//! Stand-in tools: `/bin/sh` scripts that record their arguments.

#![allow(dead_code, unreachable_pub)]

use std::fs;
use std::path::{Path, PathBuf};

pub struct FakeTool {
    pub script: PathBuf,
    record: PathBuf,
}

impl FakeTool {
    /// Writes a script running `body` after recording `"$@"`, one argument per line.
    pub fn new(dir: &Path, name: &str, body: &str) -> Self {
        let script = dir.join(format!("{name}.sh"));
        let record = dir.join(format!("{name}.args"));
        let text = format!("#!/bin/sh\nprintf '%s\\n' \"$@\" > '{}'\n{body}\n", record.display());
        fs::write(&script, text).expect("write fake tool");
        Self { script, record }
    }

    /// Arguments of the last run, without the script path. `None` if it never ran.
    pub fn args(&self) -> Option<Vec<String>> {
        let text = fs::read_to_string(&self.record).ok()?;
        Some(text.lines().map(str::to_owned).collect())
    }

    pub fn ran(&self) -> bool {
        self.record.exists()
    }
}

/// Sorted file names directly under `dir`.
pub fn entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("readable dir")
        .map(|entry| entry.expect("dir entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
