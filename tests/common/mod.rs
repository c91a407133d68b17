#![allow(dead_code)]

use std::path::Path;
use std::process::{Command, Output};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Runs the `duration-table` binary with `args`.
pub fn duration_table(args: &[&str]) -> std::io::Result<Output> {
    Command::new(env!("CARGO_BIN_EXE_duration-table"))
        .args(args)
        .output()
}

/// Runs the `glyph-width` binary with `args` from `cwd`.
pub fn glyph_width(cwd: &Path, args: &[&str]) -> std::io::Result<Output> {
    Command::new(env!("CARGO_BIN_EXE_glyph-width"))
        .current_dir(cwd)
        .args(args)
        .output()
}

/// Writes `data` to `rel_path` under `root`, creating parent directories.
pub fn write_file(root: &Path, rel_path: &str, data: &[u8]) -> std::io::Result<()> {
    let path = root.join(rel_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, data)
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}
