//! Operand resolution: files, directories and standard input.

use anyhow::{anyhow, Context, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File hashed when no operands are given.
pub(crate) const DEFAULT_INPUT: &str = "manish.txt";
/// Environment override for [`DEFAULT_INPUT`].
pub(crate) const DEFAULT_INPUT_ENV: &str = "SHA256_STREAM_INPUT";
/// Operand naming standard input.
pub(crate) const STDIN_OPERAND: &str = "-";

/// A single byte source to hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    /// Label used in reports.
    pub(crate) fn label(&self) -> String {
        match self {
            Input::Stdin => STDIN_OPERAND.to_string(),
            Input::File(path) => path.display().to_string(),
        }
    }
}

/// Operands to use when the command line names none.
pub(crate) fn default_operands() -> Vec<PathBuf> {
    match env::var(DEFAULT_INPUT_ENV) {
        Ok(value) if !value.trim().is_empty() => vec![PathBuf::from(value)],
        _ => vec![PathBuf::from(DEFAULT_INPUT)],
    }
}

/// Expand one operand into the inputs it names.
///
/// Directories are walked in file-name order when `recursive` is set and
/// rejected otherwise. Symlinks inside the walk are followed. Missing paths resolve to a file input so the open
/// failure is reported against the operand itself.
pub(crate) fn resolve_operand(operand: &Path, recursive: bool) -> Result<Vec<Input>> {
    if operand.as_os_str() == STDIN_OPERAND {
        return Ok(vec![Input::Stdin]);
    }
    let metadata = match fs::metadata(operand) {
        Ok(metadata) => metadata,
        Err(_) => return Ok(vec![Input::File(operand.to_path_buf())]),
    };
    if !metadata.is_dir() {
        return Ok(vec![Input::File(operand.to_path_buf())]);
    }
    if !recursive {
        return Err(anyhow!(
            "{} is a directory (use --recursive)",
            operand.display()
        ));
    }
    let mut inputs = Vec::new();
    for entry in WalkDir::new(operand).follow_links(true).sort_by_file_name() {
        let entry = entry.with_context(|| format!("walk directory {}", operand.display()))?;
        if entry.file_type().is_file() {
            inputs.push(Input::File(entry.into_path()));
        }
    }
    Ok(inputs)
}
