//! Digest report rendering.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use crate::inputs::STDIN_OPERAND;

/// Prefix used when a single input is hashed.
pub(crate) const SINGLE_PREFIX: &str = "The SHA-256 hash of the file is: ";

/// Output layout selected on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    /// Descriptive sentence per input
    Text,
    /// `<digest>  <path>` lines
    Sums,
    /// JSON array of report objects
    Json,
}

/// Digest recorded for one successfully hashed input.
#[derive(Serialize, Debug, Clone)]
pub(crate) struct HashReport {
    pub(crate) path: String,
    pub(crate) sha256: String,
    pub(crate) bytes: u64,
}

/// Render reports in the requested format, without a trailing newline.
pub(crate) fn render(format: OutputFormat, reports: &[HashReport], multiple: bool) -> Result<String> {
    let text = match format {
        OutputFormat::Text => reports
            .iter()
            .map(|report| {
                if report.path == STDIN_OPERAND {
                    format!("The SHA-256 hash of standard input is: {}", report.sha256)
                } else if multiple {
                    format!("The SHA-256 hash of {} is: {}", report.path, report.sha256)
                } else {
                    format!("{SINGLE_PREFIX}{}", report.sha256)
                }
            })
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Sums => reports
            .iter()
            .map(|report| format!("{}  {}", report.sha256, report.path))
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Json => {
            serde_json::to_string_pretty(reports).context("serialize hash reports")?
        }
    };
    Ok(text)
}
