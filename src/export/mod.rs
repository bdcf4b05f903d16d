//! Export module for Ether-Split
//!
//! Writes the settlement projection in several formats:
//! - Text: the plain settlement report
//! - CSV: one row per share (spreadsheet-compatible)
//! - JSON: full session snapshot, machine-readable
//! - YAML: full session snapshot, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_settlement_csv;
pub use json::{export_ledger_json, LedgerExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_ledger_yaml;

use clap::ValueEnum;
use std::fmt;
use std::io::Write;

use crate::config::Settings;
use crate::error::{SplitError, SplitResult};
use crate::reports::render_report;
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Plain-text settlement report
    Text,
    /// CSV, one row per share
    Csv,
    /// JSON session snapshot
    Json,
    /// YAML session snapshot
    Yaml,
}

impl ExportFormat {
    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Yaml => "yaml",
        };
        write!(f, "{}", name)
    }
}

/// Write the ledger in `format` to `writer`
pub fn write_export<W: Write>(
    storage: &Storage,
    settings: &Settings,
    format: ExportFormat,
    writer: &mut W,
) -> SplitResult<()> {
    match format {
        ExportFormat::Text => writeln!(writer, "{}", render_report(storage, settings).trim_end())
            .map_err(|e| SplitError::Export(e.to_string())),
        ExportFormat::Csv => export_settlement_csv(storage, settings, writer),
        ExportFormat::Json => {
            export_ledger_json(storage, settings, writer, true)?;
            writeln!(writer).map_err(|e| SplitError::Export(e.to_string()))
        }
        ExportFormat::Yaml => export_ledger_yaml(storage, settings, writer),
    }
}
