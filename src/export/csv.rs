//! CSV Export functionality
//!
//! One row per participant share of each expense, spreadsheet-compatible.

use std::io::Write;

use crate::config::Settings;
use crate::error::SplitResult;
use crate::reports::SettlementReport;
use crate::storage::Storage;

/// Export the settlement shares to CSV
pub fn export_settlement_csv<W: Write>(
    storage: &Storage,
    settings: &Settings,
    writer: &mut W,
) -> SplitResult<()> {
    SettlementReport::generate(storage, settings).export_csv(writer)
}
