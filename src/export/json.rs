//! JSON Export functionality
//!
//! Exports a snapshot of the session ledger to JSON with schema versioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Write;

use crate::config::Settings;
use crate::error::{SplitError, SplitResult};
use crate::models::{Participant, PaymentRequest};
use crate::reports::{BalanceReport, BalanceRow, SettlementReport};
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Snapshot of everything in the session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Confirmed participants
    pub participants: Vec<Participant>,

    /// Per-expense settlement
    pub settlement: SettlementReport,

    /// Net balances at export time
    pub balances: Vec<BalanceRow>,

    /// Payment requests sent this session
    pub requests: Vec<PaymentRequest>,
}

impl LedgerExport {
    /// Build a snapshot from the current store
    pub fn from_storage(storage: &Storage, settings: &Settings) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            participants: storage.participants.list().to_vec(),
            settlement: SettlementReport::generate(storage, settings),
            balances: BalanceReport::generate(storage, settings).rows,
            requests: storage.requests.list().to_vec(),
        }
    }

    /// Check schema version and that every share names a participant
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        let names: HashSet<&str> = self.participants.iter().map(|p| p.name.as_str()).collect();
        for entry in &self.settlement.entries {
            if !names.contains(entry.paid_by.as_str()) {
                return Err(format!(
                    "Expense {} references unknown payer {}",
                    entry.id, entry.paid_by
                ));
            }
            if let Some(line) = entry.shares.iter().find(|l| !names.contains(l.name.as_str())) {
                return Err(format!(
                    "Expense {} references unknown participant {}",
                    entry.id, line.name
                ));
            }
        }

        Ok(())
    }
}

/// Export the ledger snapshot to JSON
pub fn export_ledger_json<W: Write>(
    storage: &Storage,
    settings: &Settings,
    writer: &mut W,
    pretty: bool,
) -> SplitResult<()> {
    let export = LedgerExport::from_storage(storage, settings);
    export.validate().map_err(SplitError::Export)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| SplitError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{CreateExpenseInput, ExpenseService, ParticipantService, RequestService};

    fn populated_storage() -> Storage {
        let mut storage = Storage::in_memory();
        {
            let mut participants = ParticipantService::new(&mut storage);
            participants.add_with_address("Alice", "0xA").unwrap();
            participants.add_with_address("Bob", "0xB").unwrap();
        }
        ExpenseService::new(&mut storage)
            .add(
                CreateExpenseInput::parse("Lunch", "10", "Alice", vec!["Alice".into(), "Bob".into()])
                    .unwrap(),
            )
            .unwrap();
        RequestService::new(&mut storage)
            .send("Bob", Some("0xW"))
            .unwrap();
        storage
    }

    #[test]
    fn test_snapshot_contents() {
        let storage = populated_storage();
        let export = LedgerExport::from_storage(&storage, &Settings::default());

        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.participants.len(), 2);
        assert_eq!(export.settlement.entries.len(), 1);
        assert_eq!(export.requests.len(), 1);
        assert!(export.validate().is_ok());
    }

    #[test]
    fn test_json_round_trip_validates() {
        let storage = populated_storage();
        let mut output = Vec::new();
        export_ledger_json(&storage, &Settings::default(), &mut output, true).unwrap();

        let parsed: LedgerExport = serde_json::from_slice(&output).unwrap();
        assert!(parsed.validate().is_ok());
        assert_eq!(parsed.settlement.entries[0].amount.cents(), 1000);
    }

    #[test]
    fn test_validate_rejects_unknown_payer() {
        let storage = populated_storage();
        let mut export = LedgerExport::from_storage(&storage, &Settings::default());
        export.participants.retain(|p| p.name != "Alice");
        assert!(export.validate().unwrap_err().contains("unknown payer Alice"));
    }
}
