//! YAML Export functionality
//!
//! Writes the same snapshot as the JSON export in human-readable form.

use std::io::Write;

use crate::config::Settings;
use crate::error::{SplitError, SplitResult};
use crate::export::json::LedgerExport;
use crate::storage::Storage;

/// Export the ledger snapshot to YAML
pub fn export_ledger_yaml<W: Write>(
    storage: &Storage,
    settings: &Settings,
    writer: &mut W,
) -> SplitResult<()> {
    let export = LedgerExport::from_storage(storage, settings);
    let export_err = |e: std::io::Error| SplitError::Export(e.to_string());

    writeln!(writer, "# Ether-Split Ledger Export").map_err(export_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(export_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(export_err)?;
    writeln!(writer, "#").map_err(export_err)?;
    writeln!(
        writer,
        "# Positive balance = owed money, negative balance = owes money."
    )
    .map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| SplitError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{CreateExpenseInput, ExpenseService, ParticipantService};

    #[test]
    fn test_yaml_export() {
        let mut storage = Storage::in_memory();
        ParticipantService::new(&mut storage)
            .add_with_address("Alice", "0xA")
            .unwrap();
        ExpenseService::new(&mut storage)
            .add(CreateExpenseInput::parse("Snacks", "4.5", "Alice", vec!["Alice".into()]).unwrap())
            .unwrap();

        let mut output = Vec::new();
        export_ledger_yaml(&storage, &Settings::default(), &mut output).unwrap();
        let yaml = String::from_utf8(output).unwrap();

        assert!(yaml.starts_with("# Ether-Split Ledger Export"));
        assert!(yaml.contains("description: Snacks"));

        let body: String = yaml
            .lines()
            .filter(|l| !l.starts_with('#'))
            .collect::<Vec<_>>()
            .join("\n");
        let parsed: LedgerExport = serde_yaml::from_str(&body).unwrap();
        assert_eq!(parsed.participants[0].name, "Alice");
    }
}
