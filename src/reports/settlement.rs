//! Settlement report
//!
//! A read-only projection of the ledger: for every expense, who paid and
//! what each member of the split owes. The same report backs the `report`
//! command and every export format.

use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::config::Settings;
use crate::display::format::format_share;
use crate::error::{SplitError, SplitResult};
use crate::models::{ExpenseId, Money};
use crate::storage::Storage;

/// Placeholder shown for a split member without a known address
pub const NO_ADDRESS: &str = "No address";

/// Text printed instead of a report when the ledger is empty
pub const EMPTY_REPORT: &str = "No expenses to print.";

/// One member's share of an expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareLine {
    pub name: String,
    pub address: Option<String>,
    /// Unrounded share
    pub share: f64,
}

/// One expense and its split
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettlementEntry {
    pub id: ExpenseId,
    pub description: String,
    pub amount: Money,
    pub paid_by: String,
    pub shares: Vec<ShareLine>,
}

/// Settlement report over the whole ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettlementReport {
    /// Currency label appended to amounts
    pub currency: String,
    /// Decimal places used for shares
    pub precision: usize,
    /// Expenses in insertion order
    pub entries: Vec<SettlementEntry>,
    /// Sum of all expense amounts
    pub total: Money,
}

impl SettlementReport {
    /// Build the report from the current store
    pub fn generate(storage: &Storage, settings: &Settings) -> Self {
        let entries: Vec<SettlementEntry> = storage
            .expenses
            .list()
            .iter()
            .map(|expense| {
                let share = expense.share();
                let shares = expense
                    .split_among
                    .iter()
                    .map(|name| ShareLine {
                        name: name.clone(),
                        address: storage
                            .participants
                            .get(name)
                            .and_then(|p| p.address.clone()),
                        share,
                    })
                    .collect();

                SettlementEntry {
                    id: expense.id,
                    description: expense.description.clone(),
                    amount: expense.amount,
                    paid_by: expense.paid_by.clone(),
                    shares,
                }
            })
            .collect();

        Self {
            currency: settings.currency_symbol.clone(),
            precision: settings.share_precision,
            total: entries.iter().map(|e| e.amount).sum(),
            entries,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the plain-text report
    pub fn format_terminal(&self) -> String {
        if self.entries.is_empty() {
            return EMPTY_REPORT.to_string();
        }

        let mut output = String::from("Split Details:\n\n");
        for entry in &self.entries {
            output.push_str(&format!("Expense: {}\n", entry.description));
            output.push_str(&format!(
                "Amount: {}\n",
                entry.amount.format_with_symbol(&self.currency)
            ));
            output.push_str(&format!("Paid by: {}\n", entry.paid_by));
            output.push_str("Split among:\n");
            for line in &entry.shares {
                output.push_str(&format!(
                    "  - {} ({}): {}\n",
                    line.name,
                    line.address.as_deref().unwrap_or(NO_ADDRESS),
                    format_share(line.share, self.precision, &self.currency)
                ));
            }
            output.push('\n');
        }

        output
    }

    /// Write one CSV row per share line
    pub fn export_csv<W: Write>(&self, writer: W) -> SplitResult<()> {
        let mut out = csv::Writer::from_writer(writer);
        let export_err = |e: csv::Error| SplitError::Export(e.to_string());

        out.write_record([
            "expense_id",
            "description",
            "amount",
            "paid_by",
            "participant",
            "address",
            "share",
        ])
        .map_err(export_err)?;

        for entry in &self.entries {
            for line in &entry.shares {
                out.write_record([
                    entry.id.to_string(),
                    entry.description.clone(),
                    entry.amount.to_string(),
                    entry.paid_by.clone(),
                    line.name.clone(),
                    line.address.clone().unwrap_or_default(),
                    format!("{:.*}", self.precision, line.share),
                ])
                .map_err(export_err)?;
            }
        }

        out.flush()?;
        Ok(())
    }
}

/// Plain-text settlement report for the current store
pub fn render_report(storage: &Storage, settings: &Settings) -> String {
    SettlementReport::generate(storage, settings).format_terminal()
}
