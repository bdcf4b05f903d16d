//! Balance Report
//!
//! Net position of every participant, as computed by the balance
//! calculator, rounded for display only.

use serde::{Deserialize, Serialize};
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::display::format::format_balance;
use crate::models::Money;
use crate::services::BalanceService;
use crate::storage::Storage;

/// Legend printed under the balance table
pub const BALANCE_HINT: &str = "Positive balance = owed money, Negative balance = owes money";

/// One participant's balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceRow {
    pub name: String,
    /// Unrounded net balance
    pub balance: f64,
}

/// Balance report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceReport {
    pub currency: String,
    pub precision: usize,
    /// Rows in participant registration order
    pub rows: Vec<BalanceRow>,
    /// Sum of all expense amounts
    pub total_expenses: Money,
}

#[derive(Tabled)]
struct BalanceTableRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Balance")]
    balance: String,
}

impl BalanceReport {
    /// Generate a balance report from the current store
    pub fn generate(storage: &Storage, settings: &Settings) -> Self {
        let balances = BalanceService::new(storage).balances();
        let rows = balances
            .iter()
            .map(|(name, balance)| BalanceRow {
                name: name.to_string(),
                balance,
            })
            .collect();

        Self {
            currency: settings.currency_symbol.clone(),
            precision: settings.share_precision,
            rows,
            total_expenses: storage.expenses.total(),
        }
    }

    /// Balance for `name` as displayed
    pub fn formatted(&self, name: &str) -> Option<String> {
        self.rows
            .iter()
            .find(|r| r.name == name)
            .map(|r| format_balance(r.balance, self.precision, &self.currency))
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        if self.rows.is_empty() {
            return "No friends added yet.\n".to_string();
        }

        let rows = self.rows.iter().map(|r| BalanceTableRow {
            name: r.name.clone(),
            balance: format_balance(r.balance, self.precision, &self.currency),
        });
        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Modify::new(Columns::single(1)).with(Alignment::right()));

        format!(
            "{}\nTotal expenses: {}\n{}\n",
            table,
            self.total_expenses.format_with_symbol(&self.currency),
            BALANCE_HINT
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{CreateExpenseInput, ExpenseService, ParticipantService};

    fn storage_with_expense(names: &[&str], amount: &str, paid_by: &str) -> Storage {
        let mut storage = Storage::in_memory();
        {
            let mut participants = ParticipantService::new(&mut storage);
            for name in names {
                participants.add_with_address(name, "0xabc").unwrap();
            }
        }
        ExpenseService::new(&mut storage)
            .add(
                CreateExpenseInput::parse(
                    "Dinner",
                    amount,
                    paid_by,
                    names.iter().map(|n| n.to_string()).collect(),
                )
                .unwrap(),
            )
            .unwrap();
        storage
    }

    #[test]
    fn test_signed_balances() {
        let storage = storage_with_expense(&["A", "B", "C"], "9", "A");
        let report = BalanceReport::generate(&storage, &Settings::default());

        assert_eq!(report.formatted("A").as_deref(), Some("+6.0000 ETH"));
        assert_eq!(report.formatted("B").as_deref(), Some("-3.0000 ETH"));
        assert_eq!(report.formatted("Z"), None);
        assert_eq!(report.total_expenses.cents(), 900);
    }

    #[test]
    fn test_terminal_output() {
        let storage = storage_with_expense(&["Alice", "Bob"], "10", "Alice");
        let output = BalanceReport::generate(&storage, &Settings::default()).format_terminal();

        assert!(output.contains("+5.0000 ETH"));
        assert!(output.contains("-5.0000 ETH"));
        assert!(output.contains("Total expenses: 10.00 ETH"));
        assert!(output.contains(BALANCE_HINT));
    }

    #[test]
    fn test_no_participants() {
        let storage = Storage::in_memory();
        let report = BalanceReport::generate(&storage, &Settings::default());
        assert_eq!(report.format_terminal(), "No friends added yet.\n");
    }
}
