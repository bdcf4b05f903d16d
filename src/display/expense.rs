//! Expense display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::format::{format_share, truncate};
use crate::models::{ExpenseRecord, Money};

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Paid by")]
    paid_by: String,
    #[tabled(rename = "Split among")]
    split_among: String,
    #[tabled(rename = "Per person")]
    per_person: String,
}

/// Format the expense ledger as a table followed by its total
pub fn format_expense_list(expenses: &[ExpenseRecord], currency: &str, precision: usize) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let rows = expenses.iter().map(|e| ExpenseRow {
        id: e.id.to_string(),
        description: truncate(&e.description, 32),
        amount: e.amount.format_with_symbol(currency),
        paid_by: e.paid_by.clone(),
        split_among: e.split_among.join(", "),
        per_person: format_share(e.share(), precision, currency),
    });
    let mut table = Table::new(rows);
    table.with(Style::rounded());

    let total: Money = expenses.iter().map(|e| e.amount).sum();
    format!("{}\nTotal: {}\n", table, total.format_with_symbol(currency))
}

/// One-line confirmation shown after an expense is recorded
pub fn format_expense_added(expense: &ExpenseRecord, currency: &str) -> String {
    format!(
        "Recorded expense {} \"{}\": {} paid by {}, split {} ways",
        expense.id,
        expense.description,
        expense.amount.format_with_symbol(currency),
        expense.paid_by,
        expense.split_count()
    )
}
