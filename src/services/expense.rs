//! Expense service
//!
//! Validates new expenses against the participant registry before they
//! reach the ledger, and audits every change.

use crate::audit::EntityType;
use crate::error::{SplitError, SplitResult};
use crate::models::{ExpenseId, ExpenseRecord, Money};
use crate::storage::Storage;

/// Input for recording a new expense
#[derive(Debug, Clone)]
pub struct CreateExpenseInput {
    pub description: String,
    pub amount: Money,
    pub paid_by: String,
    pub split_among: Vec<String>,
}

impl CreateExpenseInput {
    /// Build an input from raw user text, parsing the amount
    pub fn parse(
        description: impl Into<String>,
        amount: &str,
        paid_by: impl Into<String>,
        split_among: Vec<String>,
    ) -> SplitResult<Self> {
        let amount = Money::parse(amount).map_err(|e| SplitError::Validation(e.to_string()))?;
        Ok(Self {
            description: description.into(),
            amount,
            paid_by: paid_by.into(),
            split_among,
        })
    }
}

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a mut Storage,
}

impl<'a> ExpenseService<'a> {
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Record a new expense
    ///
    /// Rejects an empty description, a non-positive amount, an unknown payer,
    /// and an empty or unknown split. Also rejects an amount that would push
    /// the ledger total past the representable range. Nothing is written
    /// when rejected.
    pub fn add(&mut self, input: CreateExpenseInput) -> SplitResult<ExpenseRecord> {
        let description = input.description.trim();
        if description.is_empty() {
            return Err(SplitError::Validation(
                "Expense description cannot be empty".into(),
            ));
        }

        if !input.amount.is_positive() {
            return Err(SplitError::Validation(format!(
                "Expense amount must be positive (got {})",
                input.amount
            )));
        }
        if self
            .storage
            .expenses
            .total()
            .checked_add(input.amount)
            .is_none()
        {
            return Err(SplitError::Validation(format!(
                "Expense amount {} would overflow the ledger total",
                input.amount
            )));
        }

        let paid_by = input.paid_by.trim();
        if paid_by.is_empty() {
            return Err(SplitError::Validation("Expense must have a payer".into()));
        }
        if !self.storage.participants.contains(paid_by) {
            return Err(SplitError::participant_not_found(paid_by));
        }

        let split_among: Vec<String> = input
            .split_among
            .iter()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();
        if split_among.is_empty() {
            return Err(SplitError::Validation(
                "Expense must be split among at least one participant".into(),
            ));
        }
        if let Some(unknown) = split_among
            .iter()
            .find(|name| !self.storage.participants.contains(name))
        {
            return Err(SplitError::participant_not_found(unknown.as_str()));
        }

        let id = self.storage.expenses.next_id();
        let record = ExpenseRecord::new(id, description, input.amount, paid_by, split_among);
        record
            .validate()
            .map_err(|e| SplitError::Validation(e.to_string()))?;

        self.storage.expenses.push(record.clone());
        tracing::debug!(
            id = %record.id,
            amount = %record.amount,
            paid_by = %record.paid_by,
            split = record.split_count(),
            "expense added"
        );

        self.storage.log_create(
            EntityType::Expense,
            record.id.to_string(),
            Some(record.description.clone()),
            &record,
        );

        Ok(record)
    }

    /// Remove an expense by id
    pub fn remove(&mut self, id: ExpenseId) -> SplitResult<ExpenseRecord> {
        let record = self
            .storage
            .expenses
            .remove(id)
            .ok_or_else(|| SplitError::expense_not_found(id.to_string()))?;

        tracing::debug!(id = %record.id, "expense removed");
        self.storage.log_delete(
            EntityType::Expense,
            record.id.to_string(),
            Some(record.description.clone()),
            &record,
        );

        Ok(record)
    }

    /// Expenses in insertion order
    pub fn list(&self) -> &[ExpenseRecord] {
        self.storage.expenses.list()
    }
}
