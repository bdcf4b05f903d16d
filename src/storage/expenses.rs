//! Expense ledger
//!
//! Ordered list of expense records. Insertion order is kept for display;
//! balance computation does not depend on it.

use crate::models::{ExpenseId, ExpenseRecord, Money};

/// In-memory ledger of expense records
#[derive(Debug, Default)]
pub struct ExpenseLedger {
    records: Vec<ExpenseRecord>,
    last_id: Option<ExpenseId>,
}

impl ExpenseLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next unique expense id
    pub fn next_id(&mut self) -> ExpenseId {
        let id = ExpenseId::next_after(self.last_id);
        self.last_id = Some(id);
        id
    }

    /// Append a record that has already been validated
    pub(crate) fn push(&mut self, record: ExpenseRecord) {
        if self.last_id.map_or(true, |last| record.id > last) {
            self.last_id = Some(record.id);
        }
        self.records.push(record);
    }

    /// Remove a record by id
    pub(crate) fn remove(&mut self, id: ExpenseId) -> Option<ExpenseRecord> {
        let index = self.records.iter().position(|r| r.id == id)?;
        Some(self.records.remove(index))
    }

    /// Mutable access for the participant-removal cascade
    pub(crate) fn records_mut(&mut self) -> &mut Vec<ExpenseRecord> {
        &mut self.records
    }

    pub fn get(&self, id: ExpenseId) -> Option<&ExpenseRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Records in insertion order
    pub fn list(&self) -> &[ExpenseRecord] {
        &self.records
    }

    /// Sum of all recorded amounts
    pub fn total(&self) -> Money {
        self.records.iter().map(|r| r.amount).sum()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
