//! Ledger consistency on participant removal
//!
//! When a participant leaves, every expense is rewritten so it no longer
//! mentions them. An expense that ends up with no payer, or with nobody left
//! to split among, is dropped from the ledger entirely.

use crate::audit::{generate_diff, AuditEntry, EntityType};
use crate::models::ExpenseRecord;
use crate::storage::ExpenseLedger;

/// An expense that survived the removal with fewer split members
#[derive(Debug, Clone, PartialEq)]
pub struct CascadeEdit {
    pub before: ExpenseRecord,
    pub after: ExpenseRecord,
}

/// Why a record was dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// The departing participant had paid for it
    PayerRemoved,
    /// The departing participant was the only one left in the split
    SplitEmptied,
}

impl std::fmt::Display for DropReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DropReason::PayerRemoved => write!(f, "payer removed"),
            DropReason::SplitEmptied => write!(f, "no one left to split among"),
        }
    }
}

/// An expense removed from the ledger by the cascade
#[derive(Debug, Clone, PartialEq)]
pub struct DroppedExpense {
    /// The record as it was before the participant left
    pub record: ExpenseRecord,
    pub reason: DropReason,
}

/// Everything the cascade changed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CascadeOutcome {
    pub edited: Vec<CascadeEdit>,
    pub dropped: Vec<DroppedExpense>,
}

impl CascadeOutcome {
    /// Whether the removal touched any expense
    pub fn is_empty(&self) -> bool {
        self.edited.is_empty() && self.dropped.is_empty()
    }

    /// Number of records edited or dropped
    pub fn affected_count(&self) -> usize {
        self.edited.len() + self.dropped.len()
    }

    /// Audit entries describing the cascade for participant `name`
    pub fn audit_entries(&self, name: &str) -> Vec<AuditEntry> {
        let mut entries = Vec::with_capacity(self.affected_count());

        for edit in &self.edited {
            let diff = match (
                serde_json::to_value(&edit.before),
                serde_json::to_value(&edit.after),
            ) {
                (Ok(before), Ok(after)) => generate_diff(&before, &after),
                _ => None,
            };
            entries.push(AuditEntry::update(
                EntityType::Expense,
                edit.after.id.to_string(),
                Some(edit.after.description.clone()),
                &edit.before,
                &edit.after,
                diff.map(|d| format!("participant {} removed: {}", name, d)),
            ));
        }

        for dropped in &self.dropped {
            entries.push(
                AuditEntry::delete(
                    EntityType::Expense,
                    dropped.record.id.to_string(),
                    Some(dropped.record.description.clone()),
                    &dropped.record,
                )
                .with_note(format!("participant {} removed: {}", name, dropped.reason)),
            );
        }

        entries
    }
}

/// Strip `name` from every expense in the ledger
///
/// Removes `name` from each split, clears the payer where `name` paid, then
/// deletes records left without a payer or without split members. Records
/// that never mentioned `name` are untouched.
pub fn cascade_participant_removal(ledger: &mut ExpenseLedger, name: &str) -> CascadeOutcome {
    let mut outcome = CascadeOutcome::default();

    ledger.records_mut().retain_mut(|record| {
        if !record.involves(name) {
            return true;
        }

        let before = record.clone();
        record.split_among.retain(|member| member != name);
        if record.paid_by == name {
            record.paid_by.clear();
        }

        if record.is_orphaned() {
            let reason = if record.paid_by.is_empty() {
                DropReason::PayerRemoved
            } else {
                DropReason::SplitEmptied
            };
            outcome.dropped.push(DroppedExpense {
                record: before,
                reason,
            });
            false
        } else {
            outcome.edited.push(CascadeEdit {
                before,
                after: record.clone(),
            });
            true
        }
    });

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::models::Money;

    fn add(ledger: &mut ExpenseLedger, description: &str, paid_by: &str, split: &[&str]) {
        let id = ledger.next_id();
        ledger.push(ExpenseRecord::new(
            id,
            description,
            Money::from_cents(900),
            paid_by,
            split.iter().map(|s| s.to_string()),
        ));
    }

    #[test]
    fn test_member_removed_from_split() {
        let mut ledger = ExpenseLedger::new();
        add(&mut ledger, "Dinner", "A", &["A", "B", "C"]);

        let outcome = cascade_participant_removal(&mut ledger, "C");

        assert_eq!(outcome.edited.len(), 1);
        assert!(outcome.dropped.is_empty());
        assert_eq!(ledger.list()[0].split_among, vec!["A", "B"]);
    }

    #[test]
    fn test_payer_removal_drops_expense() {
        let mut ledger = ExpenseLedger::new();
        add(&mut ledger, "Dinner", "C", &["A", "B"]);

        let outcome = cascade_participant_removal(&mut ledger, "C");

        assert!(ledger.is_empty());
        assert_eq!(outcome.dropped.len(), 1);
        assert_eq!(outcome.dropped[0].reason, DropReason::PayerRemoved);
        assert_eq!(outcome.dropped[0].record.paid_by, "C");
    }

    #[test]
    fn test_sole_member_removal_drops_expense() {
        let mut ledger = ExpenseLedger::new();
        add(&mut ledger, "Gift", "A", &["C"]);

        let outcome = cascade_participant_removal(&mut ledger, "C");

        assert!(ledger.is_empty());
        assert_eq!(outcome.dropped[0].reason, DropReason::SplitEmptied);
    }

    #[test]
    fn test_unrelated_expenses_untouched() {
        let mut ledger = ExpenseLedger::new();
        add(&mut ledger, "Coffee", "A", &["A", "B"]);
        add(&mut ledger, "Taxi", "C", &["B", "C"]);
        add(&mut ledger, "Snacks", "B", &["A", "C"]);

        let outcome = cascade_participant_removal(&mut ledger, "C");

        let remaining: Vec<_> = ledger.list().iter().map(|r| r.description.as_str()).collect();
        assert_eq!(remaining, vec!["Coffee", "Snacks"]);
        assert_eq!(outcome.affected_count(), 2);
        assert!(ledger.list().iter().all(|r| !r.involves("C")));
    }

    #[test]
    fn test_unknown_name_is_noop() {
        let mut ledger = ExpenseLedger::new();
        add(&mut ledger, "Coffee", "A", &["A", "B"]);

        let outcome = cascade_participant_removal(&mut ledger, "Zed");
        assert!(outcome.is_empty());
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_audit_entries() {
        let mut ledger = ExpenseLedger::new();
        add(&mut ledger, "Dinner", "A", &["A", "C"]);
        add(&mut ledger, "Taxi", "C", &["A"]);

        let outcome = cascade_participant_removal(&mut ledger, "C");
        let entries = outcome.audit_entries("C");

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].operation, Operation::Update);
        assert!(entries[0]
            .diff_summary
            .as_deref()
            .unwrap()
            .contains("split_among: [\"A\", \"C\"] -> [\"A\"]"));
        assert_eq!(entries[1].operation, Operation::Delete);
        assert_eq!(
            entries[1].diff_summary.as_deref(),
            Some("participant C removed: payer removed")
        );
    }
}
