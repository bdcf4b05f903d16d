//! Balance calculation
//!
//! Net balances are derived from scratch on every read. A positive balance
//! means the group owes the participant; negative means the participant
//! owes the group. Values carry full `f64` precision; rounding is left to
//! the display layer.

use std::collections::HashMap;

use crate::models::{ExpenseRecord, Participant};
use crate::storage::Storage;

/// Net balance of every participant, in registration order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BalanceMap {
    entries: Vec<(String, f64)>,
    index: HashMap<String, usize>,
}

impl BalanceMap {
    fn with_participants(participants: &[Participant]) -> Self {
        let mut balances = Self {
            entries: Vec::with_capacity(participants.len()),
            index: HashMap::with_capacity(participants.len()),
        };
        for participant in participants {
            balances.slot(&participant.name);
        }
        balances
    }

    fn slot(&mut self, name: &str) -> &mut f64 {
        let index = match self.index.get(name) {
            Some(&index) => index,
            None => {
                let index = self.entries.len();
                self.entries.push((name.to_string(), 0.0));
                self.index.insert(name.to_string(), index);
                index
            }
        };
        &mut self.entries[index].1
    }

    /// Balance for `name`, if they are known
    pub fn get(&self, name: &str) -> Option<f64> {
        self.index.get(name).map(|&index| self.entries[index].1)
    }

    /// `(name, balance)` pairs in registration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(n, b)| (n.as_str(), *b))
    }

    /// Sum of all balances; zero up to floating-point error
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, b)| b).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Compute net balances from participants and expenses
///
/// Every participant starts at zero. For each expense the payer is credited
/// the full amount and every split member is debited `amount / n`. A payer
/// who is also in the split therefore nets `amount * (n - 1) / n`.
pub fn calculate_balances(participants: &[Participant], expenses: &[ExpenseRecord]) -> BalanceMap {
    let mut balances = BalanceMap::with_participants(participants);

    for expense in expenses {
        if expense.split_among.is_empty() {
            continue;
        }
        let share = expense.share();
        *balances.slot(&expense.paid_by) += expense.amount.as_f64();
        for member in &expense.split_among {
            *balances.slot(member) -= share;
        }
    }

    balances
}

/// Read-only balance view over a store
pub struct BalanceService<'a> {
    storage: &'a Storage,
}

impl<'a> BalanceService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Current balances of all confirmed participants
    pub fn balances(&self) -> BalanceMap {
        calculate_balances(
            self.storage.participants.list(),
            self.storage.expenses.list(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseId, Money};
    use proptest::prelude::*;

    const EPSILON: f64 = 1e-9;

    fn people(names: &[&str]) -> Vec<Participant> {
        names.iter().map(|n| Participant::new(*n, "0xabc")).collect()
    }

    fn expense(cents: i64, paid_by: &str, split: &[&str]) -> ExpenseRecord {
        ExpenseRecord::new(
            ExpenseId::from_millis(1),
            "Expense",
            Money::from_cents(cents),
            paid_by,
            split.iter().map(|s| s.to_string()),
        )
    }

    fn assert_close(actual: Option<f64>, expected: f64) {
        let actual = actual.expect("participant missing from balances");
        assert!(
            (actual - expected).abs() < EPSILON,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_participants_without_expenses_are_zero() {
        let balances = calculate_balances(&people(&["Alice", "Bob"]), &[]);
        assert_eq!(balances.len(), 2);
        assert_eq!(balances.get("Alice"), Some(0.0));
        assert_eq!(balances.get("Bob"), Some(0.0));
    }

    #[test]
    fn test_lunch_split_two_ways() {
        let balances = calculate_balances(
            &people(&["Alice", "Bob"]),
            &[expense(1000, "Alice", &["Alice", "Bob"])],
        );
        assert_close(balances.get("Alice"), 5.0);
        assert_close(balances.get("Bob"), -5.0);
    }

    #[test]
    fn test_three_way_split() {
        let balances = calculate_balances(
            &people(&["A", "B", "C"]),
            &[expense(900, "A", &["A", "B", "C"])],
        );
        assert_close(balances.get("A"), 6.0);
        assert_close(balances.get("B"), -3.0);
        assert_close(balances.get("C"), -3.0);
        assert!(balances.total().abs() < EPSILON);
    }

    #[test]
    fn test_payer_outside_split() {
        let balances = calculate_balances(
            &people(&["A", "B", "C"]),
            &[expense(1000, "A", &["B", "C"])],
        );
        assert_close(balances.get("A"), 10.0);
        assert_close(balances.get("B"), -5.0);
        assert_close(balances.get("C"), -5.0);
    }

    #[test]
    fn test_self_inclusion_credit() {
        let n = 4.0;
        let amount = 10.0;
        let balances = calculate_balances(
            &people(&["A", "B", "C", "D"]),
            &[expense(1000, "A", &["A", "B", "C", "D"])],
        );
        assert_close(balances.get("A"), amount * (n - 1.0) / n);
    }

    #[test]
    fn test_shares_are_not_rounded() {
        let balances = calculate_balances(
            &people(&["A", "B", "C"]),
            &[expense(1000, "A", &["A", "B", "C"])],
        );
        assert_close(balances.get("B"), -10.0 / 3.0);
        assert_ne!(balances.get("B"), Some(-3.3333));
    }

    #[test]
    fn test_unknown_name_has_no_balance() {
        let balances = calculate_balances(&people(&["A"]), &[]);
        assert_eq!(balances.get("Z"), None);
    }

    #[test]
    fn test_order_follows_registration() {
        let balances = calculate_balances(&people(&["Zoe", "Adam", "Mia"]), &[]);
        let names: Vec<&str> = balances.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Zoe", "Adam", "Mia"]);
    }

    #[test]
    fn test_balance_service_reads_storage() {
        let mut storage = Storage::in_memory();
        for name in ["Alice", "Bob"] {
            storage.participants.add_participant(name).unwrap();
            storage.participants.confirm_participant(name, "0xabc").unwrap();
        }
        let id = storage.expenses.next_id();
        storage.expenses.push(ExpenseRecord::new(
            id,
            "Lunch",
            Money::from_cents(1000),
            "Alice",
            vec!["Alice".to_string(), "Bob".to_string()],
        ));

        let balances = BalanceService::new(&storage).balances();
        assert_close(balances.get("Alice"), 5.0);
        assert_close(balances.get("Bob"), -5.0);
    }

    // Up to 40 expenses of at most 10.00 keep the f64 rounding error of the
    // sum well below 1e-9.
    fn ledger_strategy() -> impl Strategy<Value = Vec<(i64, usize, Vec<usize>)>> {
        prop::collection::vec(
            (
                1i64..=1000,
                0usize..6,
                prop::collection::vec(0usize..6, 1..6),
            ),
            0..40,
        )
    }

    proptest! {
        #[test]
        fn prop_balances_sum_to_zero(ledger in ledger_strategy()) {
            let names = ["A", "B", "C", "D", "E", "F"];
            let participants = people(&names);
            let expenses: Vec<ExpenseRecord> = ledger
                .iter()
                .map(|(cents, payer, split)| {
                    let split: Vec<&str> = split.iter().map(|i| names[*i]).collect();
                    expense(*cents, names[*payer], &split)
                })
                .collect();

            let balances = calculate_balances(&participants, &expenses);
            prop_assert_eq!(balances.len(), names.len());
            prop_assert!(balances.total().abs() < EPSILON);
        }
    }
}
