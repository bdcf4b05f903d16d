//! Expense record model
//!
//! One payment by one participant, split equally among a set of participants.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;

/// A recorded shared expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Unique identifier
    pub id: ExpenseId,

    /// What the money was spent on
    pub description: String,

    /// Total paid, always two decimal places
    pub amount: Money,

    /// Name of the participant who paid; empty once the payer has left
    pub paid_by: String,

    /// Names of the participants sharing the cost, in selection order
    pub split_among: Vec<String>,

    /// When the expense was recorded
    pub created_at: DateTime<Utc>,
}

impl ExpenseRecord {
    /// Create a new expense record
    ///
    /// Repeated names in `split_among` are collapsed, keeping the first
    /// occurrence.
    pub fn new(
        id: ExpenseId,
        description: impl Into<String>,
        amount: Money,
        paid_by: impl Into<String>,
        split_among: impl IntoIterator<Item = String>,
    ) -> Self {
        let mut members: Vec<String> = Vec::new();
        for name in split_among {
            if !members.contains(&name) {
                members.push(name);
            }
        }

        Self {
            id,
            description: description.into(),
            amount,
            paid_by: paid_by.into(),
            split_among: members,
            created_at: Utc::now(),
        }
    }

    /// Number of people sharing the cost
    pub fn split_count(&self) -> usize {
        self.split_among.len()
    }

    /// Each member's share, unrounded
    pub fn share(&self) -> f64 {
        self.amount.share(self.split_count())
    }

    /// Whether `name` paid for or shares this expense
    pub fn involves(&self, name: &str) -> bool {
        self.paid_by == name || self.split_among.iter().any(|n| n == name)
    }

    /// A record with no payer or nobody to split among is meaningless
    pub fn is_orphaned(&self) -> bool {
        self.paid_by.is_empty() || self.split_among.is_empty()
    }

    /// Validate the record's own invariants
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.description.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyDescription);
        }
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }
        if self.paid_by.trim().is_empty() {
            return Err(ExpenseValidationError::MissingPayer);
        }
        if self.split_among.is_empty() {
            return Err(ExpenseValidationError::EmptySplit);
        }
        Ok(())
    }
}

impl fmt::Display for ExpenseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.description, self.amount)
    }
}

/// Validation errors for expense records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyDescription,
    NonPositiveAmount(Money),
    MissingPayer,
    EmptySplit,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Expense description cannot be empty"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Expense amount must be positive (got {})", amount)
            }
            Self::MissingPayer => write!(f, "Expense must have a payer"),
            Self::EmptySplit => write!(f, "Expense must be split among at least one participant"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn lunch() -> ExpenseRecord {
        ExpenseRecord::new(
            ExpenseId::from_millis(1),
            "Lunch",
            Money::from_cents(1000),
            "Alice",
            names(&["Alice", "Bob"]),
        )
    }

    #[test]
    fn test_share() {
        let expense = lunch();
        assert_eq!(expense.split_count(), 2);
        assert!((expense.share() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_duplicate_split_members_collapse() {
        let expense = ExpenseRecord::new(
            ExpenseId::from_millis(1),
            "Taxi",
            Money::from_cents(900),
            "A",
            names(&["B", "A", "B"]),
        );
        assert_eq!(expense.split_among, names(&["B", "A"]));
    }

    #[test]
    fn test_involves() {
        let expense = lunch();
        assert!(expense.involves("Alice"));
        assert!(expense.involves("Bob"));
        assert!(!expense.involves("Carol"));
    }

    #[test]
    fn test_validate() {
        assert!(lunch().validate().is_ok());

        let mut bad = lunch();
        bad.description = "  ".into();
        assert_eq!(bad.validate(), Err(ExpenseValidationError::EmptyDescription));

        let mut bad = lunch();
        bad.amount = Money::zero();
        assert!(matches!(
            bad.validate(),
            Err(ExpenseValidationError::NonPositiveAmount(_))
        ));

        let mut bad = lunch();
        bad.split_among.clear();
        assert_eq!(bad.validate(), Err(ExpenseValidationError::EmptySplit));
        assert!(bad.is_orphaned());
    }
}
