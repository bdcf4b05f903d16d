//! Strongly-typed ID wrappers
//!
//! Expense ids are creation timestamps in milliseconds, which is what users
//! type back into `expense remove`. Session ids are random UUIDs used to tag
//! audit entries from one shell run.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Identifier for an expense record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(i64);

impl ExpenseId {
    /// Allocate an id from the current time, strictly after `previous`
    ///
    /// Two expenses created in the same millisecond still get distinct ids.
    pub fn next_after(previous: Option<ExpenseId>) -> Self {
        let now = Utc::now().timestamp_millis();
        match previous {
            Some(ExpenseId(last)) if now <= last => Self(last + 1),
            _ => Self(now),
        }
    }

    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub const fn as_millis(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ExpenseId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix("exp-").unwrap_or(s);
        Ok(Self(s.parse()?))
    }
}

/// Identifier for one shell session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ses-{}", &self.0.to_string()[..8])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expense_ids_strictly_increase() {
        let mut last = None;
        for _ in 0..1000 {
            let id = ExpenseId::next_after(last);
            if let Some(prev) = last {
                assert!(id > prev);
            }
            last = Some(id);
        }
    }

    #[test]
    fn test_expense_id_bumps_past_future_timestamp() {
        let far_future = ExpenseId::from_millis(i64::MAX / 2);
        let id = ExpenseId::next_after(Some(far_future));
        assert_eq!(id.as_millis(), i64::MAX / 2 + 1);
    }

    #[test]
    fn test_expense_id_parse() {
        assert_eq!(
            "1700000000000".parse::<ExpenseId>().unwrap(),
            ExpenseId::from_millis(1_700_000_000_000)
        );
        assert_eq!(
            "exp-42".parse::<ExpenseId>().unwrap(),
            ExpenseId::from_millis(42)
        );
        assert!("lunch".parse::<ExpenseId>().is_err());
    }

    #[test]
    fn test_session_id_display() {
        let id = SessionId::new();
        let display = id.to_string();
        assert!(display.starts_with("ses-"));
        assert_eq!(display.len(), 12);
        assert!(!id.as_uuid().is_nil());
    }
}
