//! Payment request model
//!
//! A record that the connected wallet asked a participant to settle up.
//! Requests are display-only and never touch balances.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::participant::shorten_address;

/// One "please settle" notification sent to a participant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRequest {
    /// Recipient's payment address
    pub to: String,

    /// Recipient's participant name
    pub name: String,

    /// Sender's wallet address
    pub from: String,

    /// When the request was sent
    pub time: DateTime<Utc>,
}

impl PaymentRequest {
    pub fn new(
        to: impl Into<String>,
        name: impl Into<String>,
        from: impl Into<String>,
        time: DateTime<Utc>,
    ) -> Self {
        Self {
            to: to.into(),
            name: name.into(),
            from: from.into(),
            time,
        }
    }

    /// One-line summary, e.g. `To Bob (0x1234...abcd) at 2025-01-02 10:00:00`
    pub fn summary(&self) -> String {
        format!(
            "To {} ({}) at {}",
            self.name,
            shorten_address(&self.to),
            self.time.format("%Y-%m-%d %H:%M:%S")
        )
    }
}
