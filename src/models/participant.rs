//! Participant model
//!
//! A participant is identified by name alone. Adding one is a two-step flow:
//! the name is held as a [`PendingParticipant`] until an address is supplied,
//! at which point it becomes a confirmed [`Participant`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A confirmed member of the group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    /// Unique name, acts as the primary key
    pub name: String,

    /// Payment-network address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// When the participant was confirmed
    pub added_at: DateTime<Utc>,
}

impl Participant {
    /// Create a participant with an address
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: Some(address.into()),
            added_at: Utc::now(),
        }
    }

    /// Address for display, shortened to `0x1234...abcd` form
    pub fn short_address(&self) -> String {
        self.address
            .as_deref()
            .map(shorten_address)
            .unwrap_or_else(|| "No address".to_string())
    }

    pub fn validate(&self) -> Result<(), ParticipantValidationError> {
        validate_name(&self.name)?;
        if let Some(address) = &self.address {
            if address.trim().is_empty() {
                return Err(ParticipantValidationError::EmptyAddress);
            }
        }
        Ok(())
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A participant whose name was accepted but who has no address yet
///
/// Pending participants are invisible to the expense ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingParticipant {
    pub name: String,
}

impl PendingParticipant {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Promote to a confirmed participant
    pub fn confirm(self, address: &str) -> Result<Participant, ParticipantValidationError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(ParticipantValidationError::EmptyAddress);
        }
        let participant = Participant::new(self.name, address);
        participant.validate()?;
        Ok(participant)
    }
}

/// Check a participant name, returning the trimmed form
pub fn validate_name(name: &str) -> Result<&str, ParticipantValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ParticipantValidationError::EmptyName);
    }
    Ok(trimmed)
}

/// Shorten an address to its first six and last four characters
///
/// Short addresses are not special-cased: both ends are taken from
/// whatever characters exist, so "0x1234" becomes "0x1234...1234".
pub fn shorten_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    let head: String = chars.iter().take(6).collect();
    let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
    format!("{}...{}", head, tail)
}

/// Validation errors for participants
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParticipantValidationError {
    EmptyName,
    EmptyAddress,
}

impl fmt::Display for ParticipantValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Participant name cannot be empty"),
            Self::EmptyAddress => write!(f, "Wallet address cannot be empty"),
        }
    }
}

impl std::error::Error for ParticipantValidationError {}
