//! Participant registry
//!
//! Holds the confirmed participants in registration order plus at most one
//! pending participant that is still waiting for an address.

use crate::error::{SplitError, SplitResult};
use crate::models::participant::validate_name;
use crate::models::{Participant, PendingParticipant};

/// In-memory registry of participants
#[derive(Debug, Default)]
pub struct ParticipantRegistry {
    participants: Vec<Participant>,
    pending: Option<PendingParticipant>,
}

impl ParticipantRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the two-step add for `name`
    ///
    /// The trimmed name must be non-empty and not already confirmed or
    /// pending. A different pending name is replaced.
    pub fn add_participant(&mut self, name: &str) -> SplitResult<&PendingParticipant> {
        let name = validate_name(name).map_err(|e| SplitError::Validation(e.to_string()))?;

        if self.contains(name) || self.pending_name() == Some(name) {
            return Err(SplitError::duplicate_participant(name));
        }

        Ok(&*self.pending.insert(PendingParticipant::new(name)))
    }

    /// Finish the two-step add by supplying an address
    pub fn confirm_participant(&mut self, name: &str, address: &str) -> SplitResult<Participant> {
        let name = validate_name(name).map_err(|e| SplitError::Validation(e.to_string()))?;

        let pending = match self.pending.take() {
            Some(pending) if pending.name == name => pending,
            other => {
                self.pending = other;
                return Err(SplitError::Validation(format!(
                    "No pending participant named '{}'",
                    name
                )));
            }
        };

        // Re-check in case the name was confirmed through another path
        if self.contains(name) {
            return Err(SplitError::duplicate_participant(name));
        }

        let participant = match pending.clone().confirm(address) {
            Ok(participant) => participant,
            Err(e) => {
                self.pending = Some(pending);
                return Err(SplitError::Validation(e.to_string()));
            }
        };

        self.participants.push(participant.clone());
        Ok(participant)
    }

    /// Discard the pending participant, if any
    pub fn cancel_pending(&mut self) -> Option<PendingParticipant> {
        self.pending.take()
    }

    /// The participant waiting for an address
    pub fn pending(&self) -> Option<&PendingParticipant> {
        self.pending.as_ref()
    }

    fn pending_name(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.name.as_str())
    }

    /// Remove a confirmed participant from the registry only
    ///
    /// Callers are responsible for cascading into the ledger.
    pub(crate) fn remove(&mut self, name: &str) -> Option<Participant> {
        let index = self.participants.iter().position(|p| p.name == name)?;
        Some(self.participants.remove(index))
    }

    /// Get a confirmed participant by exact name
    pub fn get(&self, name: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.name == name)
    }

    /// Case-sensitive membership test
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Confirmed participants in registration order
    pub fn list(&self) -> &[Participant] {
        &self.participants
    }

    /// Names of confirmed participants in registration order
    pub fn names(&self) -> Vec<String> {
        self.participants.iter().map(|p| p.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}
