//! Participant service
//!
//! Drives the two-step add flow and participant removal. Removing a
//! participant cascades into the expense ledger in the same call, so no
//! caller ever observes an expense that names someone who has left.

use crate::audit::{AuditEntry, EntityType};
use crate::error::{SplitError, SplitResult};
use crate::models::{ExpenseRecord, Participant, PendingParticipant};
use crate::storage::Storage;

use super::consistency::{cascade_participant_removal, CascadeOutcome};

/// Result of removing a participant
#[derive(Debug, Clone)]
pub struct ParticipantRemoval {
    pub participant: Participant,
    pub cascade: CascadeOutcome,
}

impl ParticipantRemoval {
    /// Expenses that were dropped because of the removal
    pub fn dropped_expenses(&self) -> Vec<&ExpenseRecord> {
        self.cascade.dropped.iter().map(|d| &d.record).collect()
    }
}

/// Service for participant management
pub struct ParticipantService<'a> {
    storage: &'a mut Storage,
}

impl<'a> ParticipantService<'a> {
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Accept a name and hold it pending until an address arrives
    pub fn add(&mut self, name: &str) -> SplitResult<PendingParticipant> {
        let pending = self.storage.participants.add_participant(name)?.clone();
        tracing::debug!(name = %pending.name, "participant pending address");
        Ok(pending)
    }

    /// Confirm the pending participant with an address
    pub fn confirm(&mut self, name: &str, address: &str) -> SplitResult<Participant> {
        let participant = self.storage.participants.confirm_participant(name, address)?;
        tracing::debug!(name = %participant.name, "participant confirmed");

        self.storage.log_create(
            EntityType::Participant,
            participant.name.clone(),
            Some(participant.name.clone()),
            &participant,
        );

        Ok(participant)
    }

    /// Confirm whatever participant is currently pending
    pub fn confirm_pending(&mut self, address: &str) -> SplitResult<Participant> {
        let name = self
            .storage
            .participants
            .pending()
            .map(|p| p.name.clone())
            .ok_or_else(|| SplitError::Validation("No participant is waiting for an address".into()))?;
        self.confirm(&name, address)
    }

    /// Run both steps at once; a rejected address leaves nothing pending
    pub fn add_with_address(&mut self, name: &str, address: &str) -> SplitResult<Participant> {
        let pending = self.add(name)?;
        match self.confirm(&pending.name, address) {
            Ok(participant) => Ok(participant),
            Err(e) => {
                self.storage.participants.cancel_pending();
                Err(e)
            }
        }
    }

    /// Discard the pending participant
    pub fn cancel_pending(&mut self) -> Option<PendingParticipant> {
        let discarded = self.storage.participants.cancel_pending();
        if let Some(pending) = &discarded {
            tracing::debug!(name = %pending.name, "pending participant discarded");
        }
        discarded
    }

    /// Remove a participant and scrub them from the ledger
    pub fn remove(&mut self, name: &str) -> SplitResult<ParticipantRemoval> {
        let name = name.trim();
        let participant = self
            .storage
            .participants
            .remove(name)
            .ok_or_else(|| SplitError::participant_not_found(name))?;

        let cascade = cascade_participant_removal(&mut self.storage.expenses, &participant.name);

        if !cascade.is_empty() {
            tracing::info!(
                name = %participant.name,
                edited = cascade.edited.len(),
                dropped = cascade.dropped.len(),
                "participant removal cascaded into ledger"
            );
        }

        let mut entries = vec![AuditEntry::delete(
            EntityType::Participant,
            participant.name.clone(),
            Some(participant.name.clone()),
            &participant,
        )];
        entries.extend(cascade.audit_entries(&participant.name));
        self.storage.record_audit(entries);

        Ok(ParticipantRemoval {
            participant,
            cascade,
        })
    }

    /// Confirmed participants in registration order
    pub fn list(&self) -> &[Participant] {
        self.storage.participants.list()
    }
}
