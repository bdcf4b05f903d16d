//! Storage layer for Ether-Split
//!
//! Everything lives in memory for the lifetime of one session. `Storage`
//! owns the participant registry, the expense ledger and the request log,
//! and routes audit entries to the optional audit logger.

pub mod expenses;
pub mod participants;
pub mod requests;

pub use expenses::ExpenseLedger;
pub use participants::ParticipantRegistry;
pub use requests::RequestLog;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::models::SessionId;

/// Main storage coordinator that owns all session state
#[derive(Debug)]
pub struct Storage {
    session_id: SessionId,
    audit: Option<AuditLogger>,
    pub participants: ParticipantRegistry,
    pub expenses: ExpenseLedger,
    pub requests: RequestLog,
}

impl Storage {
    /// Create an empty store that writes audit entries to `audit`
    pub fn new(audit: Option<AuditLogger>) -> Self {
        Self {
            session_id: SessionId::new(),
            audit,
            participants: ParticipantRegistry::new(),
            expenses: ExpenseLedger::new(),
            requests: RequestLog::new(),
        }
    }

    /// Create an empty store with auditing disabled
    pub fn in_memory() -> Self {
        Self::new(None)
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn audit_logger(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Write entries to the audit log
    ///
    /// A failed write is reported as a warning; the ledger mutation it
    /// describes has already happened and is kept.
    pub fn record_audit(&self, entries: Vec<AuditEntry>) {
        let Some(logger) = &self.audit else {
            return;
        };

        let entries: Vec<AuditEntry> = entries
            .into_iter()
            .map(|entry| entry.in_session(self.session_id))
            .collect();

        if let Err(e) = logger.log_batch(&entries) {
            tracing::warn!(error = %e, path = %logger.path().display(), "audit write failed");
        }
    }

    /// Audit a create operation
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) {
        self.record_audit(vec![AuditEntry::create(
            entity_type,
            entity_id,
            entity_name,
            entity,
        )]);
    }

    /// Audit a delete operation
    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) {
        self.record_audit(vec![AuditEntry::delete(
            entity_type,
            entity_id,
            entity_name,
            entity,
        )]);
    }
}

impl Default for Storage {
    fn default() -> Self {
        Self::in_memory()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_in_memory_storage_is_empty() {
        let storage = Storage::in_memory();
        assert!(storage.participants.is_empty());
        assert!(storage.expenses.is_empty());
        assert!(storage.requests.is_empty());
        assert!(storage.audit_logger().is_none());

        // No logger configured: recording is a no-op
        storage.log_create(EntityType::Participant, "Alice", None, &json!({}));
    }

    #[test]
    fn test_audit_entries_are_tagged_with_session() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        let storage = Storage::new(Some(logger.clone()));

        storage.log_create(EntityType::Participant, "Alice", None, &json!({"name": "Alice"}));
        storage.log_delete(EntityType::Participant, "Alice", None, &json!({"name": "Alice"}));

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries
            .iter()
            .all(|e| e.session_id == Some(storage.session_id())));
    }

    #[test]
    fn test_audit_failure_does_not_panic() {
        let temp_dir = TempDir::new().unwrap();
        // A directory cannot be opened for append
        let logger = AuditLogger::new(temp_dir.path().to_path_buf());
        let storage = Storage::new(Some(logger));

        storage.log_create(EntityType::Participant, "Alice", None, &json!({}));
    }
}
