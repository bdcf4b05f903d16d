//! Audit logging system for Ether-Split
//!
//! Records every create, update and delete of participants, expenses and
//! payment requests in an append-only audit log. The ledger itself is not
//! persisted; the audit log is the only trace a session leaves behind.
//!
//! # Architecture
//!
//! - `AuditEntry`: a single entry with timestamp, session, operation, entity
//!   information and optional before/after values.
//! - `AuditLogger`: writes entries as line-delimited JSON (JSONL).
//! - `generate_diff`: human-readable summary of a field-level change.
//!
//! # Example
//!
//! ```rust,ignore
//! use ether_split::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! let entry = AuditEntry::create(
//!     EntityType::Participant,
//!     "Alice",
//!     Some("Alice".to_string()),
//!     &participant,
//! );
//! logger.log(&entry)?;
//! ```

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
