//! Core data models for Ether-Split
//!
//! This module contains the data structures of the expense-splitting domain:
//! participants, expense records, payment requests and the money type.

pub mod expense;
pub mod ids;
pub mod money;
pub mod participant;
pub mod request;

pub use expense::{ExpenseRecord, ExpenseValidationError};
pub use ids::{ExpenseId, SessionId};
pub use money::{Money, MoneyParseError};
pub use participant::{Participant, ParticipantValidationError, PendingParticipant};
pub use request::PaymentRequest;
