//! Service layer for Ether-Split
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, auditing, and the participant-removal cascade.

pub mod balance;
pub mod consistency;
pub mod expense;
pub mod participant;
pub mod request;

pub use balance::{calculate_balances, BalanceMap, BalanceService};
pub use consistency::{cascade_participant_removal, CascadeOutcome, DropReason};
pub use expense::{CreateExpenseInput, ExpenseService};
pub use participant::{ParticipantRemoval, ParticipantService};
pub use request::RequestService;
