//! Display formatting for terminal output
//!
//! Provides utilities for formatting participants, expenses and numbers
//! for the session shell.

pub mod expense;
pub mod format;
pub mod participant;

pub use expense::{format_expense_added, format_expense_list};
pub use format::{format_balance, format_share};
pub use participant::{format_participant_added, format_participant_list};
