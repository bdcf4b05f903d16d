//! Reports module for Ether-Split
//!
//! Provides the settlement report (per-expense shares) and the balance
//! report (net position per participant).

pub mod balances;
pub mod settlement;

pub use balances::{BalanceReport, BalanceRow, BALANCE_HINT};
pub use settlement::{
    render_report, SettlementEntry, SettlementReport, ShareLine, EMPTY_REPORT, NO_ADDRESS,
};
