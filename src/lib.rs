//! Ether-Split - split shared expenses among friends from the terminal
//!
//! This library provides the core of the Ether-Split expense splitter: a
//! participant registry, an expense ledger, a pure balance calculator and a
//! settlement report, driven by a line-oriented session shell. The ledger
//! lives in memory for one session; only settings, the audit log and
//! explicit exports touch the disk.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (participants, expenses, requests, money)
//! - `storage`: In-memory session store
//! - `services`: Business logic layer, including the removal cascade
//! - `audit`: Audit logging system
//! - `reports`: Settlement and balance reports
//! - `export`: Text, CSV, JSON and YAML exports
//! - `display`: Terminal formatting
//! - `wallet`: Wallet connection seam
//! - `cli`: Session shell
//!
//! # Example
//!
//! ```rust
//! use ether_split::services::{BalanceService, CreateExpenseInput, ExpenseService, ParticipantService};
//! use ether_split::storage::Storage;
//!
//! let mut storage = Storage::in_memory();
//! {
//!     let mut friends = ParticipantService::new(&mut storage);
//!     friends.add_with_address("Alice", "0xA11CE").unwrap();
//!     friends.add_with_address("Bob", "0xB0B").unwrap();
//! }
//! let input = CreateExpenseInput::parse(
//!     "Lunch",
//!     "10",
//!     "Alice",
//!     vec!["Alice".to_string(), "Bob".to_string()],
//! )
//! .unwrap();
//! ExpenseService::new(&mut storage).add(input).unwrap();
//!
//! let balances = BalanceService::new(&storage).balances();
//! assert_eq!(balances.get("Alice"), Some(5.0));
//! assert_eq!(balances.get("Bob"), Some(-5.0));
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod wallet;

pub use error::{SplitError, SplitResult};
