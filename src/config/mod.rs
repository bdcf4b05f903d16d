//! Configuration module for Ether-Split
//!
//! This module provides configuration management including:
//! - Platform path resolution
//! - User settings persistence
//! - Display preferences

pub mod paths;
pub mod settings;

pub use paths::SplitPaths;
pub use settings::Settings;
