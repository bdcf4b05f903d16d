//! User settings for Ether-Split
//!
//! Manages display preferences, the default wallet address used by
//! `wallet connect`, and the audit log toggle.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::paths::SplitPaths;
use crate::error::SplitError;

/// User settings for Ether-Split
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency label printed after amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Decimal places used when displaying shares and balances
    #[serde(default = "default_share_precision")]
    pub share_precision: usize,

    /// Address handed out by the configured wallet on `wallet connect`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet_address: Option<String>,

    /// Whether mutations are written to the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,

    /// Directory for exports when no explicit path is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "ETH".to_string()
}

fn default_share_precision() -> usize {
    4
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            share_precision: default_share_precision(),
            wallet_address: None,
            audit_enabled: default_audit_enabled(),
            export_dir: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &SplitPaths) -> Result<Self, SplitError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| SplitError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| SplitError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SplitPaths) -> Result<(), SplitError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| SplitError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| SplitError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Resolve the export directory, preferring the configured one
    pub fn resolve_export_dir(&self, paths: &SplitPaths) -> PathBuf {
        self.export_dir
            .clone()
            .unwrap_or_else(|| paths.export_dir())
    }
}
