//! Path management for Ether-Split
//!
//! The ledger itself lives in memory only; these paths cover the settings
//! file, the audit log and the default export directory.
//!
//! ## Path Resolution Order
//!
//! 1. `ETHER_SPLIT_DIR` environment variable (if set)
//! 2. The platform config directory reported by `directories`
//!    (`~/.config/ether-split` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::SplitError;

/// Environment variable that overrides the base directory
pub const BASE_DIR_ENV: &str = "ETHER_SPLIT_DIR";

/// Manages all paths used by Ether-Split
#[derive(Debug, Clone)]
pub struct SplitPaths {
    /// Base directory for all Ether-Split files
    base_dir: PathBuf,
}

impl SplitPaths {
    /// Create a new SplitPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, SplitError> {
        let base_dir = if let Ok(custom) = std::env::var(BASE_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create SplitPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Default directory for exported reports
    pub fn export_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Ensure the base and export directories exist
    pub fn ensure_directories(&self) -> Result<(), SplitError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SplitError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.export_dir())
            .map_err(|e| SplitError::Io(format!("Failed to create export directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, SplitError> {
    ProjectDirs::from("", "", "ether-split")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| SplitError::Config("Could not determine a home directory".into()))
}
