//! Export shell command

use chrono::Utc;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use super::{Reply, Session};
use crate::error::{SplitError, SplitResult};
use crate::export::{write_export, ExportFormat};

/// Handle `export <format> [path] [--save]`
///
/// With neither a path nor `--save` the export is returned for printing.
pub fn handle_export_command(
    session: &Session,
    format: ExportFormat,
    path: Option<PathBuf>,
    save: bool,
) -> SplitResult<Reply> {
    let target = match (path, save) {
        (Some(path), _) => path,
        (None, true) => session.export_dir.join(format!(
            "ether-split-{}.{}",
            Utc::now().format("%Y%m%d-%H%M%S"),
            format.extension()
        )),
        (None, false) => {
            let mut buffer = Vec::new();
            write_export(&session.storage, &session.settings, format, &mut buffer)?;
            let text = String::from_utf8_lossy(&buffer);
            return Ok(Reply::Text(text.trim_end().to_string()));
        }
    };

    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            SplitError::Export(format!("Failed to create {}: {}", parent.display(), e))
        })?;
    }

    let file = File::create(&target).map_err(|e| {
        SplitError::Export(format!("Failed to create file {}: {}", target.display(), e))
    })?;
    let mut writer = BufWriter::new(file);
    write_export(&session.storage, &session.settings, format, &mut writer)?;
    writer.flush()?;

    tracing::info!(format = %format, path = %target.display(), "ledger exported");
    Ok(Reply::Text(format!(
        "Exported {} to {}",
        format,
        target.display()
    )))
}
