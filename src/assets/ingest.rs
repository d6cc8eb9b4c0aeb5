//! Ingestion walker: loads a directory tree into the asset store.

use std::io;
use std::path::Path;

use tracing::{info, warn};
use walkdir::WalkDir;

use super::content_type::guess_content_type;
use super::{AssetStore, PutOutcome};
use crate::error::{Result, ServerError};

/// Progress is logged every this many files, not per file.
const PROGRESS_INTERVAL: u64 = 25;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IngestReport {
    pub total: u64,
    pub inserted: u64,
    pub already_present: u64,
    pub failed: u64,
}

/// Walk `root` and insert every regular file into the store, keyed by its
/// path relative to `root` with `/` separators.
///
/// Per-file read or insert errors are logged and skipped; one bad file must
/// not abort the walk. A missing root is fatal. Rows are committed per file
/// (autocommit): a crashed walk keeps everything inserted so far, and the
/// next run resumes via `put_if_absent`.
///
/// Re-running against an unchanged tree inserts zero rows.
pub async fn ingest_directory(store: &AssetStore, root: &Path) -> Result<IngestReport> {
    if !root.is_dir() {
        return Err(ServerError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!("source directory {} does not exist", root.display()),
        )));
    }

    info!("Ingesting static files from {}", root.display());
    let mut report = IngestReport::default();

    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry: {e}");
                report.failed += 1;
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        report.total += 1;
        let rel_path = match relative_path(root, entry.path()) {
            Some(p) => p,
            None => {
                warn!("Skipping {}: not under the source root", entry.path().display());
                report.failed += 1;
                continue;
            }
        };

        let data = match std::fs::read(entry.path()) {
            Ok(data) => data,
            Err(e) => {
                warn!("Failed to read {rel_path}: {e}");
                report.failed += 1;
                continue;
            }
        };

        let content_type = guess_content_type(entry.path());
        match store.put_if_absent(&rel_path, &content_type, data).await {
            Ok(PutOutcome::Inserted) => report.inserted += 1,
            Ok(PutOutcome::AlreadyPresent) => report.already_present += 1,
            Err(e) => {
                warn!("Failed to insert {rel_path}: {e}");
                report.failed += 1;
            }
        }

        if report.total % PROGRESS_INTERVAL == 0 {
            info!("Ingestion progress: {} files processed", report.total);
        }
    }

    info!(
        "Ingestion finished: {} files, {} inserted, {} already present, {} failed",
        report.total, report.inserted, report.already_present, report.failed
    );
    Ok(report)
}

/// Path relative to the root with separators normalized to `/`.
fn relative_path(root: &Path, file: &Path) -> Option<String> {
    let rel = file.strip_prefix(root).ok()?;
    let parts: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    if parts.is_empty() {
        return None;
    }
    Some(parts.join("/"))
}
