//! Non-recursive directory scanner.

use crate::error::{Result, ShelfError};
use crate::filter::{self, AllowSet};
use crate::model::CandidateEntry;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Counters describing what a scan skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Entries accepted as candidates.
    pub accepted: usize,
    /// Subdirectories.
    pub directories: usize,
    /// Entries whose extension is not allowed.
    pub filtered: usize,
    /// Entries whose metadata could not be read.
    pub unreadable: usize,
}

/// List `dir` one level deep and keep the files whose extension is allowed.
///
/// Entries that cannot be inspected are dropped; only a directory that
/// cannot be opened fails the scan. Order follows the directory listing.
pub fn scan(dir: &Path, allow_set: &AllowSet) -> Result<Vec<CandidateEntry>> {
    scan_with_stats(dir, allow_set).map(|(entries, _)| entries)
}

/// Same as [`scan`], also returning skip counters.
pub fn scan_with_stats(
    dir: &Path,
    allow_set: &AllowSet,
) -> Result<(Vec<CandidateEntry>, ScanStats)> {
    let read_dir = fs::read_dir(dir).map_err(|e| ShelfError::from_read_dir(e, dir))?;

    let mut stats = ScanStats::default();
    let mut entries = Vec::new();

    for dir_entry in read_dir {
        let dir_entry = match dir_entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!("Skipping unreadable entry in {}: {}", dir.display(), e);
                stats.unreadable += 1;
                continue;
            }
        };

        let metadata = match dir_entry.metadata() {
            Ok(metadata) => metadata,
            Err(e) => {
                debug!("Skipping {}: metadata unavailable: {}", dir_entry.path().display(), e);
                stats.unreadable += 1;
                continue;
            }
        };

        if metadata.is_dir() {
            stats.directories += 1;
            continue;
        }

        let file_name = dir_entry.file_name();
        let name = file_name.to_string_lossy();
        if !filter::is_allowed(&name, allow_set) {
            stats.filtered += 1;
            continue;
        }

        match CandidateEntry::from_dir_entry(dir, name.into_owned(), dir_entry.path()) {
            Some(candidate) => {
                debug!("Candidate: {}", candidate.full_path().display());
                entries.push(candidate);
                stats.accepted += 1;
            }
            None => stats.unreadable += 1,
        }
    }

    info!(
        dir = %dir.display(),
        accepted = stats.accepted,
        directories = stats.directories,
        filtered = stats.filtered,
        unreadable = stats.unreadable,
        "Scanned shortcuts directory"
    );

    Ok((entries, stats))
}
