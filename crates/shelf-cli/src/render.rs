//! Terminal rendering and entry selection.

use launch_shelf::{IconSource, ResolvedEntry};

/// Shown when a scan fails or finds nothing.
pub const EMPTY_STATE: &str = "No shortcuts found.";

/// One list line: 1-based index, display name, icon, launch target.
pub fn format_entry(index: usize, entry: &ResolvedEntry) -> String {
    let icon = match entry.icon_source() {
        IconSource::File { path } => path.display().to_string(),
        IconSource::Fallback => "(fallback icon)".to_string(),
    };
    format!(
        "{:>3}  {:<32}  {}  [{}]",
        index + 1,
        entry.display_name(),
        entry.launch_target().display(),
        icon
    )
}

/// Find the entry a user meant.
///
/// Tried in order: exact file name, 1-based list index, display name
/// (case-insensitive).
pub fn select_entry<'a>(
    entries: &'a [ResolvedEntry],
    selector: &str,
) -> Option<&'a ResolvedEntry> {
    let selector = selector.trim();

    if let Some(entry) = entries.iter().find(|e| e.file_name() == Some(selector)) {
        return Some(entry);
    }

    if let Ok(index) = selector.parse::<usize>() {
        if let Some(entry) = index.checked_sub(1).and_then(|i| entries.get(i)) {
            return Some(entry);
        }
    }

    entries
        .iter()
        .find(|e| e.display_name().eq_ignore_ascii_case(selector))
}
