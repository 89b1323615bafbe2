//! Merges a candidate and its overrides into a presentable entry.

use crate::config::ShelfConfig;
use crate::icon::{self, IconSource};
use crate::model::{CandidateEntry, MetadataOverride, ResolvedEntry};
use tracing::warn;

/// Build the entry a front end renders.
///
/// The only I/O is probing an override icon; a probe failure falls back to
/// the built-in icon.
pub fn build(candidate: &CandidateEntry, overrides: &MetadataOverride) -> ResolvedEntry {
    let display_name = match overrides.display_name.as_deref() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => default_display_name(candidate),
    };

    let icon_source = match overrides.icon_relative_path.as_deref() {
        Some(relative) if !relative.is_empty() => resolve_icon(candidate, relative),
        _ => IconSource::Fallback,
    };

    ResolvedEntry::new(display_name, icon_source, candidate.full_path().to_path_buf())
}

/// `"file: <name>"`.
pub fn default_display_name(candidate: &CandidateEntry) -> String {
    format!("{}{}", ShelfConfig::DISPLAY_NAME_PREFIX, candidate.name())
}

fn resolve_icon(candidate: &CandidateEntry, relative: &str) -> IconSource {
    let path = icon::icon_path_in(candidate.source_dir(), relative);
    match icon::probe_icon(&path) {
        Ok(path) => IconSource::File { path },
        Err(e) => {
            warn!("Using fallback icon for {}: {}", candidate.name(), e);
            IconSource::Fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn overrides(name: Option<&str>, icon: Option<&str>) -> MetadataOverride {
        MetadataOverride {
            display_name: name.map(String::from),
            icon_relative_path: icon.map(String::from),
        }
    }

    #[test]
    fn test_build_defaults() {
        let candidate = CandidateEntry::new("/opt/shelf", "tool").unwrap();
        let entry = build(&candidate, &MetadataOverride::none());

        assert_eq!(entry.display_name(), "file: tool");
        assert!(entry.icon_source().is_fallback());
        assert_eq!(entry.launch_target(), candidate.full_path());
    }

    #[test]
    fn test_build_name_override() {
        let candidate = CandidateEntry::new("/opt/shelf", "app1.exe").unwrap();
        let entry = build(&candidate, &overrides(Some("Foo"), None));
        assert_eq!(entry.display_name(), "Foo");
        assert!(entry.icon_source().is_fallback());
    }

    #[test]
    fn test_build_empty_overrides_fall_back() {
        let candidate = CandidateEntry::new("/opt/shelf", "app1.exe").unwrap();
        let entry = build(&candidate, &overrides(Some(""), Some("")));
        assert_eq!(entry.display_name(), "file: app1.exe");
        assert!(entry.icon_source().is_fallback());
    }

    #[test]
    fn test_build_missing_icon_falls_back() {
        let temp = TempDir::new().unwrap();
        let candidate = CandidateEntry::new(temp.path(), "app1.exe").unwrap();
        let entry = build(&candidate, &overrides(None, Some("missing.png")));
        assert!(entry.icon_source().is_fallback());
    }

    #[test]
    fn test_build_corrupt_icon_falls_back() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("icon.png"), b"not an image at all").unwrap();
        let candidate = CandidateEntry::new(temp.path(), "app1.exe").unwrap();
        let entry = build(&candidate, &overrides(None, Some("icon.png")));
        assert!(entry.icon_source().is_fallback());
    }

    #[test]
    fn test_build_loadable_icon() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("icons")).unwrap();
        image::RgbaImage::new(8, 8)
            .save(temp.path().join("icons").join("app.png"))
            .unwrap();

        let candidate = CandidateEntry::new(temp.path(), "app1.exe").unwrap();
        let entry = build(&candidate, &overrides(Some("My App"), Some("icons/app.png")));

        let path = entry.icon_source().path().expect("override icon");
        assert!(path.ends_with("icons/app.png"));
        assert_eq!(entry.display_name(), "My App");
    }
}
