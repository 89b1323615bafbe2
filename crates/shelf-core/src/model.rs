//! Values that flow through one scan: candidate, override, resolved entry.
//!
//! All three are immutable once built. A scan hands its entries to the caller
//! by value; nothing is cached between scans.

use crate::icon::IconSource;
use serde::{Serialize, Serializer};
use std::path::{Path, PathBuf};

/// A directory entry that passed the extension filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateEntry {
    name: String,
    source_dir: PathBuf,
    full_path: PathBuf,
}

impl CandidateEntry {
    /// Create a candidate for `name` inside `source_dir`.
    ///
    /// Returns `None` for an empty name.
    pub fn new(source_dir: impl AsRef<Path>, name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        if name.is_empty() {
            return None;
        }
        let source_dir = source_dir.as_ref().to_path_buf();
        let full_path = source_dir.join(&name);
        Some(Self {
            name,
            source_dir,
            full_path,
        })
    }

    /// Candidate whose on-disk path may not be valid UTF-8; `name` is its
    /// display form.
    pub(crate) fn from_dir_entry(
        source_dir: &Path,
        name: String,
        full_path: PathBuf,
    ) -> Option<Self> {
        if name.is_empty() {
            return None;
        }
        Some(Self {
            name,
            source_dir: source_dir.to_path_buf(),
            full_path,
        })
    }

    /// File name including its extension.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Directory the candidate was found in.
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// `source_dir` joined with `name`.
    pub fn full_path(&self) -> &Path {
        &self.full_path
    }
}

/// Optional display overrides read from a sidecar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataOverride {
    pub display_name: Option<String>,
    /// Icon path relative to the candidate's source directory.
    pub icon_relative_path: Option<String>,
}

impl MetadataOverride {
    /// Both fields unset; what an absent or unreadable sidecar yields.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.display_name.is_none() && self.icon_relative_path.is_none()
    }
}

/// A presentable shelf entry. The only type handed to a front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedEntry {
    display_name: String,
    icon_source: IconSource,
    #[serde(serialize_with = "serialize_path_lossy")]
    launch_target: PathBuf,
}

impl ResolvedEntry {
    pub(crate) fn new(
        display_name: String,
        icon_source: IconSource,
        launch_target: PathBuf,
    ) -> Self {
        debug_assert!(!display_name.is_empty());
        Self {
            display_name,
            icon_source,
            launch_target,
        }
    }

    /// Never empty.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn icon_source(&self) -> &IconSource {
        &self.icon_source
    }

    /// Path handed to the launch dispatcher.
    pub fn launch_target(&self) -> &Path {
        &self.launch_target
    }

    /// File name of the launch target, if it has one.
    pub fn file_name(&self) -> Option<&str> {
        self.launch_target.file_name().and_then(|n| n.to_str())
    }
}

/// Paths are written as text; bytes that are not valid UTF-8 become U+FFFD.
pub(crate) fn serialize_path_lossy<S: Serializer>(
    path: &Path,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.to_string_lossy())
}
