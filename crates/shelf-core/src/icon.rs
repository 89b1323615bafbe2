//! Icon resolution for shelf entries.
//!
//! Handles:
//! - The embedded fallback icon
//! - Joining sidecar icon paths beneath the candidate directory
//! - Probing that an override icon is a loadable image

use crate::error::{Result, ShelfError};
use crate::model::serialize_path_lossy;
use image::ImageReader;
use serde::Serialize;
use std::borrow::Cow;
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, warn};

/// Built-in icon shown whenever no override icon is usable.
pub static FALLBACK_ICON_PNG: &[u8] = include_bytes!("../resources/fallback.png");

/// Where an entry's icon comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum IconSource {
    /// A probed, loadable image on disk.
    File {
        #[serde(serialize_with = "serialize_path_lossy")]
        path: PathBuf,
    },
    /// The embedded fallback icon.
    Fallback,
}

impl IconSource {
    pub fn is_fallback(&self) -> bool {
        matches!(self, IconSource::Fallback)
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            IconSource::File { path } => Some(path),
            IconSource::Fallback => None,
        }
    }

    /// Bytes a front end should render.
    ///
    /// If the file vanished after it was probed, the fallback is returned
    /// instead of an error.
    pub fn load_bytes(&self) -> Cow<'static, [u8]> {
        match self {
            IconSource::Fallback => Cow::Borrowed(FALLBACK_ICON_PNG),
            IconSource::File { path } => match fs::read(path) {
                Ok(bytes) => Cow::Owned(bytes),
                Err(e) => {
                    warn!("Icon {} no longer readable, using fallback: {}", path.display(), e);
                    Cow::Borrowed(FALLBACK_ICON_PNG)
                }
            },
        }
    }
}

/// Join a sidecar icon path beneath `source_dir`.
///
/// Root and drive prefixes are dropped so the result always starts at
/// `source_dir`; `..` is kept.
pub fn icon_path_in(source_dir: &Path, relative: &str) -> PathBuf {
    let mut path = source_dir.to_path_buf();
    for component in Path::new(relative).components() {
        match component {
            Component::Prefix(_) | Component::RootDir | Component::CurDir => {}
            other => path.push(other.as_os_str()),
        }
    }
    path
}

/// Check that `path` opens and its header decodes as a known image format.
///
/// Only the dimensions are read; pixels are not decoded.
pub fn probe_icon(path: &Path) -> Result<PathBuf> {
    let unavailable = |reason: String| ShelfError::IconUnavailable {
        path: path.to_path_buf(),
        reason,
    };

    let reader = ImageReader::open(path)
        .map_err(|e| unavailable(e.to_string()))?
        .with_guessed_format()
        .map_err(|e| unavailable(e.to_string()))?;

    if reader.format().is_none() {
        return Err(unavailable("unrecognized image format".to_string()));
    }

    let (width, height) = reader
        .into_dimensions()
        .map_err(|e| unavailable(e.to_string()))?;
    debug!("Probed icon {} ({}x{})", path.display(), width, height);

    Ok(std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf()))
}
