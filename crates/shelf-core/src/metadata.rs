//! Sidecar metadata resolution.
//!
//! A launchable `app.exe` may carry `app.exe.json` next to it: a flat JSON
//! object whose `name` and `icon` string keys override the display name and
//! icon. Every failure here degrades to "no override".

use crate::config::ShelfConfig;
use crate::error::{Result, ShelfError};
use crate::model::{CandidateEntry, MetadataOverride};
use serde_json::{Map, Value};
use std::ffi::OsString;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

const NAME_KEY: &str = "name";
const ICON_KEY: &str = "icon";

/// Path of the sidecar for a launchable file: its full path plus `.json`.
pub fn sidecar_path(launchable: &Path) -> PathBuf {
    let mut raw: OsString = launchable.as_os_str().to_owned();
    raw.push(ShelfConfig::SIDECAR_SUFFIX);
    PathBuf::from(raw)
}

/// Resolve the display overrides for a candidate. Never fails.
pub fn resolve(candidate: &CandidateEntry) -> MetadataOverride {
    let path = sidecar_path(candidate.full_path());

    match read_sidecar(&path) {
        Ok(Some(overrides)) => {
            debug!(
                "Sidecar {}: name={:?} icon={:?}",
                path.display(),
                overrides.display_name,
                overrides.icon_relative_path
            );
            overrides
        }
        Ok(None) => {
            trace!("No sidecar for {}", candidate.full_path().display());
            MetadataOverride::none()
        }
        Err(e) => {
            warn!("Ignoring sidecar {}: {}", path.display(), e);
            MetadataOverride::none()
        }
    }
}

/// Open and parse a sidecar in a single attempt.
///
/// `Ok(None)` means the sidecar does not exist.
fn read_sidecar(path: &Path) -> Result<Option<MetadataOverride>> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(ShelfError::io_with_path(e, path)),
    };

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| ShelfError::io_with_path(e, path))?;

    parse_sidecar(&contents).map(Some)
}

/// Parse sidecar text into overrides.
///
/// The document must be a JSON object. Unknown keys, and recognized keys
/// whose value is not a string, are ignored.
pub fn parse_sidecar(contents: &str) -> Result<MetadataOverride> {
    let map: Map<String, Value> = serde_json::from_str(contents)?;

    Ok(MetadataOverride {
        display_name: string_field(&map, NAME_KEY),
        icon_relative_path: string_field(&map, ICON_KEY),
    })
}

fn string_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    match map.get(key) {
        Some(Value::String(value)) => Some(value.clone()),
        Some(other) => {
            debug!("Sidecar key {:?} is not a string: {}", key, other);
            None
        }
        None => None,
    }
}
