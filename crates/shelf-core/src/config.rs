//! Centralized configuration for Launch Shelf.
//!
//! Fixed conventions live as associated constants; runtime choices (which
//! directory to scan, which extensions to accept) live in [`ShelfSettings`].

use crate::error::{Result, ShelfError};
use crate::filter::AllowSet;
use std::path::{Path, PathBuf};

/// Application-level constants.
pub struct ShelfConfig;

impl ShelfConfig {
    pub const APP_NAME: &'static str = "Launch Shelf";

    /// Suffix appended to a launchable file's full name to find its sidecar.
    /// Part of the on-disk format; do not change.
    pub const SIDECAR_SUFFIX: &'static str = ".json";

    /// Prefix of the synthesized display name when no override exists.
    pub const DISPLAY_NAME_PREFIX: &'static str = "file: ";

    /// Directory next to the executable that holds the shortcuts.
    pub const SHORTCUTS_DIR_NAME: &'static str = "shortcuts";

    /// Windows executables, Windows shortcuts and extensionless files.
    pub const DEFAULT_ALLOWED_EXTENSIONS: [&'static str; 3] = [".exe", ".lnk", ""];
}

/// Runtime settings for one shelf.
#[derive(Debug, Clone)]
pub struct ShelfSettings {
    /// Directory scanned for launchable files.
    pub shortcuts_dir: PathBuf,
    /// Extensions accepted by the scanner.
    pub allowed_extensions: AllowSet,
}

impl ShelfSettings {
    /// Create settings for a directory with the default extension set.
    pub fn new(shortcuts_dir: impl AsRef<Path>) -> Self {
        Self {
            shortcuts_dir: shortcuts_dir.as_ref().to_path_buf(),
            allowed_extensions: AllowSet::default(),
        }
    }

    /// Replace the allowed extensions.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.allowed_extensions = AllowSet::new(extensions);
        self
    }

    /// `<directory of the running executable>/shortcuts`.
    pub fn default_shortcuts_dir() -> Result<PathBuf> {
        let exe = std::env::current_exe()
            .map_err(|e| ShelfError::Config {
                message: format!("Could not locate the running executable: {}", e),
            })?;
        let exe_dir = exe.parent().ok_or_else(|| ShelfError::Config {
            message: format!("Executable has no parent directory: {}", exe.display()),
        })?;
        Ok(exe_dir.join(ShelfConfig::SHORTCUTS_DIR_NAME))
    }

    /// Settings for the default shortcuts directory.
    pub fn from_executable_dir() -> Result<Self> {
        Ok(Self::new(Self::default_shortcuts_dir()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_shortcuts_dir_sits_next_to_executable() {
        let dir = ShelfSettings::default_shortcuts_dir().expect("exe dir");
        assert!(dir.ends_with(ShelfConfig::SHORTCUTS_DIR_NAME));
    }

    #[test]
    fn test_with_extensions_overrides_defaults() {
        let settings = ShelfSettings::new("/tmp/shelf").with_extensions([".bat"]);
        assert!(settings.allowed_extensions.contains(".bat"));
        assert!(!settings.allowed_extensions.contains(".exe"));
    }

    #[test]
    fn test_new_uses_default_extensions() {
        let settings = ShelfSettings::new("/tmp/shelf");
        for ext in ShelfConfig::DEFAULT_ALLOWED_EXTENSIONS {
            assert!(settings.allowed_extensions.contains(ext));
        }
    }
}
