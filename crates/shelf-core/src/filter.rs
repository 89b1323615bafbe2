//! Extension filter for candidate launchables.

use crate::config::ShelfConfig;
use std::collections::HashSet;

/// Case-insensitive set of allowed file extensions.
///
/// Extensions are stored lower-cased with their leading dot. The empty string
/// is a legal member and admits files that have no extension at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowSet {
    extensions: HashSet<String>,
}

impl AllowSet {
    /// Build a set from user-supplied extensions.
    ///
    /// `"EXE"`, `"exe"` and `".exe"` all normalize to `".exe"`.
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            extensions: extensions
                .into_iter()
                .map(|ext| normalize_extension(ext.as_ref()))
                .collect(),
        }
    }

    /// Whether `extension` (in any of the accepted spellings) is allowed.
    pub fn contains(&self, extension: &str) -> bool {
        self.extensions.contains(&normalize_extension(extension))
    }

    /// Whether extensionless files are admitted.
    pub fn allows_extensionless(&self) -> bool {
        self.extensions.contains("")
    }

    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    /// Sorted extensions, for logs and display.
    pub fn to_sorted_vec(&self) -> Vec<String> {
        let mut out: Vec<String> = self.extensions.iter().cloned().collect();
        out.sort();
        out
    }
}

impl Default for AllowSet {
    fn default() -> Self {
        Self::new(ShelfConfig::DEFAULT_ALLOWED_EXTENSIONS)
    }
}

fn normalize_extension(ext: &str) -> String {
    let lower = ext.trim().to_lowercase();
    if lower.is_empty() || lower.starts_with('.') {
        lower
    } else {
        format!(".{}", lower)
    }
}

/// Extension of a file name: everything from the last `.`, lower-cased.
///
/// A name without a dot has the empty extension. Dotfiles such as `.profile`
/// are their own extension.
pub fn extension_of(filename: &str) -> String {
    match filename.rfind('.') {
        Some(idx) => filename[idx..].to_lowercase(),
        None => String::new(),
    }
}

/// Decide whether a directory entry name is a candidate launchable.
pub fn is_allowed(filename: &str, allow_set: &AllowSet) -> bool {
    allow_set.extensions.contains(&extension_of(filename))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("app1.exe"), ".exe");
        assert_eq!(extension_of("Game.LNK"), ".lnk");
        assert_eq!(extension_of("archive.tar.gz"), ".gz");
        assert_eq!(extension_of("tool"), "");
        assert_eq!(extension_of("trailing."), ".");
        assert_eq!(extension_of(".profile"), ".profile");
    }

    #[test]
    fn test_is_allowed_is_case_insensitive() {
        let allow = AllowSet::new([".exe", ""]);
        assert!(is_allowed("app1.exe", &allow));
        assert!(is_allowed("APP1.EXE", &allow));
        assert!(is_allowed("tool", &allow));
        assert!(!is_allowed("notes.txt", &allow));
        assert!(!is_allowed("app1.exe.json", &allow));
    }

    #[test]
    fn test_extensionless_requires_empty_entry() {
        let allow = AllowSet::new([".exe"]);
        assert!(!allow.allows_extensionless());
        assert!(!is_allowed("tool", &allow));
    }

    #[test]
    fn test_allow_set_normalization() {
        let allow = AllowSet::new(["EXE", " .Lnk ", ""]);
        assert_eq!(allow.to_sorted_vec(), vec!["", ".exe", ".lnk"]);
        assert!(allow.contains("exe"));
        assert!(allow.contains(".EXE"));
        assert!(allow.allows_extensionless());
    }

    #[test]
    fn test_default_allow_set() {
        let allow = AllowSet::default();
        assert_eq!(allow.len(), 3);
        assert!(is_allowed("setup.exe", &allow));
        assert!(is_allowed("Steam.lnk", &allow));
        assert!(is_allowed("run", &allow));
    }
}
