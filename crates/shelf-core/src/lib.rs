//! Launch Shelf - headless core of a local application launcher shelf.
//!
//! The pipeline runs one way:
//!
//! 1. [`scanner`] lists a directory and keeps files with an allowed extension
//! 2. [`metadata`] reads each candidate's optional `<file>.json` sidecar
//! 3. [`builder`] merges both into a [`ResolvedEntry`]
//! 4. a front end renders the entries and calls a [`Launcher`] on activation
//!
//! # Example
//!
//! ```rust,no_run
//! use launch_shelf::{Shelf, ShelfSettings};
//!
//! fn main() -> launch_shelf::Result<()> {
//!     let shelf = Shelf::new(ShelfSettings::new("/opt/shelf/shortcuts"));
//!     let entries = shelf.load()?;
//!     for entry in &entries {
//!         println!("{}", entry.display_name());
//!     }
//!     if let Some(first) = entries.first() {
//!         shelf.launch(first)?;
//!     }
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod filter;
pub mod icon;
pub mod launcher;
pub mod metadata;
pub mod model;
pub mod platform;
pub mod scanner;

pub use config::{ShelfConfig, ShelfSettings};
pub use error::{Result, ShelfError};
pub use filter::AllowSet;
pub use icon::{IconSource, FALLBACK_ICON_PNG};
pub use launcher::{LaunchStrategy, Launcher, SystemLauncher};
pub use model::{CandidateEntry, MetadataOverride, ResolvedEntry};
pub use platform::Platform;

use std::path::Path;

/// Scan `dir` and resolve every candidate into a presentable entry.
///
/// Fails only when the directory itself cannot be read. Sidecar and icon
/// problems degrade the affected entry to its defaults.
pub fn load_entries(dir: &Path, allow_set: &AllowSet) -> Result<Vec<ResolvedEntry>> {
    let candidates = scanner::scan(dir, allow_set)?;
    Ok(candidates
        .iter()
        .map(|candidate| builder::build(candidate, &metadata::resolve(candidate)))
        .collect())
}

/// A configured shelf: where to look, what to accept, how to launch.
pub struct Shelf<L: Launcher = SystemLauncher> {
    settings: ShelfSettings,
    launcher: L,
}

impl Shelf<SystemLauncher> {
    /// Shelf using the host platform's launcher.
    pub fn new(settings: ShelfSettings) -> Self {
        Self::with_launcher(settings, SystemLauncher::new())
    }
}

impl<L: Launcher> Shelf<L> {
    pub fn with_launcher(settings: ShelfSettings, launcher: L) -> Self {
        Self { settings, launcher }
    }

    pub fn settings(&self) -> &ShelfSettings {
        &self.settings
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    /// Take a fresh snapshot of the shortcuts directory.
    pub fn load(&self) -> Result<Vec<ResolvedEntry>> {
        load_entries(&self.settings.shortcuts_dir, &self.settings.allowed_extensions)
    }

    /// Activate an entry.
    pub fn launch(&self, entry: &ResolvedEntry) -> Result<()> {
        self.launcher.launch(entry.launch_target())
    }
}
