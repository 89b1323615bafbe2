//! Basic usage example - list the entries of a shortcuts directory

use launch_shelf::{Result, Shelf, ShelfSettings};

fn main() -> Result<()> {
    // Get path from args or use the directory next to the executable
    let settings = match std::env::args().nth(1) {
        Some(path) => ShelfSettings::new(path),
        None => ShelfSettings::from_executable_dir()?,
    };

    println!("Scanning {}", settings.shortcuts_dir.display());
    let shelf = Shelf::new(settings);
    let entries = shelf.load()?;

    if entries.is_empty() {
        println!("No shortcuts found.");
    } else {
        println!("Found {} shortcuts:", entries.len());
        for entry in &entries {
            let icon = if entry.icon_source().is_fallback() {
                "default icon"
            } else {
                "custom icon"
            };
            println!(
                "  - {} ({}, {})",
                entry.display_name(),
                entry.launch_target().display(),
                icon
            );
        }
    }

    Ok(())
}
