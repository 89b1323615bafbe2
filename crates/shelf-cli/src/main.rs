//! Launch Shelf CLI - terminal front end for a shortcuts directory.
//!
//! Lists the resolved entries of a shelf and launches one on request. The
//! list is taken fresh on every invocation.

mod render;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use launch_shelf::{Shelf, ShelfConfig, ShelfSettings};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "shelf")]
#[command(about = "Launch shortcuts from a local shelf directory")]
struct Args {
    /// Shortcuts directory (defaults to `shortcuts` next to the executable)
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Allowed extension, repeatable; pass "" to include extensionless files
    #[arg(long = "ext", value_name = "EXT", global = true)]
    extensions: Vec<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// List the shelf entries (default)
    List {
        /// Print entries as JSON
        #[arg(long)]
        json: bool,
    },
    /// Launch an entry by file name, list index or display name
    ///
    /// An exact file name is matched before a list index, so a shortcut
    /// named `2` is selected by `2` even when the list has two entries.
    Launch { selector: String },
    /// Write the icon an entry would show to a file
    Icon {
        selector: String,
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so `list --json` output stays machine-readable.
    let default_level = if args.debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let settings = settings_from_args(&args)?;
    info!(
        "{}: {} (extensions {:?})",
        ShelfConfig::APP_NAME,
        settings.shortcuts_dir.display(),
        settings.allowed_extensions.to_sorted_vec()
    );

    let shelf = Shelf::new(settings);
    match args.command.unwrap_or(Command::List { json: false }) {
        Command::List { json } => list(&shelf, json),
        Command::Launch { selector } => launch(&shelf, &selector),
        Command::Icon { selector, output } => export_icon(&shelf, &selector, output),
    }
}

fn settings_from_args(args: &Args) -> Result<ShelfSettings> {
    let dir = match &args.dir {
        Some(dir) => dir.clone(),
        None => ShelfSettings::default_shortcuts_dir()
            .context("Could not determine the default shortcuts directory")?,
    };

    let settings = ShelfSettings::new(dir);
    if args.extensions.is_empty() {
        Ok(settings)
    } else {
        Ok(settings.with_extensions(&args.extensions))
    }
}

fn list(shelf: &Shelf, json: bool) -> Result<()> {
    let entries = shelf.load().unwrap_or_else(|e| {
        warn!("Showing empty shelf: {}", e);
        Vec::new()
    });

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else if entries.is_empty() {
        println!("{}", render::EMPTY_STATE);
    } else {
        for (index, entry) in entries.iter().enumerate() {
            println!("{}", render::format_entry(index, entry));
        }
    }
    Ok(())
}

fn launch(shelf: &Shelf, selector: &str) -> Result<()> {
    let entries = shelf.load().context("Could not read the shortcuts directory")?;
    let entry = render::select_entry(&entries, selector)
        .ok_or_else(|| anyhow!("No shelf entry matches {:?}", selector))?;

    shelf
        .launch(entry)
        .with_context(|| format!("Could not launch {}", entry.display_name()))?;
    println!("Launched {}", entry.display_name());
    Ok(())
}

fn export_icon(shelf: &Shelf, selector: &str, output: PathBuf) -> Result<()> {
    let entries = shelf.load().context("Could not read the shortcuts directory")?;
    let entry = render::select_entry(&entries, selector)
        .ok_or_else(|| anyhow!("No shelf entry matches {:?}", selector))?;

    let bytes = entry.icon_source().load_bytes();
    std::fs::write(&output, bytes.as_ref())
        .with_context(|| format!("Could not write {}", output.display()))?;
    println!("Wrote {} bytes to {}", bytes.len(), output.display());
    Ok(())
}
