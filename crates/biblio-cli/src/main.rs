//! Biblio CLI - a single-user library catalog manager.
//!
//! Loads the catalog from the data file (or starts empty), runs the menu
//! loop, and writes state back after every mutation. Corrupt persisted
//! state at startup aborts with a diagnostic; it is never silently
//! reinitialized.

use std::path::PathBuf;

use anyhow::Context;
use biblio_core::{Catalog, VERSION};
use clap::Parser;

mod config;
mod menu;
mod output;
mod prompt;
mod validation;

/// Biblio - a single-user library catalog manager
#[derive(Parser)]
#[command(name = "biblio")]
#[command(author, version = VERSION, about, long_about = None)]
struct Cli {
    /// Path to the catalog data file
    #[arg(short, long, env = "BIBLIO_DATA")]
    data: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let data_path = config::resolve_data_path(cli.data)?;

    let mut catalog = Catalog::load(&data_path).with_context(|| {
        format!(
            "Failed to load catalog from {}; fix or move the file to continue",
            data_path.display()
        )
    })?;

    menu::run(&mut catalog, &data_path)
}
