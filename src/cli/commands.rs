//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "headtags")]
#[command(about = "Render deduplicated, priority-ordered HTML head tags", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log registry diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the manifest's tags as markup
    Render {
        /// Tag manifest (TOML)
        manifest: PathBuf,

        /// Keep insertion order instead of sorting by priority
        #[arg(long)]
        unsorted: bool,

        /// JSON snapshot to merge before rendering
        #[arg(long, value_name = "SNAPSHOT")]
        merge: Option<PathBuf>,
    },

    /// Print the manifest's tags as a JSON snapshot
    Export {
        /// Tag manifest (TOML)
        manifest: PathBuf,
    },

    /// List identity keys and priorities
    List {
        /// Tag manifest (TOML)
        manifest: PathBuf,

        /// Only show tags with this name (e.g., meta, link)
        #[arg(short, long)]
        tag: Option<String>,
    },
}
