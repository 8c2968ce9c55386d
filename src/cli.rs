//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Plainsite static site generator CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory (default: current directory)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Template directory name (relative to project root)
    #[arg(short, long)]
    pub templates: Option<PathBuf>,

    /// Page directory name (relative to project root)
    #[arg(short, long)]
    pub pages: Option<PathBuf>,

    /// Output directory name (relative to project root)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Create the template and page directories with default fragments
    Init,

    /// Create a new page stub with the given name, e.g. index
    New {
        /// the name of the page; becomes pages/<name>.html
        name: String,
    },

    /// Render every page into the output directory
    Build,
}
