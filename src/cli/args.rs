//! CLI argument parsing using clap.
//!
//! Contains the Cli struct and the Commands enum.

use clap::{
    Parser, Subcommand,
    builder::styling::{AnsiColor, Effects, Styles},
};
use std::path::PathBuf;

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

/// Completion for ES module imports
#[derive(Parser)]
#[command(
    name = "esm-complete",
    version = env!("CARGO_PKG_VERSION"),
    about = "Completion for ES module imports",
    long_about = "Complete `Name.export` for `import * as Name from './module.js'` \
                  and relative paths inside import string literals.",
    next_line_help = true,
    styles = clap_cargo_style()
)]
pub struct Cli {
    /// Path to custom settings.toml file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Initialize configuration
    #[command(about = "Create .esm-complete/settings.toml with default settings")]
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Show current configuration settings
    #[command(about = "Display the effective settings")]
    Config,

    /// Print the export table of a module
    #[command(
        about = "List the completions a module exports",
        after_help = "Examples:\n  esm-complete exports src/math.js\n  esm-complete exports src/math.js --json"
    )]
    Exports {
        /// Module file to parse
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run one completion request against a document on disk
    #[command(
        about = "Complete at byte offsets of a document",
        after_help = "Examples:\n  esm-complete complete src/app.js --offset 120\n  esm-complete complete src/app.js --offset 120 --offset 340 --json"
    )]
    Complete {
        /// Document being edited
        document: PathBuf,

        /// Byte offset of a cursor (repeatable)
        #[arg(short, long = "offset", value_name = "OFFSET", required = true)]
        offsets: Vec<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
