use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "notebake")]
#[command(about = "notebake - inline transcluded note fragments into a host note")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Vault root directory
    #[arg(short = 'd', long, global = true, default_value = ".")]
    pub vault: PathBuf,

    /// Settings file path (TOML); defaults apply when omitted
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Recursively inline every qualifying embed of a note
    Bake {
        /// Note to bake: vault-relative path or bare name
        note: String,

        /// Narrow the bake to one heading or block, e.g. "#Heading" or "#^id"
        #[arg(long)]
        subpath: Option<String>,

        /// Write the result to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List a note's embeds and how they resolve
    Scan {
        /// Note to inspect: vault-relative path or bare name
        note: String,

        /// Emit JSON instead of a text listing
        #[arg(long)]
        json: bool,
    },
}
