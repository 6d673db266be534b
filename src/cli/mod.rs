//! CLI interface for Chime

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Additive note synthesis and score rendering
#[derive(Parser)]
#[command(name = "chime")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a score to a WAV file
    Render {
        /// Score file path
        #[arg(short, long, default_value = "score.yaml")]
        score: PathBuf,

        /// Configuration file path (defaults apply when omitted and
        /// chime.yaml does not exist)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output file path
        #[arg(short, long, default_value = "out.wav")]
        output: PathBuf,
    },

    /// Validate a configuration file
    Check {
        /// Configuration file path
        #[arg(short, long, default_value = "chime.yaml")]
        config: PathBuf,
    },

    /// List available instruments
    Instruments,

    /// Generate example configuration and score files
    Init,
}
