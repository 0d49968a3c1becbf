use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "audiopub")]
#[command(about = "Parse folders of audio files into audiobook publication manifests")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Extra file extensions to treat as ignorable companions
    #[arg(long = "ignore-ext", global = true)]
    pub ignore_extensions: Vec<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a bundle directory and display its publication manifest
    Parse {
        /// Bundle directory containing the audio tracks
        dir: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the reading order with per-track durations
    Tracks {
        /// Bundle directory containing the audio tracks
        dir: PathBuf,
    },

    /// Extract the resolved cover image
    Cover {
        /// Bundle directory containing the audio tracks
        dir: PathBuf,

        /// File to write the cover bytes to
        #[arg(short, long)]
        output: PathBuf,
    },
}
