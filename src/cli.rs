use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List streams that are currently live
    Live,
    /// List streams that have ended
    Ended,
    /// Show a single stream by id
    Stream { id: String },
    /// Show a token by mint address
    Token { address: String },
    /// Print the canned chat history
    Chat,
    /// Check whether an address is well-formed Base58
    Validate { address: String },
    /// Generate a fresh stream key
    Keygen,
}
