// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod menu;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Print one-shot results as JSON (for scripting)
    #[arg(long)]
    pub json: bool,

    /// Default length for generated passwords
    #[arg(long, short, env = "DEFAULT_PASSWORD_LENGTH")]
    pub length: Option<usize>,

    /// Command to execute; omit for the interactive checker
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}
