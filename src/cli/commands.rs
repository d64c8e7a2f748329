// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Analyze a password and print its strength report
    Check {
        /// Password to analyze
        #[arg(required = true)]
        password: String,
    },

    /// Generate a strong password
    Generate {
        /// Password length (defaults to the configured length)
        #[arg(long)]
        length: Option<usize>,
    },
}
