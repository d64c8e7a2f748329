// src/main.rs
use anyhow::Result;
use clap::Parser;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

mod analyzer;
mod cli;
mod core;
mod generators;
mod history;
mod models;
mod utils;

use crate::analyzer::PasswordAnalyzer;
use crate::cli::{Args, CliCommand};
use crate::core::config::Config;
use crate::core::reference::ReferenceData;
use crate::generators::PasswordGenerator;
use crate::history::MemoryHistory;

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::load();

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .init();

    log::info!("🔐 Starting PassGauge - Password Strength Analyzer");

    let default_length = args.length.unwrap_or(config.default_password_length);

    let mut analyzer =
        PasswordAnalyzer::new(ReferenceData::default()).with_suggestion_length(default_length);

    // Session-local, write-only audit trail; dies with the process
    let history = if config.track_history {
        let history = Rc::new(RefCell::new(MemoryHistory::new()));
        analyzer = analyzer.with_history(Box::new(Rc::clone(&history)));
        Some(history)
    } else {
        None
    };

    let generator = PasswordGenerator::new();

    match args.command {
        Some(CliCommand::Check { password }) => {
            let report = analyzer.analyze(&password);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                cli::menu::print_report(&report);
            }
        }
        Some(CliCommand::Generate { length }) => {
            let password = generator.generate(length.unwrap_or(default_length))?;
            if args.json {
                println!("{}", serde_json::json!({ "password": password }));
            } else {
                println!("{}", password);
            }
        }
        None => {
            let should_exit = Arc::new(AtomicBool::new(false));

            {
                let should_exit = Arc::clone(&should_exit);
                ctrlc::set_handler(move || {
                    log::info!("🔴 Ctrl+C received. Shutting down...");
                    should_exit.store(true, Ordering::SeqCst);
                    println!("\nExiting password checker. Stay secure!");
                    std::process::exit(0);
                })
                .expect("Failed to set Ctrl+C handler");
            }

            cli::menu::run_menu(&mut analyzer, &generator, default_length, should_exit)
                .map_err(|e| anyhow::anyhow!("CLI menu error: {}", e))?;
        }
    }

    if let Some(history) = history {
        log::debug!(
            "Recorded {} analyses this session",
            history.borrow().entries().len()
        );
    }

    log::info!("✅ PassGauge shutdown complete.");
    Ok(())
}
