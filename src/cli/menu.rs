// src/cli/menu.rs
use console::style;
use inquire::{InquireError, Text};
use std::error::Error;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::analyzer::PasswordAnalyzer;
use crate::generators::PasswordGenerator;
use crate::models::{AnalysisReport, Strength};

pub fn run_menu(
    analyzer: &mut PasswordAnalyzer,
    generator: &PasswordGenerator,
    default_length: usize,
    should_exit: Arc<AtomicBool>,
) -> Result<(), Box<dyn Error>> {
    print_banner();
    print_usage();

    while !should_exit.load(Ordering::SeqCst) {
        println!("\n{}", "-".repeat(60));

        let input = match Text::new("Enter a command or password to check:").prompt() {
            Ok(line) => line,
            Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => {
                break;
            }
            Err(e) => {
                log::error!("Prompt failed: {}", e);
                return Err(Box::new(e));
            }
        };

        if input.is_empty() {
            continue;
        }

        match input.to_lowercase().as_str() {
            "exit" | "quit" | "q" => {
                println!("Exiting password checker. Stay secure!");
                break;
            }
            "help" => print_usage(),
            "generate" => match generator.generate(default_length) {
                Ok(password) => {
                    println!(
                        "\nGenerated Strong Password: {}",
                        style(&password).green().bold()
                    );
                    println!("(This password is not stored and won't be shown again)");
                }
                Err(e) => {
                    log::warn!("Password generation failed: {}", e);
                    println!("❌ Failed to generate password: {}", e);
                }
            },
            _ => {
                let report = analyzer.analyze(&input);
                print_report(&report);
            }
        }
    }

    Ok(())
}

/// Render one analysis report the way the interactive shell shows it.
pub fn print_report(report: &AnalysisReport) {
    let heading = format!(
        "PASSWORD STRENGTH: {}",
        report.strength.to_string().to_uppercase()
    );

    println!("\n{}", "=".repeat(60));
    match report.strength {
        Strength::Weak => println!("{}", style(heading).red().bold()),
        Strength::Moderate => println!("{}", style(heading).yellow().bold()),
        Strength::Strong | Strength::VeryStrong => {
            println!("{}", style(heading).green().bold())
        }
    }
    println!("Score: {}/{}", report.score, report.max_score);
    println!("{}", "=".repeat(60));

    println!("\nANALYSIS:");
    for item in &report.feedback {
        println!("  • {}", item);
    }

    println!("\nENTROPY: {} bits", report.entropy);
    println!("ESTIMATED CRACK TIME: {}", report.crack_time_estimate);

    if !report.suggestions.is_empty() {
        println!("\nSUGGESTIONS:");
        for suggestion in &report.suggestions {
            println!("  • {}", suggestion);
        }
    }

    println!("\nPASSWORD SUGGESTION:");
    println!("  {}", style(&report.generated_password).cyan());
    println!("\nNote: Generated passwords are not stored and are shown only once.");
    println!("{}", "=".repeat(60));
}

fn print_banner() {
    println!("\n{}", "=".repeat(60));
    println!("╔══════════════════════════════════════╗");
    println!("║        🔐 PASSGAUGE CHECKER          ║");
    println!("╚══════════════════════════════════════╝");
    println!("{}", "=".repeat(60));
    println!("\nThis program evaluates password strength using multiple criteria:");
    println!("  • Length, character variety and entropy");
    println!("  • Common passwords, keyboard layouts, dates and repetitions");
}

fn print_usage() {
    println!("\nCommands:");
    println!("  • Enter a password to check its strength");
    println!("  • Type 'generate' to create a strong password");
    println!("  • Type 'help' to show this message again");
    println!("  • Type 'exit' or 'quit' to end the program");
    println!("\nNote: This tool is for educational purposes only. For security,");
    println!("      consider using a dedicated password manager.");
}
