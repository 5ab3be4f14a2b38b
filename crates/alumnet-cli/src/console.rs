//! CLI console utilities

use alumnet_core::{ResultKind, SearchResult};
use colored::*;

/// CLI console for formatted output
pub struct CliConsole {
    verbose: bool,
}

impl CliConsole {
    /// Create a new CLI console
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        if self.verbose {
            println!("{} {}", "ℹ".blue().bold(), message);
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        println!("{} {}", "✓".green().bold(), message.green());
    }

    /// Print a warning message
    pub fn warn(&self, message: &str) {
        println!("{} {}", "⚠".yellow().bold(), message.yellow());
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red().bold(), message.red());
    }

    /// Print a header
    pub fn print_header(&self, title: &str) {
        println!();
        println!("{}", title.bold().underline());
        println!("{}", "=".repeat(title.chars().count()).dimmed());
    }

    /// Print a separator
    pub fn print_separator(&self) {
        if self.verbose {
            println!("{}", "-".repeat(50).dimmed());
        }
    }

    /// Print a ranked result list, numbered from 1
    pub fn print_results(&self, results: &[SearchResult]) {
        for (i, result) in results.iter().enumerate() {
            let score = if self.verbose {
                format!(" ({})", result.score).dimmed().to_string()
            } else {
                String::new()
            };
            println!(
                "{:>3}. {} {}{}",
                i + 1,
                kind_badge(result.kind),
                result.title.bold(),
                score
            );
            if !result.description.is_empty() {
                println!("       {}", result.description.dimmed());
            }
        }
    }

    /// Print remembered queries, numbered from 1
    pub fn print_history(&self, entries: &[String]) {
        if entries.is_empty() {
            println!("{}", "No recent searches".dimmed());
            return;
        }
        for (i, entry) in entries.iter().enumerate() {
            println!("{:>3}. {}", i + 1, entry);
        }
    }
}

fn kind_badge(kind: ResultKind) -> ColoredString {
    let label = format!("[{}]", kind);
    match kind {
        ResultKind::Post => label.blue(),
        ResultKind::Alumni => label.green(),
        ResultKind::Event => label.magenta(),
        ResultKind::Job => label.yellow(),
        ResultKind::Message => label.cyan(),
    }
}
