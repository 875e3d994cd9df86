//! Report formatting and printing utilities.
//!
//! Separate from core logic to allow honolate to be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, ExtractSummary, InitSummary};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print_running() {
    println!("{}", "Running i18n extraction...".bold());
}

/// Print the outcome of a command to stdout (stderr for failures).
pub fn print(result: &CommandResult) {
    match &result.summary {
        CommandSummary::Init(summary) if !summary.created => {
            print_init_failure_to(summary, &mut io::stderr().lock());
        }
        _ => print_to(result, &mut io::stdout().lock()),
    }
}

/// Print a command result to a custom writer.
pub fn print_to<W: Write>(result: &CommandResult, writer: &mut W) {
    match &result.summary {
        CommandSummary::Extract(summary) => print_extract_to(summary, writer),
        CommandSummary::Init(summary) if summary.created => {
            let _ = writeln!(
                writer,
                "{} {}",
                SUCCESS_MARK.green(),
                format!("Created {}", summary.config_path.display()).green()
            );
        }
        CommandSummary::Init(summary) => print_init_failure_to(summary, writer),
    }
}

fn print_init_failure_to<W: Write>(summary: &InitSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {} already exists",
        FAILURE_MARK.red(),
        summary.config_path.display()
    );
}

fn print_extract_to<W: Write>(summary: &ExtractSummary, writer: &mut W) {
    let _ = writeln!(writer, "Found {} source file(s):", summary.files.len());
    for file in &summary.files {
        let _ = writeln!(writer, " - {}", file);
    }

    let _ = writeln!(
        writer,
        "Extracted {} localized string(s).",
        summary.extractions.len()
    );
    for record in summary.extractions.records() {
        let _ = writeln!(writer, " - {}", record.localization_key.cyan());
        for location in &record.locations {
            let _ = writeln!(
                writer,
                "    {} {}:{}",
                "at".dimmed(),
                location.file,
                location.line
            );
        }
    }

    if summary.sync.is_dirty() {
        let _ = writeln!(
            writer,
            "{}",
            "Issues were found during extraction:".bold().yellow()
        );
        for issue in &summary.sync.issues {
            let _ = writeln!(writer, " - {}", issue);
        }
        let hint = if summary.sync.read_only {
            "Run without --read-only to fix these issues automatically."
        } else {
            "These issues have been fixed automatically."
        };
        let _ = writeln!(writer, "{}", hint);
    } else {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            "i18n extraction completed successfully. No changes were necessary.".green()
        );
    }
}
