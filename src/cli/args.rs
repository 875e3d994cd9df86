//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: Extract localized strings and synchronize language files
//! - `init`: Initialize honolate configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Extract(cmd)) => cmd.args.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Glob pattern for source files, relative to the root (overrides config file)
    #[arg(long)]
    pub pattern: Option<String>,

    /// Source root directory (default: current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Report drift without writing language files
    #[arg(long)]
    pub read_only: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    #[command(flatten)]
    pub args: ExtractArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract localized strings from source files and update the language files
    Extract(ExtractCommand),
    /// Initialize a new .honolaterc.json configuration file
    Init,
}
