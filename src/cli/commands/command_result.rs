use std::path::PathBuf;

use crate::cli::exit_status::ExitStatus;
use crate::core::{registry::Extractions, sync::SyncReport};

#[derive(Debug)]
pub enum CommandSummary {
    Extract(ExtractSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ExtractSummary {
    /// Scanned source files, relative to the root and sorted.
    pub files: Vec<String>,
    pub extractions: Extractions,
    pub sync: SyncReport,
}

#[derive(Debug)]
pub struct InitSummary {
    pub config_path: PathBuf,
    /// False if a config file already existed and nothing was written.
    pub created: bool,
}

/// Result of running honolate commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
}

impl CommandResult {
    /// Drift in the language files (fixed or not) is a failure.
    pub fn exit_status(&self) -> ExitStatus {
        match &self.summary {
            CommandSummary::Extract(summary) if summary.sync.is_dirty() => ExitStatus::Failure,
            CommandSummary::Init(summary) if !summary.created => ExitStatus::Failure,
            _ => ExitStatus::Success,
        }
    }
}
