use std::env;

use anyhow::{Context, Result};
use tracing::debug;

use super::super::{args::ExtractCommand, report::print_running};
use super::{CommandResult, CommandSummary, ExtractSummary};
use crate::{
    config::{CONFIG_FILE_NAME, ConfigLoadResult, load_config},
    core::{extract::extract_files, file_scanner::scan_files, sync::TranslationSynchronizer},
};

/// Scan sources, extract localized strings and bring every language file in
/// line with them.
pub fn extract(cmd: ExtractCommand) -> Result<CommandResult> {
    let args = cmd.args;
    print_running();

    let root = match args.root {
        Some(root) => root,
        None => env::current_dir().context("Failed to get current directory")?,
    };

    let ConfigLoadResult {
        config,
        base_dir,
        from_file,
    } = load_config(&root)?;
    if !from_file {
        debug!("No {} found, using default configuration", CONFIG_FILE_NAME);
    }

    let pattern = args.pattern.as_deref().unwrap_or(config.pattern());
    let scan = scan_files(&root, pattern, &config.ignores)?;
    debug!(
        pattern,
        files = scan.files.len(),
        skipped = scan.skipped_count,
        "Scanned source files"
    );

    let extractions = extract_files(&root, &scan.files)?;
    debug!(
        keys = extractions.len(),
        occurrences = extractions.occurrence_count(),
        "Extraction finished"
    );

    let language_files = config.language_files(&base_dir);
    let sync = TranslationSynchronizer::new(
        &config.default_language,
        &language_files,
        args.read_only,
    )
    .sync(&extractions)?;

    Ok(CommandResult {
        summary: CommandSummary::Extract(ExtractSummary {
            files: scan.files,
            extractions,
            sync,
        }),
    })
}
