use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary, InitSummary, helper::finish};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

/// Write a default config into `dir`, refusing to overwrite one.
pub fn init(dir: &Path) -> Result<CommandResult> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        let summary = InitSummary {
            error: Some(format!("{} already exists", CONFIG_FILE_NAME)),
        };
        return Ok(finish(CommandSummary::Init(summary), 1, true));
    }

    fs::write(&config_path, default_config_json()?)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    Ok(finish(
        CommandSummary::Init(InitSummary { error: None }),
        0,
        true,
    ))
}
