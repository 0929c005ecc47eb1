use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".transl8rc.json";

/// Per-folder configuration, read from `.transl8rc.json` at the folder root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Translation file, absolute or relative to the folder root.
    #[serde(default)]
    pub translation_file_path: Option<String>,
    /// Directory whose files get key completion, absolute or relative.
    #[serde(default)]
    pub source_code_path: Option<String>,
    /// Functions whose first string argument is a translation key.
    #[serde(default)]
    pub function_names: Vec<String>,
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any function name is blank.
    pub fn validate(&self) -> Result<()> {
        for name in &self.function_names {
            if name.trim().is_empty() {
                bail!("Invalid entry in 'functionNames': function names must not be blank");
            }
        }
        Ok(())
    }
}

/// Config written by `transl8 init`.
pub fn default_config() -> Config {
    Config {
        translation_file_path: Some("./locales/en.json".to_string()),
        source_code_path: Some("./src".to_string()),
        function_names: vec!["t".to_string()],
    }
}

pub fn default_config_json() -> Result<String> {
    serde_json::to_string_pretty(&default_config()).context("Failed to generate default config.")
}

/// Walk up from `start_dir` to the nearest config file, stopping at a
/// repository root.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.is_file() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Load the config of a folder. `Ok(None)` if the folder has no config file.
pub fn load_config(folder: &Path) -> Result<Option<Config>> {
    let path = folder.join(CONFIG_FILE_NAME);
    if !path.is_file() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;
    config.validate()?;
    Ok(Some(config))
}
