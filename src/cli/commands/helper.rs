use std::path::{Path, PathBuf};

use anyhow::Result;

use super::{CommandResult, CommandSummary};
use crate::engine::Engine;

/// The workspace a command runs in and the engine serving it.
pub struct CommandContext {
    pub workspace: PathBuf,
    pub engine: Engine,
}

impl CommandContext {
    pub fn new(workspace: PathBuf) -> Self {
        let engine = Engine::for_folders([&workspace]);
        Self { workspace, engine }
    }

    /// Resolve a command-line path against the working directory.
    ///
    /// Existing paths are canonicalized so they compare equal to the
    /// canonical workspace folder.
    pub fn absolute(path: &Path) -> Result<PathBuf> {
        let path = std::env::current_dir()?.join(path);
        Ok(path.canonicalize().unwrap_or(path))
    }
}

pub fn finish(summary: CommandSummary, error_count: usize, exit_on_errors: bool) -> CommandResult {
    CommandResult {
        summary,
        error_count,
        exit_on_errors,
    }
}

/// A path relative to the workspace when it lies inside it.
pub fn display_path(workspace: &Path, path: &Path) -> String {
    path.strip_prefix(workspace)
        .unwrap_or(path)
        .display()
        .to_string()
}
