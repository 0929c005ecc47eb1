//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Report translation keys used in source code but missing from the translation file
//! - `lookup`: Show the translation under a source position
//! - `keys`: List translation keys
//! - `edit`: Add or update a translation
//! - `usages`: Find where a key is used
//! - `watch`: Reload translations when the file changes
//! - `init`: Initialize transl8 configuration file
//! - `serve`: Start MCP server for AI integration

use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::config::find_config_file;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Workspace folder (defaults to the folder holding the nearest .transl8rc.json)
    #[arg(long, global = true, env = "TRANSL8_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

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

    /// The workspace folder the command runs in, as an absolute path.
    pub fn workspace_root(&self) -> Result<PathBuf> {
        resolve_workspace(self.workspace.as_deref())
    }
}

/// Resolve `--workspace` against the working directory.
///
/// Without the flag, the folder holding the nearest `.transl8rc.json` is
/// used, falling back to the working directory.
pub fn resolve_workspace(workspace: Option<&Path>) -> Result<PathBuf> {
    let cwd = env::current_dir().context("Failed to read current directory")?;
    let workspace = match workspace {
        Some(path) => cwd.join(path),
        None => find_config_file(&cwd)
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .unwrap_or(cwd),
    };
    workspace
        .canonicalize()
        .with_context(|| format!("Workspace folder not found: {}", workspace.display()))
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Directory to scan (defaults to the configured source directory)
    #[arg(long)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct LookupCommand {
    /// Source file containing the translation call
    pub file: PathBuf,
    /// 1-based line
    pub line: usize,
    /// 1-based column
    pub column: usize,

    /// Print the hover as Markdown
    #[arg(long)]
    pub markdown: bool,
}

#[derive(Debug, Args)]
pub struct KeysCommand {
    /// Only list keys starting with this prefix
    #[arg(long)]
    pub prefix: Option<String>,
}

#[derive(Debug, Args)]
pub struct EditCommand {
    /// Dot-separated translation key
    pub key: String,

    /// Translated text
    #[arg(long)]
    pub value: String,

    /// Note for translators (an empty value removes it)
    #[arg(long)]
    pub context: Option<String>,

    /// Source file whose scope receives the edit (defaults to the workspace)
    #[arg(long)]
    pub source: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct UsagesCommand {
    /// Dot-separated translation key
    pub key: String,

    /// Directory to scan (defaults to the configured source directory)
    #[arg(long)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report keys used in source code that have no translation
    Check(CheckCommand),
    /// Show the translation of the key at a source position
    Lookup(LookupCommand),
    /// List translation keys in file order
    Keys(KeysCommand),
    /// Add or update a translation
    Edit(EditCommand),
    /// List every usage of a key in source code
    Usages(UsagesCommand),
    /// Watch the translation file and reload it on change
    Watch,
    /// Initialize a new .transl8rc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
