use std::path::PathBuf;

use crate::core::{EditOutcome, TranslationEntry};
use crate::features::{FileDiagnostic, FileUsage, Hover};

#[derive(Debug)]
pub enum CommandSummary {
    Check(CheckSummary),
    Lookup(LookupSummary),
    Keys(KeysSummary),
    Edit(EditSummary),
    Usages(UsagesSummary),
    Watch(WatchSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct CheckSummary {
    pub workspace: PathBuf,
    pub diagnostics: Vec<FileDiagnostic>,
    pub files_checked: usize,
    pub skipped_count: usize,
    /// Why the translation file could not be loaded, if it could not.
    pub load_warning: Option<String>,
    /// Set when no function names are configured and nothing was scanned.
    pub scanning_disabled: bool,
}

#[derive(Debug)]
pub struct LookupSummary {
    /// `path:line:column` as given on the command line.
    pub location: String,
    pub hover: Option<Hover>,
    pub markdown: bool,
}

#[derive(Debug)]
pub struct KeysSummary {
    pub entries: Vec<(String, TranslationEntry)>,
    pub load_warning: Option<String>,
}

#[derive(Debug)]
pub struct EditSummary {
    pub key: String,
    pub translation_file: String,
    /// The applied change, or the reason the edit was rejected.
    pub outcome: Result<EditOutcome, String>,
}

#[derive(Debug)]
pub struct UsagesSummary {
    pub key: String,
    pub workspace: PathBuf,
    pub usages: Vec<FileUsage>,
    pub files_checked: usize,
}

#[derive(Debug)]
pub struct WatchSummary {
    pub reload_count: usize,
}

#[derive(Debug)]
pub struct InitSummary {
    /// Set when the config file could not be created.
    pub error: Option<String>,
}

/// Result of running transl8 commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    pub exit_on_errors: bool,
}
