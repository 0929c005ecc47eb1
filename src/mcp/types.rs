use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::TranslationEntry;

// ============================================================
// Tool Parameters
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetConfigParams {
    /// Absolute path of the workspace folder
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListKeysParams {
    /// Absolute path of the workspace folder
    pub project_root_path: String,
    /// Only list keys starting with this prefix
    #[serde(default)]
    pub prefix: Option<String>,
    /// Maximum number of items to return (default 100, max 500)
    #[serde(default)]
    pub limit: Option<u32>,
    /// Number of items to skip
    #[serde(default)]
    pub offset: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct LookupKeyParams {
    /// Absolute path of the workspace folder
    pub project_root_path: String,
    /// Dot-separated translation key, e.g. "nav.home"
    pub key: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ScanMissingParams {
    /// Absolute path of the workspace folder
    pub project_root_path: String,
    /// Maximum number of items to return (default 50, max 100)
    #[serde(default)]
    pub limit: Option<u32>,
    /// Number of items to skip
    #[serde(default)]
    pub offset: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct EditTranslationParams {
    /// Absolute path of the workspace folder
    pub project_root_path: String,
    /// Dot-separated translation key, e.g. "nav.home"
    pub key: String,
    /// Translated text
    pub value: String,
    /// Note for translators; empty or omitted means none
    #[serde(default)]
    pub context: Option<String>,
}

// ============================================================
// Config Types (get_config)
// ============================================================

/// Configuration DTO for MCP
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file
    pub from_file: bool,
    pub config: ConfigValues,
    /// Absolute paths the config resolves to, when it is usable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved: Option<ResolvedScope>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub translation_file_path: Option<String>,
    pub source_code_path: Option<String>,
    pub function_names: Vec<String>,
}

impl From<crate::config::Config> for ConfigValues {
    fn from(c: crate::config::Config) -> Self {
        Self {
            translation_file_path: c.translation_file_path,
            source_code_path: c.source_code_path,
            function_names: c.function_names,
        }
    }
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedScope {
    pub translation_file: String,
    pub source_dir: Option<String>,
    pub function_names: Vec<String>,
}

// ============================================================
// Key Types (list_keys, lookup_key)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KeyItem {
    pub key: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl KeyItem {
    pub fn new(key: &str, entry: &TranslationEntry) -> Self {
        Self {
            key: key.to_string(),
            value: entry.value.clone(),
            context: entry.context.clone(),
        }
    }
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KeyListResult {
    pub translation_file: String,
    pub total_count: usize,
    pub items: Vec<KeyItem>,
    pub pagination: Pagination,
    /// Why the translation file could not be loaded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LookupResult {
    pub key: String,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

// ============================================================
// Scan Types (scan_missing)
// ============================================================

/// A key used in code but missing from the translation file
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MissingItem {
    pub key: String,
    pub file_path: String,
    /// 1-based
    pub line: usize,
    /// 1-based
    pub col: usize,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MissingScanResult {
    pub total_count: usize,
    pub total_file_count: usize,
    pub files_checked: usize,
    pub items: Vec<MissingItem>,
    pub pagination: Pagination,
}

// ============================================================
// Edit Types (edit_translation)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EditResult {
    pub success: bool,
    pub key: String,
    /// "added", "updated" or "unchanged" (only on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    pub file_path: String,
    /// Error message (only on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// ============================================================
// Shared
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}

impl Pagination {
    /// Slice `items` and describe the page.
    pub fn page<T>(items: Vec<T>, offset: usize, limit: usize) -> (Vec<T>, Self) {
        let total = items.len();
        let page: Vec<T> = items.into_iter().skip(offset).take(limit).collect();
        let has_more = offset + page.len() < total;
        (
            page,
            Self {
                offset,
                limit,
                has_more,
            },
        )
    }
}
