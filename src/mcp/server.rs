use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Serialize;

use crate::{
    config::{Config, load_config},
    core::{ScopeConfig, ScopeResolver, TranslationStore},
    engine::Engine,
    error::Transl8Error,
};

use super::types::{
    ConfigDto, ConfigValues, EditResult, EditTranslationParams, GetConfigParams, KeyItem,
    KeyListResult, ListKeysParams, LookupKeyParams, LookupResult, MissingItem, MissingScanResult,
    Pagination, ResolvedScope, ScanMissingParams,
};

/// MCP server over one shared translation store.
///
/// Each call names its workspace folder; parsed translation files stay
/// cached across calls.
#[derive(Clone)]
pub struct Transl8McpServer {
    tool_router: ToolRouter<Self>,
    store: Arc<TranslationStore>,
    /// Folder announced to clients as the default `project_root_path`.
    workspace: Option<PathBuf>,
}

impl Default for Transl8McpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl Transl8McpServer {
    pub fn new() -> Self {
        Self::with_store(Arc::new(TranslationStore::new()))
    }

    pub fn with_store(store: Arc<TranslationStore>) -> Self {
        Self {
            tool_router: Self::tool_router(),
            store,
            workspace: None,
        }
    }

    pub fn with_workspace(mut self, workspace: PathBuf) -> Self {
        self.workspace = Some(workspace);
        self
    }

    fn engine(&self, root: &Path) -> Engine {
        Engine::new(ScopeResolver::new([root]), self.store.clone())
    }

    /// Get the current transl8 configuration
    #[tool(
        description = "Get the transl8 configuration of a workspace folder and the paths it resolves to."
    )]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let root = PathBuf::from(&params.0.project_root_path);

        let loaded = load_config(&root)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {:#}", e), None))?;
        let from_file = loaded.is_some();
        let config = loaded.unwrap_or_default();

        let resolved = ScopeConfig::from_config(&root, &config).map(|scope| ResolvedScope {
            translation_file: scope.translation_file.display().to_string(),
            source_dir: scope.source_dir.map(|dir| dir.display().to_string()),
            function_names: scope.function_names,
        });

        json_result(&ConfigDto {
            from_file,
            config: ConfigValues::from(config),
            resolved,
        })
    }

    /// List translation keys in file order
    #[tool(
        description = "List translation keys with their values and contexts, in file order. Optionally filter by key prefix. Returns paginated list."
    )]
    pub async fn list_keys(
        &self,
        params: Parameters<ListKeysParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let root = PathBuf::from(&params.project_root_path);
        let limit = params.limit.map(|v| v as usize).unwrap_or(100).min(500);
        let offset = params.offset.map(|v| v as usize).unwrap_or(0);

        let scoped = self.engine(&root).index(&root).map_err(engine_error)?;

        let all_items: Vec<KeyItem> = scoped
            .index
            .iter()
            .filter(|(key, _)| params.prefix.as_deref().is_none_or(|p| key.starts_with(p)))
            .map(|(key, entry)| KeyItem::new(key, entry))
            .collect();
        let total_count = all_items.len();
        let (items, pagination) = Pagination::page(all_items, offset, limit);

        json_result(&KeyListResult {
            translation_file: scoped.scope.translation_file.display().to_string(),
            total_count,
            items,
            pagination,
            warning: scoped.diagnostic.map(|e| e.to_string()),
        })
    }

    /// Look up one key
    #[tool(description = "Look up the translation value and context of one key.")]
    pub async fn lookup_key(
        &self,
        params: Parameters<LookupKeyParams>,
    ) -> Result<CallToolResult, McpError> {
        let root = PathBuf::from(&params.0.project_root_path);
        let key = params.0.key;

        let scoped = self.engine(&root).index(&root).map_err(engine_error)?;
        let entry = scoped.index.get(&key);

        json_result(&LookupResult {
            found: entry.is_some(),
            value: entry.map(|e| e.value.clone()),
            context: entry.and_then(|e| e.context.clone()),
            key,
        })
    }

    /// Scan for keys missing from the translation file
    #[tool(
        description = "Scan source files for translation keys that have no translation. Returns paginated list."
    )]
    pub async fn scan_missing(
        &self,
        params: Parameters<ScanMissingParams>,
    ) -> Result<CallToolResult, McpError> {
        let root = PathBuf::from(&params.0.project_root_path);
        let limit = params.0.limit.map(|v| v as usize).unwrap_or(50).min(100);
        let offset = params.0.offset.map(|v| v as usize).unwrap_or(0);

        let (_, scan) = self
            .engine(&root)
            .scan_missing(&root, None)
            .map_err(engine_error)?;

        let mut files: HashSet<&Path> = HashSet::new();
        let all_items: Vec<MissingItem> = scan
            .items
            .iter()
            .map(|item| {
                files.insert(item.path.as_path());
                MissingItem {
                    key: item.diagnostic.key().to_string(),
                    file_path: item
                        .path
                        .strip_prefix(&root)
                        .unwrap_or(&item.path)
                        .display()
                        .to_string(),
                    line: item.diagnostic.line + 1,
                    col: item.diagnostic.start_column + 1,
                }
            })
            .collect();

        let total_count = all_items.len();
        let (items, pagination) = Pagination::page(all_items, offset, limit);

        json_result(&MissingScanResult {
            total_count,
            total_file_count: files.len(),
            files_checked: scan.files_checked,
            items,
            pagination,
        })
    }

    /// Add or update one translation
    #[tool(
        description = "Add or update the translation of one key. Nested objects are created as needed. A key that is a prefix of existing keys, or has an existing key as prefix, is rejected."
    )]
    pub async fn edit_translation(
        &self,
        params: Parameters<EditTranslationParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let root = PathBuf::from(&params.project_root_path);
        let engine = self.engine(&root);

        let scope = engine.scope(&root).map_err(engine_error)?;
        let file_path = scope.translation_file.display().to_string();

        let result = match engine.edit(&root, &params.key, params.value, params.context) {
            Ok(outcome) => EditResult {
                success: true,
                key: params.key,
                action: Some(outcome.as_str().to_string()),
                file_path,
                error: None,
            },
            Err(e @ Transl8Error::KeyCollision { .. }) => EditResult {
                success: false,
                key: params.key,
                action: None,
                file_path,
                error: Some(e.to_string()),
            },
            Err(e) => return Err(engine_error(e)),
        };

        json_result(&result)
    }
}

fn engine_error(e: Transl8Error) -> McpError {
    McpError::internal_error(format!("{} ({})", e, e.code()), None)
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;

    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

#[tool_handler]
impl ServerHandler for Transl8McpServer {
    fn get_info(&self) -> ServerInfo {
        let mut instructions = String::from(
            "Transl8 MCP helps AI agents keep a nested JSON translation file in sync with the \
                 t('some.key') calls in a JavaScript/TypeScript project.\n\n\
                 Available tools:\n\
                 1. get_config - Get workspace configuration\n\
                 2. list_keys - List translation keys (paginated)\n\
                 3. lookup_key - Get the value and context of one key\n\
                 4. scan_missing - Get keys used in code but missing from the translation file (paginated)\n\
                 5. edit_translation - Add or update one translation\n\n\
                 Recommended Workflow:\n\
                 1. Use scan_missing to find untranslated keys\n\
                 2. Use list_keys to match the naming of existing keys\n\
                 3. Add each missing key with edit_translation",
        );
        if let Some(workspace) = &self.workspace {
            instructions.push_str(&format!(
                "\n\nWorkspace folder (use as project_root_path): {}",
                workspace.display()
            ));
        }

        ServerInfo {
            instructions: Some(instructions),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server(workspace: PathBuf) -> Result<()> {
    log::info!("Starting MCP server for {}", workspace.display());
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = Transl8McpServer::new().with_workspace(workspace);
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
