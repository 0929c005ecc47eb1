//! Resolution of the configuration that applies to a source file.
//!
//! Each workspace folder carries its own `.transl8rc.json`. The resolver is
//! stateless apart from the folder list: configuration is re-read on every
//! call so edits to it apply on the next request.

use std::path::{Component, Path, PathBuf};

use crate::config::{CONFIG_FILE_NAME, Config, load_config};
use crate::core::{TriggerPattern, build_trigger_pattern};
use crate::error::Transl8Error;

/// The configuration applicable to one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeConfig {
    /// Workspace folder owning the source file.
    pub folder: PathBuf,
    pub translation_file: PathBuf,
    pub source_dir: Option<PathBuf>,
    /// Trigger names, deduplicated in configured order. Empty disables scanning.
    pub function_names: Vec<String>,
}

impl ScopeConfig {
    /// Build a scope from a folder's config, resolving relative paths against
    /// the folder. Returns `None` when no translation file is configured.
    pub fn from_config(folder: &Path, config: &Config) -> Option<Self> {
        let translation_file = config
            .translation_file_path
            .as_deref()
            .filter(|path| !path.trim().is_empty())?;

        let mut function_names: Vec<String> = Vec::new();
        for name in &config.function_names {
            if !function_names.contains(name) {
                function_names.push(name.clone());
            }
        }

        Some(Self {
            folder: folder.to_path_buf(),
            translation_file: resolve_path(folder, translation_file),
            source_dir: config
                .source_code_path
                .as_deref()
                .filter(|path| !path.trim().is_empty())
                .map(|path| resolve_path(folder, path)),
            function_names,
        })
    }

    pub fn trigger_pattern(&self) -> Option<TriggerPattern> {
        build_trigger_pattern(&self.function_names)
    }

    /// True if `source` lies inside the configured source directory.
    pub fn contains_source(&self, source: &Path) -> bool {
        match &self.source_dir {
            Some(dir) => normalize_path(source).starts_with(dir),
            None => false,
        }
    }
}

/// Maps source files to the [`ScopeConfig`] of their workspace folder.
#[derive(Debug, Clone, Default)]
pub struct ScopeResolver {
    folders: Vec<PathBuf>,
}

impl ScopeResolver {
    pub fn new<I, P>(folders: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        Self {
            folders: folders
                .into_iter()
                .map(|folder| normalize_path(folder.as_ref()))
                .collect(),
        }
    }

    pub fn folders(&self) -> &[PathBuf] {
        &self.folders
    }

    /// The innermost workspace folder containing `source`.
    pub fn folder_for(&self, source: &Path) -> Option<&Path> {
        let source = normalize_path(source);
        self.folders
            .iter()
            .filter(|folder| source.starts_with(folder))
            .max_by_key(|folder| folder.components().count())
            .map(PathBuf::as_path)
    }

    /// Resolve the scope of `source`, or `None` if the engine should stay
    /// inert for it.
    pub fn resolve(&self, source: &Path) -> Option<ScopeConfig> {
        match self.try_resolve(source) {
            Ok(scope) => Some(scope),
            Err(err) => {
                log::warn!("{}", err);
                None
            }
        }
    }

    /// Like [`ScopeResolver::resolve`], but says why no scope applies.
    pub fn try_resolve(&self, source: &Path) -> Result<ScopeConfig, Transl8Error> {
        let Some(folder) = self.folder_for(source) else {
            return Err(Transl8Error::ConfigurationMissing {
                scope: source.to_path_buf(),
            });
        };

        let config = load_config(folder)
            .map_err(|e| Transl8Error::InvalidConfiguration {
                path: folder.join(CONFIG_FILE_NAME),
                message: format!("{:#}", e),
            })?
            .unwrap_or_default();

        let scope = ScopeConfig::from_config(folder, &config).ok_or_else(|| {
            Transl8Error::ConfigurationMissing {
                scope: folder.to_path_buf(),
            }
        })?;

        if scope.function_names.is_empty() {
            log::warn!(
                "No function names configured for {}, key scanning is disabled",
                folder.display()
            );
        }
        Ok(scope)
    }
}

/// Resolve `path` against `base` unless it is already absolute.
pub fn resolve_path(base: &Path, path: &str) -> PathBuf {
    let path = Path::new(path);
    if path.is_absolute() {
        normalize_path(path)
    } else {
        normalize_path(&base.join(path))
    }
}

/// Lexically remove `.` and `..` components without touching the file system.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    normalized.push(component);
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}
