//! Entry points for hosts embedding the engine.
//!
//! An [`Engine`] is built once per process and shared by reference. Every
//! request names the resource it is about; the engine has no notion of a
//! "current" file. Scope configuration is resolved per request, while the
//! expensive part, the flat index, is cached by the store.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::core::{
    EditOutcome, FlatIndex, LoadOutcome, ScopeConfig, ScopeResolver, TranslationEntry,
    TranslationStore, UsageOccurrence,
};
use crate::error::Transl8Error;
use crate::features::{
    CompletionItem, FileDiagnostic, FileUsage, Hover, MissingKeyDiagnostic, QuickFix, SourceScan,
    completions, hover_at, is_supported_source, missing_keys, quick_fixes_at, scan_missing,
    scan_usages,
};

/// Kind of an external change to a translation file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileEventKind {
    Changed,
    Created,
    Deleted,
}

impl std::fmt::Display for FileEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileEventKind::Changed => write!(f, "changed"),
            FileEventKind::Created => write!(f, "created"),
            FileEventKind::Deleted => write!(f, "deleted"),
        }
    }
}

/// The flat index of a resource's scope.
#[derive(Debug, Clone)]
pub struct ScopedIndex {
    pub scope: ScopeConfig,
    pub index: Arc<FlatIndex>,
    /// Why the index is empty, if loading failed.
    pub diagnostic: Option<Transl8Error>,
}

pub struct Engine {
    resolver: ScopeResolver,
    store: Arc<TranslationStore>,
}

impl Engine {
    pub fn new(resolver: ScopeResolver, store: Arc<TranslationStore>) -> Self {
        Self { resolver, store }
    }

    /// An engine over the given workspace folders with a fresh store.
    pub fn for_folders<I, P>(folders: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        Self::new(ScopeResolver::new(folders), Arc::new(TranslationStore::new()))
    }

    pub fn store(&self) -> &TranslationStore {
        &self.store
    }

    pub fn resolver(&self) -> &ScopeResolver {
        &self.resolver
    }

    pub fn scope(&self, resource: &Path) -> Result<ScopeConfig, Transl8Error> {
        self.resolver.try_resolve(resource)
    }

    /// Resolve the scope of `resource` and load its translations.
    pub fn index(&self, resource: &Path) -> Result<ScopedIndex, Transl8Error> {
        let scope = self.scope(resource)?;
        let LoadOutcome { index, diagnostic } = self.store.load(Some(&scope.translation_file));
        Ok(ScopedIndex {
            scope,
            index,
            diagnostic,
        })
    }

    /// Hover for the key at a 0-based position in `text`.
    ///
    /// Resources that are not JavaScript, TypeScript or Vue files never get
    /// a hover.
    pub fn hover(
        &self,
        resource: &Path,
        text: &str,
        line: usize,
        column: usize,
    ) -> Result<Option<Hover>, Transl8Error> {
        if !is_supported_source(resource) {
            return Ok(None);
        }
        let scoped = self.index(resource)?;
        let Some(pattern) = scoped.scope.trigger_pattern() else {
            return Ok(None);
        };
        Ok(hover_at(text, line, column, &pattern, &scoped.index))
    }

    /// Missing-key diagnostics for the whole of `text`.
    pub fn diagnostics(
        &self,
        resource: &Path,
        text: &str,
    ) -> Result<Vec<MissingKeyDiagnostic>, Transl8Error> {
        if !is_supported_source(resource) {
            return Ok(Vec::new());
        }
        let scoped = self.index(resource)?;
        let Some(pattern) = scoped.scope.trigger_pattern() else {
            return Ok(Vec::new());
        };
        Ok(missing_keys(text, &pattern, &scoped.index))
    }

    /// Completion items for the text before the cursor on the current line.
    ///
    /// Only files inside the configured source directory get completions.
    pub fn completions(
        &self,
        resource: &Path,
        line_prefix: &str,
    ) -> Result<Vec<CompletionItem>, Transl8Error> {
        if !is_supported_source(resource) {
            return Ok(Vec::new());
        }
        let scoped = self.index(resource)?;
        if !scoped.scope.contains_source(resource) {
            return Ok(Vec::new());
        }
        let Some(pattern) = scoped.scope.trigger_pattern() else {
            return Ok(Vec::new());
        };
        Ok(completions(line_prefix, &pattern, &scoped.index))
    }

    /// Quick fixes for missing keys at a 0-based position.
    pub fn quick_fixes(
        &self,
        resource: &Path,
        text: &str,
        line: usize,
        column: usize,
    ) -> Result<Vec<QuickFix>, Transl8Error> {
        let diagnostics = self.diagnostics(resource, text)?;
        Ok(quick_fixes_at(&diagnostics, resource, line, column))
    }

    /// Every usage of `key` in `text`.
    pub fn usages(
        &self,
        resource: &Path,
        text: &str,
        key: &str,
    ) -> Result<Vec<UsageOccurrence>, Transl8Error> {
        let scope = self.scope(resource)?;
        let Some(pattern) = scope.trigger_pattern() else {
            return Ok(Vec::new());
        };
        Ok(pattern
            .find_occurrences(text)
            .into_iter()
            .filter(|occurrence| occurrence.key == key)
            .collect())
    }

    /// Missing keys in every source file under `root`.
    ///
    /// `root` defaults to the scope's source directory, then to its folder.
    pub fn scan_missing(
        &self,
        resource: &Path,
        root: Option<&Path>,
    ) -> Result<(ScopedIndex, SourceScan<FileDiagnostic>), Transl8Error> {
        let scoped = self.index(resource)?;
        let root = scan_root(&scoped.scope, root);
        let scan = match scoped.scope.trigger_pattern() {
            Some(pattern) => scan_missing(&root, &pattern, &scoped.index),
            None => SourceScan::default(),
        };
        Ok((scoped, scan))
    }

    /// Usages of `key` in every source file under `root`.
    pub fn scan_usages(
        &self,
        resource: &Path,
        key: &str,
        root: Option<&Path>,
    ) -> Result<SourceScan<FileUsage>, Transl8Error> {
        let scope = self.scope(resource)?;
        let root = scan_root(&scope, root);
        Ok(match scope.trigger_pattern() {
            Some(pattern) => scan_usages(&root, &pattern, key),
            None => SourceScan::default(),
        })
    }

    /// Set the translation of `key` in the scope of `resource`.
    ///
    /// An empty context is stored as no context.
    pub fn edit(
        &self,
        resource: &Path,
        key: &str,
        value: impl Into<String>,
        context: Option<String>,
    ) -> Result<EditOutcome, Transl8Error> {
        let scope = self.scope(resource)?;
        let entry = TranslationEntry::from_input(value, context);
        self.store.apply_edit(&scope.translation_file, key, entry)
    }

    /// React to an external change of a translation file.
    pub fn on_file_event(&self, path: &Path, kind: FileEventKind) -> LoadOutcome {
        log::info!("Detected {} in {}, reloading translations", kind, path.display());
        let outcome = self.store.invalidate_and_reload(path);
        if kind == FileEventKind::Deleted {
            log::warn!("Translation file {} was deleted", path.display());
        }
        outcome
    }

    /// Translation files of every scope, for watching.
    pub fn translation_files(&self) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = Vec::new();
        for folder in self.resolver.folders() {
            if let Some(scope) = self.resolver.resolve(folder)
                && !files.contains(&scope.translation_file)
            {
                files.push(scope.translation_file);
            }
        }
        files
    }
}

fn scan_root(scope: &ScopeConfig, root: Option<&Path>) -> PathBuf {
    match root {
        Some(root) => root.to_path_buf(),
        None => scope
            .source_dir
            .clone()
            .unwrap_or_else(|| scope.folder.clone()),
    }
}
