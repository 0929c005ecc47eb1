//! The translation store: loads translation files, caches their flat index
//! by modification time, and writes edits back.
//!
//! The cache is the only shared mutable state of the engine. Readers get an
//! `Arc<FlatIndex>` that stays valid while a reload builds its replacement,
//! and the replacement is swapped in as one unit under the write lock.

use std::{
    collections::HashMap,
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
    sync::{Arc, PoisonError, RwLock},
    time::SystemTime,
};

use serde_json::{Map, Value};

use crate::core::{FlatIndex, TranslationEntry, flatten, key_path};
use crate::error::Transl8Error;

// ============================================================
// File System Seam
// ============================================================

/// File operations used by the store.
///
/// Implemented by [`OsFileSystem`] for real use; tests wrap it to count reads
/// and writes.
pub trait FileSystem: Send + Sync {
    fn exists(&self, path: &Path) -> bool;
    fn modified(&self, path: &Path) -> io::Result<SystemTime>;
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
    /// Replace the whole file, never leaving a partially written target.
    fn write_atomic(&self, path: &Path, contents: &str) -> io::Result<()>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn modified(&self, path: &Path) -> io::Result<SystemTime> {
        fs::metadata(path)?.modified()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn write_atomic(&self, path: &Path, contents: &str) -> io::Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();
        let temp_path = path.with_file_name(format!(".{}.transl8.tmp", file_name));

        match write_temp(&temp_path, contents).and_then(|_| fs::rename(&temp_path, path)) {
            Ok(()) => Ok(()),
            Err(err) => {
                let _ = fs::remove_file(&temp_path);
                Err(err)
            }
        }
    }
}

/// Write and sync the temp file. The handle is closed when this returns.
fn write_temp(temp_path: &Path, contents: &str) -> io::Result<()> {
    let mut file = File::create(temp_path)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()
}

// ============================================================
// Store Types
// ============================================================

/// A cached index together with the modification time it was read at.
#[derive(Debug)]
struct CacheEntry {
    modified: SystemTime,
    index: Arc<FlatIndex>,
}

/// Result of loading a translation file.
///
/// Loading never fails outright: on error the index is empty and
/// `diagnostic` explains why.
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub index: Arc<FlatIndex>,
    pub diagnostic: Option<Transl8Error>,
}

impl LoadOutcome {
    fn empty() -> Self {
        Self {
            index: Arc::new(FlatIndex::new()),
            diagnostic: None,
        }
    }

    fn failed(err: Transl8Error) -> Self {
        log::warn!("{}", err);
        Self {
            index: Arc::new(FlatIndex::new()),
            diagnostic: Some(err),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Added,
    Updated,
    /// The new entry equals the stored one; nothing was written.
    Unchanged,
}

impl EditOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            EditOutcome::Added => "added",
            EditOutcome::Updated => "updated",
            EditOutcome::Unchanged => "unchanged",
        }
    }
}

// ============================================================
// Translation Store
// ============================================================

pub struct TranslationStore {
    fs: Arc<dyn FileSystem>,
    cache: RwLock<HashMap<PathBuf, Arc<CacheEntry>>>,
}

impl Default for TranslationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TranslationStore {
    pub fn new() -> Self {
        Self::with_file_system(Arc::new(OsFileSystem))
    }

    pub fn with_file_system(fs: Arc<dyn FileSystem>) -> Self {
        Self {
            fs,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Load the flat index for `path`, reusing the cache when the file's
    /// modification time is unchanged.
    ///
    /// A missing path or file yields an empty index without a diagnostic.
    pub fn load(&self, path: Option<&Path>) -> LoadOutcome {
        match path {
            Some(path) => self.load_path(path, false),
            None => LoadOutcome::empty(),
        }
    }

    /// Re-read `path` regardless of its modification time.
    ///
    /// Call this on change, create and delete notifications for the file.
    /// A deleted file drops its cache entry and yields an empty index; a
    /// failed read keeps the previous cache entry.
    pub fn invalidate_and_reload(&self, path: &Path) -> LoadOutcome {
        self.load_path(path, true)
    }

    /// Set `key` to `entry` in the translation file at `path`.
    ///
    /// Rejects keys that would be both a leaf and an ancestor of another leaf.
    /// Skips the write when the stored entry is already identical.
    pub fn apply_edit(
        &self,
        path: &Path,
        key: &str,
        entry: TranslationEntry,
    ) -> Result<EditOutcome, Transl8Error> {
        let current = self.load_path(path, false);

        if let Some(conflicting) = key_path::find_collision(key, current.index.keys()) {
            return Err(Transl8Error::KeyCollision {
                key: key.to_string(),
                conflicting: conflicting.to_string(),
            });
        }

        let outcome = match current.index.get(key) {
            Some(existing) if *existing == entry => {
                log::debug!("Translation {} unchanged, skipping write", key);
                return Ok(EditOutcome::Unchanged);
            }
            Some(_) => EditOutcome::Updated,
            None => EditOutcome::Added,
        };

        let mut document = self.read_document(path)?;
        key_path::write(&mut document, key, &entry);

        let mut content =
            serde_json::to_string_pretty(&document).map_err(|e| Transl8Error::FileWrite {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        if !content.ends_with('\n') {
            content.push('\n');
        }

        self.fs
            .write_atomic(path, &content)
            .map_err(|e| Transl8Error::FileWrite {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        log::info!("Translation {} {} in {}", key, outcome.as_str(), path.display());
        self.invalidate_and_reload(path);
        Ok(outcome)
    }

    /// The cached index for `path` without touching the file system.
    pub fn cached(&self, path: &Path) -> Option<Arc<FlatIndex>> {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(path)
            .map(|entry| Arc::clone(&entry.index))
    }

    fn load_path(&self, path: &Path, force: bool) -> LoadOutcome {
        if !self.fs.exists(path) {
            self.evict(path);
            return LoadOutcome::empty();
        }

        let modified = match self.fs.modified(path) {
            Ok(modified) => modified,
            Err(e) => {
                return LoadOutcome::failed(Transl8Error::FileRead {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                });
            }
        };

        if !force
            && let Some(entry) = self.cache_entry(path)
            && entry.modified == modified
        {
            log::debug!("Translation cache hit for {}", path.display());
            return LoadOutcome {
                index: Arc::clone(&entry.index),
                diagnostic: None,
            };
        }

        log::debug!("Reading translations from {}", path.display());
        let index = match self.read_index(path) {
            Ok(index) => Arc::new(index),
            Err(err) => return LoadOutcome::failed(err),
        };
        log::info!(
            "Loaded {} translations from {}",
            index.len(),
            path.display()
        );

        let entry = Arc::new(CacheEntry {
            modified,
            index: Arc::clone(&index),
        });
        self.cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path.to_path_buf(), entry);

        LoadOutcome {
            index,
            diagnostic: None,
        }
    }

    fn read_index(&self, path: &Path) -> Result<FlatIndex, Transl8Error> {
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|e| Transl8Error::FileRead {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        let document: Value = serde_json::from_str(&content).map_err(|e| Transl8Error::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(flatten(&document))
    }

    /// Read the nested document for editing. A missing or blank file is an
    /// empty document.
    fn read_document(&self, path: &Path) -> Result<Value, Transl8Error> {
        if !self.fs.exists(path) {
            return Ok(Value::Object(Map::new()));
        }

        let content = self
            .fs
            .read_to_string(path)
            .map_err(|e| Transl8Error::FileRead {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        if content.trim().is_empty() {
            return Ok(Value::Object(Map::new()));
        }

        serde_json::from_str(&content).map_err(|e| Transl8Error::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    fn cache_entry(&self, path: &Path) -> Option<Arc<CacheEntry>> {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(path)
            .cloned()
    }

    fn evict(&self, path: &Path) {
        let removed = self
            .cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(path);
        if removed.is_some() {
            log::info!("Translation file {} is gone, cache cleared", path.display());
        }
    }
}
