//! Watching translation files and feeding changes to the engine.
//!
//! The parent directory of each translation file is watched rather than the
//! file itself, so that a file deleted and re-created by an editor keeps
//! being tracked. When that directory does not exist yet, its nearest
//! existing ancestor is watched recursively until the file shows up.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::mpsc::{RecvTimeoutError, channel},
    time::{Duration, Instant},
};

use anyhow::{Context, Result};
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::core::LoadOutcome;
use crate::engine::{Engine, FileEventKind};

/// Configuration for file watching
#[derive(Debug, Clone)]
pub struct WatchConfig {
    /// Quiet period after the last event before reloading.
    pub debounce_ms: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self { debounce_ms: 200 }
    }
}

/// Map a file system event to a change of one of `targets`.
pub fn classify_event(event: &Event, targets: &[PathBuf]) -> Option<(PathBuf, FileEventKind)> {
    let kind = match event.kind {
        EventKind::Create(_) => FileEventKind::Created,
        EventKind::Modify(_) => FileEventKind::Changed,
        EventKind::Remove(_) => FileEventKind::Deleted,
        _ => return None,
    };

    event
        .paths
        .iter()
        .find(|path| targets.iter().any(|target| target == *path))
        .map(|path| (path.clone(), kind))
}

/// Watch `targets` and reload them through `engine` until the channel
/// closes. `on_reload` is called after every reload.
///
/// Bursts of events for the same file within the debounce period collapse
/// into one reload carrying the latest event kind.
pub fn watch<F>(
    engine: &Engine,
    targets: &[PathBuf],
    config: WatchConfig,
    mut on_reload: F,
) -> Result<()>
where
    F: FnMut(&Path, FileEventKind, &LoadOutcome),
{
    log::info!(
        "Watching {} translation file(s) with {}ms debounce",
        targets.len(),
        config.debounce_ms
    );

    let (tx, rx) = channel();
    let mut watcher =
        RecommendedWatcher::new(tx, Config::default()).context("Failed to create file watcher")?;

    for (dir, mode) in watched_dirs(targets) {
        watcher
            .watch(&dir, mode)
            .with_context(|| format!("Failed to watch directory: {}", dir.display()))?;
    }

    let debounce = Duration::from_millis(config.debounce_ms);
    let mut pending: HashMap<PathBuf, FileEventKind> = HashMap::new();
    let mut last_event: Option<Instant> = None;

    loop {
        match rx.recv_timeout(Duration::from_millis(50)) {
            Ok(Ok(event)) => {
                if let Some((path, kind)) = classify_event(&event, targets) {
                    log::debug!("Detected {} for {}", kind, path.display());
                    pending.insert(path, kind);
                    last_event = Some(Instant::now());
                }
            }
            Ok(Err(e)) => log::warn!("Watch error: {}", e),
            Err(RecvTimeoutError::Timeout) => {
                if last_event.is_some_and(|t| t.elapsed() >= debounce) {
                    for (path, kind) in pending.drain() {
                        let outcome = engine.on_file_event(&path, kind);
                        on_reload(&path, kind, &outcome);
                    }
                    last_event = None;
                }
            }
            Err(RecvTimeoutError::Disconnected) => return Ok(()),
        }
    }
}

fn watched_dirs(targets: &[PathBuf]) -> Vec<(PathBuf, RecursiveMode)> {
    let mut dirs: Vec<(PathBuf, RecursiveMode)> = Vec::new();
    for target in targets {
        let parent = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let (dir, mode) = if parent.is_dir() {
            (parent, RecursiveMode::NonRecursive)
        } else {
            let Some(ancestor) = parent.ancestors().find(|dir| dir.is_dir()) else {
                log::warn!(
                    "Skipping {}: no existing directory to watch",
                    target.display()
                );
                continue;
            };
            log::warn!(
                "Directory {} does not exist yet, watching {} for {}",
                parent.display(),
                ancestor.display(),
                target.display()
            );
            (ancestor.to_path_buf(), RecursiveMode::Recursive)
        };

        match dirs.iter_mut().find(|(existing, _)| *existing == dir) {
            Some(entry) if mode == RecursiveMode::Recursive => entry.1 = mode,
            Some(_) => {}
            None => dirs.push((dir, mode)),
        }
    }
    dirs
}
