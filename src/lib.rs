//! Transl8 - translation key lookup and sync for JavaScript projects
//!
//! Transl8 keeps a nested JSON translation file and the `t('some.key')` calls
//! in source code in sync. It resolves keys to their translations, reports
//! keys with no translation, and writes new or edited translations back to
//! the file.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Key paths, flattening, the cached translation store, scanning and scope resolution
//! - `engine`: Per-request entry points for hosts
//! - `error`: Typed engine errors
//! - `features`: Diagnostics, hover, completion, quick fixes and source tree scans
//! - `logging`: Logger setup
//! - `mcp`: Model Context Protocol server implementation
//! - `watch`: Translation file watching

pub mod cli;
pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod features;
pub mod logging;
pub mod mcp;
pub mod watch;
