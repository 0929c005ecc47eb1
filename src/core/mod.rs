//! Core translation engine.
//!
//! - `entry`: translation entries and the ordered flat index
//! - `key_path`: dot-notation keys over the nested document
//! - `flatten`: nested document to flat index
//! - `store`: cached loading and editing of translation files
//! - `scanner`: key usages in source text
//! - `scope`: which configuration applies to a source file

pub mod entry;
pub mod flatten;
pub mod key_path;
pub mod scanner;
pub mod scope;
pub mod store;

pub use entry::{FlatIndex, TranslationEntry};
pub use flatten::flatten;
pub use scanner::{LineIndex, TriggerPattern, UsageOccurrence, build_trigger_pattern};
pub use scope::{ScopeConfig, ScopeResolver};
pub use store::{EditOutcome, FileSystem, LoadOutcome, OsFileSystem, TranslationStore};
