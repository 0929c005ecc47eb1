//! Editor-facing features built on the core engine.
//!
//! Each feature turns scanner output and a flat index into plain data; how
//! it is displayed is up to the host.

pub mod completion;
pub mod diagnostics;
pub mod hover;
pub mod quick_fix;
pub mod source_scan;

pub use completion::{CompletionItem, completions};
pub use diagnostics::{MissingKeyDiagnostic, Severity, is_supported_source, missing_keys};
pub use hover::{Hover, hover_at};
pub use quick_fix::{QuickFix, quick_fixes_at};
pub use source_scan::{
    FileDiagnostic, FileUsage, SourceScan, scan_missing, scan_usages, source_files,
};
