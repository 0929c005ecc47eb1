//! Typed errors reported by the translation engine.
//!
//! Every failure crossing the engine boundary is one of these values; none
//! of them is fatal to the host. The `Display` text is the human-readable
//! message and [`Transl8Error::code`] is the stable signal.

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Transl8Error {
    /// No translation file is configured for the scope of a resource.
    #[error("Translation file path is not configured for {}", .scope.display())]
    ConfigurationMissing { scope: PathBuf },

    /// The scope configuration file exists but cannot be used.
    #[error("Invalid configuration in {}: {message}", .path.display())]
    InvalidConfiguration { path: PathBuf, message: String },

    #[error("Failed to read translation file {}: {message}", .path.display())]
    FileRead { path: PathBuf, message: String },

    #[error("Failed to write translation file {}: {message}", .path.display())]
    FileWrite { path: PathBuf, message: String },

    #[error("Failed to parse translation file {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    /// The edited key would be both a leaf and an ancestor of another leaf.
    #[error("Cannot edit \"{key}\" because the key \"{conflicting}\" already exists")]
    KeyCollision { key: String, conflicting: String },
}

impl Transl8Error {
    pub fn code(&self) -> &'static str {
        match self {
            Transl8Error::ConfigurationMissing { .. } => "configuration-missing",
            Transl8Error::InvalidConfiguration { .. } => "invalid-configuration",
            Transl8Error::FileRead { .. } => "file-read",
            Transl8Error::FileWrite { .. } => "file-write",
            Transl8Error::Parse { .. } => "parse",
            Transl8Error::KeyCollision { .. } => "key-collision",
        }
    }
}
