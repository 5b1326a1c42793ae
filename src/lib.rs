//! # Snippets - named text snippets in a SQLite table
//!
//! Snippets provides:
//! - A `SnippetStore` with upsert, lookup, reverse lookup, search and catalog
//! - Scoped transactions around every read and write
//! - A small CLI surface (`put`, `get`, `get_name`, `search`, `catalog`)
//! - Human or JSON output, TOML config and file-backed tracing logs

pub mod snippet;
pub mod storage;
pub mod commands;
pub mod config;
pub mod logging;
pub mod output;
pub mod ui;

// Re-exports for convenient access
pub use snippet::Snippet;
pub use storage::SnippetStore;
pub use output::OutputMode;

use std::path::PathBuf;

/// Result type alias for snippet operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for snippet operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Cannot open database {}: {source}", .path.display())]
    Connection {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Config error: {0}")]
    Config(String),
}
