//! Error types for the dashboard's side effects.
//!
//! Selecting and rendering sections cannot fail. Only copying templates to
//! the clipboard and writing them to disk touch the outside world.

use std::path::PathBuf;

/// Errors raised by copy and export actions.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("clipboard unavailable: {0}")]
    Clipboard(String),
}

pub type Result<T> = std::result::Result<T, Error>;
