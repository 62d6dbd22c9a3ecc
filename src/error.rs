//! Error types for text-search
//!
//! Searching and suggesting never fail; only loading a text from disk does.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for text-search operations
#[derive(Error, Debug)]
pub enum Error {
    /// The text file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for text-search operations
pub type Result<T> = std::result::Result<T, Error>;
