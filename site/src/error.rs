//! Errors from loading page content and writing the rendered site.
//!
//! Rendering itself cannot fail. Only the file system and TOML parsing can.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Content loading and export errors
#[derive(Debug, Error)]
pub enum SiteError {
    /// Content override file could not be read
    #[error("failed to read content file {}: {source}", path.display())]
    ReadContent {
        /// File that was requested
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Content override file is not valid TOML for [`crate::SiteContent`]
    #[error("failed to parse content file {}: {source}", path.display())]
    ParseContent {
        /// File that was parsed
        path: PathBuf,
        /// Parser diagnostics
        #[source]
        source: toml::de::Error,
    },

    /// Output directory or file could not be written
    #[error("failed to write {}: {source}", path.display())]
    WriteOutput {
        /// Path being created or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}
