//! ClausIE Core - Shared types for the ClausIE binding
//!
//! This crate defines the types shared by every backend:
//! - The triple record model (`Triple`, `Corpus`) and its TSV decoder
//! - Backend configuration (`BackendConfig`)
//! - Common error types

pub mod config;
pub mod triple;

pub use config::{BackendConfig, DEFAULT_CLAUSIE_VERSION, JAR_BASE_URL};
pub use triple::{Corpus, Triple};

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Errors surfaced by the ClausIE binding
#[derive(Error, Debug)]
pub enum ClausieError {
    /// No usable jar path could be resolved
    #[error("No jar path configured: set a jar path or enable auto-fetch")]
    Configuration,

    /// The remote jar fetch failed; the message names the HTTP status
    /// when the server sent one
    #[error("Downloading {url} failed: {message}")]
    Download { url: String, message: String },

    /// The child process exited non-zero; carries its captured stderr
    #[error("ClausIE exited with {code:?}: {stderr}")]
    ExternalTool { code: Option<i32>, stderr: String },

    /// An output line did not match the expected field count
    #[error("Malformed output line (expected {expected} fields, found {found}): {line}")]
    MalformedRecord {
        line: String,
        expected: usize,
        found: usize,
    },

    /// An unrecognized backend name was requested
    #[error("Unknown backend: {0:?} (known backends: \"subprocess\")")]
    UnknownBackend(String),

    /// A caller-side precondition was violated
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO error while writing the input file or reading the archive
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ClausieError>;
