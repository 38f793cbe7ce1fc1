//! ClausIE Extractor - Backend implementations for the ClausIE binding
//!
//! Provides the `TripleExtractor` trait, the subprocess backend that
//! drives the ClausIE jar, and the bootstrap that fetches the jar when
//! it is missing. Additional transports (e.g. a long-lived service)
//! would be further implementations of the same trait.

use std::path::Path;

use clausie_core::{BackendConfig, ClausieError, Corpus, Result};

pub mod fetch;
pub mod subprocess;

pub use subprocess::SubprocessBackend;

/// Trait for ClausIE backends
pub trait TripleExtractor: Send + Sync + std::fmt::Debug {
    /// Extract triples from a batch of sentences.
    ///
    /// `ids`, when given, must pair positionally with `sentences` and
    /// switches the tool into identifier mode. `report_confidence`
    /// requests a per-triple confidence score.
    fn extract_triples(
        &self,
        sentences: &[String],
        ids: Option<&[String]>,
        report_confidence: bool,
    ) -> Result<Corpus>;

    /// Path of the jar this backend invokes
    fn jar_path(&self) -> &Path;

    /// Backend name
    fn name(&self) -> &str;
}

/// Build a configured backend by name.
///
/// Only `"subprocess"` is recognized; the configuration step (jar path
/// resolution and, with `auto_fetch`, the download) runs here, so the
/// returned extractor is always usable.
pub fn get_instance(backend: &str, config: BackendConfig) -> Result<Box<dyn TripleExtractor>> {
    match backend {
        "subprocess" => Ok(Box::new(SubprocessBackend::new(config)?)),
        other => Err(ClausieError::UnknownBackend(other.to_string())),
    }
}

// ============================================================================
// Tests
// ============================================================================
