//! AnalysisHost and Analysis — Unified state management for IDE features.
//!
//! The `AnalysisHost` owns the catalog load guard and the completion
//! cache and hands out `Analysis` snapshots for querying. A snapshot
//! pins one loaded catalog, so every query it answers sees consistent
//! reference data.
//!
//! ## Usage
//!
//! ```ignore
//! let host = AnalysisHost::new(CatalogSource::Path("paramlist.json".into()));
//!
//! let analysis = host.analysis()?;
//! let symbols = analysis.document_symbols(DocumentKind::SimulationLog, &text, &cancel);
//! let items = analysis.completions(&request);
//! ```

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::base::DocumentKind;
use crate::catalog::{CatalogError, CatalogHandle, CatalogSource, ParameterCatalog};

use super::completion::{CompletionCache, CompletionItem, CompletionRequest};
use super::{HoverResult, Symbol};

/// Owns the shared state behind all IDE requests: the lazily loaded
/// catalog and the completion base-item cache.
pub struct AnalysisHost {
    catalog: CatalogHandle,
    completion_cache: CompletionCache,
}

impl AnalysisHost {
    /// Create a host; the catalog is not read until the first
    /// `analysis()` call.
    pub fn new(source: CatalogSource) -> Self {
        Self {
            catalog: CatalogHandle::new(source),
            completion_cache: CompletionCache::new(),
        }
    }

    /// Get a snapshot for querying, loading the catalog on first use.
    ///
    /// A catalog load failure is fatal for this host: the same error
    /// comes back on every call, and no request can succeed.
    pub fn analysis(&self) -> Result<Analysis<'_>, CatalogError> {
        let catalog = self.catalog.ensure_loaded()?;
        Ok(Analysis {
            catalog,
            generation: self.catalog.generation(),
            cache: &self.completion_cache,
        })
    }

    /// Re-read the catalog source and drop all cached suggestions.
    ///
    /// Snapshots taken before the reload keep answering from the
    /// catalog they pinned.
    pub fn reload_catalog(&self) -> Result<(), CatalogError> {
        self.completion_cache.invalidate();
        self.catalog.reload().map(drop)
    }
}

/// An immutable snapshot of the analysis state.
///
/// All IDE queries go through this struct to ensure consistent results.
pub struct Analysis<'a> {
    catalog: Arc<ParameterCatalog>,
    generation: u64,
    cache: &'a CompletionCache,
}

impl Analysis<'_> {
    /// Get the outline for a document of the given kind.
    pub fn document_symbols(
        &self,
        kind: DocumentKind,
        text: &str,
        cancel: &CancellationToken,
    ) -> Vec<Symbol> {
        super::document_symbols(kind, text, cancel)
    }

    /// Get completions for a cursor context, served from the cache.
    pub fn completions(&self, request: &CompletionRequest) -> Vec<CompletionItem> {
        self.cache.completions(&self.catalog, self.generation, request)
    }

    /// Get hover documentation for a position on a parameter line.
    pub fn hover(&self, line_text: &str, cursor: usize) -> Option<HoverResult> {
        super::hover(&self.catalog, line_text, cursor)
    }

    /// The catalog this snapshot answers from.
    pub fn catalog(&self) -> &ParameterCatalog {
        &self.catalog
    }
}
