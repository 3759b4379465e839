//! Load-once guard around the parameter catalog.
//!
//! The catalog is read at most once per host lifetime. Concurrent first
//! use is idempotent (one thread loads, the rest observe the same
//! result), and a failed load is sticky: every later `ensure_loaded`
//! returns the same error. `reload` is the only way to re-read the
//! source; it bumps the generation counter that keys the completion
//! cache.

use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::RwLock;

use super::{CatalogError, ParameterCatalog};

/// Where the catalog is read from.
#[derive(Clone, Debug)]
pub enum CatalogSource {
    /// A JSON file on disk (the shipped `paramlist.json`).
    Path(PathBuf),
    /// JSON text held in memory.
    Inline(String),
}

impl CatalogSource {
    fn load(&self) -> Result<ParameterCatalog, CatalogError> {
        match self {
            CatalogSource::Path(path) => ParameterCatalog::load(path),
            CatalogSource::Inline(source) => ParameterCatalog::from_json(source),
        }
    }
}

struct HandleState {
    loaded: Option<Result<Arc<ParameterCatalog>, CatalogError>>,
    generation: u64,
}

/// Shared, lazily loaded catalog with a generation counter.
pub struct CatalogHandle {
    source: CatalogSource,
    state: RwLock<HandleState>,
}

impl CatalogHandle {
    /// Create a handle; nothing is read until first use.
    pub fn new(source: CatalogSource) -> Self {
        Self {
            source,
            state: RwLock::new(HandleState {
                loaded: None,
                generation: 0,
            }),
        }
    }

    /// Get the catalog, loading it on first use.
    ///
    /// Never re-reads the source once a result (success or failure) is
    /// recorded.
    pub fn ensure_loaded(&self) -> Result<Arc<ParameterCatalog>, CatalogError> {
        if let Some(result) = self.state.read().loaded.as_ref() {
            return result.clone();
        }

        let mut state = self.state.write();
        // Another thread may have loaded while we waited for the lock.
        if let Some(result) = state.loaded.as_ref() {
            return result.clone();
        }

        tracing::debug!("loading parameter catalog");
        let result = self.source.load().map(Arc::new);
        if let Err(ref err) = result {
            tracing::debug!(%err, "catalog load failed");
        }
        state.loaded = Some(result.clone());
        result
    }

    /// Generation counter for cache keying; bumped on every `reload`.
    pub fn generation(&self) -> u64 {
        self.state.read().generation
    }

    /// Discard the loaded catalog and read the source again.
    pub fn reload(&self) -> Result<Arc<ParameterCatalog>, CatalogError> {
        let mut state = self.state.write();
        let result = self.source.load().map(Arc::new);
        state.loaded = Some(result.clone());
        state.generation += 1;
        tracing::debug!(generation = state.generation, "parameter catalog reloaded");
        result
    }
}
