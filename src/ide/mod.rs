//! IDE features — High-level APIs for LSP handlers.
//!
//! This module provides the interface between the parameter catalog and
//! the editor integration. Each function corresponds to an editor
//! request.
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: Take a document snapshot in, return data out
//! 2. **No LSP types**: Uses our own types, converted at the LSP boundary
//! 3. **Stateless requests**: Nothing mutates between calls except the
//!    catalog load guard and the completion cache
//!
//! ## Usage
//!
//! The recommended way to use this module is through `AnalysisHost`:
//!
//! ```ignore
//! use prodimo::catalog::CatalogSource;
//! use prodimo::ide::AnalysisHost;
//!
//! let host = AnalysisHost::new(CatalogSource::Path("paramlist.json".into()));
//! let analysis = host.analysis()?;
//! let symbols = analysis.document_symbols(kind, &text, &cancel);
//! ```

mod analysis;
mod completion;
mod hover;
mod outline;

pub use analysis::{Analysis, AnalysisHost};
pub use completion::{
    CompletionItem, CompletionRequest, TriggerKind, TriggerSituation, completions,
    resolve_situation,
};
pub use hover::{HoverResult, WIKI_BASE_URL, hover};
pub use outline::{Symbol, SymbolKind, document_symbols, log_outline, param_outline};
