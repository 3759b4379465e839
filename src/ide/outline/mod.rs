//! Document outlines for parameter files and simulation logs.
//!
//! One independent grammar per content type: parameter files get a flat
//! list of dash-fenced block headers, simulation logs get a nested tree
//! of run phases. Both are bounded single-pass scans that cannot fail;
//! a line no rule matches simply contributes no symbol.

mod log;
mod param;

pub use log::log_outline;
pub use param::param_outline;

use tokio_util::sync::CancellationToken;

use crate::base::{DocumentKind, Span};

/// Kind of outline symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SymbolKind {
    /// A dash-fenced parameter block header.
    Block,
    /// A top-level log section (chemistry, continuum RT, SED, ...).
    Section,
    /// An initialization phase inside the log.
    Phase,
    /// A per-system entry inside the heating/cooling phase.
    Variable,
}

impl SymbolKind {
    /// Convert to the LSP `SymbolKind` number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            SymbolKind::Block => 6,     // Method
            SymbolKind::Section => 3,   // Namespace
            SymbolKind::Phase => 12,    // Function
            SymbolKind::Variable => 13, // Variable
        }
    }
}

/// A node in the document outline tree.
#[derive(Clone, Debug)]
pub struct Symbol {
    /// Display name.
    pub title: String,
    /// Secondary text shown after the title.
    pub detail: String,
    /// Symbol kind.
    pub kind: SymbolKind,
    /// Source range covered by the symbol.
    pub span: Span,
    /// Nested symbols, in document order.
    pub children: Vec<Symbol>,
}

impl Symbol {
    /// Create a symbol with no detail and no children.
    pub fn new(title: impl Into<String>, kind: SymbolKind, span: Span) -> Self {
        Self {
            title: title.into(),
            detail: String::new(),
            kind,
            span,
            children: Vec::new(),
        }
    }

    /// Set the detail text.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = detail.into();
        self
    }
}

/// Get the outline for a document of the given kind.
///
/// Scanning checks `cancel` between lines and returns an empty list when
/// signalled; cancellation is never an error.
pub fn document_symbols(kind: DocumentKind, text: &str, cancel: &CancellationToken) -> Vec<Symbol> {
    match kind {
        DocumentKind::ParameterFile => param_outline(text, cancel),
        DocumentKind::SimulationLog => log_outline(text, cancel),
    }
}
