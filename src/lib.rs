//! # prodimo-base
//!
//! Core library for ProDiMo parameter-file and simulation-log language
//! intelligence: document outlines, context-aware parameter-name
//! completion, and hover documentation.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → IDE features (outline, completion, hover) + AnalysisHost
//!   ↓
//! catalog   → parameter reference data (load, lookup, entries)
//!   ↓
//! base      → primitives (Position, Span, DocumentKind)
//! ```
//!
//! The crate is transport-agnostic: an LSP server or editor extension
//! converts these results to protocol types at its own boundary.

/// Foundation types: Position, Span, DocumentKind
pub mod base;

/// Parameter reference catalog: definitions, load guard, errors
pub mod catalog;

/// IDE features: outline, completion, hover, analysis host
pub mod ide;

// Re-export foundation types
pub use base::{DocumentKind, Position, Span};
