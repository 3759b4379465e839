//! Foundation types for the ProDiMo tooling.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`Position`], [`Span`] - Line/column positions for outline symbols
//! - [`DocumentKind`] - Which of the two supported grammars a document uses
//!
//! This module has NO dependencies on other prodimo modules.

mod position;

pub use position::{Position, Span};

/// Content type of a document, as declared by the caller.
///
/// Each kind gets its own independent outline grammar; there is no
/// sniffing, the editor decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// A `Parameter.in`-style parameter file.
    ParameterFile,
    /// A `prodimo.log`-style run transcript.
    SimulationLog,
}
