//! Parameter-file outline: dash-fenced block headers.

use tokio_util::sync::CancellationToken;

use super::{Symbol, SymbolKind};
use crate::base::Span;

/// Extract the title from a dash-fence header line.
///
/// The line must be exactly: one or more dashes, a space, a non-empty
/// title with no leading or trailing whitespace, a space, one or more
/// dashes. Anything else is not a header.
fn fence_title(line: &str) -> Option<&str> {
    let open = line.len() - line.trim_start_matches('-').len();
    if open == 0 {
        return None;
    }
    let rest = line[open..].strip_prefix(' ')?;

    let close = rest.len() - rest.trim_end_matches('-').len();
    if close == 0 {
        return None;
    }
    let title = rest[..rest.len() - close].strip_suffix(' ')?;

    if title.is_empty() || title != title.trim() {
        return None;
    }
    Some(title)
}

/// Scan a parameter file into a flat list of `Block` symbols.
///
/// One symbol per header line, titles trimmed, in document order, no
/// nesting. Lines failing the pattern contribute nothing.
pub fn param_outline(text: &str, cancel: &CancellationToken) -> Vec<Symbol> {
    let mut symbols = Vec::new();

    for (line_no, line) in text.lines().enumerate() {
        if cancel.is_cancelled() {
            return Vec::new();
        }
        if let Some(title) = fence_title(line) {
            symbols.push(
                Symbol::new(title, SymbolKind::Block, Span::full_line(line_no, line))
                    .with_detail("block"),
            );
        }
    }

    symbols
}
