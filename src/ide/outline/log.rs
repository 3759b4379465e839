//! Simulation-log outline: a single-pass, stateful section scanner.
//!
//! A ProDiMo run transcript has no markup; phases are reconstructed from
//! the literal progress lines the code prints. The scan walks the log
//! once, carrying three open-section hooks, and applies an ordered rule
//! list per line. The order is load-bearing: an open section must be
//! closed before a new one may open on the same line, and a heatcool
//! sub-entry is recognized on the same line that opened its phase.

use tokio_util::sync::CancellationToken;

use super::{Symbol, SymbolKind};
use crate::base::{Position, Span};

// Literal markers the simulation prints at section boundaries.
const INIT_END_PREFIX: &str = " total INIT CPU time";
const SED_PREFIX: &str = " CALCULATING MONOCHROMATIC FACE-ON SED ...";
const CHEMISTRY_START_PREFIX: &str = " CHEMISTRY AND ENERGY BALANCE ...";
const CHEMISTRY_END_PREFIX: &str = " total CHEMISTRY CPU time";
const CONTINUUM_RT_START_PREFIX: &str = " SOLUTION OF CONTINUUM RADIATIVE TRANSFER ...";
const CONTINUUM_RT_END_PREFIX: &str = " total CONTINUUM RT CPU time";
const LINE_TRANSFER_PREFIX: &str = " Starting line ray-tracing...";

/// Open-section hooks carried across one forward pass.
///
/// Each field references a symbol emitted earlier in the same scan that
/// still awaits its closing condition. At most one hook per section kind
/// is open at a time; a new opener of the same kind supersedes the old
/// one. Hooks never outlive the scan; one left open at end of document
/// (truncated or crashed run) is not an error.
#[derive(Debug, Default)]
struct ScanState {
    /// Top-level index of the open `CHEMISTRY START` section.
    chemistry: Option<usize>,
    /// Top-level index of the open `CONTINUUM RT START` section.
    continuum_rt: Option<usize>,
    /// Index into the INIT children of the open heating/cooling phase.
    heatcool: Option<usize>,
}

/// Scan a simulation log into a nested symbol tree.
///
/// The first top-level symbol is always `INIT`, anchored at the document
/// start with a zero-width span, even for an empty document.
pub fn log_outline(text: &str, cancel: &CancellationToken) -> Vec<Symbol> {
    // The INIT phase is underway before the log says anything about it.
    let mut symbols = vec![Symbol::new(
        "INIT",
        SymbolKind::Phase,
        Span::empty(Position::new(0, 0)),
    )];
    let mut state = ScanState::default();

    for (line_no, line) in text.lines().enumerate() {
        if cancel.is_cancelled() {
            return Vec::new();
        }
        scan_line(line, line_no, &mut symbols, &mut state);
    }

    symbols
}

/// Apply the outline rules to one line, in priority order.
fn scan_line(line: &str, line_no: usize, symbols: &mut Vec<Symbol>, state: &mut ScanState) {
    let span = Span::full_line(line_no, line);

    // 1-2: closing an open section always precedes opening a new one.
    if state.chemistry.is_some() && line.starts_with(CHEMISTRY_END_PREFIX) {
        symbols.push(Symbol::new("CHEMISTRY END", SymbolKind::Section, span));
        state.chemistry = None;
    } else if state.continuum_rt.is_some() && line.starts_with(CONTINUUM_RT_END_PREFIX) {
        symbols.push(Symbol::new("CONTINUUM RT END", SymbolKind::Section, span));
        state.continuum_rt = None;
    }

    // 3: an `INIT_<phase>` header becomes a child of the root.
    if let Some(token) = init_phase_token(line) {
        let is_heatcool = token.eq_ignore_ascii_case("INIT_HEATCOOL");
        let children = &mut symbols[0].children;
        children.push(Symbol::new(token, SymbolKind::Phase, span));
        // Any other phase header closes a previously open heatcool phase.
        state.heatcool = is_heatcool.then(|| children.len() - 1);
    }

    // 4: `INIT SYS <name> ...` entries attach under the open heatcool
    // phase, including on the line that just opened it.
    if let Some(idx) = state.heatcool {
        if let Some(name) = init_sys_token(line) {
            symbols[0].children[idx]
                .children
                .push(Symbol::new(name, SymbolKind::Variable, span));
        }
    }

    // 5: fixed section markers, first match wins.
    if line.starts_with(INIT_END_PREFIX) {
        symbols[0]
            .children
            .push(Symbol::new("INIT END", SymbolKind::Phase, span));
    } else if line.starts_with(SED_PREFIX) {
        symbols.push(Symbol::new("SED", SymbolKind::Section, span));
    } else if line.starts_with(CHEMISTRY_START_PREFIX) {
        symbols.push(Symbol::new("CHEMISTRY START", SymbolKind::Section, span));
        state.chemistry = Some(symbols.len() - 1);
    } else if line.starts_with(CONTINUUM_RT_START_PREFIX) {
        symbols.push(Symbol::new("CONTINUUM RT START", SymbolKind::Section, span));
        state.continuum_rt = Some(symbols.len() - 1);
    } else if line.starts_with(LINE_TRANSFER_PREFIX) {
        symbols.push(Symbol::new("LINE TRANSFER", SymbolKind::Section, span));
    }
}

/// Match an initialization phase header.
///
/// Pattern: optional single leading space, `INIT_`, a non-empty
/// alnum-or-underscore run, then `:` or a space. Matching is
/// ASCII-case-insensitive; the returned token keeps the source spelling
/// and includes the `INIT_` prefix.
fn init_phase_token(line: &str) -> Option<&str> {
    let rest = line.strip_prefix(' ').unwrap_or(line);
    let bytes = rest.as_bytes();
    if bytes.len() < 5 || !bytes[..5].eq_ignore_ascii_case(b"INIT_") {
        return None;
    }

    let mut end = 5;
    while end < bytes.len() && (bytes[end].is_ascii_alphanumeric() || bytes[end] == b'_') {
        end += 1;
    }
    if end == 5 {
        return None;
    }

    match bytes.get(end) {
        Some(&b':') | Some(&b' ') => Some(&rest[..end]),
        _ => None,
    }
}

/// Match a heating/cooling system line: optional leading spaces,
/// `INIT SYS `, one non-whitespace token, then `...`.
fn init_sys_token(line: &str) -> Option<&str> {
    let rest = line.trim_start_matches(' ').strip_prefix("INIT SYS ")?;
    let end = rest.find(char::is_whitespace)?;
    let token = &rest[..end];
    if token.is_empty() {
        return None;
    }
    rest[end..].trim_start().starts_with("...").then_some(token)
}
