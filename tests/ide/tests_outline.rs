//! Document outline tests for the IDE layer.

use tokio_util::sync::CancellationToken;

use prodimo::DocumentKind;
use prodimo::ide::SymbolKind;

use crate::helpers::source_fixtures::*;

#[test]
fn test_param_outline_lists_blocks_in_order() {
    let analysis = HOST.analysis().unwrap();
    let symbols = analysis.document_symbols(
        DocumentKind::ParameterFile,
        PARAM_FILE,
        &CancellationToken::new(),
    );

    let titles: Vec<_> = symbols.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(
        titles,
        ["STELLAR PARAMETERS", "DISK STRUCTURE", "DUST OPACITIES"]
    );
    assert!(symbols.iter().all(|s| s.kind == SymbolKind::Block));
    assert!(symbols.iter().all(|s| s.children.is_empty()));
    assert_eq!(symbols[0].detail, "block");
}

#[test]
fn test_param_outline_spans_cover_the_header_line() {
    let analysis = HOST.analysis().unwrap();
    let symbols = analysis.document_symbols(
        DocumentKind::ParameterFile,
        PARAM_FILE,
        &CancellationToken::new(),
    );

    assert_eq!(symbols[1].span.start.line, 3);
    assert_eq!(symbols[1].span.start.column, 0);
    assert_eq!(symbols[1].span.end.column, "--- DISK STRUCTURE ---".len());
}

#[test]
fn test_log_outline_reconstructs_the_run() {
    let analysis = HOST.analysis().unwrap();
    let symbols = analysis.document_symbols(
        DocumentKind::SimulationLog,
        LOG_FILE,
        &CancellationToken::new(),
    );

    let top: Vec<_> = symbols.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(
        top,
        [
            "INIT",
            "SED",
            "CONTINUUM RT START",
            "CONTINUUM RT END",
            "CHEMISTRY START",
            "CHEMISTRY END",
            "LINE TRANSFER"
        ]
    );

    let init: Vec<_> = symbols[0].children.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(
        init,
        ["INIT_grid", "INIT_star", "INIT_HEATCOOL", "INIT END"]
    );

    let heatcool = &symbols[0].children[2];
    let systems: Vec<_> = heatcool.children.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(systems, ["CO", "H2O"]);
    assert!(heatcool.children.iter().all(|s| s.kind == SymbolKind::Variable));
}

#[test]
fn test_log_outline_empty_document_keeps_init_root() {
    let analysis = HOST.analysis().unwrap();
    let symbols =
        analysis.document_symbols(DocumentKind::SimulationLog, "", &CancellationToken::new());

    assert_eq!(symbols.len(), 1);
    assert_eq!(symbols[0].title, "INIT");
    assert_eq!(symbols[0].span.start, symbols[0].span.end);
    assert_eq!(symbols[0].span.start.line, 0);
}

#[test]
fn test_log_outline_truncated_run_leaves_section_open() {
    let analysis = HOST.analysis().unwrap();
    let truncated = " CHEMISTRY AND ENERGY BALANCE ...\n iterating\n";
    let symbols = analysis.document_symbols(
        DocumentKind::SimulationLog,
        truncated,
        &CancellationToken::new(),
    );

    let titles: Vec<_> = symbols.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, ["INIT", "CHEMISTRY START"]);
}

#[test]
fn test_cancelled_outline_is_empty() {
    let analysis = HOST.analysis().unwrap();
    let cancel = CancellationToken::new();
    cancel.cancel();

    assert!(analysis
        .document_symbols(DocumentKind::ParameterFile, PARAM_FILE, &cancel)
        .is_empty());
    assert!(analysis
        .document_symbols(DocumentKind::SimulationLog, LOG_FILE, &cancel)
        .is_empty());
}
