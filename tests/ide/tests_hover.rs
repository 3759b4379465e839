//! Hover tests for the IDE layer.

use prodimo::catalog::CatalogSource;
use prodimo::ide::AnalysisHost;

use crate::helpers::source_fixtures::*;

#[test]
fn test_hover_on_parameter_line() {
    let analysis = HOST.analysis().unwrap();
    let line = "1.0        ! Mstar : stellar mass";
    let result = analysis.hover(line, 14).unwrap();

    assert!(result.contents.contains("stellar mass"));
    assert!(result.contents.contains("Unit: Msun"));
    assert!(result
        .contents
        .contains("- [star](https://prodimo.iwf.oeaw.ac.at/wiki/star.html)"));
}

#[test]
fn test_hover_outside_the_name_span() {
    let analysis = HOST.analysis().unwrap();
    let line = "1.0        ! Mstar : stellar mass";

    // On the value or inside the trailing comment: nothing.
    assert!(analysis.hover(line, 1).is_none());
    assert!(analysis.hover(line, 25).is_none());
}

#[test]
fn test_hover_unknown_parameter() {
    let analysis = HOST.analysis().unwrap();
    assert!(analysis.hover("1  ! Unknown_par", 6).is_none());
}

#[test]
fn test_hover_needs_exactly_one_separator() {
    let analysis = HOST.analysis().unwrap();
    assert!(analysis.hover("1.0 ! Mstar ! again", 7).is_none());
    assert!(analysis.hover("1.0 Mstar", 5).is_none());
}

#[test]
fn test_hover_lists_every_wiki_reference_in_order() {
    let analysis = HOST.analysis().unwrap();
    let result = analysis.hover("100  ! Rout", 8).unwrap();

    let disk = result.contents.find("disk.html").unwrap();
    let grid = result.contents.find("grid.html").unwrap();
    assert!(disk < grid);
}

#[test]
fn test_hover_fails_after_catalog_load_failure() {
    let host = AnalysisHost::new(CatalogSource::Inline("{ broken".into()));
    assert!(host.analysis().is_err());
}
