//! Hover documentation for parameter names.

use crate::catalog::ParameterCatalog;

/// Base URL the wiki page filenames in the catalog resolve against.
pub const WIKI_BASE_URL: &str = "https://prodimo.iwf.oeaw.ac.at/wiki/";

/// Result of a hover request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HoverResult {
    /// The hover content (markdown).
    pub contents: String,
}

/// Get hover documentation for a position on a parameter line.
///
/// A parameter line is `value  ! NAME : comment`; hover applies only when
/// the line has exactly one `"! "` separator and the cursor (a character
/// offset) falls within the parameter name right after it. Names missing
/// from the catalog get no hover.
pub fn hover(catalog: &ParameterCatalog, line_text: &str, cursor: usize) -> Option<HoverResult> {
    let sep = line_text.find("! ")?;
    let tail = &line_text[sep + 2..];
    if tail.contains("! ") {
        return None;
    }

    // First whitespace-delimited token of the tail is the name.
    let name = tail.split_whitespace().next()?;
    let name_start = sep + 2 + (tail.len() - tail.trim_start().len());
    let start = line_text[..name_start].chars().count();
    let end = start + name.chars().count();
    if cursor < start || cursor > end {
        return None;
    }

    let def = catalog.lookup(name)?;
    Some(HoverResult {
        contents: render_markdown(def),
    })
}

/// Build the hover markdown: description, optional unit, wiki links.
fn render_markdown(def: &crate::catalog::ParameterDefinition) -> String {
    let mut out = String::new();
    out.push_str(&def.description);
    out.push('\n');

    if !def.unit.is_empty() {
        out.push_str("\nUnit: ");
        out.push_str(&def.unit);
        out.push('\n');
    }

    if !def.wiki_refs.is_empty() {
        out.push('\n');
        for page in &def.wiki_refs {
            // Wiki sources are Markdown; the published pages are HTML.
            let (label, target) = match page.strip_suffix(".md") {
                Some(stem) => (stem.to_string(), format!("{stem}.html")),
                None => (page.clone(), page.clone()),
            };
            out.push_str(&format!("- [{label}]({WIKI_BASE_URL}{target})\n"));
        }
    }

    out
}
