//! Context-aware parameter-name completion.
//!
//! A parameter line reads `value  ! NAME : comment`, so the `!` both
//! introduces the parameter name and doubles as the completion trigger.
//! Resolving what the user wants is a fixed decision table over the text
//! around the cursor; building the list is a pure function of the
//! catalog and the resolved situation.
//!
//! Two workflows are supported: type `!` and get names, or ask first
//! (ctrl-space) and have the `! ` inserted with the name. A line that
//! already carries a parameter name never gets a second one suggested.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::catalog::{ParameterCatalog, ParameterDefinition};

/// How a completion request was invoked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerKind {
    /// Manually requested (ctrl-space).
    Keyboard,
    /// Fired by typing a trigger character.
    Character,
}

/// One completion request, as handed over by the editor.
#[derive(Clone, Copy, Debug)]
pub struct CompletionRequest<'a> {
    /// Full text of the cursor line.
    pub line_text: &'a str,
    /// Cursor offset within the line, in characters.
    pub cursor: usize,
    /// The trigger character, if one fired the request.
    pub trigger: Option<char>,
    /// How the request was invoked.
    pub invoked: TriggerKind,
}

impl CompletionRequest<'_> {
    /// Whether the cursor sits at the end of the line.
    ///
    /// Recomputed per request; it depends on the cursor, not on the
    /// resolved situation.
    pub fn at_end_of_line(&self) -> bool {
        self.cursor >= self.line_text.chars().count()
    }
}

/// The resolved intent of a completion request. Derived, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TriggerSituation {
    /// The cursor sits after the line's only `!`: suggest names.
    ExplicitBang,
    /// Manual request away from a lone `!`: suggest names and insert
    /// the `! ` along with them.
    ImplicitBangPresent,
    /// A `.` trigger on a bang-free line: suggest `.true.` / `.false.`.
    BooleanLiteral,
    /// Nothing to suggest here.
    NoCompletion,
}

/// Resolve the completion situation from the cursor context.
///
/// The rules form an ordered decision table; only the first matching
/// rule governs.
pub fn resolve_situation(request: &CompletionRequest) -> TriggerSituation {
    let (before, after) = split_at_cursor(request.line_text, request.cursor);
    let last_bang = before.rfind('!');

    // A `.` trigger asks for a boolean literal, but never on a line
    // that already carries a parameter name.
    if request.trigger == Some('.') {
        return if last_bang.is_some() {
            TriggerSituation::NoCompletion
        } else {
            TriggerSituation::BooleanLiteral
        };
    }

    // A manual request with only whitespace between the cursor and the
    // last `!` behaves exactly like typing that `!`.
    let promoted = request.invoked == TriggerKind::Keyboard
        && last_bang.is_some_and(|i| before[i + 1..].chars().all(char::is_whitespace));

    if request.trigger == Some('!') || promoted {
        return match last_bang {
            Some(i) if !before[..i].contains('!') && !after.contains('!') => {
                TriggerSituation::ExplicitBang
            }
            _ => TriggerSituation::NoCompletion,
        };
    }

    if request.invoked == TriggerKind::Keyboard {
        return match last_bang {
            Some(i) if before[..i].contains('!') => TriggerSituation::NoCompletion,
            _ => TriggerSituation::ImplicitBangPresent,
        };
    }

    TriggerSituation::NoCompletion
}

fn split_at_cursor(line: &str, cursor: usize) -> (&str, &str) {
    let byte = line
        .char_indices()
        .nth(cursor)
        .map(|(i, _)| i)
        .unwrap_or(line.len());
    line.split_at(byte)
}

/// A completion suggestion.
#[derive(Clone, Debug)]
pub struct CompletionItem {
    /// Label shown in the list (the bare parameter name).
    pub label: Arc<str>,
    /// Text inserted on accept.
    pub insert_text: String,
    /// Detail text (shown after the label).
    pub detail: Option<Arc<str>>,
    /// Documentation popup, as Markdown.
    pub documentation: Option<Arc<str>>,
}

/// A suggestion before the per-request end-of-line suffix is applied.
///
/// Only these may be cached: they depend on the situation and the
/// catalog alone, never on the cursor.
#[derive(Clone, Debug)]
struct BaseItem {
    label: Arc<str>,
    insert_text: Arc<str>,
    /// Appended to `insert_text` only when the cursor sits at end of line.
    eol_suffix: Arc<str>,
    detail: Option<Arc<str>>,
    documentation: Option<Arc<str>>,
}

/// Get completion suggestions for a request.
pub fn completions(catalog: &ParameterCatalog, request: &CompletionRequest) -> Vec<CompletionItem> {
    match resolve_situation(request) {
        TriggerSituation::NoCompletion => Vec::new(),
        TriggerSituation::BooleanLiteral => boolean_items(),
        situation => render_items(&base_items(catalog, situation), request.at_end_of_line()),
    }
}

/// The two fixed boolean suggestions; the `.` trigger already sits in
/// the document, so the inserted text starts after it.
fn boolean_items() -> Vec<CompletionItem> {
    vec![
        CompletionItem {
            label: Arc::from(".true."),
            insert_text: "true. ".to_string(),
            detail: None,
            documentation: None,
        },
        CompletionItem {
            label: Arc::from(".false."),
            insert_text: "false.     ".to_string(),
            detail: None,
            documentation: None,
        },
    ]
}

fn base_items(catalog: &ParameterCatalog, situation: TriggerSituation) -> Vec<BaseItem> {
    let prefix = match situation {
        TriggerSituation::ImplicitBangPresent => "! ",
        _ => " ",
    };

    catalog
        .entries()
        .map(|(name, def)| {
            let mut suffix = String::new();
            if has_unit(&def.unit) {
                suffix.push_str("   [");
                suffix.push_str(&def.unit);
                suffix.push_str("] ");
            }
            let desc = def.description.trim();
            if !desc.is_empty() {
                suffix.push_str("   : ");
                suffix.push_str(desc);
            }

            BaseItem {
                label: Arc::from(name),
                insert_text: Arc::from(format!("{prefix}{name} ")),
                eol_suffix: Arc::from(suffix),
                detail: (!def.description.is_empty()).then(|| Arc::from(def.description.as_str())),
                documentation: Some(Arc::from(render_documentation(def))),
            }
        })
        .collect()
}

fn render_items(base: &[BaseItem], at_end_of_line: bool) -> Vec<CompletionItem> {
    base.iter()
        .map(|item| {
            let mut insert_text = item.insert_text.to_string();
            if at_end_of_line {
                insert_text.push_str(&item.eol_suffix);
            }
            CompletionItem {
                label: item.label.clone(),
                insert_text,
                detail: item.detail.clone(),
                documentation: item.documentation.clone(),
            }
        })
        .collect()
}

fn render_documentation(def: &ParameterDefinition) -> String {
    format!(
        "- **Type:** {}\n- **Default:** {}\n- **Unit:** {}\n- **Description:** {}\n",
        def.param_type, def.default, def.unit, def.description
    )
}

/// `-` is the catalog's "dimensionless" sentinel and counts as no unit.
fn has_unit(unit: &str) -> bool {
    !unit.is_empty() && unit != "-"
}

/// Memoized base suggestions, keyed by situation and catalog generation.
///
/// The end-of-line suffix is applied at render time for every request,
/// so a list built while the cursor was at end of line is never served
/// unchanged to a request where it is not.
pub(crate) struct CompletionCache {
    inner: Mutex<HashMap<(TriggerSituation, u64), Arc<Vec<BaseItem>>>>,
}

impl CompletionCache {
    pub(crate) fn new() -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
        }
    }

    pub(crate) fn completions(
        &self,
        catalog: &ParameterCatalog,
        generation: u64,
        request: &CompletionRequest,
    ) -> Vec<CompletionItem> {
        match resolve_situation(request) {
            TriggerSituation::NoCompletion => Vec::new(),
            TriggerSituation::BooleanLiteral => boolean_items(),
            situation => {
                let base = self
                    .inner
                    .lock()
                    .entry((situation, generation))
                    .or_insert_with(|| {
                        tracing::trace!(?situation, generation, "building completion base items");
                        Arc::new(base_items(catalog, situation))
                    })
                    .clone();
                render_items(&base, request.at_end_of_line())
            }
        }
    }

    /// Drop all cached lists; called when the catalog is reloaded.
    pub(crate) fn invalidate(&self) {
        self.inner.lock().clear();
    }
}
