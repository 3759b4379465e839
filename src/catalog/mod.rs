//! Parameter reference catalog.
//!
//! Read-only reference data describing every ProDiMo input parameter:
//! type, default value, unit, description, and wiki links. The catalog is
//! the single shared input of the completion and hover features.
//!
//! ## Source format
//!
//! The canonical source is a JSON object keyed by parameter name:
//!
//! ```json
//! { "Mstar": { "desc": "stellar mass", "type": "real",
//!              "default": "1.0", "unit": "Msun", "wiki": ["star.md"] } }
//! ```
//!
//! The older array form (`{ "parameters": [ { "name": ..., ... } ] }`) is
//! still accepted and normalized into the map at load time.

mod error;
mod handle;

pub use error::CatalogError;
pub use handle::{CatalogHandle, CatalogSource};

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

/// Reference data for a single parameter. Immutable after load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParameterDefinition {
    /// Parameter name as written in the file (unique catalog key).
    pub name: String,
    /// Value type, e.g. `"real"`, `"integer"`, `"logical"`.
    pub param_type: String,
    /// Default value rendered as text.
    pub default: String,
    /// Physical unit, `"-"` for dimensionless.
    pub unit: String,
    /// One-line description; empty when the source had none.
    pub description: String,
    /// Wiki page filenames documenting the parameter, in source order.
    pub wiki_refs: Vec<String>,
}

/// The parameter catalog: name → definition, in source order.
#[derive(Clone, Debug, Default)]
pub struct ParameterCatalog {
    params: IndexMap<String, ParameterDefinition>,
}

/// One catalog entry as it appears in the JSON source.
#[derive(Debug, Deserialize)]
struct RawEntry {
    /// `desc: null` is valid in the source and normalizes to `""`.
    #[serde(default, alias = "description")]
    desc: Option<String>,
    #[serde(rename = "type", default)]
    param_type: String,
    #[serde(default)]
    default: String,
    #[serde(default)]
    unit: String,
    #[serde(default)]
    wiki: Vec<String>,
}

/// Entry of the legacy array form, which carries the name inline.
#[derive(Debug, Deserialize)]
struct RawNamedEntry {
    name: String,
    #[serde(flatten)]
    entry: RawEntry,
}

/// Both accepted source layouts.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawCatalog {
    Legacy { parameters: Vec<RawNamedEntry> },
    Map(IndexMap<String, RawEntry>),
}

impl ParameterDefinition {
    fn from_raw(name: String, raw: RawEntry) -> Self {
        Self {
            name,
            param_type: raw.param_type,
            default: raw.default,
            unit: raw.unit,
            description: raw.desc.unwrap_or_default(),
            wiki_refs: raw.wiki,
        }
    }
}

impl ParameterCatalog {
    /// Parse a catalog from JSON source text.
    pub fn from_json(source: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog =
            serde_json::from_str(source).map_err(|e| CatalogError::parse(e.to_string()))?;

        let mut params = IndexMap::new();
        match raw {
            RawCatalog::Map(entries) => {
                for (name, entry) in entries {
                    let def = ParameterDefinition::from_raw(name.clone(), entry);
                    params.insert(name, def);
                }
            }
            RawCatalog::Legacy { parameters } => {
                tracing::debug!("normalizing legacy array-form catalog");
                for named in parameters {
                    let def = ParameterDefinition::from_raw(named.name.clone(), named.entry);
                    params.insert(named.name, def);
                }
            }
        }

        tracing::debug!(count = params.len(), "parameter catalog parsed");
        Ok(Self { params })
    }

    /// Load a catalog from a file on disk.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let source = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::read(path.to_path_buf(), e.to_string()))?;
        Self::from_json(&source)
    }

    /// Look up a parameter by name.
    pub fn lookup(&self, name: &str) -> Option<&ParameterDefinition> {
        self.params.get(name)
    }

    /// Iterate over (name, definition) pairs in source order.
    ///
    /// The iterator is finite and restartable; call it as often as needed.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &ParameterDefinition)> {
        self.params.iter().map(|(name, def)| (name.as_str(), def))
    }

    /// Number of parameters in the catalog.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Whether the catalog holds no parameters.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}
