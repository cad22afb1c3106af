//! Bibliographic entries and the keyword capability the manager needs.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Name of the keyword field.
pub const KEYWORDS_FIELD: &str = "keywords";

/// Anything with a delimited keyword field.
///
/// The manager only reads and writes this one field; everything else about
/// the record is opaque to it.
pub trait KeywordRecord {
    /// The raw keyword field, if set.
    fn keywords(&self) -> Option<&str>;

    /// Overwrite the keyword field.
    fn set_keywords(&mut self, value: &str);

    /// Remove the keyword field.
    fn clear_keywords(&mut self);
}

/// A bibliographic entry.
///
/// Field names are stored lowercase so `Keywords` and `keywords` are the
/// same field, as in BibTeX.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BibEntry {
    /// Entry type, e.g. `article`.
    #[serde(rename = "type", default = "default_entry_type")]
    pub entry_type: String,
    /// Citation key, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citation_key: Option<String>,
    /// All other fields, keyed by lowercase name.
    #[serde(default, deserialize_with = "lowercase_keys")]
    fields: BTreeMap<String, String>,
}

fn default_entry_type() -> String {
    "misc".to_string()
}

/// Read a field map, folding every name to lowercase.
///
/// When two names fold to the same key the later one wins.
fn lowercase_keys<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, String>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(name, value)| (name.to_lowercase(), value))
        .collect())
}

impl BibEntry {
    /// Create an entry of the given type with no fields.
    pub fn new(entry_type: impl Into<String>) -> Self {
        Self {
            entry_type: entry_type.into(),
            citation_key: None,
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style field setter.
    pub fn with_field(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_field(name, value);
        self
    }

    /// Get a field value.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(&name.to_lowercase()).map(String::as_str)
    }

    /// Set a field value.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) {
        self.fields.insert(name.to_lowercase(), value.into());
    }

    /// Remove a field, returning its old value.
    pub fn clear_field(&mut self, name: &str) -> Option<String> {
        self.fields.remove(&name.to_lowercase())
    }
}

impl KeywordRecord for BibEntry {
    fn keywords(&self) -> Option<&str> {
        self.field(KEYWORDS_FIELD)
    }

    fn set_keywords(&mut self, value: &str) {
        self.set_field(KEYWORDS_FIELD, value);
    }

    fn clear_keywords(&mut self) {
        self.clear_field(KEYWORDS_FIELD);
    }
}
