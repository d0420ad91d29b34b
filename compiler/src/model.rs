//! Normalized, deduplicated, key-ordered view of the parsed schema.

use std::collections::BTreeMap;

use crate::idents::collapse_whitespace;
use crate::parser::RawField;

/// Placeholder label for fields that declare none.
pub const MISSING_LABEL: &str = "(no label)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionEntry {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRecord {
    /// Declared config key, kept verbatim and case-sensitive.
    pub key: String,
    pub label: String,
    /// Empty when the field declares no help text.
    pub help_text: String,
    pub default_value: Option<String>,
    pub options: Vec<OptionEntry>,
}

/// Iteration order is ascending lexicographic by key, independent of parse
/// order, so renders are reproducible across runs on identical input.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SchemaModel {
    fields: BTreeMap<String, FieldRecord>,
}

impl SchemaModel {
    /// Builds the model from raw records. When several records share a key,
    /// the last one parsed wins; earlier ones are discarded without warning.
    pub fn from_raw(raw: Vec<RawField>) -> Self {
        let mut fields = BTreeMap::new();
        for record in raw {
            let record = normalize(record);
            fields.insert(record.key.clone(), record);
        }
        SchemaModel { fields }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&FieldRecord> {
        self.fields.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldRecord> {
        self.fields.values()
    }
}

/// Free text goes through the whitespace collapser; a label that collapses to
/// nothing is treated the same as a missing one.
fn normalize(raw: RawField) -> FieldRecord {
    let label = raw
        .label
        .map(|l| collapse_whitespace(&l))
        .filter(|l| !l.is_empty())
        .unwrap_or_else(|| MISSING_LABEL.to_string());
    let help_text = raw
        .help_text
        .map(|h| collapse_whitespace(&h))
        .unwrap_or_default();
    let options = raw
        .options
        .into_iter()
        .map(|o| OptionEntry {
            id: o.id,
            name: collapse_whitespace(&o.name),
        })
        .collect();

    FieldRecord {
        key: raw.key,
        label,
        help_text,
        default_value: raw.default_value,
        options,
    }
}
