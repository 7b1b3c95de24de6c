//! Dataset rows

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::value::CellValue;

static NULL: CellValue = CellValue::Null;

/// One record of the dataset: an open mapping from field name to value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    fields: BTreeMap<String, CellValue>,
}

impl Row {
    /// Create an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set a field
    pub fn with(mut self, key: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Set a field, returning the previous value if any.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<CellValue>,
    ) -> Option<CellValue> {
        self.fields.insert(key.into(), value.into())
    }

    /// Field accessor. Missing fields read as `Null`.
    pub fn get(&self, key: &str) -> &CellValue {
        self.fields.get(key).unwrap_or(&NULL)
    }

    /// True if the row has a field named `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Stable identity of the row: its `id` field when that is set and
    /// non-empty, otherwise the position it had in the dataset.
    pub fn identity(&self, index: usize) -> RowId {
        let id = self.get("id");
        let text = id.to_string();
        let is_zero = id.as_number() == Some(0.0);
        if id.is_null() || text.is_empty() || is_zero || id == &CellValue::Bool(false) {
            RowId::Index(index)
        } else {
            RowId::Id(text)
        }
    }

    /// Iterate fields in key order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<CellValue>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Identity used to key a rendered row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowId {
    /// Value of the row's `id` field
    Id(String),
    /// Position in the input dataset
    Index(usize),
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowId::Id(id) => f.write_str(id),
            RowId::Index(index) => write!(f, "{}", index),
        }
    }
}
