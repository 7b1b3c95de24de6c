//! Column configuration

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::error::DatatableError;
use crate::Result;

/// Kind of data held by a column.
///
/// Decides how cells are formatted, compared and filtered. Unknown type
/// names fall back to `String` behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    /// Free text
    #[default]
    String,
    /// Plain number
    Number,
    /// Timestamp
    Date,
    /// Integer amount in minor units (cents)
    Currency,
    /// Status label (PAID, UNPAID, PENDING, ...)
    Status,
}

impl DataType {
    /// Resolve a type name, falling back to `String` for anything unknown.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "number" => DataType::Number,
            "date" => DataType::Date,
            "currency" => DataType::Currency,
            "status" => DataType::Status,
            _ => DataType::String,
        }
    }
}

impl<'de> Deserialize<'de> for DataType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(DataType::from_name(&name))
    }
}

/// Horizontal alignment hint for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl Align {
    /// Resolve an alignment name, falling back to `Left`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "center" => Align::Center,
            "right" => Align::Right,
            _ => Align::Left,
        }
    }
}

impl<'de> Deserialize<'de> for Align {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Align::from_name(&name))
    }
}

fn default_true() -> bool {
    true
}

/// Declarative description of one displayed column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnConfig {
    /// Field identifier, also the row-field accessor
    #[serde(default)]
    pub key: String,
    /// Header text
    #[serde(default)]
    pub label: String,
    /// Data type driving format/sort/filter behaviour
    #[serde(rename = "type", default)]
    pub data_type: DataType,
    /// Whether the header toggles sorting
    #[serde(default = "default_true")]
    pub sortable: bool,
    /// Whether the column gets a filter input
    #[serde(default = "default_true")]
    pub filterable: bool,
    /// Display width hint, passed through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    /// Alignment hint
    #[serde(default)]
    pub align: Align,
}

impl ColumnConfig {
    /// Create a sortable, filterable, left-aligned column.
    pub fn new(key: impl Into<String>, label: impl Into<String>, data_type: DataType) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            data_type,
            sortable: true,
            filterable: true,
            width: None,
            align: Align::Left,
        }
    }

    /// Builder: disable sorting
    pub fn not_sortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    /// Builder: disable filtering
    pub fn not_filterable(mut self) -> Self {
        self.filterable = false;
        self
    }

    /// Builder: set the width hint
    pub fn with_width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    /// Builder: set the alignment
    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }
}

/// Ordered set of columns with unique keys.
///
/// Order is display order. Deserializes from either a JSON object keyed by
/// column key (entry order preserved) or a JSON array of column objects.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Columns {
    columns: Vec<ColumnConfig>,
}

impl Columns {
    /// Build a column set, rejecting duplicate keys.
    ///
    /// Columns without a label use their key as label.
    pub fn new(columns: Vec<ColumnConfig>) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut columns = columns;
        for column in &mut columns {
            if !seen.insert(column.key.clone()) {
                return Err(DatatableError::DuplicateColumn(column.key.clone()));
            }
            if column.label.is_empty() {
                column.label = column.key.clone();
            }
        }
        Ok(Self { columns })
    }

    /// Look up a column by key.
    pub fn get(&self, key: &str) -> Option<&ColumnConfig> {
        self.columns.iter().find(|c| c.key == key)
    }

    /// Position of a column in display order.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.key == key)
    }

    /// Iterate columns in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, ColumnConfig> {
        self.columns.iter()
    }

    /// Column keys in display order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.key.as_str())
    }

    /// Columns that accept a filter.
    pub fn filterable(&self) -> impl Iterator<Item = &ColumnConfig> {
        self.columns.iter().filter(|c| c.filterable)
    }

    /// True if at least one column accepts a filter.
    pub fn has_filterable(&self) -> bool {
        self.columns.iter().any(|c| c.filterable)
    }

    /// Columns of type `status`.
    pub fn status_columns(&self) -> impl Iterator<Item = &ColumnConfig> {
        self.columns
            .iter()
            .filter(|c| c.data_type == DataType::Status)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl<'a> IntoIterator for &'a Columns {
    type Item = &'a ColumnConfig;
    type IntoIter = std::slice::Iter<'a, ColumnConfig>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}

struct ColumnsVisitor;

impl<'de> Visitor<'de> for ColumnsVisitor {
    type Value = Columns;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of column key to column config, or a list of column configs")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<Columns, A::Error> {
        let mut columns = Vec::new();
        while let Some((key, mut column)) = map.next_entry::<String, ColumnConfig>()? {
            if column.key.is_empty() {
                column.key = key;
            }
            columns.push(column);
        }
        Columns::new(columns).map_err(de::Error::custom)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> std::result::Result<Columns, A::Error> {
        let mut columns = Vec::new();
        while let Some(column) = seq.next_element::<ColumnConfig>()? {
            if column.key.is_empty() {
                return Err(de::Error::missing_field("key"));
            }
            columns.push(column);
        }
        Columns::new(columns).map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Columns {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(ColumnsVisitor)
    }
}
