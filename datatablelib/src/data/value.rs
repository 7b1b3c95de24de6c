//! Dynamic cell values

use serde::{Deserialize, Serialize};
use std::fmt;

/// A scalar stored in a row field.
///
/// Rows are open mappings, so a cell can hold any JSON scalar. Nested
/// objects and arrays are kept in the `Json` fallback and displayed as their
/// JSON text instead of failing the whole dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Missing or null value
    #[default]
    Null,
    /// Boolean value
    Bool(bool),
    /// Numeric value (integers included)
    Number(f64),
    /// Text value
    Text(String),
    /// Fallback for non-scalar JSON values
    Json(serde_json::Value),
}

impl CellValue {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Returns `true` if this holds a number.
    pub fn is_number(&self) -> bool {
        matches!(self, CellValue::Number(_))
    }

    /// Numeric view of the value.
    ///
    /// Numbers are returned as-is, text is parsed after trimming. Non-finite
    /// results are treated as not numeric.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) if n.is_finite() => Some(*n),
            CellValue::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            _ => None,
        }
    }

    /// Text view of the value, if it is text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => Ok(()),
            CellValue::Bool(b) => write!(f, "{}", b),
            // f64's Display drops the fraction for whole numbers ("1000", not "1000.0")
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Json(v) => write!(f, "{}", v),
        }
    }
}

impl From<bool> for CellValue {
    fn from(v: bool) -> Self {
        CellValue::Bool(v)
    }
}

impl From<i32> for CellValue {
    fn from(v: i32) -> Self {
        CellValue::Number(v as f64)
    }
}

impl From<i64> for CellValue {
    fn from(v: i64) -> Self {
        CellValue::Number(v as f64)
    }
}

impl From<u32> for CellValue {
    fn from(v: u32) -> Self {
        CellValue::Number(v as f64)
    }
}

impl From<u64> for CellValue {
    fn from(v: u64) -> Self {
        CellValue::Number(v as f64)
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Number(v)
    }
}

impl From<&str> for CellValue {
    fn from(v: &str) -> Self {
        CellValue::Text(v.to_string())
    }
}

impl From<String> for CellValue {
    fn from(v: String) -> Self {
        CellValue::Text(v)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(CellValue::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_whole_numbers_without_fraction() {
        assert_eq!(CellValue::from(1000).to_string(), "1000");
        assert_eq!(CellValue::from(12.5).to_string(), "12.5");
        assert_eq!(CellValue::from(-3).to_string(), "-3");
    }

    #[test]
    fn test_display_null_is_empty() {
        assert_eq!(CellValue::Null.to_string(), "");
        assert_eq!(CellValue::from(None::<&str>).to_string(), "");
    }

    #[test]
    fn test_as_number() {
        assert_eq!(CellValue::from(42).as_number(), Some(42.0));
        assert_eq!(CellValue::from(" 3.5 ").as_number(), Some(3.5));
        assert_eq!(CellValue::from("abc").as_number(), None);
        assert_eq!(CellValue::from(f64::NAN).as_number(), None);
        assert_eq!(CellValue::from(true).as_number(), None);
        assert_eq!(CellValue::Null.as_number(), None);
    }

    #[test]
    fn test_deserialize_scalars() {
        let values: Vec<CellValue> =
            serde_json::from_str(r#"[null, true, 12, 1.5, "x", {"a": 1}]"#).unwrap();
        assert_eq!(values[0], CellValue::Null);
        assert_eq!(values[1], CellValue::Bool(true));
        assert_eq!(values[2], CellValue::Number(12.0));
        assert_eq!(values[3], CellValue::Number(1.5));
        assert_eq!(values[4], CellValue::Text("x".to_string()));
        assert_eq!(values[5].to_string(), r#"{"a":1}"#);
    }
}
