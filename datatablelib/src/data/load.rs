//! Loading column sets and datasets from JSON.

use std::fs;
use std::path::Path;

use log::debug;
use serde::de::DeserializeOwned;

use super::column::Columns;
use super::row::Row;
use crate::error::DatatableError;
use crate::Result;

/// Parse a column configuration from JSON text.
pub fn parse_columns(json: &str) -> Result<Columns> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a dataset (a JSON array of objects) from JSON text.
pub fn parse_rows(json: &str) -> Result<Vec<Row>> {
    Ok(serde_json::from_str(json)?)
}

/// Load a column configuration file.
pub fn load_columns(path: impl AsRef<Path>) -> Result<Columns> {
    let columns: Columns = load_json(path.as_ref())?;
    debug!(
        "Loaded {} columns from {}",
        columns.len(),
        path.as_ref().display()
    );
    Ok(columns)
}

/// Load a dataset file.
pub fn load_rows(path: impl AsRef<Path>) -> Result<Vec<Row>> {
    let rows: Vec<Row> = load_json(path.as_ref())?;
    debug!(
        "Loaded {} rows from {}",
        rows.len(),
        path.as_ref().display()
    );
    Ok(rows)
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path).map_err(|source| DatatableError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| DatatableError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_rows_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"[{"id": 1, "name": "a"}, {"id": 2, "name": "b"}]"#).unwrap();

        let rows = load_rows(file.path()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].get("name").to_string(), "b");
    }

    #[test]
    fn test_load_columns_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"amount": {"label": "Amount", "type": "currency"}}"#).unwrap();

        let columns = load_columns(file.path()).unwrap();
        assert_eq!(columns.get("amount").unwrap().label, "Amount");
    }

    #[test]
    fn test_missing_file_is_file_read_error() {
        let result = load_rows("/definitely/not/here.json");
        assert!(matches!(result, Err(DatatableError::FileRead { .. })));
    }

    #[test]
    fn test_malformed_json_reports_path() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = load_columns(file.path()).unwrap_err();
        assert!(matches!(err, DatatableError::InvalidJson { .. }));
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }

    #[test]
    fn test_parse_rows_rejects_non_array() {
        assert!(parse_rows(r#"{"id": 1}"#).is_err());
        assert_eq!(parse_rows("[]").unwrap().len(), 0);
    }
}
