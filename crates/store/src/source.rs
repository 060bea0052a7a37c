use crate::error::StoreError;
use core_types::Customer;
use std::fs;
use std::path::{Path, PathBuf};

/// Anything that can hand over the full customer dataset in one go.
///
/// A source is read once per run. A failure here is fatal: the engine never sees a
/// partial dataset.
pub trait DataSource {
    fn load(&self) -> Result<Vec<Customer>, StoreError>;

    /// A short human-readable description used in log lines.
    fn describe(&self) -> String;
}

/// Reads a JSON array of customers from a file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataSource for JsonFileSource {
    fn load(&self) -> Result<Vec<Customer>, StoreError> {
        let raw = fs::read_to_string(&self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        let customers = parse_customers(&raw)?;

        tracing::info!(
            path = %self.path.display(),
            customers = customers.len(),
            "Loaded customer dataset."
        );
        Ok(customers)
    }

    fn describe(&self) -> String {
        format!("json file {}", self.path.display())
    }
}

/// Parses an in-memory JSON document. Handy for tests and piped input.
#[derive(Debug, Clone)]
pub struct JsonStrSource {
    document: String,
}

impl JsonStrSource {
    pub fn new(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
        }
    }
}

impl DataSource for JsonStrSource {
    fn load(&self) -> Result<Vec<Customer>, StoreError> {
        let customers = parse_customers(&self.document)?;
        tracing::debug!(customers = customers.len(), "Parsed in-memory customer dataset.");
        Ok(customers)
    }

    fn describe(&self) -> String {
        format!("in-memory json ({} bytes)", self.document.len())
    }
}

fn parse_customers(raw: &str) -> Result<Vec<Customer>, StoreError> {
    Ok(serde_json::from_str(raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Write;

    const DOCUMENT: &str = r#"[
        {
            "id": "c1",
            "first_name": "Ayse",
            "last_name": "Yilmaz",
            "cash": 500,
            "basket": {
                "id": "b1",
                "products": [
                    {"id": "p1", "category": "Electronics", "name": "Mouse", "price": 25.5, "quantity": 2}
                ],
                "total": 51.0
            }
        },
        {
            "id": "c2",
            "first_name": "Mehmet",
            "last_name": "Demir",
            "cash": "120.25",
            "basket": {"id": "b2", "products": [], "total": 0}
        }
    ]"#;

    #[test]
    fn loads_customers_from_a_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DOCUMENT.as_bytes()).unwrap();

        let source = JsonFileSource::new(file.path());
        let customers = source.load().unwrap();

        assert_eq!(customers.len(), 2);
        assert_eq!(customers[0].basket.products[0].price, dec!(25.5));
        assert_eq!(customers[1].cash, dec!(120.25));
        assert!(source.describe().starts_with("json file "));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonFileSource::new(dir.path().join("absent.json"));

        match source.load() {
            Err(StoreError::Io { path, .. }) => assert!(path.ends_with("absent.json")),
            other => panic!("expected an Io error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let source = JsonStrSource::new(r#"[{"id": "c1"}]"#);
        assert!(matches!(source.load(), Err(StoreError::Parse(_))));
    }

    #[test]
    fn empty_array_is_a_valid_dataset() {
        let source = JsonStrSource::new("[]");
        assert!(source.load().unwrap().is_empty());
    }
}
