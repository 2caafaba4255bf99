use std::fmt;
use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

/// Published video game sales dataset.
pub const DEFAULT_DATA_URL: &str =
    "https://cdn.freecodecamp.org/testable-projects-fcc/data/tree_map/video-game-sales-data.json";

/// Failures while obtaining or interpreting the sales dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to fetch dataset: {0}")]
    Http(#[from] reqwest::Error),
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("dataset is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("node '{node}' is missing required field '{field}'")]
    MissingField { node: String, field: &'static str },
    #[error("node '{node}' has invalid value '{value}'")]
    InvalidValue { node: String, value: String },
    #[error("dataset has no categories")]
    EmptyDataset,
}

/// Where the dataset comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Url(String),
    File(PathBuf),
}

impl DataSource {
    /// `http://` and `https://` strings are URLs, anything else is a file path.
    pub fn parse(s: &str) -> Self {
        if s.starts_with("http://") || s.starts_with("https://") {
            DataSource::Url(s.to_string())
        } else {
            DataSource::File(PathBuf::from(s))
        }
    }

    /// Read the raw JSON text. One attempt, no retry.
    pub fn read_to_string(&self) -> Result<String, LoadError> {
        match self {
            DataSource::Url(url) => {
                tracing::info!("Fetching dataset from {}", url);
                let response = reqwest::blocking::get(url)?.error_for_status()?;
                Ok(response.text()?)
            }
            DataSource::File(path) => {
                tracing::info!("Reading dataset from {}", path.display());
                Ok(std::fs::read_to_string(path)?)
            }
        }
    }
}

impl Default for DataSource {
    fn default() -> Self {
        DataSource::Url(DEFAULT_DATA_URL.to_string())
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Url(url) => f.write_str(url),
            DataSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// One node of the dataset exactly as it appears in JSON.
#[derive(Debug, Clone, Deserialize)]
pub struct RawNode {
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub value: Option<RawValue>,
    #[serde(default)]
    pub children: Option<Vec<RawNode>>,
}

/// Sales figures appear both as JSON numbers and as numeric strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl RawValue {
    /// Text of the value as it should be shown to users.
    pub fn text(&self) -> String {
        match self {
            RawValue::Number(n) => format!("{}", n),
            RawValue::Text(s) => s.clone(),
        }
    }

    /// Parse into a finite, non-negative number.
    pub fn parse(&self, node: &str) -> Result<f64, LoadError> {
        let parsed = match self {
            RawValue::Number(n) => Some(*n),
            RawValue::Text(s) => s.trim().parse::<f64>().ok(),
        };
        match parsed {
            Some(v) if v.is_finite() && v >= 0.0 => Ok(v),
            _ => Err(LoadError::InvalidValue {
                node: node.to_string(),
                value: self.text(),
            }),
        }
    }
}

/// Parse dataset JSON text.
pub fn parse_json(text: &str) -> Result<RawNode, LoadError> {
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_parsing_distinguishes_urls() {
        assert_eq!(
            DataSource::parse("https://example.com/data.json"),
            DataSource::Url("https://example.com/data.json".into())
        );
        assert_eq!(
            DataSource::parse("data/sales.json"),
            DataSource::File(PathBuf::from("data/sales.json"))
        );
    }

    #[test]
    fn values_accept_numbers_and_numeric_strings() {
        let raw = parse_json(
            r#"{"name":"x","children":[
                {"name":"a","category":"Wii","value":"82.53"},
                {"name":"b","category":"Wii","value":12}
            ]}"#,
        )
        .unwrap();
        let children = raw.children.unwrap();
        assert_eq!(children[0].value.as_ref().unwrap().parse("a").unwrap(), 82.53);
        assert_eq!(children[0].value.as_ref().unwrap().text(), "82.53");
        assert_eq!(children[1].value.as_ref().unwrap().parse("b").unwrap(), 12.0);
    }

    #[test]
    fn rejects_non_numeric_and_negative_values() {
        let bad = RawValue::Text("lots".into());
        assert!(matches!(bad.parse("g"), Err(LoadError::InvalidValue { .. })));
        assert!(RawValue::Number(-1.0).parse("g").is_err());
    }

    #[test]
    fn reads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, r#"{"name":"x","children":[]}"#).unwrap();
        let text = DataSource::File(path).read_to_string().unwrap();
        assert!(parse_json(&text).is_ok());
    }
}
