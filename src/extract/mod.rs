//! Field extraction from JSON documents.
//!
//! Backs the `get_from_json` binary: load a JSON file whose top level is an
//! object, then look up a single field or walk every `key=value` pair.

pub mod value;

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

/// Errors that can occur while loading a JSON document.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path} as JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{path} does not contain a JSON object at the top level")]
    NotAnObject { path: PathBuf },
}

/// A loaded JSON document with a string-keyed object at the top level.
///
/// The document is immutable once loaded; fields iterate in the order they
/// appear in the file.
#[derive(Debug)]
pub struct Document {
    fields: Map<String, Value>,
}

impl Document {
    /// Reads and parses `path`.
    ///
    /// Well-formed JSON whose top level is not an object is rejected: the
    /// key/value contract has no meaning for a bare array or scalar.
    pub fn load(path: &Path) -> Result<Self, ExtractError> {
        let raw = fs::read_to_string(path).map_err(|source| ExtractError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let parsed: Value = serde_json::from_str(&raw).map_err(|source| ExtractError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        match parsed {
            Value::Object(fields) => {
                tracing::debug!(path = %path.display(), fields = fields.len(), "loaded document");
                Ok(Self { fields })
            }
            _ => Err(ExtractError::NotAnObject {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Looks up a single field. An absent key is `None`, not an error.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Iterates all fields in document order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}
