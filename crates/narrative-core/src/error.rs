//! Error types for the narrative engine.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Row {index} is not a key/value record (found {found})")]
    NotRowShaped { index: usize, found: &'static str },

    #[error("Row {index}: column '{column}' holds a nested value, expected a scalar")]
    NonScalarField { index: usize, column: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Short name of a JSON value's kind, used in structural errors
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
