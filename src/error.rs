use thiserror::Error;

use crate::column::ColumnType;

/// Errors raised by column, table, join and pivot operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("construction error: {0}")]
    ConstructionError(String),

    #[error("schema mismatch: {0}")]
    SchemaMismatch(String),

    #[error("length mismatch: expected {expected}, actual {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("shape mismatch: left {left:?}, right {right:?}")]
    ShapeMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("type mismatch: expected {expected:?}, found {found:?}")]
    TypeMismatch {
        expected: ColumnType,
        found: ColumnType,
    },

    #[error("unsupported type: {0}")]
    UnsupportedType(String),

    #[error("column not found: {0}")]
    NameNotFound(String),

    #[error("duplicate column name: {0}")]
    DuplicateName(String),

    #[error("index column is not unique: {0}")]
    NonUniqueIndex(String),

    #[error("value not found in index: {0}")]
    IndexValueNotFound(String),

    #[error("parse error: {0}")]
    ParseError(String),

    #[error("index out of bounds: index {index}, size {size}")]
    IndexOutOfBounds { index: usize, size: usize },

    #[error("empty column: {0}")]
    EmptyColumn(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error")]
    Io(#[source] std::io::Error),

    #[error("CSV error")]
    Csv(#[source] csv::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(err.to_string())
    }
}
