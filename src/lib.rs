//! In-memory columnar tables.
//!
//! Typed columns with null tracking and shared storage, composed into
//! tables that support arithmetic, casting, nested-loop joins and pivoting.

#[macro_use]
pub mod column;
pub mod config;
pub mod dataframe;
pub mod error;
pub mod interop;
pub mod io;
pub mod pivot;

// Re-export commonly used types
pub use column::{
    AnyValues, BitMask, Column, ColumnType, ColumnValue, Condition, DataValue, NumericValue,
    TypedColumn,
};
pub use config::{CsvOptions, EngineConfig};
pub use dataframe::{DataFrame, Field, RecordBatch, Schema};
pub use error::{Error, Result};
pub use interop::{Matrix, Table, TableReader, Transpose, Vector};
pub use io::{read_csv, read_csv_path, read_csv_with_config};
pub use pivot::pivot;

// Export version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
