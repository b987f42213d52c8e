//! Text ingestion.

pub mod csv;

pub use self::csv::{read_csv, read_csv_path, read_csv_with_config};
