//! Tables of equal-length columns and the operations over them.

mod algebra;
mod column_ops;
mod core;
pub mod join;
pub mod record;
mod row_ops;

pub use self::core::{DataFrame, DEFAULT_DISPLAY_ROWS};
pub use self::record::{Field, RecordBatch, Schema};
