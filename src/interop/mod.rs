//! Adapter traits for consumers that expect matrices, vectors or columnar tables.

pub mod matrix;
pub mod table;

pub use self::matrix::{Matrix, Transpose, Vector};
pub use self::table::{Table, TableReader};
