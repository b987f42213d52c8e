use crate::column::common::{Column, ColumnType};
use crate::column::numeric::NumericValue;
use crate::column::typed_column::TypedColumn;
use crate::column::value::ColumnValue;
use crate::error::Result;

fn numeric_to<T>(col: &TypedColumn<T>, target: ColumnType) -> Column
where
    T: NumericValue,
{
    match target {
        ColumnType::Int32 => Column::from(col.convert::<i32>()),
        ColumnType::Int64 => Column::from(col.convert::<i64>()),
        ColumnType::Float32 => Column::from(col.convert::<f32>()),
        ColumnType::Float64 => Column::from(col.convert::<f64>()),
        ColumnType::String => Column::from(col.map_values(|v| v.to_canonical_string())),
    }
}

fn parse_to<T: ColumnValue>(col: &TypedColumn<String>) -> Result<Column> {
    Ok(Column::from(col.try_map_values(|s| T::parse_str(s))?))
}

impl Column {
    /// Converts the column to `target`.
    ///
    /// Casting to the current type shares storage. String columns are parsed
    /// row by row, skipping null rows; the first failure fails the whole cast.
    pub fn cast(&self, target: ColumnType) -> Result<Column> {
        if self.column_type() == target {
            return Ok(self.clone());
        }

        match self {
            Column::Int32(col) => Ok(numeric_to(col, target)),
            Column::Int64(col) => Ok(numeric_to(col, target)),
            Column::Float32(col) => Ok(numeric_to(col, target)),
            Column::Float64(col) => Ok(numeric_to(col, target)),
            Column::String(col) => dispatch_type!(target, T => parse_to::<T>(col)),
        }
    }
}
