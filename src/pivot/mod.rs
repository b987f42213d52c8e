//! Reshapes a long table into a wide one.
//!
//! Distinct values of the index column become rows and distinct values of
//! the columns column become output columns; cells are filled from the
//! values column without aggregation.

use crate::column::{Column, ColumnValue, TypedColumn};
use crate::dataframe::DataFrame;
use crate::error::{Error, Result};

/// Source rows written into one output column, as `(source_row, output_row)`
type Placement = Vec<(usize, usize)>;

fn locate(unique_index: &Column, index_col: &Column, row: usize) -> Result<usize> {
    let needle = index_col.value_at(row)?;
    let positions = unique_index.find_indices(&needle)?;
    match positions.as_slice() {
        [position] => Ok(*position),
        [] => Err(Error::IndexValueNotFound(needle.to_string())),
        _ => Err(Error::NonUniqueIndex(needle.to_string())),
    }
}

/// Builds one output column; rows never written hold the zero value and are null
fn fill_column<T: ColumnValue>(
    values: &TypedColumn<T>,
    name: String,
    rows: usize,
    placement: &Placement,
) -> Result<Column> {
    let mut data = vec![T::default(); rows];
    let mut nulls = vec![true; rows];
    for &(source, target) in placement {
        data[target] = values.value(source)?.clone();
        nulls[target] = values.is_null(source);
    }
    Ok(Column::from(TypedColumn::with_nulls(name, data, &nulls)))
}

/// Pivots `df` so that `index` values become rows and `columns` values become
/// columns holding `values`.
///
/// When several source rows target the same cell, the last one wins.
pub fn pivot(df: &DataFrame, index: &str, columns: &str, values: &str) -> Result<DataFrame> {
    let index_col = df.column_by_name(index)?;
    let columns_col = df.column_by_name(columns)?;
    let values_col = df.column_by_name(values)?;

    let unique_index = index_col.unique();
    let unique_columns = columns_col.unique();
    let rows = unique_index.len();

    let mut output = Vec::with_capacity(unique_columns.len() + 1);
    output.push(unique_index.clone());

    for c in 0..unique_columns.len() {
        let key = unique_columns.value_at(c)?;
        let mut placement = Placement::new();
        for source in columns_col.find_indices(&key)? {
            placement.push((source, locate(&unique_index, index_col, source)?));
        }

        let name = key.to_string();
        let column = dispatch!(values_col, vals => fill_column(vals, name, rows, &placement)?);
        output.push(column);
    }

    log::debug!(
        "pivot {}/{}/{}: {} rows -> {} x {}",
        index,
        columns,
        values,
        df.num_rows(),
        rows,
        output.len()
    );
    DataFrame::from_series(output)
}

impl DataFrame {
    /// See [`pivot`]
    pub fn pivot(&self, index: &str, columns: &str, values: &str) -> Result<DataFrame> {
        pivot(self, index, columns, values)
    }
}
