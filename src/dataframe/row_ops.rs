use std::collections::BTreeSet;

use crate::column::Column;
use crate::dataframe::DataFrame;
use crate::error::Result;

impl DataFrame {
    /// Keeps the listed rows in every column; indices are sorted first
    pub fn select_rows_by_indices(&self, indices: &[usize]) -> Result<DataFrame> {
        self.map_columns(|c| c.select_indices(indices))
    }

    /// Removes the listed rows from every column
    pub fn drop_rows_by_indices(&self, indices: &[usize]) -> Result<DataFrame> {
        self.map_columns(|c| c.drop_indices(indices))
    }

    /// Drops every row that is null in any of the listed columns
    pub fn drop_na_rows_by_series_indices(&self, columns: &[usize]) -> Result<DataFrame> {
        let mut rows = BTreeSet::new();
        for &index in columns {
            rows.extend(self.column(index)?.na_indices());
        }
        let rows: Vec<usize> = rows.into_iter().collect();
        self.drop_rows_by_indices(&rows)
    }

    /// Zero-copy view of the first `min(n, rows)` rows
    pub fn head(&self, n: usize) -> DataFrame {
        DataFrame::from_parts(self.columns().iter().map(|c| c.head(n)).collect())
    }

    /// Row `index` as a Float64 column named after the row number
    pub fn row_to_series(&self, index: usize) -> Result<Column> {
        let values = self
            .columns()
            .iter()
            .map(|c| c.at_vec(index))
            .collect::<Result<Vec<f64>>>()?;
        Ok(Column::new_float64(index.to_string(), values))
    }

    pub(crate) fn map_columns<F>(&self, f: F) -> Result<DataFrame>
    where
        F: Fn(&Column) -> Result<Column>,
    {
        let columns = self
            .columns()
            .iter()
            .map(f)
            .collect::<Result<Vec<_>>>()?;
        Ok(DataFrame::from_parts(columns))
    }
}
