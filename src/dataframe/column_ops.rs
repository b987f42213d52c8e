use std::collections::{HashMap, HashSet};

use crate::column::{Column, ColumnType};
use crate::dataframe::DataFrame;
use crate::error::{Error, Result};

impl DataFrame {
    /// Keeps the named columns in table order; unknown names are ignored
    pub fn select_columns_by_names(&self, names: &[&str]) -> DataFrame {
        let wanted: HashSet<&str> = names.iter().copied().collect();
        let columns = self
            .columns()
            .iter()
            .filter(|c| wanted.contains(c.name()))
            .cloned()
            .collect();
        DataFrame::from_parts(columns)
    }

    /// Removes the named columns; unknown names are ignored
    pub fn drop_columns_by_names(&self, names: &[&str]) -> DataFrame {
        let dropped: HashSet<&str> = names.iter().copied().collect();
        let columns = self
            .columns()
            .iter()
            .filter(|c| !dropped.contains(c.name()))
            .cloned()
            .collect();
        DataFrame::from_parts(columns)
    }

    /// Removes columns by position
    pub fn drop_columns_by_indices(&self, indices: &[usize]) -> Result<DataFrame> {
        let mut sorted = indices.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        if let Some(&last) = sorted.last() {
            if last >= self.num_cols() {
                return Err(Error::IndexOutOfBounds {
                    index: last,
                    size: self.num_cols(),
                });
            }
        }

        let columns = self
            .columns()
            .iter()
            .enumerate()
            .filter(|(i, _)| sorted.binary_search(i).is_err())
            .map(|(_, c)| c.clone())
            .collect();
        Ok(DataFrame::from_parts(columns))
    }

    /// Adds columns after the existing ones.
    ///
    /// New columns must match the row count (a table without columns takes
    /// the first new column's length) and must not reuse a name.
    pub fn append_series(&self, new_columns: Vec<Column>) -> Result<DataFrame> {
        let expected = if self.is_empty() {
            new_columns.first().map(Column::len).unwrap_or(0)
        } else {
            self.num_rows()
        };

        let mut names: HashSet<String> = self.headers().into_iter().collect();
        for column in &new_columns {
            if column.len() != expected {
                return Err(Error::LengthMismatch {
                    expected,
                    actual: column.len(),
                });
            }
            if !names.insert(column.name().to_string()) {
                return Err(Error::DuplicateName(column.name().to_string()));
            }
        }

        let mut columns = self.columns().to_vec();
        columns.extend(new_columns);
        Ok(DataFrame::from_parts(columns))
    }

    /// Replaces the first column with the same name, or appends it
    pub fn set_series(&self, column: Column) -> Result<DataFrame> {
        if !self.is_empty() && column.len() != self.num_rows() {
            return Err(Error::LengthMismatch {
                expected: self.num_rows(),
                actual: column.len(),
            });
        }

        let mut columns = self.columns().to_vec();
        match self.column_index(column.name()) {
            Some(i) => columns[i] = column,
            None => columns.push(column),
        }
        Ok(DataFrame::from_parts(columns))
    }

    /// Renames the first column called `from`
    pub fn rename_column(&self, from: &str, to: &str) -> Result<DataFrame> {
        let index = self
            .column_index(from)
            .ok_or_else(|| Error::NameNotFound(from.to_string()))?;
        let mut columns = self.columns().to_vec();
        columns[index] = columns[index].rename(to);
        Ok(DataFrame::from_parts(columns))
    }

    /// Casts the named columns; other columns are shared unchanged
    pub fn cast(&self, types: &HashMap<String, ColumnType>) -> Result<DataFrame> {
        if let Some(missing) = types.keys().find(|name| !self.has_column(name)) {
            return Err(Error::NameNotFound(missing.clone()));
        }

        let columns = self
            .columns()
            .iter()
            .map(|c| match types.get(c.name()) {
                Some(&ty) => c.cast(ty),
                None => Ok(c.clone()),
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(DataFrame::from_parts(columns))
    }

    /// Maps every column through `f`; results must share one length
    pub fn apply_to_series<F>(&self, f: F) -> Result<DataFrame>
    where
        F: Fn(&Column) -> Result<Column>,
    {
        let columns = self
            .columns()
            .iter()
            .map(f)
            .collect::<Result<Vec<_>>>()?;
        DataFrame::from_series(columns)
    }
}
