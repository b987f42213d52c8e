use crate::column::Column;
use crate::config::EngineConfig;
use crate::dataframe::{DataFrame, RecordBatch, Schema};
use crate::error::{Error, Result};

/// Columnar table access shared by tables and record batches
pub trait Table {
    fn schema(&self) -> Schema;

    fn num_rows(&self) -> usize;

    fn num_cols(&self) -> usize;

    fn column(&self, index: usize) -> Result<&Column>;
}

impl Table for DataFrame {
    fn schema(&self) -> Schema {
        DataFrame::schema(self)
    }

    fn num_rows(&self) -> usize {
        DataFrame::num_rows(self)
    }

    fn num_cols(&self) -> usize {
        DataFrame::num_cols(self)
    }

    fn column(&self, index: usize) -> Result<&Column> {
        DataFrame::column(self, index)
    }
}

impl Table for RecordBatch {
    fn schema(&self) -> Schema {
        RecordBatch::schema(self).clone()
    }

    fn num_rows(&self) -> usize {
        RecordBatch::num_rows(self)
    }

    fn num_cols(&self) -> usize {
        RecordBatch::num_cols(self)
    }

    fn column(&self, index: usize) -> Result<&Column> {
        RecordBatch::column(self, index).ok_or(Error::IndexOutOfBounds {
            index,
            size: self.num_cols(),
        })
    }
}

/// Re-segments a table into record batches of at most `batch_size` rows.
///
/// Batches are zero-copy slices of the table's columns.
pub struct TableReader<'a, T: Table + ?Sized> {
    table: &'a T,
    batch_size: usize,
    offset: usize,
}

impl<'a, T: Table + ?Sized> TableReader<'a, T> {
    pub fn new(table: &'a T, batch_size: usize) -> Result<Self> {
        if batch_size == 0 {
            return Err(Error::ConstructionError(
                "batch size must be positive".to_string(),
            ));
        }
        Ok(Self {
            table,
            batch_size,
            offset: 0,
        })
    }

    /// Reader using the configured batch size
    pub fn with_config(table: &'a T, config: &EngineConfig) -> Result<Self> {
        Self::new(table, config.batch_size)
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    fn read_batch(&self, start: usize, end: usize) -> Result<RecordBatch> {
        let columns = (0..self.table.num_cols())
            .map(|i| self.table.column(i)?.truncate(start, end))
            .collect::<Result<Vec<_>>>()?;
        RecordBatch::try_new(columns)
    }
}

impl<T: Table + ?Sized> Iterator for TableReader<'_, T> {
    type Item = Result<RecordBatch>;

    fn next(&mut self) -> Option<Self::Item> {
        let rows = self.table.num_rows();
        if self.offset >= rows {
            return None;
        }

        let end = (self.offset + self.batch_size).min(rows);
        let batch = self.read_batch(self.offset, end);
        log::trace!("table reader batch rows {}..{}", self.offset, end);
        self.offset = end;
        Some(batch)
    }
}
