//! Row batches exchanged between tables and their consumers.

use crate::column::{Column, ColumnType};
use crate::dataframe::DataFrame;
use crate::error::{Error, Result};

/// Name and type of one column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub data_type: ColumnType,
    pub nullable: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, data_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            data_type,
            nullable: true,
        }
    }
}

/// Ordered column descriptions of a table or batch
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Schema {
    pub fields: Vec<Field>,
}

impl Schema {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Schema describing `columns` in order
    pub fn of(columns: &[Column]) -> Self {
        Self::new(
            columns
                .iter()
                .map(|c| Field::new(c.name(), c.column_type()))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field(&self, index: usize) -> Option<&Field> {
        self.fields.get(index)
    }

    /// Position of the first field called `name`
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    pub fn names(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.name.clone()).collect()
    }
}

/// Equal-length columns with their schema
#[derive(Debug, Clone)]
pub struct RecordBatch {
    schema: Schema,
    columns: Vec<Column>,
    num_rows: usize,
}

impl RecordBatch {
    /// Builds a batch; every column must have the same length
    pub fn try_new(columns: Vec<Column>) -> Result<Self> {
        let num_rows = columns.first().map(Column::len).unwrap_or(0);
        if let Some(bad) = columns.iter().find(|c| c.len() != num_rows) {
            return Err(Error::LengthMismatch {
                expected: num_rows,
                actual: bad.len(),
            });
        }

        Ok(Self {
            schema: Schema::of(&columns),
            columns,
            num_rows,
        })
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn num_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn into_columns(self) -> Vec<Column> {
        self.columns
    }

    /// Places batches side by side; row counts must agree.
    ///
    /// Batches without columns contribute nothing.
    pub fn merge(batches: &[RecordBatch]) -> Result<RecordBatch> {
        if batches.is_empty() {
            return Err(Error::ConstructionError(
                "no record batches to merge".to_string(),
            ));
        }

        let mut columns = Vec::new();
        let mut rows: Option<usize> = None;
        for batch in batches.iter().filter(|b| b.num_cols() > 0) {
            match rows {
                Some(expected) if expected != batch.num_rows => {
                    return Err(Error::LengthMismatch {
                        expected,
                        actual: batch.num_rows,
                    });
                }
                _ => rows = Some(batch.num_rows),
            }
            columns.extend(batch.columns.iter().cloned());
        }

        RecordBatch::try_new(columns)
    }
}

impl DataFrame {
    /// Stacks record batches vertically.
    ///
    /// Every batch must share the first batch's schema. Null rows stay null.
    pub fn from_records(batches: &[RecordBatch]) -> Result<DataFrame> {
        let first = batches
            .first()
            .ok_or_else(|| Error::ConstructionError("no record batches".to_string()))?;

        for (i, batch) in batches.iter().enumerate().skip(1) {
            if batch.schema != first.schema {
                return Err(Error::SchemaMismatch(format!(
                    "batch {} has fields {:?}, expected {:?}",
                    i,
                    batch.schema.names(),
                    first.schema.names()
                )));
            }
        }

        let mut columns = Vec::with_capacity(first.num_cols());
        for field in 0..first.num_cols() {
            let parts: Vec<Column> = batches
                .iter()
                .map(|b| b.columns[field].clone())
                .collect();
            columns.push(Column::concat(&parts)?);
        }

        log::debug!(
            "stacked {} record batches into {} rows",
            batches.len(),
            columns.first().map(Column::len).unwrap_or(0)
        );
        DataFrame::from_series(columns)
    }

    /// The whole table as one batch sharing its storage
    pub fn to_record_batch(&self) -> RecordBatch {
        RecordBatch {
            schema: self.schema(),
            columns: self.columns().to_vec(),
            num_rows: self.num_rows(),
        }
    }

    /// Row `index` as a one-row batch; columns are zero-copy slices
    pub fn record(&self, index: usize) -> Result<RecordBatch> {
        let columns = self
            .columns()
            .iter()
            .map(|c| c.truncate(index, index + 1))
            .collect::<Result<Vec<_>>>()?;
        RecordBatch::try_new(columns)
    }

    /// `n` all-null rows with this table's schema
    pub fn empty_record(&self, n: usize) -> RecordBatch {
        let columns: Vec<Column> = self.columns().iter().map(|c| c.empty(n)).collect();
        RecordBatch {
            schema: self.schema(),
            columns,
            num_rows: n,
        }
    }

    /// This table followed by `batches`
    pub fn append_records(&self, batches: &[RecordBatch]) -> Result<DataFrame> {
        let mut all = Vec::with_capacity(batches.len() + 1);
        all.push(self.to_record_batch());
        all.extend(batches.iter().cloned());
        DataFrame::from_records(&all)
    }

    /// Maps every row through `f` and stacks the results.
    ///
    /// A table without rows is returned unchanged.
    pub fn apply_to_records<F>(&self, mut f: F) -> Result<DataFrame>
    where
        F: FnMut(&RecordBatch) -> Result<RecordBatch>,
    {
        if self.num_rows() == 0 {
            return Ok(self.clone());
        }

        let mut batches = Vec::with_capacity(self.num_rows());
        for i in 0..self.num_rows() {
            batches.push(f(&self.record(i)?)?);
        }
        DataFrame::from_records(&batches)
    }
}
