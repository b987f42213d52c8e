use std::fmt::{self, Debug, Display};

use crate::column::{Column, DataValue};
use crate::config::EngineConfig;
use crate::dataframe::record::Schema;
use crate::error::{Error, Result};

/// Rows shown by `Debug` and `Display`
pub const DEFAULT_DISPLAY_ROWS: usize = 10;

/// Ordered collection of equal-length columns.
///
/// Column names are not forced to be unique; name lookups return the first
/// match. Cloning copies column handles only, never values.
#[derive(Clone, Default)]
pub struct DataFrame {
    columns: Vec<Column>,
}

impl DataFrame {
    /// Creates a table without columns
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
        }
    }

    /// Creates a table from columns of equal length
    pub fn from_series(columns: Vec<Column>) -> Result<Self> {
        if let Some(first) = columns.first() {
            let expected = first.len();
            if let Some(bad) = columns.iter().find(|c| c.len() != expected) {
                return Err(Error::LengthMismatch {
                    expected,
                    actual: bad.len(),
                });
            }
        }
        Ok(Self { columns })
    }

    /// Wraps columns already known to share one length
    pub(crate) fn from_parts(columns: Vec<Column>) -> Self {
        debug_assert!(columns.windows(2).all(|w| w[0].len() == w[1].len()));
        Self { columns }
    }

    /// `(row_count, column_count)`
    pub fn dims(&self) -> (usize, usize) {
        (self.num_rows(), self.num_cols())
    }

    pub fn num_rows(&self) -> usize {
        self.columns.first().map(Column::len).unwrap_or(0)
    }

    pub fn num_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn headers(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name().to_string()).collect()
    }

    pub fn schema(&self) -> Schema {
        Schema::of(&self.columns)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn into_columns(self) -> Vec<Column> {
        self.columns
    }

    pub fn column(&self, index: usize) -> Result<&Column> {
        self.columns.get(index).ok_or(Error::IndexOutOfBounds {
            index,
            size: self.columns.len(),
        })
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Position of the first column called `name`
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name() == name)
    }

    pub fn column_by_name(&self, name: &str) -> Result<&Column> {
        self.column_index(name)
            .map(|i| &self.columns[i])
            .ok_or_else(|| Error::NameNotFound(name.to_string()))
    }

    /// Cell at `(row, col)`, `None` when the row is null
    pub fn value(&self, row: usize, col: usize) -> Result<Option<DataValue>> {
        self.column(col)?.get(row)
    }

    /// Tabular text showing at most `max_rows` rows
    pub fn render(&self, max_rows: usize) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_table(&mut out, max_rows);
        out
    }

    /// Tabular text showing at most `config.display_rows` rows
    pub fn render_with(&self, config: &EngineConfig) -> String {
        self.render(config.display_rows)
    }

    fn write_table<W: fmt::Write>(&self, f: &mut W, max_rows: usize) -> fmt::Result {
        if self.columns.is_empty() {
            return write!(f, "DataFrame (0 rows x 0 columns)");
        }

        let rows = self.num_rows();
        writeln!(f, "DataFrame ({} rows x {} columns):", rows, self.columns.len())?;

        write!(f, "{:<5} |", "idx")?;
        for col in &self.columns {
            write!(f, " {:<15} |", col.name())?;
        }
        writeln!(f)?;

        write!(f, "{:-<5}-+", "")?;
        for _ in &self.columns {
            write!(f, "-{:-<15}-+", "")?;
        }
        writeln!(f)?;

        let shown = rows.min(max_rows);
        for i in 0..shown {
            write!(f, "{:<5} |", i)?;
            for col in &self.columns {
                write!(f, " {:<15} |", col.format_cell(i))?;
            }
            writeln!(f)?;
        }

        if rows > shown {
            writeln!(f, "... ({} more rows)", rows - shown)?;
        }
        Ok(())
    }
}

impl Debug for DataFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_table(f, DEFAULT_DISPLAY_ROWS)
    }
}

impl Display for DataFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_table(f, DEFAULT_DISPLAY_ROWS)
    }
}
