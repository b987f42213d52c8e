use crate::column::Column;
use crate::dataframe::DataFrame;
use crate::error::{Error, Result};

/// Read access to a two-dimensional grid of numbers
pub trait Matrix {
    /// `(rows, columns)`
    fn dims(&self) -> (usize, usize);

    /// Element at row `i`, column `j`
    fn at(&self, i: usize, j: usize) -> Result<f64>;

    /// Transposed view; nothing is copied
    fn t(&self) -> Transpose<'_, Self>
    where
        Self: Sized,
    {
        Transpose { inner: self }
    }

    /// Every row, materialized
    fn to_rows(&self) -> Result<Vec<Vec<f64>>> {
        let (rows, cols) = self.dims();
        (0..rows)
            .map(|i| (0..cols).map(|j| self.at(i, j)).collect())
            .collect()
    }
}

/// Read access to a sequence of numbers
pub trait Vector {
    fn len(&self) -> usize;

    fn at_vec(&self, i: usize) -> Result<f64>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Transposed view over another matrix
#[derive(Debug, Clone, Copy)]
pub struct Transpose<'a, M: Matrix> {
    inner: &'a M,
}

impl<'a, M: Matrix> Transpose<'a, M> {
    /// The matrix being viewed
    pub fn inner(&self) -> &'a M {
        self.inner
    }
}

impl<M: Matrix> Matrix for Transpose<'_, M> {
    fn dims(&self) -> (usize, usize) {
        let (rows, cols) = self.inner.dims();
        (cols, rows)
    }

    fn at(&self, i: usize, j: usize) -> Result<f64> {
        self.inner.at(j, i)
    }
}

// Cells are read through `Column::at_vec`, so string cells must hold numbers.
impl Matrix for DataFrame {
    fn dims(&self) -> (usize, usize) {
        DataFrame::dims(self)
    }

    fn at(&self, i: usize, j: usize) -> Result<f64> {
        self.column(j)?.at_vec(i)
    }
}

/// A column is an `n x 1` matrix.
impl Matrix for Column {
    fn dims(&self) -> (usize, usize) {
        (Column::len(self), 1)
    }

    fn at(&self, i: usize, j: usize) -> Result<f64> {
        if j != 0 {
            return Err(Error::IndexOutOfBounds { index: j, size: 1 });
        }
        Column::at_vec(self, i)
    }
}

impl Vector for Column {
    fn len(&self) -> usize {
        Column::len(self)
    }

    fn at_vec(&self, i: usize) -> Result<f64> {
        Column::at_vec(self, i)
    }
}
