use crate::column::Column;
use crate::dataframe::DataFrame;
use crate::error::{Error, Result};

impl DataFrame {
    fn check_same_dims(&self, other: &DataFrame) -> Result<()> {
        if self.dims() != other.dims() {
            return Err(Error::ShapeMismatch {
                left: self.dims(),
                right: other.dims(),
            });
        }
        Ok(())
    }

    fn zip_columns<F>(&self, other: &DataFrame, f: F) -> Result<DataFrame>
    where
        F: Fn(&Column, &Column) -> Result<Column>,
    {
        self.check_same_dims(other)?;
        let columns = self
            .columns()
            .iter()
            .zip(other.columns())
            .map(|(a, b)| f(a, b))
            .collect::<Result<Vec<_>>>()?;
        Ok(DataFrame::from_parts(columns))
    }

    /// Columnwise sum of two tables with equal dimensions
    pub fn add(&self, other: &DataFrame) -> Result<DataFrame> {
        self.zip_columns(other, |a, b| a.add(b))
    }

    /// Columnwise difference of two tables with equal dimensions
    pub fn subtract(&self, other: &DataFrame) -> Result<DataFrame> {
        self.zip_columns(other, |a, b| a.subtract(b))
    }

    pub fn abs(&self) -> Result<DataFrame> {
        self.map_columns(Column::abs)
    }

    pub fn square(&self) -> Result<DataFrame> {
        self.map_columns(Column::square)
    }

    pub fn sqrt(&self) -> Result<DataFrame> {
        self.map_columns(Column::sqrt)
    }

    /// Sum of every column sum
    pub fn sum(&self) -> Result<f64> {
        self.columns().iter().map(Column::sum).sum()
    }

    /// Mean of the column means; NaN without columns
    pub fn mean(&self) -> Result<f64> {
        let total: f64 = self
            .columns()
            .iter()
            .map(Column::mean)
            .sum::<Result<f64>>()?;
        Ok(total / self.num_cols() as f64)
    }

    /// Smallest column minimum; the first column wins ties
    pub fn min(&self) -> Result<f64> {
        self.fold_extreme("min", Column::min, |candidate, best| candidate < best)
    }

    /// Largest column maximum; the first column wins ties
    pub fn max(&self) -> Result<f64> {
        self.fold_extreme("max", Column::max, |candidate, best| candidate > best)
    }

    fn fold_extreme<A, B>(&self, op: &str, aggregate: A, better: B) -> Result<f64>
    where
        A: Fn(&Column) -> Result<f64>,
        B: Fn(f64, f64) -> bool,
    {
        let mut best: Option<f64> = None;
        for column in self.columns() {
            let value = aggregate(column)?;
            best = match best {
                Some(b) if !better(value, b) => Some(b),
                _ => Some(value),
            };
        }
        best.ok_or_else(|| Error::EmptyColumn(format!("{} of a table without columns", op)))
    }

    /// Dot product of rows `i` and `j` across all columns
    pub fn dot(&self, i: usize, j: usize) -> Result<f64> {
        let mut acc = 0.0;
        for column in self.columns() {
            acc += column.at_vec(i)? * column.at_vec(j)?;
        }
        Ok(acc)
    }

    /// Euclidean norm of row `i`
    pub fn row_norm(&self, i: usize) -> Result<f64> {
        Ok(self.dot(i, i)?.sqrt())
    }

    /// Square Float64 table of pairwise row cosine similarities.
    ///
    /// Column `i` is named `"i"` and holds the similarity of row `i` with
    /// every row. Pairs involving a zero-norm row are 0.
    pub fn cosine_similarity(&self) -> Result<DataFrame> {
        let n = self.num_rows();
        let norms = (0..n)
            .map(|i| self.row_norm(i))
            .collect::<Result<Vec<f64>>>()?;

        let mut columns = Vec::with_capacity(n);
        for i in 0..n {
            let mut values = Vec::with_capacity(n);
            for j in 0..n {
                let denom = norms[i] * norms[j];
                if denom == 0.0 {
                    values.push(0.0);
                } else {
                    values.push(self.dot(i, j)? / denom);
                }
            }
            columns.push(Column::new_float64(i.to_string(), values));
        }

        Ok(DataFrame::from_parts(columns))
    }
}
