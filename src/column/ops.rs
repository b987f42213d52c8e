use std::fmt;

use num_traits::AsPrimitive;

use crate::column::common::{Column, ColumnType};
use crate::column::numeric::NumericValue;
use crate::column::typed_column::TypedColumn;
use crate::column::value::{AnyValues, ColumnValue, DataValue};
use crate::error::{Error, Result};

/// Row predicate used by [`Column::where_any`]
pub type Condition = Box<dyn Fn(&DataValue) -> bool>;

fn coerce_values<T: ColumnValue>(values: &[DataValue]) -> Vec<T> {
    values
        .iter()
        .map(|v| T::from_data_value(v).unwrap_or_default())
        .collect()
}

fn coerce_options<T: ColumnValue>(name: String, values: &[Option<DataValue>]) -> TypedColumn<T> {
    let options = values
        .iter()
        .map(|v| v.as_ref().map(|v| T::from_data_value(v).unwrap_or_default()))
        .collect();
    TypedColumn::from_options(name, options)
}

fn find_in<T: ColumnValue>(col: &TypedColumn<T>, needle: &DataValue) -> Result<Vec<usize>> {
    let target = match T::from_data_value(needle) {
        Some(v) => v,
        None => match needle {
            DataValue::String(s) => T::parse_str(s)?,
            other => {
                return Err(Error::TypeMismatch {
                    expected: T::TYPE,
                    found: other.column_type(),
                })
            }
        },
    };
    Ok(col.find(&target))
}

fn map_typed<T, F>(col: &TypedColumn<T>, f: &F) -> Result<Column>
where
    T: ColumnValue,
    F: Fn(DataValue) -> DataValue,
{
    let mapped = col.try_map_values(|v| {
        let out = f(v.clone().into_data_value());
        T::from_data_value(&out).ok_or(Error::TypeMismatch {
            expected: T::TYPE,
            found: out.column_type(),
        })
    })?;
    Ok(Column::from(mapped))
}

fn concat_typed<T: ColumnValue>(first: &TypedColumn<T>, rest: &[Column]) -> Result<Column> {
    let mut parts = Vec::with_capacity(rest.len() + 1);
    parts.push(first);
    for column in rest {
        parts.push(column.typed::<T>()?);
    }
    Ok(Column::from(TypedColumn::concat(&parts)))
}

fn numeric_at<T, U>(col: &TypedColumn<T>, index: usize) -> Result<U>
where
    T: NumericValue + AsPrimitive<U>,
    U: NumericValue,
{
    Ok(<T as AsPrimitive<U>>::as_(*col.value(index)?))
}

impl Column {
    /// Builds a column of any supported element type
    pub fn from_vec<T: ColumnValue>(
        name: impl Into<String>,
        values: Vec<T>,
        valid: Option<Vec<bool>>,
    ) -> Result<Self> {
        Ok(Column::from(TypedColumn::with_validity(name, values, valid)?))
    }

    pub fn new_int32(name: impl Into<String>, values: Vec<i32>) -> Self {
        Column::Int32(TypedColumn::new(name, values))
    }

    pub fn new_int64(name: impl Into<String>, values: Vec<i64>) -> Self {
        Column::Int64(TypedColumn::new(name, values))
    }

    pub fn new_float32(name: impl Into<String>, values: Vec<f32>) -> Self {
        Column::Float32(TypedColumn::new(name, values))
    }

    pub fn new_float64(name: impl Into<String>, values: Vec<f64>) -> Self {
        Column::Float64(TypedColumn::new(name, values))
    }

    pub fn new_string<S: Into<String>>(name: impl Into<String>, values: Vec<S>) -> Self {
        let values = values.into_iter().map(Into::into).collect();
        Column::String(TypedColumn::new(name, values))
    }

    /// Builds a column from optional values; `None` rows are null
    pub fn from_options<T: ColumnValue>(name: impl Into<String>, values: Vec<Option<T>>) -> Self {
        Column::from(TypedColumn::from_options(name, values))
    }

    /// Builds a column from a value sequence of any shape.
    ///
    /// Typed sequences decide the element type themselves. `Mixed` sequences
    /// need `target`: elements of that exact type are kept, anything else
    /// becomes the type's zero value.
    pub fn from_any(
        name: impl Into<String>,
        values: AnyValues,
        target: Option<ColumnType>,
        valid: Option<Vec<bool>>,
    ) -> Result<Self> {
        let name = name.into();
        match values {
            AnyValues::Int32(v) => Self::from_vec(name, v, valid),
            AnyValues::Int64(v) => Self::from_vec(name, v, valid),
            AnyValues::Float32(v) => Self::from_vec(name, v, valid),
            AnyValues::Float64(v) => Self::from_vec(name, v, valid),
            AnyValues::String(v) => Self::from_vec(name, v, valid),
            AnyValues::Mixed(v) => {
                let target = target.ok_or_else(|| {
                    Error::ConstructionError(format!(
                        "column '{}': mixed values need a target type",
                        name
                    ))
                })?;
                dispatch_type!(target, T => Self::from_vec(name, coerce_values::<T>(&v), valid))
            }
        }
    }

    /// Builds a column of type `ty` from optional loosely typed cells.
    ///
    /// `None` becomes a null row; a value of another type becomes the zero value.
    pub fn from_optional_values(
        name: impl Into<String>,
        ty: ColumnType,
        values: &[Option<DataValue>],
    ) -> Self {
        let name = name.into();
        dispatch_type!(ty, T => Column::from(coerce_options::<T>(name, values)))
    }

    /// `n` null rows with this column's name and type
    pub fn empty(&self, n: usize) -> Self {
        dispatch!(self, col => Column::from(col.empty_like(n)))
    }

    /// Raw value at `index` boxed in its native type, regardless of nulls
    pub fn value_at(&self, index: usize) -> Result<DataValue> {
        dispatch!(self, col => col.value(index).map(|v| v.clone().into_data_value()))
    }

    /// Value at `index`, `None` for a null row
    pub fn get(&self, index: usize) -> Result<Option<DataValue>> {
        dispatch!(self, col => col
            .get(index)
            .map(|v| v.map(|v| v.clone().into_data_value())))
    }

    pub fn is_null(&self, index: usize) -> bool {
        dispatch!(self, col => col.is_null(index))
    }

    fn coerce_at<U>(&self, index: usize) -> Result<U>
    where
        U: NumericValue,
        i32: AsPrimitive<U>,
        i64: AsPrimitive<U>,
        f32: AsPrimitive<U>,
        f64: AsPrimitive<U>,
    {
        match self {
            Column::Int32(col) => numeric_at(col, index),
            Column::Int64(col) => numeric_at(col, index),
            Column::Float32(col) => numeric_at(col, index),
            Column::Float64(col) => numeric_at(col, index),
            Column::String(col) => {
                let s = col.value(index)?;
                if s.is_empty() {
                    return Ok(U::default());
                }
                U::parse_str(s)
            }
        }
    }

    pub fn as_int32(&self, index: usize) -> Result<i32> {
        self.coerce_at(index)
    }

    pub fn as_int64(&self, index: usize) -> Result<i64> {
        self.coerce_at(index)
    }

    pub fn as_float32(&self, index: usize) -> Result<f32> {
        self.coerce_at(index)
    }

    pub fn as_float64(&self, index: usize) -> Result<f64> {
        self.coerce_at(index)
    }

    /// Row value as f64; string rows are parsed and empty strings read as 0
    pub fn at_vec(&self, index: usize) -> Result<f64> {
        dispatch!(self, col => col.value(index)?.to_f64_lossy())
    }

    /// Every value in its native type
    pub fn values(&self) -> AnyValues {
        match self {
            Column::Int32(col) => AnyValues::Int32(col.as_slice().to_vec()),
            Column::Int64(col) => AnyValues::Int64(col.as_slice().to_vec()),
            Column::Float32(col) => AnyValues::Float32(col.as_slice().to_vec()),
            Column::Float64(col) => AnyValues::Float64(col.as_slice().to_vec()),
            Column::String(col) => AnyValues::String(col.as_slice().to_vec()),
        }
    }

    /// Every value in its canonical string form
    pub fn string_values(&self) -> Vec<String> {
        dispatch!(self, col => col
            .as_slice()
            .iter()
            .map(|v| v.to_canonical_string())
            .collect())
    }

    pub fn na_indices(&self) -> Vec<usize> {
        dispatch!(self, col => col.na_indices())
    }

    pub fn is_na(&self) -> Vec<bool> {
        dispatch!(self, col => col.is_na())
    }

    pub fn null_count(&self) -> usize {
        dispatch!(self, col => col.null_count())
    }

    pub fn drop_na(&self) -> Self {
        dispatch!(self, col => Column::from(col.drop_na()))
    }

    /// Elementwise sum of two columns of the same type and length
    pub fn add(&self, other: &Column) -> Result<Self> {
        dispatch_numeric_pair!(self, other, "add", (a, b) => Ok(Column::from(a.add(b)?)))
    }

    /// Elementwise difference of two columns of the same type and length
    pub fn subtract(&self, other: &Column) -> Result<Self> {
        dispatch_numeric_pair!(self, other, "subtract", (a, b) => Ok(Column::from(a.subtract(b)?)))
    }

    pub fn dot(&self, other: &Column) -> Result<f64> {
        dispatch_numeric_pair!(self, other, "dot", (a, b) => a.dot(b))
    }

    pub fn sum(&self) -> Result<f64> {
        dispatch_numeric!(self, "sum", col => Ok(col.sum()))
    }

    pub fn mean(&self) -> Result<f64> {
        dispatch_numeric!(self, "mean", col => Ok(col.mean()))
    }

    pub fn min(&self) -> Result<f64> {
        dispatch_numeric!(self, "min", col => col.min())
    }

    pub fn max(&self) -> Result<f64> {
        dispatch_numeric!(self, "max", col => col.max())
    }

    pub fn magnitude(&self) -> Result<f64> {
        dispatch_numeric!(self, "magnitude", col => Ok(col.magnitude()))
    }

    pub fn std(&self) -> Result<f64> {
        dispatch_numeric!(self, "std", col => Ok(col.std()))
    }

    pub fn median(&self) -> Result<f64> {
        dispatch_numeric!(self, "median", col => col.median())
    }

    /// Squares every value, widening Int32 to Int64 and Float32 to Float64
    pub fn square(&self) -> Result<Self> {
        dispatch_numeric!(self, "square", col => Ok(Column::from(col.square())))
    }

    /// Square root of every value as Float64
    pub fn sqrt(&self) -> Result<Self> {
        dispatch_numeric!(self, "sqrt", col => Ok(Column::from(col.sqrt())))
    }

    pub fn abs(&self) -> Result<Self> {
        dispatch_numeric!(self, "abs", col => Ok(Column::from(col.abs())))
    }

    /// First-seen deduplication of raw values
    pub fn unique(&self) -> Self {
        dispatch!(self, col => Column::from(col.unique()))
    }

    /// Ascending indices of non-null rows equal to `value`.
    ///
    /// A string needle is parsed into the column's type first.
    pub fn find_indices(&self, value: &DataValue) -> Result<Vec<usize>> {
        dispatch!(self, col => find_in(col, value))
    }

    /// Keeps rows satisfying at least one condition
    pub fn where_any(&self, conditions: &[Condition]) -> Self {
        dispatch!(self, col => Column::from(col.filter(|v| {
            let value = v.clone().into_data_value();
            conditions.iter().any(|condition| condition(&value))
        })))
    }

    /// Applies `f` to every non-null value; results must keep the column's type
    pub fn map<F>(&self, f: F) -> Result<Self>
    where
        F: Fn(DataValue) -> DataValue,
    {
        dispatch!(self, col => map_typed(col, &f))
    }

    /// Zero-copy view of the first `min(n, len)` rows
    pub fn head(&self, n: usize) -> Self {
        dispatch!(self, col => Column::from(col.head(n)))
    }

    /// Zero-copy view of rows `[start, end)`
    pub fn truncate(&self, start: usize, end: usize) -> Result<Self> {
        dispatch!(self, col => Ok(Column::from(col.slice(start, end)?)))
    }

    pub fn drop_indices(&self, indices: &[usize]) -> Result<Self> {
        dispatch!(self, col => Ok(Column::from(col.drop_indices(indices)?)))
    }

    pub fn select_indices(&self, indices: &[usize]) -> Result<Self> {
        dispatch!(self, col => Ok(Column::from(col.select_indices(indices)?)))
    }

    pub fn sort_values(&self) -> Self {
        dispatch!(self, col => Column::from(col.sort_values()))
    }

    /// Concatenates a column of the same type
    pub fn append(&self, other: &Column) -> Result<Self> {
        dispatch_pair!(self, other, (a, b) => Ok(Column::from(a.append(b))))
    }

    /// Concatenates same-typed columns under the first column's name
    pub fn concat(columns: &[Column]) -> Result<Self> {
        let (first, rest) = columns.split_first().ok_or_else(|| {
            Error::ConstructionError("no columns to concatenate".to_string())
        })?;
        dispatch!(first, col => concat_typed(col, rest))
    }

    /// Gathers rows in order; `None` produces a null row
    pub(crate) fn take_optional(&self, indices: &[Option<usize>]) -> Self {
        dispatch!(self, col => Column::from(col.take_optional(indices)))
    }

    /// Cell text used by table rendering
    pub(crate) fn format_cell(&self, index: usize) -> String {
        match self {
            Column::Int32(col) => format_value(col, index, |v| v.to_string()),
            Column::Int64(col) => format_value(col, index, |v| v.to_string()),
            Column::Float32(col) => format_value(col, index, |v| format!("{:.3}", v)),
            Column::Float64(col) => format_value(col, index, |v| format!("{:.3}", v)),
            Column::String(col) => format_value(col, index, |v| format!("\"{}\"", v)),
        }
    }
}

fn format_value<T, F>(col: &TypedColumn<T>, index: usize, f: F) -> String
where
    T: ColumnValue,
    F: Fn(&T) -> String,
{
    match col.get(index) {
        Ok(Some(v)) => f(v),
        _ => "NULL".to_string(),
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const MAX_ROWS: usize = 10;

        writeln!(
            f,
            "Column '{}' ({}, {} rows):",
            self.name(),
            self.column_type(),
            self.len()
        )?;
        for i in 0..self.len().min(MAX_ROWS) {
            writeln!(f, "{:<5} | {}", i, self.format_cell(i))?;
        }
        if self.len() > MAX_ROWS {
            writeln!(f, "... ({} more rows)", self.len() - MAX_ROWS)?;
        }
        Ok(())
    }
}
