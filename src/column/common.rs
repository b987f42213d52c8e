use std::fmt::{self, Display};
use std::str::FromStr;
use std::sync::Arc;

use crate::column::typed_column::TypedColumn;
use crate::column::value::ColumnValue;
use crate::error::{Error, Result};

/// Element types a column can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    Int32,
    Int64,
    Float32,
    Float64,
    String,
}

impl ColumnType {
    /// Whether arithmetic and aggregates are defined for the type
    pub fn is_numeric(&self) -> bool {
        !matches!(self, ColumnType::String)
    }

    pub fn name(&self) -> &'static str {
        match self {
            ColumnType::Int32 => "int32",
            ColumnType::Int64 => "int64",
            ColumnType::Float32 => "float32",
            ColumnType::Float64 => "float64",
            ColumnType::String => "string",
        }
    }
}

impl Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColumnType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "int32" | "i32" => Ok(ColumnType::Int32),
            "int64" | "i64" => Ok(ColumnType::Int64),
            "float32" | "f32" => Ok(ColumnType::Float32),
            "float64" | "f64" => Ok(ColumnType::Float64),
            "string" | "utf8" | "str" => Ok(ColumnType::String),
            other => Err(Error::UnsupportedType(other.to_string())),
        }
    }
}

/// Bitmask tracking null rows; a set bit marks a null
#[derive(Debug, Clone)]
pub struct BitMask {
    pub(crate) data: Arc<[u8]>,
    pub(crate) len: usize,
}

impl BitMask {
    /// Creates a mask with every bit cleared
    pub fn new(length: usize) -> Self {
        let bytes_needed = (length + 7) / 8;
        Self {
            data: vec![0u8; bytes_needed].into(),
            len: length,
        }
    }

    /// Creates a mask with every bit set
    pub fn ones(length: usize) -> Self {
        let bytes_needed = (length + 7) / 8;
        let mut data = vec![0xFFu8; bytes_needed];

        let remaining_bits = length % 8;
        if remaining_bits != 0 {
            if let Some(last) = data.last_mut() {
                *last &= (1u8 << remaining_bits) - 1;
            }
        }

        Self {
            data: data.into(),
            len: length,
        }
    }

    /// Builds a mask from per-row null flags
    pub fn from_bools(bools: &[bool]) -> Self {
        let mut data = vec![0u8; (bools.len() + 7) / 8];
        for (i, &is_set) in bools.iter().enumerate() {
            if is_set {
                data[i / 8] |= 1 << (i % 8);
            }
        }

        Self {
            data: data.into(),
            len: bools.len(),
        }
    }

    /// Builds a mask from null flags, or `None` when no flag is set
    pub fn from_nulls(nulls: &[bool]) -> Option<Self> {
        if nulls.iter().any(|&is_null| is_null) {
            Some(Self::from_bools(nulls))
        } else {
            None
        }
    }

    /// Checked bit lookup
    pub fn get(&self, index: usize) -> Result<bool> {
        if index >= self.len {
            return Err(Error::IndexOutOfBounds {
                index,
                size: self.len,
            });
        }
        Ok(self.is_set(index))
    }

    #[inline]
    pub(crate) fn is_set(&self, index: usize) -> bool {
        (self.data[index / 8] & (1 << (index % 8))) != 0
    }

    /// Number of set bits in `[start, end)`, clamped to the mask length
    pub fn count_set(&self, start: usize, end: usize) -> usize {
        (start..end.min(self.len)).filter(|&i| self.is_set(i)).count()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// A named, typed column; the closed set of supported element types
#[derive(Debug, Clone)]
pub enum Column {
    Int32(TypedColumn<i32>),
    Int64(TypedColumn<i64>),
    Float32(TypedColumn<f32>),
    Float64(TypedColumn<f64>),
    String(TypedColumn<String>),
}

impl Column {
    /// Number of rows
    pub fn len(&self) -> usize {
        dispatch!(self, col => col.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Declared element type
    pub fn column_type(&self) -> ColumnType {
        match self {
            Column::Int32(_) => ColumnType::Int32,
            Column::Int64(_) => ColumnType::Int64,
            Column::Float32(_) => ColumnType::Float32,
            Column::Float64(_) => ColumnType::Float64,
            Column::String(_) => ColumnType::String,
        }
    }

    pub fn name(&self) -> &str {
        dispatch!(self, col => col.name())
    }

    /// Returns the same column under a new name; storage stays shared
    pub fn rename(&self, name: impl Into<String>) -> Self {
        let name = name.into();
        dispatch!(self, col => Column::from(col.renamed(name)))
    }

    /// Borrows the typed column when the element type is `T`
    pub fn as_typed<T: ColumnValue>(&self) -> Option<&TypedColumn<T>> {
        T::unwrap_ref(self)
    }

    /// Borrows the typed column, failing with `TypeMismatch` for any other type
    pub fn typed<T: ColumnValue>(&self) -> Result<&TypedColumn<T>> {
        T::unwrap_ref(self).ok_or(Error::TypeMismatch {
            expected: T::TYPE,
            found: self.column_type(),
        })
    }

    /// Whether both columns view the same backing storage
    pub fn shares_storage(&self, other: &Column) -> bool {
        match (self, other) {
            (Column::Int32(a), Column::Int32(b)) => a.shares_storage(b),
            (Column::Int64(a), Column::Int64(b)) => a.shares_storage(b),
            (Column::Float32(a), Column::Float32(b)) => a.shares_storage(b),
            (Column::Float64(a), Column::Float64(b)) => a.shares_storage(b),
            (Column::String(a), Column::String(b)) => a.shares_storage(b),
            _ => false,
        }
    }
}

impl<T: ColumnValue> From<TypedColumn<T>> for Column {
    fn from(col: TypedColumn<T>) -> Self {
        T::wrap(col)
    }
}
