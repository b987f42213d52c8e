use std::collections::HashSet;
use std::sync::Arc;

use crate::column::common::BitMask;
use crate::column::value::ColumnValue;
use crate::error::{Error, Result};

/// A named column of one element type.
///
/// Values live in a shared `Arc<[T]>`; `offset` and `len` select the window
/// this column exposes, so slicing never copies. The null mask, when
/// present, covers the whole backing storage and is indexed with `offset`.
#[derive(Debug, Clone)]
pub struct TypedColumn<T: ColumnValue> {
    pub(crate) data: Arc<[T]>,
    pub(crate) offset: usize,
    pub(crate) len: usize,
    pub(crate) null_mask: Option<BitMask>,
    pub(crate) name: String,
}

impl<T: ColumnValue> TypedColumn<T> {
    /// Creates a column without nulls
    pub fn new(name: impl Into<String>, data: Vec<T>) -> Self {
        let len = data.len();
        Self {
            data: data.into(),
            offset: 0,
            len,
            null_mask: None,
            name: name.into(),
        }
    }

    /// Creates a column from values and optional validity flags.
    ///
    /// `valid[i] == false` marks row `i` as null.
    pub fn with_validity(
        name: impl Into<String>,
        data: Vec<T>,
        valid: Option<Vec<bool>>,
    ) -> Result<Self> {
        let null_mask = match valid {
            Some(valid) => {
                if valid.len() != data.len() {
                    return Err(Error::LengthMismatch {
                        expected: data.len(),
                        actual: valid.len(),
                    });
                }
                let nulls: Vec<bool> = valid.iter().map(|v| !v).collect();
                BitMask::from_nulls(&nulls)
            }
            None => None,
        };

        let len = data.len();
        Ok(Self {
            data: data.into(),
            offset: 0,
            len,
            null_mask,
            name: name.into(),
        })
    }

    /// Creates a column from values and per-row null flags
    pub(crate) fn with_nulls(name: impl Into<String>, data: Vec<T>, nulls: &[bool]) -> Self {
        debug_assert_eq!(data.len(), nulls.len());
        let len = data.len();
        Self {
            data: data.into(),
            offset: 0,
            len,
            null_mask: BitMask::from_nulls(nulls),
            name: name.into(),
        }
    }

    /// Creates a column from optional values; `None` becomes a null row
    pub fn from_options(name: impl Into<String>, values: Vec<Option<T>>) -> Self {
        let mut data = Vec::with_capacity(values.len());
        let mut nulls = Vec::with_capacity(values.len());
        for value in values {
            nulls.push(value.is_none());
            data.push(value.unwrap_or_default());
        }
        Self::with_nulls(name, data, &nulls)
    }

    /// Column of `n` null rows holding the zero value
    pub fn nulls(name: impl Into<String>, n: usize) -> Self {
        let len = n;
        Self {
            data: vec![T::default(); n].into(),
            offset: 0,
            len,
            null_mask: if n > 0 { Some(BitMask::ones(n)) } else { None },
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Same storage under a new name
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Values visible through this column's window
    pub fn as_slice(&self) -> &[T] {
        &self.data[self.offset..self.offset + self.len]
    }

    pub fn shares_storage(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }

    /// Null flag of row `index`; rows outside this column's window are not null
    #[inline]
    pub fn is_null(&self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        match &self.null_mask {
            Some(mask) => mask.is_set(self.offset + index),
            None => false,
        }
    }

    pub fn has_nulls(&self) -> bool {
        self.null_count() > 0
    }

    pub fn null_count(&self) -> usize {
        match &self.null_mask {
            Some(mask) => mask.count_set(self.offset, self.offset + self.len),
            None => 0,
        }
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.len {
            return Err(Error::IndexOutOfBounds {
                index,
                size: self.len,
            });
        }
        Ok(())
    }

    /// Raw stored value at `index`, regardless of nulls
    pub fn value(&self, index: usize) -> Result<&T> {
        self.check_index(index)?;
        Ok(&self.as_slice()[index])
    }

    /// Value at `index`, `None` for a null row
    pub fn get(&self, index: usize) -> Result<Option<&T>> {
        self.check_index(index)?;
        if self.is_null(index) {
            return Ok(None);
        }
        Ok(Some(&self.as_slice()[index]))
    }

    /// Per-row null flags
    pub fn is_na(&self) -> Vec<bool> {
        (0..self.len).map(|i| self.is_null(i)).collect()
    }

    /// Ascending indices of null rows
    pub fn na_indices(&self) -> Vec<usize> {
        if self.null_mask.is_none() {
            return Vec::new();
        }
        (0..self.len).filter(|&i| self.is_null(i)).collect()
    }

    /// Zero-copy view of rows `[start, end)`
    pub fn slice(&self, start: usize, end: usize) -> Result<Self> {
        if start > end {
            return Err(Error::IndexOutOfBounds {
                index: start,
                size: end,
            });
        }
        if end > self.len {
            return Err(Error::IndexOutOfBounds {
                index: end,
                size: self.len,
            });
        }

        Ok(Self {
            data: Arc::clone(&self.data),
            offset: self.offset + start,
            len: end - start,
            null_mask: self.null_mask.clone(),
            name: self.name.clone(),
        })
    }

    /// Zero-copy view of the first `min(n, len)` rows
    pub fn head(&self, n: usize) -> Self {
        let n = n.min(self.len);
        Self {
            data: Arc::clone(&self.data),
            offset: self.offset,
            len: n,
            null_mask: self.null_mask.clone(),
            name: self.name.clone(),
        }
    }

    /// Gathers rows in the given order, carrying their null flags
    pub(crate) fn gather(&self, indices: &[usize]) -> Self {
        let values = self.as_slice();
        let data: Vec<T> = indices.iter().map(|&i| values[i].clone()).collect();
        let nulls: Vec<bool> = indices.iter().map(|&i| self.is_null(i)).collect();
        Self::with_nulls(self.name.clone(), data, &nulls)
    }

    /// Keeps only the listed rows; indices are sorted first, duplicates are kept
    pub fn select_indices(&self, indices: &[usize]) -> Result<Self> {
        let mut sorted = indices.to_vec();
        sorted.sort_unstable();
        if let Some(&last) = sorted.last() {
            self.check_index(last)?;
        }
        Ok(self.gather(&sorted))
    }

    /// Removes the listed rows, preserving the order of the rest
    pub fn drop_indices(&self, indices: &[usize]) -> Result<Self> {
        let mut sorted = indices.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        if let Some(&last) = sorted.last() {
            self.check_index(last)?;
        }

        let mut keep = Vec::with_capacity(self.len - sorted.len());
        let mut next = sorted.iter().peekable();
        for i in 0..self.len {
            if next.peek() == Some(&&i) {
                next.next();
                continue;
            }
            keep.push(i);
        }

        Ok(self.gather(&keep))
    }

    /// Rows that are not null
    pub fn drop_na(&self) -> Self {
        let keep: Vec<usize> = (0..self.len).filter(|&i| !self.is_null(i)).collect();
        self.gather(&keep)
    }

    /// Concatenates `other` after this column
    pub fn append(&self, other: &Self) -> Self {
        Self::concat(&[self, other])
    }

    /// Concatenates columns in order under the first column's name
    pub(crate) fn concat(parts: &[&Self]) -> Self {
        let total = parts.iter().map(|p| p.len).sum();
        let mut data = Vec::with_capacity(total);
        let mut nulls = Vec::with_capacity(total);
        for part in parts {
            data.extend_from_slice(part.as_slice());
            nulls.extend(part.is_na());
        }
        let name = parts.first().map(|p| p.name.clone()).unwrap_or_default();
        Self::with_nulls(name, data, &nulls)
    }

    /// Gathers rows in the given order; `None` yields a null row
    pub(crate) fn take_optional(&self, indices: &[Option<usize>]) -> Self {
        let values = self.as_slice();
        let mut data = Vec::with_capacity(indices.len());
        let mut nulls = Vec::with_capacity(indices.len());
        for index in indices {
            match index {
                Some(i) => {
                    data.push(values[*i].clone());
                    nulls.push(self.is_null(*i));
                }
                None => {
                    data.push(T::default());
                    nulls.push(true);
                }
            }
        }
        Self::with_nulls(self.name.clone(), data, &nulls)
    }

    /// First-seen deduplication over raw values
    pub fn unique(&self) -> Self {
        let mut seen = HashSet::new();
        let data: Vec<T> = self
            .as_slice()
            .iter()
            .filter(|v| seen.insert(v.key()))
            .cloned()
            .collect();
        Self::new(self.name.clone(), data)
    }

    /// Ascending indices of non-null rows equal to `needle`
    pub fn find(&self, needle: &T) -> Vec<usize> {
        self.as_slice()
            .iter()
            .enumerate()
            .filter(|(i, v)| *v == needle && !self.is_null(*i))
            .map(|(i, _)| i)
            .collect()
    }

    /// Keeps rows whose value satisfies `predicate`, in original order
    pub fn filter<F>(&self, predicate: F) -> Self
    where
        F: Fn(&T) -> bool,
    {
        let keep: Vec<usize> = self
            .as_slice()
            .iter()
            .enumerate()
            .filter(|(_, v)| predicate(*v))
            .map(|(i, _)| i)
            .collect();
        self.gather(&keep)
    }

    /// Ascending sort of raw values; row correspondence is not kept
    pub fn sort_values(&self) -> Self {
        let mut data = self.as_slice().to_vec();
        data.sort_by(|a, b| a.total_cmp(b));
        Self::new(self.name.clone(), data)
    }

    /// Maps every value into a new column, carrying null flags
    pub fn map_values<U, F>(&self, f: F) -> TypedColumn<U>
    where
        U: ColumnValue,
        F: Fn(&T) -> U,
    {
        let data: Vec<U> = self.as_slice().iter().map(f).collect();
        TypedColumn::with_nulls(self.name.clone(), data, &self.is_na())
    }

    /// Fallible variant of [`map_values`](Self::map_values); null rows are not
    /// passed to `f` and hold the zero value
    pub fn try_map_values<U, F>(&self, f: F) -> Result<TypedColumn<U>>
    where
        U: ColumnValue,
        F: Fn(&T) -> Result<U>,
    {
        let mut data = Vec::with_capacity(self.len);
        for (i, v) in self.as_slice().iter().enumerate() {
            if self.is_null(i) {
                data.push(U::default());
            } else {
                data.push(f(v)?);
            }
        }
        Ok(TypedColumn::with_nulls(self.name.clone(), data, &self.is_na()))
    }

    /// Combines two equal-length columns row by row; a row is null when either input row is
    pub fn zip_with<U, F>(&self, other: &Self, f: F) -> Result<TypedColumn<U>>
    where
        U: ColumnValue,
        F: Fn(&T, &T) -> U,
    {
        if self.len != other.len {
            return Err(Error::LengthMismatch {
                expected: self.len,
                actual: other.len,
            });
        }

        let data: Vec<U> = self
            .as_slice()
            .iter()
            .zip(other.as_slice())
            .map(|(a, b)| f(a, b))
            .collect();
        let nulls: Vec<bool> = (0..self.len)
            .map(|i| self.is_null(i) || other.is_null(i))
            .collect();

        Ok(TypedColumn::with_nulls(self.name.clone(), data, &nulls))
    }

    /// `n` null rows of this column's type and name
    pub fn empty_like(&self, n: usize) -> Self {
        Self::nulls(self.name.clone(), n)
    }
}
