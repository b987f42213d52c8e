use num_traits::AsPrimitive;

use crate::column::typed_column::TypedColumn;
use crate::column::value::ColumnValue;
use crate::error::{Error, Result};

/// Numeric element types: `i32`, `i64`, `f32`, `f64`.
///
/// Integer arithmetic wraps on overflow.
pub trait NumericValue:
    ColumnValue
    + Copy
    + PartialOrd
    + AsPrimitive<i32>
    + AsPrimitive<i64>
    + AsPrimitive<f32>
    + AsPrimitive<f64>
{
    /// Type produced by `square`
    type Wide: NumericValue;

    fn add_value(self, other: Self) -> Self;

    fn sub_value(self, other: Self) -> Self;

    fn square_value(self) -> Self::Wide;

    fn abs_value(self) -> Self;

    #[inline]
    fn to_f64(self) -> f64 {
        <Self as AsPrimitive<f64>>::as_(self)
    }
}

macro_rules! impl_int_numeric {
    ($t:ty, $wide:ty) => {
        impl NumericValue for $t {
            type Wide = $wide;

            fn add_value(self, other: Self) -> Self {
                self.wrapping_add(other)
            }

            fn sub_value(self, other: Self) -> Self {
                self.wrapping_sub(other)
            }

            fn square_value(self) -> Self::Wide {
                let wide = self as $wide;
                wide.wrapping_mul(wide)
            }

            fn abs_value(self) -> Self {
                self.wrapping_abs()
            }
        }
    };
}

macro_rules! impl_float_numeric {
    ($t:ty, $wide:ty) => {
        impl NumericValue for $t {
            type Wide = $wide;

            fn add_value(self, other: Self) -> Self {
                self + other
            }

            fn sub_value(self, other: Self) -> Self {
                self - other
            }

            fn square_value(self) -> Self::Wide {
                let wide = self as $wide;
                wide * wide
            }

            fn abs_value(self) -> Self {
                self.abs()
            }
        }
    };
}

impl_int_numeric!(i32, i64);
impl_int_numeric!(i64, i64);
impl_float_numeric!(f32, f64);
impl_float_numeric!(f64, f64);

// Aggregates read the raw stored value of every row, null rows included.
impl<T: NumericValue> TypedColumn<T> {
    fn require_rows(&self, op: &str) -> Result<()> {
        if self.is_empty() {
            return Err(Error::EmptyColumn(format!(
                "{} of empty column '{}'",
                op, self.name
            )));
        }
        Ok(())
    }

    pub fn sum(&self) -> f64 {
        self.as_slice().iter().map(|v| v.to_f64()).sum()
    }

    /// NaN for an empty column
    pub fn mean(&self) -> f64 {
        self.sum() / self.len() as f64
    }

    /// Starts from row 0 and only moves on a strictly smaller value
    pub fn min(&self) -> Result<f64> {
        self.require_rows("min")?;
        let values = self.as_slice();
        let mut acc = values[0];
        for &v in &values[1..] {
            if v < acc {
                acc = v;
            }
        }
        Ok(acc.to_f64())
    }

    /// Starts from row 0 and only moves on a strictly larger value
    pub fn max(&self) -> Result<f64> {
        self.require_rows("max")?;
        let values = self.as_slice();
        let mut acc = values[0];
        for &v in &values[1..] {
            if v > acc {
                acc = v;
            }
        }
        Ok(acc.to_f64())
    }

    /// Euclidean norm
    pub fn magnitude(&self) -> f64 {
        self.as_slice()
            .iter()
            .map(|v| {
                let f = v.to_f64();
                f * f
            })
            .sum::<f64>()
            .sqrt()
    }

    /// Sample standard deviation; NaN below two rows
    pub fn std(&self) -> f64 {
        let n = self.len() as f64;
        let mean = self.mean();
        let ss: f64 = self
            .as_slice()
            .iter()
            .map(|v| {
                let d = v.to_f64() - mean;
                d * d
            })
            .sum();
        (ss / (n - 1.0)).sqrt()
    }

    pub fn median(&self) -> Result<f64> {
        self.require_rows("median")?;
        let sorted = self.sort_values();
        let values = sorted.as_slice();
        let m = values.len() / 2;
        let right = values[m].to_f64();
        if values.len() % 2 != 0 {
            return Ok(right);
        }
        let left = values[m - 1].to_f64();
        Ok((left + right) / 2.0)
    }

    pub fn dot(&self, other: &Self) -> Result<f64> {
        if self.len() != other.len() {
            return Err(Error::LengthMismatch {
                expected: self.len(),
                actual: other.len(),
            });
        }
        Ok(self
            .as_slice()
            .iter()
            .zip(other.as_slice())
            .map(|(a, b)| a.to_f64() * b.to_f64())
            .sum())
    }

    pub fn add(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a.add_value(*b))
    }

    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a.sub_value(*b))
    }

    pub fn square(&self) -> TypedColumn<T::Wide> {
        self.map_values(|v| v.square_value())
    }

    pub fn sqrt(&self) -> TypedColumn<f64> {
        self.map_values(|v| v.to_f64().sqrt())
    }

    pub fn abs(&self) -> Self {
        self.map_values(|v| v.abs_value())
    }

    /// Numeric conversion to another numeric type (`as` semantics, truncating float to int)
    pub fn convert<U>(&self) -> TypedColumn<U>
    where
        U: NumericValue,
        T: AsPrimitive<U>,
    {
        self.map_values(|v| <T as AsPrimitive<U>>::as_(*v))
    }
}
