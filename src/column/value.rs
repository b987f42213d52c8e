use std::cmp::Ordering;
use std::fmt::{self, Debug, Display};
use std::hash::Hash;

use crate::column::common::{Column, ColumnType};
use crate::column::typed_column::TypedColumn;
use crate::error::{Error, Result};

/// A single cell value boxed in its native type
#[derive(Debug, Clone, PartialEq)]
pub enum DataValue {
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
    String(String),
}

impl DataValue {
    /// Element type of the value
    pub fn column_type(&self) -> ColumnType {
        match self {
            DataValue::Int32(_) => ColumnType::Int32,
            DataValue::Int64(_) => ColumnType::Int64,
            DataValue::Float32(_) => ColumnType::Float32,
            DataValue::Float64(_) => ColumnType::Float64,
            DataValue::String(_) => ColumnType::String,
        }
    }

    /// Returns the value as f64; strings are parsed and the empty string reads as 0
    pub fn to_f64(&self) -> Result<f64> {
        match self {
            DataValue::Int32(v) => Ok(*v as f64),
            DataValue::Int64(v) => Ok(*v as f64),
            DataValue::Float32(v) => Ok(*v as f64),
            DataValue::Float64(v) => Ok(*v),
            DataValue::String(v) => v.to_f64_lossy(),
        }
    }

    /// Returns the string payload, if any
    pub fn as_str(&self) -> Option<&str> {
        match self {
            DataValue::String(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl Display for DataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataValue::Int32(v) => write!(f, "{}", v),
            DataValue::Int64(v) => write!(f, "{}", v),
            DataValue::Float32(v) => write!(f, "{}", v),
            DataValue::Float64(v) => write!(f, "{}", v),
            DataValue::String(v) => write!(f, "{}", v),
        }
    }
}

macro_rules! impl_data_value_from {
    ($($t:ty => $variant:ident),*) => {
        $(
            impl From<$t> for DataValue {
                fn from(value: $t) -> Self {
                    DataValue::$variant(value)
                }
            }
        )*
    };
}

impl_data_value_from!(i32 => Int32, i64 => Int64, f32 => Float32, f64 => Float64, String => String);

impl From<&str> for DataValue {
    fn from(value: &str) -> Self {
        DataValue::String(value.to_string())
    }
}

/// A whole value sequence in its native type.
///
/// `Mixed` carries loosely typed elements that are coerced to an explicit
/// target type when a column is built from them.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyValues {
    Int32(Vec<i32>),
    Int64(Vec<i64>),
    Float32(Vec<f32>),
    Float64(Vec<f64>),
    String(Vec<String>),
    Mixed(Vec<DataValue>),
}

impl AnyValues {
    pub fn len(&self) -> usize {
        match self {
            AnyValues::Int32(v) => v.len(),
            AnyValues::Int64(v) => v.len(),
            AnyValues::Float32(v) => v.len(),
            AnyValues::Float64(v) => v.len(),
            AnyValues::String(v) => v.len(),
            AnyValues::Mixed(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Element types a column can hold.
///
/// Implemented for exactly `i32`, `i64`, `f32`, `f64` and `String`; every
/// generic column algorithm is written once against this trait.
pub trait ColumnValue: Clone + Debug + Default + PartialEq + Send + Sync + 'static {
    /// Declared element type
    const TYPE: ColumnType;

    /// Hashable identity used for first-seen deduplication
    type Key: Hash + Eq;

    fn key(&self) -> Self::Key;

    /// Ordering used by sorts; floats use IEEE total order
    fn total_cmp(&self, other: &Self) -> Ordering;

    fn into_data_value(self) -> DataValue;

    /// Extracts a value of exactly this type, `None` on a variant mismatch
    fn from_data_value(value: &DataValue) -> Option<Self>;

    fn parse_str(s: &str) -> Result<Self>;

    /// Minimal decimal representation
    fn to_canonical_string(&self) -> String;

    fn to_f64_lossy(&self) -> Result<f64>;

    fn wrap(column: TypedColumn<Self>) -> Column;

    fn unwrap_ref(column: &Column) -> Option<&TypedColumn<Self>>;
}

fn parse_error(s: &str, ty: ColumnType, err: impl Display) -> Error {
    Error::ParseError(format!("cannot parse {:?} as {}: {}", s, ty, err))
}

macro_rules! impl_int_value {
    ($t:ty, $variant:ident) => {
        impl ColumnValue for $t {
            const TYPE: ColumnType = ColumnType::$variant;
            type Key = $t;

            fn key(&self) -> Self::Key {
                *self
            }

            fn total_cmp(&self, other: &Self) -> Ordering {
                self.cmp(other)
            }

            fn into_data_value(self) -> DataValue {
                DataValue::$variant(self)
            }

            fn from_data_value(value: &DataValue) -> Option<Self> {
                match value {
                    DataValue::$variant(v) => Some(*v),
                    _ => None,
                }
            }

            fn parse_str(s: &str) -> Result<Self> {
                s.parse::<$t>().map_err(|e| parse_error(s, Self::TYPE, e))
            }

            fn to_canonical_string(&self) -> String {
                self.to_string()
            }

            fn to_f64_lossy(&self) -> Result<f64> {
                Ok(*self as f64)
            }

            fn wrap(column: TypedColumn<Self>) -> Column {
                Column::$variant(column)
            }

            fn unwrap_ref(column: &Column) -> Option<&TypedColumn<Self>> {
                match column {
                    Column::$variant(col) => Some(col),
                    _ => None,
                }
            }
        }
    };
}

// -0.0 and 0.0 compare equal, so they share a key; every NaN collapses to one key.
macro_rules! impl_float_value {
    ($t:ty, $variant:ident, $bits:ty) => {
        impl ColumnValue for $t {
            const TYPE: ColumnType = ColumnType::$variant;
            type Key = $bits;

            fn key(&self) -> Self::Key {
                if *self == 0.0 {
                    (0.0 as $t).to_bits()
                } else if self.is_nan() {
                    <$t>::NAN.to_bits()
                } else {
                    self.to_bits()
                }
            }

            fn total_cmp(&self, other: &Self) -> Ordering {
                <$t>::total_cmp(self, other)
            }

            fn into_data_value(self) -> DataValue {
                DataValue::$variant(self)
            }

            fn from_data_value(value: &DataValue) -> Option<Self> {
                match value {
                    DataValue::$variant(v) => Some(*v),
                    _ => None,
                }
            }

            fn parse_str(s: &str) -> Result<Self> {
                s.parse::<$t>().map_err(|e| parse_error(s, Self::TYPE, e))
            }

            fn to_canonical_string(&self) -> String {
                self.to_string()
            }

            fn to_f64_lossy(&self) -> Result<f64> {
                Ok(*self as f64)
            }

            fn wrap(column: TypedColumn<Self>) -> Column {
                Column::$variant(column)
            }

            fn unwrap_ref(column: &Column) -> Option<&TypedColumn<Self>> {
                match column {
                    Column::$variant(col) => Some(col),
                    _ => None,
                }
            }
        }
    };
}

impl_int_value!(i32, Int32);
impl_int_value!(i64, Int64);
impl_float_value!(f32, Float32, u32);
impl_float_value!(f64, Float64, u64);

impl ColumnValue for String {
    const TYPE: ColumnType = ColumnType::String;
    type Key = String;

    fn key(&self) -> Self::Key {
        self.clone()
    }

    fn total_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    fn into_data_value(self) -> DataValue {
        DataValue::String(self)
    }

    fn from_data_value(value: &DataValue) -> Option<Self> {
        match value {
            DataValue::String(v) => Some(v.clone()),
            _ => None,
        }
    }

    fn parse_str(s: &str) -> Result<Self> {
        Ok(s.to_string())
    }

    fn to_canonical_string(&self) -> String {
        self.clone()
    }

    fn to_f64_lossy(&self) -> Result<f64> {
        if self.is_empty() {
            return Ok(0.0);
        }
        self.parse::<f64>()
            .map_err(|e| parse_error(self, ColumnType::Float64, e))
    }

    fn wrap(column: TypedColumn<Self>) -> Column {
        Column::String(column)
    }

    fn unwrap_ref(column: &Column) -> Option<&TypedColumn<Self>> {
        match column {
            Column::String(col) => Some(col),
            _ => None,
        }
    }
}
