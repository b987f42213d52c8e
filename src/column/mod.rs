//! Typed columns and the type dispatch shared by every table operation.

/// Runs `$body` with `$col` bound to the typed column behind any variant.
macro_rules! dispatch {
    ($column:expr, $col:ident => $body:expr) => {
        match $column {
            $crate::column::Column::Int32($col) => $body,
            $crate::column::Column::Int64($col) => $body,
            $crate::column::Column::Float32($col) => $body,
            $crate::column::Column::Float64($col) => $body,
            $crate::column::Column::String($col) => $body,
        }
    };
}

/// Like `dispatch!` for numeric-only operations; string columns yield `UnsupportedType`.
macro_rules! dispatch_numeric {
    ($column:expr, $op:expr, $col:ident => $body:expr) => {
        match $column {
            $crate::column::Column::Int32($col) => $body,
            $crate::column::Column::Int64($col) => $body,
            $crate::column::Column::Float32($col) => $body,
            $crate::column::Column::Float64($col) => $body,
            $crate::column::Column::String(_) => {
                return Err($crate::error::Error::UnsupportedType(format!(
                    "{} is not defined for string columns",
                    $op
                )))
            }
        }
    };
}

/// Binds two columns of the same element type; differing types yield `TypeMismatch`.
macro_rules! dispatch_pair {
    ($left:expr, $right:expr, ($a:ident, $b:ident) => $body:expr) => {
        match ($left, $right) {
            ($crate::column::Column::Int32($a), $crate::column::Column::Int32($b)) => $body,
            ($crate::column::Column::Int64($a), $crate::column::Column::Int64($b)) => $body,
            ($crate::column::Column::Float32($a), $crate::column::Column::Float32($b)) => $body,
            ($crate::column::Column::Float64($a), $crate::column::Column::Float64($b)) => $body,
            ($crate::column::Column::String($a), $crate::column::Column::String($b)) => $body,
            (l, r) => {
                return Err($crate::error::Error::TypeMismatch {
                    expected: l.column_type(),
                    found: r.column_type(),
                })
            }
        }
    };
}

/// Numeric `dispatch_pair!`; string pairs yield `UnsupportedType`.
macro_rules! dispatch_numeric_pair {
    ($left:expr, $right:expr, $op:expr, ($a:ident, $b:ident) => $body:expr) => {
        match ($left, $right) {
            ($crate::column::Column::Int32($a), $crate::column::Column::Int32($b)) => $body,
            ($crate::column::Column::Int64($a), $crate::column::Column::Int64($b)) => $body,
            ($crate::column::Column::Float32($a), $crate::column::Column::Float32($b)) => $body,
            ($crate::column::Column::Float64($a), $crate::column::Column::Float64($b)) => $body,
            ($crate::column::Column::String(_), $crate::column::Column::String(_)) => {
                return Err($crate::error::Error::UnsupportedType(format!(
                    "{} is not defined for string columns",
                    $op
                )))
            }
            (l, r) => {
                return Err($crate::error::Error::TypeMismatch {
                    expected: l.column_type(),
                    found: r.column_type(),
                })
            }
        }
    };
}

/// Binds `$t` to the Rust element type named by a `ColumnType`.
macro_rules! dispatch_type {
    ($ty:expr, $t:ident => $body:expr) => {
        match $ty {
            $crate::column::ColumnType::Int32 => {
                type $t = i32;
                $body
            }
            $crate::column::ColumnType::Int64 => {
                type $t = i64;
                $body
            }
            $crate::column::ColumnType::Float32 => {
                type $t = f32;
                $body
            }
            $crate::column::ColumnType::Float64 => {
                type $t = f64;
                $body
            }
            $crate::column::ColumnType::String => {
                type $t = String;
                $body
            }
        }
    };
}

mod cast;
mod common;
mod numeric;
mod ops;
mod typed_column;
mod value;

pub use common::{BitMask, Column, ColumnType};
pub use numeric::NumericValue;
pub use ops::Condition;
pub use typed_column::TypedColumn;
pub use value::{AnyValues, ColumnValue, DataValue};

