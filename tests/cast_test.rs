use colframe::error::{Error, Result};
use colframe::{AnyValues, Column, ColumnType, DataValue};

#[test]
fn test_cast_same_type_shares_storage() -> Result<()> {
    let col = Column::new_int64("id", vec![1, 2, 3]);
    let same = col.cast(ColumnType::Int64)?;
    assert!(same.shares_storage(&col));
    Ok(())
}

#[test]
fn test_cast_numeric() -> Result<()> {
    let floats = Column::from_options("f", vec![Some(1.9f64), None, Some(-2.5)]);

    let ints = floats.cast(ColumnType::Int32)?;
    assert_eq!(ints.column_type(), ColumnType::Int32);
    assert_eq!(ints.values(), AnyValues::Int32(vec![1, 0, -2]));
    assert_eq!(ints.na_indices(), vec![1]);

    let wide = Column::new_int32("i", vec![7]).cast(ColumnType::Float64)?;
    assert_eq!(wide.values(), AnyValues::Float64(vec![7.0]));

    Ok(())
}

#[test]
fn test_cast_to_string_uses_minimal_form() -> Result<()> {
    let floats = Column::new_float64("f", vec![1.5, 3.0, 0.1]);
    assert_eq!(
        floats.cast(ColumnType::String)?.string_values(),
        vec!["1.5".to_string(), "3".to_string(), "0.1".to_string()]
    );

    let ints = Column::new_int64("i", vec![-42]);
    assert_eq!(
        ints.cast(ColumnType::String)?.values(),
        AnyValues::String(vec!["-42".to_string()])
    );

    Ok(())
}

#[test]
fn test_cast_from_string() -> Result<()> {
    let col = Column::from_vec(
        "s",
        vec!["1".to_string(), String::new(), "3".to_string()],
        Some(vec![true, false, true]),
    )?;

    // The null row is not parsed
    let parsed = col.cast(ColumnType::Int64)?;
    assert_eq!(parsed.values(), AnyValues::Int64(vec![1, 0, 3]));
    assert_eq!(parsed.get(1)?, None);

    let bad = Column::new_string("s", vec!["1", "x"]);
    assert!(matches!(bad.cast(ColumnType::Float32), Err(Error::ParseError(_))));

    let floats = Column::new_string("s", vec!["2.25"]).cast(ColumnType::Float64)?;
    assert_eq!(floats.value_at(0)?, DataValue::Float64(2.25));

    Ok(())
}

#[test]
fn test_type_names() {
    assert_eq!("int64".parse::<ColumnType>().ok(), Some(ColumnType::Int64));
    assert_eq!("Float32".parse::<ColumnType>().ok(), Some(ColumnType::Float32));
    assert_eq!("utf8".parse::<ColumnType>().ok(), Some(ColumnType::String));
    assert!(matches!(
        "uint64".parse::<ColumnType>(),
        Err(Error::UnsupportedType(_))
    ));
    assert_eq!(ColumnType::Float64.to_string(), "float64");
    assert!(!ColumnType::String.is_numeric());
}
