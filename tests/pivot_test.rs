use colframe::error::{Error, Result};
use colframe::{pivot, AnyValues, Column, ColumnType, DataFrame, DataValue};

#[test]
fn test_pivot_diagonal() -> Result<()> {
    let df = DataFrame::from_series(vec![
        Column::new_int64("idx", vec![1, 2, 3]),
        Column::new_int32("cols", vec![100, 200, 300]),
        Column::new_float64("vals", vec![1.5, 2.5, 3.5]),
    ])?;

    let wide = df.pivot("idx", "cols", "vals")?;

    assert_eq!(wide.dims(), (3, 4));
    assert_eq!(wide.headers(), vec!["idx", "100", "200", "300"]);
    assert_eq!(wide.column(0)?.values(), AnyValues::Int64(vec![1, 2, 3]));
    assert_eq!(wide.column(1)?.column_type(), ColumnType::Float64);

    assert_eq!(wide.column(1)?.values(), AnyValues::Float64(vec![1.5, 0.0, 0.0]));
    assert_eq!(wide.column(2)?.values(), AnyValues::Float64(vec![0.0, 2.5, 0.0]));
    assert_eq!(wide.column(3)?.values(), AnyValues::Float64(vec![0.0, 0.0, 3.5]));

    // Cells never written are null
    assert_eq!(wide.column(1)?.na_indices(), vec![1, 2]);
    assert_eq!(wide.column(2)?.na_indices(), vec![0, 2]);

    Ok(())
}

#[test]
fn test_pivot_repeated_values() -> Result<()> {
    let df = DataFrame::from_series(vec![
        Column::new_string("day", vec!["mon", "mon", "tue", "mon"]),
        Column::new_string("metric", vec!["temp", "wind", "temp", "temp"]),
        Column::new_int32("reading", vec![10, 3, 12, 11]),
    ])?;

    let wide = pivot(&df, "day", "metric", "reading")?;

    assert_eq!(wide.headers(), vec!["day", "temp", "wind"]);
    assert_eq!(wide.num_rows(), 2);
    // The later "mon"/"temp" row overwrites the earlier one
    let temp = wide.column_by_name("temp")?;
    assert_eq!(temp.get(0)?, Some(DataValue::Int32(11)));
    assert_eq!(temp.get(1)?, Some(DataValue::Int32(12)));

    let wind = wide.column_by_name("wind")?;
    assert_eq!(wind.get(0)?, Some(DataValue::Int32(3)));
    assert_eq!(wind.get(1)?, None);

    Ok(())
}

#[test]
fn test_pivot_missing_column() -> Result<()> {
    let df = DataFrame::from_series(vec![Column::new_int64("idx", vec![1])])?;
    assert!(matches!(
        df.pivot("idx", "cols", "vals"),
        Err(Error::NameNotFound(_))
    ));
    Ok(())
}

#[test]
fn test_pivot_nan_index_is_not_found() -> Result<()> {
    let df = DataFrame::from_series(vec![
        Column::new_float64("idx", vec![f64::NAN]),
        Column::new_int32("cols", vec![1]),
        Column::new_int32("vals", vec![1]),
    ])?;
    assert!(matches!(
        df.pivot("idx", "cols", "vals"),
        Err(Error::IndexValueNotFound(_))
    ));
    Ok(())
}
