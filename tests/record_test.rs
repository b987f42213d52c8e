use colframe::error::{Error, Result};
use colframe::{AnyValues, Column, DataFrame, DataValue, RecordBatch};

fn table() -> Result<DataFrame> {
    DataFrame::from_series(vec![
        Column::new_int32("id", vec![1, 2, 3]),
        Column::from_options("tag", vec![Some("x".to_string()), None, Some("z".to_string())]),
    ])
}

#[test]
fn test_record_is_zero_copy_row() -> Result<()> {
    let df = table()?;
    let record = df.record(1)?;

    assert_eq!(record.num_rows(), 1);
    assert_eq!(record.num_cols(), 2);
    assert_eq!(record.schema().names(), vec!["id", "tag"]);
    assert!(record.columns()[0].shares_storage(df.column(0)?));
    assert_eq!(record.columns()[1].na_indices(), vec![0]);

    assert!(matches!(df.record(3), Err(Error::IndexOutOfBounds { .. })));
    Ok(())
}

#[test]
fn test_from_records_round_trip_keeps_nulls() -> Result<()> {
    let df = table()?;
    let batches: Vec<RecordBatch> = (0..df.num_rows())
        .map(|i| df.record(i))
        .collect::<Result<_>>()?;

    let rebuilt = DataFrame::from_records(&batches)?;
    assert_eq!(rebuilt.dims(), (3, 2));
    assert_eq!(rebuilt.column(0)?.values(), AnyValues::Int32(vec![1, 2, 3]));
    assert_eq!(rebuilt.column(1)?.na_indices(), vec![1]);

    Ok(())
}

#[test]
fn test_from_records_errors() -> Result<()> {
    assert!(matches!(
        DataFrame::from_records(&[]),
        Err(Error::ConstructionError(_))
    ));

    let a = table()?.record(0)?;
    let b = RecordBatch::try_new(vec![Column::new_int64("id", vec![1])])?;
    assert!(matches!(
        DataFrame::from_records(&[a, b]),
        Err(Error::SchemaMismatch(_))
    ));

    Ok(())
}

#[test]
fn test_merge_and_empty_record() -> Result<()> {
    let df = table()?;
    let extra = DataFrame::from_series(vec![Column::new_float64("w", vec![0.5, 1.5, 2.5])])?;

    let merged = RecordBatch::merge(&[df.record(2)?, extra.record(2)?])?;
    assert_eq!(merged.schema().names(), vec!["id", "tag", "w"]);
    assert_eq!(
        merged.column(2).map(|c| c.values()),
        Some(AnyValues::Float64(vec![2.5]))
    );

    let mismatch = RecordBatch::merge(&[df.record(0)?, extra.to_record_batch()]);
    assert!(matches!(mismatch, Err(Error::LengthMismatch { .. })));

    let blank = df.empty_record(2);
    assert_eq!(blank.num_rows(), 2);
    assert!(blank.columns().iter().all(|c| c.null_count() == 2));

    Ok(())
}

#[test]
fn test_append_records() -> Result<()> {
    let df = table()?;
    let more = df.append_records(&[df.empty_record(1), df.record(0)?])?;

    assert_eq!(more.num_rows(), 5);
    assert_eq!(more.column(0)?.na_indices(), vec![3]);
    assert_eq!(more.value(4, 0)?, Some(DataValue::Int32(1)));

    Ok(())
}

#[test]
fn test_apply_to_records() -> Result<()> {
    let df = table()?;

    let doubled = df.apply_to_records(|record| {
        let columns = record
            .columns()
            .iter()
            .map(|c| {
                c.map(|v| match v {
                    DataValue::Int32(x) => DataValue::Int32(x * 2),
                    other => other,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        RecordBatch::try_new(columns)
    })?;

    assert_eq!(doubled.column(0)?.values(), AnyValues::Int32(vec![2, 4, 6]));
    assert_eq!(doubled.column(1)?.na_indices(), vec![1]);

    Ok(())
}
