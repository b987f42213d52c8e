use colframe::error::{Error, Result};
use colframe::{Column, DataFrame, EngineConfig, Matrix, Table, TableReader, Vector};

fn grid() -> Result<DataFrame> {
    DataFrame::from_series(vec![
        Column::new_int32("a", vec![1, 2, 3]),
        Column::new_float64("b", vec![0.5, 1.5, 2.5]),
    ])
}

#[test]
fn test_matrix_view() -> Result<()> {
    let df = grid()?;

    assert_eq!(Matrix::dims(&df), (3, 2));
    assert_eq!(df.at(2, 1)?, 2.5);

    let t = df.t();
    assert_eq!(t.dims(), (2, 3));
    assert_eq!(t.at(1, 2)?, 2.5);
    assert_eq!(t.at(0, 1)?, 2.0);
    assert_eq!(t.to_rows()?, vec![vec![1.0, 2.0, 3.0], vec![0.5, 1.5, 2.5]]);

    assert!(matches!(df.at(0, 5), Err(Error::IndexOutOfBounds { .. })));

    Ok(())
}

#[test]
fn test_vector_view() -> Result<()> {
    let col = Column::new_string("s", vec!["1.5", ""]);
    assert_eq!(Vector::len(&col), 2);
    assert_eq!(Vector::at_vec(&col, 0)?, 1.5);
    assert_eq!(Vector::at_vec(&col, 1)?, 0.0);

    assert_eq!(Matrix::dims(&col), (2, 1));
    assert_eq!(col.at(0, 0)?, 1.5);
    assert!(matches!(col.at(0, 1), Err(Error::IndexOutOfBounds { .. })));

    let t = col.t();
    assert_eq!(t.dims(), (1, 2));
    assert_eq!(t.at(0, 0)?, 1.5);
    assert_eq!(t.at(0, 1)?, 0.0);
    assert_eq!(t.to_rows()?, vec![vec![1.5, 0.0]]);
    Ok(())
}

#[test]
fn test_table_reader_batches() -> Result<()> {
    let df = grid()?;

    let batches = TableReader::new(&df, 2)?.collect::<Result<Vec<_>>>()?;
    assert_eq!(batches.len(), 2);
    assert_eq!(batches[0].num_rows(), 2);
    assert_eq!(batches[1].num_rows(), 1);
    assert!(batches[1].columns()[0].shares_storage(df.column(0)?));

    let rebuilt = DataFrame::from_records(&batches)?;
    assert_eq!(rebuilt.dims(), df.dims());

    let whole = TableReader::with_config(&df, &EngineConfig::default())?
        .collect::<Result<Vec<_>>>()?;
    assert_eq!(whole.len(), 1);
    assert_eq!(Table::num_rows(&whole[0]), 3);
    assert_eq!(Table::schema(&whole[0]), Table::schema(&df));

    assert!(matches!(
        TableReader::new(&df, 0),
        Err(Error::ConstructionError(_))
    ));

    Ok(())
}
