use colframe::error::{Error, Result};
use colframe::{AnyValues, Column, DataFrame, DataValue};

fn left_table() -> Result<DataFrame> {
    DataFrame::from_series(vec![
        Column::new_int64("id", vec![1, 2, 3, 4, 5, 11]),
        Column::new_string("name", vec!["a", "b", "c", "d", "e", "k"]),
    ])
}

fn right_table() -> Result<DataFrame> {
    DataFrame::from_series(vec![
        Column::new_int64("rid", vec![1, 2, 2, 5, 8]),
        Column::new_int64("amount", vec![111, 222, 202020, 555, 888]),
    ])
}

fn assert_scenario(joined: &DataFrame) -> Result<()> {
    assert_eq!(joined.dims(), (7, 3));
    assert_eq!(joined.headers(), vec!["id", "name", "amount"]);
    assert_eq!(
        joined.column(0)?.values(),
        AnyValues::Int64(vec![1, 2, 2, 3, 4, 5, 11])
    );

    let amount = joined.column(2)?;
    let cells: Vec<Option<DataValue>> = (0..amount.len())
        .map(|i| amount.get(i))
        .collect::<Result<_>>()?;
    assert_eq!(
        cells,
        vec![
            Some(DataValue::Int64(111)),
            Some(DataValue::Int64(222)),
            Some(DataValue::Int64(202020)),
            None,
            None,
            Some(DataValue::Int64(555)),
            None,
        ]
    );
    Ok(())
}

#[test]
fn test_left_join_scenario() -> Result<()> {
    let joined = left_table()?.left_join("id", &right_table()?, "rid")?;
    assert_scenario(&joined)
}

#[test]
fn test_left_join_em_matches_left_join() -> Result<()> {
    let left = left_table()?;
    let right = right_table()?;

    let lazy = left.left_join("id", &right, "rid")?;
    let early = left.left_join_em("id", &right, "rid")?;
    assert_scenario(&early)?;

    for i in 0..lazy.num_cols() {
        assert_eq!(lazy.column(i)?.values(), early.column(i)?.values());
        assert_eq!(lazy.column(i)?.na_indices(), early.column(i)?.na_indices());
    }
    Ok(())
}

#[test]
fn test_null_keys_never_match() -> Result<()> {
    let left = DataFrame::from_series(vec![Column::from_options(
        "k",
        vec![Some(0i32), None, Some(1)],
    )])?;
    let right = DataFrame::from_series(vec![
        Column::from_options("k", vec![None, Some(0i32), Some(1)]),
        Column::new_string("v", vec!["null-row", "zero", "one"]),
    ])?;

    let joined = left.left_join("k", &right, "k")?;
    assert_eq!(joined.num_rows(), 3);

    let v = joined.column_by_name("v")?;
    assert_eq!(v.get(0)?, Some(DataValue::from("zero")));
    assert_eq!(v.get(1)?, None);
    assert_eq!(v.get(2)?, Some(DataValue::from("one")));
    // The left key keeps its own null
    assert_eq!(joined.column(0)?.na_indices(), vec![1]);

    Ok(())
}

#[test]
fn test_right_join() -> Result<()> {
    let joined = left_table()?.right_join("id", &right_table()?, "rid")?;

    assert_eq!(joined.headers(), vec!["rid", "amount", "name"]);
    assert_eq!(
        joined.column(0)?.values(),
        AnyValues::Int64(vec![1, 2, 2, 5, 8])
    );

    let name = joined.column(2)?;
    assert_eq!(name.get(0)?, Some(DataValue::from("a")));
    assert_eq!(name.get(2)?, Some(DataValue::from("b")));
    assert_eq!(name.get(3)?, Some(DataValue::from("e")));
    assert_eq!(name.get(4)?, None);

    Ok(())
}

#[test]
fn test_string_keys() -> Result<()> {
    let left = DataFrame::from_series(vec![Column::new_string("city", vec!["oslo", "rome"])])?;
    let right = DataFrame::from_series(vec![
        Column::new_string("city", vec!["rome", "oslo", "rome"]),
        Column::new_int32("year", vec![1, 2, 3]),
    ])?;

    let joined = left.left_join("city", &right, "city")?;
    assert_eq!(joined.column(1)?.values(), AnyValues::Int32(vec![2, 1, 3]));

    Ok(())
}

#[test]
fn test_join_errors() -> Result<()> {
    let left = left_table()?;
    let right = right_table()?;

    assert!(matches!(
        left.left_join("missing", &right, "rid"),
        Err(Error::NameNotFound(_))
    ));
    assert!(matches!(
        left.left_join("id", &right, "missing"),
        Err(Error::NameNotFound(_))
    ));
    assert!(matches!(
        left.left_join("name", &right, "rid"),
        Err(Error::TypeMismatch { .. })
    ));
    assert!(matches!(
        left.left_join_em("name", &right, "rid"),
        Err(Error::TypeMismatch { .. })
    ));

    Ok(())
}

#[test]
fn test_join_with_empty_left() -> Result<()> {
    let left = left_table()?.head(0);
    let right = right_table()?;

    let lazy = left.left_join("id", &right, "rid")?;
    let early = left.left_join_em("id", &right, "rid")?;
    assert_eq!(lazy.dims(), (0, 3));
    assert_eq!(early.dims(), (0, 3));

    Ok(())
}
