use std::collections::HashMap;
use std::io::{Cursor, Write};

use colframe::error::{Error, Result};
use colframe::{
    read_csv, read_csv_path, read_csv_with_config, AnyValues, ColumnType, CsvOptions, DataValue,
    EngineConfig,
};
use tempfile::NamedTempFile;

fn types(pairs: &[(&str, ColumnType)]) -> HashMap<String, ColumnType> {
    pairs.iter().map(|(n, t)| (n.to_string(), *t)).collect()
}

#[test]
fn test_read_csv_untyped_columns_are_strings() -> Result<()> {
    let data = "id,name\n1,alice\n2,bob\n";
    let df = read_csv(Cursor::new(data), &CsvOptions::default(), &HashMap::new())?;

    assert_eq!(df.dims(), (2, 2));
    assert_eq!(df.headers(), vec!["id", "name"]);
    assert_eq!(df.column(0)?.column_type(), ColumnType::String);
    assert_eq!(
        df.column(1)?.values(),
        AnyValues::String(vec!["alice".to_string(), "bob".to_string()])
    );

    Ok(())
}

#[test]
fn test_read_csv_with_types() -> Result<()> {
    let data = "id,price,label\n1,2.5,x\n2,,y\n3,4.0,\n";
    let df = read_csv(
        Cursor::new(data),
        &CsvOptions::default(),
        &types(&[("id", ColumnType::Int64), ("price", ColumnType::Float32)]),
    )?;

    assert_eq!(df.column(0)?.values(), AnyValues::Int64(vec![1, 2, 3]));
    let price = df.column(1)?;
    assert_eq!(price.column_type(), ColumnType::Float32);
    assert_eq!(price.na_indices(), vec![1]);
    assert_eq!(price.get(2)?, Some(DataValue::Float32(4.0)));
    // Untyped string columns keep empty fields as values
    assert_eq!(df.column(2)?.null_count(), 0);

    Ok(())
}

#[test]
fn test_read_csv_parse_failure() {
    let data = "id\n1\nnope\n";
    let err = read_csv(
        Cursor::new(data),
        &CsvOptions::default(),
        &types(&[("id", ColumnType::Int32)]),
    )
    .unwrap_err();
    assert!(matches!(err, Error::ParseError(_)));
}

#[test]
fn test_read_csv_options() -> Result<()> {
    let options = CsvOptions {
        delimiter: ';',
        has_header: false,
        trim: true,
        flexible: false,
    };
    let df = read_csv(
        Cursor::new("1; a\n2; b\n"),
        &options,
        &types(&[("column_0", ColumnType::Int32)]),
    )?;

    assert_eq!(df.headers(), vec!["column_0", "column_1"]);
    assert_eq!(df.column(0)?.values(), AnyValues::Int32(vec![1, 2]));
    assert_eq!(df.value(1, 1)?, Some(DataValue::from("b")));

    Ok(())
}

#[test]
fn test_read_csv_path() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "a,b")?;
    writeln!(file, "1,2")?;
    file.flush()?;

    let df = read_csv_path(
        file.path(),
        &CsvOptions::default(),
        &types(&[("a", ColumnType::Int64), ("b", ColumnType::Float64)]),
    )?;
    assert_eq!(df.dims(), (1, 2));
    assert_eq!(df.column(1)?.values(), AnyValues::Float64(vec![2.0]));

    assert!(matches!(
        read_csv_path("/nonexistent/input.csv", &CsvOptions::default(), &HashMap::new()),
        Err(Error::Io(_))
    ));

    Ok(())
}

#[test]
fn test_read_csv_with_config() -> Result<()> {
    let config = EngineConfig::from_toml_str(
        r#"
[csv]
delimiter = ";"

[types]
id = "int32"
"#,
    )?;

    let df = read_csv_with_config(Cursor::new("id;name\n7;a\n;b\n"), &config)?;
    let id = df.column(0)?;
    assert_eq!(id.column_type(), ColumnType::Int32);
    assert_eq!(id.get(0)?, Some(DataValue::Int32(7)));
    assert_eq!(id.na_indices(), vec![1]);
    assert_eq!(df.column(1)?.column_type(), ColumnType::String);

    Ok(())
}
