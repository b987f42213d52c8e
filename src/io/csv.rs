use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};

use crate::column::{Column, ColumnType, ColumnValue, TypedColumn};
use crate::config::{CsvOptions, EngineConfig};
use crate::dataframe::DataFrame;
use crate::error::{Error, Result};

/// Parses raw fields into a typed column; empty fields become null rows
fn parse_column<T: ColumnValue>(name: String, fields: &[String]) -> Result<Column> {
    let mut data = Vec::with_capacity(fields.len());
    let mut nulls = Vec::with_capacity(fields.len());
    for (row, field) in fields.iter().enumerate() {
        if field.is_empty() {
            data.push(T::default());
            nulls.push(true);
            continue;
        }
        let value = T::parse_str(field).map_err(|e| {
            Error::ParseError(format!("column '{}', row {}: {}", name, row, e))
        })?;
        data.push(value);
        nulls.push(false);
    }
    Ok(Column::from(TypedColumn::with_nulls(name, data, &nulls)))
}

/// Reads CSV text into a table.
///
/// Columns named in `types` are parsed to that type, the rest stay strings.
/// Without a header row, columns are named `column_0`, `column_1`, ...
pub fn read_csv<R: Read>(
    reader: R,
    options: &CsvOptions,
    types: &HashMap<String, ColumnType>,
) -> Result<DataFrame> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(options.delimiter_byte()?)
        .has_headers(options.has_header)
        .flexible(options.flexible)
        .trim(if options.trim { Trim::All } else { Trim::None })
        .from_reader(reader);

    let mut headers: Vec<String> = if options.has_header {
        rdr.headers()?.iter().map(|h| h.to_string()).collect()
    } else {
        Vec::new()
    };

    let mut fields: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
    for result in rdr.records() {
        let record = result?;
        if headers.is_empty() {
            headers = (0..record.len()).map(|i| format!("column_{}", i)).collect();
            fields = vec![Vec::new(); headers.len()];
        }
        for (i, column) in fields.iter_mut().enumerate() {
            // Short records pad with empty fields when `flexible` is set.
            column.push(record.get(i).unwrap_or("").to_string());
        }
    }

    for name in types.keys().filter(|name| !headers.contains(name)) {
        log::warn!("typed column '{}' is not present in the CSV input", name);
    }

    let mut columns = Vec::with_capacity(headers.len());
    for (name, values) in headers.into_iter().zip(fields) {
        let column = match types.get(&name) {
            Some(&ty) => dispatch_type!(ty, T => parse_column::<T>(name, &values)?),
            None => Column::new_string(name, values),
        };
        columns.push(column);
    }

    log::debug!(
        "read {} CSV columns x {} rows",
        columns.len(),
        columns.first().map(Column::len).unwrap_or(0)
    );
    DataFrame::from_series(columns)
}

/// Opens `path` and reads it with [`read_csv`]
pub fn read_csv_path<P: AsRef<Path>>(
    path: P,
    options: &CsvOptions,
    types: &HashMap<String, ColumnType>,
) -> Result<DataFrame> {
    let file = File::open(path.as_ref())?;
    read_csv(file, options, types)
}

/// Reads CSV text with the ingestion settings and column types of `config`
pub fn read_csv_with_config<R: Read>(reader: R, config: &EngineConfig) -> Result<DataFrame> {
    read_csv(reader, &config.csv, &config.column_types()?)
}
