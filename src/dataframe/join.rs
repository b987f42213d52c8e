//! Nested-loop joins.
//!
//! Every driver row is compared against every probe row, so the cost is
//! O(n·m). Probe rows come out in ascending order for each driver row and
//! null keys never match.

use crate::column::Column;
use crate::dataframe::record::RecordBatch;
use crate::dataframe::DataFrame;
use crate::error::{Error, Result};

/// Pairs each driver row with its matching probe rows.
///
/// A driver row without matches appears once, paired with `None`.
fn match_rows(driver: &Column, probe: &Column) -> Result<Vec<(usize, Option<usize>)>> {
    if driver.column_type() != probe.column_type() {
        return Err(Error::TypeMismatch {
            expected: driver.column_type(),
            found: probe.column_type(),
        });
    }

    let mut pairs = Vec::with_capacity(driver.len());
    for row in 0..driver.len() {
        let matches = if driver.is_null(row) {
            Vec::new()
        } else {
            probe.find_indices(&driver.value_at(row)?)?
        };

        if matches.is_empty() {
            pairs.push((row, None));
        } else {
            pairs.extend(matches.into_iter().map(|m| (row, Some(m))));
        }
    }
    Ok(pairs)
}

/// Driver columns followed by probe columns without the probe key
fn materialize(
    driver: &DataFrame,
    probe: &DataFrame,
    probe_key: &str,
    pairs: &[(usize, Option<usize>)],
) -> DataFrame {
    let driver_rows: Vec<Option<usize>> = pairs.iter().map(|&(d, _)| Some(d)).collect();
    let probe_rows: Vec<Option<usize>> = pairs.iter().map(|&(_, p)| p).collect();

    let mut columns: Vec<Column> = driver
        .columns()
        .iter()
        .map(|c| c.take_optional(&driver_rows))
        .collect();

    let probe_key_index = probe.column_index(probe_key);
    columns.extend(
        probe
            .columns()
            .iter()
            .enumerate()
            .filter(|(i, _)| Some(*i) != probe_key_index)
            .map(|(_, c)| c.take_optional(&probe_rows)),
    );

    DataFrame::from_parts(columns)
}

impl DataFrame {
    /// Left outer join of `self` on `left_key` with `right` on `right_key`.
    ///
    /// Output holds every left column, then every right column except the
    /// right key. Unmatched left rows get null right cells.
    pub fn left_join(&self, left_key: &str, right: &DataFrame, right_key: &str) -> Result<DataFrame> {
        let left_col = self.column_by_name(left_key)?;
        let right_col = right.column_by_name(right_key)?;

        let pairs = match_rows(left_col, right_col)?;
        let result = materialize(self, right, right_key, &pairs);

        log::debug!(
            "left join {}={}: {} x {} rows -> {} rows",
            left_key,
            right_key,
            self.num_rows(),
            right.num_rows(),
            result.num_rows()
        );
        Ok(result)
    }

    /// Right outer join, scanning `right` and probing `self`.
    ///
    /// Output holds every right column, then every left column except the
    /// left key. Unmatched right rows get null left cells.
    pub fn right_join(&self, left_key: &str, right: &DataFrame, right_key: &str) -> Result<DataFrame> {
        let left_col = self.column_by_name(left_key)?;
        let right_col = right.column_by_name(right_key)?;

        let pairs = match_rows(right_col, left_col)?;
        let result = materialize(right, self, left_key, &pairs);

        log::debug!(
            "right join {}={}: {} x {} rows -> {} rows",
            left_key,
            right_key,
            self.num_rows(),
            right.num_rows(),
            result.num_rows()
        );
        Ok(result)
    }

    /// Left join that builds each output row as a merged record batch and
    /// stacks them; the result equals [`left_join`](Self::left_join).
    pub fn left_join_em(&self, left_key: &str, right: &DataFrame, right_key: &str) -> Result<DataFrame> {
        let left_col = self.column_by_name(left_key)?;
        let right_col = right.column_by_name(right_key)?;

        let pairs = match_rows(left_col, right_col)?;
        let key_index = right
            .column_index(right_key)
            .ok_or_else(|| Error::NameNotFound(right_key.to_string()))?;
        let right_rest = right.drop_columns_by_indices(&[key_index])?;

        let mut batches = Vec::with_capacity(pairs.len().max(1));
        for &(l, r) in &pairs {
            let right_part = match r {
                Some(r) => right_rest.record(r)?,
                None => right_rest.empty_record(1),
            };
            batches.push(RecordBatch::merge(&[self.record(l)?, right_part])?);
        }
        if batches.is_empty() {
            batches.push(RecordBatch::merge(&[
                self.empty_record(0),
                right_rest.empty_record(0),
            ])?);
        }

        log::debug!(
            "left join (early materialization) {}={}: stacking {} row batches",
            left_key,
            right_key,
            batches.len()
        );
        DataFrame::from_records(&batches)
    }
}
