//! Maximum stress over the written Stress column.

use crate::error::{AnvilError, AnvilResult};
use crate::excel::Document;
use crate::types::Grid;
use std::path::Path;

use super::locate::find_labels;
use super::{MAX_STRESS_LABEL, STRESS_LABEL, VALUE_ROW_OFFSET};

/// Numeric contents of a column from row 2 to the data extent, skipping
/// headers and any non-numeric cells.
fn column_values(grid: &Grid, col: u16) -> Vec<f64> {
    (2..=grid.max_row())
        .filter_map(|row| grid.number_at(row, col))
        .collect()
}

/// Arithmetic maximum of a series; `None` when it has no usable points.
pub fn maximum_stress(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::max)
}

/// Re-read the written Stress column of a derived record, take its maximum
/// and record it beneath the "Maximum Stress, σc" label. Saves in place.
///
/// Unlike the other calculators this works from the persisted column, not
/// the in-memory curve, so it is idempotent over an unchanged file.
pub fn record_max_stress(path: &Path) -> AnvilResult<f64> {
    let mut document = Document::open(path)?;
    let index = find_labels(&document.grid, &[STRESS_LABEL, MAX_STRESS_LABEL]);

    let stress_position = index
        .first(STRESS_LABEL)
        .ok_or_else(|| AnvilError::MissingLabel(STRESS_LABEL.to_string()))?;
    let values = column_values(&document.grid, stress_position.col);
    let max = maximum_stress(&values)
        .ok_or_else(|| AnvilError::EmptySeries(STRESS_LABEL.to_string()))?;

    let target = index
        .first(MAX_STRESS_LABEL)
        .ok_or_else(|| AnvilError::MissingLabel(MAX_STRESS_LABEL.to_string()))?;
    document
        .grid
        .set_number(target.row + VALUE_ROW_OFFSET, target.col, max);

    document.save(path)?;
    Ok(max)
}
