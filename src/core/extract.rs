//! Reading labeled values out of the grid.

use crate::error::{AnvilError, AnvilResult};
use crate::types::{Geometry, Grid, LabelIndex};

use super::{LENGTH_LABEL, THICKNESS_LABEL, VALUE_ROW_OFFSET, WIDTH_LABEL};

/// Numeric value two rows below the label's first occurrence.
pub fn scalar_below(grid: &Grid, index: &LabelIndex, label: &str) -> AnvilResult<f64> {
    let position = index
        .first(label)
        .ok_or_else(|| AnvilError::MissingLabel(label.to_string()))?;
    grid.number_at(position.row + VALUE_ROW_OFFSET, position.col)
        .ok_or_else(|| AnvilError::NonNumericValue(label.to_string()))
}

/// Every numeric cell beneath the label, down to the sheet's data extent.
///
/// All occurrences of the label contribute, in sheet order. Non-numeric and
/// empty cells are skipped, not treated as terminators. An absent label
/// yields an empty series rather than an error.
pub fn series_below(grid: &Grid, index: &LabelIndex, label: &str) -> Vec<f64> {
    let max_row = grid.max_row();
    let mut series = Vec::new();
    for position in index.occurrences(label) {
        for row in position.row + 1..=max_row {
            if let Some(value) = grid.number_at(row, position.col) {
                series.push(value);
            }
        }
    }
    series
}

/// Specimen geometry. All three dimensions must be present and numeric
/// before any derived quantity is computed.
pub fn read_geometry(grid: &Grid, index: &LabelIndex) -> AnvilResult<Geometry> {
    Ok(Geometry {
        length: scalar_below(grid, index, LENGTH_LABEL)?,
        width: scalar_below(grid, index, WIDTH_LABEL)?,
        thickness: scalar_below(grid, index, THICKNESS_LABEL)?,
    })
}
