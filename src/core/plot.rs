//! Stress-strain chart embedded into the derived workbook.

use crate::error::{AnvilError, AnvilResult};
use crate::excel::{ChartRefs, Document, SeriesRef};
use crate::types::Curve;
use std::path::Path;

use super::locate::find_labels;
use super::{STRAIN_LABEL, STRESS_LABEL, VALUE_ROW_OFFSET};

/// Embed the stress-strain chart at the fixed anchor cell and save in place.
///
/// This is the one place the two series lengths are compared; derivation
/// trusts the Force and Stroke columns to be parallel until here. The chart
/// references the written output columns, so both must exist.
pub fn embed_chart(path: &Path, curve: &Curve) -> AnvilResult<()> {
    if curve.stress.len() != curve.strain.len() {
        return Err(AnvilError::LengthMismatch {
            stress: curve.stress.len(),
            strain: curve.strain.len(),
        });
    }
    if curve.strain.is_empty() {
        return Err(AnvilError::EmptySeries(STRAIN_LABEL.to_string()));
    }

    let document = Document::open(path)?;
    let index = find_labels(&document.grid, &[STRESS_LABEL, STRAIN_LABEL]);
    let stress_position = index
        .first(STRESS_LABEL)
        .ok_or_else(|| AnvilError::MissingLabel(STRESS_LABEL.to_string()))?;
    let strain_position = index
        .first(STRAIN_LABEL)
        .ok_or_else(|| AnvilError::MissingLabel(STRAIN_LABEL.to_string()))?;

    let refs = ChartRefs {
        strain: SeriesRef {
            first_row: strain_position.row + VALUE_ROW_OFFSET,
            col: strain_position.col,
        },
        stress: SeriesRef {
            first_row: stress_position.row + VALUE_ROW_OFFSET,
            col: stress_position.col,
        },
        len: curve.strain.len() as u32,
    };
    document.save_with_chart(path, &refs)
}
