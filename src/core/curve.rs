//! Stress/strain derivation from the raw test record.

use crate::error::AnvilResult;
use crate::excel::Document;
use crate::types::{Curve, Geometry, Grid, LabelIndex};
use std::path::{Path, PathBuf};

use super::extract::{read_geometry, series_below};
use super::locate::find_labels;
use super::{
    FORCE_LABEL, LENGTH_LABEL, STRAIN_LABEL, STRESS_LABEL, STROKE_LABEL, THICKNESS_LABEL,
    VALUE_ROW_OFFSET, WIDTH_LABEL,
};

/// Engineering stress for each force sample: load over cross-sectional area.
pub fn stress_series(forces: &[f64], geometry: &Geometry) -> Vec<f64> {
    let area = geometry.area();
    forces.iter().map(|force| force / area).collect()
}

/// Percent strain for each displacement sample, relative to the original
/// thickness.
pub fn strain_series(strokes: &[f64], geometry: &Geometry) -> Vec<f64> {
    strokes
        .iter()
        .map(|stroke| (stroke / geometry.thickness) * 100.0)
        .collect()
}

/// Derive the curve from a grid and write it into the output columns.
///
/// Geometry is read before any series work, so a missing or malformed
/// dimension fails the run with no partial stress array. The stress and
/// strain series are computed independently; their lengths are only compared
/// at chart time.
pub fn derive_into_grid(grid: &mut Grid) -> AnvilResult<Curve> {
    let index = find_labels(
        grid,
        &[
            FORCE_LABEL,
            STROKE_LABEL,
            LENGTH_LABEL,
            WIDTH_LABEL,
            THICKNESS_LABEL,
            STRESS_LABEL,
            STRAIN_LABEL,
        ],
    );
    let geometry = read_geometry(grid, &index)?;

    let stress = stress_series(&series_below(grid, &index, FORCE_LABEL), &geometry);
    let strain = strain_series(&series_below(grid, &index, STROKE_LABEL), &geometry);

    write_column(grid, &index, STRESS_LABEL, &stress);
    write_column(grid, &index, STRAIN_LABEL, &strain);

    Ok(Curve::new(stress, strain))
}

/// Write values into successive rows starting two below the label's first
/// occurrence. A record without the output label simply keeps its curve in
/// memory only.
fn write_column(grid: &mut Grid, index: &LabelIndex, label: &str, values: &[f64]) {
    if let Some(position) = index.first(label) {
        for (i, value) in values.iter().enumerate() {
            grid.set_number(position.row + VALUE_ROW_OFFSET + i as u32, position.col, *value);
        }
    }
}

/// Sibling path marking the derived copy of a test record.
pub fn derived_path(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!("updated_{file_name}"))
}

/// Derive stress and strain from a test record, write the output columns and
/// save the augmented copy alongside the original. The source file is never
/// overwritten.
pub fn derive_curve(path: &Path) -> AnvilResult<(Curve, PathBuf)> {
    let mut document = Document::open(path)?;
    let curve = derive_into_grid(&mut document.grid)?;
    let output = derived_path(path);
    document.save(&output)?;
    Ok((curve, output))
}
