//! Compression modulus via a best-fit window search over the curve.

use crate::error::AnvilResult;
use crate::excel::Document;
use crate::types::Curve;
use std::path::Path;

use super::locate::find_labels;
use super::{MODULUS_LABEL, MODULUS_WINDOW, VALUE_ROW_OFFSET};

/// Ordinary least-squares fit of y on x, returning (slope, r_squared).
///
/// A window with zero x variance has no defined slope; the division yields a
/// non-finite r_squared, which the window search never accepts.
fn linear_fit(x: &[f64], y: &[f64]) -> (f64, f64) {
    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut ss_xy = 0.0;
    let mut ss_xx = 0.0;
    let mut ss_yy = 0.0;
    for (xi, yi) in x.iter().zip(y) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        ss_xy += dx * dy;
        ss_xx += dx * dx;
        ss_yy += dy * dy;
    }

    let slope = ss_xy / ss_xx;
    let r_squared = (ss_xy * ss_xy) / (ss_xx * ss_yy);
    (slope, r_squared)
}

/// Slope of the best-fitting fixed-width window over the stress-strain curve.
///
/// Every contiguous window of [`MODULUS_WINDOW`] samples is fitted and ranked
/// by r-squared. The running best starts below any valid r-squared, so the
/// first finite window always replaces it; ties keep the earliest window
/// (strict comparison). A curve shorter than one window runs zero fits and
/// reports a slope of 0.
pub fn compression_modulus(curve: &Curve) -> f64 {
    let mut best_slope = 0.0;
    let mut max_r_squared = -1.0;

    let windows = curve
        .strain
        .windows(MODULUS_WINDOW)
        .zip(curve.stress.windows(MODULUS_WINDOW));
    for (strain, stress) in windows {
        let (slope, r_squared) = linear_fit(strain, stress);
        if r_squared > max_r_squared {
            max_r_squared = r_squared;
            best_slope = slope;
        }
    }

    best_slope
}

/// Fit the modulus and record it beneath every "Comp. Modulus, Ec" label in
/// the sheet. Unlike the other result writers this updates all occurrences,
/// not just the first, and a sheet without the label is left untouched.
/// Saves in place.
pub fn record_modulus(path: &Path, curve: &Curve) -> AnvilResult<f64> {
    let slope = compression_modulus(curve);

    let mut document = Document::open(path)?;
    let index = find_labels(&document.grid, &[MODULUS_LABEL]);
    for position in index.occurrences(MODULUS_LABEL) {
        document
            .grid
            .set_number(position.row + VALUE_ROW_OFFSET, position.col, slope);
    }
    document.save(path)?;
    Ok(slope)
}
