//! Absorbed energy: integral of stress over strain up to a cutoff.

use crate::error::{AnvilError, AnvilResult};
use crate::excel::Document;
use crate::types::Curve;
use std::path::Path;

use super::locate::find_containing;
use super::VALUE_ROW_OFFSET;

/// Composite Simpson quadrature over possibly unevenly spaced samples.
///
/// Interval pairs use the non-uniform Simpson weights; an odd interval count
/// finishes with a trapezoid over the final segment. Callers guarantee at
/// least two samples.
fn simpson(y: &[f64], x: &[f64]) -> f64 {
    debug_assert_eq!(y.len(), x.len());
    let intervals = x.len() - 1;
    let mut integral = 0.0;

    let mut i = 0;
    while i + 2 <= intervals {
        let h0 = x[i + 1] - x[i];
        let h1 = x[i + 2] - x[i + 1];
        let h = h0 + h1;
        integral += (h / 6.0)
            * ((2.0 - h1 / h0) * y[i]
                + (h * h / (h0 * h1)) * y[i + 1]
                + (2.0 - h0 / h1) * y[i + 2]);
        i += 2;
    }

    if intervals % 2 == 1 {
        integral += (x[intervals] - x[intervals - 1]) * (y[intervals] + y[intervals - 1]) / 2.0;
    }

    integral
}

/// Stress/strain pairs at or below the cutoff. The cutoff arrives in percent
/// and is applied as a fraction.
fn below_threshold(curve: &Curve, threshold_percent: f64) -> Curve {
    let cutoff = threshold_percent / 100.0;
    let mut subset = Curve::default();
    for (stress, strain) in curve.stress.iter().zip(&curve.strain) {
        if *strain <= cutoff {
            subset.stress.push(*stress);
            subset.strain.push(*strain);
        }
    }
    subset
}

/// Definite integral of stress over strain up to the cutoff percentage.
/// Quadrature needs at least two samples under the cutoff.
pub fn energy_below(curve: &Curve, threshold_percent: f64) -> AnvilResult<f64> {
    let subset = below_threshold(curve, threshold_percent);
    if subset.strain.len() < 2 {
        return Err(AnvilError::InsufficientData(threshold_percent));
    }
    Ok(simpson(&subset.stress, &subset.strain))
}

/// Cell label for an energy result, e.g. 40 → "Energy up to 40% Strain, E0.40".
///
/// The percentage is trimmed of trailing zeros and the short-form suffix
/// carries its integer part. Sheets match this text by substring, so suffix
/// variants with extra annotation still resolve.
pub fn energy_label(threshold_percent: f64) -> String {
    format!(
        "Energy up to {}% Strain, E0.{}",
        trim_zeros(threshold_percent),
        threshold_percent.trunc() as i64
    )
}

fn trim_zeros(value: f64) -> String {
    format!("{value:.6}")
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Integrate the curve up to the cutoff, locate the matching energy label by
/// substring and record the result beneath it. Saves in place.
pub fn record_energy(path: &Path, curve: &Curve, threshold_percent: f64) -> AnvilResult<f64> {
    let energy = energy_below(curve, threshold_percent)?;
    let label = energy_label(threshold_percent);

    let mut document = Document::open(path)?;
    let target = find_containing(&document.grid, &label)
        .ok_or(AnvilError::LabelNotFound(label))?;
    document
        .grid
        .set_number(target.row + VALUE_ROW_OFFSET, target.col, energy);
    document.save(path)?;
    Ok(energy)
}
