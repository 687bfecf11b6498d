//! Workbook writer - Grid → .xlsx, with optional embedded chart

use crate::error::AnvilResult;
use crate::types::CellValue;
use rust_xlsxwriter::{Chart, ChartType, Workbook};
use std::path::Path;

use super::Document;

/// Anchor cell for the embedded stress-strain chart (A20, 0-indexed).
const CHART_ANCHOR: (u32, u16) = (19, 0);

/// Chart size in pixels.
const CHART_WIDTH: u32 = 400;
const CHART_HEIGHT: u32 = 300;

/// Location of one written data column, in 1-indexed sheet coordinates.
#[derive(Debug, Clone, Copy)]
pub struct SeriesRef {
    pub first_row: u32,
    pub col: u16,
}

/// Cell ranges the embedded chart plots: stress (Y) over strain (X).
#[derive(Debug, Clone, Copy)]
pub struct ChartRefs {
    pub strain: SeriesRef,
    pub stress: SeriesRef,
    pub len: u32,
}

/// Write every used cell of the document to a fresh workbook and save it,
/// inserting the stress-strain chart when asked for.
pub(super) fn save(document: &Document, path: &Path, chart: Option<&ChartRefs>) -> AnvilResult<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(&document.sheet_name)?;

    for (position, value) in document.grid.cells() {
        // Sheet coordinates are 1-indexed, the writer API is 0-indexed
        let row = position.row - 1;
        let col = position.col - 1;
        match value {
            CellValue::Number(n) => worksheet.write_number(row, col, *n)?,
            CellValue::Text(s) => worksheet.write_string(row, col, s)?,
        };
    }

    if let Some(refs) = chart {
        let chart = build_chart(&document.sheet_name, refs);
        worksheet.insert_chart(CHART_ANCHOR.0, CHART_ANCHOR.1, &chart)?;
    }

    workbook.save(path)?;
    Ok(())
}

/// Scatter chart with straight lines and markers: strain percent on X,
/// stress on Y, referencing the written output columns.
fn build_chart(sheet_name: &str, refs: &ChartRefs) -> Chart {
    let strain_first = refs.strain.first_row - 1;
    let strain_last = strain_first + refs.len - 1;
    let stress_first = refs.stress.first_row - 1;
    let stress_last = stress_first + refs.len - 1;

    let mut chart = Chart::new(ChartType::ScatterStraightWithMarkers);
    chart
        .add_series()
        .set_categories((
            sheet_name,
            strain_first,
            refs.strain.col - 1,
            strain_last,
            refs.strain.col - 1,
        ))
        .set_values((
            sheet_name,
            stress_first,
            refs.stress.col - 1,
            stress_last,
            refs.stress.col - 1,
        ))
        .set_name("Stress-Strain Curve");

    chart.title().set_name("Stress-Strain Curve");
    chart.x_axis().set_name("Strain (%)");
    chart.y_axis().set_name("Stress (MPa)");
    chart.set_width(CHART_WIDTH).set_height(CHART_HEIGHT);
    chart
}
