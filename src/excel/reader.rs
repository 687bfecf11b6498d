//! Workbook reader - .xlsx → Grid

use crate::error::{AnvilError, AnvilResult};
use crate::types::Grid;
use calamine::{open_workbook, Data, Reader, Xlsx};
use std::path::Path;

use super::Document;

/// Load the first worksheet into a `Document`.
///
/// Cell coordinates are absolute and 1-indexed, regardless of where the used
/// range of the sheet starts.
pub(super) fn load(path: &Path) -> AnvilResult<Document> {
    let mut workbook: Xlsx<_> = open_workbook(path)
        .map_err(|e| AnvilError::Load(format!("{}: {}", path.display(), e)))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| AnvilError::Load(format!("{}: workbook has no worksheets", path.display())))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| AnvilError::Load(format!("{}: {}", path.display(), e)))?;

    let mut grid = Grid::new();
    if let Some((start_row, start_col)) = range.start() {
        for (row, col, cell) in range.used_cells() {
            let row = start_row + row as u32 + 1;
            let col = (start_col + col as u32 + 1) as u16;
            match cell {
                Data::Float(f) => grid.set_number(row, col, *f),
                Data::Int(i) => grid.set_number(row, col, *i as f64),
                Data::String(s) => grid.set_text(row, col, s.clone()),
                // Booleans, dates and error cells play no role in a test
                // record; they read as empty, like the gaps in a column.
                _ => {}
            }
        }
    }

    Ok(Document { sheet_name, grid })
}
