//! Workbook I/O: calamine in, rust_xlsxwriter out.
//!
//! Each pipeline stage owns one `Document` for a single load-mutate-save
//! transaction; the next stage reloads its own copy from disk.

mod reader;
mod writer;

pub use writer::{ChartRefs, SeriesRef};

use crate::error::AnvilResult;
use crate::types::Grid;
use std::path::Path;

/// The first worksheet of a test record, loaded in memory.
#[derive(Debug, Clone)]
pub struct Document {
    pub sheet_name: String,
    pub grid: Grid,
}

impl Document {
    /// Load the first worksheet of an .xlsx file.
    pub fn open<P: AsRef<Path>>(path: P) -> AnvilResult<Self> {
        reader::load(path.as_ref())
    }

    /// Save the grid as a workbook at `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> AnvilResult<()> {
        writer::save(self, path.as_ref(), None)
    }

    /// Save with the stress-strain chart embedded at the anchor cell.
    pub fn save_with_chart<P: AsRef<Path>>(&self, path: P, refs: &ChartRefs) -> AnvilResult<()> {
        writer::save(self, path.as_ref(), Some(refs))
    }
}
