//! Full-sheet label search.

use crate::types::{Grid, LabelIndex, Position};

/// Scan the whole grid once, recording every occurrence of every requested
/// label in sheet scan order.
///
/// Matching is exact string equality: no trimming, no case folding. Labels
/// that never occur keep an empty occurrence list.
pub fn find_labels(grid: &Grid, labels: &[&str]) -> LabelIndex {
    let mut index = LabelIndex::new(labels);
    for (position, value) in grid.cells() {
        if let Some(text) = value.as_text() {
            index.record(text, position);
        }
    }
    index
}

/// First cell whose text contains `needle`, in row-major scan order.
///
/// Substring matching exists only for the energy label, which is generated
/// with a variable numeric suffix; every other lookup is exact.
pub fn find_containing(grid: &Grid, needle: &str) -> Option<Position> {
    grid.cells().find_map(|(position, value)| {
        value
            .as_text()
            .filter(|text| text.contains(needle))
            .map(|_| position)
    })
}
