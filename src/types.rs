use std::collections::{BTreeMap, HashMap};

//==============================================================================
// Sheet grid
//==============================================================================

/// Cell coordinates, 1-indexed like the sheet itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: u32,
    pub col: u16,
}

impl Position {
    pub fn new(row: u32, col: u16) -> Self {
        Self { row, col }
    }
}

/// A used cell holds either text or a number; absent cells are empty.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Number(f64),
    Text(String),
}

impl CellValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            CellValue::Number(_) => None,
        }
    }
}

/// Sparse sheet contents.
///
/// Keys are ordered row-major (row, then column), so iteration matches the
/// sheet scan order used for label lookup and write-back.
#[derive(Debug, Clone, Default)]
pub struct Grid {
    cells: BTreeMap<Position, CellValue>,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, row: u32, col: u16) -> Option<&CellValue> {
        self.cells.get(&Position::new(row, col))
    }

    /// Numeric value at (row, col), if the cell is used and numeric.
    pub fn number_at(&self, row: u32, col: u16) -> Option<f64> {
        self.get(row, col).and_then(CellValue::as_number)
    }

    pub fn set_number(&mut self, row: u32, col: u16, value: f64) {
        self.cells
            .insert(Position::new(row, col), CellValue::Number(value));
    }

    pub fn set_text(&mut self, row: u32, col: u16, text: impl Into<String>) {
        self.cells
            .insert(Position::new(row, col), CellValue::Text(text.into()));
    }

    /// Last used row; scans are bounded by this, like the sheet's max_row.
    pub fn max_row(&self) -> u32 {
        self.cells.keys().next_back().map(|p| p.row).unwrap_or(0)
    }

    /// Used cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, &CellValue)> {
        self.cells.iter().map(|(p, v)| (*p, v))
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

//==============================================================================
// Label index
//==============================================================================

/// Positions of each searched label, in sheet scan order.
///
/// Built fresh on every pass over a grid. Every searched label has an entry,
/// so an absent label reads as an empty sequence rather than an error. The
/// first occurrence is authoritative for scalar reads.
#[derive(Debug, Default)]
pub struct LabelIndex {
    positions: HashMap<String, Vec<Position>>,
}

impl LabelIndex {
    pub fn new(labels: &[&str]) -> Self {
        let positions = labels
            .iter()
            .map(|label| (label.to_string(), Vec::new()))
            .collect();
        Self { positions }
    }

    pub fn record(&mut self, label: &str, position: Position) {
        if let Some(found) = self.positions.get_mut(label) {
            found.push(position);
        }
    }

    /// All occurrences of a label, empty if it was never seen.
    pub fn occurrences(&self, label: &str) -> &[Position] {
        self.positions.get(label).map(Vec::as_slice).unwrap_or(&[])
    }

    /// First occurrence of a label.
    pub fn first(&self, label: &str) -> Option<Position> {
        self.occurrences(label).first().copied()
    }
}

//==============================================================================
// Specimen geometry and measurement series
//==============================================================================

/// Specimen dimensions read from the sheet, all in the sheet's units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub length: f64,
    pub width: f64,
    pub thickness: f64,
}

impl Geometry {
    /// Cross-sectional area resisting the load.
    pub fn area(&self) -> f64 {
        self.length * self.width
    }
}

/// Parallel stress/strain series, index-aligned in the row order they were
/// read. Strain is in percent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Curve {
    pub stress: Vec<f64>,
    pub strain: Vec<f64>,
}

impl Curve {
    pub fn new(stress: Vec<f64>, strain: Vec<f64>) -> Self {
        Self { stress, strain }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_get_and_set() {
        let mut grid = Grid::new();
        grid.set_text(1, 1, "Force");
        grid.set_number(2, 1, 120.5);

        assert_eq!(grid.get(1, 1), Some(&CellValue::Text("Force".to_string())));
        assert_eq!(grid.number_at(2, 1), Some(120.5));
        assert_eq!(grid.number_at(1, 1), None); // text cell is not numeric
        assert_eq!(grid.get(3, 1), None);
    }

    #[test]
    fn test_grid_max_row_tracks_writes() {
        let mut grid = Grid::new();
        assert_eq!(grid.max_row(), 0);

        grid.set_number(4, 2, 1.0);
        assert_eq!(grid.max_row(), 4);

        grid.set_number(9, 1, 2.0);
        assert_eq!(grid.max_row(), 9);
    }

    #[test]
    fn test_grid_cells_iterate_row_major() {
        let mut grid = Grid::new();
        grid.set_number(2, 1, 3.0);
        grid.set_number(1, 2, 2.0);
        grid.set_number(1, 1, 1.0);

        let order: Vec<Position> = grid.cells().map(|(p, _)| p).collect();
        assert_eq!(
            order,
            vec![
                Position::new(1, 1),
                Position::new(1, 2),
                Position::new(2, 1)
            ]
        );
    }

    #[test]
    fn test_label_index_absent_label_is_empty_not_error() {
        let index = LabelIndex::new(&["Force"]);
        assert!(index.occurrences("Force").is_empty());
        assert_eq!(index.first("Force"), None);
        // A label that was never searched also reads as empty
        assert!(index.occurrences("Stroke").is_empty());
    }

    #[test]
    fn test_label_index_first_occurrence_wins() {
        let mut index = LabelIndex::new(&["Force"]);
        index.record("Force", Position::new(5, 1));
        index.record("Force", Position::new(12, 3));

        assert_eq!(index.first("Force"), Some(Position::new(5, 1)));
        assert_eq!(index.occurrences("Force").len(), 2);
    }

    #[test]
    fn test_geometry_area() {
        let geometry = Geometry {
            length: 10.0,
            width: 5.0,
            thickness: 2.0,
        };
        assert_eq!(geometry.area(), 50.0);
    }
}
