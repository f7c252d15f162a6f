use serde::{Deserialize, Serialize};

use super::heading::Heading;

/// A grid cell, addressed by (column, row) with (0, 0) at the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub col: i32,
    pub row: i32,
}

impl Cell {
    pub fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Offset by a (dcol, drow) delta.
    pub fn offset_by(&self, dcol: i32, drow: i32) -> Self {
        Self {
            col: self.col + dcol,
            row: self.row + drow,
        }
    }

    /// The neighboring cell one step in the given heading.
    pub fn stepped(&self, heading: Heading) -> Self {
        let (dcol, drow) = heading.delta();
        self.offset_by(dcol, drow)
    }
}

/// Playfield geometry: bounds in cells plus the cell size used to map
/// grid coordinates into the pixel space the renderer draws in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridModel {
    cols: i32,
    rows: i32,
    cell_size: u16,
}

impl GridModel {
    pub fn new(cols: i32, rows: i32, cell_size: u16) -> Self {
        Self {
            cols,
            rows,
            cell_size,
        }
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn cell_size(&self) -> u16 {
        self.cell_size
    }

    /// Whether a cell lies inside the playfield.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.col >= 0 && cell.col < self.cols && cell.row >= 0 && cell.row < self.rows
    }

    /// The cell closest to the middle of the playfield.
    pub fn center(&self) -> Cell {
        Cell::new(self.cols / 2, self.rows / 2)
    }

    pub fn pixel_width(&self) -> f64 {
        f64::from(self.cols) * f64::from(self.cell_size)
    }

    pub fn pixel_height(&self) -> f64 {
        f64::from(self.rows) * f64::from(self.cell_size)
    }

    /// Pixel-space center of a (possibly fractional) grid position.
    pub fn px_center(&self, col: f64, row: f64) -> (f64, f64) {
        let size = f64::from(self.cell_size);
        ((col + 0.5) * size, (row + 0.5) * size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_offsets() {
        let cell = Cell::new(5, 5);
        assert_eq!(cell.offset_by(1, 0), Cell::new(6, 5));
        assert_eq!(cell.offset_by(-1, 0), Cell::new(4, 5));
        assert_eq!(cell.offset_by(0, 1), Cell::new(5, 6));
        assert_eq!(cell.offset_by(0, -1), Cell::new(5, 4));
    }

    #[test]
    fn test_stepped_follows_heading() {
        let cell = Cell::new(5, 5);
        assert_eq!(cell.stepped(Heading::Up), Cell::new(5, 4));
        assert_eq!(cell.stepped(Heading::Down), Cell::new(5, 6));
        assert_eq!(cell.stepped(Heading::Left), Cell::new(4, 5));
        assert_eq!(cell.stepped(Heading::Right), Cell::new(6, 5));
    }

    #[test]
    fn test_bounds_checking() {
        let grid = GridModel::new(20, 20, 20);

        assert!(grid.contains(Cell::new(0, 0)));
        assert!(grid.contains(Cell::new(19, 19)));
        assert!(!grid.contains(Cell::new(-1, 0)));
        assert!(!grid.contains(Cell::new(20, 0)));
        assert!(!grid.contains(Cell::new(0, 20)));
    }

    #[test]
    fn test_pixel_conversions() {
        let grid = GridModel::new(30, 20, 20);
        assert_eq!(grid.pixel_width(), 600.0);
        assert_eq!(grid.pixel_height(), 400.0);
        assert_eq!(grid.px_center(0.0, 0.0), (10.0, 10.0));
        assert_eq!(grid.px_center(2.5, 1.0), (60.0, 30.0));
    }

    #[test]
    fn test_center_cell() {
        let grid = GridModel::new(30, 20, 20);
        assert_eq!(grid.center(), Cell::new(15, 10));
    }
}
