use crate::error::{Result, check_dimensions};

use super::cell::Cell;

/// A `(row, col)` position in the grid.
///
/// Ordered row-major, which is what gives graph edges over coordinates
/// their canonical endpoint order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Coord { row, col }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    data: Box<[Cell]>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Creates a grid made only of walls.
    pub fn new(height: usize, width: usize) -> Result<Self> {
        check_dimensions(height, width)?;
        Ok(Grid {
            data: vec![Cell::Wall; width * height].into_boxed_slice(),
            width,
            height,
        })
    }

    /// Builds a grid from already validated row-major cells.
    pub(crate) fn from_cells(height: usize, width: usize, data: Vec<Cell>) -> Self {
        debug_assert_eq!(data.len(), height * width);
        Grid {
            data: data.into_boxed_slice(),
            width,
            height,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        coord.row < self.height && coord.col < self.width
    }

    pub fn is_boundary(&self, coord: Coord) -> bool {
        coord.row == 0
            || coord.col == 0
            || coord.row == self.height - 1
            || coord.col == self.width - 1
    }

    fn ravel_index(&self, coord: Coord) -> usize {
        coord.row * self.width + coord.col
    }

    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.is_in_bounds(coord)
            .then(|| self.data[self.ravel_index(coord)])
    }

    pub fn cells(&self) -> &[Cell] {
        &self.data
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.data.chunks(self.width)
    }

    /// Opens every cell of the inclusive rectangle spanned by two corners, given in any order.
    /// Corners past the grid edge are clamped.
    pub fn open_rect(&mut self, from: Coord, to: Coord) {
        let (min_row, max_row) = (from.row.min(to.row), from.row.max(to.row));
        let (min_col, max_col) = (from.col.min(to.col), from.col.max(to.col));
        let max_row = max_row.min(self.height - 1);
        let max_col = max_col.min(self.width - 1);

        (min_row..=max_row).for_each(|row| {
            (min_col..=max_col).for_each(|col| {
                let idx = self.ravel_index(Coord { row, col });
                self.data[idx] = Cell::Open;
            });
        });
    }

    /// Opens a corridor between two cells.
    ///
    /// Aligned cells get a straight segment. Otherwise the corridor runs vertically
    /// from `from` down (or up) to the row of `to`, then horizontally along that row.
    pub fn carve_passage(&mut self, from: Coord, to: Coord) {
        if from.row == to.row || from.col == to.col {
            self.open_rect(from, to);
        } else {
            let corner = Coord::new(to.row, from.col);
            self.open_rect(from, corner);
            self.open_rect(corner, to);
        }
    }
}

impl std::ops::Index<Coord> for Grid {
    type Output = Cell;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.data[self.ravel_index(index)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_count(grid: &Grid) -> usize {
        grid.cells().iter().filter(|cell| cell.is_open()).count()
    }

    #[test]
    fn test_new_is_all_walls() {
        let grid = Grid::new(4, 6).unwrap();
        assert_eq!(grid.height(), 4);
        assert_eq!(grid.width(), 6);
        assert!(grid.cells().iter().all(|cell| cell.is_wall()));
        assert_eq!(grid.rows().count(), 4);
    }

    #[test]
    fn test_new_rejects_small_dimensions() {
        for side in 0..3 {
            assert!(Grid::new(side, 5).is_err());
            assert!(Grid::new(5, side).is_err());
        }
        assert!(Grid::new(3, 3).is_ok());
    }

    #[test]
    fn test_open_rect_any_corner_order() {
        let mut a = Grid::new(5, 5).unwrap();
        let mut b = Grid::new(5, 5).unwrap();
        a.open_rect(Coord::new(1, 1), Coord::new(3, 2));
        b.open_rect(Coord::new(3, 2), Coord::new(1, 1));
        assert_eq!(a, b);
        assert_eq!(open_count(&a), 6);
        assert_eq!(a[Coord::new(2, 2)], Cell::Open);
        assert_eq!(a[Coord::new(2, 3)], Cell::Wall);
    }

    #[test]
    fn test_open_rect_is_clamped() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.open_rect(Coord::new(1, 1), Coord::new(1, 10));
        assert_eq!(open_count(&grid), 2);
        assert_eq!(grid.get(Coord::new(1, 3)), None);
    }

    #[test]
    fn test_carve_straight_passage() {
        let mut grid = Grid::new(5, 7).unwrap();
        grid.carve_passage(Coord::new(1, 5), Coord::new(1, 1));
        assert_eq!(open_count(&grid), 5);
        assert!((1..=5).all(|col| grid[Coord::new(1, col)].is_open()));
    }

    #[test]
    fn test_carve_l_shaped_passage() {
        let mut grid = Grid::new(7, 7).unwrap();
        grid.carve_passage(Coord::new(1, 1), Coord::new(5, 3));
        // vertical leg on column 1, then horizontal leg on row 5
        assert!((1..=5).all(|row| grid[Coord::new(row, 1)].is_open()));
        assert!((1..=3).all(|col| grid[Coord::new(5, col)].is_open()));
        assert_eq!(open_count(&grid), 7);
        assert!(grid[Coord::new(1, 3)].is_wall());
    }

    #[test]
    fn test_boundary() {
        let grid = Grid::new(4, 4).unwrap();
        assert!(grid.is_boundary(Coord::new(0, 2)));
        assert!(grid.is_boundary(Coord::new(2, 3)));
        assert!(!grid.is_boundary(Coord::new(1, 2)));
    }
}
