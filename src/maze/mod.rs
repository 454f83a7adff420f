pub mod cell;
pub mod grid;

use std::{fmt, io::Write};

use crossterm::{cursor, queue, style::Print, terminal};

use crate::error::{Error, Result, check_dimensions};
pub use cell::Cell;
pub use grid::{Coord, Grid};

const DEMO: [[u8; 10]; 10] = [
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [0, 0, 0, 0, 1, 0, 0, 0, 0, 1],
    [1, 1, 1, 0, 1, 1, 0, 1, 1, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [1, 0, 1, 1, 1, 1, 0, 1, 1, 1],
    [1, 0, 0, 0, 1, 1, 0, 1, 0, 1],
    [1, 0, 1, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 1, 1, 0, 1, 0, 1, 1, 1],
    [1, 0, 0, 1, 0, 1, 0, 0, 0, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
];

/// A finished maze. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    grid: Grid,
}

impl Maze {
    /// Creates a maze of the given size made only of walls.
    pub fn new(height: usize, width: usize) -> Result<Self> {
        Ok(Maze {
            grid: Grid::new(height, width)?,
        })
    }

    /// Builds a hand-authored maze from rows of `0` (open) and `1` (wall).
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        check_dimensions(height, width)?;

        let mut cells = Vec::with_capacity(height * width);
        for (row, bits) in rows.iter().enumerate() {
            let bits = bits.as_ref();
            if bits.len() != width {
                return Err(Error::RaggedRows {
                    row,
                    expected: width,
                    found: bits.len(),
                });
            }
            cells.extend(bits.iter().copied().map(Cell::from_bit));
        }

        Ok(Maze {
            grid: Grid::from_cells(height, width, cells),
        })
    }

    /// The fixed 10x10 demo maze.
    pub fn demo() -> Self {
        let cells = DEMO.iter().flatten().copied().map(Cell::from_bit).collect();
        Maze {
            grid: Grid::from_cells(DEMO.len(), DEMO[0].len(), cells),
        }
    }

    pub(crate) fn from_grid(grid: Grid) -> Self {
        Maze { grid }
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.grid.get(coord)
    }

    /// Open cells on the outer wall ring, in row-major order.
    pub fn openings(&self) -> Vec<Coord> {
        (0..self.height())
            .flat_map(|row| (0..self.width()).map(move |col| Coord::new(row, col)))
            .filter(|&coord| self.grid.is_boundary(coord) && self.grid[coord].is_open())
            .collect()
    }

    /// Renders the maze to a terminal: clears the screen, homes the cursor, prints the maze.
    pub fn render<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        queue!(
            out,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0),
            Print(self),
            Print("\n")
        )?;
        out.flush()
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.grid.rows().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for cell in row {
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}

impl std::ops::Index<Coord> for Maze {
    type Output = Cell;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.grid[index]
    }
}
