use rand::Rng;

use crate::{
    error::{Result, check_dimensions},
    graph::WeightedGraph,
    maze::Coord,
};

/// Grid coordinate of the logical cell `(i, j)`.
pub fn cell_coord(i: usize, j: usize) -> Coord {
    Coord::new(1 + 2 * i, 1 + 2 * j)
}

/// Number of logical cell rows and columns that fit in a `height x width` grid.
pub fn lattice_size(height: usize, width: usize) -> (usize, usize) {
    ((height - 1) / 2, (width - 1) / 2)
}

/// Lays out the weighted cell graph for a `height x width` maze.
///
/// Logical cells sit on odd grid coordinates and are joined to their left and upper
/// neighbours. One cell in the first column is joined to an entry vertex on column 0,
/// one cell in the last column to an exit vertex on column `width - 1`. Every weight
/// is drawn uniformly from `0..width`. The entry vertex is the root.
///
/// Random draws happen in a fixed order (entry row, exit row, then per cell in
/// row-major order), so a seeded `rng` always yields the same graph.
pub fn cell_graph<R: Rng>(
    height: usize,
    width: usize,
    rng: &mut R,
) -> Result<WeightedGraph<Coord, usize>> {
    check_dimensions(height, width)?;
    let (rows, cols) = lattice_size(height, width);

    let entry_row = rng.random_range(0..rows);
    let exit_row = rng.random_range(0..rows);
    let entry = Coord::new(cell_coord(entry_row, 0).row, 0);
    tracing::debug!(
        "[layout] {}x{} lattice, entry row {}, exit row {}",
        rows,
        cols,
        entry_row,
        exit_row
    );

    let mut graph = WeightedGraph::new(entry);
    for i in 0..rows {
        for j in 0..cols {
            let cell = cell_coord(i, j);
            if j == 0 && i == entry_row {
                graph.insert(entry, cell, rng.random_range(0..width));
            }
            if j == cols - 1 && i == exit_row {
                let exit = Coord::new(cell.row, width - 1);
                graph.insert(cell, exit, rng.random_range(0..width));
            }
            if j > 0 {
                graph.insert(cell_coord(i, j - 1), cell, rng.random_range(0..width));
            }
            if i > 0 {
                graph.insert(cell_coord(i - 1, j), cell, rng.random_range(0..width));
            }
        }
    }
    Ok(graph)
}
