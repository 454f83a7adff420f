use crate::{
    error::Result,
    graph::SpanningTree,
    maze::{Coord, Grid, Maze},
};

/// Carves every tree edge into an all-walls grid and freezes the result.
///
/// Each edge is carved from its smaller endpoint to its larger one.
pub fn carve_tree<W>(height: usize, width: usize, tree: &SpanningTree<Coord, W>) -> Result<Maze>
where
    W: Copy,
{
    let mut grid = Grid::new(height, width)?;
    for (edge, _) in tree.edges() {
        let (from, to) = edge.endpoints();
        grid.carve_passage(from, to);
    }
    tracing::debug!("[carve] carved {} passages", tree.len());
    Ok(Maze::from_grid(grid))
}
