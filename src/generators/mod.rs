use rand::{Rng, SeedableRng, rngs::StdRng};

mod carve;
mod layout;

pub use carve::carve_tree;
pub use layout::{cell_coord, cell_graph, lattice_size};

use crate::{error::Result, graph::minimum_spanning_tree, maze::Maze};

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Generates a perfect maze of `height x width` grid cells.
///
/// The maze is the minimum spanning tree of a randomly weighted cell graph, carved
/// into an all-walls grid. It has one opening on the left edge and one on the right.
pub fn generate<R: Rng>(height: usize, width: usize, rng: &mut R) -> Result<Maze> {
    let graph = cell_graph(height, width, rng)?;
    let tree = minimum_spanning_tree(&graph);
    tracing::debug!(
        "[generate] {}x{} maze: {} of {} edges kept",
        height,
        width,
        tree.len(),
        graph.len()
    );
    carve_tree(height, width, &tree)
}

/// [`generate`] with a `StdRng` seeded from `seed`, or from the OS when `None`.
pub fn random_maze(height: usize, width: usize, seed: Option<u64>) -> Result<Maze> {
    generate(height, width, &mut get_rng(seed))
}

#[cfg(test)]
mod tests {
    use std::collections::{HashSet, VecDeque};

    use super::*;
    use crate::{
        error::Error,
        maze::{Cell, Coord},
    };

    fn open_neighbors(maze: &Maze, coord: Coord) -> Vec<Coord> {
        let Coord { row, col } = coord;
        [
            (row.wrapping_sub(1), col),
            (row + 1, col),
            (row, col.wrapping_sub(1)),
            (row, col + 1),
        ]
        .into_iter()
        .map(Coord::from)
        .filter(|&c| maze.get(c) == Some(Cell::Open))
        .collect()
    }

    fn flood_fill(maze: &Maze, start: Coord) -> HashSet<Coord> {
        let mut seen = HashSet::from([start]);
        let mut queue = VecDeque::from([start]);
        while let Some(coord) = queue.pop_front() {
            for next in open_neighbors(maze, coord) {
                if seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        seen
    }

    fn open_cells(maze: &Maze) -> Vec<Coord> {
        (0..maze.height())
            .flat_map(|row| (0..maze.width()).map(move |col| Coord::new(row, col)))
            .filter(|&c| maze[c].is_open())
            .collect()
    }

    /// Open cells form a tree: connected, and exactly one fewer adjacency than cells.
    fn assert_perfect(maze: &Maze) {
        let open = open_cells(maze);
        let start = maze.openings()[0];
        assert_eq!(flood_fill(maze, start).len(), open.len());

        let adjacencies: usize = open
            .iter()
            .map(|&c| open_neighbors(maze, c).len())
            .sum::<usize>()
            / 2;
        assert_eq!(adjacencies, open.len() - 1);
    }

    #[test]
    fn test_dimension_validation() {
        for side in 0..3 {
            assert_eq!(
                random_maze(side, 10, Some(1)),
                Err(Error::InvalidDimensions {
                    height: side,
                    width: 10
                })
            );
            assert!(random_maze(10, side, Some(1)).is_err());
        }
        for (height, width) in [(3, 3), (3, 4), (4, 3), (4, 4), (10, 10), (17, 6)] {
            assert!(random_maze(height, width, Some(1)).is_ok());
        }
    }

    #[test]
    fn test_same_seed_same_maze() {
        let a = random_maze(10, 10, Some(42)).unwrap();
        let b = random_maze(10, 10, Some(42)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn test_small_fixed_scenario() {
        let maze = random_maze(5, 5, Some(0)).unwrap();
        assert_eq!((maze.height(), maze.width()), (5, 5));
        for corner in [(0, 0), (0, 4), (4, 0), (4, 4)] {
            assert_eq!(maze[Coord::from(corner)], Cell::Wall);
        }

        let openings = maze.openings();
        assert_eq!(openings.len(), 2);
        let entry = *openings.iter().find(|c| c.col == 0).unwrap();
        let exit = *openings.iter().find(|c| c.col == 4).unwrap();
        assert_eq!(entry.row % 2, 1);
        assert_eq!(exit.row % 2, 1);

        let reached = flood_fill(&maze, entry);
        assert!(reached.contains(&exit));
        for i in 0..2 {
            for j in 0..2 {
                assert!(reached.contains(&cell_coord(i, j)));
            }
        }
        assert_perfect(&maze);
    }

    #[test]
    fn test_generated_mazes_are_perfect() {
        for (seed, (height, width)) in [(3, 3), (5, 8), (10, 10), (21, 41), (12, 7)]
            .into_iter()
            .enumerate()
        {
            let maze = random_maze(height, width, Some(seed as u64)).unwrap();
            assert_eq!(maze.openings().len(), 2);
            assert_perfect(&maze);
        }
    }

    #[test]
    fn test_spanning_tree_covers_cell_graph() {
        let graph = cell_graph(13, 17, &mut get_rng(Some(5))).unwrap();
        let tree = minimum_spanning_tree(&graph);
        assert_eq!(tree.len(), graph.vertices().len() - 1);
        assert_eq!(tree.vertices(), graph.vertices());
        assert_eq!(tree.root(), graph.root());
    }

    #[test]
    fn test_custom_rng() {
        let mut rng = StdRng::seed_from_u64(9);
        let maze = generate(7, 9, &mut rng).unwrap();
        assert_eq!(maze, random_maze(7, 9, Some(9)).unwrap());
    }
}
