pub mod error;
pub mod generators;
pub mod graph;
pub mod maze;

pub use error::{Error, Result};
pub use maze::{Maze, cell::Cell, grid::Coord};
