use thiserror::Error;

/// Errors raised while building a maze.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A maze needs at least one interior cell surrounded by a wall ring.
    #[error("maze must be at least 3x3, got {height}x{width}")]
    InvalidDimensions { height: usize, width: usize },
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Smallest accepted height and width.
pub const MIN_SIDE: usize = 3;

pub(crate) fn check_dimensions(height: usize, width: usize) -> Result<()> {
    if height < MIN_SIDE || width < MIN_SIDE {
        return Err(Error::InvalidDimensions { height, width });
    }
    Ok(())
}
