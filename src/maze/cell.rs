use std::fmt;

/// State of a single grid cell.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Wall,
    Open,
}

impl Cell {
    /// The width of each cell when rendered, in character widths.
    pub const CELL_WIDTH: usize = 2;

    pub fn is_wall(self) -> bool {
        self == Cell::Wall
    }

    pub fn is_open(self) -> bool {
        self == Cell::Open
    }

    /// Text drawn for this cell: two full blocks for a wall, two spaces otherwise.
    pub fn symbol(self) -> &'static str {
        match self {
            Cell::Wall => "\u{2588}\u{2588}",
            Cell::Open => "  ",
        }
    }

    /// Matrix encoding used by hand-authored mazes: `0` is open, anything else a wall.
    pub fn from_bit(bit: u8) -> Self {
        if bit == 0 { Cell::Open } else { Cell::Wall }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = self.symbol();

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            debug_assert_eq!(
                symbol.width(),
                Cell::CELL_WIDTH,
                "Each cell must occupy exactly two character widths."
            );
        }

        f.write_str(symbol)
    }
}
