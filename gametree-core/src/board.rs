//! 3x3 grid geometry shared by both game variants
//!
//! Cells are indexed row-major:
//!
//! ```text
//!  0 | 1 | 2
//!  3 | 4 | 5
//!  6 | 7 | 8
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Number of cells on one grid
pub const CELLS: usize = 9;

/// Center cell index
pub const CENTER: usize = 4;

/// Corner cell indices
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];

/// The 8 completable lines: 3 rows, 3 columns, 2 diagonals
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

// ============================================================================
// CORE TYPES
// ============================================================================

/// Occupant of a single cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    /// Character used in board strings (`'0'` marks an empty cell)
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '0',
            Cell::X => 'x',
            Cell::O => 'o',
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Player in the single-board game
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Player who moves on the given ply (X on even plies)
    pub fn for_ply(ply: usize) -> Self {
        if ply % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    pub fn to_char(self) -> char {
        self.to_cell().to_char()
    }
}

// ============================================================================
// LINE DETECTION
// ============================================================================

/// Check whether `cells` contains a full line of the given non-empty mark
pub fn has_line_of(cells: &[Cell; CELLS], mark: Cell) -> bool {
    !mark.is_empty()
        && LINES
            .iter()
            .any(|line| line.iter().all(|&idx| cells[idx] == mark))
}

/// Check whether any line is fully occupied by a single mark
pub fn has_any_line(cells: &[Cell; CELLS]) -> bool {
    has_line_of(cells, Cell::X) || has_line_of(cells, Cell::O)
}

/// Render a grid as its 9-character board string
pub fn cells_to_string(cells: &[Cell; CELLS]) -> String {
    cells.iter().map(|c| c.to_char()).collect()
}

/// Move-ordering tier of a cell: 0 = center, 1 = corner, 2 = edge
pub fn cell_tier(cell: usize) -> u8 {
    let cell = cell % CELLS;
    if cell == CENTER {
        0
    } else if CORNERS.contains(&cell) {
        1
    } else {
        2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_cover_every_cell() {
        for cell in 0..CELLS {
            assert!(LINES.iter().any(|line| line.contains(&cell)));
        }
        // Center sits on 4 lines, corners on 3, edges on 2
        let count = |c: usize| LINES.iter().filter(|l| l.contains(&c)).count();
        assert_eq!(count(CENTER), 4);
        assert_eq!(count(0), 3);
        assert_eq!(count(1), 2);
    }

    #[test]
    fn test_has_line_of() {
        let mut cells = [Cell::Empty; CELLS];
        assert!(!has_any_line(&cells));
        cells[2] = Cell::O;
        cells[4] = Cell::O;
        cells[6] = Cell::O;
        assert!(has_line_of(&cells, Cell::O));
        assert!(!has_line_of(&cells, Cell::X));
        assert!(!has_line_of(&cells, Cell::Empty));
        assert!(has_any_line(&cells));
    }

    #[test]
    fn test_cell_tier() {
        assert_eq!(cell_tier(4), 0);
        assert_eq!(cell_tier(13), 0);
        assert_eq!(cell_tier(8), 1);
        assert_eq!(cell_tier(9), 1);
        assert_eq!(cell_tier(7), 2);
        assert_eq!(cell_tier(16), 2);
    }

    #[test]
    fn test_player_for_ply() {
        assert_eq!(Player::for_ply(0), Player::X);
        assert_eq!(Player::for_ply(3), Player::O);
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.to_char(), 'o');
    }
}
