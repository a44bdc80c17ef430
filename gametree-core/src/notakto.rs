//! Multi-board Notakto position
//!
//! Both players place the same mark. A board "dies" once it holds a completed
//! line and accepts no further moves; the game ends when every board is dead.
//! Scoring is misère: the player who kills the last board loses, so a
//! terminal position is a win for the player about to move.
//!
//! Global move indices number the cells of board `b` as `9*b .. 9*b + 8`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::{cells_to_string, has_line_of, Cell, CELLS};
use crate::error::{Error, Result};
use crate::game::SearchGame;

/// Mark shared by both players
const MARK: Cell = Cell::X;

/// Notakto player, identified only by ply parity
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    One,
    Two,
}

impl Side {
    pub fn for_ply(ply: usize) -> Self {
        if ply % 2 == 0 {
            Side::One
        } else {
            Side::Two
        }
    }

    /// Player number, 1 or 2
    pub fn number(self) -> u8 {
        match self {
            Side::One => 1,
            Side::Two => 2,
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }
}

/// Notakto game state over `num_boards` independent grids
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NotaktoPosition {
    history: Vec<usize>,
    boards: Vec<[Cell; CELLS]>,
    active: Vec<bool>,
}

impl NotaktoPosition {
    /// Empty boards, player 1 to move
    pub fn new(num_boards: usize) -> Result<Self> {
        if num_boards == 0 {
            return Err(Error::NoBoards);
        }
        Ok(Self {
            history: Vec::new(),
            boards: vec![[Cell::Empty; CELLS]; num_boards],
            active: vec![true; num_boards],
        })
    }

    /// Build a position by replaying `history` through the checked move step
    pub fn from_history(num_boards: usize, history: &[usize]) -> Result<Self> {
        let mut position = Self::new(num_boards)?;
        for &action in history {
            position = position.apply(action)?;
        }
        Ok(position)
    }

    /// Apply a move, returning the resulting position
    pub fn apply(&self, action: usize) -> Result<Self> {
        if self.is_terminal() {
            return Err(Error::GameOver);
        }
        let limit = self.move_limit();
        if action >= limit {
            return Err(Error::MoveOutOfRange {
                index: action,
                limit,
            });
        }
        let (board, cell) = (action / CELLS, action % CELLS);
        if !self.active[board] {
            return Err(Error::BoardInactive {
                board,
                index: action,
            });
        }
        if !self.boards[board][cell].is_empty() {
            return Err(Error::CellOccupied { index: action });
        }
        Ok(self.child(action))
    }

    /// Unchecked move step; callers guarantee `action` is legal
    fn child(&self, action: usize) -> Self {
        let (board, cell) = (action / CELLS, action % CELLS);
        debug_assert!(self.active[board] && self.boards[board][cell].is_empty());
        let mut next = self.clone();
        next.boards[board][cell] = MARK;
        next.active[board] = !has_line_of(&next.boards[board], MARK);
        next.history.push(action);
        next
    }

    pub fn num_boards(&self) -> usize {
        self.boards.len()
    }

    /// Exclusive upper bound on global move indices
    pub fn move_limit(&self) -> usize {
        CELLS * self.boards.len()
    }

    pub fn history(&self) -> &[usize] {
        &self.history
    }

    pub fn boards(&self) -> &[[Cell; CELLS]] {
        &self.boards
    }

    /// Per-board flag: true while the board has no completed line
    pub fn active_board_status(&self) -> &[bool] {
        &self.active
    }

    /// Number of boards still accepting moves
    pub fn live_boards(&self) -> usize {
        self.active.iter().filter(|&&a| a).count()
    }

    pub fn current_player(&self) -> Side {
        Side::for_ply(self.history.len())
    }

    /// Concatenation of every board's cells; identical for all move orders
    /// reaching the same configuration
    pub fn boards_string(&self) -> String {
        self.boards.iter().map(cells_to_string).collect()
    }

    /// Empty cells on active boards, in ascending global index order
    pub fn legal_moves(&self) -> Vec<usize> {
        self.boards
            .iter()
            .zip(&self.active)
            .enumerate()
            .filter(|(_, (_, &active))| active)
            .flat_map(|(b, (cells, _))| {
                cells
                    .iter()
                    .enumerate()
                    .filter(|(_, c)| c.is_empty())
                    .map(move |(i, _)| b * CELLS + i)
            })
            .collect()
    }

    /// True once every board has a completed line
    pub fn is_terminal(&self) -> bool {
        self.active.iter().all(|&a| !a)
    }

    /// Terminal value: the player about to move wins (+1.0 for player 1,
    /// -1.0 for player 2)
    pub fn utility(&self) -> f64 {
        match self.current_player() {
            Side::One => 1.0,
            Side::Two => -1.0,
        }
    }
}

impl SearchGame for NotaktoPosition {
    fn is_terminal(&self) -> bool {
        NotaktoPosition::is_terminal(self)
    }

    fn terminal_value(&self) -> f64 {
        self.utility()
    }

    fn legal_moves(&self) -> Vec<usize> {
        NotaktoPosition::legal_moves(self)
    }

    fn play(&self, action: usize) -> Self {
        self.child(action)
    }

    fn history(&self) -> &[usize] {
        &self.history
    }

    fn transposition_key(&self) -> String {
        self.boards_string()
    }
}

impl fmt::Display for NotaktoPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (b, cells) in self.boards.iter().enumerate() {
            let status = if self.active[b] { "live" } else { "dead" };
            writeln!(f, "Board {} ({})", b + 1, status)?;
            for row in cells.chunks(3) {
                let line: Vec<String> = row.iter().map(|c| c.to_char().to_string()).collect();
                writeln!(f, "{}", line.join("|"))?;
            }
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
