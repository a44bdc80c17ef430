//! Single-board tic-tac-toe position
//!
//! A position is defined by its move history; the board is always the replay
//! of that history, with X moving on even plies and O on odd plies.

use std::fmt;

use crate::board::{cells_to_string, has_line_of, Cell, Player, CELLS};
use crate::error::{Error, Result};
use crate::game::SearchGame;

/// Single-board game state
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    history: Vec<usize>,
    cells: [Cell; CELLS],
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl Position {
    /// Empty board, X to move
    pub fn new() -> Self {
        Self {
            history: Vec::new(),
            cells: [Cell::Empty; CELLS],
        }
    }

    /// Build a position by replaying `history` through the checked move step
    pub fn from_history(history: &[usize]) -> Result<Self> {
        let mut position = Self::new();
        for &action in history {
            position = position.apply(action)?;
        }
        Ok(position)
    }

    /// Board reached by replaying `history` from the empty board
    pub fn derive_board(history: &[usize]) -> Result<[Cell; CELLS]> {
        Self::from_history(history).map(|p| p.cells)
    }

    /// Apply a move, returning the resulting position
    pub fn apply(&self, action: usize) -> Result<Self> {
        if self.is_terminal() {
            return Err(Error::GameOver);
        }
        if action >= CELLS {
            return Err(Error::MoveOutOfRange {
                index: action,
                limit: CELLS,
            });
        }
        if !self.cells[action].is_empty() {
            return Err(Error::CellOccupied { index: action });
        }
        Ok(self.child(action))
    }

    /// Unchecked move step; callers guarantee `action` is legal
    fn child(&self, action: usize) -> Self {
        debug_assert!(self.cells[action].is_empty());
        let mut next = self.clone();
        next.cells[action] = Player::for_ply(self.history.len()).to_cell();
        next.history.push(action);
        next
    }

    pub fn history(&self) -> &[usize] {
        &self.history
    }

    pub fn cells(&self) -> &[Cell; CELLS] {
        &self.cells
    }

    /// Board as characters: `'x'`, `'o'`, or `'0'` for empty
    pub fn board_chars(&self) -> [char; CELLS] {
        self.cells.map(Cell::to_char)
    }

    /// History rendered as a string of move digits (strategy-table key)
    pub fn history_key(&self) -> String {
        self.history.iter().map(|m| m.to_string()).collect()
    }

    /// Player to move, or `None` once all 9 cells are filled
    pub fn current_player(&self) -> Option<Player> {
        if self.history.len() < CELLS {
            Some(Player::for_ply(self.history.len()))
        } else {
            None
        }
    }

    /// Empty cells in ascending order
    pub fn legal_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .map(|(i, _)| i)
            .collect()
    }

    /// Player owning a completed line, if any
    pub fn winner(&self) -> Option<Player> {
        [Player::X, Player::O]
            .into_iter()
            .find(|p| has_line_of(&self.cells, p.to_cell()))
    }

    pub fn is_win(&self) -> bool {
        self.winner().is_some()
    }

    /// Board full with no completed line
    pub fn is_draw(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty()) && !self.is_win()
    }

    pub fn is_terminal(&self) -> bool {
        self.is_win() || self.is_draw()
    }

    /// Value of the position for X: +1.0 if the last mover completed a line
    /// as X, -1.0 if as O, 0.0 otherwise (draws and non-terminal positions)
    pub fn utility(&self) -> f64 {
        if !self.is_win() {
            return 0.0;
        }
        match self.history.len().checked_sub(1).map(Player::for_ply) {
            Some(Player::X) => 1.0,
            Some(Player::O) => -1.0,
            None => 0.0,
        }
    }
}

impl SearchGame for Position {
    fn is_terminal(&self) -> bool {
        Position::is_terminal(self)
    }

    fn terminal_value(&self) -> f64 {
        self.utility()
    }

    fn legal_moves(&self) -> Vec<usize> {
        Position::legal_moves(self)
    }

    fn play(&self, action: usize) -> Self {
        self.child(action)
    }

    fn history(&self) -> &[usize] {
        &self.history
    }

    fn transposition_key(&self) -> String {
        cells_to_string(&self.cells)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(3) {
            let line: Vec<String> = row.iter().map(|c| c.to_char().to_string()).collect();
            writeln!(f, "{}", line.join("|"))?;
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_history_scenario() {
        let pos = Position::from_history(&[0, 4, 2, 5]).unwrap();
        assert_eq!(
            pos.board_chars(),
            ['x', '0', 'x', '0', 'o', 'o', '0', '0', '0']
        );
        assert!(!pos.is_terminal());
        assert_eq!(pos.legal_moves(), vec![1, 3, 6, 7, 8]);
        assert_eq!(pos.current_player(), Some(Player::X));
        assert_eq!(pos.history_key(), "0425");
    }

    #[test]
    fn test_empty_board_moves() {
        let pos = Position::new();
        assert_eq!(pos.legal_moves(), (0..9).collect::<Vec<_>>());
        assert_eq!(pos.current_player(), Some(Player::X));
        assert_eq!(pos.history_key(), "");
    }

    #[test]
    fn test_legal_moves_complement() {
        let pos = Position::from_history(&[0, 2, 4]).unwrap();
        assert_eq!(pos.legal_moves(), vec![1, 3, 5, 6, 7, 8]);
        assert_eq!(pos.current_player(), Some(Player::O));
    }

    #[test]
    fn test_derive_board_occupancy_matches_history() {
        let history = [4, 0, 8, 2, 1];
        let cells = Position::derive_board(&history).unwrap();
        assert_eq!(cells.iter().filter(|c| !c.is_empty()).count(), history.len());
        for (ply, &mv) in history.iter().enumerate() {
            assert_eq!(cells[mv], Player::for_ply(ply).to_cell());
        }
    }

    #[test]
    fn test_x_win_utility() {
        // x: 0,1,2 across the top
        let pos = Position::from_history(&[0, 3, 1, 4, 2]).unwrap();
        assert!(pos.is_terminal());
        assert_eq!(pos.winner(), Some(Player::X));
        assert_eq!(pos.utility(), 1.0);
        // Early win still has a player to move
        assert_eq!(pos.current_player(), Some(Player::O));
    }

    #[test]
    fn test_o_win_utility() {
        // o: 3,4,5 across the middle
        let pos = Position::from_history(&[0, 3, 1, 4, 8, 5]).unwrap();
        assert!(pos.is_terminal());
        assert_eq!(pos.winner(), Some(Player::O));
        assert_eq!(pos.utility(), -1.0);
    }

    #[test]
    fn test_draw_utility() {
        // x o x / x o o / o x x
        let pos = Position::from_history(&[0, 1, 2, 4, 3, 5, 7, 6, 8]).unwrap();
        assert!(pos.is_draw());
        assert!(pos.is_terminal());
        assert_eq!(pos.utility(), 0.0);
        assert_eq!(pos.current_player(), None);
        assert!(pos.legal_moves().is_empty());
    }

    #[test]
    fn test_full_board_win_is_not_draw() {
        // x completes the 0-4-8 diagonal on the final ply
        let pos = Position::from_history(&[0, 1, 2, 5, 3, 6, 4, 7, 8]).unwrap();
        assert!(pos.is_win());
        assert!(!pos.is_draw());
        assert_eq!(pos.utility(), 1.0);
    }

    #[test]
    fn test_invalid_moves_rejected() {
        let pos = Position::from_history(&[4]).unwrap();
        assert!(matches!(pos.apply(4), Err(Error::CellOccupied { index: 4 })));
        assert!(matches!(
            pos.apply(9),
            Err(Error::MoveOutOfRange { index: 9, limit: 9 })
        ));
        let won = Position::from_history(&[0, 3, 1, 4, 2]).unwrap();
        assert!(matches!(won.apply(8), Err(Error::GameOver)));
        assert!(Position::from_history(&[0, 0]).is_err());
    }

    #[test]
    fn test_all_terminal_positions() {
        fn walk(pos: &Position, counts: &mut [usize; 3]) {
            if pos.is_terminal() {
                let u = pos.utility();
                assert!(u == -1.0 || u == 0.0 || u == 1.0);
                assert_eq!(u == 0.0, pos.is_draw());
                match u as i8 {
                    1 => counts[0] += 1,
                    -1 => counts[1] += 1,
                    _ => counts[2] += 1,
                }
                return;
            }
            for mv in pos.legal_moves() {
                walk(&pos.apply(mv).unwrap(), counts);
            }
        }

        let mut counts = [0usize; 3];
        walk(&Position::new(), &mut counts);
        assert_eq!(counts, [131_184, 77_904, 46_080]);
    }

    #[test]
    fn test_random_playouts_keep_invariants() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..200 {
            let mut pos = Position::new();
            while !pos.is_terminal() {
                let moves = pos.legal_moves();
                assert!(!moves.is_empty());
                let mv = *moves.choose(&mut rng).unwrap();
                pos = pos.apply(mv).unwrap();
                let occupied = pos.cells().iter().filter(|c| !c.is_empty()).count();
                assert_eq!(occupied, pos.history().len());
            }
            assert_eq!(Position::from_history(pos.history()).unwrap(), pos);
        }
    }

    #[test]
    fn test_display() {
        let pos = Position::from_history(&[0, 4]).unwrap();
        assert_eq!(pos.to_string(), "x|0|0\n0|o|0\n0|0|0\n");
    }
}
