//! Backward induction over the single-board game
//!
//! Full-depth minimax without pruning or memoization. Every non-terminal
//! history visited gets a one-hot entry in the mover's strategy table.
//! Ties go to the first move (in ascending cell order) reaching the optimum.

use crate::board::Player;
use crate::game::SearchGame;
use crate::strategy::Strategies;
use crate::tictactoe::Position;

/// Backward induction solver owning the strategy tables it fills
#[derive(Debug, Default)]
pub struct BackwardInduction {
    strategies: Strategies,
    nodes: u64,
}

impl BackwardInduction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Solve from `position`, returning its game value for X
    pub fn solve(&mut self, position: &Position) -> f64 {
        tracing::debug!("Backward induction from history {:?}", position.history());
        let value = self.search(position);
        tracing::info!(
            "Backward induction value={} (x entries={}, o entries={}, nodes={})",
            value,
            self.strategies.x.len(),
            self.strategies.o.len(),
            self.nodes
        );
        value
    }

    fn search(&mut self, position: &Position) -> f64 {
        self.nodes += 1;

        if position.is_terminal() {
            return position.utility();
        }

        // A full board is always terminal
        let player = match position.current_player() {
            Some(p) => p,
            None => return position.utility(),
        };

        let mut best: Option<(usize, f64)> = None;
        for action in position.legal_moves() {
            let value = self.search(&position.play(action));

            let improves = match best {
                None => true,
                Some((_, best_value)) => match player {
                    Player::X => value > best_value,
                    Player::O => value < best_value,
                },
            };
            if improves {
                best = Some((action, value));
            }
        }

        let (action, value) = best.expect("non-terminal position has no legal move");
        self.strategies
            .for_player_mut(player)
            .record_one_hot(position.history_key(), action);
        value
    }

    pub fn strategies(&self) -> &Strategies {
        &self.strategies
    }

    pub fn into_strategies(self) -> Strategies {
        self.strategies
    }

    /// Positions visited across all solves, terminal ones included
    pub fn nodes_visited(&self) -> u64 {
        self.nodes
    }
}

/// Solve the game from the empty board
pub fn solve_tictactoe() -> (f64, Strategies) {
    let mut solver = BackwardInduction::new();
    let value = solver.solve(&Position::new());
    (value, solver.into_strategies())
}

// ============================================================================
// TESTS
// ============================================================================
