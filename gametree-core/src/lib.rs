//! GAMETREE Core - exhaustive solvers for small combinatorial games
//!
//! This crate provides:
//! - 3x3 board geometry and line detection
//! - Single-board tic-tac-toe and multi-board misère Notakto positions
//! - Backward induction with per-player strategy tables
//! - Alpha-beta search with center/corner/edge move ordering
//! - Memoized minimax with a board-keyed transposition table
//! - The coin-row end-picking game

pub mod board;
pub mod error;
pub mod game;
pub mod tictactoe;
pub mod notakto;
pub mod strategy;
pub mod induction;
pub mod alphabeta;
pub mod maxmin;
pub mod coins;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-exports for convenient access
pub use board::{Cell, Player, CELLS, CENTER, CORNERS, LINES};
pub use error::{Error, Result};
pub use game::SearchGame;
pub use tictactoe::Position;
pub use notakto::{NotaktoPosition, Side};
pub use strategy::{Distribution, Strategies, StrategyTable};
pub use induction::{solve_tictactoe, BackwardInduction};
pub use alphabeta::{order_moves, solve_alpha_beta, AlphaBetaConfig, AlphaBetaSolver, MoveOrdering};
pub use maxmin::{solve_maxmin, MaxminSolver, TranspositionTable};
pub use coins::{CoinRow, Outcome};
