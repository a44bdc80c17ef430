//! Alpha-beta minimax with static move ordering
//!
//! Moves are searched center first, then corners, then edges (per board).
//! In misère Notakto those cells close lines fastest, which tightens the
//! window early. Every entered node is appended to a visit log.

use crate::board::cell_tier;
use crate::game::SearchGame;
use crate::notakto::NotaktoPosition;

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Order in which sibling moves are searched
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MoveOrdering {
    /// Center cells, then corners, then edges; ascending within each tier
    #[default]
    CenterCornerEdge,
    /// Ascending move index
    Natural,
}

/// Alpha-beta solver configuration
#[derive(Clone, Debug)]
pub struct AlphaBetaConfig {
    /// Keep the history of every visited node
    pub record_visits: bool,
    pub move_ordering: MoveOrdering,
}

impl Default for AlphaBetaConfig {
    fn default() -> Self {
        Self {
            record_visits: true,
            move_ordering: MoveOrdering::CenterCornerEdge,
        }
    }
}

impl AlphaBetaConfig {
    /// Set move ordering
    pub fn with_ordering(mut self, move_ordering: MoveOrdering) -> Self {
        self.move_ordering = move_ordering;
        self
    }

    /// Disable the visit log (node counts are still kept)
    pub fn without_visit_log(mut self) -> Self {
        self.record_visits = false;
        self
    }
}

// ============================================================================
// MOVE ORDERING
// ============================================================================

/// Stable sort into center, corner and edge tiers
pub fn order_moves(moves: &[usize]) -> Vec<usize> {
    let mut ordered = moves.to_vec();
    ordered.sort_by_key(|&m| cell_tier(m));
    ordered
}

// ============================================================================
// SOLVER
// ============================================================================

/// Alpha-beta solver owning its visit log
#[derive(Debug, Default)]
pub struct AlphaBetaSolver {
    config: AlphaBetaConfig,
    visited: Vec<Vec<usize>>,
    nodes: u64,
}

impl AlphaBetaSolver {
    pub fn new(config: AlphaBetaConfig) -> Self {
        Self {
            config,
            visited: Vec::new(),
            nodes: 0,
        }
    }

    pub fn config(&self) -> &AlphaBetaConfig {
        &self.config
    }

    /// Top-level search. Resets the visit log, then searches `position`
    /// inside the `(alpha, beta)` window.
    pub fn solve<G: SearchGame>(
        &mut self,
        position: &G,
        alpha: f64,
        beta: f64,
        maximizing: bool,
    ) -> f64 {
        self.visited.clear();
        self.nodes = 0;
        tracing::debug!(
            "Alpha-beta from history {:?} (maximizing={})",
            position.history(),
            maximizing
        );
        let value = self.search(position, alpha, beta, maximizing);
        tracing::info!("Alpha-beta value={} (visited={})", value, self.nodes);
        value
    }

    /// Search with the full `(-inf, +inf)` window
    pub fn solve_full<G: SearchGame>(&mut self, position: &G, maximizing: bool) -> f64 {
        self.solve(position, f64::NEG_INFINITY, f64::INFINITY, maximizing)
    }

    /// Recursive alpha-beta. Bounds are passed by value, so pruning in one
    /// subtree never leaks into a sibling's window.
    pub fn search<G: SearchGame>(
        &mut self,
        position: &G,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
    ) -> f64 {
        self.nodes += 1;
        if self.config.record_visits {
            self.visited.push(position.history().to_vec());
        }

        if position.is_terminal() {
            return position.terminal_value();
        }

        let moves = self.ordered_moves(position);
        debug_assert!(!moves.is_empty(), "non-terminal position has no legal move");

        if maximizing {
            let mut best = f64::NEG_INFINITY;
            for action in moves {
                let value = self.search(&position.play(action), alpha, beta, false);
                best = best.max(value);
                alpha = alpha.max(value);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = f64::INFINITY;
            for action in moves {
                let value = self.search(&position.play(action), alpha, beta, true);
                best = best.min(value);
                beta = beta.min(value);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }

    fn ordered_moves<G: SearchGame>(&self, position: &G) -> Vec<usize> {
        let moves = position.legal_moves();
        match self.config.move_ordering {
            MoveOrdering::CenterCornerEdge => order_moves(&moves),
            MoveOrdering::Natural => moves,
        }
    }

    /// Histories visited by the last top-level solve, in visit order
    pub fn visited(&self) -> &[Vec<usize>] {
        &self.visited
    }

    pub fn take_visited(&mut self) -> Vec<Vec<usize>> {
        std::mem::take(&mut self.visited)
    }

    /// Nodes entered by the last top-level solve
    pub fn nodes_visited(&self) -> u64 {
        self.nodes
    }
}

/// Solve Notakto from `position` with player 1 maximizing, returning the
/// value and every visited history
pub fn solve_alpha_beta(position: &NotaktoPosition) -> (f64, Vec<Vec<usize>>) {
    let mut solver = AlphaBetaSolver::default();
    let maximizing = position.history().len() % 2 == 0;
    let value = solver.solve_full(position, maximizing);
    (value, solver.take_visited())
}

// ============================================================================
// TESTS
// ============================================================================
