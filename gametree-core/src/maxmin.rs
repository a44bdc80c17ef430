//! Minimax with a transposition table keyed on board configuration
//!
//! Moves on independent boards commute, so many histories reach the same
//! configuration. Each configuration is expanded once; later visits are
//! answered from the table.

use rustc_hash::FxHashMap;

use crate::game::SearchGame;
use crate::notakto::NotaktoPosition;

// ============================================================================
// TRANSPOSITION TABLE
// ============================================================================

/// Board-string to game-value cache. First write for a key wins.
#[derive(Clone, Debug, Default)]
pub struct TranspositionTable {
    values: FxHashMap<String, f64>,
    hits: u64,
    misses: u64,
}

impl TranspositionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a key, counting the hit or miss
    pub fn lookup(&mut self, key: &str) -> Option<f64> {
        match self.values.get(key) {
            Some(&value) => {
                self.hits += 1;
                Some(value)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Peek without touching the counters
    pub fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    /// Store `value` unless `key` already has one; returns the stored value
    pub fn insert(&mut self, key: String, value: f64) -> f64 {
        *self.values.entry(key).or_insert(value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn clear(&mut self) {
        self.values.clear();
        self.hits = 0;
        self.misses = 0;
    }
}

// ============================================================================
// SOLVER
// ============================================================================

/// Memoized minimax solver owning its transposition table
///
/// The table persists across `solve` calls on the same solver, so repeated
/// solves are answered from cache.
#[derive(Debug, Default)]
pub struct MaxminSolver {
    table: TranspositionTable,
    calls: u64,
}

impl MaxminSolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reuse a table from an earlier solve
    pub fn with_table(table: TranspositionTable) -> Self {
        Self { table, calls: 0 }
    }

    /// Game value of `position` for the maximizing (first) player
    pub fn solve<G: SearchGame>(&mut self, position: &G, maximizing: bool) -> f64 {
        tracing::debug!(
            "Maxmin from history {:?} (maximizing={}, cached={})",
            position.history(),
            maximizing,
            self.table.len()
        );
        let value = self.search(position, maximizing);
        tracing::info!(
            "Maxmin value={} (entries={}, hits={}, misses={})",
            value,
            self.table.len(),
            self.table.hits(),
            self.table.misses()
        );
        value
    }

    fn search<G: SearchGame>(&mut self, position: &G, maximizing: bool) -> f64 {
        self.calls += 1;

        let key = position.transposition_key();
        if let Some(value) = self.table.lookup(&key) {
            return value;
        }

        let value = if position.is_terminal() {
            position.terminal_value()
        } else if maximizing {
            let mut best = f64::NEG_INFINITY;
            for action in position.legal_moves() {
                best = best.max(self.search(&position.play(action), false));
            }
            best
        } else {
            let mut best = f64::INFINITY;
            for action in position.legal_moves() {
                best = best.min(self.search(&position.play(action), true));
            }
            best
        };

        self.table.insert(key, value)
    }

    pub fn table(&self) -> &TranspositionTable {
        &self.table
    }

    pub fn into_table(self) -> TranspositionTable {
        self.table
    }

    /// Recursive invocations across all solves, cache hits included
    pub fn calls(&self) -> u64 {
        self.calls
    }
}

/// Solve Notakto from `position` with a fresh table, player 1 maximizing
pub fn solve_maxmin(position: &NotaktoPosition) -> f64 {
    let maximizing = position.history().len() % 2 == 0;
    MaxminSolver::new().solve(position, maximizing)
}

// ============================================================================
// TESTS
// ============================================================================
