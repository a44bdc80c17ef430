//! Coin-row game: players alternately take a value from either end of a row
//!
//! Solved by minimax on the score difference (first player's total minus the
//! second player's). The value of a sub-row depends only on its bounds and
//! whose turn it is, so results are memoized on that triple.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Winner under optimal play
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Player1,
    Player2,
    Draw,
}

impl Outcome {
    /// Classify a first-player score difference
    pub fn from_difference(difference: i64) -> Self {
        match difference.signum() {
            1 => Outcome::Player1,
            -1 => Outcome::Player2,
            _ => Outcome::Draw,
        }
    }
}

/// Solver over a fixed row of values
pub struct CoinRow<'a> {
    values: &'a [i64],
    memo: FxHashMap<(usize, usize, bool), i64>,
}

impl<'a> CoinRow<'a> {
    pub fn new(values: &'a [i64]) -> Self {
        Self {
            values,
            memo: FxHashMap::default(),
        }
    }

    /// Optimal score difference with the first player to move on the whole row
    pub fn best_difference(&mut self) -> i64 {
        self.search(0, self.values.len(), true)
    }

    /// Half-open interval `[left, right)`; `first` is true on player 1's turn
    fn search(&mut self, left: usize, right: usize, first: bool) -> i64 {
        if left >= right {
            return 0;
        }
        if let Some(&value) = self.memo.get(&(left, right, first)) {
            return value;
        }

        let take_left = self.values[left];
        let take_right = self.values[right - 1];
        let value = if first {
            let l = take_left + self.search(left + 1, right, false);
            let r = take_right + self.search(left, right - 1, false);
            l.max(r)
        } else {
            let l = self.search(left + 1, right, true) - take_left;
            let r = self.search(left, right - 1, true) - take_right;
            l.min(r)
        };

        self.memo.insert((left, right, first), value);
        value
    }
}

/// Optimal first-player score difference for `values`
pub fn best_difference(values: &[i64]) -> i64 {
    CoinRow::new(values).best_difference()
}

/// Winner of the coin-row game on `values`
pub fn outcome(values: &[i64]) -> Outcome {
    let difference = best_difference(values);
    tracing::debug!("Coin row {:?}: difference={}", values, difference);
    Outcome::from_difference(difference)
}
