//! Strategy tables produced by backward induction
//!
//! A table maps a history key (the digits of the moves played so far) to a
//! distribution over the 9 cells. Serialized as a flat JSON object of
//! string-keyed float distributions:
//!
//! ```json
//! { "04": { "0": 0.0, "1": 1.0, "2": 0.0, ... } }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::board::{Player, CELLS};
use crate::error::Result;

/// Probability per cell, keyed `"0"` through `"8"`
pub type Distribution = BTreeMap<String, f64>;

/// Distribution putting all mass on `action`
pub fn one_hot(action: usize) -> Distribution {
    (0..CELLS)
        .map(|cell| (cell.to_string(), if cell == action { 1.0 } else { 0.0 }))
        .collect()
}

/// Per-player mapping from history key to action distribution
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StrategyTable {
    entries: BTreeMap<String, Distribution>,
}

impl StrategyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `action` as the chosen move at the decision point `key`
    pub fn record_one_hot(&mut self, key: impl Into<String>, action: usize) {
        self.entries.insert(key.into(), one_hot(action));
    }

    pub fn get(&self, key: &str) -> Option<&Distribution> {
        self.entries.get(key)
    }

    /// Cell carrying probability 1.0 at `key`
    pub fn best_action(&self, key: &str) -> Option<usize> {
        self.entries
            .get(key)?
            .iter()
            .find(|(_, &p)| p == 1.0)
            .and_then(|(cell, _)| cell.parse().ok())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Distribution)> {
        self.entries.iter()
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// The two per-player tables filled by one solve
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Strategies {
    pub x: StrategyTable,
    pub o: StrategyTable,
}

impl Strategies {
    pub fn for_player(&self, player: Player) -> &StrategyTable {
        match player {
            Player::X => &self.x,
            Player::O => &self.o,
        }
    }

    pub fn for_player_mut(&mut self, player: Player) -> &mut StrategyTable {
        match player {
            Player::X => &mut self.x,
            Player::O => &mut self.o,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_hot() {
        let dist = one_hot(3);
        assert_eq!(dist.len(), 9);
        assert_eq!(dist["3"], 1.0);
        assert_eq!(dist.values().sum::<f64>(), 1.0);
        assert_eq!(dist.values().filter(|&&p| p == 1.0).count(), 1);
    }

    #[test]
    fn test_record_and_lookup() {
        let mut table = StrategyTable::new();
        assert!(table.is_empty());
        table.record_one_hot("04", 8);
        table.record_one_hot(String::from("04"), 2);
        assert_eq!(table.len(), 1);
        assert_eq!(table.best_action("04"), Some(2));
        assert_eq!(table.best_action("0"), None);
    }

    #[test]
    fn test_json_shape() {
        let mut table = StrategyTable::new();
        table.record_one_hot("", 0);
        let json = table.to_json_string().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let dist = value.get("").and_then(|d| d.as_object()).unwrap();
        assert_eq!(dist.len(), 9);
        assert_eq!(dist["0"].as_f64(), Some(1.0));
        assert_eq!(dist["8"].as_f64(), Some(0.0));

        let back = StrategyTable::from_json_str(&json).unwrap();
        assert_eq!(back, table);
        assert!(StrategyTable::from_json_str("[1, 2]").is_err());
    }

    #[test]
    fn test_strategies_for_player() {
        let mut strategies = Strategies::default();
        strategies.for_player_mut(Player::O).record_one_hot("4", 0);
        assert!(strategies.for_player(Player::X).is_empty());
        assert_eq!(strategies.o.best_action("4"), Some(0));
    }
}
