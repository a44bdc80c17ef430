//! Synthetic game trees with known minimax values

use crate::game::SearchGame;

/// Complete binary tree of fixed depth with explicit leaf values
///
/// Moves are 0 (left) and 1 (right); the leaf reached by a history is the
/// history read as a binary number.
#[derive(Clone, Debug)]
pub struct FixedTree {
    depth: usize,
    leaves: Vec<f64>,
    history: Vec<usize>,
}

impl FixedTree {
    pub fn new(depth: usize, leaves: &[f64]) -> Self {
        assert_eq!(leaves.len(), 1usize << depth, "need 2^depth leaves");
        Self {
            depth,
            leaves: leaves.to_vec(),
            history: Vec::new(),
        }
    }

    /// Classic textbook tree: max/min/max over [3, 5, 6, 9, 1, 2, 0, -1],
    /// value 5, with one leaf and one subtree prunable
    pub fn textbook() -> Self {
        Self::new(3, &[3.0, 5.0, 6.0, 9.0, 1.0, 2.0, 0.0, -1.0])
    }

    /// Total nodes in the tree
    pub fn size(&self) -> usize {
        (1usize << (self.depth + 1)) - 1
    }
}

impl SearchGame for FixedTree {
    fn is_terminal(&self) -> bool {
        self.history.len() == self.depth
    }

    fn terminal_value(&self) -> f64 {
        let index = self.history.iter().fold(0, |acc, &m| acc * 2 + m);
        self.leaves[index]
    }

    fn legal_moves(&self) -> Vec<usize> {
        if self.is_terminal() {
            Vec::new()
        } else {
            vec![0, 1]
        }
    }

    fn play(&self, action: usize) -> Self {
        let mut next = self.clone();
        next.history.push(action);
        next
    }

    fn history(&self) -> &[usize] {
        &self.history
    }

    fn transposition_key(&self) -> String {
        self.history.iter().map(|m| m.to_string()).collect()
    }
}
