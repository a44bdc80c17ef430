//! Search interface shared by the tree-search solvers
//!
//! Positions are values: `play` returns a fresh child and leaves the parent
//! untouched, so recursive search never needs undo bookkeeping.

/// A finite, perfect-information, two-player zero-sum game position
///
/// Moves are plain indices. Values are from the first player's perspective
/// (first player maximizes).
pub trait SearchGame: Clone {
    /// Whether the game has ended at this position
    fn is_terminal(&self) -> bool;

    /// Value of a terminal position
    fn terminal_value(&self) -> f64;

    /// Legal moves in natural (ascending index) order
    fn legal_moves(&self) -> Vec<usize>;

    /// Child position after playing a move taken from `legal_moves`
    fn play(&self, action: usize) -> Self;

    /// Sequence of moves that produced this position
    fn history(&self) -> &[usize];

    /// Key identifying positions that share the same future, regardless of
    /// the move order that reached them
    fn transposition_key(&self) -> String;
}
