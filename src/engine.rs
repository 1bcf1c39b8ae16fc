//! Computer opponent facade
//!
//! Wraps the [`Searcher`] with timing and the "compute and apply" entry
//! point a presentation layer calls when it is the computer's turn. The
//! computer always plays [`Player::Two`].
//!
//! # Example
//!
//! ```
//! use connectk::{AIEngine, Board, Player, Pos};
//!
//! let mut board = Board::new(3, 3, 3);
//! board.mark(Player::One, Pos::new(1, 1));
//!
//! let mut engine = AIEngine::new();
//! let result = engine.play(&mut board).expect("moves remain");
//! println!("Computer played {:?} in {}ms", result.best_move, result.time_ms);
//! assert_eq!(board.stone_count(), 2);
//! ```

use std::time::Instant;

use log::debug;

use crate::board::{Board, Player, Pos};
use crate::config::SearchConfig;
use crate::search::{SearchResult, Searcher};

/// Result of a move search with timing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Score of the move from the computer's point of view
    pub score: i32,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn from_search(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            time_ms,
            nodes: result.nodes,
        }
    }
}

/// Computer player for connect-k.
pub struct AIEngine {
    searcher: Searcher,
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AIEngine {
    /// Create an engine with the default depth limit
    #[must_use]
    pub fn new() -> Self {
        Self {
            searcher: Searcher::default(),
        }
    }

    /// Create an engine that searches at most `depth_limit` plies
    #[must_use]
    pub fn with_depth_limit(depth_limit: usize) -> Self {
        Self {
            searcher: Searcher::new(depth_limit),
        }
    }

    #[must_use]
    pub fn from_config(config: &SearchConfig) -> Self {
        Self::with_depth_limit(config.depth_limit)
    }

    #[inline]
    pub fn depth_limit(&self) -> usize {
        self.searcher.depth_limit()
    }

    /// Best move for the computer without touching `board`.
    pub fn get_move(&mut self, board: &Board) -> Option<Pos> {
        self.get_move_with_stats(board).best_move
    }

    /// Best move for the computer with search statistics.
    ///
    /// The search probes a copy, so the caller's board is left as is.
    pub fn get_move_with_stats(&mut self, board: &Board) -> MoveResult {
        let mut work_board = board.clone();
        let start = Instant::now();
        let result = self.searcher.search(&mut work_board);
        MoveResult::from_search(result, start.elapsed().as_millis() as u64)
    }

    /// Compute the computer's move and apply it to `board`.
    ///
    /// Returns `None` without acting when no legal move remains.
    pub fn play(&mut self, board: &mut Board) -> Option<MoveResult> {
        let start = Instant::now();
        let result = self.searcher.search(board);
        let pos = result.best_move?;
        if !board.mark(Player::Two, pos) {
            return None;
        }
        let result = MoveResult::from_search(result, start.elapsed().as_millis() as u64);
        debug!(
            "computer plays {} (score {}, {} nodes, {}ms)",
            pos, result.score, result.nodes, result.time_ms
        );
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_move_leaves_board_untouched() {
        let mut engine = AIEngine::new();
        let mut board = Board::new(3, 3, 3);
        board.mark(Player::One, Pos::new(2, 0));
        board.mark(Player::One, Pos::new(2, 1));
        board.mark(Player::Two, Pos::new(1, 1));

        let before = board.grid().clone();
        assert_eq!(engine.get_move(&board), Some(Pos::new(2, 2)));
        assert_eq!(board.grid(), &before);
    }

    #[test]
    fn test_play_marks_for_player_two() {
        let mut engine = AIEngine::with_depth_limit(9);
        let mut board = Board::new(3, 3, 3);
        board.mark(Player::One, Pos::new(2, 0));
        board.mark(Player::One, Pos::new(2, 1));
        board.mark(Player::Two, Pos::new(1, 1));

        let result = engine.play(&mut board).unwrap();
        assert_eq!(result.best_move, Some(Pos::new(2, 2)));
        assert_eq!(board.get(Pos::new(2, 2)), Some(Player::Two.into()));
        assert!(!board.game_over());
        assert!(result.nodes > 0);
    }

    #[test]
    fn test_play_on_finished_game_does_nothing() {
        let mut engine = AIEngine::new();
        let mut board = Board::new(1, 3, 3);
        for col in 0..3 {
            board.mark(Player::One, Pos::new(0, col));
        }
        assert!(engine.play(&mut board).is_none());
        assert_eq!(engine.get_move_with_stats(&board).best_move, None);
    }

    #[test]
    fn test_from_config() {
        let engine = AIEngine::from_config(&SearchConfig { depth_limit: 7 });
        assert_eq!(engine.depth_limit(), 7);
    }
}
