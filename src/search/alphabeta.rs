//! Minimax search with alpha-beta pruning
//!
//! The engine plays player two and maximizes; player one minimizes. Leaves
//! are scored only by the game result, so the search is exhaustive up to
//! the depth limit:
//!
//! - `+WIN_SCORE` when player two has won
//! - `-WIN_SCORE` when player one has won
//! - `0` for draws and for positions cut off by the depth limit
//!
//! All probing happens in place on the caller's board. Each tentative move
//! is a [`Probe`] that unmarks itself when it goes out of scope.
//!
//! # Example
//!
//! ```
//! use connectk::board::{Board, Player, Pos};
//! use connectk::search::Searcher;
//!
//! let mut board = Board::new(3, 3, 3);
//! board.mark(Player::One, Pos::new(0, 0));
//! board.mark(Player::One, Pos::new(0, 1));
//! board.mark(Player::Two, Pos::new(1, 1));
//!
//! let mut searcher = Searcher::default();
//! assert_eq!(searcher.best_move(&mut board), Some(Pos::new(0, 2)));
//! ```

use log::{info, trace};

use crate::board::{Board, Player, Pos};

use super::Probe;

/// Score of a position player two has won
pub const WIN_SCORE: i32 = 10;

/// Infinity score for alpha-beta bounds
const INF: i32 = WIN_SCORE + 1;

/// Default ply budget, effectively "search until the game is decided" on
/// the boards this engine is meant for
pub const DEFAULT_DEPTH_LIMIT: usize = 100;

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Sibling moves skipped because `beta <= alpha`
    pub cutoffs: u64,
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, `None` when the game is over
    pub best_move: Option<Pos>,
    /// Score of the best move from player two's point of view
    pub score: i32,
    /// Total nodes searched
    pub nodes: u64,
    pub stats: SearchStats,
}

/// Depth-bounded alpha-beta searcher.
#[derive(Debug, Clone)]
pub struct Searcher {
    depth_limit: usize,
    nodes: u64,
    stats: SearchStats,
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH_LIMIT)
    }
}

impl Searcher {
    /// Create a searcher that stops after `depth_limit` plies
    #[must_use]
    pub fn new(depth_limit: usize) -> Self {
        Self {
            depth_limit,
            nodes: 0,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn depth_limit(&self) -> usize {
        self.depth_limit
    }

    /// Choose player two's move.
    ///
    /// Every unoccupied cell is tried in row-major order and scored by a
    /// fresh minimizing search. The first cell with the strictly greatest
    /// score wins ties. The board is restored before returning.
    pub fn search(&mut self, board: &mut Board) -> SearchResult {
        self.nodes = 0;
        self.stats = SearchStats::default();

        let mut best_move = None;
        let mut best_score = -INF;

        if !board.game_over() {
            let moves: Vec<Pos> = board.empty_cells().collect();
            for pos in moves {
                let Some(mut probe) = Probe::place(board, Player::Two, pos) else {
                    continue;
                };
                let score = self.minimax(&mut probe, 1, -INF, INF, false);
                drop(probe);

                if score > best_score {
                    best_score = score;
                    best_move = Some(pos);
                }
            }
        }

        let score = if best_move.is_some() { best_score } else { 0 };
        info!(
            "search complete: best {:?} score {} nodes {} cutoffs {}",
            best_move, score, self.nodes, self.stats.cutoffs
        );

        SearchResult {
            best_move,
            score,
            nodes: self.nodes,
            stats: self.stats.clone(),
        }
    }

    /// Best move for player two, `None` if no legal move remains
    pub fn best_move(&mut self, board: &mut Board) -> Option<Pos> {
        self.search(board).best_move
    }

    /// Choose player two's move and play it through [`Board::mark`]
    pub fn play(&mut self, board: &mut Board) -> Option<Pos> {
        let pos = self.best_move(board)?;
        board.mark(Player::Two, pos).then_some(pos)
    }

    /// Score of a position at the end of a line
    #[inline]
    fn terminal_score(board: &Board) -> i32 {
        if board.player_two_won() {
            WIN_SCORE
        } else if board.player_one_won() {
            -WIN_SCORE
        } else {
            0
        }
    }

    fn minimax(
        &mut self,
        board: &mut Board,
        depth: usize,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.nodes += 1;

        if depth >= self.depth_limit || board.game_over() {
            return Self::terminal_score(board);
        }

        let moves: Vec<Pos> = board.empty_cells().collect();
        if moves.is_empty() {
            return Self::terminal_score(board);
        }

        let player = if maximizing { Player::Two } else { Player::One };
        let mut best = if maximizing { -INF } else { INF };

        for pos in moves {
            let Some(mut probe) = Probe::place(board, player, pos) else {
                continue;
            };
            let score = self.minimax(&mut probe, depth + 1, alpha, beta, !maximizing);
            drop(probe);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                trace!("cutoff after {} at ply {}", pos, depth);
                break;
            }
        }

        best
    }
}
