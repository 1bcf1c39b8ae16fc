//! Search module for the connect-k opponent
//!
//! Contains:
//! - Minimax with alpha-beta pruning over the live board
//! - Scoped probes that undo each tentative move

pub mod alphabeta;
pub mod probe;

pub use alphabeta::{SearchResult, SearchStats, Searcher, DEFAULT_DEPTH_LIMIT, WIN_SCORE};
pub use probe::Probe;
