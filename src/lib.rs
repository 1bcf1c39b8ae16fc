//! Connect-k rule engine and computer opponent
//!
//! Rules and search for two-player stone placement games on a fixed M×N
//! grid, where `k` stones in a row win (Gomoku is 15×15 with `k = 5`,
//! tic-tac-toe is 3×3 with `k = 3`):
//! - Legal placement with non-fatal rejection of bad moves
//! - Incremental win detection through the stone just placed
//! - Exhaustive minimax with alpha-beta pruning for the computer's moves
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Grid storage and board state (`mark`, `unmark`, queries)
//! - [`rules`]: Run scanning along the four line orientations
//! - [`search`]: Alpha-beta search over the live board
//! - [`engine`]: Computer player facade
//! - [`session`]: Turn-keeping driver for a presentation layer
//! - [`config`]: TOML configuration
//!
//! # Quick Start
//!
//! ```
//! use connectk::{AIEngine, Board, Player, Pos};
//!
//! let mut board = Board::new(3, 3, 3);
//! board.mark(Player::One, Pos::new(0, 0));
//! board.mark(Player::One, Pos::new(0, 1));
//! board.mark(Player::Two, Pos::new(1, 1));
//!
//! // The computer (player two) blocks the row
//! let mut engine = AIEngine::new();
//! let result = engine.play(&mut board).unwrap();
//! assert_eq!(result.best_move, Some(Pos::new(0, 2)));
//! assert!(!board.game_over());
//! ```
//!
//! Presentation concerns (drawing stones, reading clicks, mapping screen
//! coordinates onto grid indices) are left to callers.

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod rules;
pub mod search;
pub mod session;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, GameResult, Grid, Player, Pos};
pub use config::EngineConfig;
pub use engine::{AIEngine, MoveResult};
pub use error::{ConfigError, MoveError};
pub use session::{GameMode, GameSession};
