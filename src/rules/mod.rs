//! Game rules for connect-k
//!
//! The only rule beyond legal placement is the win condition: `k` or more
//! contiguous stones of one owner along a row, column or diagonal.

pub mod win;

// Re-exports for convenient access
pub use win::{find_winning_run, has_run_at_pos, scan_run, Orientation, Run, ORIENTATIONS};
