//! Board state: grid plus turn and result bookkeeping

use std::fmt;

use log::debug;

use super::grid::Grid;
use super::{Cell, Player, Pos};
use crate::error::MoveError;
use crate::rules::{find_winning_run, Run};

/// Outcome of the game as seen from the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    InProgress,
    PlayerOneWon,
    PlayerTwoWon,
    Drawn,
}

impl GameResult {
    /// Winner, if any
    pub fn winner(self) -> Option<Player> {
        match self {
            GameResult::PlayerOneWon => Some(Player::One),
            GameResult::PlayerTwoWon => Some(Player::Two),
            GameResult::InProgress | GameResult::Drawn => None,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::InProgress => write!(f, "Game in progress"),
            GameResult::PlayerOneWon => write!(f, "Player 1 won!"),
            GameResult::PlayerTwoWon => write!(f, "Player 2 won!"),
            GameResult::Drawn => write!(f, "Game is tied"),
        }
    }
}

/// Game board for a single connect-k game.
///
/// Created once per game with fixed dimensions and win length, then mutated
/// by [`mark`](Board::mark) and [`unmark`](Board::unmark) for both real
/// moves and search probes. Every mutator takes the owner explicitly; the
/// stored turn is bookkeeping for callers that alternate players.
#[derive(Debug, Clone)]
pub struct Board {
    grid: Grid,
    /// Stones in a row needed to win
    k: usize,
    /// Number of owned cells
    filled: usize,
    winner: Option<Player>,
    winning_run: Option<Run>,
    /// Set on a win, or when a mark is attempted on a full board
    decided: bool,
    turn: Player,
}

impl Board {
    /// Create an empty `rows` × `cols` board that needs `k` in a row to win.
    ///
    /// A `k` larger than both dimensions makes the game unwinnable, which is
    /// allowed. A `k` of zero is treated as one.
    pub fn new(rows: usize, cols: usize, k: usize) -> Self {
        Self {
            grid: Grid::new(rows, cols),
            k: k.max(1),
            filled: 0,
            winner: None,
            winning_run: None,
            decided: false,
            turn: Player::One,
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// Run length required to win
    #[inline]
    pub fn win_length(&self) -> usize {
        self.k
    }

    /// Read-only view of the cells
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Player expected to move next
    #[inline]
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Override the player expected to move next
    #[inline]
    pub fn set_turn(&mut self, player: Player) {
        self.turn = player;
    }

    /// Get cell at position, `None` when off the board
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Cell> {
        self.grid.get(pos).ok()
    }

    /// Place a stone for `owner`, reporting why it was rejected.
    ///
    /// Checks run in order: bounds, occupancy, then whether the game is
    /// already over. The last rejection re-asserts the decided flag; the
    /// others leave every flag untouched. On success the four lines through
    /// `pos` are scanned and a run of `k` or more records the win.
    pub fn try_mark(&mut self, owner: Player, pos: Pos) -> Result<(), MoveError> {
        let cell = self.grid.get(pos)?;
        if !cell.is_empty() {
            return Err(MoveError::Occupied {
                row: pos.row,
                col: pos.col,
            });
        }
        if self.game_over() {
            self.decided = true;
            return Err(MoveError::GameDecided);
        }

        self.grid.set(pos, Cell::from(owner))?;
        self.filled += 1;
        self.turn = owner.opponent();

        if let Some(run) = find_winning_run(&self.grid, pos, owner, self.k) {
            self.winner = Some(owner);
            self.winning_run = Some(run);
            self.decided = true;
        }
        Ok(())
    }

    /// Place a stone for `owner`.
    ///
    /// Returns `false` without changing the board if `pos` is off the board,
    /// already owned, or the game is over. Returns `true` on any successful
    /// placement, winning or not.
    pub fn mark(&mut self, owner: Player, pos: Pos) -> bool {
        match self.try_mark(owner, pos) {
            Ok(()) => true,
            Err(err) => {
                debug!("player {} cannot mark {}: {}", owner.number(), pos, err);
                false
            }
        }
    }

    /// Clear a cell and reset the game result.
    ///
    /// Both win flags and the decided flag are cleared unconditionally, even
    /// when the cleared cell is not part of the winning run. Search
    /// backtracking relies on this full reset after every probe. The turn
    /// passes back to the owner of the removed stone.
    pub fn unmark(&mut self, pos: Pos) {
        let owner = self.get(pos).and_then(Cell::owner);
        match self.grid.set(pos, Cell::Empty) {
            Ok(()) => {
                if let Some(owner) = owner {
                    self.filled -= 1;
                    self.turn = owner;
                }
            }
            Err(err) => debug!("unmark ignored: {}", err),
        }
        self.winner = None;
        self.winning_run = None;
        self.decided = false;
    }

    /// Check if a stone occupies `pos`. Off-board positions read as unmarked.
    #[inline]
    pub fn is_marked(&self, pos: Pos) -> bool {
        matches!(self.grid.get(pos), Ok(cell) if !cell.is_empty())
    }

    /// Check if every cell is owned
    #[inline]
    pub fn is_full(&self) -> bool {
        self.filled == self.grid.len()
    }

    /// Check if the game has ended by a win or a full board
    #[inline]
    pub fn game_over(&self) -> bool {
        self.decided || self.is_full()
    }

    #[inline]
    pub fn player_one_won(&self) -> bool {
        self.winner == Some(Player::One)
    }

    #[inline]
    pub fn player_two_won(&self) -> bool {
        self.winner == Some(Player::Two)
    }

    /// Current result. A recorded win takes precedence over a full board.
    pub fn result(&self) -> GameResult {
        match self.winner {
            Some(Player::One) => GameResult::PlayerOneWon,
            Some(Player::Two) => GameResult::PlayerTwoWon,
            None if self.is_full() => GameResult::Drawn,
            None => GameResult::InProgress,
        }
    }

    /// Run that produced the recorded win
    #[inline]
    pub fn winning_run(&self) -> Option<Run> {
        self.winning_run
    }

    /// Number of stones on the board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.filled
    }

    /// Unoccupied positions in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        self.grid
            .iter()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(pos, _)| pos)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..self.cols() {
            write!(f, "{:>3}", col)?;
        }
        writeln!(f)?;
        for row in 0..self.rows() {
            write!(f, "{:>3}", row)?;
            for col in 0..self.cols() {
                let cell = self
                    .get(Pos::new(row as i32, col as i32))
                    .unwrap_or_default();
                write!(f, "{:>3}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
