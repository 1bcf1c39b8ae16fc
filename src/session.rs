//! Turn-keeping game driver for a presentation layer
//!
//! A [`GameSession`] alternates players, records the move history and asks
//! the [`AIEngine`] for the computer's moves. Rendering and input stay with
//! the caller; every coordinate given here is already a grid index.

use log::info;

use crate::board::{Board, GameResult, Player, Pos};
use crate::config::EngineConfig;
use crate::engine::{AIEngine, MoveResult};
use crate::error::MoveError;

/// Who controls each side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    /// Human is player one, the computer player two
    #[default]
    HumanVsComputer,
    /// Both sides entered by humans (hotseat)
    HumanVsHuman,
}

/// State of one game from first move to result.
pub struct GameSession {
    config: EngineConfig,
    board: Board,
    mode: GameMode,
    engine: AIEngine,
    history: Vec<(Pos, Player)>,
    last_ai_result: Option<MoveResult>,
}

impl GameSession {
    pub fn new(config: EngineConfig, mode: GameMode) -> Self {
        Self {
            board: config.new_board(),
            engine: AIEngine::from_config(&config.search),
            config,
            mode,
            history: Vec::new(),
            last_ai_result: None,
        }
    }

    /// Start over on a fresh board with the same configuration
    pub fn reset(&mut self) {
        self.board = self.config.new_board();
        self.history.clear();
        self.last_ai_result = None;
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Player whose move it is
    #[inline]
    pub fn current_turn(&self) -> Player {
        self.board.turn()
    }

    #[inline]
    pub fn result(&self) -> GameResult {
        self.board.result()
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.board.game_over()
    }

    /// Moves played so far, oldest first
    #[inline]
    pub fn history(&self) -> &[(Pos, Player)] {
        &self.history
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.history.last().map(|&(pos, _)| pos)
    }

    /// Statistics of the computer's latest move
    pub fn last_ai_result(&self) -> Option<&MoveResult> {
        self.last_ai_result.as_ref()
    }

    /// Check if the computer moves next
    pub fn is_computer_turn(&self) -> bool {
        match self.mode {
            GameMode::HumanVsComputer => self.current_turn() == Player::Two,
            GameMode::HumanVsHuman => false,
        }
    }

    /// Place a stone for the player whose turn it is
    pub fn place(&mut self, pos: Pos) -> Result<(), MoveError> {
        let player = self.current_turn();
        self.board.try_mark(player, pos)?;
        self.record(pos, player);
        Ok(())
    }

    /// Let the computer move if it is its turn.
    ///
    /// Returns `None` when it is not the computer's turn, the game is over,
    /// or no legal move remains.
    pub fn computer_move(&mut self) -> Option<MoveResult> {
        if !self.is_computer_turn() || self.is_over() {
            return None;
        }
        let result = self.engine.play(&mut self.board)?;
        if let Some(pos) = result.best_move {
            self.record(pos, Player::Two);
        }
        self.last_ai_result = Some(result.clone());
        Some(result)
    }

    /// Take back the last move. Against the computer, moves are taken back
    /// up to and including the human's latest one, so the human is to move
    /// again whether or not the computer had answered.
    ///
    /// The board is rebuilt by replaying the remaining history on a fresh
    /// board rather than unmarking.
    pub fn undo(&mut self) {
        while let Some((_, player)) = self.history.pop() {
            if self.mode == GameMode::HumanVsHuman || player == Player::One {
                break;
            }
        }

        let moves = std::mem::take(&mut self.history);
        self.board = self.config.new_board();
        self.last_ai_result = None;
        for (pos, player) in moves {
            if self.board.mark(player, pos) {
                self.history.push((pos, player));
            }
        }
    }

    fn record(&mut self, pos: Pos, player: Player) {
        self.history.push((pos, player));
        if self.board.game_over() {
            info!("game over after {} moves: {}", self.history.len(), self.board.result());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BoardConfig, SearchConfig};
    use pretty_assertions::assert_eq;

    fn tic_tac_toe() -> EngineConfig {
        EngineConfig {
            board: BoardConfig {
                rows: 3,
                cols: 3,
                win_length: 3,
            },
            search: SearchConfig::default(),
        }
    }

    #[test]
    fn test_turns_alternate() {
        let mut session = GameSession::new(tic_tac_toe(), GameMode::HumanVsHuman);
        assert_eq!(session.current_turn(), Player::One);

        session.place(Pos::new(0, 0)).unwrap();
        assert_eq!(session.current_turn(), Player::Two);
        session.place(Pos::new(1, 1)).unwrap();
        assert_eq!(session.current_turn(), Player::One);

        assert_eq!(
            session.history(),
            &[(Pos::new(0, 0), Player::One), (Pos::new(1, 1), Player::Two)]
        );
        assert_eq!(session.last_move(), Some(Pos::new(1, 1)));
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut session = GameSession::new(tic_tac_toe(), GameMode::HumanVsHuman);
        session.place(Pos::new(0, 0)).unwrap();

        assert_eq!(
            session.place(Pos::new(0, 0)),
            Err(MoveError::Occupied { row: 0, col: 0 })
        );
        assert!(matches!(
            session.place(Pos::new(3, 0)),
            Err(MoveError::OutOfRange { .. })
        ));
        assert_eq!(session.current_turn(), Player::Two);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_computer_answers_human() {
        let mut session = GameSession::new(tic_tac_toe(), GameMode::HumanVsComputer);
        assert!(!session.is_computer_turn());
        assert!(session.computer_move().is_none());

        session.place(Pos::new(2, 0)).unwrap();
        assert!(session.is_computer_turn());
        let result = session.computer_move().unwrap();
        let pos = result.best_move.unwrap();
        assert_eq!(session.board().get(pos), Some(Player::Two.into()));
        assert_eq!(session.current_turn(), Player::One);
        assert_eq!(session.history().len(), 2);
        assert!(session.last_ai_result().is_some());
    }

    #[test]
    fn test_hotseat_game_to_win() {
        let mut session = GameSession::new(tic_tac_toe(), GameMode::HumanVsHuman);
        for (r, c) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            session.place(Pos::new(r, c)).unwrap();
        }
        assert!(session.is_over());
        assert_eq!(session.result(), GameResult::PlayerOneWon);
        assert_eq!(session.place(Pos::new(2, 2)), Err(MoveError::GameDecided));
    }

    #[test]
    fn test_undo_against_computer_takes_back_exchange() {
        let mut session = GameSession::new(tic_tac_toe(), GameMode::HumanVsComputer);
        session.place(Pos::new(1, 1)).unwrap();
        session.computer_move().unwrap();
        assert_eq!(session.board().stone_count(), 2);

        session.undo();
        assert_eq!(session.board().stone_count(), 0);
        assert!(session.history().is_empty());
        assert_eq!(session.current_turn(), Player::One);
    }

    #[test]
    fn test_undo_after_human_win_returns_turn_to_human() {
        let config = EngineConfig {
            board: BoardConfig {
                rows: 1,
                cols: 7,
                win_length: 2,
            },
            search: SearchConfig { depth_limit: 1 },
        };
        let mut session = GameSession::new(config, GameMode::HumanVsComputer);
        session.place(Pos::new(0, 3)).unwrap();
        let reply = session.computer_move().unwrap().best_move.unwrap();
        let winning = if reply == Pos::new(0, 4) {
            Pos::new(0, 2)
        } else {
            Pos::new(0, 4)
        };
        session.place(winning).unwrap();
        assert_eq!(session.result(), GameResult::PlayerOneWon);

        session.undo();
        assert_eq!(session.history().len(), 2);
        assert_eq!(session.current_turn(), Player::One);
        assert!(!session.is_computer_turn());
        assert!(!session.is_over());
        assert!(!session.board().is_marked(winning));
        session.place(winning).unwrap();
    }

    #[test]
    fn test_undo_single_move_in_hotseat() {
        let mut session = GameSession::new(tic_tac_toe(), GameMode::HumanVsHuman);
        session.place(Pos::new(0, 0)).unwrap();
        session.place(Pos::new(1, 1)).unwrap();

        session.undo();
        assert_eq!(session.history(), &[(Pos::new(0, 0), Player::One)]);
        assert!(!session.board().is_marked(Pos::new(1, 1)));
        assert_eq!(session.current_turn(), Player::Two);
    }

    #[test]
    fn test_reset() {
        let mut session = GameSession::new(tic_tac_toe(), GameMode::HumanVsHuman);
        session.place(Pos::new(0, 0)).unwrap();
        session.reset();
        assert_eq!(session.board().stone_count(), 0);
        assert_eq!(session.result(), GameResult::InProgress);
        assert_eq!(session.mode(), GameMode::HumanVsHuman);
    }
}
