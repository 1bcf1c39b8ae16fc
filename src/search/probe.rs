//! Scoped tentative moves for search backtracking

use std::ops::{Deref, DerefMut};

use crate::board::{Board, Player, Pos};

/// A stone placed for the duration of a search probe.
///
/// The stone is removed with [`Board::unmark`] when the guard is dropped,
/// so every exit from a probe, pruning breaks included, restores the board.
/// The turn in effect before the probe is put back as well, since the search
/// plays both sides out of turn order. While the guard lives it derefs to the
/// board for the recursive search.
pub struct Probe<'a> {
    board: &'a mut Board,
    pos: Pos,
    turn: Player,
}

impl<'a> Probe<'a> {
    /// Mark `pos` for `player`. Returns `None` if the mark is rejected, in
    /// which case the board is unchanged and nothing will be undone.
    pub fn place(board: &'a mut Board, player: Player, pos: Pos) -> Option<Self> {
        let turn = board.turn();
        if board.mark(player, pos) {
            Some(Self { board, pos, turn })
        } else {
            None
        }
    }
}

impl Deref for Probe<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl DerefMut for Probe<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for Probe<'_> {
    fn drop(&mut self) {
        self.board.unmark(self.pos);
        self.board.set_turn(self.turn);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_undoes_on_drop() {
        let mut board = Board::new(3, 3, 3);
        {
            let probe = Probe::place(&mut board, Player::Two, Pos::new(1, 1)).unwrap();
            assert!(probe.is_marked(Pos::new(1, 1)));
            assert_eq!(probe.stone_count(), 1);
        }
        assert!(!board.is_marked(Pos::new(1, 1)));
        assert_eq!(board.stone_count(), 0);
        assert_eq!(board.turn(), Player::One);
    }

    #[test]
    fn test_nested_probes_unwind_winning_state() {
        let mut board = Board::new(3, 3, 3);
        board.mark(Player::One, Pos::new(0, 0));
        board.mark(Player::One, Pos::new(0, 1));
        {
            let mut outer = Probe::place(&mut board, Player::Two, Pos::new(2, 2)).unwrap();
            let inner = Probe::place(&mut outer, Player::One, Pos::new(0, 2)).unwrap();
            assert!(inner.player_one_won());
            assert!(inner.game_over());
        }
        assert!(!board.game_over());
        assert!(!board.player_one_won());
        assert_eq!(board.stone_count(), 2);
    }

    #[test]
    fn test_rejected_probe_changes_nothing() {
        let mut board = Board::new(3, 3, 3);
        board.mark(Player::One, Pos::new(0, 0));
        assert!(Probe::place(&mut board, Player::Two, Pos::new(0, 0)).is_none());
        assert!(Probe::place(&mut board, Player::Two, Pos::new(5, 5)).is_none());
        assert!(board.is_marked(Pos::new(0, 0)));
        assert_eq!(board.stone_count(), 1);
    }
}
