use super::board::{BOARD_SIZE, Board, empty_board};
use super::types::{GameStatus, Mark, Outcome};
use super::win_detector::evaluate_outcome;

/// One game in flight. X always moves first; the presentation layer decides
/// which side each participant plays. Scores across games are not tracked
/// here.
#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    current_mark: Mark,
    status: GameStatus,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: empty_board(),
            current_mark: Mark::X,
            status: GameStatus::InProgress,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Places the current mark. Illegal targets (out of bounds, occupied
    /// cell, game already over) are silently ignored: the caller is expected
    /// to pre-filter, and this no-op is the backstop, not an error. The turn
    /// flips only while the game stays in progress, so the winning mark is
    /// still `current_mark` when a terminal status is observed.
    pub fn apply_move(&mut self, row: usize, col: usize) {
        if self.status != GameStatus::InProgress {
            return;
        }
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return;
        }
        if self.board[row][col] != Mark::Empty {
            return;
        }

        self.board[row][col] = self.current_mark;
        self.status = evaluate_outcome(&self.board).status();

        if self.status == GameStatus::InProgress {
            self.current_mark = self.current_mark.opponent().unwrap_or(Mark::X);
        }
    }

    /// Full outcome including the winning line, re-derived from the board.
    pub fn outcome(&self) -> Outcome {
        evaluate_outcome(&self.board)
    }

    pub fn restart(&mut self) {
        self.board = empty_board();
        self.current_mark = Mark::X;
        self.status = GameStatus::InProgress;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
