pub mod game;
pub mod logger;

pub use game::{
    BOARD_SIZE, Board, GameState, GameStatus, Mark, Outcome, Position, WinningLine, check_win,
    check_win_with_line, empty_board, evaluate_outcome, get_available_moves, is_board_full,
    is_valid_move, select_move,
};
