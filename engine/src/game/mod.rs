mod board;
mod bot_controller;
mod game_state;
mod types;
mod win_detector;

pub use board::{
    BOARD_SIZE, Board, empty_board, get_available_moves, is_board_full, is_valid_move,
};
pub use bot_controller::select_move;
pub use game_state::GameState;
pub use types::{GameStatus, Mark, Outcome, Position, WinningLine};
pub use win_detector::{check_win, check_win_with_line, evaluate_outcome};
