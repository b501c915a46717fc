use super::types::{Mark, Position};

pub const BOARD_SIZE: usize = 3;

/// Copy semantics give the search snapshot boards for free: every scratch
/// copy is a plain stack value, so no branch can observe another branch's
/// in-progress mutation.
pub type Board = [[Mark; BOARD_SIZE]; BOARD_SIZE];

pub fn empty_board() -> Board {
    [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE]
}

/// Empty cells in row-major order. The move selector relies on this order
/// for its deterministic tie-break.
pub fn get_available_moves(board: &Board) -> Vec<Position> {
    let mut moves = Vec::new();
    for (row, cells) in board.iter().enumerate() {
        for (col, &cell) in cells.iter().enumerate() {
            if cell == Mark::Empty {
                moves.push(Position::new(row, col));
            }
        }
    }
    moves
}

pub fn is_valid_move(board: &Board, row: usize, col: usize) -> bool {
    if row >= BOARD_SIZE || col >= BOARD_SIZE {
        return false;
    }
    board[row][col] == Mark::Empty
}

pub fn is_board_full(board: &Board) -> bool {
    board
        .iter()
        .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
}
