use super::board::{Board, get_available_moves};
use super::types::{Mark, Position};
use super::win_detector::check_win;

/// Picks the game-theoretically optimal move for `side` by exhaustive
/// minimax with alpha-beta pruning. Candidates are explored in row-major
/// order and ties go to the first candidate seen, so the result is fully
/// deterministic for a given board.
///
/// Calling this on a terminal or full board is a caller bug and reported as
/// an error, unlike the silent no-op policy of `GameState::apply_move`.
pub fn select_move(board: &Board, side: Mark) -> Result<Position, String> {
    let opponent = side
        .opponent()
        .ok_or_else(|| "Cannot select a move for the empty mark".to_string())?;

    if let Some(winner) = check_win(board) {
        return Err(format!("Game is already won by {:?}", winner));
    }

    let available_moves = get_available_moves(board);
    if available_moves.is_empty() {
        return Err("No empty cell left on the board".to_string());
    }

    let mut scratch = *board;
    let mut best_move = available_moves[0];
    let mut best_score = i32::MIN;

    for pos in available_moves {
        scratch[pos.row][pos.col] = side;
        let score = minimax(&mut scratch, false, side, opponent, i32::MIN, i32::MAX);
        scratch[pos.row][pos.col] = Mark::Empty;

        // Strict comparison: the first best candidate in scan order keeps.
        if score > best_score {
            best_score = score;
            best_move = pos;
        }
    }

    Ok(best_move)
}

/// Leaf scores are +1 / -1 / 0 with no depth term: among several winning
/// continuations the selector has no preference for the shorter one.
fn minimax(
    board: &mut Board,
    is_maximizing: bool,
    bot_mark: Mark,
    opponent_mark: Mark,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    if let Some(winner) = check_win(board) {
        return if winner == bot_mark { 1 } else { -1 };
    }

    let available_moves = get_available_moves(board);
    if available_moves.is_empty() {
        return 0;
    }

    if is_maximizing {
        let mut best_score = i32::MIN;
        for pos in available_moves {
            board[pos.row][pos.col] = bot_mark;
            let score = minimax(board, false, bot_mark, opponent_mark, alpha, beta);
            board[pos.row][pos.col] = Mark::Empty;

            best_score = best_score.max(score);
            alpha = alpha.max(best_score);
            if beta <= alpha {
                break;
            }
        }
        best_score
    } else {
        let mut best_score = i32::MAX;
        for pos in available_moves {
            board[pos.row][pos.col] = opponent_mark;
            let score = minimax(board, true, bot_mark, opponent_mark, alpha, beta);
            board[pos.row][pos.col] = Mark::Empty;

            best_score = best_score.min(score);
            beta = beta.min(best_score);
            if beta <= alpha {
                break;
            }
        }
        best_score
    }
}
