use super::board::{Board, is_board_full};
use super::types::{Mark, Outcome, Position, WinningLine};

/// Fixed scan order: rows top to bottom, columns left to right, main
/// diagonal, anti-diagonal. With multiple complete lines (unreachable
/// through legal play) the first match in this order is reported.
const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    for line in LINES {
        let [(r0, c0), (r1, c1), (r2, c2)] = line;
        let mark = board[r0][c0];
        if mark == Mark::Empty {
            continue;
        }
        if board[r1][c1] == mark && board[r2][c2] == mark {
            let cells = [
                Position::new(r0, c0),
                Position::new(r1, c1),
                Position::new(r2, c2),
            ];
            return Some(WinningLine::new(mark, cells));
        }
    }
    None
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

/// Pure function of the board, re-derived on every call. A completed line
/// takes priority over the full-board draw check.
pub fn evaluate_outcome(board: &Board) -> Outcome {
    if let Some(line) = check_win_with_line(board) {
        return Outcome::Win(line);
    }
    if is_board_full(board) {
        return Outcome::Draw;
    }
    Outcome::InProgress
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::empty_board;
    use crate::game::types::GameStatus;

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate_outcome(&empty_board()), Outcome::InProgress);
    }

    #[test]
    fn test_row_win_reports_line() {
        let mut board = empty_board();
        board[1] = [Mark::O; 3];

        let line = check_win_with_line(&board).unwrap();
        assert_eq!(line.mark, Mark::O);
        assert_eq!(
            line.cells,
            [
                Position::new(1, 0),
                Position::new(1, 1),
                Position::new(1, 2)
            ]
        );
    }

    #[test]
    fn test_column_win_reports_line() {
        let mut board = empty_board();
        board[0][2] = Mark::X;
        board[1][2] = Mark::X;
        board[2][2] = Mark::X;

        let line = check_win_with_line(&board).unwrap();
        assert_eq!(line.mark, Mark::X);
        assert_eq!(
            line.cells,
            [
                Position::new(0, 2),
                Position::new(1, 2),
                Position::new(2, 2)
            ]
        );
    }

    #[test]
    fn test_main_diagonal_win() {
        let mut board = empty_board();
        board[0][0] = Mark::X;
        board[1][1] = Mark::X;
        board[2][2] = Mark::X;

        let line = check_win_with_line(&board).unwrap();
        assert_eq!(line.cells[0], Position::new(0, 0));
        assert_eq!(line.cells[2], Position::new(2, 2));
    }

    #[test]
    fn test_anti_diagonal_win() {
        let mut board = empty_board();
        board[0][2] = Mark::O;
        board[1][1] = Mark::O;
        board[2][0] = Mark::O;

        let line = check_win_with_line(&board).unwrap();
        assert_eq!(line.mark, Mark::O);
        assert_eq!(
            line.cells,
            [
                Position::new(0, 2),
                Position::new(1, 1),
                Position::new(2, 0)
            ]
        );
    }

    #[test]
    fn test_scan_order_prefers_earlier_row_on_illegal_board() {
        // Two complete rows at once cannot arise through legal play, but the
        // scan order is still defined: row 0 beats row 2.
        let board: Board = [[Mark::X; 3], [Mark::Empty; 3], [Mark::O; 3]];

        let line = check_win_with_line(&board).unwrap();
        assert_eq!(line.mark, Mark::X);
        assert_eq!(line.cells[0], Position::new(0, 0));
    }

    #[test]
    fn test_scan_order_prefers_row_over_column() {
        let board: Board = [
            [Mark::X, Mark::X, Mark::X],
            [Mark::X, Mark::Empty, Mark::Empty],
            [Mark::X, Mark::Empty, Mark::Empty],
        ];

        let line = check_win_with_line(&board).unwrap();
        assert_eq!(
            line.cells,
            [
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(0, 2)
            ]
        );
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board: Board = [
            [Mark::X, Mark::O, Mark::X],
            [Mark::X, Mark::O, Mark::O],
            [Mark::O, Mark::X, Mark::X],
        ];

        assert_eq!(evaluate_outcome(&board), Outcome::Draw);
        assert_eq!(evaluate_outcome(&board).status(), GameStatus::Draw);
    }

    #[test]
    fn test_full_board_with_line_is_win_not_draw() {
        let board: Board = [
            [Mark::X, Mark::X, Mark::X],
            [Mark::O, Mark::O, Mark::X],
            [Mark::X, Mark::O, Mark::O],
        ];

        match evaluate_outcome(&board) {
            Outcome::Win(line) => assert_eq!(line.mark, Mark::X),
            other => panic!("expected win, got {:?}", other),
        }
    }
}
