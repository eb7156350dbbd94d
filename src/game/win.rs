//! Line detection through the most recently placed token.

use super::board::{Board, Position, CONNECT};
use super::Player;

/// The four line directions, each as the (dcol, drow) step in its positive
/// sense.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Vertical,
    Horizontal,
    /// Bottom-left to top-right, /
    Ascending,
    /// Top-left to bottom-right, \
    Descending,
}

pub const AXES: [Axis; 4] = [
    Axis::Vertical,
    Axis::Horizontal,
    Axis::Ascending,
    Axis::Descending,
];

impl Axis {
    pub fn step(self) -> (isize, isize) {
        match self {
            Axis::Vertical => (0, 1),
            Axis::Horizontal => (1, 0),
            Axis::Ascending => (1, 1),
            Axis::Descending => (1, -1),
        }
    }
}

/// Result of judging a freshly applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Win(Player),
    Draw,
    Continue,
}

/// Counts `player` tokens walking from `start` by (dcol, drow), not counting
/// the token at `start` itself.
pub fn count_from_by(
    board: &Board,
    start: Position,
    dcol: isize,
    drow: isize,
    player: Player,
) -> usize {
    let mut count = 0;
    let mut pos = start.offset(dcol, drow);
    while board.at(pos) == Some(player) {
        count += 1;
        pos = pos.offset(dcol, drow);
    }
    count
}

/// Length of the run of `player` tokens through `pos` along `axis`,
/// including `pos`.
pub fn run_length(board: &Board, pos: Position, axis: Axis, player: Player) -> usize {
    let (dcol, drow) = axis.step();
    count_from_by(board, pos, dcol, drow, player)
        + 1
        + count_from_by(board, pos, -dcol, -drow, player)
}

/// Judge the move that just landed on top of `col`.
///
/// Only lines through that token are inspected. If none reaches
/// [`CONNECT`], a full board is a draw and anything else continues play.
pub fn judge(board: &Board, col: usize) -> Verdict {
    let height = board.height(col);
    if height == 0 {
        return Verdict::Continue;
    }
    let pos = Position::new(col, height - 1);
    let Some(mover) = board.at(pos) else {
        return Verdict::Continue;
    };

    if AXES
        .iter()
        .any(|&axis| run_length(board, pos, axis, mover) >= CONNECT)
    {
        Verdict::Win(mover)
    } else if board.is_full() {
        Verdict::Draw
    } else {
        Verdict::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{COLS, ROWS};

    fn drop_all(board: &mut Board, moves: &[(usize, Player)]) {
        for &(col, player) in moves {
            board.place(col, player).unwrap();
        }
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::new();
        for col in 0..4 {
            board.place(col, Player::Human).unwrap();
        }
        assert_eq!(judge(&board, 3), Verdict::Win(Player::Human));
        // The middle of the line sees it too.
        assert_eq!(judge(&board, 1), Verdict::Win(Player::Human));
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::new();
        for _ in 0..4 {
            board.place(3, Player::Ai).unwrap();
        }
        assert_eq!(judge(&board, 3), Verdict::Win(Player::Ai));
    }

    #[test]
    fn test_ascending_diagonal_win() {
        let mut board = Board::new();
        use crate::game::Player::{Ai as A, Human as H};
        drop_all(
            &mut board,
            &[
                (0, H),
                (1, A),
                (1, H),
                (2, A),
                (2, A),
                (2, H),
                (3, A),
                (3, A),
                (3, A),
                (3, H),
            ],
        );
        assert_eq!(judge(&board, 3), Verdict::Win(H));
        assert_eq!(
            run_length(&board, Position::new(3, 3), Axis::Ascending, H),
            4
        );
    }

    #[test]
    fn test_descending_diagonal_win() {
        let mut board = Board::new();
        use crate::game::Player::{Ai as A, Human as H};
        drop_all(
            &mut board,
            &[
                (6, A),
                (5, H),
                (5, A),
                (4, H),
                (4, H),
                (4, A),
                (3, H),
                (3, H),
                (3, H),
                (3, A),
            ],
        );
        assert_eq!(judge(&board, 3), Verdict::Win(A));
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::new();
        for col in 0..3 {
            board.place(col, Player::Human).unwrap();
        }
        assert_eq!(judge(&board, 2), Verdict::Continue);
    }

    #[test]
    fn test_broken_line_is_not_a_win() {
        let mut board = Board::new();
        use crate::game::Player::{Ai as A, Human as H};
        drop_all(&mut board, &[(0, H), (1, H), (2, A), (3, H), (4, H)]);
        assert_eq!(judge(&board, 4), Verdict::Continue);
    }

    #[test]
    fn test_count_from_by_excludes_start() {
        let mut board = Board::new();
        for col in 0..3 {
            board.place(col, Player::Ai).unwrap();
        }
        let start = Position::new(0, 0);
        assert_eq!(count_from_by(&board, start, 1, 0, Player::Ai), 2);
        assert_eq!(count_from_by(&board, start, -1, 0, Player::Ai), 0);
        assert_eq!(count_from_by(&board, start, 1, 0, Player::Human), 0);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        // Rows alternate H A H A H A in every column except column 3, which
        // is inverted; no line of four exists anywhere.
        let mut board = Board::new();
        for col in 0..COLS {
            for row in 0..ROWS {
                let human_first = col != 3;
                let player = if (row % 2 == 0) == human_first {
                    Player::Human
                } else {
                    Player::Ai
                };
                board.place(col, player).unwrap();
            }
        }
        assert_eq!(judge(&board, 6), Verdict::Draw);
    }

    #[test]
    fn test_empty_column_continues() {
        let board = Board::new();
        assert_eq!(judge(&board, 0), Verdict::Continue);
    }
}
