use crate::game::{Board, Player, Position, COLS, CONNECT, ROWS};

/// Score of a position the AI has already won.
pub const WIN_SCORE: i32 = 999_999;
/// Score of a position the human has already won.
pub const LOSS_SCORE: i32 = -WIN_SCORE;

/// Trait for scoring a board from the AI's point of view (higher is better
/// for the AI).
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board) -> i32;
}

/// True for the two decided-position sentinels.
pub fn is_decided(score: i32) -> bool {
    score == WIN_SCORE || score == LOSS_SCORE
}

/// Sums AI tokens over every window of [`CONNECT`] cells on the board.
///
/// Human tokens only matter when they complete a window, which yields
/// [`LOSS_SCORE`]; a completed AI window yields [`WIN_SCORE`]. Both stop the
/// scan at the first completed window.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowDensity;

/// Window start cells and step for each axis, in scan order.
fn windows() -> impl Iterator<Item = (Position, isize, isize)> {
    let span = CONNECT - 1;
    let vertical = (0..ROWS - span)
        .flat_map(|row| (0..COLS).map(move |col| (Position::new(col, row), 0, 1)));
    let horizontal = (0..ROWS)
        .flat_map(move |row| (0..COLS - span).map(move |col| (Position::new(col, row), 1, 0)));
    let ascending = (0..ROWS - span)
        .flat_map(move |row| (0..COLS - span).map(move |col| (Position::new(col, row), 1, 1)));
    // Starts high on the left and walks down to the right.
    let descending = (span..ROWS)
        .flat_map(move |row| (0..COLS - span).map(move |col| (Position::new(col, row), 1, -1)));

    vertical.chain(horizontal).chain(ascending).chain(descending)
}

/// Number of `player` tokens in the window starting at `start`. Cells above
/// a column's fill height count for neither side.
fn window_count(board: &Board, start: Position, dcol: isize, drow: isize, player: Player) -> usize {
    (0..CONNECT as isize)
        .filter(|&i| board.at(start.offset(dcol * i, drow * i)) == Some(player))
        .count()
}

impl Heuristic for WindowDensity {
    fn evaluate(&self, board: &Board) -> i32 {
        let mut score = 0;
        for (start, dcol, drow) in windows() {
            if window_count(board, start, dcol, drow, Player::Human) >= CONNECT {
                return LOSS_SCORE;
            }
            let ai = window_count(board, start, dcol, drow, Player::Ai);
            if ai >= CONNECT {
                return WIN_SCORE;
            }
            score += ai as i32;
        }
        score
    }
}

/// Score a board with the default [`WindowDensity`] heuristic.
pub fn score_board(board: &Board) -> i32 {
    WindowDensity.evaluate(board)
}
