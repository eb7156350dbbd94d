use crate::error::MoveError;

use super::Player;

/// Tokens in a line needed to win.
pub const CONNECT: usize = 4;
pub const COLS: usize = 7;
pub const ROWS: usize = 6;

/// A (column, row) pair. Row 0 is the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub col: isize,
    pub row: isize,
}

impl Position {
    pub fn new(col: usize, row: usize) -> Self {
        Position {
            col: col as isize,
            row: row as isize,
        }
    }

    pub fn offset(self, dcol: isize, drow: isize) -> Self {
        Position {
            col: self.col + dcol,
            row: self.row + drow,
        }
    }
}

/// The grid, stored as a ragged array of columns. Each column lists its
/// tokens bottom-to-top and is only as long as its fill height, so there is
/// no stored "empty" cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    columns: [Vec<Player>; COLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            columns: std::array::from_fn(|_| Vec::with_capacity(ROWS)),
        }
    }

    pub fn is_good_column(&self, col: usize) -> bool {
        col < COLS
    }

    /// Read-only view of a column, bottom-to-top.
    pub fn column(&self, col: usize) -> Result<&[Player], MoveError> {
        self.columns
            .get(col)
            .map(Vec::as_slice)
            .ok_or(MoveError::OutOfRangeColumn(col))
    }

    /// Fill height of a column; zero for out-of-range columns.
    pub fn height(&self, col: usize) -> usize {
        self.columns.get(col).map_or(0, Vec::len)
    }

    /// True when `col` is in range and has room for another token.
    pub fn has_room(&self, col: usize) -> bool {
        self.is_good_column(col) && self.columns[col].len() < ROWS
    }

    /// Columns that can still take a token, in ascending order.
    pub fn open_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..COLS).filter(move |&col| self.has_room(col))
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.columns.iter().all(|column| column.len() >= ROWS)
    }

    pub fn token_count(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }

    /// Token at a position, or `None` if the cell is empty or off the board.
    pub fn at(&self, pos: Position) -> Option<Player> {
        if pos.col < 0 || pos.row < 0 {
            return None;
        }
        self.columns
            .get(pos.col as usize)
            .and_then(|column| column.get(pos.row as usize))
            .copied()
    }

    /// Stack a token on a column, returning the row where it landed.
    pub fn place(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        if !self.is_good_column(col) {
            return Err(MoveError::OutOfRangeColumn(col));
        }
        let column = &mut self.columns[col];
        if column.len() >= ROWS {
            return Err(MoveError::ColumnFull(col));
        }
        column.push(player);
        Ok(column.len() - 1)
    }

    /// Remove and return the top token of a column.
    pub fn take_top(&mut self, col: usize) -> Option<Player> {
        self.columns.get_mut(col).and_then(Vec::pop)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for col in 0..COLS {
            assert_eq!(board.column(col).unwrap(), &[] as &[Player]);
        }
        assert_eq!(board.token_count(), 0);
        assert_eq!(board.open_columns().count(), COLS);
    }

    #[test]
    fn test_place_stacks_bottom_up() {
        let mut board = Board::new();

        let row = board.place(3, Player::Human).unwrap();
        assert_eq!(row, 0);
        let row = board.place(3, Player::Ai).unwrap();
        assert_eq!(row, 1);

        assert_eq!(board.column(3).unwrap(), &[Player::Human, Player::Ai]);
        assert_eq!(board.at(Position::new(3, 1)), Some(Player::Ai));
        assert_eq!(board.at(Position::new(3, 2)), None);
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new();
        for _ in 0..ROWS {
            board.place(0, Player::Human).unwrap();
        }

        assert!(!board.has_room(0));
        assert_eq!(board.place(0, Player::Ai), Err(MoveError::ColumnFull(0)));
        assert_eq!(board.height(0), ROWS);
        assert!(!board.open_columns().any(|col| col == 0));
    }

    #[test]
    fn test_out_of_range_column() {
        let mut board = Board::new();
        assert!(!board.is_good_column(COLS));
        assert_eq!(
            board.place(COLS, Player::Human),
            Err(MoveError::OutOfRangeColumn(COLS))
        );
        assert_eq!(board.column(COLS), Err(MoveError::OutOfRangeColumn(COLS)));
        assert_eq!(board.height(COLS), 0);
    }

    #[test]
    fn test_at_off_board_is_none() {
        let board = Board::new();
        assert_eq!(board.at(Position { col: -1, row: 0 }), None);
        assert_eq!(board.at(Position { col: 0, row: -1 }), None);
        assert_eq!(board.at(Position::new(COLS, 0)), None);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                board.place(col, Player::Ai).unwrap();
            }
        }
        assert!(board.is_full());
        assert_eq!(board.token_count(), COLS * ROWS);
    }

    #[test]
    fn test_take_top_restores_previous_state() {
        let mut board = Board::new();
        board.place(2, Player::Human).unwrap();
        let before = board.clone();
        board.place(2, Player::Ai).unwrap();

        assert_eq!(board.take_top(2), Some(Player::Ai));
        assert_eq!(board, before);
        assert_eq!(board.take_top(5), None);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut board = Board::new();
        board.place(1, Player::Human).unwrap();
        let mut copy = board.clone();
        copy.place(1, Player::Ai).unwrap();

        assert_eq!(board.height(1), 1);
        assert_eq!(copy.height(1), 2);
    }
}
