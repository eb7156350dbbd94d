//! Core Connect Four rules: the board, the two players, line detection
//! through the last move, and the session that enforces turn order.

mod board;
mod player;
mod session;
pub mod win;

pub use board::{Board, Position, COLS, CONNECT, ROWS};
pub use player::Player;
pub use session::{GameSession, Tally};
pub use win::Verdict;
