use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::ai::Minimax;
use crate::error::MoveError;

use super::win::{self, Verdict};
use super::{Board, Player};

/// Cumulative results across the rounds of a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub human_wins: u32,
    pub ai_wins: u32,
    pub ties: u32,
}

impl Tally {
    pub fn games(&self) -> u32 {
        self.human_wins + self.ai_wins + self.ties
    }

    fn record(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::Win(Player::Human) => self.human_wins += 1,
            Verdict::Win(Player::Ai) => self.ai_wins += 1,
            Verdict::Draw => self.ties += 1,
            Verdict::Continue => {}
        }
    }
}

/// One game of Connect Four between the human and the AI, plus the running
/// tally carried over from earlier rounds.
///
/// INVARIANTS:
/// - `turn.is_some()` implies no line of four exists on the board.
/// - `winner == Some(p)` iff a line of four `p` tokens exists.
/// - once `turn` is `None` it stays `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    board: Board,
    turn: Option<Player>,
    winner: Option<Player>,
    last_move_column: Option<usize>,
    tally: Tally,
}

impl GameSession {
    /// New session with an empty board; the human moves first.
    pub fn new() -> Self {
        Self::with_first_player(Player::Human)
    }

    pub fn with_first_player(first: Player) -> Self {
        GameSession {
            board: Board::new(),
            turn: Some(first),
            winner: None,
            last_move_column: None,
            tally: Tally::default(),
        }
    }

    /// Fresh game that keeps this session's tally.
    pub fn next_round(&self, first: Player) -> Self {
        GameSession {
            tally: self.tally,
            ..Self::with_first_player(first)
        }
    }

    /// Whose turn it is, or `None` once the game is over.
    pub fn turn(&self) -> Option<Player> {
        self.turn
    }

    /// The winner, if a line of four was made. `None` while playing and
    /// after a draw.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    pub fn is_game_over(&self) -> bool {
        self.turn.is_none()
    }

    pub fn is_draw(&self) -> bool {
        self.is_game_over() && self.winner.is_none()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// Column written by the most recent `place_token`, whichever side
    /// played it.
    pub fn last_move_column(&self) -> Option<usize> {
        self.last_move_column
    }

    pub fn is_good_column(&self, col: usize) -> bool {
        self.board.is_good_column(col)
    }

    /// Can the side to move play in `col` right now?
    pub fn is_playable(&self, col: usize) -> bool {
        !self.is_game_over() && self.board.has_room(col)
    }

    pub fn column(&self, col: usize) -> Result<&[Player], MoveError> {
        self.board.column(col)
    }

    /// Place the current player's token in `col`, then record a win or draw
    /// or pass the turn.
    pub fn place_token(&mut self, col: usize) -> Result<(), MoveError> {
        if !self.is_good_column(col) {
            return Err(MoveError::OutOfRangeColumn(col));
        }
        let Some(mover) = self.turn else {
            return Err(MoveError::GameOver);
        };

        let row = self.board.place(col, mover)?;
        self.last_move_column = Some(col);
        debug!(player = mover.name(), col, row, "token placed");

        let verdict = win::judge(&self.board, col);
        self.tally.record(verdict);
        match verdict {
            Verdict::Win(player) => {
                self.winner = Some(player);
                self.turn = None;
                info!(winner = player.name(), tally = ?self.tally, "game won");
            }
            Verdict::Draw => {
                self.turn = None;
                info!(tally = ?self.tally, "game drawn");
            }
            Verdict::Continue => self.turn = Some(mover.other()),
        }

        Ok(())
    }

    /// Play the search's maximizing choice for the side to move. Returns the
    /// column played.
    #[instrument(level = "debug", skip(self), fields(turn = ?self.turn))]
    pub fn ai_move(&mut self) -> Result<usize, MoveError> {
        if self.is_game_over() {
            return Err(MoveError::GameOver);
        }
        let col = Minimax::new()
            .best_move(&self.board)
            .ok_or(MoveError::GameOver)?;
        self.place_token(col)?;
        Ok(col)
    }

    /// Play the search's choice on behalf of the side to move, then let the
    /// AI reply if the game is still going. Returns both columns.
    pub fn assisted_move(&mut self) -> Result<(usize, Option<usize>), MoveError> {
        let assisted = self.ai_move()?;
        let reply = if self.is_game_over() {
            None
        } else {
            Some(self.ai_move()?)
        };
        Ok((assisted, reply))
    }

    /// What the human should have played: retract the top token of the last
    /// written column on a copy of the board and ask the minimizing search
    /// for its choice. The live board is never touched.
    pub fn best_previous_move(&self) -> Option<usize> {
        let col = self.last_move_column?;
        let mut retracted = self.board.clone();
        retracted.take_top(col)?;
        let choice = Minimax::new().minimize(0, &retracted);
        debug!(retracted = col, choice = ?choice.column, score = choice.score, "best previous move");
        choice.column
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
