use tracing::debug;

use crate::ai::Agent;
use crate::error::MoveError;
use crate::game::{GameSession, Player};

/// Result of playing a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    pub winner: Option<Player>,
    pub moves: usize,
}

/// Play `session` to the end: `opponent` picks for the human side and the
/// session's own search moves for the AI.
pub fn play_round(
    session: &mut GameSession,
    opponent: &mut dyn Agent,
) -> Result<RoundResult, MoveError> {
    let mut moves = 0;

    while let Some(player) = session.turn() {
        let col = match player {
            Player::Human => {
                let col = opponent
                    .select_column(session)
                    .ok_or(MoveError::GameOver)?;
                session.place_token(col)?;
                col
            }
            Player::Ai => session.ai_move()?,
        };
        moves += 1;
        debug!(move_number = moves, player = player.name(), col, "move played");
    }

    Ok(RoundResult {
        winner: session.winner(),
        moves,
    })
}
