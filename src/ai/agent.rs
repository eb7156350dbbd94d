use crate::game::GameSession;

use super::minimax::Minimax;

/// Something that can choose the human side's column.
pub trait Agent {
    /// Pick a playable column for the side to move, or `None` if the game is
    /// already over.
    fn select_column(&mut self, session: &GameSession) -> Option<usize>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}

/// Plays whatever the AI's own maximizing search would pick, the way the
/// "play best move" assist does.
#[derive(Debug, Default)]
pub struct AssistAgent;

impl Agent for AssistAgent {
    fn select_column(&mut self, session: &GameSession) -> Option<usize> {
        if session.is_game_over() {
            return None;
        }
        Minimax::new().best_move(session.board())
    }

    fn name(&self) -> &str {
        "Assist"
    }
}

/// Plays the minimizing side of the search, i.e. proper play for the human.
pub struct MinimaxAgent {
    search: Minimax,
}

impl MinimaxAgent {
    pub fn new(depth: usize) -> Self {
        MinimaxAgent {
            search: Minimax::with_depth(depth),
        }
    }
}

impl Agent for MinimaxAgent {
    fn select_column(&mut self, session: &GameSession) -> Option<usize> {
        if session.is_game_over() {
            return None;
        }
        self.search
            .minimize(0, session.board())
            .column
            .or_else(|| session.board().open_columns().next())
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
