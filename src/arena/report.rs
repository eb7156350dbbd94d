use std::fmt;

use serde::Serialize;

use crate::game::Tally;

/// Summary of a finished match, printable as text or JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchReport {
    pub opponent: String,
    pub rounds: usize,
    pub total_moves: usize,
    pub tally: Tally,
}

impl MatchReport {
    /// Fraction of rounds won by the AI.
    pub fn ai_win_rate(&self) -> f32 {
        if self.rounds == 0 {
            return 0.0;
        }
        self.tally.ai_wins as f32 / self.rounds as f32
    }

    pub fn average_game_length(&self) -> f32 {
        if self.rounds == 0 {
            return 0.0;
        }
        self.total_moves as f32 / self.rounds as f32
    }
}

impl fmt::Display for MatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "AI vs {} over {} rounds", self.opponent, self.rounds)?;
        writeln!(f, "-------------------------------------------")?;
        writeln!(f, "AI Wins: {}", self.tally.ai_wins)?;
        writeln!(f, "Human Wins: {}", self.tally.human_wins)?;
        writeln!(f, "Ties: {}", self.tally.ties)?;
        write!(
            f,
            "AI win rate: {:.1}% | avg_len: {:.1}",
            self.ai_win_rate() * 100.0,
            self.average_game_length()
        )
    }
}
