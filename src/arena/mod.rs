//! Headless matches between a human-side agent and the session AI, with the
//! tally carried from round to round.

mod report;
mod round;

pub use report::MatchReport;
pub use round::{play_round, RoundResult};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::ai::{Agent, AssistAgent, MinimaxAgent, RandomAgent};
use crate::error::MoveError;
use crate::game::{GameSession, Player};

/// Who moves first, and whether that flips every round.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub first_player: Player,
    pub alternate_first: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            first_player: Player::Human,
            alternate_first: false,
        }
    }
}

/// Which agent takes the human side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OpponentKind {
    Random,
    Assist,
    Minimax,
}

/// Arena configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub rounds: usize,
    pub opponent: OpponentKind,
    /// Search depth for the `minimax` opponent.
    pub opponent_depth: usize,
    pub seed: Option<u64>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig {
            rounds: 10,
            opponent: OpponentKind::Random,
            opponent_depth: 3,
            seed: None,
        }
    }
}

impl ArenaConfig {
    /// Build the agent this config names.
    pub fn build_opponent(&self) -> Box<dyn Agent> {
        match self.opponent {
            OpponentKind::Random => match self.seed {
                Some(seed) => Box::new(RandomAgent::with_seed(seed)),
                None => Box::new(RandomAgent::new()),
            },
            OpponentKind::Assist => Box::new(AssistAgent),
            OpponentKind::Minimax => Box::new(MinimaxAgent::new(self.opponent_depth)),
        }
    }
}

/// Plays a fixed number of rounds against one opponent.
pub struct Arena {
    session: SessionConfig,
    config: ArenaConfig,
}

impl Arena {
    pub fn new(session: SessionConfig, config: ArenaConfig) -> Self {
        Arena { session, config }
    }

    /// First mover for a zero-based round index.
    fn first_player(&self, round: usize) -> Player {
        if self.session.alternate_first && round % 2 == 1 {
            self.session.first_player.other()
        } else {
            self.session.first_player
        }
    }

    /// Run the full match.
    pub fn run(&self, opponent: &mut dyn Agent) -> Result<MatchReport, MoveError> {
        info!(
            rounds = self.config.rounds,
            opponent = opponent.name(),
            "starting match"
        );

        let mut session = GameSession::with_first_player(self.first_player(0));
        let mut total_moves = 0;

        for round in 0..self.config.rounds {
            if round > 0 {
                session = session.next_round(self.first_player(round));
            }
            let result = play_round(&mut session, opponent)?;
            total_moves += result.moves;
            info!(
                round = round + 1,
                winner = result.winner.map_or("none", Player::name),
                moves = result.moves,
                "round finished"
            );
        }

        let report = MatchReport {
            opponent: opponent.name().to_string(),
            rounds: self.config.rounds,
            total_moves,
            tally: session.tally(),
        };
        info!(tally = ?report.tally, "match finished");
        Ok(report)
    }
}
