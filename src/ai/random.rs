use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::game::GameSession;

use super::agent::Agent;

/// An agent that selects uniformly at random from playable columns.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible agent for tests and seeded matches.
    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_column(&mut self, session: &GameSession) -> Option<usize> {
        let open: Vec<usize> = session
            .board()
            .open_columns()
            .filter(|&col| session.is_playable(col))
            .collect();
        if open.is_empty() {
            return None;
        }
        Some(open[self.rng.random_range(0..open.len())])
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_agent_selects_playable_column() {
        let mut agent = RandomAgent::with_seed(3);
        let mut session = GameSession::new();
        for _ in 0..6 {
            session.place_token(0).unwrap();
        }

        for _ in 0..100 {
            let col = agent.select_column(&session).unwrap();
            assert!(session.is_playable(col), "column {col} is not playable");
            assert_ne!(col, 0);
        }
    }

    #[test]
    fn test_random_agent_plays_full_game() {
        let mut human = RandomAgent::with_seed(11);
        let mut ai = RandomAgent::with_seed(12);
        let mut session = GameSession::new();

        let mut turn = 0;
        while !session.is_game_over() {
            let col = if turn % 2 == 0 {
                human.select_column(&session)
            } else {
                ai.select_column(&session)
            };
            session.place_token(col.unwrap()).unwrap();
            turn += 1;
        }

        assert!(session.is_game_over());
        assert_eq!(human.select_column(&session), None);
    }

    #[test]
    fn test_seeded_agents_agree() {
        let session = GameSession::new();
        let mut a = RandomAgent::with_seed(99);
        let mut b = RandomAgent::with_seed(99);
        for _ in 0..20 {
            assert_eq!(a.select_column(&session), b.select_column(&session));
        }
    }

    #[test]
    fn test_random_agent_name() {
        let agent = RandomAgent::new();
        assert_eq!(agent.name(), "Random");
    }
}
