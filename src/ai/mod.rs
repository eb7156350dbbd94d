//! The AI: a static window-density evaluator, the depth-limited minimax
//! search built on it, and agents that can take the human side.

mod agent;
pub mod evaluator;
pub mod minimax;
mod random;

pub use agent::{Agent, AssistAgent, MinimaxAgent};
pub use evaluator::{score_board, Heuristic, WindowDensity, LOSS_SCORE, WIN_SCORE};
pub use minimax::{Minimax, ScoredMove, MAX_DEPTH};
pub use random::RandomAgent;
