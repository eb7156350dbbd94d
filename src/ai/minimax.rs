use tracing::{debug, trace};

use crate::game::{Board, Player};

use super::evaluator::{is_decided, Heuristic, WindowDensity};

/// Plies searched by the session AI.
pub const MAX_DEPTH: usize = 5;

/// A search result: the column chosen at this node (`None` at a cutoff) and
/// its backed-up score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub column: Option<usize>,
    pub score: i32,
}

/// Depth-limited minimax. The AI maximizes, the human minimizes.
///
/// Every branch works on its own copy of the board, so siblings never see
/// each other's tokens. Columns are tried in ascending order and only a
/// strictly better score replaces the current best, which makes the choice
/// deterministic for a given board.
pub struct Minimax {
    depth: usize,
    heuristic: Box<dyn Heuristic>,
}

impl Minimax {
    pub fn new() -> Self {
        Self::with_depth(MAX_DEPTH)
    }

    pub fn with_depth(depth: usize) -> Self {
        Minimax {
            depth,
            heuristic: Box::new(WindowDensity),
        }
    }

    pub fn with_heuristic(depth: usize, heuristic: Box<dyn Heuristic>) -> Self {
        Minimax { depth, heuristic }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The AI's move for `board`, or `None` when the position is already a
    /// cutoff (decided or full).
    pub fn best_move(&self, board: &Board) -> Option<usize> {
        let best = self.maximize(0, board);
        debug!(column = ?best.column, score = best.score, depth = self.depth, "search finished");
        best.column
    }

    /// Score the position at `depth` with the AI to move.
    pub fn maximize(&self, depth: usize, board: &Board) -> ScoredMove {
        self.search(depth, board, Player::Ai)
    }

    /// Score the position at `depth` with the human to move.
    pub fn minimize(&self, depth: usize, board: &Board) -> ScoredMove {
        self.search(depth, board, Player::Human)
    }

    fn search(&self, depth: usize, board: &Board, mover: Player) -> ScoredMove {
        let score = self.heuristic.evaluate(board);
        if depth >= self.depth || is_decided(score) || board.is_full() {
            trace!(depth, score, "cutoff");
            return ScoredMove {
                column: None,
                score,
            };
        }

        let mut best: Option<ScoredMove> = None;
        for col in board.open_columns() {
            let mut next = board.clone();
            if next.place(col, mover).is_err() {
                continue;
            }
            let reply = match mover {
                Player::Ai => self.minimize(depth + 1, &next),
                Player::Human => self.maximize(depth + 1, &next),
            };
            let improves = best.map_or(true, |b| match mover {
                Player::Ai => reply.score > b.score,
                Player::Human => reply.score < b.score,
            });
            if improves {
                best = Some(ScoredMove {
                    column: Some(col),
                    score: reply.score,
                });
            }
        }

        best.unwrap_or(ScoredMove {
            column: None,
            score,
        })
    }
}

impl Default for Minimax {
    fn default() -> Self {
        Self::new()
    }
}
