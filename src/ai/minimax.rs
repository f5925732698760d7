use crate::game::{Board, Token};

use super::strategy::{center_order, simulate, Strategy};

/// Score for completing a run. Wins found closer to the root score higher.
const WIN_SCORE: f64 = 1_000_000.0;

/// Trait for evaluating a board position from one token's perspective.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board, token: Token) -> f64;
}

/// Sums the square of the longest run through every token, own runs
/// positive and opposing runs negative.
pub struct SequenceHeuristic;

impl Heuristic for SequenceHeuristic {
    fn evaluate(&self, board: &Board, token: Token) -> f64 {
        let opponent = token.opponent();
        let mut score = 0.0;

        for col in 0..board.width() {
            let Ok(column) = board.column(col) else {
                continue;
            };
            for (row, &cell) in column.tokens().iter().enumerate() {
                let length = board.longest_sequence_at(row, col).unwrap_or(0) as f64;
                if cell == token {
                    score += length * length;
                } else if cell == opponent {
                    score -= length * length;
                }
            }
        }

        score
    }
}

/// Depth-limited negamax with alpha-beta pruning.
///
/// Moves are tried on the board itself and taken back, centre columns first.
pub struct MinimaxStrategy {
    depth: usize,
    heuristic: Box<dyn Heuristic>,
}

impl MinimaxStrategy {
    /// `depth` counts plies, including the move being chosen. A depth of 0 is
    /// treated as 1.
    pub fn new(depth: usize) -> Self {
        MinimaxStrategy {
            depth: depth.max(1),
            heuristic: Box::new(SequenceHeuristic),
        }
    }

    pub fn with_heuristic(depth: usize, heuristic: Box<dyn Heuristic>) -> Self {
        MinimaxStrategy {
            depth: depth.max(1),
            heuristic,
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    fn best_move(&self, board: &mut Board, token: Token) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;

        for col in center_order(board.width()) {
            let score = simulate(board, token, col, |board, placement| {
                if placement.won {
                    WIN_SCORE + self.depth as f64
                } else {
                    -self.negamax(
                        board,
                        token.opponent(),
                        self.depth - 1,
                        f64::NEG_INFINITY,
                        f64::INFINITY,
                    )
                }
            });
            let Some(score) = score else {
                continue;
            };
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((col, score));
            }
        }

        if let Some((col, score)) = best {
            log::trace!("minimax picked column {col} for {token} (score {score})");
        }
        best.map(|(col, _)| col)
    }

    /// Value of the position for `token`, which is to move.
    fn negamax(&self, board: &mut Board, token: Token, depth: usize, mut alpha: f64, beta: f64) -> f64 {
        if board.is_full() {
            return 0.0;
        }
        if depth == 0 {
            return self.heuristic.evaluate(board, token);
        }

        let mut best = f64::NEG_INFINITY;
        for col in center_order(board.width()) {
            let score = simulate(board, token, col, |board, placement| {
                if placement.won {
                    WIN_SCORE + depth as f64
                } else {
                    -self.negamax(board, token.opponent(), depth - 1, -beta, -alpha)
                }
            });
            let Some(score) = score else {
                continue;
            };

            best = best.max(score);
            alpha = alpha.max(score);
            if alpha >= beta {
                break;
            }
        }

        best
    }
}

impl Strategy for MinimaxStrategy {
    fn select_column(&mut self, board: &mut Board, token: Token) -> Option<usize> {
        self.best_move(board, token)
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
