use crate::game::{Board, Token};

use super::strategy::{center_order, simulate, tactical_column, Strategy};

/// Plays next to its own tokens.
///
/// Takes an immediate win, otherwise blocks an immediate loss, otherwise drops
/// where the landing cell has the most own tokens within `radius` cells in
/// every direction (Chebyshev distance). Ties go to the more central column.
pub struct GreedyStrategy {
    radius: usize,
}

impl GreedyStrategy {
    pub fn new(radius: usize) -> Self {
        GreedyStrategy { radius }
    }

    pub fn radius(&self) -> usize {
        self.radius
    }

    fn neighbours(&self, board: &Board, row: usize, col: usize, token: Token) -> usize {
        let rows = row.saturating_sub(self.radius)..=(row + self.radius).min(board.height() - 1);
        let cols = col.saturating_sub(self.radius)..=(col + self.radius).min(board.width() - 1);

        let mut count = 0;
        for r in rows {
            for c in cols.clone() {
                if (r, c) != (row, col) && board.get_token(r, c) == Ok(token) {
                    count += 1;
                }
            }
        }
        count
    }
}

impl Strategy for GreedyStrategy {
    fn select_column(&mut self, board: &mut Board, token: Token) -> Option<usize> {
        if let Some(col) = tactical_column(board, token) {
            return Some(col);
        }

        let mut best: Option<(usize, usize)> = None;
        for col in center_order(board.width()) {
            let Ok(Some(row)) = board.landing_row(col) else {
                continue;
            };
            let score = self.neighbours(board, row, col, token);
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((col, score));
            }
        }
        best.map(|(col, _)| col)
    }

    fn name(&self) -> &str {
        "Greedy"
    }
}

/// Greedy variant that scores a column by the longest own run it would create.
///
/// Same win/block rules as [`GreedyStrategy`]; ties go to the more central
/// column.
pub struct SequenceStrategy;

impl SequenceStrategy {
    pub fn new() -> Self {
        SequenceStrategy
    }
}

impl Default for SequenceStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for SequenceStrategy {
    fn select_column(&mut self, board: &mut Board, token: Token) -> Option<usize> {
        if let Some(col) = tactical_column(board, token) {
            return Some(col);
        }

        let mut best: Option<(usize, usize)> = None;
        for col in center_order(board.width()) {
            let score = simulate(board, token, col, |board, placement| {
                board
                    .longest_sequence_at(placement.row, placement.col)
                    .unwrap_or(0)
            });
            let Some(score) = score else {
                continue;
            };
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((col, score));
            }
        }
        best.map(|(col, _)| col)
    }

    fn name(&self) -> &str {
        "Sequence"
    }
}
