use crate::game::{Board, Token};

use super::greedy::{GreedyStrategy, SequenceStrategy};
use super::minimax::MinimaxStrategy;
use super::random::RandomStrategy;

/// A move policy: given a board and the token to place, choose a column.
///
/// Implementations may try moves out on the board but must hand it back
/// exactly as they received it.
pub trait Strategy {
    /// Pick a column for `token`, or `None` if every column is full.
    fn select_column(&mut self, board: &mut Board, token: Token) -> Option<usize>;

    /// Display name for logs.
    fn name(&self) -> &str;
}

/// Outcome of a trial placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub won: bool,
}

/// Drop `token` into `col`, run `f` against the resulting board, then take the
/// token back out. `None` if the column cannot take a token.
pub fn simulate<R>(
    board: &mut Board,
    token: Token,
    col: usize,
    f: impl FnOnce(&mut Board, Placement) -> R,
) -> Option<R> {
    let row = board.landing_row(col).ok()??;
    let won = board.add_token(token, col).ok()?;

    let result = f(board, Placement { row, col, won });

    board
        .remove_token(col)
        .unwrap_or_else(|e| panic!("trial move in column {col} could not be taken back: {e}"));
    Some(result)
}

/// Column indices ordered from the centre outwards, left before right on ties.
pub fn center_order(width: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..width).collect();
    // Distance from the centre, doubled to stay in integers
    order.sort_by_key(|&col| (2 * col).abs_diff(width.saturating_sub(1)));
    order
}

/// The most central column where `token` completes a winning run.
pub fn winning_column(board: &mut Board, token: Token) -> Option<usize> {
    center_order(board.width())
        .into_iter()
        .find(|&col| simulate(board, token, col, |_, placement| placement.won).unwrap_or(false))
}

/// Win if possible, otherwise block the opponent's immediate win.
pub fn tactical_column(board: &mut Board, token: Token) -> Option<usize> {
    winning_column(board, token).or_else(|| winning_column(board, token.opponent()))
}

fn default_radius() -> usize {
    1
}

fn default_depth() -> usize {
    4
}

/// Which strategy to build, as written in the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StrategyConfig {
    #[default]
    Random,
    Greedy {
        #[serde(default = "default_radius")]
        radius: usize,
    },
    Sequence,
    Minimax {
        #[serde(default = "default_depth")]
        depth: usize,
    },
}

impl StrategyConfig {
    /// Build the configured strategy. `seed` only affects random play.
    pub fn build(&self, seed: Option<u64>) -> Box<dyn Strategy> {
        match *self {
            StrategyConfig::Random => Box::new(match seed {
                Some(seed) => RandomStrategy::with_seed(seed),
                None => RandomStrategy::new(),
            }),
            StrategyConfig::Greedy { radius } => Box::new(GreedyStrategy::new(radius)),
            StrategyConfig::Sequence => Box::new(SequenceStrategy::new()),
            StrategyConfig::Minimax { depth } => Box::new(MinimaxStrategy::new(depth)),
        }
    }
}
