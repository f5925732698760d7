//! Move strategies built on the board's placement and sequence queries.

mod greedy;
mod minimax;
mod random;
mod strategy;

pub use greedy::{GreedyStrategy, SequenceStrategy};
pub use minimax::{Heuristic, MinimaxStrategy, SequenceHeuristic};
pub use random::RandomStrategy;
pub use strategy::{
    center_order, simulate, tactical_column, winning_column, Placement, Strategy, StrategyConfig,
};
