//! Core connect-N model: tokens, bottom-filling columns, and the board with
//! its anchored sequence detection.

mod board;
mod column;
mod token;

pub use board::{Board, Direction, MIN_SEQUENCE_LENGTH};
pub use column::Column;
pub use token::Token;
