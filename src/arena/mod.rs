//! Headless games between two strategies.

mod game;
mod tally;

pub use game::{play_game, GameRecord};
pub use tally::MatchTally;

use crate::ai::Strategy;
use crate::error::ArenaError;
use crate::game::Board;

/// Play `games` games on `board` and tally the results.
pub fn play_match(
    board: &mut Board,
    red: &mut dyn Strategy,
    yellow: &mut dyn Strategy,
    games: usize,
) -> Result<MatchTally, ArenaError> {
    let mut tally = MatchTally::new();
    for game in 1..=games {
        let record = play_game(board, red, yellow)?;
        match record.winner {
            Some(winner) => log::info!("game {game}: {winner} wins in {} moves", record.length()),
            None => log::info!("game {game}: draw after {} moves", record.length()),
        }
        tally.record(&record);
    }
    Ok(tally)
}
