use std::fmt;

use crate::game::Token;

use super::game::GameRecord;

/// Running results of a series of games.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchTally {
    pub red_wins: usize,
    pub yellow_wins: usize,
    pub draws: usize,
    total_moves: usize,
}

impl MatchTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, game: &GameRecord) {
        match game.winner {
            Some(Token::Red) => self.red_wins += 1,
            Some(Token::Yellow) => self.yellow_wins += 1,
            Some(Token::Empty) | None => self.draws += 1,
        }
        self.total_moves += game.length();
    }

    pub fn games(&self) -> usize {
        self.red_wins + self.yellow_wins + self.draws
    }

    pub fn wins(&self, token: Token) -> usize {
        match token {
            Token::Red => self.red_wins,
            Token::Yellow => self.yellow_wins,
            Token::Empty => 0,
        }
    }

    /// Fraction of games won by `token`.
    pub fn win_rate(&self, token: Token) -> f64 {
        let games = self.games();
        if games == 0 {
            return 0.0;
        }
        self.wins(token) as f64 / games as f64
    }

    pub fn avg_game_length(&self) -> f64 {
        let games = self.games();
        if games == 0 {
            return 0.0;
        }
        self.total_moves as f64 / games as f64
    }
}

impl fmt::Display for MatchTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} games: Red {} ({:.0}%), Yellow {} ({:.0}%), draws {}, avg length {:.1}",
            self.games(),
            self.red_wins,
            self.win_rate(Token::Red) * 100.0,
            self.yellow_wins,
            self.win_rate(Token::Yellow) * 100.0,
            self.draws,
            self.avg_game_length(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(winner: Option<Token>, length: usize) -> GameRecord {
        GameRecord {
            winner,
            moves: vec![0; length],
        }
    }

    #[test]
    fn test_empty_tally() {
        let tally = MatchTally::new();
        assert_eq!(tally.games(), 0);
        assert_eq!(tally.win_rate(Token::Red), 0.0);
        assert_eq!(tally.avg_game_length(), 0.0);
    }

    #[test]
    fn test_record_results() {
        let mut tally = MatchTally::new();
        tally.record(&record(Some(Token::Red), 7));
        tally.record(&record(Some(Token::Red), 11));
        tally.record(&record(Some(Token::Yellow), 8));
        tally.record(&record(None, 42));

        assert_eq!(tally.games(), 4);
        assert_eq!(tally.wins(Token::Red), 2);
        assert_eq!(tally.wins(Token::Yellow), 1);
        assert_eq!(tally.draws, 1);
        assert!((tally.win_rate(Token::Red) - 0.5).abs() < 1e-9);
        assert!((tally.avg_game_length() - 17.0).abs() < 1e-9);
    }

    #[test]
    fn test_display() {
        let mut tally = MatchTally::new();
        tally.record(&record(Some(Token::Yellow), 10));
        tally.record(&record(None, 20));
        assert_eq!(
            tally.to_string(),
            "2 games: Red 0 (0%), Yellow 1 (50%), draws 1, avg length 15.0"
        );
    }
}
