use crate::ai::Strategy;
use crate::error::ArenaError;
use crate::game::{Board, Token};

/// Result of a single game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    /// `None` for a draw.
    pub winner: Option<Token>,
    /// Columns played, in order, starting with Red.
    pub moves: Vec<usize>,
}

impl GameRecord {
    pub fn length(&self) -> usize {
        self.moves.len()
    }
}

/// Play one game on `board`, Red moving first. The board is cleared before
/// play starts and holds the final position afterwards.
pub fn play_game(
    board: &mut Board,
    red: &mut dyn Strategy,
    yellow: &mut dyn Strategy,
) -> Result<GameRecord, ArenaError> {
    board.clear();
    let mut moves = Vec::with_capacity(board.max_number_of_tokens());
    let mut token = Token::Red;

    while !board.is_full() {
        let strategy: &mut dyn Strategy = if token == Token::Red { &mut *red } else { &mut *yellow };

        let col = strategy
            .select_column(board, token)
            .ok_or_else(|| ArenaError::NoMove {
                strategy: strategy.name().to_string(),
                token,
                free: board.max_number_of_tokens() - board.number_of_tokens(),
            })?;
        let won = board
            .add_token(token, col)
            .map_err(|source| ArenaError::IllegalMove {
                strategy: strategy.name().to_string(),
                token,
                col,
                source,
            })?;

        moves.push(col);
        log::debug!("move {:>3}: {} ({}) -> column {}", moves.len(), token, strategy.name(), col);

        if won {
            return Ok(GameRecord {
                winner: Some(token),
                moves,
            });
        }
        token = token.opponent();
    }

    Ok(GameRecord {
        winner: None,
        moves,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{MinimaxStrategy, RandomStrategy};

    /// Plays a fixed list of columns, then gives up.
    struct Scripted(Vec<usize>);

    impl Strategy for Scripted {
        fn select_column(&mut self, _board: &mut Board, _token: Token) -> Option<usize> {
            if self.0.is_empty() {
                None
            } else {
                Some(self.0.remove(0))
            }
        }

        fn name(&self) -> &str {
            "Scripted"
        }
    }

    #[test]
    fn test_red_wins_horizontally() {
        let mut board = Board::default();
        let mut red = Scripted(vec![0, 1, 2, 3]);
        let mut yellow = Scripted(vec![0, 1, 2]);
        let record = play_game(&mut board, &mut red, &mut yellow).unwrap();

        assert_eq!(record.winner, Some(Token::Red));
        assert_eq!(record.moves, vec![0, 0, 1, 1, 2, 2, 3]);
        assert_eq!(record.length(), 7);
        assert_eq!(board.number_of_tokens(), 7);
    }

    #[test]
    fn test_yellow_wins_vertically() {
        let mut board = Board::default();
        let mut red = Scripted(vec![0, 1, 0, 1]);
        let mut yellow = Scripted(vec![6, 6, 6, 6]);
        let record = play_game(&mut board, &mut red, &mut yellow).unwrap();
        assert_eq!(record.winner, Some(Token::Yellow));
        assert_eq!(record.length(), 8);
    }

    #[test]
    fn test_draw_on_full_board() {
        let mut board = Board::new(4, 4, 4).unwrap();
        // Columns end up RRYY / YYRR / RRYY / YYRR, no line of four
        let mut red = Scripted(vec![0, 0, 2, 2, 1, 1, 3, 3]);
        let mut yellow = Scripted(vec![1, 1, 3, 3, 0, 0, 2, 2]);
        let record = play_game(&mut board, &mut red, &mut yellow).unwrap();
        assert_eq!(record.winner, None);
        assert!(board.is_full());
    }

    #[test]
    fn test_illegal_move_is_reported() {
        let mut board = Board::default();
        let mut red = Scripted(vec![9]);
        let mut yellow = Scripted(vec![]);
        let err = play_game(&mut board, &mut red, &mut yellow).unwrap_err();
        assert_eq!(
            err,
            ArenaError::IllegalMove {
                strategy: "Scripted".to_string(),
                token: Token::Red,
                col: 9,
                source: crate::error::BoardError::ColumnIndex { col: 9, width: 7 },
            }
        );
    }

    #[test]
    fn test_missing_move_is_reported() {
        let mut board = Board::default();
        let mut red = Scripted(vec![3]);
        let mut yellow = Scripted(vec![]);
        let err = play_game(&mut board, &mut red, &mut yellow).unwrap_err();
        assert_eq!(
            err,
            ArenaError::NoMove {
                strategy: "Scripted".to_string(),
                token: Token::Yellow,
                free: 41,
            }
        );
    }

    #[test]
    fn test_board_is_cleared_between_games() {
        let mut board = Board::default();
        let mut red = RandomStrategy::with_seed(1);
        let mut yellow = MinimaxStrategy::new(2);
        let first = play_game(&mut board, &mut red, &mut yellow).unwrap();
        assert_eq!(board.number_of_tokens(), first.length());

        let second = play_game(&mut board, &mut red, &mut yellow).unwrap();
        assert_eq!(board.number_of_tokens(), second.length());
    }
}
