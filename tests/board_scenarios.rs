use connect_n::ai::{Strategy, StrategyConfig};
use connect_n::arena::play_match;
use connect_n::error::BoardError;
use connect_n::game::{Board, Token};

const A: Token = Token::Red;
const B: Token = Token::Yellow;

#[test]
fn horizontal_win_on_fourth_token() {
    let mut board = Board::new(7, 6, 4).unwrap();
    for col in 0..3 {
        assert!(!board.add_token(A, col).unwrap());
        assert_eq!(board.column(col).unwrap().len(), 1);
    }
    assert!(board.add_token(A, 3).unwrap());
}

#[test]
fn vertical_win_on_fourth_push() {
    let mut board = Board::new(7, 6, 4).unwrap();
    let results: Vec<bool> = (0..4).map(|_| board.add_token(A, 0).unwrap()).collect();
    assert_eq!(results, vec![false, false, false, true]);
}

#[test]
fn diagonal_win_and_interruption() {
    let build = |middle: Token| {
        let mut board = Board::new(7, 6, 4).unwrap();
        board.add_token(A, 0).unwrap();
        board.add_token(B, 1).unwrap();
        board.add_token(A, 1).unwrap();
        board.add_token(B, 2).unwrap();
        board.add_token(B, 2).unwrap();
        board.add_token(middle, 2).unwrap();
        for _ in 0..3 {
            board.add_token(B, 3).unwrap();
        }
        board
    };

    let mut winning = build(A);
    assert!(winning.add_token(A, 3).unwrap());

    let mut broken = build(B);
    assert!(!broken.add_token(A, 3).unwrap());
}

#[test]
fn undo_frees_the_landing_row() {
    let mut board = Board::new(5, 5, 3).unwrap();
    board.add_token(A, 4).unwrap();
    board.add_token(B, 4).unwrap();
    board.remove_token(4).unwrap();
    assert_eq!(board.number_of_tokens(), 1);
    assert_eq!(board.landing_row(4), Ok(Some(1)));
    board.add_token(A, 4).unwrap();
    assert_eq!(board.get_token(1, 4), Ok(A));
}

#[test]
fn failed_push_leaves_count_unchanged() {
    let mut board = Board::new(4, 4, 4).unwrap();
    for _ in 0..4 {
        board.add_token(B, 2).unwrap();
    }
    for _ in 0..3 {
        assert_eq!(board.add_token(A, 2), Err(BoardError::ColumnFull { col: Some(2) }));
    }
    assert_eq!(board.number_of_tokens(), 4);
}

#[test]
fn connect_three_on_a_wide_board() {
    let mut board = Board::new(9, 3, 3).unwrap();
    board.add_token(A, 8).unwrap();
    board.add_token(A, 7).unwrap();
    assert!(board.add_token(A, 6).unwrap());
    assert_eq!(board.has_sequence(0, 7, 2), Ok(true));
    assert_eq!(board.has_sequence(0, 7, 4), Ok(false));
}

#[test]
fn every_strategy_finishes_a_match() {
    let configs = [
        StrategyConfig::Random,
        StrategyConfig::Greedy { radius: 1 },
        StrategyConfig::Sequence,
        StrategyConfig::Minimax { depth: 2 },
    ];

    for red_config in &configs {
        for yellow_config in &configs {
            let mut board = Board::new(5, 5, 4).unwrap();
            let mut red: Box<dyn Strategy> = red_config.build(Some(3));
            let mut yellow: Box<dyn Strategy> = yellow_config.build(Some(4));
            let tally = play_match(&mut board, red.as_mut(), yellow.as_mut(), 2).unwrap();
            assert_eq!(tally.games(), 2, "{red_config:?} vs {yellow_config:?}");
        }
    }
}
