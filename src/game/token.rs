use std::fmt;

/// A game piece, or the `Empty` sentinel for a slot holding no piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Token {
    #[default]
    Empty,
    Red,
    Yellow,
}

impl Token {
    /// Tokens that can actually be placed on a board.
    pub const PLAYABLE: [Token; 2] = [Token::Red, Token::Yellow];

    pub fn is_empty(self) -> bool {
        self == Token::Empty
    }

    /// The opposing token. `Empty` has no opponent and maps to itself.
    pub fn opponent(self) -> Token {
        match self {
            Token::Red => Token::Yellow,
            Token::Yellow => Token::Red,
            Token::Empty => Token::Empty,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Token::Empty => "Empty",
            Token::Red => "Red",
            Token::Yellow => "Yellow",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
