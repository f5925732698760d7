use crate::error::BoardError;

use super::token::Token;

/// A bottom-filling stack of tokens with a fixed capacity.
///
/// Rows are indexed from the bottom: slots `0..len()` hold tokens in the
/// order they were pushed, slots `len()..capacity()` are [`Token::Empty`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    slots: Vec<Token>,
    count: usize,
}

impl Column {
    /// Create an empty column that can hold `height` tokens.
    pub fn new(height: usize) -> Self {
        Column {
            slots: vec![Token::Empty; height],
            count: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of tokens currently in the column.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_full(&self) -> bool {
        self.count == self.slots.len()
    }

    /// Push a token on top of the column, returning the row it landed on.
    pub fn push(&mut self, token: Token) -> Result<usize, BoardError> {
        if self.is_full() {
            return Err(BoardError::ColumnFull { col: None });
        }

        let row = self.count;
        self.slots[row] = token;
        self.count += 1;
        Ok(row)
    }

    /// Remove the top token.
    pub fn pop(&mut self) -> Result<(), BoardError> {
        if self.is_empty() {
            return Err(BoardError::ColumnEmpty { col: None });
        }

        self.count -= 1;
        self.slots[self.count] = Token::Empty;
        Ok(())
    }

    /// Token at `row`, which may be [`Token::Empty`].
    pub fn get(&self, row: usize) -> Result<Token, BoardError> {
        self.slots
            .get(row)
            .copied()
            .ok_or(BoardError::IndexOutOfRange {
                row,
                height: self.slots.len(),
            })
    }

    /// The most recently pushed token, if any.
    pub fn top(&self) -> Option<Token> {
        self.count.checked_sub(1).map(|row| self.slots[row])
    }

    /// The filled slots, bottom first.
    pub fn tokens(&self) -> &[Token] {
        &self.slots[..self.count]
    }

    pub fn clear(&mut self) {
        self.slots.fill(Token::Empty);
        self.count = 0;
    }
}
