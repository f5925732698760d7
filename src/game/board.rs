use crate::error::{BoardError, Dimension};

use super::column::Column;
use super::token::Token;

/// Shortest sequence length that `has_sequence` will search for.
pub const MIN_SEQUENCE_LENGTH: usize = 2;

/// The four lines a sequence can run along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `|`
    Vertical,
    /// `-`
    Horizontal,
    /// `/`
    PositiveDiagonal,
    /// `\`
    NegativeDiagonal,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Vertical,
        Direction::Horizontal,
        Direction::PositiveDiagonal,
        Direction::NegativeDiagonal,
    ];

    /// `(row_step, col_step)` between adjacent cells on the line.
    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::Vertical => (1, 0),
            Direction::Horizontal => (0, 1),
            Direction::PositiveDiagonal => (1, 1),
            Direction::NegativeDiagonal => (1, -1),
        }
    }
}

/// A `width` x `height` grid of bottom-filling columns.
///
/// Row 0 is the bottom of each column. The board answers "is this cell part
/// of a run of N equal tokens", it does not track whose turn it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    tokens_to_connect: usize,
    columns: Vec<Column>,
    token_count: usize,
}

impl Board {
    /// Create an empty board. Both dimensions must be able to hold a winning
    /// run of `tokens_to_connect` tokens.
    pub fn new(width: usize, height: usize, tokens_to_connect: usize) -> Result<Self, BoardError> {
        if tokens_to_connect < MIN_SEQUENCE_LENGTH {
            return Err(BoardError::InvalidLength {
                length: tokens_to_connect,
                min: MIN_SEQUENCE_LENGTH,
            });
        }
        if width < tokens_to_connect {
            return Err(BoardError::InvalidDimensions {
                dimension: Dimension::Width,
                value: width,
                tokens_to_connect,
            });
        }
        if height < tokens_to_connect {
            return Err(BoardError::InvalidDimensions {
                dimension: Dimension::Height,
                value: height,
                tokens_to_connect,
            });
        }

        Ok(Board {
            width,
            height,
            tokens_to_connect,
            columns: (0..width).map(|_| Column::new(height)).collect(),
            token_count: 0,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn tokens_to_connect(&self) -> usize {
        self.tokens_to_connect
    }

    /// Number of tokens currently on the board.
    pub fn number_of_tokens(&self) -> usize {
        self.token_count
    }

    pub fn max_number_of_tokens(&self) -> usize {
        self.width * self.height
    }

    pub fn column(&self, col: usize) -> Result<&Column, BoardError> {
        self.columns.get(col).ok_or(BoardError::ColumnIndex {
            col,
            width: self.width,
        })
    }

    /// Token at `(row, col)`, which may be [`Token::Empty`].
    pub fn get_token(&self, row: usize, col: usize) -> Result<Token, BoardError> {
        self.check_position(row, col)?;
        self.columns[col].get(row)
    }

    /// Row the next token dropped into `col` would land on, or `None` if the
    /// column is full.
    pub fn landing_row(&self, col: usize) -> Result<Option<usize>, BoardError> {
        let column = self.column(col)?;
        Ok((!column.is_full()).then(|| column.len()))
    }

    /// Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        self.columns.get(col).map_or(true, Column::is_full)
    }

    pub fn is_full(&self) -> bool {
        self.token_count == self.max_number_of_tokens()
    }

    /// Columns that can still accept a token, left to right.
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.width)
            .filter(|&col| !self.columns[col].is_full())
            .collect()
    }

    /// Drop `token` into `col`. Returns whether the placed token completes a
    /// run of `tokens_to_connect`.
    pub fn add_token(&mut self, token: Token, col: usize) -> Result<bool, BoardError> {
        if token.is_empty() {
            return Err(BoardError::EmptyToken);
        }
        let column = self.columns.get_mut(col).ok_or(BoardError::ColumnIndex {
            col,
            width: self.width,
        })?;

        let row = column.push(token).map_err(|e| e.in_column(col))?;
        self.token_count += 1;

        self.is_winning_position(row, col)
    }

    /// Remove the top token of `col`. Whether this undoes a win is up to the
    /// caller.
    pub fn remove_token(&mut self, col: usize) -> Result<(), BoardError> {
        let column = self.columns.get_mut(col).ok_or(BoardError::ColumnIndex {
            col,
            width: self.width,
        })?;

        column.pop().map_err(|e| e.in_column(col))?;
        self.token_count -= 1;
        Ok(())
    }

    pub fn clear(&mut self) {
        for column in &mut self.columns {
            column.clear();
        }
        self.token_count = 0;
    }

    /// Whether `(row, col)` is part of a run of `tokens_to_connect` equal
    /// tokens in any direction.
    pub fn is_winning_position(&self, row: usize, col: usize) -> Result<bool, BoardError> {
        self.check_position(row, col)?;
        Ok(self.any_direction(row, col, self.tokens_to_connect))
    }

    /// Whether `(row, col)` is part of a run of `length` equal tokens in any
    /// direction.
    pub fn has_sequence(&self, row: usize, col: usize, length: usize) -> Result<bool, BoardError> {
        self.check_position(row, col)?;
        if length < MIN_SEQUENCE_LENGTH {
            return Err(BoardError::InvalidLength {
                length,
                min: MIN_SEQUENCE_LENGTH,
            });
        }
        Ok(self.any_direction(row, col, length))
    }

    /// Length of the longest run through `(row, col)`: 0 for an empty cell,
    /// 1 for a token with no equal neighbour on any line.
    pub fn longest_sequence_at(&self, row: usize, col: usize) -> Result<usize, BoardError> {
        if self.get_token(row, col)?.is_empty() {
            return Ok(0);
        }

        // A run of n through the anchor implies one of n - 1, so stop at the
        // first length that fails.
        let limit = self.width.max(self.height);
        let mut longest = 1;
        for length in MIN_SEQUENCE_LENGTH..=limit {
            if !self.any_direction(row, col, length) {
                break;
            }
            longest = length;
        }
        Ok(longest)
    }

    pub fn check_vertical_sequence(&self, row: usize, col: usize, length: usize) -> bool {
        self.check_direction(row, col, Direction::Vertical, length)
    }

    pub fn check_horizontal_sequence(&self, row: usize, col: usize, length: usize) -> bool {
        self.check_direction(row, col, Direction::Horizontal, length)
    }

    pub fn check_positive_diagonal_sequence(&self, row: usize, col: usize, length: usize) -> bool {
        self.check_direction(row, col, Direction::PositiveDiagonal, length)
    }

    pub fn check_negative_diagonal_sequence(&self, row: usize, col: usize, length: usize) -> bool {
        self.check_direction(row, col, Direction::NegativeDiagonal, length)
    }

    pub fn check_direction(&self, row: usize, col: usize, direction: Direction, length: usize) -> bool {
        let (row_step, col_step) = direction.step();
        self.check_sequence(row, col, row_step, col_step, length)
    }

    /// Whether some run of `length` cells along `(row_step, col_step)` that
    /// contains the anchor holds nothing but the anchor's token.
    ///
    /// The anchor may sit at any position within the run, so every one of the
    /// `length` alignments is tried, starting with the run that ends at the
    /// anchor. A cell that is off the board or holds a different token only
    /// rules out the alignment being walked. An empty or off-board anchor is
    /// never part of a sequence.
    pub fn check_sequence(
        &self,
        anchor_row: usize,
        anchor_col: usize,
        row_step: isize,
        col_step: isize,
        length: usize,
    ) -> bool {
        let (anchor_row, anchor_col) = (anchor_row as isize, anchor_col as isize);
        let anchor = match self.token_at(anchor_row, anchor_col) {
            Some(token) if !token.is_empty() => token,
            _ => return false,
        };
        // No run longer than the board's longest side can fit on it
        if length == 0 || length > self.width.max(self.height) {
            return false;
        }

        let steps = length as isize - 1;
        (0..=steps).rev().any(|steps_back| {
            let start_row = anchor_row - row_step * steps_back;
            let start_col = anchor_col - col_step * steps_back;

            (0..=steps).all(|taken| {
                self.token_at(start_row + taken * row_step, start_col + taken * col_step)
                    == Some(anchor)
            })
        })
    }

    fn any_direction(&self, row: usize, col: usize, length: usize) -> bool {
        Direction::ALL
            .iter()
            .any(|&direction| self.check_direction(row, col, direction, length))
    }

    /// Token at a possibly off-board coordinate.
    #[inline]
    fn token_at(&self, row: isize, col: isize) -> Option<Token> {
        if row < 0 || col < 0 {
            return None;
        }
        self.columns.get(col as usize)?.get(row as usize).ok()
    }

    fn check_position(&self, row: usize, col: usize) -> Result<(), BoardError> {
        if row >= self.height || col >= self.width {
            return Err(BoardError::Position {
                row,
                col,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

impl Default for Board {
    /// The classic 7x6 connect-four board.
    fn default() -> Self {
        Board::new(7, 6, 4).expect("7x6 connect 4 is a valid board")
    }
}
