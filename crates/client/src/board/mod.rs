// Board state mirrored from the server, with boundary validation
use protocol::{Player, PlayerNames, COLUMNS, ROWS};

use crate::error::BoardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Player),
}

/// The client's copy of the 7x6 grid, indexed as `cells[column][row]`.
/// Row 0 is the bottom row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; ROWS]; COLUMNS],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; ROWS]; COLUMNS],
        }
    }

    /// Get the cell at a position, or `None` if it is off the board.
    pub fn get(&self, column: usize, row: usize) -> Option<Cell> {
        self.cells.get(column).and_then(|c| c.get(row)).copied()
    }

    /// Check that a position is on the board and still empty, without
    /// filling it. Returns the validated `(column, row)`.
    ///
    /// Coordinates come straight from the wire, so they are signed and
    /// checked here.
    pub fn vacant(&self, column: i64, row: i64) -> Result<(usize, usize), BoardError> {
        let column = checked_index(column, COLUMNS).ok_or(BoardError::ColumnOutOfRange {
            got: column,
            max: COLUMNS - 1,
        })?;
        let row = checked_index(row, ROWS).ok_or(BoardError::RowOutOfRange {
            got: row,
            max: ROWS - 1,
        })?;

        if self.cells[column][row] != Cell::Empty {
            return Err(BoardError::CellOccupied { column, row });
        }
        Ok((column, row))
    }

    /// Fill one empty cell. Returns the validated `(column, row)`.
    pub fn place(&mut self, player: Player, column: i64, row: i64) -> Result<(usize, usize), BoardError> {
        let (column, row) = self.vacant(column, row)?;
        self.cells[column][row] = Cell::Occupied(player);
        Ok((column, row))
    }

    /// Number of filled cells.
    pub fn filled(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell != Cell::Empty)
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a wire player identifier to a seat.
pub fn resolve_player(names: &PlayerNames, name: &str) -> Result<Player, BoardError> {
    names.resolve(name).ok_or_else(|| BoardError::InvalidPlayer {
        got: name.to_string(),
        expected1: names.player1.clone(),
        expected2: names.player2.clone(),
    })
}

fn checked_index(value: i64, len: usize) -> Option<usize> {
    usize::try_from(value).ok().filter(|&v| v < len)
}
