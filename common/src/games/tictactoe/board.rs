use std::fmt;

use super::types::{Cell, GameStatus, Mark};
use super::win_detector::check_win;

pub const SIDE: usize = 3;
pub const BOARD_SIZE: usize = SIDE * SIDE;

/// 3x3 grid, cells addressed 0..9 in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Cell; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// Reads a layout such as `"xo. .x. ..o"`. Whitespace is ignored;
    /// `x`/`o` are marks, and `.`, `-`, `_` or a digit mean empty.
    pub fn parse(layout: &str) -> Result<Self, String> {
        let symbols: Vec<char> = layout.chars().filter(|c| !c.is_whitespace()).collect();
        if symbols.len() != BOARD_SIZE {
            return Err(format!(
                "Board layout must have {} cells, got {}",
                BOARD_SIZE,
                symbols.len()
            ));
        }

        let mut cells = [Cell::Empty; BOARD_SIZE];
        for (cell, symbol) in cells.iter_mut().zip(symbols) {
            *cell = match symbol {
                'x' | 'X' => Cell::X,
                'o' | 'O' => Cell::O,
                '.' | '-' | '_' | '0'..='8' => Cell::Empty,
                other => return Err(format!("Unexpected board symbol '{}'", other)),
            };
        }
        Ok(Self::from_cells(cells))
    }

    pub fn cells(&self) -> &[Cell; BOARD_SIZE] {
        &self.cells
    }

    /// Panics if `index` is outside the board.
    pub fn cell(&self, index: usize) -> Cell {
        self.cells[index]
    }

    pub fn is_empty_at(&self, index: usize) -> bool {
        self.cells.get(index).is_some_and(|cell| cell.is_empty())
    }

    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(idx, _)| idx)
            .collect()
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Wins are checked before fullness, so a full board that completes
    /// a triple is a win and never a draw.
    pub fn status(&self) -> GameStatus {
        if let Some(winner) = check_win(self) {
            return GameStatus::won_by(winner);
        }
        if self.is_full() {
            return GameStatus::Draw;
        }
        GameStatus::InProgress
    }

    pub fn is_terminal(&self) -> (bool, GameStatus) {
        let status = self.status();
        (status.is_terminal(), status)
    }

    /// Returns a copy of the board with `mark` placed at `index`.
    pub fn apply(&self, index: usize, mark: Mark) -> Result<Board, String> {
        if index >= BOARD_SIZE {
            return Err(format!(
                "Cell {} is out of range (0-{})",
                index,
                BOARD_SIZE - 1
            ));
        }
        if !self.cells[index].is_empty() {
            return Err(format!("Cell {} is already marked", index));
        }
        Ok(self.place(index, mark))
    }

    /// Search-internal placement. Only ever called on cells taken from
    /// `empty_cells`, so an occupied target is an engine bug.
    pub(crate) fn place(&self, index: usize, mark: Mark) -> Board {
        assert!(
            self.cells[index].is_empty(),
            "attempted to place {} on occupied cell {}",
            mark,
            index
        );
        let mut next = *self;
        next.cells[index] = mark.into();
        next
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_idx, row) in self.cells.chunks(SIDE).enumerate() {
            if row_idx > 0 {
                writeln!(f, "---+---+---")?;
            }
            let base = row_idx * SIDE;
            let symbols: Vec<String> = row
                .iter()
                .enumerate()
                .map(|(col, cell)| match cell.mark() {
                    Some(mark) => mark.to_string(),
                    None => (base + col).to_string(),
                })
                .collect();
            writeln!(f, " {} | {} | {} ", symbols[0], symbols[1], symbols[2])?;
        }
        Ok(())
    }
}
