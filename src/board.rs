use std::fmt;
use std::ops::Not;

use lazy_static::lazy_static;
use strum_macros::EnumIter;

#[derive(EnumIter, Eq, PartialEq, Hash)]
#[derive(Debug, Copy, Clone)]
pub enum Mark {
    X,
    O,
}

impl Not for Mark {
    type Output = Mark;

    fn not(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub enum CellState {
    Empty,
    X,
    O,
}

impl From<Mark> for CellState {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::X => CellState::X,
            Mark::O => CellState::O,
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let glyph = match self {
            CellState::Empty => "-",
            CellState::X => "X",
            CellState::O => "O",
        };
        write!(f, "{}", glyph)
    }
}

#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub enum Outcome {
    InProgress,
    Win(Mark),
    Draw,
}

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Board {
    cells: [CellState; 9],
}

lazy_static! {
    static ref LINES_THROUGH_CELL: [Vec<[usize; 3]>; 9] = [
        vec![[0, 1, 2], [0, 3, 6],[0, 4, 8]],
        vec![[0, 1, 2], [1, 4, 7]],
        vec![[0, 1, 2], [2, 5, 8],[2, 4, 6]],
        vec![[3, 4, 5], [0, 3, 6]],
        vec![[3, 4, 5], [1, 4, 7],[0, 4, 8],[2, 4, 6]],
        vec![[3, 4, 5], [2, 5, 8]],
        vec![[6, 7, 8], [0, 3, 6],[2, 4, 6]],
        vec![[6, 7, 8], [1, 4, 7]],
        vec![[6, 7, 8], [2, 5, 8],[0, 4, 8]],
    ];
}

impl Board {
    pub fn empty() -> Self {
        Self::new([CellState::Empty; 9])
    }

    pub fn new(cells: [CellState; 9]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[CellState; 9] {
        &self.cells
    }

    pub fn apply_move(&mut self, cell: usize, mark: Mark) -> bool {
        if cell >= 9 || self.cells[cell] != CellState::Empty {
            return false;
        }
        self.cells[cell] = CellState::from(mark);
        true
    }

    pub fn undo_move(&mut self, cell: usize) {
        self.cells[cell] = CellState::Empty;
    }

    // only lines running through the last move can have been completed by it
    pub fn check_winner(&self, last_cell: usize, mark: Mark) -> bool {
        let played = CellState::from(mark);
        LINES_THROUGH_CELL[last_cell].iter().any(|indices| {
            self.cells[indices[0]] == played && self.cells[indices[1]] == played && self.cells[indices[2]] == played
        })
    }

    pub fn winner(&self) -> Option<Mark> {
        let indices = Self::WIN_INDICES.iter().find(|indices| {
            self.cells[indices[0]] == self.cells[indices[1]] && self.cells[indices[1]] == self.cells[indices[2]] && self.cells[indices[0]] != CellState::Empty
        })?;
        match self.cells[indices[0]] {
            CellState::X => Some(Mark::X),
            CellState::O => Some(Mark::O),
            CellState::Empty => None,
        }
    }

    pub fn available_moves(&self) -> Vec<usize> {
        self.cells.iter().enumerate().filter_map(|(index, &state)| {
            if state != CellState::Empty {
                return None;
            }
            Some(index)
        }).collect()
    }

    pub fn has_empty(&self) -> bool {
        self.cells.iter().any(|state| state == &CellState::Empty)
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&state| state == &CellState::Empty).count()
    }

    pub fn outcome_after(&self, last_cell: usize, mark: Mark) -> Outcome {
        if self.check_winner(last_cell, mark) {
            Outcome::Win(mark)
        } else if self.has_empty() {
            Outcome::InProgress
        } else {
            Outcome::Draw
        }
    }

    const WIN_INDICES: [[usize; 3]; 8] = [
        [0, 1, 2],
        [3, 4, 5],
        [6, 7, 8],
        [0, 3, 6],
        [1, 4, 7],
        [2, 5, 8],
        [0, 4, 8],
        [2, 4, 6],
    ];
}
