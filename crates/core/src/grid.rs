use crate::Color;
use serde::{Deserialize, Serialize};

pub const GRID_SIDE: usize = 3;

/// A 3x3 matrix of cell colors. Rotation and overlay always produce new
/// grids, never mutate their inputs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Grid {
    cells: [[Color; GRID_SIDE]; GRID_SIDE],
}

impl Grid {
    pub fn from_rows(cells: [[Color; GRID_SIDE]; GRID_SIDE]) -> Self {
        Self { cells }
    }

    pub fn filled(color: Color) -> Self {
        Self {
            cells: [[color; GRID_SIDE]; GRID_SIDE],
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Color {
        self.cells[row][col]
    }

    pub fn rows(&self) -> &[[Color; GRID_SIDE]; GRID_SIDE] {
        &self.cells
    }

    /// One quarter turn clockwise: `out[r][c] = in[2-c][r]`.
    pub fn rot90(&self) -> Grid {
        let mut out = [[Color::White; GRID_SIDE]; GRID_SIDE];
        for (r, row) in out.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = self.cells[GRID_SIDE - 1 - c][r];
            }
        }
        Grid { cells: out }
    }

    /// `quarter_turns` is interpreted modulo 4.
    pub fn rotated(&self, quarter_turns: u8) -> Grid {
        let mut out = *self;
        for _ in 0..(quarter_turns % 4) {
            out = out.rot90();
        }
        out
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::filled(Color::White)
    }
}
