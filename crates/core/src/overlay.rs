use crate::{mix, Color, Grid, GRID_SIDE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overlay {
    pub grid: Grid,
    pub ok: bool,
}

/// Combine three already-rotated layers cell by cell. Every cell is
/// evaluated even after a conflict; invalid cells stay white in the
/// result and only clear the validity flag.
pub fn overlay(layers: [Grid; 3]) -> Overlay {
    let mut cells = [[Color::White; GRID_SIDE]; GRID_SIDE];
    let mut ok = true;
    for r in 0..GRID_SIDE {
        for c in 0..GRID_SIDE {
            match mix([layers[0].get(r, c), layers[1].get(r, c), layers[2].get(r, c)]) {
                Some(color) => cells[r][c] = color,
                None => ok = false,
            }
        }
    }
    Overlay {
        grid: Grid::from_rows(cells),
        ok,
    }
}
