use std::collections::HashMap;

pub use trichroma_core::{BankSet, Color, Grid, Level, Puzzle};

/// On-disk shape of a bank file: one JSON object keyed by level id, each
/// value a list of puzzles with their target and card grids.
pub type BankFile = HashMap<Level, Vec<Puzzle>>;

/// A puzzle needs at least this many cards for an answer to be a choice.
pub const MIN_CARDS: usize = 3;
