use crate::{Grid, RngState};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Difficulty tier. A timed run visits every tier once, in [`Level::ALL`]
/// order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Easy,
    Normal,
    Hard,
    Expert,
    Elite,
}

impl Level {
    pub const ALL: [Level; 5] = [
        Level::Easy,
        Level::Normal,
        Level::Hard,
        Level::Expert,
        Level::Elite,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Level::Easy => "easy",
            Level::Normal => "normal",
            Level::Hard => "hard",
            Level::Expert => "expert",
            Level::Elite => "elite",
        }
    }
}

pub const ROUND_COUNT: usize = Level::ALL.len();

/// A target grid plus the candidate cards it is assembled from. Cards are
/// addressed by their index in `cards`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Puzzle {
    pub target: Grid,
    pub cards: Vec<Grid>,
}

#[derive(Debug, Clone, Default)]
pub struct BankSet {
    banks: HashMap<Level, Vec<Puzzle>>,
}

impl BankSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, level: Level, puzzles: Vec<Puzzle>) {
        self.banks.insert(level, puzzles);
    }

    pub fn puzzles(&self, level: Level) -> &[Puzzle] {
        self.banks
            .get(&level)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn pick(&self, level: Level, rng: &mut RngState) -> Option<Puzzle> {
        let pool = self.puzzles(level);
        if pool.is_empty() {
            return None;
        }
        let index = (rng.next_u64() % pool.len() as u64) as usize;
        pool.get(index).cloned()
    }
}

pub const SELECTION_SIZE: usize = 3;

/// The player's picked card indices, in pick order, at most three and all
/// distinct.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    picks: Vec<usize>,
}

impl Selection {
    /// Returns false when the pick was ignored: a fourth distinct card is
    /// dropped rather than evicting an earlier pick.
    pub fn toggle(&mut self, index: usize) -> bool {
        if let Some(position) = self.picks.iter().position(|&pick| pick == index) {
            let _ = self.picks.remove(position);
            return true;
        }
        if self.picks.len() >= SELECTION_SIZE {
            return false;
        }
        self.picks.push(index);
        true
    }

    pub fn clear(&mut self) {
        self.picks.clear();
    }

    pub fn picks(&self) -> &[usize] {
        &self.picks
    }

    pub fn len(&self) -> usize {
        self.picks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.picks.len() == SELECTION_SIZE
    }

    /// 1-based slot of a picked card, for badge display.
    pub fn badge(&self, index: usize) -> Option<usize> {
        self.picks
            .iter()
            .position(|&pick| pick == index)
            .map(|position| position + 1)
    }

    pub fn as_triple(&self) -> Option<[usize; 3]> {
        match self.picks.as_slice() {
            &[a, b, c] => Some([a, b, c]),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    #[test]
    fn level_order_is_the_run_order() {
        assert_eq!(Level::ALL[0], Level::Easy);
        assert_eq!(Level::ALL[ROUND_COUNT - 1], Level::Elite);
        assert_eq!(Level::Easy.id(), "easy");
    }

    #[test]
    fn level_id_matches_serde_token() {
        for level in Level::ALL {
            let json = serde_json::to_string(&level).expect("serialize");
            assert_eq!(json, format!("\"{}\"", level.id()));
        }
    }

    #[test]
    fn toggle_adds_and_removes() {
        let mut selection = Selection::default();
        assert!(selection.toggle(4));
        assert!(selection.toggle(1));
        assert_eq!(selection.picks(), &[4, 1]);
        assert!(selection.toggle(4));
        assert_eq!(selection.picks(), &[1]);
    }

    #[test]
    fn fourth_pick_is_ignored() {
        let mut selection = Selection::default();
        for index in [0, 1, 2] {
            assert!(selection.toggle(index));
        }
        assert!(!selection.toggle(3));
        assert_eq!(selection.picks(), &[0, 1, 2]);
        // An already-picked card can still be toggled off at capacity.
        assert!(selection.toggle(1));
        assert_eq!(selection.picks(), &[0, 2]);
    }

    #[test]
    fn badges_follow_pick_order() {
        let mut selection = Selection::default();
        let _ = selection.toggle(7);
        let _ = selection.toggle(2);
        assert_eq!(selection.badge(7), Some(1));
        assert_eq!(selection.badge(2), Some(2));
        assert_eq!(selection.badge(5), None);
    }

    #[test]
    fn triple_requires_exactly_three_picks() {
        let mut selection = Selection::default();
        assert_eq!(selection.as_triple(), None);
        let _ = selection.toggle(2);
        let _ = selection.toggle(0);
        assert_eq!(selection.as_triple(), None);
        let _ = selection.toggle(5);
        assert_eq!(selection.as_triple(), Some([2, 0, 5]));
    }

    #[test]
    fn pick_draws_only_from_the_requested_level() {
        let mut banks = BankSet::new();
        let puzzle = Puzzle {
            target: Grid::filled(Color::White),
            cards: vec![Grid::filled(Color::Red); 3],
        };
        banks.insert(Level::Easy, vec![puzzle.clone()]);
        let mut rng = RngState::from_seed(7);
        assert_eq!(banks.pick(Level::Easy, &mut rng), Some(puzzle));
        assert_eq!(banks.pick(Level::Elite, &mut rng), None);
    }
}
