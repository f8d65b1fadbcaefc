use crate::{overlay, Grid};

/// The four rotations of one card, precomputed so the search never
/// re-rotates inside its inner loop.
#[derive(Debug, Clone, Copy)]
pub struct CardRotations {
    turns: [Grid; 4],
}

impl CardRotations {
    pub fn new(card: Grid) -> Self {
        let quarter = card.rot90();
        let half = quarter.rot90();
        let three_quarter = half.rot90();
        Self {
            turns: [card, quarter, half, three_quarter],
        }
    }

    pub fn turned(&self, quarter_turns: u8) -> Grid {
        self.turns[(quarter_turns % 4) as usize]
    }
}

/// Whether the three picked cards can reproduce the target under some
/// assignment of quarter turns. Searches all 64 rotation combinations,
/// stopping at the first valid overlay that equals the target.
pub fn selection_matches(cards: &[Grid], target: &Grid, picks: [usize; 3]) -> bool {
    let turns = picks.map(|index| CardRotations::new(cards[index]));
    for r1 in 0..4u8 {
        for r2 in 0..4u8 {
            for r3 in 0..4u8 {
                let out = overlay([
                    turns[0].turned(r1),
                    turns[1].turned(r2),
                    turns[2].turned(r3),
                ]);
                if out.ok && out.grid == *target {
                    return true;
                }
            }
        }
    }
    false
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solution {
    pub cards: [usize; 3],
    pub rotations: [u8; 3],
}

/// Every solution over all 3-card combinations of the full card list.
/// Used to audit pre-authored banks; the answer check only ever needs
/// [`selection_matches`].
pub fn solve_all(cards: &[Grid], target: &Grid) -> Vec<Solution> {
    let turns: Vec<CardRotations> = cards.iter().map(|card| CardRotations::new(*card)).collect();
    let mut solutions = Vec::new();
    for i in 0..cards.len() {
        for j in i + 1..cards.len() {
            for k in j + 1..cards.len() {
                for r1 in 0..4u8 {
                    for r2 in 0..4u8 {
                        for r3 in 0..4u8 {
                            let out = overlay([
                                turns[i].turned(r1),
                                turns[j].turned(r2),
                                turns[k].turned(r3),
                            ]);
                            if out.ok && out.grid == *target {
                                solutions.push(Solution {
                                    cards: [i, j, k],
                                    rotations: [r1, r2, r3],
                                });
                            }
                        }
                    }
                }
            }
        }
    }
    solutions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color::{self, *};
    use crate::GRID_SIDE;

    fn corner(color: Color, row: usize, col: usize) -> Grid {
        let mut cells = [[White; GRID_SIDE]; GRID_SIDE];
        cells[row][col] = color;
        Grid::from_rows(cells)
    }

    /// Solvable only by turning the second card one quarter: its blue
    /// corner must travel from (0,0) to (0,2).
    fn rotation_dependent_fixture() -> (Vec<Grid>, Grid) {
        let cards = vec![
            corner(Red, 0, 0),
            corner(Blue, 0, 0),
            Grid::default(),
            corner(Yellow, 1, 1),
        ];
        let mut target = [[White; GRID_SIDE]; GRID_SIDE];
        target[0][0] = Red;
        target[0][2] = Blue;
        (cards, Grid::from_rows(target))
    }

    /// The center cell is fixed under every rotation, so B+B+Y conflicts
    /// there in all 64 combinations.
    fn unsolvable_fixture() -> (Vec<Grid>, Grid) {
        let cards = vec![corner(Blue, 1, 1), corner(Blue, 1, 1), corner(Yellow, 1, 1)];
        (cards, corner(Green, 1, 1))
    }

    #[test]
    fn card_rotations_match_direct_rotation() {
        let card = corner(Red, 0, 1);
        let turns = CardRotations::new(card);
        for k in 0..4u8 {
            assert_eq!(turns.turned(k), card.rotated(k));
        }
        assert_eq!(turns.turned(5), card.rotated(1));
    }

    #[test]
    fn finds_a_rotation_dependent_match() {
        let (cards, target) = rotation_dependent_fixture();
        assert!(selection_matches(&cards, &target, [0, 1, 2]));
    }

    #[test]
    fn reports_no_match_when_no_rotation_fits() {
        let (cards, target) = unsolvable_fixture();
        assert!(!selection_matches(&cards, &target, [0, 1, 2]));
    }

    #[test]
    fn wrong_card_choice_fails_even_on_a_solvable_puzzle() {
        let (cards, target) = rotation_dependent_fixture();
        // Swapping in the yellow-center card colors the center, which the
        // target leaves white.
        assert!(!selection_matches(&cards, &target, [0, 1, 3]));
    }

    #[test]
    fn aligned_primaries_mix_into_the_or_combination() {
        let cards = vec![corner(Red, 0, 0), corner(Blue, 0, 0), corner(Yellow, 2, 2)];
        let mut expected = [[White; GRID_SIDE]; GRID_SIDE];
        expected[0][0] = Purple;
        expected[2][2] = Yellow;
        assert!(selection_matches(
            &cards,
            &Grid::from_rows(expected),
            [0, 1, 2]
        ));
    }

    #[test]
    fn solve_all_finds_the_planted_triple() {
        let (cards, target) = rotation_dependent_fixture();
        let solutions = solve_all(&cards, &target);
        assert!(!solutions.is_empty());
        assert!(solutions
            .iter()
            .all(|solution| solution.cards == [0, 1, 2]));
        assert!(solutions
            .iter()
            .any(|solution| solution.rotations == [0, 1, 0]));
    }

    #[test]
    fn solve_all_is_empty_for_an_unsolvable_target() {
        let (cards, target) = unsolvable_fixture();
        assert!(solve_all(&cards, &target).is_empty());
    }
}
