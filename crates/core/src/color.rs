use serde::{Deserialize, Serialize};

/// The serde form is the single-character token used by the data source.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Color {
    #[serde(rename = "N")]
    White,
    #[serde(rename = "R")]
    Red,
    #[serde(rename = "B")]
    Blue,
    #[serde(rename = "Y")]
    Yellow,
    #[serde(rename = "P")]
    Purple,
    #[serde(rename = "O")]
    Orange,
    #[serde(rename = "G")]
    Green,
    #[serde(rename = "K")]
    Black,
}

impl Color {
    pub const ALL: [Color; 8] = [
        Color::White,
        Color::Red,
        Color::Blue,
        Color::Yellow,
        Color::Purple,
        Color::Orange,
        Color::Green,
        Color::Black,
    ];

    /// 3-bit primary mask: bit 0 = red, bit 1 = blue, bit 2 = yellow.
    pub fn mask(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Red => 1,
            Color::Blue => 2,
            Color::Purple => 3,
            Color::Yellow => 4,
            Color::Orange => 5,
            Color::Green => 6,
            Color::Black => 7,
        }
    }

    pub fn from_mask(mask: u8) -> Option<Color> {
        match mask {
            0 => Some(Color::White),
            1 => Some(Color::Red),
            2 => Some(Color::Blue),
            3 => Some(Color::Purple),
            4 => Some(Color::Yellow),
            5 => Some(Color::Orange),
            6 => Some(Color::Green),
            7 => Some(Color::Black),
            _ => None,
        }
    }

    pub fn token(self) -> char {
        match self {
            Color::White => 'N',
            Color::Red => 'R',
            Color::Blue => 'B',
            Color::Yellow => 'Y',
            Color::Purple => 'P',
            Color::Orange => 'O',
            Color::Green => 'G',
            Color::Black => 'K',
        }
    }
}

/// Combine the colors stacked at one cell. White layers contribute
/// nothing; a single distinct color stacks at any multiplicity; distinct
/// colors mix (OR of masks) only when each appears exactly once. Any
/// other ratio is invalid and yields `None`.
pub fn mix(layers: [Color; 3]) -> Option<Color> {
    let mut counts = [0u8; 8];
    let mut mask = 0u8;
    for color in layers {
        if color != Color::White {
            counts[color.mask() as usize] += 1;
            mask |= color.mask();
        }
    }
    let distinct = counts.iter().filter(|&&count| count > 0).count();
    match distinct {
        0 => Some(Color::White),
        1 => Color::from_mask(mask),
        _ if counts.iter().all(|&count| count <= 1) => Color::from_mask(mask),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Color::*;

    #[test]
    fn mask_roundtrips_every_color() {
        for color in Color::ALL {
            assert_eq!(Color::from_mask(color.mask()), Some(color));
        }
        assert_eq!(Color::from_mask(8), None);
    }

    #[test]
    fn masks_are_distinct() {
        for a in Color::ALL {
            for b in Color::ALL {
                if a != b {
                    assert_ne!(a.mask(), b.mask());
                }
            }
        }
    }

    #[test]
    fn all_white_stays_white() {
        assert_eq!(mix([White, White, White]), Some(White));
    }

    #[test]
    fn same_color_stacks_at_any_multiplicity() {
        assert_eq!(mix([Blue, Blue, White]), Some(Blue));
        assert_eq!(mix([Blue, Blue, Blue]), Some(Blue));
        assert_eq!(mix([White, White, Red]), Some(Red));
    }

    #[test]
    fn distinct_colors_mix_by_mask_or() {
        assert_eq!(mix([Red, Blue, White]), Some(Purple));
        assert_eq!(mix([Red, Yellow, White]), Some(Orange));
        assert_eq!(mix([Blue, Yellow, White]), Some(Green));
        assert_eq!(mix([Red, Blue, Yellow]), Some(Black));
    }

    #[test]
    fn repeated_color_next_to_another_is_invalid() {
        assert_eq!(mix([Blue, Blue, Yellow]), None);
        assert_eq!(mix([Red, Yellow, Yellow]), None);
    }

    #[test]
    fn mixing_is_order_independent() {
        let layers = [Red, Blue, Yellow];
        let expected = mix(layers);
        for permutation in [
            [Red, Blue, Yellow],
            [Red, Yellow, Blue],
            [Blue, Red, Yellow],
            [Blue, Yellow, Red],
            [Yellow, Red, Blue],
            [Yellow, Blue, Red],
        ] {
            assert_eq!(mix(permutation), expected);
        }
        assert_eq!(mix([Blue, Yellow, Blue]), mix([Blue, Blue, Yellow]));
    }

    #[test]
    fn mixed_colors_participate_like_any_other() {
        // A mixed color may stack with itself or combine with a disjoint one.
        assert_eq!(mix([Purple, Purple, White]), Some(Purple));
        assert_eq!(mix([Purple, Yellow, White]), Some(Black));
    }
}
