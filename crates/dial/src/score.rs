use crate::colors::{self, SCORE_COLORS};
use crate::geometry::{SEGMENT_ANGLE, SEGMENT_COUNT, normalize_angle};
use derive_more::{Deref, Display, Into};
use palette::Srgb;

/// Index of the wheel segment currently under the knob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Deref, Into)]
pub struct WheelPosition(u8);

crate::impl_bounded_newtype!(WheelPosition, 0, 9);

/// Value shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Deref, Into)]
pub struct Score(u8);

crate::impl_bounded_newtype!(Score, 1, 10);

const POSITION_TO_SCORE: [Score; SEGMENT_COUNT] = [
    Score(10),
    Score(9),
    Score(8),
    Score(7),
    Score(6),
    Score(5),
    Score(4),
    Score(3),
    Score(2),
    Score(1),
];

impl WheelPosition {
    /// Segment containing `angle` once normalized. Boundaries belong to the
    /// segment above them.
    pub fn from_angle(angle: f64) -> Self {
        let segment = (normalize_angle(angle) / SEGMENT_ANGLE).floor() as usize;
        Self((segment % SEGMENT_COUNT) as u8)
    }

    pub fn score(self) -> Score {
        POSITION_TO_SCORE[self.0 as usize]
    }

    pub fn all() -> impl Iterator<Item = Self> {
        (Self::MIN..=Self::MAX).map(Self)
    }
}

impl Score {
    pub fn color(self) -> Srgb<u8> {
        SCORE_COLORS[(self.0 - 1) as usize]
    }

    pub fn hex_color(self) -> String {
        colors::to_hex(self.color())
    }
}

impl Default for Score {
    fn default() -> Self {
        Self(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::f64::consts::TAU;

    #[test]
    fn test_bounds() {
        assert!(WheelPosition::new(10).is_none());
        assert_eq!(WheelPosition::new(9).map(WheelPosition::get), Some(9));
        assert!(Score::new(0).is_none());
        assert!(Score::new(11).is_none());
        assert_eq!(Score::new(10).map(Score::get), Some(10));
    }

    #[test]
    fn test_score_lookup_is_reversed_bijection() {
        let scores: Vec<u8> = WheelPosition::all().map(|p| p.score().get()).collect();
        assert_eq!(scores, vec![10, 9, 8, 7, 6, 5, 4, 3, 2, 1]);
        let unique: HashSet<_> = scores.iter().collect();
        assert_eq!(unique.len(), 10);
    }

    #[test]
    fn test_position_covers_full_turn() {
        let steps = 3600;
        let seen: HashSet<u8> = (0..steps)
            .map(|i| WheelPosition::from_angle(i as f64 * TAU / steps as f64).get())
            .collect();
        assert_eq!(seen.len(), 10);
    }

    #[test]
    fn test_position_segment_edges() {
        assert_eq!(WheelPosition::from_angle(0.0).get(), 0);
        assert_eq!(WheelPosition::from_angle(SEGMENT_ANGLE * 1.5).get(), 1);
        assert_eq!(WheelPosition::from_angle(TAU - 1e-9).get(), 9);
        assert_eq!(WheelPosition::from_angle(-1e-3).get(), 9);
        assert_eq!(WheelPosition::from_angle(5.0 * TAU + 0.1).get(), 0);
    }

    #[test]
    fn test_score_color() {
        assert_eq!(Score::default().hex_color(), "#ee3a64");
        assert_eq!(Score::new(10).map(Score::hex_color).as_deref(), Some("#3585ea"));
    }
}
