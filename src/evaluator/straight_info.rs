use crate::cards::Rank;

/// Whether a hand is a straight, and whether that straight is the wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub is_straight: bool,
    /// A-2-3-4-5, where the Ace plays low.
    pub is_wheel: bool,
}

const WHEEL: [Rank; 5] = [Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Ace];

impl StraightInfo {
    const NONE: StraightInfo = StraightInfo { is_straight: false, is_wheel: false };

    /// Detect a straight from five ranks sorted ascending.
    pub fn detect(ascending: &[Rank; 5]) -> Self {
        // Any repeated rank rules out a straight before the consecutive check runs.
        let distinct = ascending.windows(2).all(|w| w[0] < w[1]);
        if !distinct {
            return Self::NONE;
        }

        if *ascending == WHEEL {
            return StraightInfo { is_straight: true, is_wheel: true };
        }

        let consecutive = ascending.windows(2).all(|w| w[1].value() == w[0].value() + 1);
        if consecutive {
            return StraightInfo { is_straight: true, is_wheel: false };
        }

        Self::NONE
    }
}
