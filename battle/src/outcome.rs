//! Battle outcome types

use std::fmt;

/// Which submitted name a value refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    A,
    B,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::A => write!(f, "first"),
            Side::B => write!(f, "second"),
        }
    }
}

/// Who won a battle
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Winner {
    /// Canonical display name of the winning creature
    Creature(String),
    Draw,
}

impl Winner {
    /// Winner name as reported to clients ("draw" for a draw)
    pub fn name(&self) -> &str {
        match self {
            Winner::Creature(name) => name,
            Winner::Draw => "draw",
        }
    }

    pub fn is_draw(&self) -> bool {
        matches!(self, Winner::Draw)
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Result of a completed battle
///
/// `margin` is zero exactly when the winner is [`Winner::Draw`], and positive
/// otherwise.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleOutcome {
    pub winner: Winner,

    /// Difference between the two damage scores
    pub margin: f64,

    /// Damage the first creature deals to the second
    pub damage_a_to_b: f64,

    /// Damage the second creature deals to the first
    pub damage_b_to_a: f64,
}

impl BattleOutcome {
    /// Decide a battle from both damage scores
    ///
    /// The strictly larger score wins by the difference; equal scores (even
    /// equal negative ones) are a draw with margin 0.
    pub fn decide(name_a: &str, name_b: &str, damage_a_to_b: f64, damage_b_to_a: f64) -> Self {
        let (winner, margin) = if damage_a_to_b > damage_b_to_a {
            (
                Winner::Creature(name_a.to_string()),
                damage_a_to_b - damage_b_to_a,
            )
        } else if damage_b_to_a > damage_a_to_b {
            (
                Winner::Creature(name_b.to_string()),
                damage_b_to_a - damage_a_to_b,
            )
        } else {
            (Winner::Draw, 0.0)
        };

        Self {
            winner,
            margin,
            damage_a_to_b,
            damage_b_to_a,
        }
    }
}
