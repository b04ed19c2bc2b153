//! One-directional damage score
//!
//! ```text
//! damage = (attack / 200) * 100 - ((r1 / 4) * 100 + (r2 / 4) * 100)
//! ```
//!
//! `r1`/`r2` are the defender's multipliers against the attacker's primary
//! and secondary types. The result is not clamped: a defender that resists
//! both of the attacker's types can push it below zero, which simply marks
//! the weaker attacker.

use pokeduel_dex::CreatureRecord;

/// Multiplier used when the defender has no usable entry for a type
pub const NEUTRAL_MULTIPLIER: f64 = 1.0;

const ATTACK_DIVISOR: f64 = 200.0;
const RESISTANCE_DIVISOR: f64 = 4.0;
const SCALE: f64 = 100.0;

/// Damage `attacker` deals to `defender`
///
/// Total over any pair of records: a missing attack counts as 0, a missing
/// secondary type contributes a neutral multiplier without a lookup, and a
/// missing or non-finite resistance is neutral.
pub fn damage(attacker: &CreatureRecord, defender: &CreatureRecord) -> f64 {
    let attack = attacker.attack().unwrap_or(0.0);

    let primary = multiplier(defender, attacker.primary_type());
    let secondary = multiplier(defender, attacker.secondary_type());

    (attack / ATTACK_DIVISOR) * SCALE
        - ((primary / RESISTANCE_DIVISOR) * SCALE + (secondary / RESISTANCE_DIVISOR) * SCALE)
}

/// Defender's multiplier against an attacking type
pub fn multiplier(defender: &CreatureRecord, attacking_type: Option<&str>) -> f64 {
    attacking_type
        .and_then(|t| defender.resistance_against(t))
        .unwrap_or(NEUTRAL_MULTIPLIER)
}
