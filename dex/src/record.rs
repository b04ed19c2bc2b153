//! Creature record type

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single creature from the catalog
///
/// Records are built once when the catalog loads and never mutated after.
/// Optional numeric fields stay optional here; callers decide how to default
/// them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatureRecord {
    /// Display name, original casing (e.g. "Bulbasaur")
    pub name: String,

    /// Primary type name, lowercase (may be empty)
    pub primary_type: String,

    /// Secondary type name, lowercase
    pub secondary_type: Option<String>,

    /// Base attack stat
    pub attack: Option<f64>,

    /// Damage multipliers taken from each attacking type, keyed by lowercase
    /// type name. Sparse: a missing type is neutral.
    pub resistances: HashMap<String, f64>,

    // === Listing metadata ===
    /// National dex number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pokedex_number: Option<u32>,

    /// Generation the creature was introduced in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation: Option<u8>,

    #[serde(default)]
    pub is_legendary: bool,
}

impl CreatureRecord {
    /// Create a record with a name and primary type and nothing else
    pub fn new(name: impl Into<String>, primary_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            primary_type: primary_type.into().to_lowercase(),
            secondary_type: None,
            attack: None,
            resistances: HashMap::new(),
            pokedex_number: None,
            generation: None,
            is_legendary: false,
        }
    }

    /// Set the secondary type
    pub fn with_secondary_type(mut self, secondary: impl Into<String>) -> Self {
        self.secondary_type = Some(secondary.into().to_lowercase());
        self
    }

    /// Set the attack stat
    pub fn with_attack(mut self, attack: f64) -> Self {
        self.attack = Some(attack);
        self
    }

    /// Set the multiplier this creature takes from `attacking_type`
    pub fn with_resistance(mut self, attacking_type: &str, multiplier: f64) -> Self {
        self.resistances
            .insert(attacking_type.to_lowercase(), multiplier);
        self
    }

    /// Lowercase lookup key
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Attack stat if it is usable (finite and non-negative)
    pub fn attack(&self) -> Option<f64> {
        self.attack.filter(|a| a.is_finite() && *a >= 0.0)
    }

    /// Primary type, `None` when the field is blank
    pub fn primary_type(&self) -> Option<&str> {
        Some(self.primary_type.trim()).filter(|t| !t.is_empty())
    }

    /// Secondary type, `None` when absent or blank
    pub fn secondary_type(&self) -> Option<&str> {
        self.secondary_type
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    /// Multiplier taken from `attacking_type`, if the catalog has a usable one
    pub fn resistance_against(&self, attacking_type: &str) -> Option<f64> {
        self.resistances
            .get(&attacking_type.to_lowercase())
            .copied()
            .filter(|m| m.is_finite())
    }
}
