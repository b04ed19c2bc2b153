//! Battle registry: the single source of truth clients poll

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::{PoisonError, RwLock};

use pokeduel_battle::BattleOutcome;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Opaque battle identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BattleId(pub Uuid);

impl BattleId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BattleId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BattleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BattleId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

/// Where a battle is in its lifecycle
///
/// Only `Pending -> Completed` and `Pending -> Failed` ever happen. The
/// outcome lives inside `Completed`, so a completed battle always has one and
/// no other status can.
#[derive(Debug, Clone, PartialEq)]
pub enum BattleStatus {
    Pending,
    Completed(BattleOutcome),
    Failed,
}

impl BattleStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, BattleStatus::Pending)
    }

    pub fn outcome(&self) -> Option<&BattleOutcome> {
        match self {
            BattleStatus::Completed(outcome) => Some(outcome),
            BattleStatus::Pending | BattleStatus::Failed => None,
        }
    }
}

/// A registered battle
#[derive(Debug, Clone, PartialEq)]
pub struct Battle {
    pub id: BattleId,

    /// Canonical names of the two creatures, in submission order
    pub creatures: (String, String),

    pub status: BattleStatus,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Unknown battle: {0}")]
    UnknownBattle(BattleId),

    #[error("Battle {0} already finished")]
    AlreadyTerminal(BattleId),

    #[error("Battle {0} can only move to a terminal status")]
    NotTerminal(BattleId),
}

/// Mapping from battle id to battle
///
/// Reads take the read lock only long enough to clone one entry, and writes
/// replace a whole [`Battle`] at once, so a reader never sees a status
/// without its matching result.
#[derive(Debug, Default)]
pub struct BattleRegistry {
    battles: RwLock<HashMap<BattleId, Battle>>,
}

impl BattleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new pending battle and return its id
    ///
    /// The entry is visible to [`get`](Self::get) as soon as this returns.
    pub fn create(&self, creature_a: impl Into<String>, creature_b: impl Into<String>) -> BattleId {
        // Entries are only ever replaced whole, so poisoned data is still consistent.
        let mut battles = self.battles.write().unwrap_or_else(PoisonError::into_inner);

        let mut id = BattleId::new();
        while battles.contains_key(&id) {
            id = BattleId::new();
        }

        battles.insert(
            id,
            Battle {
                id,
                creatures: (creature_a.into(), creature_b.into()),
                status: BattleStatus::Pending,
            },
        );
        id
    }

    /// Snapshot of one battle
    pub fn get(&self, id: &BattleId) -> Option<Battle> {
        self.battles
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }

    /// Move a pending battle to a terminal status
    pub fn set_terminal(&self, id: &BattleId, status: BattleStatus) -> Result<(), RegistryError> {
        if !status.is_terminal() {
            return Err(RegistryError::NotTerminal(*id));
        }

        let mut battles = self.battles.write().unwrap_or_else(PoisonError::into_inner);
        let current = battles
            .get(id)
            .ok_or(RegistryError::UnknownBattle(*id))?;
        if current.status.is_terminal() {
            return Err(RegistryError::AlreadyTerminal(*id));
        }

        let replacement = Battle {
            id: *id,
            creatures: current.creatures.clone(),
            status,
        };
        battles.insert(*id, replacement);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.battles
            .read()
            .map(|b| b.len())
            .unwrap_or_else(|poisoned| poisoned.into_inner().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
