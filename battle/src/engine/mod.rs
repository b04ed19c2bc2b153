//! Battle resolution over the catalog


use std::sync::Arc;

use pokeduel_dex::{Catalog, CreatureRecord, ResolveError};
use thiserror::Error;
use tracing::debug;

use crate::damage::damage;
use crate::outcome::{BattleOutcome, Side};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Could not resolve {side} creature: {source}")]
    Resolve { side: Side, source: ResolveError },

    #[error("{side} creature '{key}' is not in the catalog")]
    NotInCatalog { side: Side, key: String },
}

impl EngineError {
    /// The underlying resolution failure, if this came from fuzzy resolution
    pub fn resolve_error(&self) -> Option<&ResolveError> {
        match self {
            EngineError::Resolve { source, .. } => Some(source),
            EngineError::NotInCatalog { .. } => None,
        }
    }
}

/// Resolves two names and scores them against each other
///
/// Pure computation over a shared read-only catalog; needs no
/// synchronization of its own and is cheap to clone.
#[derive(Debug, Clone)]
pub struct BattleEngine {
    catalog: Arc<Catalog>,
}

impl BattleEngine {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Resolve both raw names, failing on the first one that does not resolve
    pub fn resolve_pair(
        &self,
        raw_a: &str,
        raw_b: &str,
    ) -> Result<(&CreatureRecord, &CreatureRecord), EngineError> {
        let a = self
            .catalog
            .resolve(raw_a)
            .map_err(|source| EngineError::Resolve { side: Side::A, source })?;
        let b = self
            .catalog
            .resolve(raw_b)
            .map_err(|source| EngineError::Resolve { side: Side::B, source })?;
        Ok((a, b))
    }

    /// Resolve both names and decide the battle
    pub fn run(&self, raw_a: &str, raw_b: &str) -> Result<BattleOutcome, EngineError> {
        let (a, b) = self.resolve_pair(raw_a, raw_b)?;
        Ok(Self::outcome(a, b))
    }

    /// Decide a battle between two names that were already resolved
    ///
    /// Keys are looked up exactly, never fuzzily, so the creatures scored are
    /// the ones [`resolve_pair`](Self::resolve_pair) returned.
    pub fn run_resolved(&self, key_a: &str, key_b: &str) -> Result<BattleOutcome, EngineError> {
        let a = self
            .catalog
            .lookup(key_a)
            .ok_or_else(|| EngineError::NotInCatalog { side: Side::A, key: key_a.to_string() })?;
        let b = self
            .catalog
            .lookup(key_b)
            .ok_or_else(|| EngineError::NotInCatalog { side: Side::B, key: key_b.to_string() })?;
        Ok(Self::outcome(a, b))
    }

    /// Decide a battle between two already-resolved records
    pub fn outcome(a: &CreatureRecord, b: &CreatureRecord) -> BattleOutcome {
        let damage_a_to_b = damage(a, b);
        let damage_b_to_a = damage(b, a);

        debug!(
            a = %a.name,
            b = %b.name,
            damage_a_to_b,
            damage_b_to_a,
            "Scored battle"
        );

        BattleOutcome::decide(&a.name, &b.name, damage_a_to_b, damage_b_to_a)
    }
}
