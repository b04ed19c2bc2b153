//! Damage model and one-shot battle resolution for pokeduel.
//!
//! # Overview
//!
//! `pokeduel-battle` sits between the catalog and the async arena:
//!
//! ```text
//! pokeduel-dex (catalog + name resolution)
//!        │
//!        ▼
//! pokeduel-battle (damage + engine) ← THIS CRATE
//!        │
//!        ▼
//! pokeduel-arena (registry + async execution)
//! ```
//!
//! Everything here is pure: no I/O, no shared mutable state.
//!
//! # Main Types
//!
//! - [`damage`] - Damage one creature deals to another
//! - [`BattleEngine`] - Resolves two names and decides the battle
//! - [`BattleOutcome`] / [`Winner`] - The decision and its margin
//!
//! # Example Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use pokeduel_battle::BattleEngine;
//! use pokeduel_dex::CsvCatalog;
//!
//! let engine = BattleEngine::new(Arc::new(CsvCatalog::from_path("pokemon.csv")?));
//! let outcome = engine.run("Charmander", "Squirtl")?;
//! println!("{} wins by {:.1}", outcome.winner, outcome.margin);
//! ```

pub mod damage;
pub mod engine;
pub mod outcome;

pub use damage::{damage, NEUTRAL_MULTIPLIER};
pub use engine::{BattleEngine, EngineError};
pub use outcome::{BattleOutcome, Side, Winner};
