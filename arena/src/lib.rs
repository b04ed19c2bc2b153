//! Asynchronous battle service for pokeduel.
//!
//! [`Arena`] is the service object a transport layer wraps. It owns the
//! battle registry and executor and shares the catalog with the engine.
//!
//! Names are validated when a battle is submitted: a name that does not
//! resolve fails [`Arena::start_battle`] straight away with the resolution
//! error, and nothing is registered. Valid submissions get a pending entry
//! before the call returns, then run later under the arena-wide lock.
//!
//! # Example Usage
//!
//! ```ignore
//! use pokeduel_arena::{Arena, ArenaConfig};
//!
//! let arena = Arena::from_config(&ArenaConfig::from_env())?;
//! let started = arena.start_battle("Charmander", "Squirtel")?;
//!
//! // Later...
//! let status = arena.battle_status(&started.battle_id.to_string())?;
//! ```

mod tests;

pub mod config;
pub mod executor;
pub mod registry;
pub mod response;

use std::sync::Arc;

use anyhow::Context;
use pokeduel_battle::{BattleEngine, EngineError};
use pokeduel_dex::{Catalog, CsvCatalog, Page};
use thiserror::Error;
use tokio::runtime::Handle;
use tracing::info;

pub use config::ArenaConfig;
pub use executor::{BattleExecutor, ExecutionError};
pub use registry::{Battle, BattleId, BattleRegistry, BattleStatus, RegistryError};
pub use response::{
    BattleResultBody, BattleStatusResponse, CreatureSummary, StartBattleRequest,
    StartBattleResponse, StatusLabel,
};

pub use pokeduel_battle::{BattleOutcome, Winner};
pub use pokeduel_dex::ResolveError;

#[derive(Error, Debug)]
pub enum ArenaError {
    #[error(transparent)]
    Resolve(#[from] EngineError),

    #[error("Battle not found: {0}")]
    BattleNotFound(String),

    #[error("Battles can only be started inside a tokio runtime")]
    NoRuntime,
}

impl ArenaError {
    /// The name-resolution failure behind this error, if any
    pub fn resolve_error(&self) -> Option<&ResolveError> {
        match self {
            ArenaError::Resolve(e) => e.resolve_error(),
            ArenaError::BattleNotFound(_) | ArenaError::NoRuntime => None,
        }
    }
}

/// Battle service: submit battles, poll their status, list creatures
#[derive(Debug, Clone)]
pub struct Arena {
    engine: BattleEngine,
    registry: Arc<BattleRegistry>,
    executor: BattleExecutor,
    page_size: usize,
}

impl Arena {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_page_size(catalog, config::DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(catalog: Arc<Catalog>, page_size: usize) -> Self {
        let engine = BattleEngine::new(catalog);
        let registry = Arc::new(BattleRegistry::new());
        let executor = BattleExecutor::new(engine.clone(), Arc::clone(&registry));
        Self {
            engine,
            registry,
            executor,
            page_size,
        }
    }

    /// Load the catalog named by `config` and build an arena over it
    pub fn from_config(config: &ArenaConfig) -> anyhow::Result<Self> {
        let catalog = CsvCatalog::from_path(&config.catalog_path).with_context(|| {
            format!(
                "Failed to load catalog from {}",
                config.catalog_path.display()
            )
        })?;
        Ok(Self::with_page_size(Arc::new(catalog), config.page_size))
    }

    pub fn catalog(&self) -> &Catalog {
        self.engine.catalog()
    }

    /// Submit a battle between two (possibly misspelled) creature names
    ///
    /// Names are resolved first, so a bad name is reported as such even
    /// outside a runtime. Returns once the battle is registered as pending
    /// and scheduled; the battle itself runs later on the current tokio
    /// runtime.
    pub fn start_battle(&self, name_a: &str, name_b: &str) -> Result<StartBattleResponse, ArenaError> {
        let (a, b) = self.engine.resolve_pair(name_a, name_b)?;
        let runtime = Handle::try_current().map_err(|_| ArenaError::NoRuntime)?;

        let battle_id = self.registry.create(a.name.clone(), b.name.clone());
        info!(battle_id = %battle_id, a = %a.name, b = %b.name, "Battle submitted");

        // Execution looks the resolved keys up exactly; it never re-resolves.
        self.executor.schedule_on(&runtime, battle_id, a.key(), b.key());
        Ok(StartBattleResponse { battle_id })
    }

    /// Poll a battle by its string id
    pub fn battle_status(&self, battle_id: &str) -> Result<BattleStatusResponse, ArenaError> {
        let battle = battle_id
            .parse::<BattleId>()
            .ok()
            .and_then(|id| self.registry.get(&id))
            .ok_or_else(|| ArenaError::BattleNotFound(battle_id.to_string()))?;
        Ok(BattleStatusResponse::from(&battle.status))
    }

    /// Full battle snapshot
    pub fn battle(&self, id: &BattleId) -> Option<Battle> {
        self.registry.get(id)
    }

    /// One page of the catalog; `per_page` defaults to the configured size
    pub fn creatures(&self, page: usize, per_page: Option<usize>) -> Page<CreatureSummary> {
        self.catalog()
            .page(page, per_page.unwrap_or(self.page_size))
            .map(CreatureSummary::from)
    }
}
