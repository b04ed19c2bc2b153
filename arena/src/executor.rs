//! Deferred battle execution
//!
//! Every battle runs under one arena-wide lock, so no two battles ever score
//! concurrently and registry writes never interleave. Battles finish in the
//! order their tasks acquire the lock, which need not be submission order.
//! The lock has no timeout: a battle that never finished would stall every
//! later one.
//!
//! TODO: per-battle locking instead of the arena-wide lock, so unrelated
//! battles stop queueing behind each other.

use std::sync::Arc;

use pokeduel_battle::{BattleEngine, BattleOutcome, EngineError};
use thiserror::Error;
use tokio::runtime::{Handle, TryCurrentError};
use tokio::sync::Mutex;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info, warn};

use crate::registry::{BattleId, BattleRegistry, BattleStatus};

/// Failures inside a scheduled battle
///
/// These never reach the submitter; they are recorded as a failed battle.
#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Battle task aborted: {0}")]
    Internal(#[from] JoinError),
}

/// Runs battles off the request path and records their terminal status
#[derive(Debug, Clone)]
pub struct BattleExecutor {
    engine: BattleEngine,
    registry: Arc<BattleRegistry>,
    pub(crate) lock: Arc<Mutex<()>>,
}

impl BattleExecutor {
    pub fn new(engine: BattleEngine, registry: Arc<BattleRegistry>) -> Self {
        Self {
            engine,
            registry,
            lock: Arc::new(Mutex::new(())),
        }
    }

    /// Run a battle on the current tokio runtime
    ///
    /// Fails when called outside a tokio runtime.
    pub fn schedule(
        &self,
        id: BattleId,
        key_a: String,
        key_b: String,
    ) -> Result<JoinHandle<()>, TryCurrentError> {
        let runtime = Handle::try_current()?;
        Ok(self.schedule_on(&runtime, id, key_a, key_b))
    }

    /// Run a battle on `runtime`
    ///
    /// `key_a`/`key_b` are catalog keys from an earlier resolution and are
    /// looked up exactly. Fire-and-forget: the returned handle is only useful
    /// to tests; callers observe completion by polling the registry.
    pub fn schedule_on(
        &self,
        runtime: &Handle,
        id: BattleId,
        key_a: String,
        key_b: String,
    ) -> JoinHandle<()> {
        let engine = self.engine.clone();
        let registry = Arc::clone(&self.registry);
        let lock = Arc::clone(&self.lock);

        runtime.spawn(async move {
            let _guard = lock.lock().await;

            let status = match execute(engine, key_a, key_b).await {
                Ok(outcome) => {
                    info!(
                        battle_id = %id,
                        winner = %outcome.winner,
                        margin = outcome.margin,
                        "Battle completed"
                    );
                    BattleStatus::Completed(outcome)
                }
                Err(ExecutionError::Engine(e)) => {
                    warn!(battle_id = %id, error = %e, "Battle failed");
                    BattleStatus::Failed
                }
                Err(e) => {
                    error!(battle_id = %id, error = %e, "Battle failed unexpectedly");
                    BattleStatus::Failed
                }
            };

            if let Err(e) = registry.set_terminal(&id, status) {
                error!(battle_id = %id, error = %e, "Could not record battle result");
            }
        })
    }
}

/// Score the battle on the blocking pool so a panic is caught as a `JoinError`
async fn execute(
    engine: BattleEngine,
    key_a: String,
    key_b: String,
) -> Result<BattleOutcome, ExecutionError> {
    let outcome =
        tokio::task::spawn_blocking(move || engine.run_resolved(&key_a, &key_b)).await??;
    Ok(outcome)
}
