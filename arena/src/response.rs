//! Transport-facing request/response bodies

use pokeduel_battle::BattleOutcome;
use pokeduel_dex::CreatureRecord;
use serde::{Deserialize, Serialize};

use crate::registry::{BattleId, BattleStatus};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StartBattleRequest {
    pub pokemon_a: String,
    pub pokemon_b: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartBattleResponse {
    pub battle_id: BattleId,
}

/// Wire label for a battle's status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusLabel {
    #[serde(rename = "BATTLE_INPROGRESS")]
    InProgress,
    #[serde(rename = "BATTLE_COMPLETED")]
    Completed,
    #[serde(rename = "BATTLE_FAILED")]
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleResultBody {
    pub winner_name: String,
    pub won_by_margin: f64,
}

impl From<&BattleOutcome> for BattleResultBody {
    fn from(outcome: &BattleOutcome) -> Self {
        Self {
            winner_name: outcome.winner.name().to_string(),
            won_by_margin: outcome.margin,
        }
    }
}

/// Status poll response; `result` is set only for completed battles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleStatusResponse {
    pub status: StatusLabel,
    pub result: Option<BattleResultBody>,
}

impl From<&BattleStatus> for BattleStatusResponse {
    fn from(status: &BattleStatus) -> Self {
        match status {
            BattleStatus::Pending => Self {
                status: StatusLabel::InProgress,
                result: None,
            },
            BattleStatus::Completed(outcome) => Self {
                status: StatusLabel::Completed,
                result: Some(outcome.into()),
            },
            BattleStatus::Failed => Self {
                status: StatusLabel::Failed,
                result: None,
            },
        }
    }
}

/// Listing entry for one creature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatureSummary {
    pub name: String,
    pub type1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type2: Option<String>,
    pub attack: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pokedex_number: Option<u32>,
}

impl From<&CreatureRecord> for CreatureSummary {
    fn from(record: &CreatureRecord) -> Self {
        Self {
            name: record.name.clone(),
            type1: record.primary_type.clone(),
            type2: record.secondary_type().map(str::to_string),
            attack: record.attack(),
            pokedex_number: record.pokedex_number,
        }
    }
}
