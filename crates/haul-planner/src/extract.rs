//! Objective extraction.

use haul_core::{MissionRecord, Objective, ObjectiveId};
use serde_json::Value;

/// Flatten missions into objectives, in mission order then objective order.
///
/// Missing fields take their defaults; extraction never fails.
pub fn extract_objectives(missions: &[MissionRecord]) -> Vec<Objective> {
    missions
        .iter()
        .flat_map(|mission| {
            mission.objectives.iter().map(move |record| (mission, record))
        })
        .enumerate()
        .map(|(index, (mission, record))| Objective {
            id: ObjectiveId(index),
            mission_id: mission.id.clone(),
            collect_from: record.collect_from().to_string(),
            deliver_to: record.deliver_to().to_string(),
            scu_amount: record.scu_amount(),
            reward: mission.reward,
        })
        .collect()
}

/// Extract objectives from a raw JSON array of missions.
///
/// A value that is not an array yields no objectives.
pub fn extract_objectives_from_json(missions: &Value) -> Vec<Objective> {
    extract_objectives(&MissionRecord::list_from_value(missions))
}
