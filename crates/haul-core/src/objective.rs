//! Cargo objectives extracted from missions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::mission::MissionId;

/// Position of an objective in extraction order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectiveId(pub usize);

impl fmt::Display for ObjectiveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One unit of cargo work: collect `scu_amount` at `collect_from` and
/// deliver it to `deliver_to`. Immutable once extracted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Objective {
    /// Identity within a single extraction.
    pub id: ObjectiveId,

    /// Owning mission.
    pub mission_id: Option<MissionId>,

    pub collect_from: String,

    pub deliver_to: String,

    /// Cargo volume in SCU.
    pub scu_amount: u32,

    /// Reward of the owning mission. Not used for planning.
    pub reward: i64,
}

impl Objective {
    /// True if this objective is loaded at `location`.
    pub fn collects_at(&self, location: &str) -> bool {
        self.collect_from == location
    }

    /// True if this objective is unloaded at `location`.
    pub fn delivers_to(&self, location: &str) -> bool {
        self.deliver_to == location
    }
}

/// Total cargo volume of a set of objectives.
pub fn total_scu<'a>(objectives: impl IntoIterator<Item = &'a Objective>) -> u64 {
    objectives
        .into_iter()
        .map(|objective| u64::from(objective.scu_amount))
        .sum()
}
