//! Mission input records.
//!
//! Missions arrive from a host application as loosely structured JSON. Every
//! field is optional: absent or mistyped values fall back to defaults instead
//! of failing, so a partially filled mission still contributes its objectives.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// Location name used when an objective omits one of its endpoints.
pub const UNKNOWN_LOCATION: &str = "Unknown";

/// Opaque mission identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MissionId(String);

impl MissionId {
    /// Create an identifier from any string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Interpret a JSON value as an identifier.
    ///
    /// Strings are kept verbatim and numbers use their decimal text. Any
    /// other value (null, bool, array, object) yields `None`.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Self(s.clone())),
            Value::Number(n) => Some(Self(n.to_string())),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MissionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for MissionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A mission as supplied by the host application.
///
/// Deserializing goes through [`MissionRecord::from_value`], so a typed
/// `serde_json::from_str::<Vec<MissionRecord>>` is as lenient as the raw path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct MissionRecord {
    /// Mission identifier, copied onto every extracted objective.
    pub id: Option<MissionId>,

    /// Mission payout. Carried for display only.
    pub reward: i64,

    /// Cargo objectives in the order the mission lists them.
    pub objectives: Vec<ObjectiveRecord>,
}

impl MissionRecord {
    /// Create an empty mission with the given identifier and reward.
    pub fn new(id: impl Into<MissionId>, reward: i64) -> Self {
        Self {
            id: Some(id.into()),
            reward,
            objectives: Vec::new(),
        }
    }

    /// Add an objective to the mission.
    pub fn with_objective(
        mut self,
        collect_from: impl Into<String>,
        deliver_to: impl Into<String>,
        scu_amount: u32,
    ) -> Self {
        self.objectives.push(ObjectiveRecord {
            collect_from: Some(collect_from.into()),
            deliver_to: Some(deliver_to.into()),
            scu_amount: Some(scu_amount),
        });
        self
    }

    /// Read a mission from arbitrary JSON, substituting defaults for any
    /// missing or mistyped field. Never fails.
    pub fn from_value(value: &Value) -> Self {
        let id = value.get("id").and_then(MissionId::from_json);
        let reward = value.get("reward").and_then(whole_i64).unwrap_or_default();
        let objectives = value
            .get("objectives")
            .and_then(Value::as_array)
            .map(|entries| entries.iter().map(ObjectiveRecord::from_value).collect())
            .unwrap_or_default();

        Self {
            id,
            reward,
            objectives,
        }
    }

    /// Read every mission of a JSON array. A value that is not an array
    /// yields no missions.
    pub fn list_from_value(value: &Value) -> Vec<Self> {
        value
            .as_array()
            .map(|missions| missions.iter().map(Self::from_value).collect())
            .unwrap_or_default()
    }
}

impl From<Value> for MissionRecord {
    fn from(value: Value) -> Self {
        Self::from_value(&value)
    }
}

/// One cargo objective inside a mission record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct ObjectiveRecord {
    pub collect_from: Option<String>,
    pub deliver_to: Option<String>,
    pub scu_amount: Option<u32>,
}

impl ObjectiveRecord {
    /// Read an objective from arbitrary JSON. Never fails.
    pub fn from_value(value: &Value) -> Self {
        let text = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_owned);
        let scu_amount = value
            .get("scu_amount")
            .and_then(whole_u64)
            .map(|amount| u32::try_from(amount).unwrap_or(u32::MAX));

        Self {
            collect_from: text("collect_from"),
            deliver_to: text("deliver_to"),
            scu_amount,
        }
    }

    /// Pickup location, or [`UNKNOWN_LOCATION`].
    pub fn collect_from(&self) -> &str {
        self.collect_from.as_deref().unwrap_or(UNKNOWN_LOCATION)
    }

    /// Delivery location, or [`UNKNOWN_LOCATION`].
    pub fn deliver_to(&self) -> &str {
        self.deliver_to.as_deref().unwrap_or(UNKNOWN_LOCATION)
    }

    /// Cargo volume, or zero.
    pub fn scu_amount(&self) -> u32 {
        self.scu_amount.unwrap_or_default()
    }
}

impl From<Value> for ObjectiveRecord {
    fn from(value: Value) -> Self {
        Self::from_value(&value)
    }
}

/// Integer value of a number, accepting floats without a fractional part.
fn whole_i64(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && (i64::MIN as f64..=i64::MAX as f64).contains(f))
            .map(|f| f as i64)
    })
}

/// Non-negative integer value of a number, accepting whole floats.
fn whole_u64(value: &Value) -> Option<u64> {
    value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= 0.0)
            .map(|f| f as u64)
    })
}

/// Parse a JSON document holding an array of missions.
///
/// Only JSON syntax errors are reported. A document that is not an array
/// yields no missions, and malformed missions are read leniently.
pub fn parse_missions(json: &str) -> Result<Vec<MissionRecord>> {
    let document: Value = serde_json::from_str(json)?;
    Ok(MissionRecord::list_from_value(&document))
}
