//! Tier-based location proximity.
//!
//! Ranks locations without coordinates by grouping them around planets: a
//! planet, its moons and the stations above it form a narrow group, its inner
//! Lagrange stations a wider one, and everything else is far away.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::proximity::ProximityRanker;

static ABOVE_PLANET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)above\s+(\w+)").expect("valid above-planet pattern"));

static LAGRANGE_STATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)([a-z]{3})-L([0-9]+)").expect("valid lagrange pattern"));

/// Same location.
pub const TIER_SAME: u8 = 0;
/// Planet, its moons and orbital stations.
pub const TIER_NARROW: u8 = 1;
/// Inner Lagrange stations of the same planet.
pub const TIER_WIDE: u8 = 2;
/// Anything else.
pub const TIER_FAR: u8 = 3;

/// A planet with its Lagrange code and moons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanetSystem {
    pub name: String,
    /// Three-letter prefix of the planet's Lagrange stations.
    pub code: Option<String>,
    pub moons: Vec<String>,
}

impl PlanetSystem {
    pub fn new(name: &str, code: Option<&str>, moons: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            code: code.map(str::to_string),
            moons: moons.iter().map(|moon| moon.to_string()).collect(),
        }
    }
}

/// How a location relates to its planet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationKind {
    Planet,
    AbovePlanet,
    Moon,
    /// L1 or L2 station.
    InnerLagrange,
    /// L3 and beyond.
    OuterLagrange,
    Gateway,
    Other,
}

/// Classification of a single location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationGroup {
    pub planet: Option<String>,
    pub kind: LocationKind,
    pub tier: u8,
}

impl LocationGroup {
    fn around(planet: &PlanetSystem, kind: LocationKind, tier: u8) -> Self {
        Self {
            planet: Some(planet.name.clone()),
            kind,
            tier,
        }
    }

    fn unattached(kind: LocationKind) -> Self {
        Self {
            planet: None,
            kind,
            tier: TIER_FAR,
        }
    }
}

/// Locations bucketed by their proximity to an origin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProximityGroups {
    pub current: Vec<String>,
    pub narrow: Vec<String>,
    pub wide: Vec<String>,
    pub far: Vec<String>,
}

/// Ranker that orders locations by planetary proximity tier, then by name.
#[derive(Debug, Clone)]
pub struct TieredProximity {
    systems: Vec<PlanetSystem>,
}

impl TieredProximity {
    pub fn new(systems: Vec<PlanetSystem>) -> Self {
        Self { systems }
    }

    /// Stanton planets plus Delamar.
    pub fn stanton() -> Self {
        Self::new(vec![
            PlanetSystem::new("ArcCorp", Some("ARC"), &["Lyria", "Wala"]),
            PlanetSystem::new("Hurston", Some("HUR"), &["Aberdeen", "Aerial", "Magda", "Ita"]),
            PlanetSystem::new("microTech", Some("MIC"), &["Calliope", "Clio", "Euterpe"]),
            PlanetSystem::new("Crusader", Some("CRU"), &["Cellin", "Daymar", "Yela"]),
            PlanetSystem::new("Delamar", None, &[]),
        ])
    }

    pub fn systems(&self) -> &[PlanetSystem] {
        &self.systems
    }

    /// Classify a location by name.
    pub fn classify(&self, location: &str) -> LocationGroup {
        if let Some(captures) = ABOVE_PLANET.captures(location) {
            let name = &captures[1];
            if let Some(planet) = self.systems.iter().find(|s| s.name.eq_ignore_ascii_case(name)) {
                return LocationGroup::around(planet, LocationKind::AbovePlanet, TIER_NARROW);
            }
        }

        if let Some(captures) = LAGRANGE_STATION.captures(location) {
            let code = &captures[1];
            let point: u32 = captures[2].parse().unwrap_or(u32::MAX);
            let planet = self.systems.iter().find(|s| {
                s.code
                    .as_deref()
                    .is_some_and(|own| own.eq_ignore_ascii_case(code))
            });
            if let Some(planet) = planet {
                return if point <= 2 {
                    LocationGroup::around(planet, LocationKind::InnerLagrange, TIER_WIDE)
                } else {
                    LocationGroup::around(planet, LocationKind::OuterLagrange, TIER_FAR)
                };
            }
        }

        let lowered = location.to_lowercase();
        for planet in &self.systems {
            if planet.moons.iter().any(|moon| lowered.contains(&moon.to_lowercase())) {
                return LocationGroup::around(planet, LocationKind::Moon, TIER_NARROW);
            }
        }

        for planet in &self.systems {
            if lowered.contains(&planet.name.to_lowercase()) {
                return LocationGroup::around(planet, LocationKind::Planet, TIER_NARROW);
            }
        }

        if lowered.contains("gate") {
            return LocationGroup::unattached(LocationKind::Gateway);
        }

        LocationGroup::unattached(LocationKind::Other)
    }

    /// Proximity tier between two locations; lower is closer.
    pub fn proximity(&self, a: &str, b: &str) -> u8 {
        if a.to_lowercase() == b.to_lowercase() {
            return TIER_SAME;
        }

        let (first, second) = (self.classify(a), self.classify(b));
        match (&first.planet, &second.planet) {
            (Some(p), Some(q)) if p == q => match first.tier.max(second.tier) {
                TIER_NARROW => TIER_NARROW,
                TIER_WIDE => TIER_WIDE,
                _ => TIER_FAR,
            },
            _ => TIER_FAR,
        }
    }

    /// Bucket locations by their proximity to `origin`.
    pub fn group_by_proximity<'a>(
        &self,
        locations: impl IntoIterator<Item = &'a str>,
        origin: &str,
    ) -> ProximityGroups {
        let mut groups = ProximityGroups::default();
        for location in locations {
            let bucket = match self.proximity(origin, location) {
                TIER_SAME => &mut groups.current,
                TIER_NARROW => &mut groups.narrow,
                TIER_WIDE => &mut groups.wide,
                _ => &mut groups.far,
            };
            bucket.push(location.to_string());
        }
        groups
    }
}

impl Default for TieredProximity {
    fn default() -> Self {
        Self::stanton()
    }
}

impl ProximityRanker for TieredProximity {
    fn order_by_proximity(&self, locations: &BTreeSet<String>, origin: &str) -> Vec<String> {
        // Stable sort keeps the set's lexical order within a tier.
        let mut ordered: Vec<String> = locations.iter().cloned().collect();
        ordered.sort_by_cached_key(|location| self.proximity(origin, location));
        ordered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        let tiers = TieredProximity::stanton();

        let group = tiers.classify("Everus Harbor above Hurston");
        assert_eq!(group.planet.as_deref(), Some("Hurston"));
        assert_eq!(group.kind, LocationKind::AbovePlanet);
        assert_eq!(group.tier, TIER_NARROW);

        let group = tiers.classify("HUR-L2 Faithful Dream Station");
        assert_eq!(group.kind, LocationKind::InnerLagrange);
        assert_eq!(group.tier, TIER_WIDE);

        let group = tiers.classify("arc-l4 Shallow Frontier Station");
        assert_eq!(group.planet.as_deref(), Some("ArcCorp"));
        assert_eq!(group.kind, LocationKind::OuterLagrange);
        assert_eq!(group.tier, TIER_FAR);

        // Only ASCII digits number a Lagrange point.
        let group = tiers.classify("HUR-L\u{0662} Station");
        assert_eq!(group.kind, LocationKind::Other);
        assert_eq!(group.tier, TIER_FAR);

        let group = tiers.classify("Shubin Mining Facility SCD-1 on Daymar");
        assert_eq!(group.planet.as_deref(), Some("Crusader"));
        assert_eq!(group.kind, LocationKind::Moon);

        let group = tiers.classify("Lorville, Hurston");
        assert_eq!(group.kind, LocationKind::Planet);

        let group = tiers.classify("Pyro Gateway");
        assert_eq!(group.kind, LocationKind::Gateway);
        assert_eq!(group.planet, None);

        assert_eq!(tiers.classify("Grim HEX").kind, LocationKind::Other);
    }

    #[test]
    fn test_proximity() {
        let tiers = TieredProximity::stanton();
        assert_eq!(tiers.proximity("Area18", "area18"), TIER_SAME);
        assert_eq!(tiers.proximity("Lorville, Hurston", "HDMS-Edmond on Aberdeen"), TIER_NARROW);
        assert_eq!(tiers.proximity("Lorville, Hurston", "HUR-L1 Green Glade Station"), TIER_WIDE);
        assert_eq!(tiers.proximity("Lorville, Hurston", "HUR-L5 High Course Station"), TIER_FAR);
        assert_eq!(tiers.proximity("Lorville, Hurston", "Orison, Crusader"), TIER_FAR);
        assert_eq!(tiers.proximity("Pyro Gateway", "Grim HEX"), TIER_FAR);
    }

    #[test]
    fn test_order_by_proximity() {
        let tiers = TieredProximity::stanton();
        let locations: BTreeSet<String> = [
            "Orison, Crusader",
            "HUR-L1 Green Glade Station",
            "Everus Harbor above Hurston",
            "Arial outpost",
            "HDMS-Edmond on Aberdeen",
        ]
        .iter()
        .map(|l| l.to_string())
        .collect();

        let ordered = tiers.order_by_proximity(&locations, "Lorville, Hurston");
        assert_eq!(
            ordered,
            vec![
                "Everus Harbor above Hurston",
                "HDMS-Edmond on Aberdeen",
                "HUR-L1 Green Glade Station",
                "Arial outpost",
                "Orison, Crusader",
            ]
        );
    }

    #[test]
    fn test_group_by_proximity() {
        let tiers = TieredProximity::stanton();
        let groups = tiers.group_by_proximity(
            [
                "Lorville, Hurston",
                "Everus Harbor above Hurston",
                "HUR-L2 Faithful Dream Station",
                "Port Tressler above microTech",
            ],
            "Lorville, Hurston",
        );
        assert_eq!(groups.current, vec!["Lorville, Hurston"]);
        assert_eq!(groups.narrow, vec!["Everus Harbor above Hurston"]);
        assert_eq!(groups.wide, vec!["HUR-L2 Faithful Dream Station"]);
        assert_eq!(groups.far, vec!["Port Tressler above microTech"]);
    }

    #[test]
    fn test_custom_systems() {
        let tiers = TieredProximity::new(vec![PlanetSystem::new("Terra", Some("TER"), &["Luna"])]);
        assert_eq!(tiers.proximity("Luna Base", "TER-L1"), TIER_WIDE);
        assert_eq!(tiers.systems().len(), 1);
    }
}
