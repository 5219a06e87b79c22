//! Route stops.

use serde::{Deserialize, Serialize};

use crate::objective::{total_scu, Objective};

/// One visited location in a route, with the cargo moved there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stop {
    /// 1-based position in the route.
    pub stop_number: usize,

    pub location: String,

    /// Objectives loaded here.
    pub pickups: Vec<Objective>,

    /// Objectives unloaded here.
    pub deliveries: Vec<Objective>,

    /// SCU in the hold on arrival.
    pub cargo_before: u64,

    /// SCU in the hold on departure.
    pub cargo_after: u64,
}

impl Stop {
    /// SCU loaded at this stop.
    pub fn scu_picked_up(&self) -> u64 {
        total_scu(&self.pickups)
    }

    /// SCU unloaded at this stop.
    pub fn scu_delivered(&self) -> u64 {
        total_scu(&self.deliveries)
    }

    /// True if this stop only unloads cargo.
    pub fn is_delivery_only(&self) -> bool {
        self.pickups.is_empty() && !self.deliveries.is_empty()
    }

    /// True if this stop only loads cargo.
    pub fn is_pickup_only(&self) -> bool {
        self.deliveries.is_empty() && !self.pickups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objective::ObjectiveId;

    fn objective(id: usize, scu_amount: u32) -> Objective {
        Objective {
            id: ObjectiveId(id),
            mission_id: None,
            collect_from: "A".into(),
            deliver_to: "B".into(),
            scu_amount,
            reward: 0,
        }
    }

    #[test]
    fn test_stop_totals() {
        let stop = Stop {
            stop_number: 2,
            location: "B".into(),
            pickups: vec![objective(2, 8)],
            deliveries: vec![objective(0, 10), objective(1, 6)],
            cargo_before: 16,
            cargo_after: 8,
        };
        assert_eq!(stop.scu_picked_up(), 8);
        assert_eq!(stop.scu_delivered(), 16);
        assert!(!stop.is_delivery_only());
        assert!(!stop.is_pickup_only());
    }
}
