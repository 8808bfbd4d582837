use serde::{Deserialize, Serialize};

use crate::tier::{RoomNumber, Tier};

/// Vacant rooms per tier, each list ascending.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    pub non_ac: Vec<RoomNumber>,
    pub ac: Vec<RoomNumber>,
    pub premium: Vec<RoomNumber>,
}

impl Availability {
    pub fn for_tier(&self, tier: Tier) -> &[RoomNumber] {
        match tier {
            Tier::NonAc => &self.non_ac,
            Tier::Ac => &self.ac,
            Tier::Premium => &self.premium,
        }
    }

    pub fn for_tier_mut(&mut self, tier: Tier) -> &mut Vec<RoomNumber> {
        match tier {
            Tier::NonAc => &mut self.non_ac,
            Tier::Ac => &mut self.ac,
            Tier::Premium => &mut self.premium,
        }
    }

    /// Total number of vacant rooms across all tiers.
    pub fn vacant_count(&self) -> usize {
        self.non_ac.len() + self.ac.len() + self.premium.len()
    }

    pub fn contains(&self, room: RoomNumber) -> bool {
        Tier::of_room(room).is_some_and(|tier| self.for_tier(tier).contains(&room))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_tier() {
        let availability = Availability {
            non_ac: vec![6, 9],
            ac: vec![],
            premium: vec![15],
        };
        assert_eq!(availability.for_tier(Tier::NonAc), &[6, 9]);
        assert!(availability.for_tier(Tier::Ac).is_empty());
        assert_eq!(availability.vacant_count(), 3);
        assert!(availability.contains(9));
        assert!(!availability.contains(1));
        assert!(!availability.contains(99));
    }
}
