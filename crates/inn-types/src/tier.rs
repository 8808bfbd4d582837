use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// 1-based room number as printed on the door.
pub type RoomNumber = u16;

/// Number of rooms in the hotel. Fixed for the lifetime of a ledger.
pub const ROOM_COUNT: usize = 15;

/// Room category.
///
/// Each tier owns a contiguous, non-overlapping block of five room numbers.
/// Membership is a pure function of the room number and never changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tier {
    /// Rooms 6–10.
    NonAc,
    /// Rooms 1–5.
    Ac,
    /// Rooms 11–15.
    Premium,
}

impl Tier {
    /// All tiers in listing order.
    pub const ALL: [Tier; 3] = [Tier::NonAc, Tier::Ac, Tier::Premium];

    /// Room numbers owned by this tier.
    pub fn rooms(self) -> RangeInclusive<RoomNumber> {
        match self {
            Self::Ac => 1..=5,
            Self::NonAc => 6..=10,
            Self::Premium => 11..=15,
        }
    }

    /// Whether `room` belongs to this tier.
    pub fn contains(self, room: RoomNumber) -> bool {
        self.rooms().contains(&room)
    }

    /// The tier owning `room`, or `None` if the hotel has no such room.
    pub fn of_room(room: RoomNumber) -> Option<Tier> {
        Self::ALL.into_iter().find(|tier| tier.contains(room))
    }

    /// Numeric selector used by the front desk form (1, 2 or 3).
    pub fn selector(self) -> u8 {
        match self {
            Self::NonAc => 1,
            Self::Ac => 2,
            Self::Premium => 3,
        }
    }

    /// Resolve a front desk selector.
    pub fn from_selector(selector: u8) -> Result<Tier, TypeError> {
        match selector {
            1 => Ok(Self::NonAc),
            2 => Ok(Self::Ac),
            3 => Ok(Self::Premium),
            other => Err(TypeError::InvalidSelector(other)),
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::NonAc => "Non-AC",
            Self::Ac => "AC",
            Self::Premium => "Premium",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Tier {
    type Err = TypeError;

    /// Accepts a selector digit or a tier name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(selector) = trimmed.parse::<u8>() {
            return Self::from_selector(selector);
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "non-ac" | "nonac" | "non_ac" => Ok(Self::NonAc),
            "ac" => Ok(Self::Ac),
            "premium" => Ok(Self::Premium),
            _ => Err(TypeError::UnknownTier(s.to_string())),
        }
    }
}
