use serde::{Deserialize, Serialize};

use crate::tier::{RoomNumber, Tier};

/// Finalized charges for one stay, produced at check-out.
///
/// This is an owned snapshot: later activity on the same room never
/// changes a bill that has already been handed out.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BillDetails {
    pub room: RoomNumber,
    pub tier: Tier,
    pub name: String,
    pub surname: String,
    pub days: u32,
    /// Per-day rate captured at check-in.
    pub rate: f64,
    /// `rate * days`.
    pub subtotal: f64,
    pub tax: f64,
    /// `subtotal + tax`.
    pub total: f64,
}
