use serde::{Deserialize, Serialize};

use crate::tier::RoomNumber;

/// Guest bundle supplied by the front desk at check-in.
///
/// Dates and contact are opaque strings; nothing here is validated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestDetails {
    pub name: String,
    pub surname: String,
    /// Check-in date as entered, e.g. `DD/MM/YYYY`.
    pub check_in: String,
    /// Check-out date as entered.
    pub check_out: String,
    pub guests: u32,
    pub contact: String,
    /// Length of stay used for billing.
    pub days: u32,
}

/// Read-only view of a room's current occupant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestView {
    pub room: RoomNumber,
    pub name: String,
    pub surname: String,
    pub check_in: String,
    pub check_out: String,
    pub guests: u32,
    pub contact: String,
}

impl GuestView {
    pub fn new(room: RoomNumber, details: &GuestDetails) -> Self {
        Self {
            room,
            name: details.name.clone(),
            surname: details.surname.clone(),
            check_in: details.check_in.clone(),
            check_out: details.check_out.clone(),
            guests: details.guests,
            contact: details.contact.clone(),
        }
    }
}

/// One row of the guest list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupantSummary {
    pub name: String,
    pub surname: String,
    pub room: RoomNumber,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details() -> GuestDetails {
        GuestDetails {
            name: "Asha".into(),
            surname: "Rao".into(),
            check_in: "01/02/2024".into(),
            check_out: "04/02/2024".into(),
            guests: 2,
            contact: "9876543210".into(),
            days: 3,
        }
    }

    #[test]
    fn view_copies_everything_but_days() {
        let view = GuestView::new(4, &details());
        assert_eq!(view.room, 4);
        assert_eq!(view.name, "Asha");
        assert_eq!(view.check_out, "04/02/2024");
        assert_eq!(view.guests, 2);
        assert_eq!(view.contact, "9876543210");
    }
}
