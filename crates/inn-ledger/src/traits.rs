use inn_types::{
    Availability, BillDetails, GuestDetails, GuestView, OccupantSummary, RoomNumber, Tier,
};

use crate::error::LedgerError;

/// Write boundary: the only two transitions a room can take.
pub trait LedgerWriter: Send + Sync {
    /// Vacant -> occupied.
    fn check_in(
        &self,
        tier: Tier,
        room: RoomNumber,
        details: GuestDetails,
    ) -> Result<(), LedgerError>;

    /// Occupied -> vacant, returning the finalized bill.
    fn check_out(&self, room: RoomNumber) -> Result<BillDetails, LedgerError>;
}

/// Read boundary for availability and occupant queries.
pub trait LedgerReader: Send + Sync {
    fn list_available(&self) -> Result<Availability, LedgerError>;

    fn search(&self, room: RoomNumber) -> Result<GuestView, LedgerError>;

    fn list_occupied(&self) -> Result<Vec<OccupantSummary>, LedgerError>;
}
