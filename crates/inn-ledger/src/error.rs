use inn_types::{RoomNumber, Tier};

/// Errors produced by ledger operations.
///
/// Every variant except `LockPoisoned` is a caller-input problem and leaves
/// the ledger unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("room {room} is occupied")]
    RoomOccupied { room: RoomNumber },

    #[error("invalid room choice: room {room} is not a {tier} room")]
    InvalidRoom { tier: Tier, room: RoomNumber },

    #[error("room {room} is unoccupied")]
    RoomVacant { room: RoomNumber },

    #[error("ledger lock poisoned")]
    LockPoisoned,

    #[error("invalid configuration: {0}")]
    Config(String),
}
