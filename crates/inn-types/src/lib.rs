//! Foundation types for the inn ledger.
//!
//! The hotel has a fixed inventory of fifteen rooms split into three
//! contiguous tiers. Every other inn crate depends on `inn-types`.
//!
//! # Key Types
//!
//! - [`Tier`] — Room category owning a fixed range of room numbers
//! - [`GuestDetails`] — Caller-supplied bundle attached at check-in
//! - [`GuestView`] — Read-only view of the current occupant
//! - [`BillDetails`] — Charge snapshot produced at check-out
//! - [`OccupantSummary`] — One row of the guest list
//! - [`Availability`] — Vacant rooms per tier

pub mod availability;
pub mod bill;
pub mod error;
pub mod guest;
pub mod tier;

pub use availability::Availability;
pub use bill::BillDetails;
pub use error::TypeError;
pub use guest::{GuestDetails, GuestView, OccupantSummary};
pub use tier::{RoomNumber, Tier, ROOM_COUNT};
