//! Room ledger for a fixed fifteen-room hotel.
//!
//! This crate owns every state transition of the hotel. It provides:
//! - `LedgerReader` / `LedgerWriter` trait boundaries
//! - `InMemoryLedger`, the single-lock room table used by the front desk
//! - Check-out billing with a configurable tariff and tax rate
//! - `LedgerConfig`, loadable from TOML

pub mod billing;
pub mod config;
pub mod error;
pub mod memory;
pub mod traits;

pub use billing::{settle, Charges};
pub use config::{LedgerConfig, Tariff};
pub use error::LedgerError;
pub use memory::InMemoryLedger;
pub use traits::{LedgerReader, LedgerWriter};
