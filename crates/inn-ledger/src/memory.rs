use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use inn_types::{
    Availability, BillDetails, GuestDetails, GuestView, OccupantSummary, RoomNumber, Tier,
    ROOM_COUNT,
};
use tracing::debug;

use crate::billing::settle;
use crate::config::LedgerConfig;
use crate::error::LedgerError;
use crate::traits::{LedgerReader, LedgerWriter};

/// In-memory room ledger.
///
/// Owns the fifteen room records behind a single lock. Each operation holds
/// the lock for its entire read-then-write, so concurrent callers see the
/// operations as atomic.
pub struct InMemoryLedger {
    config: LedgerConfig,
    inner: RwLock<RoomTable>,
}

struct RoomTable {
    rooms: [RoomRecord; ROOM_COUNT],
}

#[derive(Default)]
struct RoomRecord {
    stay: Option<Stay>,
    last_bill: Option<BillDetails>,
}

/// Everything attached to a room while it is occupied.
struct Stay {
    tier: Tier,
    rate: f64,
    guest: GuestDetails,
}

impl RoomTable {
    fn new() -> Self {
        Self {
            rooms: std::array::from_fn(|_| RoomRecord::default()),
        }
    }

    fn get(&self, room: RoomNumber) -> Option<&RoomRecord> {
        slot(room).and_then(|index| self.rooms.get(index))
    }

    fn get_mut(&mut self, room: RoomNumber) -> Option<&mut RoomRecord> {
        slot(room).and_then(|index| self.rooms.get_mut(index))
    }

    fn occupied(&self) -> impl Iterator<Item = (RoomNumber, &Stay)> {
        self.rooms
            .iter()
            .zip(1..)
            .filter_map(|(record, room)| record.stay.as_ref().map(|stay| (room, stay)))
    }
}

/// 1-based room number to table index.
fn slot(room: RoomNumber) -> Option<usize> {
    let index = usize::from(room).checked_sub(1)?;
    (index < ROOM_COUNT).then_some(index)
}

impl InMemoryLedger {
    pub fn new(config: LedgerConfig) -> Self {
        Self {
            config,
            inner: RwLock::new(RoomTable::new()),
        }
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Per-day rate a new check-in into `tier` would be charged.
    pub fn rate(&self, tier: Tier) -> f64 {
        self.config.tariff.rate(tier)
    }

    /// Bill produced by the most recent check-out of `room`, if any.
    pub fn last_bill(&self, room: RoomNumber) -> Result<Option<BillDetails>, LedgerError> {
        let table = self.read_table()?;
        Ok(table.get(room).and_then(|record| record.last_bill.clone()))
    }

    fn read_table(&self) -> Result<RwLockReadGuard<'_, RoomTable>, LedgerError> {
        self.inner.read().map_err(|_| LedgerError::LockPoisoned)
    }

    fn write_table(&self) -> Result<RwLockWriteGuard<'_, RoomTable>, LedgerError> {
        self.inner.write().map_err(|_| LedgerError::LockPoisoned)
    }
}

impl Default for InMemoryLedger {
    fn default() -> Self {
        Self::new(LedgerConfig::default())
    }
}

impl LedgerWriter for InMemoryLedger {
    fn check_in(
        &self,
        tier: Tier,
        room: RoomNumber,
        details: GuestDetails,
    ) -> Result<(), LedgerError> {
        let mut table = self.write_table()?;

        let Some(record) = table.get_mut(room) else {
            return Err(LedgerError::InvalidRoom { tier, room });
        };
        if record.stay.is_some() {
            return Err(LedgerError::RoomOccupied { room });
        }
        if !tier.contains(room) {
            return Err(LedgerError::InvalidRoom { tier, room });
        }

        let rate = self.config.tariff.rate(tier);
        debug!(room, %tier, rate, days = details.days, "guest checked in");
        record.stay = Some(Stay {
            tier,
            rate,
            guest: details,
        });
        Ok(())
    }

    fn check_out(&self, room: RoomNumber) -> Result<BillDetails, LedgerError> {
        let mut table = self.write_table()?;

        let record = table.get_mut(room).ok_or(LedgerError::RoomVacant { room })?;
        let stay = record.stay.take().ok_or(LedgerError::RoomVacant { room })?;

        let charges = settle(stay.rate, stay.guest.days, self.config.tax_rate);
        let bill = BillDetails {
            room,
            tier: stay.tier,
            name: stay.guest.name,
            surname: stay.guest.surname,
            days: stay.guest.days,
            rate: stay.rate,
            subtotal: charges.subtotal,
            tax: charges.tax,
            total: charges.total,
        };
        debug!(room, days = bill.days, total = bill.total, "guest checked out");
        record.last_bill = Some(bill.clone());
        Ok(bill)
    }
}

impl LedgerReader for InMemoryLedger {
    fn list_available(&self) -> Result<Availability, LedgerError> {
        let table = self.read_table()?;
        let mut availability = Availability::default();

        for tier in Tier::ALL {
            let vacant = tier
                .rooms()
                .filter(|room| table.get(*room).is_some_and(|record| record.stay.is_none()));
            availability.for_tier_mut(tier).extend(vacant);
        }

        Ok(availability)
    }

    fn search(&self, room: RoomNumber) -> Result<GuestView, LedgerError> {
        let table = self.read_table()?;
        table
            .get(room)
            .and_then(|record| record.stay.as_ref())
            .map(|stay| GuestView::new(room, &stay.guest))
            .ok_or(LedgerError::RoomVacant { room })
    }

    fn list_occupied(&self) -> Result<Vec<OccupantSummary>, LedgerError> {
        let table = self.read_table()?;
        Ok(table
            .occupied()
            .map(|(room, stay)| OccupantSummary {
                name: stay.guest.name.clone(),
                surname: stay.guest.surname.clone(),
                room,
            })
            .collect())
    }
}
