use colored::Colorize;
use inn_ledger::{InMemoryLedger, LedgerError, LedgerReader, LedgerWriter};
use inn_types::{
    Availability, BillDetails, GuestDetails, GuestView, OccupantSummary, RoomNumber, Tier,
};
use serde::Serialize;

use crate::cli::{CheckinArgs, Command};

/// Result of one desk command, ready to be rendered.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    Available(Availability),
    CheckedIn { room: RoomNumber, tier: Tier },
    Occupant(GuestView),
    Bill(BillDetails),
    Guests { guests: Vec<OccupantSummary> },
    Rates { rates: Vec<RateRow>, tax_rate: f64 },
    Closed,
}

#[derive(Debug, Serialize)]
pub struct RateRow {
    pub tier: Tier,
    pub first_room: RoomNumber,
    pub last_room: RoomNumber,
    pub rate: f64,
}

/// Run a desk command against the ledger.
pub fn execute(ledger: &InMemoryLedger, command: Command) -> Result<Outcome, LedgerError> {
    match command {
        Command::Available => ledger.list_available().map(Outcome::Available),
        Command::Checkin(args) => cmd_checkin(ledger, args),
        Command::Search(args) => ledger.search(args.room).map(Outcome::Occupant),
        Command::Checkout(args) => ledger.check_out(args.room).map(Outcome::Bill),
        Command::Guests => ledger
            .list_occupied()
            .map(|guests| Outcome::Guests { guests }),
        Command::Rates => Ok(cmd_rates(ledger)),
        Command::Quit => Ok(Outcome::Closed),
    }
}

fn cmd_checkin(ledger: &InMemoryLedger, args: CheckinArgs) -> Result<Outcome, LedgerError> {
    let details = GuestDetails {
        name: args.name,
        surname: args.surname,
        check_in: args.check_in,
        check_out: args.check_out,
        guests: args.guests,
        contact: args.contact,
        days: args.days,
    };
    ledger.check_in(args.tier, args.room, details)?;
    Ok(Outcome::CheckedIn {
        room: args.room,
        tier: args.tier,
    })
}

fn cmd_rates(ledger: &InMemoryLedger) -> Outcome {
    let rates = Tier::ALL
        .into_iter()
        .map(|tier| RateRow {
            tier,
            first_room: *tier.rooms().start(),
            last_room: *tier.rooms().end(),
            rate: ledger.rate(tier),
        })
        .collect();
    Outcome::Rates {
        rates,
        tax_rate: ledger.config().tax_rate,
    }
}

/// Human-readable rendering, one line per entry.
pub fn render_text(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Available(availability) => Tier::ALL
            .into_iter()
            .map(|tier| {
                format!(
                    "{} rooms: {}",
                    tier.label().bold(),
                    join_rooms(availability.for_tier(tier))
                )
            })
            .collect::<Vec<_>>()
            .join("\n"),
        Outcome::CheckedIn { room, tier } => format!(
            "{} ({tier}, room {room})",
            "Room booked successfully!".green().bold()
        ),
        Outcome::Occupant(view) => [
            format!("Room is occupied by {} {}", view.name.bold(), view.surname.bold()),
            format!("Check-in date: {}", view.check_in),
            format!("Check-out date: {}", view.check_out),
            format!("Number of guests: {}", view.guests),
            format!("Contact number: {}", view.contact),
        ]
        .join("\n"),
        Outcome::Bill(bill) => [
            format!("Guest: {} {}", bill.name.bold(), bill.surname.bold()),
            format!("Days Stayed: {}", bill.days),
            format!("Room Bill: Rs. {}", bill.subtotal),
            format!("GST: Rs. {}", bill.tax),
            format!("Total Bill: {}", format!("Rs. {}", bill.total).green().bold()),
        ]
        .join("\n"),
        Outcome::Guests { guests } if guests.is_empty() => "No guests.".to_string(),
        Outcome::Guests { guests } => guests
            .iter()
            .map(|g| format!("{} {} - Room: {}", g.name, g.surname, g.room))
            .collect::<Vec<_>>()
            .join("\n"),
        Outcome::Rates { rates, tax_rate } => {
            let mut lines: Vec<String> = rates
                .iter()
                .map(|row| {
                    format!(
                        "{:<8} rooms {}-{}  Rs. {}/day",
                        row.tier.label(),
                        row.first_room,
                        row.last_room,
                        row.rate
                    )
                })
                .collect();
            lines.push(format!("GST: {}%", percent(*tax_rate)));
            lines.join("\n")
        }
        Outcome::Closed => "Front desk closed.".to_string(),
    }
}

fn join_rooms(rooms: &[RoomNumber]) -> String {
    if rooms.is_empty() {
        return "none".dimmed().to_string();
    }
    rooms
        .iter()
        .map(RoomNumber::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn percent(rate: f64) -> f64 {
    (rate * 10_000.0).round() / 100.0
}
