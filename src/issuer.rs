//! Ticket issuance: id generation and validity-window computation
use crate::catalog::{self, FareClass};
use crate::ticket::{Ticket, TicketStatus};
use chrono::{DateTime, Utc};

pub const ID_PREFIX: &str = "TICKET-";

// Serials start in the five-digit range so ids read like TICKET-10458.
const FIRST_SERIAL: u32 = 10_000;

/// Hands out tickets with session-unique ids. The serial counter is the
/// only state; issuance itself never fails.
#[derive(Debug)]
pub struct TicketIssuer {
    next_serial: u32,
}

impl TicketIssuer {
    pub fn new() -> Self {
        Self::starting_at(FIRST_SERIAL)
    }

    /// Pin the first serial, for tests or hosts resuming a sequence.
    pub fn starting_at(serial: u32) -> Self {
        Self {
            next_serial: serial,
        }
    }

    /// Issue a new ticket for the given route selection and fare class,
    /// anchored to the injected issuance time.
    pub fn issue(&mut self, route_label: &str, fare_class: FareClass, now: DateTime<Utc>) -> Ticket {
        let serial = self.next_serial;
        self.next_serial += 1;

        let id = format!("{ID_PREFIX}{serial}");
        let valid_until = now + catalog::duration_of(fare_class);

        tracing::debug!(%id, route = route_label, "issued ticket");

        Ticket {
            id,
            route_label: route_label.to_string(),
            fare_class,
            price: catalog::price_of(fare_class).to_string(),
            valid_from: now.into(),
            valid_until: valid_until.into(),
            status: TicketStatus::Issued,
        }
    }
}

impl Default for TicketIssuer {
    fn default() -> Self {
        Self::new()
    }
}
