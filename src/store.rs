//! The rider's saved-ticket collection
use crate::ticket::{Ticket, TicketStatus};
use chrono::{DateTime, Utc};
use sled::Db;
use std::sync::Arc;

/// Sole authority for the rider's saved tickets. Tickets are appended under
/// monotonic keys so `list` preserves insertion order; a saved ticket is
/// never mutated or deleted afterwards.
pub struct TicketStore {
    instance: Arc<Db>,
}

impl TicketStore {
    pub fn new(instance: Arc<Db>) -> Self {
        Self { instance }
    }

    /// Commit a ticket to the rider's collection, flipping its status to
    /// `Saved`. Appends unconditionally; calling twice with the same ticket
    /// stores it twice, so the purchase flow must save each ticket once.
    pub fn save(&self, mut ticket: Ticket) -> anyhow::Result<Ticket> {
        ticket.status = TicketStatus::Saved;

        let seq = self.instance.generate_id()?;
        self.instance
            .insert(seq.to_be_bytes(), minicbor::to_vec(&ticket)?)?;

        tracing::info!(id = %ticket.id, "saved ticket to rider collection");

        Ok(ticket)
    }

    /// All saved tickets, oldest first.
    pub fn list(&self) -> anyhow::Result<Vec<Ticket>> {
        let mut tickets = Vec::new();

        for entry in self.instance.iter() {
            let (_, value) = entry?;
            tickets.push(minicbor::decode(value.as_ref())?);
        }

        Ok(tickets)
    }

    /// Saved tickets whose validity window contains `now`. Expiry is a
    /// read-time derivation; expired tickets stay in the collection.
    pub fn currently_valid(&self, now: DateTime<Utc>) -> anyhow::Result<Vec<Ticket>> {
        let mut tickets = self.list()?;
        tickets.retain(|ticket| ticket.is_valid_at(now));

        Ok(tickets)
    }

    pub fn len(&self) -> usize {
        self.instance.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instance.is_empty()
    }
}
