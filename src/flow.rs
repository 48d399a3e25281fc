//! Purchase flow state machine
//!
//! Drives a purchase from fare selection through simulated payment
//! settlement to an issued, then saved, ticket. The settlement delay is a
//! deadline checked against the injected clock, so hosts poll it from their
//! event loop and tests advance time by hand.
use crate::catalog::FareClass;
use crate::clock::Clock;
use crate::error::ValidationError;
use crate::issuer::TicketIssuer;
use crate::store::TicketStore;
use crate::ticket::Ticket;
use chrono::{DateTime, Duration, Utc};

// Simulated payment settles after a fixed two-second latency.
const SETTLEMENT_DELAY_SECS: i64 = 2;

/// A purchase accepted but not yet settled. Dropping this cancels the
/// simulated payment; no ticket can be issued from it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSettlement {
    pub route_label: String,
    pub fare_class: FareClass,
    pub settle_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurchaseState {
    /// Picking a route and fare; nothing in flight.
    Selecting,
    /// Simulated payment pending settlement.
    Processing { pending: PendingSettlement },
    /// Ticket issued, held by the flow until saved or discarded.
    Issued { ticket: Ticket },
    /// Ticket committed to the store; a display copy stays here until the
    /// rider starts over.
    Saved { ticket: Ticket },
}

pub struct PurchaseFlow<C: Clock> {
    state: PurchaseState,
    issuer: TicketIssuer,
    clock: C,
    settle_after: Duration,
}

impl<C: Clock> PurchaseFlow<C> {
    pub fn new(clock: C) -> Self {
        Self {
            state: PurchaseState::Selecting,
            issuer: TicketIssuer::new(),
            clock,
            settle_after: Duration::seconds(SETTLEMENT_DELAY_SECS),
        }
    }

    pub fn with_settlement_delay(clock: C, settle_after: Duration) -> Self {
        Self {
            settle_after,
            ..Self::new(clock)
        }
    }

    pub fn state(&self) -> &PurchaseState {
        &self.state
    }

    /// The issued-but-unsaved ticket, when one exists.
    pub fn in_flight(&self) -> Option<&Ticket> {
        match &self.state {
            PurchaseState::Issued { ticket } => Some(ticket),
            _ => None,
        }
    }

    /// Begin a purchase. Only fires from `Selecting`; while a purchase is
    /// pending or a ticket awaits saving the call is rejected with the state
    /// left untouched.
    pub fn purchase(
        &mut self,
        route_label: &str,
        fare_class: Option<FareClass>,
    ) -> Result<(), ValidationError> {
        if self.state != PurchaseState::Selecting {
            return Err(ValidationError::PurchaseInFlight);
        }

        let fare_class = fare_class.ok_or(ValidationError::MissingFare)?;
        if route_label.trim().is_empty() {
            return Err(ValidationError::EmptyRouteLabel);
        }

        let settle_at = self.clock.now() + self.settle_after;
        tracing::debug!(route = route_label, %settle_at, "purchase accepted, awaiting settlement");

        self.state = PurchaseState::Processing {
            pending: PendingSettlement {
                route_label: route_label.to_string(),
                fare_class,
                settle_at,
            },
        };

        Ok(())
    }

    /// Advance the simulated settlement timer. Once the clock reaches the
    /// deadline the pending purchase settles and exactly one ticket is
    /// issued. A no-op in every other state.
    pub fn poll(&mut self) {
        let now = self.clock.now();

        if let PurchaseState::Processing { pending } = &self.state {
            if now >= pending.settle_at {
                let ticket = self
                    .issuer
                    .issue(&pending.route_label, pending.fare_class, now);

                tracing::info!(id = %ticket.id, "payment settled, ticket issued");
                self.state = PurchaseState::Issued { ticket };
            }
        }
    }

    /// Commit the issued ticket to the rider's store. The flow keeps the
    /// saved copy for display; ownership of the record moves to the store.
    pub fn save(&mut self, store: &TicketStore) -> anyhow::Result<()> {
        match &self.state {
            PurchaseState::Issued { ticket } => {
                let saved = store.save(ticket.clone())?;
                self.state = PurchaseState::Saved { ticket: saved };
                Ok(())
            }
            other => Err(anyhow::anyhow!(
                "No issued ticket to save. Current state: {:?}",
                other
            )),
        }
    }

    /// Discard the in-flight purchase and return to fare selection. From
    /// `Processing` this cancels the pending settlement, so the timer can
    /// never resolve into a stale issuance. Saved tickets are unaffected.
    pub fn start_over(&mut self) {
        if let PurchaseState::Processing { pending } = &self.state {
            tracing::debug!(route = %pending.route_label, "cancelled pending settlement");
        }

        self.state = PurchaseState::Selecting;
    }
}
