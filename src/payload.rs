//! Scannable payload codec
//!
//! The encoded form is the wire contract a boarding-side scanner consumes:
//! `BUSTICKET:<id>:<routeLabel>:<validFromRfc3339>`. The timestamp is the
//! last field, so its RFC 3339 colons never collide with the delimiter.
use crate::error::{ParseError, ValidationError};
use crate::ticket::{Ticket, TimeStamp};
use chrono::{DateTime, Utc};

pub const MARKER: &str = "BUSTICKET";

const DELIMITER: char = ':';

/// The identity a scanner recovers from a payload. Enough to look the
/// ticket up and check its validity window; never a full ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketIdentity {
    pub id: String,
    pub route_label: String,
    pub valid_from: TimeStamp<Utc>,
}

/// Serialize a ticket's identity into the scannable token.
///
/// Ids from the issuer never carry the delimiter, so rejection here is a
/// guard against hand-built tickets rather than an expected path.
pub fn encode(ticket: &Ticket) -> Result<String, ValidationError> {
    if ticket.id.contains(DELIMITER) {
        return Err(ValidationError::DelimiterInField("id"));
    }
    if ticket.route_label.contains(DELIMITER) {
        return Err(ValidationError::DelimiterInField("route_label"));
    }

    Ok(format!(
        "{MARKER}:{}:{}:{}",
        ticket.id,
        ticket.route_label,
        ticket.valid_from.to_datetime_utc().to_rfc3339()
    ))
}

/// Parse a scanned token back into a ticket identity.
pub fn decode(payload: &str) -> Result<TicketIdentity, ParseError> {
    let mut parts = payload.splitn(4, DELIMITER);

    let marker = parts.next().ok_or(ParseError::MissingFields)?;
    if marker != MARKER {
        return Err(ParseError::BadMarker { expected: MARKER });
    }

    let id = parts.next().ok_or(ParseError::MissingFields)?;
    let route_label = parts.next().ok_or(ParseError::MissingFields)?;
    let timestamp = parts.next().ok_or(ParseError::MissingFields)?;

    if id.is_empty() {
        return Err(ParseError::EmptyField("id"));
    }
    if route_label.is_empty() {
        return Err(ParseError::EmptyField("route_label"));
    }

    let valid_from = DateTime::parse_from_rfc3339(timestamp)
        .map_err(|_| ParseError::BadTimestamp(timestamp.to_string()))?
        .with_timezone(&Utc);

    Ok(TicketIdentity {
        id: id.to_string(),
        route_label: route_label.to_string(),
        valid_from: valid_from.into(),
    })
}
