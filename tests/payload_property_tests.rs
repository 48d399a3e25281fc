//! Property-based tests for the scannable payload codec
//!
//! This module uses the proptest crate to verify the codec's wire contract
//! across a wide range of generated tickets and malformed inputs. The codec
//! is the one boundary an external scanner depends on, so the round-trip
//! and rejection laws must hold for ALL inputs, not just specific cases.

use proptest::prelude::*;
use transit_ticketing::{
    catalog::FareClass,
    payload,
    ticket::{Ticket, TicketStatus, TimeStamp},
};

// PROPERTY TEST STRATEGIES

/// Strategy to generate random FareClass values
fn fare_class_strategy() -> impl Strategy<Value = FareClass> {
    prop::bool::ANY.prop_map(|b| if b { FareClass::Single } else { FareClass::Day })
}

/// Strategy to generate ticket ids in the issuer's format
fn ticket_id_strategy() -> impl Strategy<Value = String> {
    (10_000u32..=99_999).prop_map(|serial| format!("TICKET-{}", serial))
}

/// Strategy to generate route labels free of the payload delimiter
fn route_label_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9][A-Za-z0-9 .-]{0,29}"
}

/// Strategy to generate issuance timestamps at second precision
fn timestamp_strategy() -> impl Strategy<Value = TimeStamp<chrono::Utc>> {
    (2020i32..=2030, 1u32..=12, 1u32..=28, 0u32..=23, 0u32..=59, 0u32..=59)
        .prop_map(|(year, month, day, hour, min, sec)| {
            TimeStamp::new_with(year, month, day, hour, min, sec)
        })
}

/// Strategy to generate well-formed tickets
fn ticket_strategy() -> impl Strategy<Value = Ticket> {
    (
        ticket_id_strategy(),
        route_label_strategy(),
        fare_class_strategy(),
        timestamp_strategy(),
    )
        .prop_map(|(id, route_label, fare_class, valid_from)| {
            let until = valid_from.to_datetime_utc() + chrono::Duration::hours(2);
            Ticket {
                id,
                route_label,
                fare_class,
                price: "$2.40".to_string(),
                valid_from,
                valid_until: until.into(),
                status: TicketStatus::Issued,
            }
        })
}

// PROPERTY TESTS
proptest! {
    /// Property: decode(encode(ticket)) recovers exactly the ticket's identity
    ///
    /// This is the round-trip law the boarding scanner relies on. For every
    /// well-formed ticket the recovered identity must equal the original's
    /// (id, route_label, valid_from) triple.
    #[test]
    fn prop_roundtrip_recovers_identity(ticket in ticket_strategy()) {
        let token = payload::encode(&ticket).unwrap();
        let identity = payload::decode(&token).unwrap();

        prop_assert_eq!(&identity.id, &ticket.id);
        prop_assert_eq!(&identity.route_label, &ticket.route_label);
        prop_assert_eq!(&identity.valid_from, &ticket.valid_from);
    }

    /// Property: the encoded token always starts with the fixed marker
    /// followed by the delimiter
    #[test]
    fn prop_encoded_token_carries_marker(ticket in ticket_strategy()) {
        let token = payload::encode(&ticket).unwrap();

        prop_assert!(token.starts_with("BUSTICKET:"));
    }

    /// Property: content without the marker is always rejected
    ///
    /// A scanner sees arbitrary QR content; anything that does not open with
    /// the marker must come back as a typed error, never a partial identity.
    #[test]
    fn prop_unmarked_content_is_rejected(content in "\\PC{0,60}") {
        prop_assume!(!content.starts_with("BUSTICKET"));

        prop_assert!(payload::decode(&content).is_err());
    }

    /// Property: dropping the timestamp field always yields MissingFields
    #[test]
    fn prop_truncated_payloads_are_rejected(
        id in ticket_id_strategy(),
        route_label in route_label_strategy()
    ) {
        let truncated = format!("BUSTICKET:{}:{}", id, route_label);

        prop_assert!(payload::decode(&truncated).is_err());
    }

    /// Property: a tampered marker never decodes
    #[test]
    fn prop_tampered_marker_is_rejected(ticket in ticket_strategy()) {
        let token = payload::encode(&ticket).unwrap();
        let tampered = token.replacen("BUSTICKET", "busticket", 1);

        prop_assert!(payload::decode(&tampered).is_err());
    }

    /// Property: a route label carrying the delimiter is refused at encode
    /// time, before a malformed token can ever reach a scanner
    #[test]
    fn prop_delimiter_bearing_labels_refused(
        mut ticket in ticket_strategy(),
        prefix in "[A-Za-z0-9 ]{0,10}",
        suffix in "[A-Za-z0-9 ]{0,10}"
    ) {
        ticket.route_label = format!("{}:{}", prefix, suffix);

        prop_assert!(payload::encode(&ticket).is_err());
    }
}
