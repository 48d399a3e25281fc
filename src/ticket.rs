//! Core ticket entity and timestamp types
use crate::catalog::FareClass;
use chrono::{DateTime, TimeZone, Utc};

/// Where a ticket sits in its lifecycle. `Saved` is terminal; expiry is
/// derived from the validity window at read time, never stored.
#[derive(minicbor::Encode, minicbor::Decode, Debug, Clone, Copy, Eq, PartialEq)]
pub enum TicketStatus {
    #[n(0)]
    Issued,
    #[n(1)]
    Saved,
}

// Stored CBOR-encoded in the rider's ticket store, keyed by insertion order.
#[derive(minicbor::Encode, minicbor::Decode, Debug, Clone, Eq, PartialEq)]
pub struct Ticket {
    #[n(0)]
    pub id: String,
    #[n(1)]
    pub route_label: String, // copied verbatim from the rider's selection
    #[n(2)]
    pub fare_class: FareClass,
    #[n(3)]
    pub price: String, // currency-formatted, fixed at issuance
    #[n(4)]
    pub valid_from: TimeStamp<Utc>,
    #[n(5)]
    pub valid_until: TimeStamp<Utc>,
    #[n(6)]
    pub status: TicketStatus,
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone)]
pub struct TimeStamp<T: TimeZone>(DateTime<T>);

impl TimeStamp<Utc> {
    pub fn new() -> Self {
        Self(Utc::now())
    }
    pub fn new_with(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Self {
        Utc.with_ymd_and_hms(year, month, day, hour, min, sec)
            .unwrap()
            .into()
    }
    pub fn to_datetime_utc(&self) -> DateTime<Utc> {
        self.0
    }
}

impl Ticket {
    /// Derived validity predicate: `valid_from <= now <= valid_until`.
    /// Both window ends are inclusive.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.valid_from.to_datetime_utc() <= now && now <= self.valid_until.to_datetime_utc()
    }
}

impl<T: TimeZone> From<DateTime<T>> for TimeStamp<T> {
    fn from(value: DateTime<T>) -> Self {
        TimeStamp(value)
    }
}

impl<C> minicbor::Encode<C> for TimeStamp<Utc> {
    fn encode<W: minicbor::encode::Write>(
        &self,
        e: &mut minicbor::Encoder<W>,
        _: &mut C,
    ) -> Result<(), minicbor::encode::Error<W::Error>> {
        if let Some(nsec) = self.0.timestamp_nanos_opt() {
            return e.i64(nsec)?.ok();
        }

        Err(minicbor::encode::Error::message(
            "failed to encode timestamp. timestamp_nanos_opt returned None",
        ))
    }
}

impl<'b, C> minicbor::Decode<'b, C> for TimeStamp<Utc> {
    fn decode(d: &mut minicbor::Decoder<'b>, _: &mut C) -> Result<Self, minicbor::decode::Error> {
        let nsecs = d.i64()?;

        Ok(TimeStamp(DateTime::from_timestamp_nanos(nsecs)))
    }
}
