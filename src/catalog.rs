//! Fare catalog: the two fare classes and their price/duration table
use chrono::Duration;

#[derive(minicbor::Encode, minicbor::Decode, Debug, Clone, Copy, Eq, Ord, PartialEq, PartialOrd)]
pub enum FareClass {
    #[n(0)]
    Single,
    #[n(1)]
    Day,
}

/// Currency-formatted price for a fare class.
pub fn price_of(fare: FareClass) -> &'static str {
    match fare {
        FareClass::Single => "$2.40",
        FareClass::Day => "$7.00",
    }
}

/// How long a ticket of this class stays valid after issuance.
pub fn duration_of(fare: FareClass) -> Duration {
    match fare {
        FareClass::Single => Duration::hours(2),
        FareClass::Day => Duration::hours(24),
    }
}

pub fn display_name(fare: FareClass) -> &'static str {
    match fare {
        FareClass::Single => "Single Ride",
        FareClass::Day => "Day Pass",
    }
}
