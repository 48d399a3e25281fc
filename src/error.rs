#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("No fare class selected")]
    MissingFare,
    #[error("Route label is empty")]
    EmptyRouteLabel,
    #[error("A purchase is already in flight")]
    PurchaseInFlight,
    #[error("Field '{0}' contains the payload delimiter ':'")]
    DelimiterInField(&'static str),
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Payload does not start with the '{expected}' marker")]
    BadMarker { expected: &'static str },
    #[error("Payload has fewer fields than expected")]
    MissingFields,
    #[error("Payload field '{0}' is empty")]
    EmptyField(&'static str),
    #[error("Payload timestamp is not valid RFC 3339: {0}")]
    BadTimestamp(String),
}
