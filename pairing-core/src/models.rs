mod config;
mod item;
mod pairing;
mod policy;
mod pricing;
mod requester;
mod valuation;

pub use config::Config;
#[cfg(feature = "serde")]
pub use config::RawConfig;
pub use item::Item;
pub use pairing::{Pairing, PairingError};
pub use policy::{NegotiationPolicy, UnknownPolicy};
pub use pricing::Pricing;
pub use requester::Requester;
pub use valuation::Valuation;

use thiserror::Error;

/// The ways in which a quantity handed to the models may be invalid
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// Error when a value is NaN
    #[error("NaN value encountered for {0}")]
    NAN(&'static str),
    /// Error when a value is infinite
    #[error("Infinite value encountered for {0}")]
    INFINITY(&'static str),
    /// Error when a value that must be non-negative is negative
    #[error("Negative value {1} encountered for {0}")]
    NEGATIVE(&'static str, f64),
    /// Error when a value that must be strictly positive is not
    #[error("Non-positive value {1} encountered for {0}")]
    NONPOSITIVE(&'static str, f64),
    /// Error when a fraction falls outside of [0, 1]
    #[error("Value {1} for {0} is outside of [0, 1]")]
    FRACTION(&'static str, f64),
}

/// Validates that a quantity is finite and non-negative
pub(crate) fn non_negative(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if value.is_nan() {
        Err(ValidationError::NAN(field))
    } else if value.is_infinite() {
        Err(ValidationError::INFINITY(field))
    } else if value < 0.0 {
        Err(ValidationError::NEGATIVE(field, value))
    } else {
        Ok(value)
    }
}
