use super::{Item, Pricing, Requester};
use crate::ports::Negotiate;
use std::{fmt, str::FromStr};
use thiserror::Error;

/// The built-in negotiation rules.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum NegotiationPolicy {
    /// The requester pays the lesser of what they are willing to pay and the item's price.
    #[default]
    MinOfWillingness,
    /// An undersized item (target above its weight) sells at its price; otherwise the
    /// requester and seller split the difference between the ideal price and the item's price.
    Midpoint,
}

impl Negotiate for NegotiationPolicy {
    fn agreed_price(&self, pricing: &Pricing, requester: &Requester, item: &Item) -> f64 {
        let price = pricing.item_price(item);
        match self {
            Self::MinOfWillingness => pricing.willingness(requester).min(price),
            Self::Midpoint => {
                if requester.target_weight() > item.weight() {
                    price
                } else {
                    (pricing.willingness(requester) + price) / 2.0
                }
            }
        }
    }
}

impl fmt::Display for NegotiationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (match self {
            Self::MinOfWillingness => "min-of-willingness",
            Self::Midpoint => "midpoint",
        })
        .fmt(f)
    }
}

impl FromStr for NegotiationPolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "min-of-willingness" | "min" => Ok(Self::MinOfWillingness),
            "midpoint" => Ok(Self::Midpoint),
            _ => Err(UnknownPolicy(s.to_owned())),
        }
    }
}

/// Error when parsing a policy name that does not exist
#[derive(Debug, Error, PartialEq)]
#[error("Unknown negotiation policy: {0}")]
pub struct UnknownPolicy(pub String);
