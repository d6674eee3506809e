use super::{NegotiationPolicy, Pricing, Valuation};

/// Pairing takes place within a context. This config describes this context.
///
/// It is set once at startup and is immutable thereafter.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawConfig", into = "RawConfig")
)]
pub struct Config {
    /// The price-per-unit model
    pub pricing: Pricing,
    /// The negotiation rule used to agree on prices
    pub policy: NegotiationPolicy,
}

impl Config {
    /// The valuation described by this config
    pub fn valuation(&self) -> Valuation {
        Valuation::new(self.pricing, self.policy)
    }
}

// To seamlessly (de)serialize, we create a "raw" version of our struct
// that contains only primitive values. We tell Serde to use the raw version
// to handle (de)serialization, then call .try_into() to get our validated version.

/// The flat, unvalidated representation of a [`Config`]
#[cfg(feature = "serde")]
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct RawConfig {
    /// Currency per unit of weight
    #[serde(default = "default_unit_price")]
    pub unit_price: f64,
    /// Salvage value of an unsold item, relative to its price
    #[serde(default = "default_leftover_fraction")]
    pub leftover_fraction: f64,
    /// The negotiation rule
    #[serde(default)]
    pub policy: NegotiationPolicy,
}

#[cfg(feature = "serde")]
fn default_unit_price() -> f64 {
    Pricing::default().unit_price()
}

#[cfg(feature = "serde")]
fn default_leftover_fraction() -> f64 {
    Pricing::default().leftover_fraction()
}

#[cfg(feature = "serde")]
impl TryFrom<RawConfig> for Config {
    type Error = super::ValidationError;

    fn try_from(value: RawConfig) -> Result<Self, Self::Error> {
        Ok(Self {
            pricing: Pricing::new(value.unit_price, value.leftover_fraction)?,
            policy: value.policy,
        })
    }
}

#[cfg(feature = "serde")]
impl From<Config> for RawConfig {
    fn from(value: Config) -> Self {
        Self {
            unit_price: value.pricing.unit_price(),
            leftover_fraction: value.pricing.leftover_fraction(),
            policy: value.policy,
        }
    }
}
