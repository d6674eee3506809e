use super::{ValidationError, non_negative};

/// A sellable unit, characterized by its weight.
///
/// The price and leftover value of an item are not stored; they are derived
/// from the weight by a [`Pricing`](super::Pricing).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawItem", into = "RawItem")
)]
pub struct Item {
    weight: f64,
}

impl Item {
    /// Creates a new item, rejecting NaN, infinite or negative weights.
    pub fn new(weight: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            weight: non_negative("weight", weight)?,
        })
    }

    /// The weight of the item
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawItem {
    weight: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawItem> for Item {
    type Error = ValidationError;

    fn try_from(value: RawItem) -> Result<Self, Self::Error> {
        Item::new(value.weight)
    }
}

#[cfg(feature = "serde")]
impl From<Item> for RawItem {
    fn from(value: Item) -> Self {
        Self {
            weight: value.weight,
        }
    }
}
