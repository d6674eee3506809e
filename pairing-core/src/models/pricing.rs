use super::{Item, Requester, ValidationError};

/// The price-per-unit model shared by every valuation.
///
/// `unit_price` converts weight into currency. `leftover_fraction` is the salvage value of an
/// unsold item relative to its full price: 0.0 means no value, 0.5 half of the price,
/// and 1.0 a value equal to the price.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pricing {
    unit_price: f64,
    leftover_fraction: f64,
}

impl Pricing {
    /// Creates a new pricing model.
    ///
    /// `unit_price` must be finite and strictly positive, and `leftover_fraction` must lie in [0, 1].
    pub fn new(unit_price: f64, leftover_fraction: f64) -> Result<Self, ValidationError> {
        if unit_price.is_nan() {
            return Err(ValidationError::NAN("unit_price"));
        } else if unit_price.is_infinite() {
            return Err(ValidationError::INFINITY("unit_price"));
        } else if unit_price <= 0.0 {
            return Err(ValidationError::NONPOSITIVE("unit_price", unit_price));
        }

        if leftover_fraction.is_nan() {
            Err(ValidationError::NAN("leftover_fraction"))
        } else if !(0.0..=1.0).contains(&leftover_fraction) {
            Err(ValidationError::FRACTION(
                "leftover_fraction",
                leftover_fraction,
            ))
        } else {
            Ok(Self {
                unit_price,
                leftover_fraction,
            })
        }
    }

    /// The currency per unit of weight
    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    /// The salvage value of an unsold item, relative to its price
    pub fn leftover_fraction(&self) -> f64 {
        self.leftover_fraction
    }

    /// The price of a given weight
    pub fn price(&self, weight: f64) -> f64 {
        weight * self.unit_price
    }

    /// The full price of an item
    pub fn item_price(&self, item: &Item) -> f64 {
        self.price(item.weight())
    }

    /// The value of an item if it is not sold
    pub fn leftover_value(&self, item: &Item) -> f64 {
        self.item_price(item) * self.leftover_fraction
    }

    /// The price of the requester's target weight.
    ///
    /// Depending on the negotiation policy, this is read as the most the requester
    /// is willing to pay or as the requester's ideal price.
    pub fn willingness(&self, requester: &Requester) -> f64 {
        self.price(requester.target_weight())
    }
}

impl Default for Pricing {
    fn default() -> Self {
        Self {
            unit_price: 1.0,
            leftover_fraction: 0.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn defaults() {
        let pricing = Pricing::default();
        assert_eq!(pricing.unit_price(), 1.0);
        assert_eq!(pricing.leftover_fraction(), 0.5);
    }

    #[test]
    fn derived_values() {
        let pricing = Pricing::new(2.5, 0.25).unwrap();
        let item = Item::new(4.0).unwrap();
        let requester = Requester::new("A", 3.0, "").unwrap();

        assert_relative_eq!(pricing.item_price(&item), 10.0);
        assert_relative_eq!(pricing.leftover_value(&item), 2.5);
        assert_relative_eq!(pricing.willingness(&requester), 7.5);
    }

    #[rstest]
    #[case(0.0, 0.5, ValidationError::NONPOSITIVE("unit_price", 0.0))]
    #[case(-1.0, 0.5, ValidationError::NONPOSITIVE("unit_price", -1.0))]
    #[case(f64::INFINITY, 0.5, ValidationError::INFINITY("unit_price"))]
    #[case(1.0, 1.5, ValidationError::FRACTION("leftover_fraction", 1.5))]
    #[case(1.0, -0.1, ValidationError::FRACTION("leftover_fraction", -0.1))]
    fn rejects_invalid(
        #[case] unit_price: f64,
        #[case] leftover_fraction: f64,
        #[case] error: ValidationError,
    ) {
        assert_eq!(Pricing::new(unit_price, leftover_fraction).unwrap_err(), error);
    }

    #[rstest]
    #[case(0.0)]
    #[case(1.0)]
    fn fraction_bounds_are_inclusive(#[case] leftover_fraction: f64) {
        assert!(Pricing::new(1.0, leftover_fraction).is_ok());
    }
}
