use super::{Item, NegotiationPolicy, Pricing, Requester};
use crate::ports::Negotiate;

/// A pricing model together with the rule used to agree on a price.
///
/// This is what the evaluator and the solvers consume. The rule is generic so that
/// ad-hoc closures may be injected in place of a [`NegotiationPolicy`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Valuation<R = NegotiationPolicy> {
    /// The price-per-unit model
    pub pricing: Pricing,
    /// The negotiation rule
    pub rule: R,
}

impl<R: Negotiate> Valuation<R> {
    /// Bundles a pricing model and a negotiation rule
    pub fn new(pricing: Pricing, rule: R) -> Self {
        Self { pricing, rule }
    }

    /// The price realized when `item` is sold to `requester`
    pub fn agreed_price(&self, requester: &Requester, item: &Item) -> f64 {
        self.rule.agreed_price(&self.pricing, requester, item)
    }

    /// The salvage value of `item` if it stays unsold
    pub fn leftover_value(&self, item: &Item) -> f64 {
        self.pricing.leftover_value(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_rules() {
        // sell everything at twice its price, whatever was asked
        let valuation = Valuation::new(
            Pricing::default(),
            |pricing: &Pricing, _: &Requester, item: &Item| 2.0 * pricing.item_price(item),
        );
        let item = Item::new(3.0).unwrap();
        let requester = Requester::new("A", 1.0, "").unwrap();

        assert_eq!(valuation.agreed_price(&requester, &item), 6.0);
        assert_eq!(valuation.leftover_value(&item), 1.5);
    }

    #[test]
    fn delegates_to_policy() {
        let valuation = Valuation::new(Pricing::new(2.0, 0.0).unwrap(), NegotiationPolicy::Midpoint);
        let item = Item::new(5.0).unwrap();
        let requester = Requester::new("A", 3.0, "").unwrap();

        // (3 * 2 + 5 * 2) / 2
        assert_eq!(valuation.agreed_price(&requester, &item), 8.0);
        assert_eq!(valuation.leftover_value(&item), 0.0);
    }
}
