use crate::models::{Item, Pricing, Requester};

/// The capability of agreeing on a transaction price between a requester and an item.
///
/// Solvers and the evaluator are generic over this trait, so any rule may be injected
/// without changing their logic. Besides [`NegotiationPolicy`](crate::models::NegotiationPolicy),
/// any `Fn(&Pricing, &Requester, &Item) -> f64` is a rule.
pub trait Negotiate {
    /// The price realized when `item` is sold to `requester` under `pricing`.
    ///
    /// Rules are expected to be pure and to return finite values; the solvers
    /// treat a non-finite price as an internal failure.
    fn agreed_price(&self, pricing: &Pricing, requester: &Requester, item: &Item) -> f64;
}

impl<F: Fn(&Pricing, &Requester, &Item) -> f64> Negotiate for F {
    fn agreed_price(&self, pricing: &Pricing, requester: &Requester, item: &Item) -> f64 {
        self(pricing, requester, item)
    }
}
