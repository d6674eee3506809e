use pairing_core::{
    models::{Item, Pairing, Requester, Valuation},
    ports::Negotiate,
};

/// The total value of a pairing, split by where it comes from.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Profit {
    /// The sum of agreed prices over the matched pairs
    pub sales: f64,
    /// The sum of leftover values over the unmatched items
    pub salvage: f64,
}

impl Profit {
    /// The total value
    pub fn total(&self) -> f64 {
        self.sales + self.salvage
    }
}

/// Compute the sales and salvage of a pairing.
///
/// Unmatched requesters contribute nothing.
///
/// # Panics
///
/// If the pairing was not computed over `items` and `requesters` (its dimensions disagree).
pub fn profit<R: Negotiate>(
    valuation: &Valuation<R>,
    items: &[Item],
    requesters: &[Requester],
    pairing: &Pairing,
) -> Profit {
    assert_eq!(pairing.item_count(), items.len());
    assert_eq!(pairing.requester_count(), requesters.len());

    let salvage = pairing
        .leftover_items()
        .map(|item| valuation.leftover_value(&items[item]))
        .sum();

    let sales = pairing
        .pairs()
        .map(|(item, requester)| valuation.agreed_price(&requesters[requester], &items[item]))
        .sum();

    Profit { sales, salvage }
}

/// Compute the total value of a pairing: agreed prices of the matched pairs
/// plus the leftover value of every unmatched item.
///
/// The result is non-negative whenever the negotiation rule yields non-negative prices.
///
/// # Panics
///
/// If the pairing was not computed over `items` and `requesters`.
pub fn evaluate<R: Negotiate>(
    valuation: &Valuation<R>,
    items: &[Item],
    requesters: &[Requester],
    pairing: &Pairing,
) -> f64 {
    profit(valuation, items, requesters, pairing).total()
}
