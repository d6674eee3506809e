use crate::{Solver, profit};
use pairing_core::{
    models::{Config, Item, Pairing, Requester, Valuation},
    ports::Negotiate,
};
use serde::{Deserialize, Serialize};

/// a representation of a pairing problem
#[derive(Debug, Serialize, Deserialize)]
pub struct Problem {
    /// the pricing context (if omitted, the caller decides)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<Config>,
    /// the items available
    pub items: Vec<Item>,
    /// the requesters
    pub requesters: Vec<Requester>,
}

impl Problem {
    /// solve the problem, using `fallback` if the problem does not carry its own config
    pub fn solve<S: Solver>(&self, solver: &S, fallback: Config) -> Result<Outcome, S::Error> {
        let valuation = self.config.unwrap_or(fallback).valuation();
        let pairing = solver.solve(&valuation, &self.items, &self.requesters)?;
        Ok(Outcome::new(
            &valuation,
            &self.items,
            &self.requesters,
            &pairing,
        ))
    }
}

/// a representation of the solution of a pairing problem
#[derive(Debug, Serialize, Deserialize)]
pub struct Outcome {
    /// the total value, sales plus salvage
    pub value: f64,
    /// the sum of agreed prices
    pub sales: f64,
    /// the sum of leftover values
    pub salvage: f64,
    /// the outcome for every requester, in input order
    pub requesters: Vec<RequesterOutcome>,
    /// the unsold items, in input order
    pub leftovers: Vec<LeftoverOutcome>,
}

/// What a requester ended up with
#[derive(Debug, Serialize, Deserialize)]
pub struct RequesterOutcome {
    /// the requester's name
    pub name: String,
    /// the weight the requester asked for
    pub target_weight: f64,
    /// the requester's notes
    pub notes: String,
    /// the index of the assigned item, if any
    pub item: Option<usize>,
    /// the weight of the assigned item, if any
    pub weight: Option<f64>,
    /// the agreed price, if any
    pub price: Option<f64>,
}

/// An item that was not sold
#[derive(Debug, Serialize, Deserialize)]
pub struct LeftoverOutcome {
    /// the index of the item
    pub item: usize,
    /// its weight
    pub weight: f64,
    /// its salvage value
    pub value: f64,
}

impl Outcome {
    /// gather the reportable data of a pairing
    pub fn new<R: Negotiate>(
        valuation: &Valuation<R>,
        items: &[Item],
        requesters: &[Requester],
        pairing: &Pairing,
    ) -> Self {
        let profit = profit(valuation, items, requesters, pairing);

        let requesters = requesters
            .iter()
            .enumerate()
            .map(|(idx, requester)| {
                let item = pairing.item_of(idx);
                RequesterOutcome {
                    name: requester.name().to_owned(),
                    target_weight: requester.target_weight(),
                    notes: requester.notes().to_owned(),
                    item,
                    weight: item.map(|item| items[item].weight()),
                    price: item.map(|item| valuation.agreed_price(requester, &items[item])),
                }
            })
            .collect();

        let leftovers = pairing
            .leftover_items()
            .map(|item| LeftoverOutcome {
                item,
                weight: items[item].weight(),
                value: valuation.leftover_value(&items[item]),
            })
            .collect();

        Self {
            value: profit.total(),
            sales: profit.sales,
            salvage: profit.salvage,
            requesters,
            leftovers,
        }
    }

    /// the requesters that did not receive an item
    pub fn unmatched(&self) -> impl Iterator<Item = &RequesterOutcome> {
        self.requesters.iter().filter(|outcome| outcome.item.is_none())
    }
}
