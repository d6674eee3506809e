#![warn(missing_docs)]
//! Models and ports for pairing sellable items with requesters.
//!
//! An [`Item`](models::Item) carries a continuous weight from which a price and a salvage
//! ("leftover") value are derived. A [`Requester`](models::Requester) asks for a target weight.
//! A [`Pairing`](models::Pairing) is a one-to-one partial mapping between the two, and the
//! [`Solver`](ports::Solver) port finds the pairing that maximizes the total value realized
//! under a [`Valuation`](models::Valuation).

/// Core domain models for pairing.
///
/// The models are immutable values that are validated once, at construction,
/// so that solvers never see NaN or negative quantities.
pub mod models;

/// Interface traits for the pairing system.
///
/// These are the seams where behavior is injected: how a price is agreed
/// between a requester and an item, and how a pairing is found.
pub mod ports;
