use serde::{Deserialize, Serialize};

use super::{Order, TradingPair};

/// Read-only snapshot of the bid/ask ladders for a pair
///
/// Constructed fresh per poll cycle; never mutated in place. Asks and bids
/// are independently ordered best price first - callers are responsible
/// for supplying correctly sorted sequences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBook {
    pair: TradingPair,
    asks: Vec<Order>,
    bids: Vec<Order>,
}

impl OrderBook {
    /// Create a new order book, taking ownership of the supplied ladders
    pub fn new(pair: TradingPair, asks: Vec<Order>, bids: Vec<Order>) -> Self {
        Self { pair, asks, bids }
    }

    /// The pair this book quotes
    pub fn pair(&self) -> &TradingPair {
        &self.pair
    }

    /// The asks in the order book
    pub fn asks(&self) -> &[Order] {
        &self.asks
    }

    /// The bids in the order book
    pub fn bids(&self) -> &[Order] {
        &self.bids
    }

    /// Best (lowest-priced) ask, if any
    pub fn best_ask(&self) -> Option<&Order> {
        self.asks.first()
    }

    /// Best (highest-priced) bid, if any
    pub fn best_bid(&self) -> Option<&Order> {
        self.bids.first()
    }
}
