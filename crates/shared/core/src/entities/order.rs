use serde::{Deserialize, Serialize};
use std::fmt;

use super::{OrderStyle, TradeDirection, TradingPair};
use crate::values::{Price, Quantity, Timestamp};

/// A quoted order on a market
///
/// Immutable value object; order-book snapshots are built from these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub pair: TradingPair,
    pub direction: TradeDirection,
    pub style: OrderStyle,
    pub price: Price,
    pub volume: Quantity,
    pub timestamp: Timestamp,
}

impl Order {
    /// Create a new order
    pub fn new(
        pair: TradingPair,
        direction: TradeDirection,
        style: OrderStyle,
        price: Price,
        volume: Quantity,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            pair,
            direction,
            style,
            price,
            volume,
            timestamp,
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Order[pair={}, direction={}, style={}, price={}, vol={}, ts={}]",
            self.pair,
            self.direction,
            self.style,
            self.price,
            self.volume,
            self.timestamp.timestamp_millis(),
        )
    }
}
