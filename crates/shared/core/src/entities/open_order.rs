use serde::{Deserialize, Serialize};
use std::fmt;

use super::Order;
use crate::values::{Quantity, Timestamp};

/// An order resting live on a trading account
///
/// `volume_executed` advances externally as fills land; this layer only
/// reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenOrder {
    pub order: Order,
    pub id: String,
    pub start_time: Timestamp,
    pub expire_time: Timestamp,
    pub volume_executed: Quantity,
}

impl OpenOrder {
    /// Create a new open order
    pub fn new(
        order: Order,
        id: impl Into<String>,
        start_time: Timestamp,
        expire_time: Timestamp,
        volume_executed: Quantity,
    ) -> Self {
        Self {
            order,
            id: id.into(),
            start_time,
            expire_time,
            volume_executed,
        }
    }
}

impl fmt::Display for OpenOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "OpenOrder[order={}, id={}, startTime={}, expireTime={}, volumeExecuted={}]",
            self.order,
            self.id,
            self.start_time.timestamp_millis(),
            self.expire_time.timestamp_millis(),
            self.volume_executed,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{OrderStyle, TradeDirection, TradingPair};
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    #[test]
    fn test_display_preserves_field_set() {
        let order = Order::new(
            TradingPair::new("XLM", "USD"),
            TradeDirection::Sell,
            OrderStyle::Limit,
            dec!(0.12),
            dec!(1000),
            Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
        );
        let open = OpenOrder::new(
            order,
            "offer-42",
            Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
            Utc.timestamp_opt(1_700_086_400, 0).unwrap(),
            dec!(250),
        );
        let text = open.to_string();
        assert!(text.contains("id=offer-42"));
        assert!(text.contains("volumeExecuted=250"));
    }
}
