use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Trade direction (Buy or Sell)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeDirection {
    Buy,
    Sell,
}

impl TradeDirection {
    /// Returns the opposite direction
    pub fn opposite(&self) -> Self {
        match self {
            TradeDirection::Buy => TradeDirection::Sell,
            TradeDirection::Sell => TradeDirection::Buy,
        }
    }

    /// Returns true for buy orders
    pub fn is_buy(&self) -> bool {
        matches!(self, TradeDirection::Buy)
    }

    /// Returns true for sell orders
    pub fn is_sell(&self) -> bool {
        matches!(self, TradeDirection::Sell)
    }

    /// Canonical lowercase form; the exact inverse of `FromStr`
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeDirection::Buy => "buy",
            TradeDirection::Sell => "sell",
        }
    }
}

impl fmt::Display for TradeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string matches no known trade direction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized trade direction '{0}'")]
pub struct ParseDirectionError(pub String);

impl FromStr for TradeDirection {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "buy" => Ok(TradeDirection::Buy),
            "sell" => Ok(TradeDirection::Sell),
            other => Err(ParseDirectionError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        for direction in [TradeDirection::Buy, TradeDirection::Sell] {
            let parsed: TradeDirection = direction.to_string().parse().unwrap();
            assert_eq!(parsed, direction);
        }
    }

    #[test]
    fn test_rejects_unrecognized() {
        let err = "hold".parse::<TradeDirection>().unwrap_err();
        assert_eq!(err, ParseDirectionError("hold".to_string()));
    }

    #[test]
    fn test_rejects_wrong_case() {
        assert!("Buy".parse::<TradeDirection>().is_err());
        assert!("SELL".parse::<TradeDirection>().is_err());
    }

    #[test]
    fn test_opposite() {
        assert_eq!(TradeDirection::Buy.opposite(), TradeDirection::Sell);
        assert_eq!(TradeDirection::Sell.opposite(), TradeDirection::Buy);
    }
}
