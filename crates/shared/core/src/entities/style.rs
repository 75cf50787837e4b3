use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Execution style of an order (market or limit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStyle {
    /// Execute at current market price
    Market,
    /// Execute at the quoted price or better
    Limit,
}

impl OrderStyle {
    /// Returns true for market orders
    pub fn is_market(&self) -> bool {
        matches!(self, OrderStyle::Market)
    }

    /// Returns true for limit orders
    pub fn is_limit(&self) -> bool {
        matches!(self, OrderStyle::Limit)
    }

    /// Canonical lowercase form; the exact inverse of `FromStr`
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStyle::Market => "market",
            OrderStyle::Limit => "limit",
        }
    }
}

impl fmt::Display for OrderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string matches no known order style
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized order style '{0}'")]
pub struct ParseStyleError(pub String);

impl FromStr for OrderStyle {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "market" => Ok(OrderStyle::Market),
            "limit" => Ok(OrderStyle::Limit),
            other => Err(ParseStyleError(other.to_string())),
        }
    }
}
