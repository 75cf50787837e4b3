use serde::{Deserialize, Serialize};
use std::fmt;

/// Ledger-native code identifying a single asset
///
/// A stable reference that can be stored in orders and operations and used
/// as a map key. How the code maps to a venue's display name is a concern
/// of the naming port, not of this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetCode(pub String);

impl AssetCode {
    /// Create a new asset code
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Get the code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for AssetCode {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for AssetCode {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A base/quote trading pair (e.g. BTC/USD)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TradingPair {
    /// Asset being bought/sold
    pub base: AssetCode,
    /// Asset used to price the base
    pub quote: AssetCode,
}

impl TradingPair {
    /// Create a new trading pair
    pub fn new(base: impl Into<AssetCode>, quote: impl Into<AssetCode>) -> Self {
        Self {
            base: base.into(),
            quote: quote.into(),
        }
    }
}

impl fmt::Display for TradingPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.quote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_display() {
        let pair = TradingPair::new("BTC", "USD");
        assert_eq!(pair.to_string(), "BTC/USD");
    }

    #[test]
    fn test_asset_code_equality() {
        assert_eq!(AssetCode::new("XLM"), AssetCode::from("XLM"));
        assert_ne!(AssetCode::new("XLM"), AssetCode::new("xlm"));
    }
}
