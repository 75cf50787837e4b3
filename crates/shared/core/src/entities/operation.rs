use serde::{Deserialize, Serialize};
use std::fmt;

use super::AssetCode;

/// A place-offer instruction in the venue's wire form
///
/// Amount and price are decimal strings exactly as the venue API accepts
/// them; filters parse them on the way through and may rewrite `amount`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferOperation {
    /// Asset given up by the account
    pub selling: AssetCode,
    /// Asset received by the account
    pub buying: AssetCode,
    /// Amount of `selling`, as a decimal string
    pub amount: String,
    /// Units of `buying` per unit of `selling`, as a decimal string
    pub price: String,
}

impl OfferOperation {
    /// Create a new offer operation
    pub fn new(
        selling: impl Into<AssetCode>,
        buying: impl Into<AssetCode>,
        amount: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            selling: selling.into(),
            buying: buying.into(),
            amount: amount.into(),
            price: price.into(),
        }
    }
}

impl fmt::Display for OfferOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "OfferOperation[selling={}, buying={}, amount={}, price={}]",
            self.selling, self.buying, self.amount, self.price,
        )
    }
}
