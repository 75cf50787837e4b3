use async_trait::async_trait;

use crate::error::VolumeQueryError;

/// Aggregate volume sold on one UTC date across a set of markets/accounts
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DailyVolume {
    /// Units of the base asset sold
    pub base_sold: f64,
    /// Units of the quote asset received for them
    pub quote_sold: f64,
}

/// Bound query over historical trade volume
///
/// Parameterized at construction with the market identifiers, direction,
/// and optional account identifiers to aggregate over; `query_row` is
/// invoked exactly once per filter application regardless of batch size.
/// The call is opaque to the caller - retries, if any, belong to the
/// implementation.
#[async_trait]
pub trait DailyVolumeQuery: Send + Sync {
    async fn query_row(&self, date_key: &str) -> Result<DailyVolume, VolumeQueryError>;
}
