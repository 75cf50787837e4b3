use thiserror::Error;

use breakwater_core::AssetCode;

/// Failure to resolve a display name for an asset
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("could not resolve display name for asset '{asset}': {reason}")]
pub struct AssetNamingError {
    pub asset: String,
    pub reason: String,
}

/// Venue-stable display names for ledger assets
///
/// The same pair can surface under different identifiers across venues,
/// so market identifiers are derived from these display names rather than
/// from the raw codes. The mapping must stay stable across polling cycles
/// for volume aggregation to line up.
pub trait AssetNaming: Send + Sync {
    fn display_name(&self, asset: &AssetCode) -> Result<String, AssetNamingError>;
}
