//! Breakwater Ports
//!
//! Port definitions (traits) for the Breakwater submission-filter layer.
//! These define the boundaries between domain logic and infrastructure.

mod error;
mod filter;
mod naming;
mod volume;

pub use error::{FilterError, FilterResult, VolumeQueryError};
pub use filter::SubmitFilter;
pub use naming::{AssetNaming, AssetNamingError};
pub use volume::{DailyVolume, DailyVolumeQuery};
