//! Breakwater Volume History
//!
//! Query side of the historical-volume store: the bound daily-volume
//! queries the volume filter aggregates over, plus market-identifier
//! derivation. Recording trades is the post-trade pipeline's job; this
//! crate only reads.

mod market_id;
mod query;

pub use market_id::{dedupe, make_market_id};
pub use query::{DATE_KEY_FORMAT, DailyVolumeByDate, ensure_schema};
