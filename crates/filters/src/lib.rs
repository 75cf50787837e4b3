//! Breakwater Submit Filters
//!
//! The order-submission pipeline: every candidate batch of operations runs
//! through a chain of filters before it is dispatched to the exchange.
//!
//! ```text
//! Strategy ──► candidate ops ──► [filter 1] ──► [filter 2] ──► ... ──► dispatch
//!                                     │
//!                        each stage may rewrite amounts or
//!                        drop operations, never reorders or
//!                        duplicates them
//! ```
//!
//! The volume filter is the stateful link in that chain: it aggregates
//! volume already on the books for the current UTC date with volume about
//! to be booked by earlier operations in the same batch, and trims or
//! drops sell-side operations that would push the total past a configured
//! cap.

pub mod pipeline;
pub mod volume;

pub use pipeline::{apply_filters, filter_ops};
pub use volume::{VolumeFilter, VolumeFilterConfig, VolumeFilterMode, make_volume_filter};
