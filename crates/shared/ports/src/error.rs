use thiserror::Error;

use crate::naming::AssetNamingError;

/// Errors surfaced by the daily volume query collaborator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VolumeQueryError {
    #[error("database error: {0}")]
    Database(String),

    #[error("no market identifiers to aggregate over")]
    NoMarkets,

    #[error("unexpected query result shape: {0}")]
    UnexpectedShape(String),
}

/// Errors that abort a submit-filter construction or application
///
/// None of these allow per-operation recovery: a failed construction yields
/// no filter, and a failed application yields no partial batch. The
/// surrounding submission cycle decides whether to retry the whole cycle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("volume filter config is empty: at least one sell cap must be set")]
    EmptyConfig,

    #[error("invalid volume filter mode '{0}'")]
    InvalidMode(String),

    #[error(transparent)]
    AssetResolution(#[from] AssetNamingError),

    #[error("operation assets {selling}/{buying} match neither side of pair {pair}")]
    AssetMismatch {
        selling: String,
        buying: String,
        pair: String,
    },

    #[error("could not parse {field} '{value}' as a number")]
    Parse { field: &'static str, value: String },

    #[error("daily volume query failed: {0}")]
    Query(#[from] VolumeQueryError),
}

pub type FilterResult<T> = std::result::Result<T, FilterError>;
