//! Daily volume capping
//!
//! Keeps cumulative sold volume for a market within configured daily caps.
//! Two running totals drive every decision: volume already confirmed as
//! traded today (on-the-books, fetched once per application) and volume
//! about to be committed by operations admitted earlier in the same batch
//! (to-be-booked, accumulated across the fold). Their sum is the best
//! current estimate of same-day volume if everything admitted so far
//! executes.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info};
use serde::Deserialize;
use sqlx::SqlitePool;

use breakwater_core::{OfferOperation, OpenOrder, TradeDirection, TradingPair};
use breakwater_ports::{
    AssetNaming, DailyVolumeQuery, FilterError, FilterResult, SubmitFilter,
};
use breakwater_volume_history::{DATE_KEY_FORMAT, DailyVolumeByDate, dedupe, make_market_id};

use crate::pipeline::filter_ops;

/// Smallest trimmed amount worth submitting; trims at or below this drop
/// the operation instead
const MIN_TRIMMED_AMOUNT: f64 = 0.0;

/// Fractional digits used when rewriting an operation's amount
const AMOUNT_PRECISION: usize = 7;

/// Policy for operations that would breach a cap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolumeFilterMode {
    /// Trim the offending operation down to the remaining headroom
    Exact,
    /// Drop it outright, leaving the amount untouched
    Ignore,
}

impl VolumeFilterMode {
    /// Canonical lowercase form; the exact inverse of `FromStr`
    pub fn as_str(&self) -> &'static str {
        match self {
            VolumeFilterMode::Exact => "exact",
            VolumeFilterMode::Ignore => "ignore",
        }
    }
}

impl fmt::Display for VolumeFilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VolumeFilterMode {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exact" => Ok(VolumeFilterMode::Exact),
            "ignore" => Ok(VolumeFilterMode::Ignore),
            other => Err(FilterError::InvalidMode(other.to_string())),
        }
    }
}

/// Caps on daily sold volume for one logical market
///
/// Exactly the caps that are set are enforced; a config with neither cap
/// is invalid because the filter would never do anything.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VolumeFilterConfig {
    /// Cap on base units sold per UTC day
    #[serde(default)]
    pub sell_cap_in_base_units: Option<f64>,
    /// Cap on quote units received for sales per UTC day
    #[serde(default)]
    pub sell_cap_in_quote_units: Option<f64>,
    pub mode: VolumeFilterMode,
    /// Extra market identifiers whose historical volume counts toward the
    /// same cap (e.g. the same pair listed under another venue symbol)
    #[serde(default)]
    pub additional_market_ids: Vec<String>,
    /// Restrict historical aggregation to these accounts; empty means all
    #[serde(default)]
    pub optional_account_ids: Vec<String>,
}

impl VolumeFilterConfig {
    /// Returns true when neither cap is set
    pub fn is_empty(&self) -> bool {
        self.sell_cap_in_base_units.is_none() && self.sell_cap_in_quote_units.is_none()
    }

    /// At least one cap must be set for the filter to do anything
    pub fn validate(&self) -> FilterResult<()> {
        if self.is_empty() {
            return Err(FilterError::EmptyConfig);
        }
        Ok(())
    }
}

fn fmt_cap(cap: Option<f64>) -> String {
    match cap {
        Some(value) => value.to_string(),
        None => "<nil>".to_string(),
    }
}

impl fmt::Display for VolumeFilterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "VolumeFilterConfig[sellCapInBaseUnits={}, sellCapInQuoteUnits={}, mode={}, additionalMarketIDs={:?}, optionalAccountIDs={:?}]",
            fmt_cap(self.sell_cap_in_base_units),
            fmt_cap(self.sell_cap_in_quote_units),
            self.mode,
            self.additional_market_ids,
            self.optional_account_ids,
        )
    }
}

/// Cap parameters copied out of the config for one application
#[derive(Debug, Clone, Copy)]
struct LimitParameters {
    sell_cap_in_base_units: Option<f64>,
    sell_cap_in_quote_units: Option<f64>,
    mode: VolumeFilterMode,
}

/// Running totals of volume sold, in base and quote units
///
/// One instance holds the on-the-books volume fetched for the current
/// date; a second accumulates the to-be-booked volume of operations
/// already admitted in the same pass. Both live exactly as long as one
/// `apply` call; nothing carries over between invocations.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct DailyVolumes {
    base_sold: f64,
    quote_sold: f64,
}

/// Caps daily sold volume across one or more logical markets
pub struct VolumeFilter {
    name: &'static str,
    pair: TradingPair,
    config: VolumeFilterConfig,
    query: Arc<dyn DailyVolumeQuery>,
}

/// Builds a volume filter bound to the given venue and history database
///
/// Derives the canonical market identifier from the venue name and the
/// display names of the pair's assets, folds in any additional market IDs
/// from config (deduplicated), and binds the daily volume query over those
/// markets and the configured accounts. Fails if either asset cannot be
/// named or the config is invalid.
pub fn make_volume_filter(
    venue_name: &str,
    pair: &TradingPair,
    naming: &dyn AssetNaming,
    pool: SqlitePool,
    config: VolumeFilterConfig,
) -> FilterResult<VolumeFilter> {
    let base_display = naming.display_name(&pair.base)?;
    let quote_display = naming.display_name(&pair.quote)?;

    let mut market_ids = vec![make_market_id(venue_name, &base_display, &quote_display)];
    market_ids.extend(config.additional_market_ids.iter().cloned());
    let market_ids = dedupe(market_ids);

    let query = DailyVolumeByDate::new(
        pool,
        market_ids,
        TradeDirection::Sell,
        config.optional_account_ids.clone(),
    )?;

    VolumeFilter::with_query(pair.clone(), config, Arc::new(query))
}

impl VolumeFilter {
    /// Builds the filter around an already-bound volume query
    pub fn with_query(
        pair: TradingPair,
        config: VolumeFilterConfig,
        query: Arc<dyn DailyVolumeQuery>,
    ) -> FilterResult<Self> {
        config.validate()?;
        Ok(Self {
            name: "volumeFilter",
            pair,
            config,
            query,
        })
    }

    /// The pair this filter caps
    pub fn pair(&self) -> &TradingPair {
        &self.pair
    }

    /// The configured caps
    pub fn config(&self) -> &VolumeFilterConfig {
        &self.config
    }
}

impl fmt::Display for VolumeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VolumeFilter[pair={}, config={}]", self.pair, self.config)
    }
}

#[async_trait]
impl SubmitFilter for VolumeFilter {
    async fn apply(
        &self,
        ops: &[OfferOperation],
        _selling_offers: &[OpenOrder],
        _buying_offers: &[OpenOrder],
    ) -> FilterResult<Vec<OfferOperation>> {
        let date_key = Utc::now().format(DATE_KEY_FORMAT).to_string();
        let fetched = self.query.query_row(&date_key).await?;

        info!(
            "{}: on-the-books for {}: {:.8} {} sold for {:.8} {} ({})",
            self.name,
            date_key,
            fetched.base_sold,
            self.pair.base,
            fetched.quote_sold,
            self.pair.quote,
            self.config,
        );

        let otb = DailyVolumes {
            base_sold: fetched.base_sold,
            quote_sold: fetched.quote_sold,
        };
        // To-be-booked starts at zero and only grows as operations are
        // admitted within this one pass.
        let mut tbb = DailyVolumes::default();
        let limits = LimitParameters {
            sell_cap_in_base_units: self.config.sell_cap_in_base_units,
            sell_cap_in_quote_units: self.config.sell_cap_in_quote_units,
            mode: self.config.mode,
        };

        filter_ops(self.name, &self.pair, ops, |op| {
            volume_filter_fn(&otb, &mut tbb, op, &limits)
        })
    }
}

/// Admit/trim/drop decision for one sell-side operation
///
/// The base-units check runs first; a trim it performs changes the amount
/// the quote-units check then sees, so the two checks are not independent
/// and their order must not change.
fn volume_filter_fn(
    otb: &DailyVolumes,
    tbb: &mut DailyVolumes,
    op: &OfferOperation,
    limits: &LimitParameters,
) -> FilterResult<Option<OfferOperation>> {
    let price: f64 = op.price.parse().map_err(|_| FilterError::Parse {
        field: "price",
        value: op.price.clone(),
    })?;
    let amount: f64 = op.amount.parse().map_err(|_| FilterError::Parse {
        field: "amount",
        value: op.amount.clone(),
    })?;

    let mut kept_op = op.clone();
    let mut amount_being_sold = amount;

    let keep_selling_base = match limits.sell_cap_in_base_units {
        None => true,
        Some(cap) => {
            let projected = otb.base_sold + tbb.base_sold + amount_being_sold;
            let mut keep = projected <= cap;
            if limits.mode == VolumeFilterMode::Exact && !keep {
                let headroom = cap - otb.base_sold - tbb.base_sold;
                if headroom > MIN_TRIMMED_AMOUNT {
                    amount_being_sold = headroom;
                    kept_op.amount = format!("{:.*}", AMOUNT_PRECISION, amount_being_sold);
                    keep = true;
                }
            }
            debug!(
                "volumeFilter: selling (base units): price={:.8} amount={:.8}, projected {:.7} <= cap {:.7}: keep={}",
                price, amount, projected, cap, keep,
            );
            keep
        }
    };

    let keep_selling_quote = match limits.sell_cap_in_quote_units {
        None => true,
        Some(cap) => {
            let projected = otb.quote_sold + tbb.quote_sold + amount_being_sold * price;
            let mut keep = projected <= cap;
            if limits.mode == VolumeFilterMode::Exact && !keep {
                let headroom = (cap - otb.quote_sold - tbb.quote_sold) / price;
                if headroom > MIN_TRIMMED_AMOUNT {
                    amount_being_sold = headroom;
                    kept_op.amount = format!("{:.*}", AMOUNT_PRECISION, amount_being_sold);
                    keep = true;
                }
            }
            debug!(
                "volumeFilter: selling (quote units): price={:.8} amount={:.8}, projected {:.7} <= cap {:.7}: keep={}",
                price, amount, projected, cap, keep,
            );
            keep
        }
    };

    if keep_selling_base && keep_selling_quote {
        // Fold the admitted amounts in so the next operation in the batch
        // sees them as already committed.
        tbb.base_sold += amount_being_sold;
        tbb.quote_sold += amount_being_sold * price;
        return Ok(Some(kept_op));
    }
    Ok(None)
}
