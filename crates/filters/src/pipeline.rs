//! Pipeline composition and the shared per-operation transform
//!
//! Filters compose by feeding one stage's output operations into the next.
//! The transform helper here carries the classification logic every filter
//! needs: which side of the configured pair an operation is on.

use log::{debug, info};

use breakwater_core::{OfferOperation, OpenOrder, TradeDirection, TradingPair};
use breakwater_ports::{FilterError, FilterResult, SubmitFilter};

/// Runs a batch through each registered filter in sequence
///
/// Each filter consumes the previous filter's output; the first error
/// aborts the whole batch.
pub async fn apply_filters(
    filters: &[Box<dyn SubmitFilter>],
    ops: Vec<OfferOperation>,
    selling_offers: &[OpenOrder],
    buying_offers: &[OpenOrder],
) -> FilterResult<Vec<OfferOperation>> {
    let mut current = ops;
    for filter in filters {
        current = filter.apply(&current, selling_offers, buying_offers).await?;
    }
    Ok(current)
}

/// Classifies an operation against the configured pair
///
/// Selling the base for the quote is a sell; selling the quote for the
/// base is a buy. Anything else does not belong to this market and is a
/// hard error.
fn classify(pair: &TradingPair, op: &OfferOperation) -> FilterResult<TradeDirection> {
    if op.selling == pair.base && op.buying == pair.quote {
        Ok(TradeDirection::Sell)
    } else if op.selling == pair.quote && op.buying == pair.base {
        Ok(TradeDirection::Buy)
    } else {
        Err(FilterError::AssetMismatch {
            selling: op.selling.to_string(),
            buying: op.buying.to_string(),
            pair: pair.to_string(),
        })
    }
}

/// Folds a per-operation transform over a batch
///
/// The transform runs only on sell-side operations and returns the
/// (possibly rewritten) operation to keep, or `None` to drop it. Buy-side
/// operations pass through untouched - capping them is not implemented.
/// Relative order of kept operations matches the input; nothing is
/// duplicated.
pub fn filter_ops<F>(
    filter_name: &str,
    pair: &TradingPair,
    ops: &[OfferOperation],
    mut transform: F,
) -> FilterResult<Vec<OfferOperation>>
where
    F: FnMut(&OfferOperation) -> FilterResult<Option<OfferOperation>>,
{
    let mut kept = Vec::with_capacity(ops.len());
    let mut num_dropped = 0usize;
    let mut num_rewritten = 0usize;

    for op in ops {
        match classify(pair, op)? {
            TradeDirection::Buy => kept.push(op.clone()),
            TradeDirection::Sell => match transform(op)? {
                Some(out) => {
                    if out != *op {
                        num_rewritten += 1;
                        debug!("{filter_name}: rewrote {op} -> {out}");
                    }
                    kept.push(out);
                }
                None => {
                    num_dropped += 1;
                    debug!("{filter_name}: dropped {op}");
                }
            },
        }
    }

    info!(
        "{}: kept {} of {} operations ({} rewritten, {} dropped)",
        filter_name,
        kept.len(),
        ops.len(),
        num_rewritten,
        num_dropped,
    );
    Ok(kept)
}
