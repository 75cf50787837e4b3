use async_trait::async_trait;
use breakwater_core::{OfferOperation, OpenOrder};

use crate::error::FilterResult;

/// One stage of the order-submission pipeline
///
/// Takes the candidate batch plus the account's live offers and returns a
/// possibly trimmed batch. Implementations must preserve the relative
/// order of admitted operations and never duplicate one; an operation may
/// be dropped or rewritten (its amount reduced) but not reordered. Any
/// error aborts the entire batch - no partial output is meaningful. The
/// live offers are read-only context.
#[async_trait]
pub trait SubmitFilter: Send + Sync {
    async fn apply(
        &self,
        ops: &[OfferOperation],
        selling_offers: &[OpenOrder],
        buying_offers: &[OpenOrder],
    ) -> FilterResult<Vec<OfferOperation>>;
}
