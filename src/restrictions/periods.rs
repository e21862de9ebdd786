//! Temporal period cap.

use std::collections::HashSet;

use crate::error::RestrictResult;
use crate::types::{BasketId, TransactionTable};

use super::check_cap;

/// Keep rows whose basket id is among the first `count` distinct basket ids
/// in ascending order.
///
/// Basket ids are order sequence numbers, not timestamps; they are only a
/// coarse proxy for time periods, and only meaningful as such for datasets
/// whose basket numbering is aligned across users. Callers should document
/// the interpretation for their dataset.
///
/// Returns `InvalidParameter` if `count` is zero.
pub fn cap_temporal_periods(
    table: &TransactionTable,
    count: usize,
) -> RestrictResult<TransactionTable> {
    check_cap("temporal period cap", count)?;

    let ids = table.distinct_basket_ids();
    if count >= ids.len() {
        return Ok(table.clone());
    }

    let keep: HashSet<BasketId> = ids.into_iter().take(count).collect();
    Ok(table.filter_rows(|row| keep.contains(&row.basket_id)))
}
