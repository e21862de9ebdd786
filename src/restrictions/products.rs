//! Product variety cap.

use std::collections::HashSet;

use crate::error::RestrictResult;
use crate::types::{ProductId, TransactionTable};

use super::check_cap;

/// Keep only rows of the `count` globally most frequent products.
///
/// Products are ranked by row count descending, ties broken by `product_id`
/// ascending, so the kept set is deterministic. Removing products changes
/// basket contents and can empty a basket entirely (the basket then ceases
/// to exist), so callers combining this with an items-per-basket bound will
/// typically run this pass first.
///
/// Returns `InvalidParameter` if `count` is zero.
pub fn cap_product_variety(
    table: &TransactionTable,
    count: usize,
) -> RestrictResult<TransactionTable> {
    check_cap("product cap", count)?;

    let freq = table.product_frequencies();
    if count >= freq.len() {
        return Ok(table.clone());
    }

    let mut ranked: Vec<(ProductId, usize)> = freq.into_iter().collect();
    ranked.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    let keep: HashSet<ProductId> = ranked.into_iter().take(count).map(|(p, _)| p).collect();
    Ok(table.filter_rows(|row| keep.contains(&row.product_id)))
}
