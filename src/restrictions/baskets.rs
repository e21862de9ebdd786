//! Basket-count and items-per-basket bounds.

use crate::error::RestrictResult;
use crate::types::TransactionTable;

use super::check_bounds;

/// Keep users whose distinct basket count lies in `[min, max]`; drop every
/// row of users outside the range.
///
/// Returns `InvalidParameter` if `min > max`.
pub fn filter_basket_count(
    table: &TransactionTable,
    min: usize,
    max: usize,
) -> RestrictResult<TransactionTable> {
    check_bounds("baskets per user", min, max)?;

    let counts = table.baskets_per_user();
    Ok(table.filter_rows(|row| {
        counts
            .get(&row.user_id)
            .is_some_and(|n| (min..=max).contains(n))
    }))
}

/// Keep baskets whose item count lies in `[min, max]`; drop whole baskets
/// outside the range.
///
/// Operates at basket granularity, independent of the owning user, so it can
/// reduce a user's basket count for a later [`filter_basket_count`] pass.
/// Returns `InvalidParameter` if `min > max`.
pub fn filter_items_per_basket(
    table: &TransactionTable,
    min: usize,
    max: usize,
) -> RestrictResult<TransactionTable> {
    check_bounds("items per basket", min, max)?;

    let sizes = table.basket_sizes();
    Ok(table.filter_rows(|row| {
        sizes
            .get(&row.basket_key())
            .is_some_and(|n| (min..=max).contains(n))
    }))
}

#[cfg(test)]
mod tests {
    use super::{filter_basket_count, filter_items_per_basket};
    use crate::types::{ColumnSpec, Transaction, TransactionTable};

    fn table(rows: &[(i64, i64, i64)]) -> TransactionTable {
        TransactionTable::new(
            ColumnSpec::default(),
            rows.iter().map(|&(u, b, p)| Transaction::new(u, b, p)).collect(),
        )
    }

    // User A: basket 1 with 2 items, basket 2 with 5 items. User B: basket 1
    // with a single item.
    fn two_user_table() -> TransactionTable {
        let mut rows = vec![(1, 1, 10), (1, 1, 11)];
        rows.extend((0..5).map(|p| (1, 2, 20 + p)));
        rows.push((2, 1, 30));
        table(&rows)
    }

    #[test]
    fn items_per_basket_drops_whole_baskets_outside_range() {
        let t = two_user_table();
        let out = filter_items_per_basket(&t, 2, 10).unwrap();

        // B's single-item basket is gone; all of A's rows survive.
        assert_eq!(out.user_ids(), vec![1]);
        assert_eq!(out.row_count(), 7);
    }

    #[test]
    fn items_per_basket_result_is_subset_with_counts_in_range() {
        let t = two_user_table();
        let out = filter_items_per_basket(&t, 2, 4).unwrap();

        for row in &out.rows {
            assert!(t.rows.contains(row));
        }
        for (_, size) in out.basket_sizes() {
            assert!((2..=4).contains(&size));
        }
    }

    #[test]
    fn items_per_basket_is_idempotent() {
        let t = two_user_table();
        let once = filter_items_per_basket(&t, 2, 10).unwrap();
        let twice = filter_items_per_basket(&once, 2, 10).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn basket_count_drops_users_outside_range() {
        // User 1 has 4 baskets; 4 > 3 drops the user entirely.
        let t = table(&[(1, 1, 10), (1, 2, 11), (1, 3, 12), (1, 4, 13), (2, 1, 14), (2, 2, 15)]);
        let out = filter_basket_count(&t, 2, 3).unwrap();
        assert_eq!(out.user_ids(), vec![2]);
    }

    #[test]
    fn basket_count_rejects_inverted_bounds() {
        let t = two_user_table();
        let err = filter_basket_count(&t, 5, 2).unwrap_err();
        assert!(err.to_string().contains("min 5 exceeds max 2"));
    }

    #[test]
    fn bounds_filters_accept_empty_tables() {
        let t = table(&[]);
        assert!(filter_basket_count(&t, 1, 2).unwrap().is_empty());
        assert!(filter_items_per_basket(&t, 1, 2).unwrap().is_empty());
    }
}
