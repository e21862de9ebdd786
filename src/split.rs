//! History/future partitioning.
//!
//! Next-basket-prediction models train on every basket but a user's last and
//! are evaluated on the last. The splitter produces exactly that partition:
//! per user, the basket with the maximum basket id goes to the future table,
//! all other baskets to the history table.

use crate::types::TransactionTable;

/// The two partitions produced by [`split_history_future`].
#[derive(Debug, Clone, PartialEq)]
pub struct SplitTables {
    /// All baskets but each user's last.
    pub history: TransactionTable,
    /// Each user's last basket only.
    pub future: TransactionTable,
}

/// Partition a table into history and future by basket recency.
///
/// The split is loss-free and row-disjoint: every input row lands in exactly
/// one of the two outputs, unchanged. A user with a single basket contributes
/// an empty history and a non-empty future; that is expected (detectable via
/// [`crate::stats::TableStats::single_basket_users`]), not an error. An empty
/// input yields two empty tables.
pub fn split_history_future(table: &TransactionTable) -> SplitTables {
    let last = table.last_basket_per_user();

    let future = table.filter_rows(|row| last.get(&row.user_id) == Some(&row.basket_id));
    let history = table.filter_rows(|row| last.get(&row.user_id) != Some(&row.basket_id));

    SplitTables { history, future }
}

#[cfg(test)]
mod tests {
    use super::split_history_future;
    use crate::types::{ColumnSpec, Transaction, TransactionTable};

    fn table(rows: &[(i64, i64, i64)]) -> TransactionTable {
        TransactionTable::new(
            ColumnSpec::default(),
            rows.iter().map(|&(u, b, p)| Transaction::new(u, b, p)).collect(),
        )
    }

    #[test]
    fn future_holds_exactly_the_last_basket() {
        let t = table(&[(1, 1, 10), (1, 2, 11), (1, 3, 12), (1, 3, 13)]);
        let split = split_history_future(&t);

        assert!(split.future.rows.iter().all(|r| r.basket_id == 3));
        assert_eq!(split.future.row_count(), 2);
        assert!(split.history.rows.iter().all(|r| r.basket_id < 3));
        assert_eq!(split.history.row_count(), 2);
    }

    #[test]
    fn split_is_lossless_and_disjoint() {
        let t = table(&[(1, 1, 10), (1, 2, 11), (2, 1, 12), (2, 2, 13), (3, 7, 14)]);
        let split = split_history_future(&t);

        assert_eq!(
            split.history.row_count() + split.future.row_count(),
            t.row_count()
        );
        for row in &t.rows {
            let in_history = split.history.rows.contains(row);
            let in_future = split.future.rows.contains(row);
            assert!(in_history != in_future, "row {row:?} must land in exactly one partition");
        }
    }

    #[test]
    fn single_basket_user_gets_empty_history() {
        let t = table(&[(5, 1, 10), (5, 1, 11)]);
        let split = split_history_future(&t);

        assert!(split.history.is_empty());
        assert_eq!(split.future.row_count(), 2);
    }

    #[test]
    fn empty_input_yields_empty_partitions() {
        let t = table(&[]);
        let split = split_history_future(&t);
        assert!(split.history.is_empty());
        assert!(split.future.is_empty());
    }
}
