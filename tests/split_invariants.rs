use std::collections::HashSet;

use basket_restrict::ingestion::read_transactions_from_path;
use basket_restrict::split::split_history_future;
use basket_restrict::stats::TableStats;
use basket_restrict::types::{ColumnSpec, Transaction, TransactionTable};

fn fixture_table() -> TransactionTable {
    read_transactions_from_path("tests/fixtures/transactions.csv", &ColumnSpec::default())
        .unwrap()
}

#[test]
fn split_partitions_every_row_exactly_once() {
    let table = fixture_table();
    let split = split_history_future(&table);

    assert_eq!(
        split.history.row_count() + split.future.row_count(),
        table.row_count()
    );

    let history: HashSet<_> = split.history.rows.iter().copied().collect();
    let future: HashSet<_> = split.future.rows.iter().copied().collect();
    assert!(history.is_disjoint(&future));
    for row in &table.rows {
        assert!(history.contains(row) || future.contains(row));
    }
}

#[test]
fn future_is_the_chronologically_last_basket() {
    let table = TransactionTable::new(
        ColumnSpec::default(),
        vec![
            Transaction::new(1, 1, 101),
            Transaction::new(1, 2, 102),
            Transaction::new(1, 3, 103),
            Transaction::new(1, 3, 104),
        ],
    );
    let split = split_history_future(&table);

    assert!(split.future.rows.iter().all(|r| r.basket_id == 3));
    assert_eq!(split.future.row_count(), 2);
    let history_baskets: HashSet<_> =
        split.history.rows.iter().map(|r| r.basket_id).collect();
    assert_eq!(history_baskets, HashSet::from([1, 2]));
}

#[test]
fn every_user_appears_in_future() {
    let table = fixture_table();
    let split = split_history_future(&table);
    assert_eq!(split.future.user_count(), table.user_count());
}

#[test]
fn single_basket_users_are_detectable_before_splitting() {
    let table = fixture_table();
    let stats = TableStats::compute(&table);
    // User 3 owns a single basket, so it contributes no history rows.
    assert_eq!(stats.single_basket_users, 1);

    let split = split_history_future(&table);
    assert!(!split.history.rows.iter().any(|r| r.user_id == 3));
    assert!(split.future.rows.iter().any(|r| r.user_id == 3));
}
