use basket_restrict::ingestion::{
    read_split_pair, read_transactions_from_path, read_transactions_from_reader,
};
use basket_restrict::types::{ColumnSpec, Transaction};

#[test]
fn read_transactions_happy_path() {
    let table =
        read_transactions_from_path("tests/fixtures/transactions.csv", &ColumnSpec::default())
            .unwrap();

    assert_eq!(table.row_count(), 9);
    assert_eq!(table.user_count(), 3);
    assert_eq!(table.rows[0], Transaction::new(1, 1, 101));
    assert_eq!(table.rows[8], Transaction::new(3, 1, 105));
}

#[test]
fn read_transactions_allows_reordered_and_extra_columns() {
    let input = "product_id,day,user_id,order_number\n7,Mon,1,1\n9,Tue,2,1\n";
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input.as_bytes());

    let table = read_transactions_from_reader(&mut rdr, &ColumnSpec::default()).unwrap();
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.rows[0], Transaction::new(1, 1, 7));
    assert_eq!(table.rows[1], Transaction::new(2, 1, 9));
}

#[test]
fn read_transactions_honors_column_overrides() {
    let input = "uid,basket,item\n4,2,300\n";
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input.as_bytes());

    let columns = ColumnSpec::new("uid", "basket", "item");
    let table = read_transactions_from_reader(&mut rdr, &columns).unwrap();
    assert_eq!(table.rows, vec![Transaction::new(4, 2, 300)]);
    assert_eq!(table.columns, columns);
}

#[test]
fn read_transactions_errors_on_missing_column() {
    let input = "user_id,product_id\n1,101\n";
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input.as_bytes());

    let err = read_transactions_from_reader(&mut rdr, &ColumnSpec::default()).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("missing required column 'order_number'"));
    assert!(msg.contains("user_id"));
}

#[test]
fn read_transactions_errors_on_unparsable_cell() {
    let input = "user_id,order_number,product_id\n1,1,101\nnot_an_id,2,102\n";
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input.as_bytes());

    let err = read_transactions_from_reader(&mut rdr, &ColumnSpec::default()).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("row 3"));
    assert!(msg.contains("column 'user_id'"));
    assert!(msg.contains("raw='not_an_id'"));
}

#[test]
fn read_split_pair_concatenates_both_files() {
    let table = read_split_pair(
        "tests/fixtures/demo_history.csv",
        "tests/fixtures/demo_future.csv",
        &ColumnSpec::default(),
    )
    .unwrap();

    assert_eq!(table.row_count(), 6);
    assert_eq!(table.user_count(), 2);
    // Future rows land after history rows.
    assert_eq!(table.rows[4], Transaction::new(1, 3, 104));
}
