//! CSV ingestion and emission.

use std::path::Path;

use crate::error::{RestrictError, RestrictResult};
use crate::types::{ColumnSpec, Transaction, TransactionTable};

/// Ingest a CSV file into an in-memory [`TransactionTable`].
///
/// Rules:
///
/// - CSV must have headers.
/// - Headers must contain all three configured columns (order can differ;
///   extra columns are ignored).
/// - Each identifier cell is parsed as a 64-bit integer.
pub fn read_transactions_from_path(
    path: impl AsRef<Path>,
    columns: &ColumnSpec,
) -> RestrictResult<TransactionTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;
    read_transactions_from_reader(&mut rdr, columns)
}

/// Ingest transaction rows from an existing CSV reader.
pub fn read_transactions_from_reader<R: std::io::Read>(
    rdr: &mut csv::Reader<R>,
    columns: &ColumnSpec,
) -> RestrictResult<TransactionTable> {
    let headers = rdr.headers()?.clone();

    // Map configured columns -> CSV column indexes (allows re-ordered CSV columns).
    let mut col_idxs = [0usize; 3];
    for (slot, name) in col_idxs.iter_mut().zip(columns.names()) {
        match headers.iter().position(|h| h == name) {
            Some(idx) => *slot = idx,
            None => {
                return Err(RestrictError::MissingColumn {
                    column: name.to_owned(),
                    headers: headers.iter().map(str::to_owned).collect(),
                });
            }
        }
    }

    let mut rows: Vec<Transaction> = Vec::new();
    for (row_idx0, result) in rdr.records().enumerate() {
        // Report 1-based row number for users; +1 again because header is row 1.
        let user_row = row_idx0 + 2;
        let record = result?;

        let [user_idx, basket_idx, product_idx] = col_idxs;
        rows.push(Transaction::new(
            parse_id(user_row, &columns.user, record.get(user_idx).unwrap_or(""))?,
            parse_id(user_row, &columns.basket, record.get(basket_idx).unwrap_or(""))?,
            parse_id(user_row, &columns.product, record.get(product_idx).unwrap_or(""))?,
        ));
    }

    Ok(TransactionTable::new(columns.clone(), rows))
}

/// Read an already split history/future pair and concatenate it back into one
/// table, ready for a fresh round of restrictions.
///
/// Both files are read with the same column spec.
pub fn read_split_pair(
    history_path: impl AsRef<Path>,
    future_path: impl AsRef<Path>,
    columns: &ColumnSpec,
) -> RestrictResult<TransactionTable> {
    let history = read_transactions_from_path(history_path, columns)?;
    let future = read_transactions_from_path(future_path, columns)?;
    Ok(history.concat(future))
}

/// Write a table to a CSV file using its configured column names as headers.
pub fn write_transactions_to_path(
    table: &TransactionTable,
    path: impl AsRef<Path>,
) -> RestrictResult<()> {
    let mut wtr = csv::WriterBuilder::new().from_path(path)?;
    write_transactions(table, &mut wtr)
}

/// Write a table to an existing CSV writer.
pub fn write_transactions<W: std::io::Write>(
    table: &TransactionTable,
    wtr: &mut csv::Writer<W>,
) -> RestrictResult<()> {
    wtr.write_record(table.columns.names())?;
    for row in &table.rows {
        wtr.write_record([
            row.user_id.to_string(),
            row.basket_id.to_string(),
            row.product_id.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

fn parse_id(row: usize, column: &str, raw: &str) -> RestrictResult<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(RestrictError::ParseError {
            row,
            column: column.to_owned(),
            raw: raw.to_owned(),
            message: "empty identifier cell".to_string(),
        });
    }
    trimmed
        .parse::<i64>()
        .map_err(|e| RestrictError::ParseError {
            row,
            column: column.to_owned(),
            raw: raw.to_owned(),
            message: e.to_string(),
        })
}
