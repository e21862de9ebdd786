//! Ingestion entrypoints.
//!
//! Transaction logs are read from CSV with a caller-provided
//! [`crate::types::ColumnSpec`] naming the user/basket/product columns.
//! Use [`read_transactions_from_path`] for a single log, or
//! [`read_split_pair`] to re-join an existing history/future pair before
//! applying a new round of restrictions.
//!
//! Schema errors ([`crate::error::RestrictError::MissingColumn`]) and cell
//! parse errors are reported before any restriction runs; no output is
//! written for a table that failed to ingest.

pub mod csv;

pub use csv::{
    read_split_pair, read_transactions_from_path, read_transactions_from_reader,
    write_transactions, write_transactions_to_path,
};
