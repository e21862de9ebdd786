//! `basket-restrict` shapes transaction datasets for next-basket-prediction
//! research: it ingests `(user, basket, product)` logs from CSV into an
//! in-memory [`types::TransactionTable`], reduces them through composable
//! restriction filters, and re-splits the result into history/future
//! partitions.
//!
//! ## What it does
//!
//! - **Ingest**: CSV with configurable column names (defaults `user_id`,
//!   `order_number`, `product_id`), including re-joining an already split
//!   history/future pair ([`ingestion::read_split_pair`]).
//! - **Restrict**: random user sampling, basket-count and items-per-basket
//!   bounds, customer/product-variety/temporal-period caps, all pure passes
//!   composed in caller order ([`restrictions`], [`pipeline`]).
//! - **Split**: per user, the most recent basket becomes the future
//!   partition, everything else the history ([`split`]).
//! - **Report**: descriptive statistics defined for any table, including an
//!   empty one ([`stats`]).
//! - **Export**: the restricted pair plus a JSON summary of what was applied
//!   ([`export`]).
//!
//! All transformations are pure: each returns a new table and leaves its
//! input untouched, so statistics of earlier pipeline stages stay available.
//!
//! ## Quick example: restrict and split in memory
//!
//! ```rust
//! use basket_restrict::pipeline::{PlanOptions, RestrictionPlan};
//! use basket_restrict::restrictions::Restriction;
//! use basket_restrict::split::split_history_future;
//! use basket_restrict::stats::TableStats;
//! use basket_restrict::types::{ColumnSpec, Transaction, TransactionTable};
//!
//! let table = TransactionTable::new(
//!     ColumnSpec::default(),
//!     vec![
//!         Transaction::new(1, 1, 10),
//!         Transaction::new(1, 1, 11),
//!         Transaction::new(1, 2, 10),
//!         Transaction::new(1, 2, 12),
//!         Transaction::new(2, 1, 10),
//!     ],
//! );
//!
//! let plan = RestrictionPlan::new(vec![
//!     Restriction::ItemsPerBasket { min: 2, max: 10 },
//! ]);
//! let outcome = plan.run(&table, &PlanOptions::default()).unwrap();
//!
//! // User 2's single-item basket is gone; user 1 keeps both baskets.
//! let stats = TableStats::compute(&outcome.table);
//! assert_eq!(stats.users, 1);
//! assert_eq!(stats.baskets, 2);
//!
//! let split = split_history_future(&outcome.table);
//! assert_eq!(split.history.row_count(), 2); // basket 1
//! assert_eq!(split.future.row_count(), 2);  // basket 2, the most recent
//! ```
//!
//! ## Quick example: file to file
//!
//! ```no_run
//! use basket_restrict::export::{write_split, write_summary, RestrictionRecord};
//! use basket_restrict::ingestion::read_split_pair;
//! use basket_restrict::pipeline::{PlanOptions, RestrictionConfig};
//! use basket_restrict::split::split_history_future;
//! use basket_restrict::stats::TableStats;
//!
//! # fn main() -> Result<(), basket_restrict::RestrictError> {
//! let config = RestrictionConfig {
//!     dataset: "instacart".to_string(),
//!     sample_users: Some(5_000),
//!     min_items_per_basket: Some(2),
//!     ..Default::default()
//! };
//!
//! let table = read_split_pair(
//!     config.input_history_path(),
//!     config.input_future_path(),
//!     &config.columns,
//! )?;
//!
//! let outcome = config.to_plan()?.run(&table, &PlanOptions::default())?;
//! let split = split_history_future(&outcome.table);
//! write_split(&split, &config.output_dir, &config.dataset)?;
//!
//! let record = RestrictionRecord::new(
//!     config.dataset.clone(),
//!     TableStats::compute(&table),
//!     TableStats::compute(&outcome.table),
//!     config.to_plan()?.stages,
//! );
//! write_summary(&record, &config.output_dir)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: CSV ingestion and emission
//! - [`types`]: column spec + in-memory transaction table
//! - [`restrictions`]: the filter stages
//! - [`pipeline`]: plan validation/execution, stage reports, observers
//! - [`split`]: history/future partitioning
//! - [`stats`]: statistics reporter
//! - [`export`]: output files and the JSON restriction summary
//! - [`error`]: error types used across the crate

pub mod error;
pub mod export;
pub mod ingestion;
pub mod pipeline;
pub mod restrictions;
pub mod split;
pub mod stats;
pub mod types;

pub use error::{RestrictError, RestrictResult};
