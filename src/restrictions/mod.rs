//! Restriction filters over [`crate::types::TransactionTable`].
//!
//! Each filter is a pure pass: it takes a table plus parameters and returns a
//! new table whose rows are a subset of the input's. Filters only remove
//! rows, baskets, or users; they never add or rewrite field values, and each
//! is idempotent when reapplied to its own output with the same parameters.
//!
//! Ordering is entirely caller-controlled. Filters compose sequentially on
//! the already reduced table, so order affects which rows survive (e.g. an
//! items-per-basket pass can shrink a user's basket count before a
//! basket-count pass sees it). There is no implicit reordering and no
//! fixed-point iteration.
//!
//! Currently implemented:
//!
//! - [`sample_users()`]: random user subset (seeded, reproducible)
//! - [`cap_customers()`]: deterministic first-N user cap
//! - [`filter_basket_count()`]: per-user basket count bounds
//! - [`filter_items_per_basket()`]: per-basket item count bounds
//! - [`cap_product_variety()`]: top-N products by frequency
//! - [`cap_temporal_periods()`]: first-N basket ids as time periods
//!
//! ## Example: items-per-basket then basket-count
//!
//! ```rust
//! use basket_restrict::restrictions::{filter_basket_count, filter_items_per_basket};
//! use basket_restrict::types::{ColumnSpec, Transaction, TransactionTable};
//!
//! let table = TransactionTable::new(
//!     ColumnSpec::default(),
//!     vec![
//!         Transaction::new(1, 1, 10),
//!         Transaction::new(1, 1, 11),
//!         Transaction::new(1, 2, 10),
//!         Transaction::new(2, 1, 12),
//!     ],
//! );
//!
//! // Baskets with at least two items: only user 1's first basket survives.
//! let by_items = filter_items_per_basket(&table, 2, 10).unwrap();
//! assert_eq!(by_items.row_count(), 2);
//!
//! // On the reduced table user 1 now has a single basket.
//! let by_baskets = filter_basket_count(&by_items, 1, 1).unwrap();
//! assert_eq!(by_baskets.user_count(), 1);
//! ```

pub mod baskets;
pub mod periods;
pub mod products;
pub mod sample;
pub mod stage;

pub use baskets::{filter_basket_count, filter_items_per_basket};
pub use periods::cap_temporal_periods;
pub use products::cap_product_variety;
pub use sample::{cap_customers, sample_users, DEFAULT_SAMPLE_SEED};
pub use stage::Restriction;

use crate::error::{RestrictError, RestrictResult};

pub(crate) fn check_cap(what: &str, count: usize) -> RestrictResult<()> {
    if count == 0 {
        return Err(RestrictError::InvalidParameter {
            message: format!("{what} must be positive"),
        });
    }
    Ok(())
}

pub(crate) fn check_bounds(what: &str, min: usize, max: usize) -> RestrictResult<()> {
    if min > max {
        return Err(RestrictError::InvalidParameter {
            message: format!("{what}: min {min} exceeds max {max}"),
        });
    }
    Ok(())
}
