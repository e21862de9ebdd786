//! Descriptive statistics over transaction tables.
//!
//! Read-only: computing statistics never mutates the table, and every field
//! is defined for an empty table (zero counts, zero means, never NaN), so
//! callers can report on any pipeline stage without special-casing.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::TransactionTable;

/// Min/max/mean of a count distribution. All zeros for an empty distribution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DistStats {
    pub min: usize,
    pub max: usize,
    pub mean: f64,
}

impl DistStats {
    fn from_counts<I: IntoIterator<Item = usize>>(counts: I) -> Self {
        let mut n = 0usize;
        let mut sum = 0usize;
        let mut min = usize::MAX;
        let mut max = 0usize;
        for c in counts {
            n += 1;
            sum += c;
            min = min.min(c);
            max = max.max(c);
        }
        if n == 0 {
            return Self::default();
        }
        Self {
            min,
            max,
            mean: sum as f64 / n as f64,
        }
    }
}

/// Descriptive counts for one table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableStats {
    /// Total transaction rows.
    pub rows: usize,
    /// Distinct users.
    pub users: usize,
    /// Distinct products.
    pub products: usize,
    /// Distinct `(user, basket)` baskets.
    pub baskets: usize,
    /// Distinct basket ids, the temporal-period proxy.
    pub periods: usize,
    /// Per-user distinct basket count distribution.
    pub baskets_per_user: DistStats,
    /// Per-basket item count distribution.
    pub items_per_basket: DistStats,
    /// Users owning exactly one basket. After a history/future split these
    /// users contribute an empty history, which downstream consumers may
    /// want to detect.
    pub single_basket_users: usize,
}

impl TableStats {
    /// Compute statistics for a table. Never fails; an empty table produces
    /// the all-zero record.
    pub fn compute(table: &TransactionTable) -> Self {
        let per_user = table.baskets_per_user();
        let per_basket = table.basket_sizes();

        Self {
            rows: table.row_count(),
            users: per_user.len(),
            products: table.product_count(),
            baskets: per_basket.len(),
            periods: table.distinct_basket_ids().len(),
            single_basket_users: per_user.values().filter(|&&n| n == 1).count(),
            baskets_per_user: DistStats::from_counts(per_user.into_values()),
            items_per_basket: DistStats::from_counts(per_basket.into_values()),
        }
    }
}

impl fmt::Display for TableStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "rows:             {}", self.rows)?;
        writeln!(f, "users:            {}", self.users)?;
        writeln!(f, "products:         {}", self.products)?;
        writeln!(f, "baskets:          {}", self.baskets)?;
        writeln!(f, "periods:          {}", self.periods)?;
        writeln!(
            f,
            "baskets per user: {}-{} (mean {:.2})",
            self.baskets_per_user.min, self.baskets_per_user.max, self.baskets_per_user.mean
        )?;
        writeln!(
            f,
            "items per basket: {}-{} (mean {:.2})",
            self.items_per_basket.min, self.items_per_basket.max, self.items_per_basket.mean
        )?;
        write!(f, "single-basket users: {}", self.single_basket_users)
    }
}
