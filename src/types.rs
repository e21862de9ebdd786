//! Core data model for transaction tables.
//!
//! The crate operates on an in-memory [`TransactionTable`]: a flat list of
//! `(user, basket, product)` rows read from CSV using a caller-provided
//! [`ColumnSpec`]. Tables are immutable in the pipeline sense: every
//! transformation returns a new table and never mutates its input, so a
//! caller can keep statistics of the pre-filter table while downstream
//! stages run.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// Identifier of a user (customer).
pub type UserId = i64;
/// Identifier of a basket, ordered per user (an order sequence number, not a
/// timestamp). Basket ordering is only meaningful within one user.
pub type BasketId = i64;
/// Identifier of a product.
pub type ProductId = i64;

/// Column names used to locate the three identifier columns in a CSV file.
///
/// Defaults match the common next-basket-prediction dataset layout
/// (`user_id`, `order_number`, `product_id`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// User column name.
    pub user: String,
    /// Basket/order column name.
    pub basket: String,
    /// Product column name.
    pub product: String,
}

impl Default for ColumnSpec {
    fn default() -> Self {
        Self {
            user: "user_id".to_string(),
            basket: "order_number".to_string(),
            product: "product_id".to_string(),
        }
    }
}

impl ColumnSpec {
    /// Create a column spec from explicit names.
    pub fn new(
        user: impl Into<String>,
        basket: impl Into<String>,
        product: impl Into<String>,
    ) -> Self {
        Self {
            user: user.into(),
            basket: basket.into(),
            product: product.into(),
        }
    }

    /// Column names in output order (user, basket, product).
    pub fn names(&self) -> [&str; 3] {
        [&self.user, &self.basket, &self.product]
    }
}

/// One transaction row: a single product bought in a single basket.
///
/// Multiple rows share `(user_id, basket_id)` when a basket holds several
/// products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transaction {
    /// Owning user.
    pub user_id: UserId,
    /// Basket within the user's ordered basket sequence.
    pub basket_id: BasketId,
    /// Purchased product.
    pub product_id: ProductId,
}

impl Transaction {
    /// Create a transaction row.
    pub fn new(user_id: UserId, basket_id: BasketId, product_id: ProductId) -> Self {
        Self {
            user_id,
            basket_id,
            product_id,
        }
    }

    /// The `(user, basket)` pair identifying the row's basket. `basket_id`
    /// alone is not globally unique.
    pub fn basket_key(&self) -> (UserId, BasketId) {
        (self.user_id, self.basket_id)
    }
}

/// In-memory transaction table.
///
/// Rows are kept in ingestion order; "first appearance" orderings used by the
/// deterministic filters derive from this.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionTable {
    /// Column names the rows were read from (and will be written back with).
    pub columns: ColumnSpec,
    /// Flat row storage.
    pub rows: Vec<Transaction>,
}

impl TransactionTable {
    /// Create a table from a column spec and rows.
    pub fn new(columns: ColumnSpec, rows: Vec<Transaction>) -> Self {
        Self { columns, rows }
    }

    /// Number of rows in the table.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// True if the table holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Create a new table containing only rows that match `predicate`.
    ///
    /// The returned table preserves the column spec; the input is untouched.
    pub fn filter_rows<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&Transaction) -> bool,
    {
        let rows = self.rows.iter().filter(|row| predicate(row)).copied().collect();
        Self {
            columns: self.columns.clone(),
            rows,
        }
    }

    /// Append another table's rows, consuming both.
    ///
    /// Used to re-join an already split history/future pair before applying
    /// new restrictions.
    ///
    /// # Panics
    ///
    /// Panics if the two tables were read with different column specs.
    pub fn concat(mut self, other: Self) -> Self {
        assert!(
            self.columns == other.columns,
            "cannot concat tables with different column specs ({:?} vs {:?})",
            self.columns.names(),
            other.columns.names()
        );
        self.rows.extend(other.rows);
        self
    }

    /// Distinct user ids in first-appearance order.
    pub fn user_ids(&self) -> Vec<UserId> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for row in &self.rows {
            if seen.insert(row.user_id) {
                out.push(row.user_id);
            }
        }
        out
    }

    /// Number of distinct users.
    pub fn user_count(&self) -> usize {
        self.rows.iter().map(|r| r.user_id).collect::<HashSet<_>>().len()
    }

    /// Number of distinct products.
    pub fn product_count(&self) -> usize {
        self.rows
            .iter()
            .map(|r| r.product_id)
            .collect::<HashSet<_>>()
            .len()
    }

    /// Item count per basket, keyed by `(user, basket)`.
    pub fn basket_sizes(&self) -> HashMap<(UserId, BasketId), usize> {
        let mut sizes = HashMap::new();
        for row in &self.rows {
            *sizes.entry(row.basket_key()).or_insert(0) += 1;
        }
        sizes
    }

    /// Distinct basket count per user.
    pub fn baskets_per_user(&self) -> HashMap<UserId, usize> {
        let mut baskets: HashMap<UserId, HashSet<BasketId>> = HashMap::new();
        for row in &self.rows {
            baskets.entry(row.user_id).or_default().insert(row.basket_id);
        }
        baskets.into_iter().map(|(u, b)| (u, b.len())).collect()
    }

    /// The most recent (maximum) basket id per user.
    pub fn last_basket_per_user(&self) -> HashMap<UserId, BasketId> {
        let mut last: HashMap<UserId, BasketId> = HashMap::new();
        for row in &self.rows {
            last.entry(row.user_id)
                .and_modify(|b| *b = (*b).max(row.basket_id))
                .or_insert(row.basket_id);
        }
        last
    }

    /// Row frequency per product.
    pub fn product_frequencies(&self) -> HashMap<ProductId, usize> {
        let mut freq = HashMap::new();
        for row in &self.rows {
            *freq.entry(row.product_id).or_insert(0) += 1;
        }
        freq
    }

    /// Distinct basket ids across the whole table, ascending.
    ///
    /// Used as the coarse time-period axis by the temporal cap; `basket_id`
    /// is an order sequence number, not a timestamp.
    pub fn distinct_basket_ids(&self) -> Vec<BasketId> {
        let mut ids: Vec<BasketId> = self
            .rows
            .iter()
            .map(|r| r.basket_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        ids.sort_unstable();
        ids
    }
}
