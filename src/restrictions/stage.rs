//! Stage descriptions for config-driven pipelines.

use serde::{Deserialize, Serialize};

use crate::error::RestrictResult;
use crate::types::TransactionTable;

use super::{
    cap_customers, cap_product_variety, cap_temporal_periods, check_bounds, check_cap,
    filter_basket_count, filter_items_per_basket, sample_users,
};

/// One restriction stage plus its parameters.
///
/// This is the unit a [`crate::pipeline::RestrictionPlan`] runs and the unit
/// recorded in the JSON restriction summary. The serialized form tags each
/// stage by kind:
///
/// ```json
/// { "kind": "items_per_basket", "min": 2, "max": 10 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Restriction {
    /// Random user subset of the given size (see [`sample_users`]).
    SampleUsers {
        count: usize,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        seed: Option<u64>,
    },
    /// Per-user distinct basket count bounds (see [`filter_basket_count`]).
    BasketCountPerUser { min: usize, max: usize },
    /// Per-basket item count bounds (see [`filter_items_per_basket`]).
    ItemsPerBasket { min: usize, max: usize },
    /// First-N users in appearance order (see [`cap_customers`]).
    CustomerCap { count: usize },
    /// Top-N products by frequency (see [`cap_product_variety`]).
    ProductVarietyCap { count: usize },
    /// First-N distinct basket ids (see [`cap_temporal_periods`]).
    TemporalPeriodCap { count: usize },
}

impl Restriction {
    /// Short stable name for reports and logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::SampleUsers { .. } => "sample_users",
            Self::BasketCountPerUser { .. } => "basket_count_per_user",
            Self::ItemsPerBasket { .. } => "items_per_basket",
            Self::CustomerCap { .. } => "customer_cap",
            Self::ProductVarietyCap { .. } => "product_variety_cap",
            Self::TemporalPeriodCap { .. } => "temporal_period_cap",
        }
    }

    /// Check this stage's parameters without touching any data.
    ///
    /// The pipeline validates every stage before the first one runs, so a
    /// parameter error aborts a run before any filtering happens.
    pub fn validate(&self) -> RestrictResult<()> {
        match *self {
            Self::SampleUsers { count, .. } => check_cap("sample size", count),
            Self::BasketCountPerUser { min, max } => check_bounds("baskets per user", min, max),
            Self::ItemsPerBasket { min, max } => check_bounds("items per basket", min, max),
            Self::CustomerCap { count } => check_cap("customer cap", count),
            Self::ProductVarietyCap { count } => check_cap("product cap", count),
            Self::TemporalPeriodCap { count } => check_cap("temporal period cap", count),
        }
    }

    /// Apply this stage to a table, producing a reduced table.
    pub fn apply(&self, table: &TransactionTable) -> RestrictResult<TransactionTable> {
        match *self {
            Self::SampleUsers { count, seed } => sample_users(table, count, seed),
            Self::BasketCountPerUser { min, max } => filter_basket_count(table, min, max),
            Self::ItemsPerBasket { min, max } => filter_items_per_basket(table, min, max),
            Self::CustomerCap { count } => cap_customers(table, count),
            Self::ProductVarietyCap { count } => cap_product_variety(table, count),
            Self::TemporalPeriodCap { count } => cap_temporal_periods(table, count),
        }
    }
}
