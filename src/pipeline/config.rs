//! The recognized configuration surface, as one (de)serializable object.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::RestrictResult;
use crate::restrictions::Restriction;
use crate::types::ColumnSpec;

use super::RestrictionPlan;

/// Restriction options as a flat configuration object.
///
/// This is the library-level replacement for the interactive prompt flow: a
/// caller populates it from parsed flags, a JSON file, or sequential user
/// input, then lowers it to a [`RestrictionPlan`] with [`Self::to_plan`].
/// Unset options simply contribute no stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestrictionConfig {
    /// Dataset label; output files are named `<dataset>_history.csv`,
    /// `<dataset>_future.csv`, `<dataset>_restrictions.json`.
    pub dataset: String,
    /// Directory holding the input history/future pair.
    pub input_dir: PathBuf,
    /// Directory the restricted pair (and summary) is written to.
    pub output_dir: PathBuf,
    /// Column-name overrides.
    pub columns: ColumnSpec,

    /// Random user sample size.
    pub sample_users: Option<usize>,
    /// Seed for user sampling.
    pub sample_seed: Option<u64>,
    /// Deterministic customer cap.
    pub customer_cap: Option<usize>,
    /// Temporal period cap.
    pub period_cap: Option<usize>,
    /// Product variety cap.
    pub product_cap: Option<usize>,
    /// Lower bound on items per basket.
    pub min_items_per_basket: Option<usize>,
    /// Upper bound on items per basket.
    pub max_items_per_basket: Option<usize>,
    /// Lower bound on baskets per user.
    pub min_baskets_per_user: Option<usize>,
    /// Upper bound on baskets per user.
    pub max_baskets_per_user: Option<usize>,

    /// Print statistics to stdout in addition to writing output.
    pub print_stats: bool,
}

impl Default for RestrictionConfig {
    fn default() -> Self {
        Self {
            dataset: "dataset".to_string(),
            input_dir: PathBuf::from("input"),
            output_dir: PathBuf::from("output"),
            columns: ColumnSpec::default(),
            sample_users: None,
            sample_seed: None,
            customer_cap: None,
            period_cap: None,
            product_cap: None,
            min_items_per_basket: None,
            max_items_per_basket: None,
            min_baskets_per_user: None,
            max_baskets_per_user: None,
            print_stats: false,
        }
    }
}

impl RestrictionConfig {
    /// Path of the input history file (`<input_dir>/<dataset>_history.csv`).
    pub fn input_history_path(&self) -> PathBuf {
        self.input_dir.join(format!("{}_history.csv", self.dataset))
    }

    /// Path of the input future file (`<input_dir>/<dataset>_future.csv`).
    pub fn input_future_path(&self) -> PathBuf {
        self.input_dir.join(format!("{}_future.csv", self.dataset))
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_path(path: impl AsRef<Path>) -> RestrictResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Lower the set options to an ordered [`RestrictionPlan`] and validate
    /// every stage, so bound violations surface before any data is read.
    ///
    /// Stage order is fixed and documented: user-set reducers first
    /// (sampling, then the customer cap), then the temporal cap, then the
    /// product variety cap, then items-per-basket, then baskets-per-user.
    /// Row-removing caps run before the count filters so counts reflect the
    /// reduced basket contents. Callers wanting a different order build the
    /// plan from [`Restriction`] values directly.
    pub fn to_plan(&self) -> RestrictResult<RestrictionPlan> {
        let mut stages = Vec::new();

        if let Some(count) = self.sample_users {
            stages.push(Restriction::SampleUsers {
                count,
                seed: self.sample_seed,
            });
        }
        if let Some(count) = self.customer_cap {
            stages.push(Restriction::CustomerCap { count });
        }
        if let Some(count) = self.period_cap {
            stages.push(Restriction::TemporalPeriodCap { count });
        }
        if let Some(count) = self.product_cap {
            stages.push(Restriction::ProductVarietyCap { count });
        }
        if self.min_items_per_basket.is_some() || self.max_items_per_basket.is_some() {
            stages.push(Restriction::ItemsPerBasket {
                min: self.min_items_per_basket.unwrap_or(0),
                max: self.max_items_per_basket.unwrap_or(usize::MAX),
            });
        }
        if self.min_baskets_per_user.is_some() || self.max_baskets_per_user.is_some() {
            stages.push(Restriction::BasketCountPerUser {
                min: self.min_baskets_per_user.unwrap_or(0),
                max: self.max_baskets_per_user.unwrap_or(usize::MAX),
            });
        }

        let plan = RestrictionPlan::new(stages);
        plan.validate()?;
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::RestrictionConfig;
    use crate::restrictions::Restriction;

    #[test]
    fn unset_options_produce_an_empty_plan() {
        let plan = RestrictionConfig::default().to_plan().unwrap();
        assert!(plan.stages.is_empty());
    }

    #[test]
    fn stages_follow_the_documented_order() {
        let config = RestrictionConfig {
            sample_users: Some(100),
            product_cap: Some(50),
            min_items_per_basket: Some(2),
            max_items_per_basket: Some(10),
            min_baskets_per_user: Some(3),
            ..Default::default()
        };
        let plan = config.to_plan().unwrap();
        let labels: Vec<_> = plan.stages.iter().map(Restriction::label).collect();
        assert_eq!(
            labels,
            vec![
                "sample_users",
                "product_variety_cap",
                "items_per_basket",
                "basket_count_per_user",
            ]
        );
    }

    #[test]
    fn inverted_bounds_are_rejected_before_any_data_is_read() {
        let config = RestrictionConfig {
            min_items_per_basket: Some(10),
            max_items_per_basket: Some(2),
            ..Default::default()
        };
        let err = config.to_plan().unwrap_err();
        assert!(err.to_string().contains("min 10 exceeds max 2"));
    }

    #[test]
    fn one_sided_bounds_are_open_on_the_other_side() {
        let config = RestrictionConfig {
            min_baskets_per_user: Some(3),
            ..Default::default()
        };
        let plan = config.to_plan().unwrap();
        assert_eq!(
            plan.stages,
            vec![Restriction::BasketCountPerUser { min: 3, max: usize::MAX }]
        );
    }

    #[test]
    fn round_trips_through_json() {
        let config = RestrictionConfig {
            dataset: "tafeng_few_customers".to_string(),
            sample_users: Some(500),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: RestrictionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn input_paths_follow_the_dataset_label() {
        let config = RestrictionConfig {
            dataset: "instacart".to_string(),
            ..Default::default()
        };
        assert!(config.input_history_path().ends_with("instacart_history.csv"));
        assert!(config.input_future_path().ends_with("instacart_future.csv"));
    }
}
