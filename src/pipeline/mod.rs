//! Plan execution: an ordered list of restriction stages run over an
//! immutable table.
//!
//! A [`RestrictionPlan`] holds stages in the exact order they will run; the
//! runner never reorders them. Every stage's parameters are validated before
//! the first stage touches data, so an invalid bound aborts the run with
//! nothing read or written. Stage-by-stage row counts are collected into
//! [`StageReport`]s and optionally streamed to a [`RestrictionObserver`].
//!
//! ## Example
//!
//! ```rust
//! use basket_restrict::pipeline::{PlanOptions, RestrictionPlan};
//! use basket_restrict::restrictions::Restriction;
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
//! let plan = RestrictionPlan::new(vec![
//!     Restriction::ItemsPerBasket { min: 2, max: 10 },
//!     Restriction::BasketCountPerUser { min: 1, max: 5 },
//! ]);
//!
//! let outcome = plan.run(&table, &PlanOptions::default()).unwrap();
//! assert_eq!(outcome.table.row_count(), 2);
//! assert_eq!(outcome.stages.len(), 2);
//! assert!(outcome.emptied_at.is_none());
//! ```

pub mod config;
pub mod observer;

pub use config::RestrictionConfig;
pub use observer::{
    CompositeObserver, FileObserver, RestrictionObserver, StageContext, StdErrObserver,
};

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::RestrictResult;
use crate::restrictions::Restriction;
use crate::types::TransactionTable;

/// An ordered sequence of restriction stages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestrictionPlan {
    /// Stages in execution order.
    pub stages: Vec<Restriction>,
}

/// Options controlling plan execution.
#[derive(Clone, Default)]
pub struct PlanOptions {
    /// Optional observer for per-stage logging.
    pub observer: Option<Arc<dyn RestrictionObserver>>,
}

impl fmt::Debug for PlanOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlanOptions")
            .field("observer_set", &self.observer.is_some())
            .finish()
    }
}

/// Before/after counts for one executed stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageReport {
    /// The stage that ran.
    pub stage: Restriction,
    /// Row count going in.
    pub rows_before: usize,
    /// Row count coming out.
    pub rows_after: usize,
    /// Distinct users coming out.
    pub users_after: usize,
}

/// Result of running a full plan.
#[derive(Debug, Clone)]
pub struct PlanOutcome {
    /// The restricted table.
    pub table: TransactionTable,
    /// One report per executed stage, in order.
    pub stages: Vec<StageReport>,
    /// Index of the first stage that left the table empty, if any.
    ///
    /// An empty result is not an error: later stages still run (as no-ops)
    /// and the output remains writable. Callers that would rather not emit
    /// a misleading empty file check this flag.
    pub emptied_at: Option<usize>,
}

impl RestrictionPlan {
    /// Create a plan from stages in execution order.
    pub fn new(stages: Vec<Restriction>) -> Self {
        Self { stages }
    }

    /// Validate every stage's parameters without touching data.
    pub fn validate(&self) -> RestrictResult<()> {
        for stage in &self.stages {
            stage.validate()?;
        }
        Ok(())
    }

    /// Run all stages in order over `table`, returning the reduced table and
    /// per-stage reports.
    ///
    /// Validation runs first: a parameter error anywhere in the plan aborts
    /// before the first stage executes. The input table is never mutated.
    pub fn run(
        &self,
        table: &TransactionTable,
        options: &PlanOptions,
    ) -> RestrictResult<PlanOutcome> {
        self.validate()?;

        let mut current = table.clone();
        let mut stages = Vec::with_capacity(self.stages.len());
        let mut emptied_at = None;

        for (index, stage) in self.stages.iter().enumerate() {
            let ctx = StageContext {
                index,
                stage: stage.label(),
            };
            let rows_before = current.row_count();
            let next = stage.apply(&current)?;

            let report = StageReport {
                stage: stage.clone(),
                rows_before,
                rows_after: next.row_count(),
                users_after: next.user_count(),
            };
            if let Some(obs) = options.observer.as_ref() {
                obs.on_stage(&ctx, &report);
                if rows_before > 0 && report.rows_after == 0 {
                    obs.on_empty(&ctx);
                }
            }
            if rows_before > 0 && report.rows_after == 0 && emptied_at.is_none() {
                emptied_at = Some(index);
            }

            stages.push(report);
            current = next;
        }

        Ok(PlanOutcome {
            table: current,
            stages,
            emptied_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{PlanOptions, RestrictionPlan};
    use crate::restrictions::Restriction;
    use crate::types::{ColumnSpec, Transaction, TransactionTable};

    fn table(rows: &[(i64, i64, i64)]) -> TransactionTable {
        TransactionTable::new(
            ColumnSpec::default(),
            rows.iter().map(|&(u, b, p)| Transaction::new(u, b, p)).collect(),
        )
    }

    #[test]
    fn runs_stages_in_caller_order() {
        let t = table(&[(1, 1, 10), (1, 1, 11), (1, 2, 10), (2, 1, 12)]);
        let plan = RestrictionPlan::new(vec![
            Restriction::ItemsPerBasket { min: 2, max: 10 },
            // On the reduced table user 1 has one basket left.
            Restriction::BasketCountPerUser { min: 1, max: 1 },
        ]);

        let outcome = plan.run(&t, &PlanOptions::default()).unwrap();
        assert_eq!(outcome.table.user_ids(), vec![1]);
        assert_eq!(outcome.stages[0].rows_before, 4);
        assert_eq!(outcome.stages[0].rows_after, 2);
        assert_eq!(outcome.stages[1].rows_after, 2);
        // Input untouched.
        assert_eq!(t.row_count(), 4);
    }

    #[test]
    fn invalid_stage_aborts_before_anything_runs() {
        let t = table(&[(1, 1, 10)]);
        let plan = RestrictionPlan::new(vec![
            Restriction::CustomerCap { count: 1 },
            Restriction::ItemsPerBasket { min: 9, max: 1 },
        ]);

        assert!(plan.run(&t, &PlanOptions::default()).is_err());
    }

    #[test]
    fn emptied_at_marks_the_first_emptying_stage() {
        let t = table(&[(1, 1, 10), (2, 1, 11)]);
        let plan = RestrictionPlan::new(vec![
            // No basket has 5 items; everything is removed here.
            Restriction::ItemsPerBasket { min: 5, max: 9 },
            Restriction::CustomerCap { count: 1 },
        ]);

        let outcome = plan.run(&t, &PlanOptions::default()).unwrap();
        assert!(outcome.table.is_empty());
        assert_eq!(outcome.emptied_at, Some(0));
        // The later stage still ran, as a no-op.
        assert_eq!(outcome.stages.len(), 2);
        assert_eq!(outcome.stages[1].rows_after, 0);
    }

    #[test]
    fn empty_plan_returns_the_input_table() {
        let t = table(&[(1, 1, 10)]);
        let outcome = RestrictionPlan::new(vec![])
            .run(&t, &PlanOptions::default())
            .unwrap();
        assert_eq!(outcome.table, t);
        assert!(outcome.stages.is_empty());
        assert!(outcome.emptied_at.is_none());
    }
}
