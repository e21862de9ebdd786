//! Output emission: the restricted history/future pair and the JSON
//! restriction summary.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::RestrictResult;
use crate::ingestion::write_transactions_to_path;
use crate::pipeline::observer::unix_ts;
use crate::restrictions::Restriction;
use crate::split::SplitTables;
use crate::stats::TableStats;

/// Where [`write_split`] placed the two partition files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPaths {
    /// `<out_dir>/<dataset>_history.csv`
    pub history: PathBuf,
    /// `<out_dir>/<dataset>_future.csv`
    pub future: PathBuf,
}

/// Write a split pair as `<dataset>_history.csv` / `<dataset>_future.csv`
/// under `out_dir`, creating the directory if needed.
///
/// Both files carry the tables' configured column names as headers, so the
/// output is re-ingestable with the same [`crate::types::ColumnSpec`]. An
/// empty partition still produces a file with a header row.
pub fn write_split(
    split: &SplitTables,
    out_dir: impl AsRef<Path>,
    dataset: &str,
) -> RestrictResult<ExportPaths> {
    let out_dir = out_dir.as_ref();
    fs::create_dir_all(out_dir)?;

    let paths = ExportPaths {
        history: out_dir.join(format!("{dataset}_history.csv")),
        future: out_dir.join(format!("{dataset}_future.csv")),
    };
    write_transactions_to_path(&split.history, &paths.history)?;
    write_transactions_to_path(&split.future, &paths.future)?;
    Ok(paths)
}

/// Flat record of one restriction run: which stages were applied to which
/// dataset, with before/after statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestrictionRecord {
    /// Dataset label.
    pub dataset: String,
    /// Creation time, unix seconds.
    pub created_unix: u64,
    /// Statistics of the table before any restriction ran.
    pub original_stats: TableStats,
    /// Statistics of the restricted table.
    pub restricted_stats: TableStats,
    /// Applied stages, in execution order.
    pub restrictions: Vec<Restriction>,
}

impl RestrictionRecord {
    /// Assemble a record stamped with the current time.
    pub fn new(
        dataset: impl Into<String>,
        original_stats: TableStats,
        restricted_stats: TableStats,
        restrictions: Vec<Restriction>,
    ) -> Self {
        Self {
            dataset: dataset.into(),
            created_unix: unix_ts(),
            original_stats,
            restricted_stats,
            restrictions,
        }
    }
}

/// Write the summary record as pretty-printed JSON to
/// `<out_dir>/<dataset>_restrictions.json`, returning the path.
pub fn write_summary(
    record: &RestrictionRecord,
    out_dir: impl AsRef<Path>,
) -> RestrictResult<PathBuf> {
    let out_dir = out_dir.as_ref();
    fs::create_dir_all(out_dir)?;

    let path = out_dir.join(format!("{}_restrictions.json", record.dataset));
    fs::write(&path, serde_json::to_string_pretty(record)?)?;
    Ok(path)
}
