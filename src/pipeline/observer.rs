use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use super::StageReport;

/// Context about the stage a callback refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageContext {
    /// Zero-based position of the stage in the plan.
    pub index: usize,
    /// Stable stage name (see [`crate::restrictions::Restriction::label`]).
    pub stage: &'static str,
}

/// Observer interface for pipeline progress.
///
/// Implementors can record logs or metrics per stage. The `on_empty`
/// callback is how an empty result is surfaced: a stage that removes every
/// remaining row is not an error (the run continues and writes empty
/// output), but it usually means a restriction was stricter than intended,
/// so it is reported rather than passing silently.
pub trait RestrictionObserver: Send + Sync {
    /// Called after each stage with its before/after counts.
    fn on_stage(&self, _ctx: &StageContext, _report: &StageReport) {}

    /// Called once when a stage first leaves the table empty.
    fn on_empty(&self, _ctx: &StageContext) {}
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn RestrictionObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn RestrictionObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl RestrictionObserver for CompositeObserver {
    fn on_stage(&self, ctx: &StageContext, report: &StageReport) {
        for o in &self.observers {
            o.on_stage(ctx, report);
        }
    }

    fn on_empty(&self, ctx: &StageContext) {
        for o in &self.observers {
            o.on_empty(ctx);
        }
    }
}

/// Logs pipeline events to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl RestrictionObserver for StdErrObserver {
    fn on_stage(&self, ctx: &StageContext, report: &StageReport) {
        eprintln!(
            "[restrict][{}] stage={} rows {} -> {} users={}",
            ctx.index, ctx.stage, report.rows_before, report.rows_after, report.users_after
        );
    }

    fn on_empty(&self, ctx: &StageContext) {
        eprintln!(
            "[restrict][warn] stage={} (index {}) removed every remaining row",
            ctx.stage, ctx.index
        );
    }
}

/// Appends pipeline events to a local log file.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileObserver {
    /// Create a file observer that appends events to `path`.
    ///
    /// Writes are best-effort; failures to open/write the log file are ignored.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    fn append_line(&self, line: &str) {
        let _guard = self.lock.lock().ok();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{line}");
        }
    }
}

impl RestrictionObserver for FileObserver {
    fn on_stage(&self, ctx: &StageContext, report: &StageReport) {
        self.append_line(&format!(
            "{} stage index={} name={} rows_before={} rows_after={} users_after={}",
            unix_ts(),
            ctx.index,
            ctx.stage,
            report.rows_before,
            report.rows_after,
            report.users_after
        ));
    }

    fn on_empty(&self, ctx: &StageContext) {
        self.append_line(&format!(
            "{} WARN empty-result index={} name={}",
            unix_ts(),
            ctx.index,
            ctx.stage
        ));
    }
}

pub(crate) fn unix_ts() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
