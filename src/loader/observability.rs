//! Observer interface for load outcomes and skip diagnostics.

use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use serde::Serialize;
use serde_json::json;

use crate::error::LoadError;

use super::report::RowSkip;

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LoadSeverity {
    /// Informational event.
    Info,
    /// Warning-level event (non-fatal, e.g. a skipped row).
    Warning,
    /// Error-level event (operation failed).
    Error,
    /// Critical error (typically an unreadable source).
    Critical,
}

/// Context about a load attempt.
#[derive(Debug, Clone)]
pub struct LoadContext {
    /// The input path used for the load.
    pub path: PathBuf,
}

/// Minimal stats reported on successful load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoadStats {
    /// Number of loaded records.
    pub rows: usize,
    /// Number of rows excluded with a diagnostic.
    pub skipped: usize,
}

/// Observer interface for load outcomes.
///
/// Implementors can record metrics, logs, or trigger alerts. All callbacks default
/// to no-ops so implementors override only what they need.
pub trait LoadObserver: Send + Sync {
    /// Called once with the consumed header line.
    fn on_header(&self, _ctx: &LoadContext, _header: &str) {}

    /// Called once per excluded row, in file order.
    fn on_row_skipped(&self, _ctx: &LoadContext, _skip: &RowSkip) {}

    /// Called when the load completes.
    fn on_success(&self, _ctx: &LoadContext, _stats: LoadStats) {}

    /// Called when the load fails.
    fn on_failure(&self, _ctx: &LoadContext, _severity: LoadSeverity, _error: &LoadError) {}

    /// Called when a load failure meets an alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &LoadContext, severity: LoadSeverity, error: &LoadError) {
        self.on_failure(ctx, severity, error)
    }
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn LoadObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn LoadObserver>>) -> Self {
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

impl LoadObserver for CompositeObserver {
    fn on_header(&self, ctx: &LoadContext, header: &str) {
        for o in &self.observers {
            o.on_header(ctx, header);
        }
    }

    fn on_row_skipped(&self, ctx: &LoadContext, skip: &RowSkip) {
        for o in &self.observers {
            o.on_row_skipped(ctx, skip);
        }
    }

    fn on_success(&self, ctx: &LoadContext, stats: LoadStats) {
        for o in &self.observers {
            o.on_success(ctx, stats);
        }
    }

    fn on_failure(&self, ctx: &LoadContext, severity: LoadSeverity, error: &LoadError) {
        for o in &self.observers {
            o.on_failure(ctx, severity, error);
        }
    }

    fn on_alert(&self, ctx: &LoadContext, severity: LoadSeverity, error: &LoadError) {
        for o in &self.observers {
            o.on_alert(ctx, severity, error);
        }
    }
}

/// Logs load events to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl LoadObserver for StdErrObserver {
    fn on_header(&self, ctx: &LoadContext, header: &str) {
        eprintln!("[load][header] path={} header={header}", ctx.path.display());
    }

    fn on_row_skipped(&self, ctx: &LoadContext, skip: &RowSkip) {
        eprintln!("[load][skip] path={} {skip}", ctx.path.display());
    }

    fn on_success(&self, ctx: &LoadContext, stats: LoadStats) {
        eprintln!(
            "[load][ok] path={} rows={} skipped={}",
            ctx.path.display(),
            stats.rows,
            stats.skipped
        );
    }

    fn on_failure(&self, ctx: &LoadContext, severity: LoadSeverity, error: &LoadError) {
        eprintln!(
            "[load][{severity:?}] path={} err={error}",
            ctx.path.display()
        );
    }

    fn on_alert(&self, ctx: &LoadContext, severity: LoadSeverity, error: &LoadError) {
        eprintln!(
            "[ALERT][load][{severity:?}] path={} err={error}",
            ctx.path.display()
        );
    }
}

/// Appends load events to a local log file as JSON lines.
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

    fn append_json(&self, value: serde_json::Value) {
        let _guard = self.lock.lock().ok();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{value}");
        }
    }
}

impl LoadObserver for FileObserver {
    fn on_header(&self, ctx: &LoadContext, header: &str) {
        self.append_json(json!({
            "event": "header",
            "path": ctx.path.display().to_string(),
            "header": header,
        }));
    }

    fn on_row_skipped(&self, ctx: &LoadContext, skip: &RowSkip) {
        self.append_json(json!({
            "event": "skip",
            "path": ctx.path.display().to_string(),
            "skip": skip,
        }));
    }

    fn on_success(&self, ctx: &LoadContext, stats: LoadStats) {
        self.append_json(json!({
            "event": "ok",
            "path": ctx.path.display().to_string(),
            "stats": stats,
        }));
    }

    fn on_failure(&self, ctx: &LoadContext, severity: LoadSeverity, error: &LoadError) {
        self.append_json(json!({
            "event": "failure",
            "severity": format!("{severity:?}"),
            "path": ctx.path.display().to_string(),
            "error": error.to_string(),
        }));
    }

    fn on_alert(&self, ctx: &LoadContext, severity: LoadSeverity, error: &LoadError) {
        self.append_json(json!({
            "event": "alert",
            "severity": format!("{severity:?}"),
            "path": ctx.path.display().to_string(),
            "error": error.to_string(),
        }));
    }
}
