//! Record loading and load observability.
//!
//! Most callers use [`load_from_path`], which:
//!
//! - opens the file and reads it to completion via [`csv::load_from_reader`]
//! - returns a [`LoadReport`] (records in file order + one [`RowSkip`] per rejected
//!   row)
//! - optionally reports the header, each skip, and the overall outcome to a
//!   [`LoadObserver`]
//!
//! Already-open sources can be loaded directly with [`csv::load_from_reader`], which
//! performs no observer reporting.

pub mod csv;
pub mod observability;
pub mod report;

use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use crate::error::{LoadError, LoadResult};

pub use observability::{
    CompositeObserver, FileObserver, LoadContext, LoadObserver, LoadSeverity, LoadStats,
    StdErrObserver,
};
pub use report::{LoadReport, RowSkip, SkipReason};

/// Options controlling load behavior.
///
/// Use [`Default`] for common cases (no observer, alerts only at Critical).
#[derive(Clone)]
pub struct LoadOptions {
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn LoadObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: LoadSeverity,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            observer: None,
            alert_at_or_above: LoadSeverity::Critical,
        }
    }
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

/// Load records from the file at `path`.
///
/// An unopenable source (and any mid-read failure) fails with
/// [`LoadError::SourceUnavailable`]; everything else is a per-row decision recorded
/// in [`LoadReport::skipped`]. When an observer is configured, this function reports:
///
/// - `on_header` with the consumed header line
/// - `on_row_skipped` once per diagnostic, in file order
/// - `on_success` with row/skip counts
/// - `on_failure` on failure, and `on_alert` when the severity is >=
///   `options.alert_at_or_above`
pub fn load_from_path(path: impl AsRef<Path>, options: &LoadOptions) -> LoadResult<LoadReport> {
    let path = path.as_ref();
    let ctx = LoadContext {
        path: path.to_path_buf(),
    };

    let result = open_and_load(path);

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok(report) => {
                if let Some(header) = report.header.as_deref() {
                    obs.on_header(&ctx, header);
                }
                for skip in &report.skipped {
                    obs.on_row_skipped(&ctx, skip);
                }
                obs.on_success(
                    &ctx,
                    LoadStats {
                        rows: report.book_count(),
                        skipped: report.skip_count(),
                    },
                );
            }
            Err(e) => {
                let sev = severity_for_error(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result
}

fn open_and_load(path: &Path) -> LoadResult<LoadReport> {
    let file = File::open(path).map_err(|cause| LoadError::SourceUnavailable {
        path: path.to_path_buf(),
        cause,
    })?;

    // A read failure after open is still a whole-source failure for path loads.
    csv::load_from_reader(BufReader::new(file)).map_err(|e| match e {
        LoadError::Io(cause) => LoadError::SourceUnavailable {
            path: path.to_path_buf(),
            cause,
        },
        other => other,
    })
}

fn severity_for_error(e: &LoadError) -> LoadSeverity {
    match e {
        LoadError::Io(_) | LoadError::SourceUnavailable { .. } => LoadSeverity::Critical,
    }
}
