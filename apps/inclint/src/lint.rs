//! Lint driver: filters and scans the given files in order.
//!
//! Produces a `LintResult` with violations and a summary. Each file's
//! violations are handed to the caller as soon as the file is scanned, so a
//! later fatal read error does not swallow earlier reports.

use crate::error::LintError;
use crate::filter::PathFilter;
use crate::models::{LintResult, Violation};
use crate::scan::{scan_file, ScanOptions};
use std::path::Path;
use tracing::{debug, info};

/// Run the include-order lint across `paths`.
///
/// Excluded paths are never opened. The first I/O or decoding error stops the
/// run and is returned; files after it are not checked.
pub fn run_lint<P, F>(
    paths: &[P],
    filter: &dyn PathFilter,
    opts: &ScanOptions,
    mut on_file: F,
) -> Result<LintResult, LintError>
where
    P: AsRef<Path>,
    F: FnMut(&[Violation]),
{
    let mut result = LintResult::default();
    for path in paths {
        let path = path.as_ref();
        if filter.is_excluded(path) {
            debug!(file = %path.display(), "excluded");
            result.summary.excluded += 1;
            continue;
        }
        let found = scan_file(path, opts)?;
        result.summary.files += 1;
        if !found.is_empty() {
            info!(file = %path.display(), violations = found.len(), "non-alphabetical include blocks");
            on_file(&found);
        }
        result.violations.extend(found);
    }
    result.summary.violations = result.violations.len();
    Ok(result)
}
