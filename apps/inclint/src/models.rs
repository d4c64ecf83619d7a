//! Result records produced by the scanner and the driver.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// An include block that is not in alphabetical order.
pub struct Violation {
    /// Path exactly as it was given on the command line.
    pub file: String,
    /// 1-based number of the line that ended the block.
    pub line: usize,
    pub includes: Vec<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub violations: usize,
    /// Files that were opened and scanned.
    pub files: usize,
    /// Files skipped by the exclusion filter.
    pub excluded: usize,
}

#[derive(Debug, Default, Serialize)]
/// Aggregated lint results.
pub struct LintResult {
    pub violations: Vec<Violation>,
    pub summary: Summary,
}
