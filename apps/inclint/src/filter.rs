//! Path exclusion policies consulted before a file is opened.

use crate::error::LintError;
use glob::{MatchOptions, Pattern};
use std::path::{Component, Path, PathBuf};
use std::{env, fs};

/// Vendored third-party tree skipped by default.
pub const DEFAULT_EXCLUDES: &[&str] = &["libarchive/**"];

/// Decides whether a path is skipped entirely (never read, never reported).
pub trait PathFilter {
    fn is_excluded(&self, path: &Path) -> bool;
}

impl<F> PathFilter for F
where
    F: Fn(&Path) -> bool,
{
    fn is_excluded(&self, path: &Path) -> bool {
        self(path)
    }
}

/// Checks every path.
pub struct NoExclusions;

impl PathFilter for NoExclusions {
    fn is_excluded(&self, _path: &Path) -> bool {
        false
    }
}

/// Glob-based exclusions, matched against paths relative to the repo root.
pub struct GlobExclusions {
    root: PathBuf,
    patterns: Vec<Pattern>,
}

impl GlobExclusions {
    pub fn new<S: AsRef<str>>(root: &Path, patterns: &[S]) -> Result<Self, LintError> {
        let patterns = patterns
            .iter()
            .map(|p| {
                Pattern::new(p.as_ref()).map_err(|source| LintError::Pattern {
                    pattern: p.as_ref().to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            root: fs::canonicalize(root).unwrap_or_else(|_| root.to_path_buf()),
            patterns,
        })
    }

    /// `path` relative to the repo root; relative inputs are taken from the
    /// current directory, which may be below the root.
    fn relative(&self, path: &Path) -> PathBuf {
        let abs = if path.is_absolute() {
            path.to_path_buf()
        } else {
            match env::current_dir().and_then(fs::canonicalize) {
                Ok(cwd) => cwd.join(path),
                Err(_) => path.to_path_buf(),
            }
        };
        let abs = fs::canonicalize(&abs).unwrap_or_else(|_| normalize(&abs));
        pathdiff::diff_paths(&abs, &self.root).unwrap_or(abs)
    }
}

/// Lexically drop `.` and resolve `..` for paths that do not exist on disk.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for c in path.components() {
        match c {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push(c);
                }
            }
            c => out.push(c),
        }
    }
    out
}

impl PathFilter for GlobExclusions {
    fn is_excluded(&self, path: &Path) -> bool {
        let rel = self.relative(path);
        if rel.is_absolute() || rel.starts_with("..") {
            return false;
        }
        let opts = MatchOptions {
            case_sensitive: true,
            require_literal_separator: true,
            require_literal_leading_dot: false,
        };
        self.patterns
            .iter()
            .any(|p| p.matches_path_with(&rel, opts))
    }
}
