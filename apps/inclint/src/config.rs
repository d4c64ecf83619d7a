//! Configuration discovery and effective settings resolution.
//!
//! inclint reads `inclint.toml|yaml|yml` from the repository root (or closest
//! ancestor) and merges it with CLI flags to produce an `Effective` config.
//! Defaults:
//! - `exclude`: `["libarchive/**"]`
//! - `leading`: `["sys/types.h"]`
//! - `strict`: false
//! - `fail_on_violation`: false
//! - `output`: `human`
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::error::LintError;
use crate::filter::DEFAULT_EXCLUDES;
use crate::order::SYS_TYPES;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_NAMES: [&str; 3] = ["inclint.toml", "inclint.yaml", "inclint.yml"];

#[derive(Debug, Default, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
/// Root configuration loaded from `inclint.toml|yaml`.
pub struct InclintConfig {
    pub exclude: Option<Vec<String>>,
    pub leading: Option<Vec<String>>,
    pub strict: Option<bool>,
    pub fail_on_violation: Option<bool>,
    pub output: Option<String>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by the binary after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    /// Config file that was loaded, if any.
    pub config_path: Option<PathBuf>,
    pub exclude: Vec<String>,
    pub leading: Vec<String>,
    pub strict: bool,
    pub fail_on_violation: bool,
    pub output: String,
}

/// Flag values taken from the command line; `None` defers to the config file.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub repo_root: Option<String>,
    pub output: Option<String>,
    pub strict: Option<bool>,
    pub fail_on_violation: Option<bool>,
    pub no_exclude: bool,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when an `inclint.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if CONFIG_NAMES.iter().any(|n| cur.join(n).exists()) || cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) if !p.as_os_str().is_empty() => cur = p,
            _ => return start.to_path_buf(),
        }
    }
}

/// Locate the config file under `root`, preferring TOML.
pub fn config_path(root: &Path) -> Option<PathBuf> {
    CONFIG_NAMES
        .iter()
        .map(|n| root.join(n))
        .find(|p| p.is_file())
}

/// Load `InclintConfig` from `root`. A missing file is `Ok(None)`; a file
/// that cannot be read or parsed is an error.
pub fn load_config(root: &Path) -> Result<Option<(PathBuf, InclintConfig)>, LintError> {
    let Some(path) = config_path(root) else {
        return Ok(None);
    };
    let s = fs::read_to_string(&path).map_err(|source| LintError::Io {
        path: path.clone(),
        source,
    })?;
    let is_toml = path.extension().is_some_and(|e| e == "toml");
    let cfg = if is_toml {
        toml::from_str::<InclintConfig>(&s).map_err(|e| e.to_string())
    } else {
        serde_yaml::from_str::<InclintConfig>(&s).map_err(|e| e.to_string())
    }
    .map_err(|message| LintError::Config {
        path: path.clone(),
        message,
    })?;
    Ok(Some((path, cfg)))
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(cli: &CliOverrides) -> Result<Effective, LintError> {
    let start = PathBuf::from(cli.repo_root.as_deref().unwrap_or("."));
    let start = fs::canonicalize(&start).unwrap_or(start);
    let repo_root = detect_repo_root(&start);
    let (config_path, cfg) = match load_config(&repo_root)? {
        Some((p, c)) => (Some(p), c),
        None => (None, InclintConfig::default()),
    };

    let exclude = if cli.no_exclude {
        Vec::new()
    } else {
        cfg.exclude
            .unwrap_or_else(|| DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect())
    };
    let leading = cfg.leading.unwrap_or_else(|| vec![SYS_TYPES.to_string()]);
    let strict = cli.strict.or(cfg.strict).unwrap_or(false);
    let fail_on_violation = cli
        .fail_on_violation
        .or(cfg.fail_on_violation)
        .unwrap_or(false);
    let output = match (cli.output.clone(), cfg.output) {
        (Some(o), _) if !is_output_mode(&o) => {
            return Err(LintError::Flag {
                flag: "--output",
                value: o,
                expected: "human|json",
            })
        }
        (None, Some(o)) if !is_output_mode(&o) => {
            return Err(LintError::Config {
                path: config_path.unwrap_or_default(),
                message: format!("unknown output mode '{}' (expected human|json)", o),
            })
        }
        (cli_out, cfg_out) => cli_out.or(cfg_out).unwrap_or_else(|| "human".to_string()),
    };

    Ok(Effective {
        repo_root,
        config_path,
        exclude,
        leading,
        strict,
        fail_on_violation,
        output,
    })
}

fn is_output_mode(s: &str) -> bool {
    s == "human" || s == "json"
}
