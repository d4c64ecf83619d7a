//! CLI argument parsing via `clap`.

use crate::config::CliOverrides;
use clap::Parser;

/// Printed on stdout when no files are given.
pub const USAGE: &str = "Manual usage: specify the filename\n\
Automatic usage: find . -name \"*.[ch]\" | xargs inclint";

#[derive(Parser, Debug)]
#[command(
    name = "inclint",
    version,
    about = "Check that #include blocks in C files are alphabetical",
    long_about = "inclint — checks that each block of consecutive #include lines is sorted, allowing sys/types.h to lead.\n\nConfiguration precedence: CLI > inclint.toml > defaults.",
    after_help = "Examples:\n  inclint lib/util/warnp.c\n  find . -name \"*.h\" | xargs inclint --check"
)]
/// Top-level CLI options.
pub struct Cli {
    #[arg(help = "C source or header files to check")]
    pub files: Vec<String>,
    #[arg(long, help = "Repository root (default: current dir)")]
    pub repo_root: Option<String>,
    #[arg(long, help = "Output mode: human|json (default: human)")]
    pub output: Option<String>,
    #[arg(long, action = clap::ArgAction::SetTrue, help = "Also check an include block that runs to end of file")]
    pub strict: bool,
    #[arg(long, action = clap::ArgAction::SetTrue, help = "Exit non-zero when violations are found")]
    pub check: bool,
    #[arg(long, action = clap::ArgAction::SetTrue, help = "Check every file, ignoring exclude patterns")]
    pub no_exclude: bool,
    #[arg(long, short = 'v', action = clap::ArgAction::SetTrue, help = "Enable info-level logging to stderr")]
    pub verbose: bool,
    #[arg(long, action = clap::ArgAction::SetTrue, help = "Enable debug-level logging to stderr")]
    pub debug: bool,
}

impl Cli {
    /// Flags that override the config file; unset switches defer to it.
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            repo_root: self.repo_root.clone(),
            output: self.output.clone(),
            strict: self.strict.then_some(true),
            fail_on_violation: self.check.then_some(true),
            no_exclude: self.no_exclude,
        }
    }
}
