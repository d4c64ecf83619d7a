//! inclint CLI binary entry point.
//! Resolves configuration, runs the lint and prints results.

use clap::Parser;
use inclint::cli::{Cli, USAGE};
use inclint::filter::{GlobExclusions, NoExclusions, PathFilter};
use inclint::order::OrderRules;
use inclint::scan::ScanOptions;
use inclint::utils::{error_prefix, note_prefix};
use inclint::{config, lint, output};
use tracing::debug;

fn init_logging(verbose: bool, debug: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if debug {
        "debug"
    } else if verbose {
        "info"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.debug);

    if cli.files.is_empty() {
        println!("{}", USAGE);
        std::process::exit(1);
    }

    let eff = match config::resolve_effective(&cli.overrides()) {
        Ok(eff) => eff,
        Err(e) => {
            eprintln!("{} {}", error_prefix(), e);
            std::process::exit(2);
        }
    };
    match &eff.config_path {
        Some(p) => debug!(config = %p.display(), "loaded config"),
        None if cli.verbose || cli.debug => {
            eprintln!("{} No inclint.toml found; using defaults.", note_prefix())
        }
        None => {}
    }

    let filter: Box<dyn PathFilter> = if eff.exclude.is_empty() {
        Box::new(NoExclusions)
    } else {
        match GlobExclusions::new(&eff.repo_root, &eff.exclude) {
            Ok(f) => Box::new(f),
            Err(e) => {
                eprintln!("{} {}", error_prefix(), e);
                std::process::exit(2);
            }
        }
    };
    let opts = ScanOptions {
        rules: OrderRules::new(eff.leading.clone()),
        strict: eff.strict,
    };

    let human = eff.output != "json";
    let result = lint::run_lint(&cli.files, &*filter, &opts, |found| {
        if human {
            output::print_human(found);
        }
    });
    let result = match result {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{} {}", error_prefix(), e);
            std::process::exit(2);
        }
    };
    if !human {
        output::print_json(&result);
    }
    // Violations only fail the run when asked to.
    if eff.fail_on_violation && result.summary.violations > 0 {
        std::process::exit(1);
    }
}
