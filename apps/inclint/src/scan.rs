//! Per-file scanner: groups consecutive include lines into blocks and
//! validates each block when a non-include line ends it.
//!
//! A block still open at end of file is only checked in strict mode.

use crate::error::LintError;
use crate::include::included_filename;
use crate::models::Violation;
use crate::order::OrderRules;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    pub rules: OrderRules,
    /// Also validate a block that runs to end of file.
    pub strict: bool,
}

/// Scan the file at `path`. Open, read and UTF-8 errors are fatal.
pub fn scan_file(path: &Path, opts: &ScanOptions) -> Result<Vec<Violation>, LintError> {
    let file = File::open(path).map_err(|source| LintError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    scan_reader(path, BufReader::new(file), opts)
}

/// Scan already-open input; `path` is used for reports and errors only.
pub fn scan_reader<R: BufRead>(
    path: &Path,
    mut reader: R,
    opts: &ScanOptions,
) -> Result<Vec<Violation>, LintError> {
    let name = path.to_string_lossy().to_string();
    let mut violations = Vec::new();
    let mut block: Vec<String> = Vec::new();
    let mut line_no = 0usize;

    let mut buf = Vec::new();
    loop {
        buf.clear();
        let n = reader.read_until(b'\n', &mut buf).map_err(|source| LintError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if n == 0 {
            break;
        }
        // `\n`, `\r\n` and a lone `\r` all end a line.
        let mut body = buf.as_slice();
        body = body.strip_suffix(b"\n").unwrap_or(body);
        body = body.strip_suffix(b"\r").unwrap_or(body);
        for raw in body.split(|&b| b == b'\r') {
            line_no += 1;
            let line = std::str::from_utf8(raw).map_err(|_| LintError::Decode {
                path: path.to_path_buf(),
                line: line_no,
            })?;
            if let Some(inc) = included_filename(line) {
                block.push(inc.to_string());
            } else if !block.is_empty() {
                flush(&name, line_no, &mut block, opts, &mut violations);
            }
        }
    }

    if !block.is_empty() {
        if opts.strict {
            flush(&name, line_no + 1, &mut block, opts, &mut violations);
        } else {
            debug!(file = %name, includes = block.len(), "unchecked block at end of file");
        }
    }
    Ok(violations)
}

fn flush(
    name: &str,
    line: usize,
    block: &mut Vec<String>,
    opts: &ScanOptions,
    out: &mut Vec<Violation>,
) {
    let includes = std::mem::take(block);
    if !opts.rules.is_ordered(&includes) {
        out.push(Violation {
            file: name.to_string(),
            line,
            includes,
        });
    }
}
