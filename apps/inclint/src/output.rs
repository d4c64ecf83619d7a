//! Output rendering for lint results.
//!
//! Supports `human` (default) and `json` outputs. Human output is streamed
//! per file and kept free of colour since CI logs and scripts consume it;
//! the JSON form is printed once with a top-level summary.

use crate::models::{LintResult, Violation};
use serde_json::Value as JsonVal;
use std::fmt::Write as _;

pub const HEADER: &str = "Non-alphabetical include block";

/// Render one violation as its four-line human report.
pub fn render_violation(v: &Violation) -> String {
    format!(
        "{}\n\t{}\n\tstarts line {}\n\t{}\n",
        HEADER,
        v.file,
        v.line,
        list_repr(&v.includes)
    )
}

/// Print violations for one file in human form.
pub fn print_human(violations: &[Violation]) {
    for v in violations {
        print!("{}", render_violation(v));
    }
}

/// Print the whole result as pretty JSON.
pub fn print_json(res: &LintResult) {
    match serde_json::to_string_pretty(&compose_lint_json(res)) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("{} {}", crate::utils::error_prefix(), e),
    }
}

/// Compose lint JSON object (pure) for testing/snapshot purposes.
pub fn compose_lint_json(res: &LintResult) -> JsonVal {
    serde_json::to_value(res).unwrap_or(JsonVal::Null)
}

/// Render tokens as a list literal: `['a.h', 'b.h']`.
pub fn list_repr<S: AsRef<str>>(items: &[S]) -> String {
    let mut out = String::from("[");
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&str_repr(item.as_ref()));
    }
    out.push(']');
    out
}

fn str_repr(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\n' => out.push_str("\\n"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if (c as u32) < 0x20 || c == '\x7f' => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}
