//! Include directive recognition.
//!
//! A line counts as an include only when it starts with `#include` at column
//! zero; indented directives are ignored by convention.

const DIRECTIVE: &str = "#include";

/// Return the filename named by an `#include "x"` or `#include <x>` line.
///
/// The first double-quoted span wins over an angle-bracket span. An empty
/// span yields `None`, so `#include ""` behaves like an ordinary line.
pub fn included_filename(line: &str) -> Option<&str> {
    if !line.starts_with(DIRECTIVE) {
        return None;
    }
    let name = delimited(line, '"', '"').or_else(|| delimited(line, '<', '>'))?;
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Interior of the first `open` .. `close` span in `line`.
fn delimited(line: &str, open: char, close: char) -> Option<&str> {
    let start = line.find(open)? + open.len_utf8();
    let len = line[start..].find(close)?;
    Some(&line[start..start + len])
}
