//! Parser for the flat properties-file syntax
//!
//! Follows the conventional load semantics: natural lines are split on
//! `\n`, `\r\n` or `\r`; blank and comment lines (`#` or `!` first) are
//! skipped; a line ending in an odd number of backslashes continues onto the
//! next natural line; the key ends at the first unescaped `=`, `:` or
//! whitespace character; escape sequences are decoded last.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::properties::Properties;

/// Whitespace characters recognized by the format (not `\n`/`\r`, which are
/// line terminators).
const WS: [char; 3] = [' ', '\t', '\x0c'];

/// Parse properties-file text into a [`Properties`] set.
///
/// Returns an error only for malformed `\uXXXX` escapes; everything else in
/// the format is total (unknown escapes collapse to the escaped character, a
/// lone trailing backslash is dropped).
pub fn parse(text: &str) -> Result<Properties> {
    let lines = natural_lines(text);
    let mut props = Properties::new();

    let mut idx = 0;
    while idx < lines.len() {
        let line_no = idx + 1;
        let stripped = lines[idx].trim_start_matches(WS);
        idx += 1;

        if stripped.is_empty() || stripped.starts_with(['#', '!']) {
            continue;
        }

        // Fold continuation lines into one logical line. Comment lines are
        // never continued, so this only happens after the entry has started.
        let mut logical = stripped.to_string();
        while ends_with_odd_backslashes(&logical) && idx < lines.len() {
            logical.pop();
            logical.push_str(lines[idx].trim_start_matches(WS));
            idx += 1;
        }

        let (raw_key, raw_value) = split_entry(&logical);
        props.insert(unescape(raw_key, line_no)?, unescape(raw_value, line_no)?);
    }

    Ok(props)
}

/// Read and parse the properties file at `path`.
///
/// The file is decoded as ISO-8859-1 (each byte maps to the code point of
/// the same value); characters outside that range travel as `\uXXXX`
/// escapes and are restored during parsing.
pub fn read(path: impl AsRef<Path>) -> Result<Properties> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
    parse(&decode_latin1(&bytes))
}

fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/// Split text into natural lines, handling `\n`, `\r\n` and lone `\r`.
fn natural_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let bytes = text.as_bytes();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                i += 1;
                if bytes.get(i) == Some(&b'\n') {
                    i += 1;
                }
                start = i;
            }
            _ => i += 1,
        }
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// A line continues when it ends in an odd number of backslashes (an even
/// count is a run of escaped backslashes).
fn ends_with_odd_backslashes(line: &str) -> bool {
    line.bytes().rev().take_while(|&b| b == b'\\').count() % 2 == 1
}

/// Split a logical line into raw (still-escaped) key and value parts.
///
/// The key ends at the first unescaped `=`, `:` or whitespace character.
/// Whitespace around a single separator character is consumed; trailing
/// whitespace of the value is kept.
fn split_entry(line: &str) -> (&str, &str) {
    let mut escaped = false;
    let mut key_end = line.len();
    let mut found_sep = false;

    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => {
                key_end = i;
                found_sep = true;
                break;
            }
            c if WS.contains(&c) => {
                key_end = i;
                break;
            }
            _ => {}
        }
    }

    let key = &line[..key_end];
    if key_end == line.len() {
        return (key, "");
    }

    let mut rest = &line[key_end..];
    if found_sep {
        rest = &rest[1..];
        rest = rest.trim_start_matches(WS);
    } else {
        // Stopped at whitespace: the separator, if any, follows it.
        rest = rest.trim_start_matches(WS);
        if let Some(after_sep) = rest.strip_prefix(['=', ':']) {
            rest = after_sep.trim_start_matches(WS);
        }
    }
    (key, rest)
}

/// Decode escape sequences in a raw key or value.
fn unescape(raw: &str, line: usize) -> Result<String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            // A lone trailing backslash is dropped.
            None => break,
            Some('u') => {
                let mut code = 0u32;
                for _ in 0..4 {
                    let digit = chars
                        .next()
                        .and_then(|d| d.to_digit(16))
                        .ok_or(Error::InvalidEscape { line })?;
                    code = code * 16 + digit;
                }
                let decoded = char::from_u32(code).ok_or(Error::InvalidEscape { line })?;
                out.push(decoded);
            }
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('f') => out.push('\x0c'),
            Some('r') => out.push('\r'),
            Some(other) => out.push(other),
        }
    }

    Ok(out)
}
