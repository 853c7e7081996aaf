//! Flat `key=value` properties-file syntax
//!
//! Implements the conventional properties-file format used by build tools:
//! one entry per line, `#`/`!` comment lines, `\` line continuation,
//! `=`/`:`/whitespace key separators, escape sequences including `\uXXXX`,
//! and ISO-8859-1 file encoding.
//!
//! This crate is strict: malformed escapes and I/O failures are reported as
//! errors. Callers that want graceful degradation (missing optional files
//! treated as empty) apply that policy themselves.

pub mod error;
pub mod parse;
pub mod properties;

pub use error::{Error, Result};
pub use parse::{parse, read};
pub use properties::Properties;
