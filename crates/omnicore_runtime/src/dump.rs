//! Token and tree dumps for `--tokens`, `--ast`, and their REPL toggles.
//!
//! Text dumps are meant for people; JSON dumps go through `serde_json` and
//! are meant for tools.

use std::fmt::Write;

use omnicore_foundation::{Error, ErrorKind, Result};
use omnicore_language::{Document, Token};
use serde::Serialize;

/// Formats a token stream, one token per line.
#[must_use]
pub fn format_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        let _ = writeln!(
            out,
            "{:>4}:{:<3} {:<16} {:?}",
            token.span.line,
            token.span.column,
            format!("{:?}", token.kind),
            token.text
        );
    }
    out
}

/// Formats a document tree.
#[must_use]
pub fn format_document(document: &Document) -> String {
    format!("{:#?}", document.statements)
}

/// Serializes tokens or a document to pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| Error::new(ErrorKind::Serialization(e.to_string())))
}
