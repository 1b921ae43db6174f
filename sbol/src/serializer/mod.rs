//! Writers for SBOL documents.
//!
//! Two formats are produced from a flat triple list:
//! - **N-Triples** ([`ntriples`]): one statement per line, absolute IRIs
//! - **Turtle** ([`turtle`]): grouped by subject, with SBOL prefixes
//!
//! RDF/XML output is not provided.

pub mod ntriples;
pub mod turtle;

use crate::model::Literal;

/// Escapes a lexical form for a double-quoted N-Triples/Turtle string.
pub(crate) fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out
}

/// Quoted literal with its language tag; the datatype is left to the caller.
pub(crate) fn quoted(literal: &Literal) -> String {
    match literal.language() {
        Some(tag) => format!("\"{}\"@{}", escape(literal.as_str()), tag),
        None => format!("\"{}\"", escape(literal.as_str())),
    }
}
