//! N-Triples serializer.
//!
//! Produces one triple per line with absolute IRIs. Blank nodes keep their
//! `_:` labels.

use crate::graph::Triple;
use crate::model::{Uri, Value};

use super::quoted;

/// Serializes triples to an N-Triples string.
#[must_use]
pub fn to_ntriples(triples: &[Triple]) -> String {
    let mut out = String::with_capacity(triples.len() * 96);
    for t in triples {
        out.push_str(&node(&t.subject));
        out.push_str(" <");
        out.push_str(&t.predicate);
        out.push_str("> ");
        out.push_str(&object(&t.object));
        out.push_str(" .\n");
    }
    out
}

fn node(uri: &Uri) -> String {
    if uri.is_blank() {
        uri.to_string()
    } else {
        format!("<{uri}>")
    }
}

fn object(value: &Value) -> String {
    match value {
        Value::Uri(uri) => node(uri),
        Value::Literal(lit) => match lit.datatype() {
            Some(dt) => format!("{}^^<{}>", quoted(lit), dt),
            None => quoted(lit),
        },
    }
}
