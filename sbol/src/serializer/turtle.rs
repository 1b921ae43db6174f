//! Turtle 1.1 serializer.
//!
//! Triples are grouped by subject in first-seen order. IRIs in the SBOL,
//! RDF, PROV, Dublin Core and XSD namespaces are written as prefixed names
//! when their local part allows it.

use indexmap::IndexMap;

use crate::graph::Triple;
use crate::model::{Uri, Value};
use crate::vocab::{DCTERMS, PROV, RDF, RDF_TYPE, SBOL, XSD};

use super::quoted;

const PREFIXES: &[(&str, &str)] = &[
    ("sbol", SBOL),
    ("rdf", RDF),
    ("dcterms", DCTERMS),
    ("prov", PROV),
    ("xsd", XSD),
];

/// Serializes triples to a Turtle string.
#[must_use]
pub fn to_turtle(triples: &[Triple]) -> String {
    let mut out = String::with_capacity(triples.len() * 64);
    for (prefix, ns) in PREFIXES {
        out.push_str(&format!("@prefix {prefix}: <{ns}> .\n"));
    }
    out.push('\n');

    let mut subjects: IndexMap<&Uri, Vec<&Triple>> = IndexMap::new();
    for t in triples {
        subjects.entry(&t.subject).or_default().push(t);
    }
    for (subject, statements) in subjects {
        out.push_str(&node(subject));
        for (i, t) in statements.iter().enumerate() {
            out.push_str(if i == 0 { "\n  " } else { " ;\n  " });
            if t.predicate == RDF_TYPE {
                out.push('a');
            } else {
                out.push_str(&name(&t.predicate));
            }
            out.push(' ');
            out.push_str(&object(&t.object));
        }
        out.push_str(" .\n\n");
    }
    out
}

fn name(iri: &str) -> String {
    for (prefix, ns) in PREFIXES {
        if let Some(local) = iri.strip_prefix(ns) {
            if is_local_name(local) {
                return format!("{prefix}:{local}");
            }
        }
    }
    format!("<{iri}>")
}

fn is_local_name(local: &str) -> bool {
    let mut chars = local.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn node(uri: &Uri) -> String {
    if uri.is_blank() {
        uri.to_string()
    } else {
        name(uri.as_str())
    }
}

fn object(value: &Value) -> String {
    match value {
        Value::Uri(uri) => node(uri),
        Value::Literal(lit) => match lit.datatype() {
            Some(dt) => format!("{}^^{}", quoted(lit), name(dt)),
            None => quoted(lit),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Literal;
    use crate::vocab::{SBOL_DISPLAY_ID, SBOL_ROLES, SO_PROMOTER};

    #[test]
    fn groups_statements_by_subject() {
        let subject = Uri::from("http://a.org/pTet/1");
        let triples = vec![
            Triple::new(
                subject.clone(),
                RDF_TYPE,
                Value::Uri(Uri::from("http://sbols.org/v2#ComponentDefinition")),
            ),
            Triple::new(subject.clone(), SBOL_DISPLAY_ID, Value::Literal(Literal::new("pTet"))),
            Triple::new(subject, SBOL_ROLES, Value::Uri(Uri::from(SO_PROMOTER))),
        ];
        let ttl = to_turtle(&triples);
        assert!(ttl.contains("@prefix sbol: <http://sbols.org/v2#> ."));
        assert!(ttl.contains("<http://a.org/pTet/1>\n  a sbol:ComponentDefinition ;\n  sbol:displayId \"pTet\" ;"));
        assert!(ttl.contains(&format!("sbol:role <{SO_PROMOTER}> .")));
        assert_eq!(ttl.matches("<http://a.org/pTet/1>").count(), 1);
    }

    #[test]
    fn prefixed_names_need_plain_local_parts() {
        assert_eq!(name("http://sbols.org/v2#displayId"), "sbol:displayId");
        assert_eq!(name("http://sbols.org/v2#a.b"), "<http://sbols.org/v2#a.b>");
        assert_eq!(name("http://other.org/x"), "<http://other.org/x>");
    }
}
