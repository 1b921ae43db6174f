//! In-memory triple store fed by the sophia parsers.
//!
//! Parsing is delegated to `sophia_xml` (RDF/XML) and `sophia_turtle`
//! (Turtle, N-Triples). Terms are copied into the crate's own [`Uri`] and
//! [`Literal`] types as they stream in, and a subject index is kept so the
//! document loader can visit each resource once.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use indexmap::IndexMap;
use sophia_api::source::TripleSource;
use sophia_api::term::{Term, TermKind};
use sophia_api::triple::Triple as _;
use tracing::debug;

use crate::error::{Error, Result};
use crate::model::{Literal, Uri, Value};
use crate::vocab::{RDF_LANG_STRING, RDF_TYPE, XSD_STRING};

/// Serialization formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RdfFormat {
    /// RDF/XML, the SBOL exchange format.
    RdfXml,
    /// Turtle.
    Turtle,
    /// N-Triples.
    NTriples,
}

impl RdfFormat {
    /// Guesses the format from a file extension (`.xml`, `.rdf`, `.sbol`,
    /// `.ttl`, `.nt`).
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "xml" | "rdf" | "sbol" => Some(RdfFormat::RdfXml),
            "ttl" => Some(RdfFormat::Turtle),
            "nt" => Some(RdfFormat::NTriples),
            _ => None,
        }
    }

    /// Conventional file extension.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            RdfFormat::RdfXml => "xml",
            RdfFormat::Turtle => "ttl",
            RdfFormat::NTriples => "nt",
        }
    }
}

/// One RDF statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triple {
    /// Subject IRI or `_:` blank node label.
    pub subject: Uri,
    /// Predicate IRI.
    pub predicate: String,
    /// Object term.
    pub object: Value,
}

impl Triple {
    /// Creates a triple.
    pub fn new(subject: Uri, predicate: impl Into<String>, object: Value) -> Self {
        Self {
            subject,
            predicate: predicate.into(),
            object,
        }
    }
}

/// A list of triples indexed by subject.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    triples: Vec<Triple>,
    by_subject: IndexMap<String, Vec<usize>>,
}

impl Graph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `text` in the given format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] if the text is not valid RDF.
    pub fn parse_str(text: &str, format: RdfFormat) -> Result<Self> {
        Self::parse_reader(text.as_bytes(), format)
    }

    /// Parses a file in the given format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileNotFound`] or [`Error::Io`] if the file cannot be
    /// opened and [`Error::Serialization`] if it is not valid RDF.
    pub fn parse_file(path: &Path, format: RdfFormat) -> Result<Self> {
        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        Self::parse_reader(BufReader::new(file), format)
    }

    /// Parses from any buffered reader.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] if the input is not valid RDF.
    pub fn parse_reader<R: BufRead>(reader: R, format: RdfFormat) -> Result<Self> {
        let mut graph = Graph::new();
        let mut skipped = 0usize;
        let mut sink = |subject: Option<Uri>, predicate: Option<Uri>, object: Option<Value>| {
            match (subject, predicate, object) {
                (Some(s), Some(p), Some(o)) => graph.insert(Triple::new(s, p.into_string(), o)),
                _ => skipped += 1,
            }
        };
        let outcome = match format {
            RdfFormat::RdfXml => sophia_xml::parser::parse_bufread(reader)
                .for_each_triple(|t| sink(resource(&t.s()), resource(&t.p()), value(&t.o())))
                .map_err(|e| e.to_string()),
            RdfFormat::Turtle => sophia_turtle::parser::turtle::parse_bufread(reader)
                .for_each_triple(|t| sink(resource(&t.s()), resource(&t.p()), value(&t.o())))
                .map_err(|e| e.to_string()),
            RdfFormat::NTriples => sophia_turtle::parser::nt::parse_bufread(reader)
                .for_each_triple(|t| sink(resource(&t.s()), resource(&t.p()), value(&t.o())))
                .map_err(|e| e.to_string()),
        };
        outcome.map_err(Error::Serialization)?;
        debug!(triples = graph.len(), subjects = graph.by_subject.len(), skipped, ?format, "parsed graph");
        Ok(graph)
    }

    /// Adds a triple.
    pub fn insert(&mut self, triple: Triple) {
        let index = self.triples.len();
        self.by_subject
            .entry(triple.subject.as_str().to_string())
            .or_default()
            .push(index);
        self.triples.push(triple);
    }

    /// Number of triples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// True if the graph holds no triples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Every triple in parse order.
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Distinct subjects in first-seen order.
    pub fn subjects(&self) -> impl Iterator<Item = &str> {
        self.by_subject.keys().map(String::as_str)
    }

    /// Triples about `subject`.
    pub fn about<'a>(&'a self, subject: &str) -> impl Iterator<Item = &'a Triple> {
        self.by_subject
            .get(subject)
            .into_iter()
            .flatten()
            .filter_map(|&i| self.triples.get(i))
    }

    /// `rdf:type` values of `subject`.
    pub fn types<'a>(&'a self, subject: &str) -> impl Iterator<Item = &'a str> {
        self.about(subject)
            .filter(|t| t.predicate == RDF_TYPE)
            .filter_map(|t| t.object.as_uri())
            .map(Uri::as_str)
    }
}

impl FromIterator<Triple> for Graph {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        let mut graph = Graph::new();
        for triple in iter {
            graph.insert(triple);
        }
        graph
    }
}

fn resource<T: Term>(term: &T) -> Option<Uri> {
    match term.kind() {
        TermKind::Iri => term.iri().map(|iri| Uri::new(iri.as_str())),
        TermKind::BlankNode => term.bnode_id().map(|id| Uri::new(format!("_:{}", id.as_str()))),
        _ => None,
    }
}

fn value<T: Term>(term: &T) -> Option<Value> {
    if term.kind() != TermKind::Literal {
        return resource(term).map(Value::Uri);
    }
    let lexical = term.lexical_form()?.to_string();
    if let Some(tag) = term.language_tag() {
        return Some(Value::Literal(Literal::tagged(lexical, tag.as_str())));
    }
    let literal = match term.datatype() {
        Some(dt) if dt.as_str() != XSD_STRING && dt.as_str() != RDF_LANG_STRING => {
            Literal::typed(lexical, dt.as_str())
        }
        _ => Literal::new(lexical),
    };
    Some(Value::Literal(literal))
}
