//! SBOL 2 design documents as a typed object model over RDF triples.
//!
//! The `sbol` crate exposes the synthetic-biology classes of the SBOL 2
//! standard (ComponentDefinition, ModuleDefinition, Sequence, Model,
//! Collection and their nested children) as [`Identified`] objects whose
//! attributes live in a predicate-keyed property table. Every write goes
//! through a [`PropertyDescriptor`] that enforces cardinality, value kind and
//! allowed values; identities follow the compliant-URI scheme
//! `homespace/displayId/version`.
//!
//! # Entry Point
//!
//! ```
//! use sbol::kinds::component_definition as cd;
//! use sbol::{Config, Document, ObjectKind};
//!
//! let config = Config::new("http://sbols.org/CRISPR_Example").typed(false);
//! let mut doc = Document::with_config(config);
//! let mut gene = doc.create(ObjectKind::ComponentDefinition, "gRNA_b_gene").unwrap();
//! let promoter = gene.owned_mut(&cd::COMPONENTS).unwrap().create("CRa_U6").unwrap();
//! assert_eq!(
//!     promoter.identity().as_str(),
//!     "http://sbols.org/CRISPR_Example/gRNA_b_gene/CRa_U6/1"
//! );
//! ```
//!
//! # Serialization
//!
//! Documents are read from RDF/XML, Turtle or N-Triples and written as
//! N-Triples or Turtle:
//!
//! ```
//! use sbol::{Document, RdfFormat};
//!
//! let mut doc = Document::new();
//! doc.read_str(
//!     "<http://a.org/pTet/1> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> \
//!      <http://sbols.org/v2#Sequence> .\n",
//!     RdfFormat::NTriples,
//! )
//! .unwrap();
//! assert_eq!(doc.sequences().len(), 1);
//! let turtle = doc.to_turtle().unwrap();
//! assert!(turtle.contains("a sbol:Sequence"));
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod config;
pub mod document;
pub mod error;
pub mod graph;
pub mod identified;
pub mod identity;
pub mod kinds;
pub mod model;
pub mod owned;
pub mod property;
pub mod serializer;
pub mod vocab;

pub use config::Config;
pub use document::Document;
pub use error::{Error, ErrorCode, Result};
pub use graph::{Graph, RdfFormat, Triple};
pub use identified::Identified;
pub use identity::{Identifiers, Scope};
pub use kinds::ObjectKind;
pub use model::{
    Cardinality, Input, Literal, OwnedDescriptor, PropertyDescriptor, PropertyValue, Uri, Value,
    ValueKind,
};
pub use owned::{Key, ObjectMut, OwnedObjects};
pub use property::PropertyTable;
