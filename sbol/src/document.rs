//! The SBOL document: top-level collections, graph loading and writing.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::config::{self, Config};
use crate::error::{Error, Result};
use crate::graph::{Graph, RdfFormat, Triple};
use crate::identified::Identified;
use crate::identity::{self, Scope};
use crate::kinds::ObjectKind;
use crate::model::{OwnedDescriptor, Uri};
use crate::owned::{ObjectMut, OwnedObjects};
use crate::serializer::{ntriples, turtle};
use crate::vocab::RDF_TYPE;

/// `sbol:ComponentDefinition` objects.
pub const COMPONENT_DEFINITIONS: OwnedDescriptor = OwnedDescriptor::new(
    "componentDefinitions",
    "http://sbols.org/v2#ComponentDefinition",
    &[ObjectKind::ComponentDefinition],
);

/// `sbol:ModuleDefinition` objects.
pub const MODULE_DEFINITIONS: OwnedDescriptor = OwnedDescriptor::new(
    "moduleDefinitions",
    "http://sbols.org/v2#ModuleDefinition",
    &[ObjectKind::ModuleDefinition],
);

/// `sbol:Sequence` objects.
pub const SEQUENCES: OwnedDescriptor = OwnedDescriptor::new(
    "sequences",
    "http://sbols.org/v2#Sequence",
    &[ObjectKind::Sequence],
);

/// `sbol:Model` objects.
pub const MODELS: OwnedDescriptor =
    OwnedDescriptor::new("models", "http://sbols.org/v2#Model", &[ObjectKind::Model]);

/// `sbol:Collection` objects.
pub const COLLECTIONS: OwnedDescriptor = OwnedDescriptor::new(
    "collections",
    "http://sbols.org/v2#Collection",
    &[ObjectKind::Collection],
);

/// Top-level collections in [`ObjectKind::TOP_LEVEL`] order. For these the
/// descriptor predicate is the member class IRI.
pub const TOP_LEVEL: [OwnedDescriptor; 5] = [
    COMPONENT_DEFINITIONS,
    MODULE_DEFINITIONS,
    SEQUENCES,
    MODELS,
    COLLECTIONS,
];

/// An SBOL document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    config: Config,
    collections: Vec<OwnedObjects>,
    unrecognized: Vec<Triple>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates an empty document using a snapshot of the process-wide
    /// configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(config::current())
    }

    /// Creates an empty document with an explicit configuration.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        let scope = Scope::top_level(&config);
        let collections = TOP_LEVEL
            .iter()
            .map(|descriptor| OwnedObjects::new(*descriptor, scope.clone()))
            .collect();
        Self {
            config,
            collections,
            unrecognized: Vec::new(),
        }
    }

    /// Opens and loads a file.
    ///
    /// # Errors
    ///
    /// See [`read`](Self::read).
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let mut document = Self::new();
        document.read(path)?;
        Ok(document)
    }

    /// The configuration used to mint identities.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Replaces the configuration. Existing objects keep their identities.
    pub fn set_config(&mut self, config: Config) {
        let scope = Scope::top_level(&config);
        for collection in &mut self.collections {
            collection.set_scope(scope.clone());
        }
        self.config = config;
    }

    /// Component definitions.
    #[must_use]
    pub fn component_definitions(&self) -> &OwnedObjects {
        self.top(0)
    }

    /// Module definitions.
    #[must_use]
    pub fn module_definitions(&self) -> &OwnedObjects {
        self.top(1)
    }

    /// Sequences.
    #[must_use]
    pub fn sequences(&self) -> &OwnedObjects {
        self.top(2)
    }

    /// Models.
    #[must_use]
    pub fn models(&self) -> &OwnedObjects {
        self.top(3)
    }

    /// SBOL Collections.
    #[must_use]
    pub fn collections(&self) -> &OwnedObjects {
        self.top(4)
    }

    /// The collection holding `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] for a kind that is not top-level.
    pub fn objects_of(&self, kind: ObjectKind) -> Result<&OwnedObjects> {
        self.collections
            .iter()
            .find(|c| c.kinds().contains(&kind))
            .ok_or_else(|| not_top_level(kind))
    }

    /// Mutable access to the collection holding `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] for a kind that is not top-level.
    pub fn objects_of_mut(&mut self, kind: ObjectKind) -> Result<&mut OwnedObjects> {
        self.collections
            .iter_mut()
            .find(|c| c.kinds().contains(&kind))
            .ok_or_else(|| not_top_level(kind))
    }

    /// Every top-level collection in [`ObjectKind::TOP_LEVEL`] order.
    #[must_use]
    pub fn top_level(&self) -> &[OwnedObjects] {
        &self.collections
    }

    /// Creates a top-level object in the document's homespace.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] for a nested kind, plus the errors of
    /// [`OwnedObjects::create`].
    pub fn create(&mut self, kind: ObjectKind, display_id: &str) -> Result<ObjectMut<'_>> {
        self.objects_of_mut(kind)?.create_as(kind, display_id)
    }

    /// Adds a top-level object. Under a compliant configuration an object
    /// without a displayId is first given compliant identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] for a nested kind and
    /// [`Error::UriNotUnique`] if the identity is already present.
    pub fn add(&mut self, mut object: Identified) -> Result<ObjectMut<'_>> {
        let kind = object.kind();
        if !kind.is_top_level() {
            return Err(not_top_level(kind));
        }
        if self.config.compliant_uris && object.display_id().is_none() {
            object.make_compliant(&Scope::top_level(&self.config))?;
        }
        self.objects_of_mut(kind)?.add(object)
    }

    /// Adds several objects; either all are added or none.
    ///
    /// # Errors
    ///
    /// Returns the first error [`add`](Self::add) reports.
    pub fn add_all(&mut self, objects: impl IntoIterator<Item = Identified>) -> Result<()> {
        let mut staged = self.clone();
        for object in objects {
            staged.add(object)?;
        }
        *self = staged;
        Ok(())
    }

    /// Looks up a top-level object by identity, displayId or persistent
    /// identity across all collections.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] when nothing matches.
    pub fn get(&self, key: &str) -> Result<&Identified> {
        self.collections
            .iter()
            .find(|c| c.find(key))
            .map_or_else(|| Err(Error::not_found("document", key)), |c| c.get(key))
    }

    /// Mutable lookup of a top-level object. Identity changes made through
    /// the handle are checked against the rest of its collection.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] when nothing matches.
    pub fn get_mut(&mut self, key: &str) -> Result<ObjectMut<'_>> {
        match self.collections.iter_mut().find(|c| c.find(key)) {
            Some(collection) => collection.get_mut(key),
            None => Err(Error::not_found("document", key)),
        }
    }

    /// True if a top-level object matches `key`.
    #[must_use]
    pub fn find(&self, key: &str) -> bool {
        self.collections.iter().any(|c| c.find(key))
    }

    /// Removes a top-level object with all its children.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] when nothing matches.
    pub fn remove(&mut self, key: &str) -> Result<Identified> {
        match self.collections.iter_mut().find(|c| c.find(key)) {
            Some(collection) => collection.remove(key),
            None => Err(Error::not_found("document", key)),
        }
    }

    /// Every top-level object.
    pub fn iter(&self) -> impl Iterator<Item = &Identified> {
        self.collections.iter().flat_map(OwnedObjects::iter)
    }

    /// Number of top-level objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.collections.iter().map(OwnedObjects::len).sum()
    }

    /// True if the document holds no top-level objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Object count per collection name.
    #[must_use]
    pub fn summary(&self) -> Vec<(&'static str, usize)> {
        self.collections.iter().map(|c| (c.name(), c.len())).collect()
    }

    /// Triples that did not describe an SBOL object, kept for writing back.
    #[must_use]
    pub fn unrecognized(&self) -> &[Triple] {
        &self.unrecognized
    }

    /// Drops every object and unrecognized triple.
    pub fn clear(&mut self) {
        *self = Self::with_config(self.config.clone());
    }

    /// Replaces the contents with a file. The format is chosen by
    /// extension, RDF/XML when unknown. On failure the document is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileNotFound`] / [`Error::Io`] for file access and
    /// [`Error::Serialization`] for malformed RDF or SBOL structure.
    pub fn read(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let graph = Graph::parse_file(path, format_of(path))?;
        self.replace_with(&graph)
    }

    /// Replaces the contents with serialized text.
    ///
    /// # Errors
    ///
    /// See [`read`](Self::read).
    pub fn read_str(&mut self, text: &str, format: RdfFormat) -> Result<()> {
        let graph = Graph::parse_str(text, format)?;
        self.replace_with(&graph)
    }

    /// Merges a file into the current contents. On failure the document is
    /// unchanged.
    ///
    /// # Errors
    ///
    /// See [`read`](Self::read); also [`Error::UriNotUnique`] when the file
    /// repeats an identity already present.
    pub fn append(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let graph = Graph::parse_file(path, format_of(path))?;
        let mut staged = self.clone();
        staged.load_graph(&graph)?;
        *self = staged;
        Ok(())
    }

    /// Every triple describing the document, objects first.
    #[must_use]
    pub fn triples(&self) -> Vec<Triple> {
        let mut out = Vec::new();
        for object in self.iter() {
            object.collect_triples(&mut out);
        }
        out.extend(self.unrecognized.iter().cloned());
        out
    }

    /// Serializes to N-Triples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if a subject or object is a
    /// relative IRI, which N-Triples cannot express.
    pub fn to_ntriples(&self) -> Result<String> {
        Ok(ntriples::to_ntriples(&self.serializable_triples()?))
    }

    /// Serializes to Turtle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if a subject or object is a
    /// relative IRI.
    pub fn to_turtle(&self) -> Result<String> {
        Ok(turtle::to_turtle(&self.serializable_triples()?))
    }

    /// Writes the document; `.ttl` gives Turtle and `.nt` N-Triples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for any other extension or a
    /// relative IRI in the document, and [`Error::Io`] if the file cannot be
    /// written.
    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let text = match RdfFormat::from_path(path) {
            Some(RdfFormat::Turtle) => self.to_turtle()?,
            Some(RdfFormat::NTriples) => self.to_ntriples()?,
            _ => {
                return Err(Error::InvalidArgument(format!(
                    "cannot write {}: only .ttl and .nt output is supported",
                    path.display()
                )))
            }
        };
        std::fs::write(path, text).map_err(|e| Error::io(path, e))?;
        debug!(path = %path.display(), objects = self.len(), "wrote document");
        Ok(())
    }

    /// [`triples`](Self::triples), refusing IRIs a reader could not resolve.
    fn serializable_triples(&self) -> Result<Vec<Triple>> {
        let triples = self.triples();
        for triple in &triples {
            let object = triple.object.as_uri();
            if let Some(iri) = std::iter::once(&triple.subject)
                .chain(object)
                .find(|iri| !is_resolvable(iri.as_str()))
            {
                return Err(Error::InvalidArgument(format!(
                    "{iri} is a relative IRI and cannot be serialized"
                )));
            }
        }
        Ok(triples)
    }

    fn top(&self, index: usize) -> &OwnedObjects {
        &self.collections[index]
    }

    fn replace_with(&mut self, graph: &Graph) -> Result<()> {
        let mut staged = Self::with_config(self.config.clone());
        staged.load_graph(graph)?;
        *self = staged;
        Ok(())
    }

    /// Builds every SBOL object in `graph` and adds the top-level ones.
    fn load_graph(&mut self, graph: &Graph) -> Result<()> {
        let mut kinds: IndexMap<&str, ObjectKind> = IndexMap::new();
        for subject in graph.subjects() {
            if let Some(kind) = graph.types(subject).find_map(ObjectKind::from_rdf_type) {
                kinds.insert(subject, kind);
            }
        }

        let mut parents: HashMap<&str, &str> = HashMap::new();
        for (&subject, &kind) in &kinds {
            for t in graph.about(subject) {
                if kind.find_owned(&t.predicate).is_none() {
                    continue;
                }
                match owned_child(&kinds, kind, t) {
                    Some((child, _)) => match parents.insert(child, subject) {
                        Some(previous) if previous != subject => {
                            return Err(Error::Serialization(format!(
                                "{child} is owned by both {previous} and {subject}"
                            )))
                        }
                        _ => {}
                    },
                    None => warn!(
                        subject,
                        predicate = %t.predicate,
                        object = %t.object,
                        "owned slot does not point at a child of an accepted kind; kept as a property"
                    ),
                }
            }
        }

        let mut loader = Loader {
            graph,
            kinds: &kinds,
            parents: &parents,
            built: HashSet::new(),
        };
        let mut loaded = 0usize;
        for (&subject, &kind) in &kinds {
            if !kind.is_top_level() {
                continue;
            }
            let mut object = loader.build(subject, kind)?;
            object.refresh_compliance();
            self.objects_of_mut(kind)?.push_loaded(object)?;
            loaded += 1;
        }

        for subject in graph.subjects() {
            if loader.built.contains(subject) {
                continue;
            }
            if let Some(kind) = kinds.get(subject) {
                warn!(subject, %kind, "object has no top-level owner; keeping its triples verbatim");
            }
            self.unrecognized.extend(graph.about(subject).cloned());
        }
        debug!(
            objects = loaded,
            unrecognized = self.unrecognized.len(),
            "loaded graph"
        );
        Ok(())
    }
}

/// Recursive object builder over a classified graph.
struct Loader<'g, 'a> {
    graph: &'g Graph,
    kinds: &'a IndexMap<&'g str, ObjectKind>,
    parents: &'a HashMap<&'g str, &'g str>,
    built: HashSet<&'g str>,
}

impl<'g> Loader<'g, '_> {
    fn build(&mut self, subject: &'g str, kind: ObjectKind) -> Result<Identified> {
        self.built.insert(subject);
        let graph = self.graph;
        let mut object = Identified::bare(kind, Uri::from(subject));
        for t in graph.about(subject) {
            if t.predicate == RDF_TYPE && t.object == kind.rdf_type() {
                continue;
            }
            let child = owned_child(self.kinds, kind, t)
                .filter(|(child, _)| self.parents.get(child) == Some(&subject));
            match child {
                Some((child, _)) if self.built.contains(child) => {}
                Some((child, child_kind)) => {
                    let loaded = self.build(child, child_kind)?;
                    let slot = kind.find_owned(&t.predicate).ok_or_else(|| {
                        Error::Serialization(format!("{kind} has no slot {}", t.predicate))
                    })?;
                    object.owned_mut(slot)?.push_loaded(loaded)?;
                }
                None => object.properties_mut().push_raw(&t.predicate, t.object.clone()),
            }
        }
        Ok(object)
    }
}

/// The child named by `t` when `t` is an owned slot of `kind` pointing at
/// an object of an accepted kind.
fn owned_child<'g>(
    kinds: &IndexMap<&'g str, ObjectKind>,
    kind: ObjectKind,
    t: &'g Triple,
) -> Option<(&'g str, ObjectKind)> {
    let slot = kind.find_owned(&t.predicate)?;
    let child = t.object.as_uri()?.as_str();
    let child_kind = *kinds.get(child)?;
    slot.kinds.contains(&child_kind).then_some((child, child_kind))
}

fn is_resolvable(iri: &str) -> bool {
    iri.starts_with("_:") || identity::is_absolute(iri)
}

fn format_of(path: &Path) -> RdfFormat {
    RdfFormat::from_path(path).unwrap_or(RdfFormat::RdfXml)
}

fn not_top_level(kind: ObjectKind) -> Error {
    Error::TypeMismatch(format!("{kind} is not a top-level object"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::kinds::{component_definition as cd, sequence};

    fn config() -> Config {
        Config::new("http://sbols.org/CRISPR_Example").typed(false)
    }

    #[test]
    fn add_routes_by_kind() {
        let mut doc = Document::with_config(config());
        doc.add(cd::new(&config(), "EYFP").unwrap()).unwrap();
        doc.add(sequence::new(&config(), "EYFP_seq").unwrap()).unwrap();
        assert_eq!(doc.component_definitions().len(), 1);
        assert_eq!(doc.sequences().len(), 1);
        assert_eq!(doc.len(), 2);
        assert!(doc.find("http://sbols.org/CRISPR_Example/EYFP/1"));
        assert_eq!(doc.get("EYFP_seq").unwrap().kind(), ObjectKind::Sequence);
        assert_eq!(doc.get("nope").unwrap_err().code(), ErrorCode::NotFound);
    }

    #[test]
    fn nested_kinds_are_rejected() {
        let mut doc = Document::with_config(config());
        let component =
            Identified::new(ObjectKind::Component, &config(), "c", None).unwrap();
        assert_eq!(doc.add(component).unwrap_err().code(), ErrorCode::TypeMismatch);
        assert!(doc.objects_of(ObjectKind::Range).is_err());
    }

    #[test]
    fn add_all_is_atomic() {
        let mut doc = Document::with_config(config());
        let batch = vec![
            cd::new(&config(), "a").unwrap(),
            cd::new(&config(), "b").unwrap(),
            cd::new(&config(), "a").unwrap(),
        ];
        assert_eq!(doc.add_all(batch).unwrap_err().code(), ErrorCode::UriNotUnique);
        assert!(doc.is_empty());
    }

    #[test]
    fn foreign_objects_become_compliant() {
        let mut doc = Document::with_config(config());
        let open = config().compliant(false);
        let part = Identified::new(
            ObjectKind::ComponentDefinition,
            &open,
            "http://partsregistry.org/cd/BBa_R0040",
            None,
        )
        .unwrap();
        let added = doc.add(part).unwrap();
        assert_eq!(added.display_id(), Some("BBa_R0040"));
        assert_eq!(*added.identity(), "http://sbols.org/CRISPR_Example/BBa_R0040/1");
    }

    #[test]
    fn turtle_output_reads_back() {
        let mut doc = Document::with_config(config());
        let mut gene = doc.create(ObjectKind::ComponentDefinition, "gRNA_b_gene").unwrap();
        gene.owned_mut(&cd::COMPONENTS).unwrap().create("CRa_U6").unwrap();
        gene.set_name("gRNA_b gene \"quoted\"").unwrap();
        doc.create(ObjectKind::Sequence, "CRa_U6_seq").unwrap();

        let mut copy = Document::with_config(config());
        copy.read_str(&doc.to_turtle().unwrap(), RdfFormat::Turtle).unwrap();
        assert_eq!(copy.summary(), doc.summary());
        let gene = copy.get("gRNA_b_gene").unwrap();
        assert!(gene.is_compliant());
        assert_eq!(gene.name(), Some("gRNA_b gene \"quoted\""));
        assert_eq!(
            gene.owned(&cd::COMPONENTS).unwrap().display_ids(),
            ["CRa_U6"]
        );
        assert_eq!(
            copy.to_ntriples().unwrap().lines().count(),
            doc.to_ntriples().unwrap().lines().count()
        );
    }

    #[test]
    fn failed_read_leaves_document_untouched() {
        let mut doc = Document::with_config(config());
        doc.create(ObjectKind::Model, "model").unwrap();
        assert!(doc.read_str("<broken", RdfFormat::NTriples).is_err());
        assert_eq!(doc.models().len(), 1);
    }

    #[test]
    fn unknown_subjects_are_preserved() {
        let nt = "<http://a.org/act/1> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://www.w3.org/ns/prov#Activity> .\n";
        let mut doc = Document::with_config(config());
        doc.read_str(nt, RdfFormat::NTriples).unwrap();
        assert!(doc.is_empty());
        assert_eq!(doc.unrecognized().len(), 1);
        assert_eq!(doc.to_ntriples().unwrap(), nt);
    }

    #[test]
    fn two_owners_is_a_serialization_error() {
        let nt = "\
<http://a.org/x/1> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://sbols.org/v2#ComponentDefinition> .
<http://a.org/y/1> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://sbols.org/v2#ComponentDefinition> .
<http://a.org/c/1> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://sbols.org/v2#Component> .
<http://a.org/x/1> <http://sbols.org/v2#component> <http://a.org/c/1> .
<http://a.org/y/1> <http://sbols.org/v2#component> <http://a.org/c/1> .
";
        let mut doc = Document::with_config(config());
        let err = doc.read_str(nt, RdfFormat::NTriples).unwrap_err();
        assert_eq!(err.code(), ErrorCode::Serialization);
    }
}
