//! The SBOL entity: identity fields, a property table and owned children.
//!
//! Every object in an SBOL document, top-level or nested, is an
//! [`Identified`]. Its [`ObjectKind`] fixes the schema: which typed slots it
//! accepts and which child collections it owns.

use tracing::debug;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::graph::Triple;
use crate::identity::{self, Identifiers, Scope, DEFAULT_VERSION};
use crate::kinds::{base, ObjectKind};
use crate::model::{Input, Literal, OwnedDescriptor, PropertyDescriptor, PropertyValue, Uri, Value};
use crate::owned::OwnedObjects;
use crate::property::PropertyTable;
use crate::vocab::{RDF_TYPE, SBOL_DISPLAY_ID, SBOL_PERSISTENT_IDENTITY, SBOL_VERSION};

/// An SBOL object.
#[derive(Debug, Clone, PartialEq)]
pub struct Identified {
    kind: ObjectKind,
    identity: Uri,
    compliant: bool,
    properties: PropertyTable,
    bound: Vec<PropertyDescriptor>,
    owned: Vec<OwnedObjects>,
}

impl Identified {
    /// Creates an object named `name` in the top-level scope of `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `name` or `version` is not valid
    /// under a compliant configuration.
    pub fn new(
        kind: ObjectKind,
        config: &Config,
        name: &str,
        version: Option<&str>,
    ) -> Result<Self> {
        let ids = Scope::top_level(config).mint(kind, name, version)?;
        Ok(Self::from_identifiers(kind, ids, config.compliant_uris))
    }

    /// Creates an object from already-resolved identifiers, with every slot
    /// of its kind set to its default.
    #[must_use]
    pub fn from_identifiers(kind: ObjectKind, ids: Identifiers, compliant: bool) -> Self {
        let mut properties = PropertyTable::new();
        for descriptor in kind.properties() {
            if let Ok(values) = descriptor.coerce(descriptor.default_input()) {
                if !values.is_empty() {
                    properties.put_raw(descriptor.predicate, values);
                }
            }
        }
        properties.put_raw(
            SBOL_PERSISTENT_IDENTITY,
            vec![Value::Uri(ids.persistent_identity.clone())],
        );
        if let Some(id) = &ids.display_id {
            properties.put_raw(SBOL_DISPLAY_ID, vec![Value::Literal(Literal::new(id.as_str()))]);
        }
        if let Some(version) = &ids.version {
            properties.put_raw(SBOL_VERSION, vec![Value::Literal(Literal::new(version.as_str()))]);
        }
        let owned = kind
            .owned()
            .iter()
            .map(|descriptor| {
                OwnedObjects::new(
                    *descriptor,
                    Scope::child_of(
                        ids.persistent_identity.as_str(),
                        ids.version.as_deref(),
                        compliant,
                    ),
                )
            })
            .collect();
        debug!(%kind, identity = %ids.identity, "created object");
        Self {
            kind,
            identity: ids.identity,
            compliant,
            properties,
            bound: Vec::new(),
            owned,
        }
    }

    /// An object with only an identity and empty collections; the loader
    /// fills in everything else from the graph.
    pub(crate) fn bare(kind: ObjectKind, identity: Uri) -> Self {
        let owned = kind
            .owned()
            .iter()
            .map(|descriptor| {
                OwnedObjects::new(*descriptor, Scope::child_of(identity.as_str(), None, false))
            })
            .collect();
        Self {
            kind,
            identity,
            compliant: false,
            properties: PropertyTable::new(),
            bound: Vec::new(),
            owned,
        }
    }

    /// The full identity URI (the RDF subject).
    #[must_use]
    pub fn identity(&self) -> &Uri {
        &self.identity
    }

    /// The SBOL class.
    #[must_use]
    pub fn kind(&self) -> ObjectKind {
        self.kind
    }

    /// True if the identity is derived as `persistentIdentity/version`.
    #[must_use]
    pub fn is_compliant(&self) -> bool {
        self.compliant
    }

    /// The raw property table.
    #[must_use]
    pub fn properties(&self) -> &PropertyTable {
        &self.properties
    }

    /// `sbol:displayId`.
    #[must_use]
    pub fn display_id(&self) -> Option<&str> {
        self.text(&base::DISPLAY_ID)
    }

    /// `sbol:persistentIdentity`.
    #[must_use]
    pub fn persistent_identity(&self) -> Option<&Uri> {
        self.uri(&base::PERSISTENT_IDENTITY)
    }

    /// `sbol:version`.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.text(&base::VERSION)
    }

    /// `dcterms:title`.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.text(&base::NAME)
    }

    /// `dcterms:description`.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.text(&base::DESCRIPTION)
    }

    /// `prov:wasDerivedFrom`.
    #[must_use]
    pub fn was_derived_from(&self) -> Vec<&Uri> {
        self.uris(&base::WAS_DERIVED_FROM)
    }

    /// `prov:wasGeneratedBy`.
    #[must_use]
    pub fn was_generated_by(&self) -> Vec<&Uri> {
        self.uris(&base::WAS_GENERATED_BY)
    }

    /// Sets `dcterms:title`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] for a non-text value.
    pub fn set_name(&mut self, name: impl Into<Input>) -> Result<()> {
        self.properties.set(&base::NAME, name.into())
    }

    /// Sets `dcterms:description`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] for a non-text value.
    pub fn set_description(&mut self, description: impl Into<Input>) -> Result<()> {
        self.properties.set(&base::DESCRIPTION, description.into())
    }

    /// Sets `sbol:displayId`.
    ///
    /// On a compliant object the persistent identity and identity are
    /// recomputed under the same prefix and every owned child is re-based.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] on a compliant object when the new
    /// id is missing or not a valid displayId.
    pub fn set_display_id(&mut self, display_id: impl Into<Input>) -> Result<()> {
        let values = base::DISPLAY_ID.coerce(display_id.into())?;
        if !self.compliant {
            self.properties.put_raw(SBOL_DISPLAY_ID, values);
            return Ok(());
        }
        let id = values.first().map(Value::as_str).unwrap_or_default();
        if !identity::is_valid_display_id(id) {
            return Err(Error::InvalidArgument(format!(
                "{id:?} is not a valid displayId"
            )));
        }
        let prefix = self.prefix();
        self.properties.put_raw(SBOL_DISPLAY_ID, values);
        self.rebase(&prefix, None);
        Ok(())
    }

    /// Sets `sbol:persistentIdentity`. A compliant object re-derives its
    /// identity from the new value and its version.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] for a value that is not a URI.
    pub fn set_persistent_identity(&mut self, uri: impl Into<Input>) -> Result<()> {
        let values = base::PERSISTENT_IDENTITY.coerce(uri.into())?;
        self.properties.put_raw(SBOL_PERSISTENT_IDENTITY, values);
        self.rederive_identity();
        Ok(())
    }

    /// Sets `sbol:version`. A compliant object re-derives its identity from
    /// its persistent identity and the new value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] for a non-text value.
    pub fn set_version(&mut self, version: impl Into<Input>) -> Result<()> {
        let values = base::VERSION.coerce(version.into())?;
        self.properties.put_raw(SBOL_VERSION, values);
        self.rederive_identity();
        Ok(())
    }

    /// Reads a slot in the shape its descriptor declares.
    #[must_use]
    pub fn get(&self, descriptor: &PropertyDescriptor) -> PropertyValue<'_> {
        self.properties.get(descriptor)
    }

    /// Raw values under any predicate, including ones outside the schema.
    #[must_use]
    pub fn values(&self, predicate: &str) -> &[Value] {
        self.properties.values(predicate)
    }

    /// The first value of a slot.
    #[must_use]
    pub fn scalar(&self, descriptor: &PropertyDescriptor) -> Option<&Value> {
        self.properties.values(descriptor.predicate).first()
    }

    /// The first value of a slot as text.
    #[must_use]
    pub fn text(&self, descriptor: &PropertyDescriptor) -> Option<&str> {
        self.scalar(descriptor).map(Value::as_str)
    }

    /// Every value of a slot as text.
    #[must_use]
    pub fn texts(&self, descriptor: &PropertyDescriptor) -> Vec<&str> {
        self.properties
            .values(descriptor.predicate)
            .iter()
            .map(Value::as_str)
            .collect()
    }

    /// The first value of a slot if it is a URI.
    #[must_use]
    pub fn uri(&self, descriptor: &PropertyDescriptor) -> Option<&Uri> {
        self.scalar(descriptor).and_then(Value::as_uri)
    }

    /// Every URI value of a slot.
    #[must_use]
    pub fn uris(&self, descriptor: &PropertyDescriptor) -> Vec<&Uri> {
        self.properties
            .values(descriptor.predicate)
            .iter()
            .filter_map(Value::as_uri)
            .collect()
    }

    /// The first value of a slot as an integer.
    #[must_use]
    pub fn integer(&self, descriptor: &PropertyDescriptor) -> Option<i64> {
        self.scalar(descriptor)
            .and_then(Value::as_literal)
            .and_then(Literal::as_i64)
    }

    /// Assigns a slot. Identity slots are routed through their dedicated
    /// setters so the identity invariant holds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the slot is not part of this
    /// object's schema, plus any coercion error.
    pub fn set(&mut self, descriptor: &PropertyDescriptor, value: impl Into<Input>) -> Result<()> {
        self.check_slot(descriptor)?;
        match descriptor.predicate {
            SBOL_DISPLAY_ID => self.set_display_id(value),
            SBOL_PERSISTENT_IDENTITY => self.set_persistent_identity(value),
            SBOL_VERSION => self.set_version(value),
            _ => self.properties.set(descriptor, value.into()),
        }
    }

    /// Appends to a list slot.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] for a slot outside the schema or a
    /// scalar slot, plus any coercion error.
    pub fn add(&mut self, descriptor: &PropertyDescriptor, value: impl Into<Input>) -> Result<()> {
        self.check_slot(descriptor)?;
        self.properties.add(descriptor, value.into())
    }

    /// Removes one element of a list slot; see [`PropertyTable::remove`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] for a slot outside the schema or a
    /// scalar slot, and [`Error::NotFound`] for an index out of range.
    pub fn remove(
        &mut self,
        descriptor: &PropertyDescriptor,
        index: Option<usize>,
    ) -> Result<Option<Value>> {
        self.check_slot(descriptor)?;
        self.properties.remove(descriptor, index)
    }

    /// Removes the first element equal to `value` from a list slot.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] for a slot outside the schema or a
    /// scalar slot, and [`Error::NotFound`] when nothing matches.
    pub fn remove_value(&mut self, descriptor: &PropertyDescriptor, value: &str) -> Result<Value> {
        self.check_slot(descriptor)?;
        self.properties.remove_value(descriptor, value)
    }

    /// Registers an extra slot on this object and writes its default.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for impossible bounds and
    /// [`Error::TypeMismatch`] when the default does not fit the slot; in
    /// both cases nothing is written.
    pub fn bind_property(&mut self, descriptor: PropertyDescriptor) -> Result<()> {
        self.properties.bind(&descriptor, descriptor.default_input())?;
        if !self.bound.contains(&descriptor) {
            self.bound.push(descriptor);
        }
        Ok(())
    }

    /// The child collection backed by `descriptor`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if this kind owns no such collection.
    pub fn owned(&self, descriptor: &OwnedDescriptor) -> Result<&OwnedObjects> {
        let kind = self.kind;
        self.owned
            .iter()
            .find(|c| c.predicate() == descriptor.predicate)
            .ok_or_else(|| no_collection(kind, descriptor))
    }

    /// Mutable access to the child collection backed by `descriptor`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if this kind owns no such collection.
    pub fn owned_mut(&mut self, descriptor: &OwnedDescriptor) -> Result<&mut OwnedObjects> {
        let kind = self.kind;
        self.owned
            .iter_mut()
            .find(|c| c.predicate() == descriptor.predicate)
            .ok_or_else(|| no_collection(kind, descriptor))
    }

    /// Every child collection, in schema order.
    #[must_use]
    pub fn owned_collections(&self) -> &[OwnedObjects] {
        &self.owned
    }

    pub(crate) fn properties_mut(&mut self) -> &mut PropertyTable {
        &mut self.properties
    }

    /// Appends this object's triples, then its children's, to `out`.
    pub(crate) fn collect_triples(&self, out: &mut Vec<Triple>) {
        out.push(Triple::new(
            self.identity.clone(),
            RDF_TYPE,
            Value::Uri(Uri::from(self.kind.rdf_type())),
        ));
        for (predicate, values) in self.properties.iter() {
            for value in values {
                out.push(Triple::new(self.identity.clone(), predicate, value.clone()));
            }
        }
        for collection in &self.owned {
            for child in collection.iter() {
                out.push(Triple::new(
                    self.identity.clone(),
                    collection.predicate(),
                    Value::Uri(child.identity.clone()),
                ));
                child.collect_triples(out);
            }
        }
    }

    /// Moves a compliant object under `prefix`, recomputing its identity and
    /// those of its children. A `version` replaces the object's own and is
    /// passed down with it. Non-compliant objects are left alone.
    pub(crate) fn rebase(&mut self, prefix: &str, version: Option<&str>) {
        if !self.compliant {
            return;
        }
        let Some(id) = self.display_id().map(str::to_string) else {
            return;
        };
        let pid = format!("{prefix}/{id}");
        let version = version
            .or(self.version())
            .unwrap_or(DEFAULT_VERSION)
            .to_string();
        let identity = Uri::new(format!("{pid}/{version}"));
        debug!(from = %self.identity, to = %identity, "re-based object");
        self.identity = identity;
        self.properties
            .put_raw(SBOL_PERSISTENT_IDENTITY, vec![Value::Uri(Uri::new(pid))]);
        self.properties
            .put_raw(SBOL_VERSION, vec![Value::Literal(Literal::new(version))]);
        self.rebase_children();
    }

    /// Gives a non-compliant object compliant identifiers in `scope`, keeping
    /// whatever displayId and version can be recovered from it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the recovered version is not a
    /// valid SBOL version.
    pub(crate) fn make_compliant(&mut self, scope: &Scope) -> Result<()> {
        let parsed = identity::parse(self.identity.as_str());
        let id = self
            .display_id()
            .map(str::to_string)
            .or(parsed.display_id)
            .unwrap_or_else(|| {
                let last = self
                    .identity
                    .as_str()
                    .rsplit(['/', '#', ':'])
                    .find(|s| !s.is_empty())
                    .unwrap_or_default();
                identity::sanitize_display_id(last)
            });
        let version = self.version().map(str::to_string).or(parsed.version);
        let ids = scope.mint(self.kind, &id, version.as_deref())?;
        self.apply(ids);
        self.compliant = true;
        self.rebase_children();
        Ok(())
    }

    /// Recomputes the compliance flag and child scopes from loaded values.
    pub(crate) fn refresh_compliance(&mut self) {
        self.compliant = match (self.persistent_identity(), self.version(), self.display_id()) {
            (Some(pid), Some(version), Some(id)) => {
                identity::is_valid_display_id(id)
                    && pid.as_str().ends_with(&format!("/{id}"))
                    && self.identity.as_str() == format!("{pid}/{version}")
            }
            _ => false,
        };
        self.refresh_scopes();
        for collection in &mut self.owned {
            for child in collection.iter_mut() {
                child.refresh_compliance();
            }
        }
    }

    fn apply(&mut self, ids: Identifiers) {
        self.identity = ids.identity;
        self.properties.put_raw(
            SBOL_PERSISTENT_IDENTITY,
            vec![Value::Uri(ids.persistent_identity)],
        );
        let display_id = ids.display_id.map(|id| Value::Literal(Literal::new(id)));
        self.properties
            .put_raw(SBOL_DISPLAY_ID, display_id.into_iter().collect());
        let version = ids.version.map(|v| Value::Literal(Literal::new(v)));
        self.properties.put_raw(SBOL_VERSION, version.into_iter().collect());
    }

    /// Recomputes a compliant identity once both persistent identity and
    /// version are set. While either is unset the identity stays put.
    fn rederive_identity(&mut self) {
        if !self.compliant {
            return;
        }
        if let (Some(pid), Some(version)) = (self.persistent_identity(), self.version()) {
            self.identity = Uri::new(format!("{pid}/{version}"));
            self.rebase_children();
        }
    }

    fn rebase_children(&mut self) {
        let pid = self.scope_base();
        let version = self.version().map(str::to_string);
        let compliant = self.compliant;
        for collection in &mut self.owned {
            collection.rebase(&pid, version.as_deref(), compliant);
        }
    }

    fn refresh_scopes(&mut self) {
        let pid = self.scope_base();
        let version = self.version().map(str::to_string);
        let compliant = self.compliant;
        for collection in &mut self.owned {
            collection.set_scope(Scope::child_of(&pid, version.as_deref(), compliant));
        }
    }

    fn scope_base(&self) -> String {
        self.persistent_identity()
            .unwrap_or(&self.identity)
            .as_str()
            .to_string()
    }

    /// The part of the persistent identity before the displayId.
    fn prefix(&self) -> String {
        let pid = self.scope_base();
        match pid.rsplit_once('/') {
            Some((head, _)) => head.to_string(),
            None => pid,
        }
    }

    fn check_slot(&self, descriptor: &PropertyDescriptor) -> Result<()> {
        if self.kind.all_properties().any(|d| d == descriptor) || self.bound.contains(descriptor) {
            Ok(())
        } else {
            Err(Error::TypeMismatch(format!(
                "{} has no property {} ({})",
                self.kind, descriptor.name, descriptor.predicate
            )))
        }
    }
}

impl From<&Identified> for Input {
    fn from(object: &Identified) -> Self {
        Input::Uri(object.identity.clone())
    }
}

fn no_collection(kind: ObjectKind, descriptor: &OwnedDescriptor) -> Error {
    Error::TypeMismatch(format!("{kind} owns no {} collection", descriptor.name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::kinds::{component_definition as cd, sequence, sequence_annotation as sa};
    use crate::model::ValueKind;
    use crate::vocab::{SO_CIRCULAR, SO_PLASMID};

    fn config() -> Config {
        Config::new("http://sbols.org/CRISPR_Example").typed(false)
    }

    #[test]
    fn compliant_identity_invariant() {
        let md = Identified::new(ObjectKind::ModuleDefinition, &config(), "CRISPR_Template", None)
            .unwrap();
        let pid = md.persistent_identity().unwrap();
        assert_eq!(*md.identity(), format!("{pid}/{}", md.version().unwrap()).as_str());
        assert_eq!(md.display_id(), Some("CRISPR_Template"));
    }

    #[test]
    fn non_compliant_has_no_display_id() {
        let config = config().compliant(false);
        let md = Identified::new(ObjectKind::ModuleDefinition, &config, "CRISPR_Template", None)
            .unwrap();
        assert_eq!(md.display_id(), None);
        assert_eq!(md.version(), Some("1"));
    }

    #[test]
    fn display_id_change_rebases_children() {
        let mut target = cd::new(&config(), "target").unwrap();
        target
            .owned_mut(&cd::SEQUENCE_ANNOTATIONS)
            .unwrap()
            .create("anno")
            .unwrap();
        target.set_display_id("renamed").unwrap();
        assert_eq!(*target.identity(), "http://sbols.org/CRISPR_Example/renamed/1");
        let anno = target
            .owned(&cd::SEQUENCE_ANNOTATIONS)
            .unwrap()
            .get("anno")
            .unwrap();
        assert_eq!(*anno.identity(), "http://sbols.org/CRISPR_Example/renamed/anno/1");
        let annotations = target.owned_mut(&cd::SEQUENCE_ANNOTATIONS).unwrap();
        let mut anno = annotations.get_mut("anno").unwrap();
        let range = anno.owned_mut(&sa::LOCATIONS).unwrap().create("r").unwrap();
        assert_eq!(*range.identity(), "http://sbols.org/CRISPR_Example/renamed/anno/r/1");
    }

    #[test]
    fn identity_setters_round_trip() {
        let mut seq = sequence::new(&config(), "seq").unwrap();
        seq.set_version("2.0").unwrap();
        assert_eq!(seq.version(), Some("2.0"));
        assert_eq!(*seq.identity(), "http://sbols.org/CRISPR_Example/seq/2.0");
        seq.set_persistent_identity("http://other.org/seq").unwrap();
        assert_eq!(seq.persistent_identity().unwrap(), "http://other.org/seq");
        assert_eq!(*seq.identity(), "http://other.org/seq/2.0");
        seq.set_display_id("seq_b").unwrap();
        assert_eq!(seq.display_id(), Some("seq_b"));
        assert_eq!(*seq.identity(), "http://other.org/seq_b/2.0");
    }

    #[test]
    fn version_change_reaches_every_descendant() {
        let mut target = cd::new(&config(), "target").unwrap();
        let annotations = target.owned_mut(&cd::SEQUENCE_ANNOTATIONS).unwrap();
        let mut anno = annotations.create("anno").unwrap();
        anno.owned_mut(&sa::LOCATIONS).unwrap().create("r").unwrap();
        target.set_version("3").unwrap();
        let anno = target
            .owned(&cd::SEQUENCE_ANNOTATIONS)
            .unwrap()
            .get("anno")
            .unwrap();
        assert_eq!(anno.version(), Some("3"));
        assert_eq!(*anno.identity(), "http://sbols.org/CRISPR_Example/target/anno/3");
        let range = anno.owned(&sa::LOCATIONS).unwrap().get("r").unwrap();
        assert_eq!(range.version(), Some("3"));
        assert_eq!(*range.identity(), "http://sbols.org/CRISPR_Example/target/anno/r/3");
    }

    #[test]
    fn unset_version_can_be_set_again() {
        let mut seq = sequence::new(&config(), "seq").unwrap();
        seq.set_version(Input::Null).unwrap();
        assert_eq!(seq.version(), None);
        assert!(seq.is_compliant());
        assert_eq!(*seq.identity(), "http://sbols.org/CRISPR_Example/seq/1");
        seq.set_version("3").unwrap();
        assert_eq!(*seq.identity(), "http://sbols.org/CRISPR_Example/seq/3");

        seq.set_persistent_identity("").unwrap();
        assert_eq!(seq.persistent_identity(), None);
        seq.set_persistent_identity("http://sbols.org/CRISPR_Example/seq_b")
            .unwrap();
        assert_eq!(*seq.identity(), "http://sbols.org/CRISPR_Example/seq_b/3");
    }

    #[test]
    fn non_compliant_setters_keep_the_identity() {
        let open = config().compliant(false);
        let mut md = Identified::new(ObjectKind::ModuleDefinition, &open, "CRISPR_Template", None)
            .unwrap();
        let identity = md.identity().clone();
        md.set_persistent_identity("test").unwrap();
        assert_eq!(md.persistent_identity().unwrap().as_str(), "test");
        md.set_version("2").unwrap();
        assert_eq!(md.version(), Some("2"));
        assert_eq!(md.identity(), &identity);
        assert!(!md.is_compliant());
    }

    #[test]
    fn generic_set_routes_identity_slots() {
        let mut seq = sequence::new(&config(), "seq").unwrap();
        seq.set(&base::VERSION, "3").unwrap();
        assert_eq!(*seq.identity(), "http://sbols.org/CRISPR_Example/seq/3");
    }

    #[test]
    fn invalid_display_id_is_rejected_when_compliant() {
        let mut seq = sequence::new(&config(), "seq").unwrap();
        let err = seq.set_display_id("not valid").unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidArgument);
        assert_eq!(seq.display_id(), Some("seq"));
    }

    #[test]
    fn references_accept_objects() {
        let seq = sequence::new(&config(), "target_seq").unwrap();
        let mut target = cd::new(&config(), "target").unwrap();
        target.set(&cd::SEQUENCES, &seq).unwrap();
        assert_eq!(target.uris(&cd::SEQUENCES), [seq.identity()]);
        target.set(&cd::SEQUENCES, seq.identity()).unwrap();
        assert_eq!(target.uris(&cd::SEQUENCES).len(), 1);
        for cleared in [Input::Null, Input::from(""), Input::List(vec![])] {
            target.set(&cd::SEQUENCES, &seq).unwrap();
            target.set(&cd::SEQUENCES, cleared).unwrap();
            assert!(target.uris(&cd::SEQUENCES).is_empty());
        }
        target
            .set(&cd::SEQUENCES, vec![Option::<&str>::None, None])
            .unwrap();
        assert!(target.get(&cd::SEQUENCES).is_empty());
    }

    #[test]
    fn roles_remove_first() {
        let mut target = cd::new(&config(), "target").unwrap();
        target.set(&cd::ROLES, vec![SO_PLASMID, SO_CIRCULAR]).unwrap();
        target.remove(&cd::ROLES, None).unwrap();
        assert_eq!(target.uris(&cd::ROLES), [SO_CIRCULAR]);
    }

    #[test]
    fn unknown_slots_are_type_errors() {
        const TESTING: PropertyDescriptor =
            PropertyDescriptor::list("testing", "http://sbols.org/v2#Testing", ValueKind::Text);
        let mut seq = sequence::new(&config(), "seq").unwrap();
        assert_eq!(
            seq.set(&cd::ROLES, vec![SO_PLASMID]).unwrap_err().code(),
            ErrorCode::TypeMismatch
        );
        assert_eq!(
            seq.set(&TESTING, "foo").unwrap_err().code(),
            ErrorCode::TypeMismatch
        );
        seq.bind_property(TESTING).unwrap();
        seq.set(&TESTING, vec!["foo", "bar"]).unwrap();
        assert_eq!(seq.texts(&TESTING), ["foo", "bar"]);
    }

    #[test]
    fn missing_collection_is_a_type_error() {
        let mut seq = sequence::new(&config(), "seq").unwrap();
        let err = seq.owned_mut(&cd::COMPONENTS).unwrap_err();
        assert_eq!(err.code(), ErrorCode::TypeMismatch);
    }

    #[test]
    fn make_compliant_recovers_fields() {
        let open = config().compliant(false);
        let mut seq = Identified::new(
            ObjectKind::Sequence,
            &open,
            "http://partsregistry.org/seq/BBa_J23119/2",
            None,
        )
        .unwrap();
        assert!(!seq.is_compliant());
        seq.make_compliant(&Scope::top_level(&config())).unwrap();
        assert!(seq.is_compliant());
        assert_eq!(seq.display_id(), Some("BBa_J23119"));
        assert_eq!(*seq.identity(), "http://sbols.org/CRISPR_Example/BBa_J23119/2");
    }
}
