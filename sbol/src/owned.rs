//! Owned-object collections: the children an object owns exclusively.
//!
//! A collection mints identities for the objects it creates from its
//! [`Scope`] (the homespace for a Document's top-level collections, the
//! parent's persistent identity for nested ones). Lookups accept an identity,
//! a displayId or a persistent identity, tried in that order.

use std::ops::{Deref, DerefMut};

use tracing::debug;

use crate::error::{Error, Result};
use crate::identified::Identified;
use crate::identity::Scope;
use crate::kinds::ObjectKind;
use crate::model::{Input, OwnedDescriptor, PropertyDescriptor, Uri};
use crate::vocab::{SBOL_DISPLAY_ID, SBOL_PERSISTENT_IDENTITY, SBOL_VERSION};

/// Selects an entry in an [`OwnedObjects`] collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key<'a> {
    /// Position in insertion order.
    Index(usize),
    /// Identity, displayId or persistent identity.
    Id(&'a str),
}

impl From<usize> for Key<'_> {
    fn from(index: usize) -> Self {
        Key::Index(index)
    }
}

impl<'a> From<&'a str> for Key<'a> {
    fn from(id: &'a str) -> Self {
        Key::Id(id)
    }
}

impl<'a> From<&'a String> for Key<'a> {
    fn from(id: &'a String) -> Self {
        Key::Id(id.as_str())
    }
}

impl<'a> From<&'a Uri> for Key<'a> {
    fn from(uri: &'a Uri) -> Self {
        Key::Id(uri.as_str())
    }
}

impl std::fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Key::Index(i) => write!(f, "index {i}"),
            Key::Id(id) => f.write_str(id),
        }
    }
}

/// An ordered collection of owned objects.
#[derive(Debug, Clone, PartialEq)]
pub struct OwnedObjects {
    descriptor: OwnedDescriptor,
    scope: Scope,
    items: Vec<Identified>,
}

impl OwnedObjects {
    /// Creates an empty collection minting identities in `scope`.
    #[must_use]
    pub fn new(descriptor: OwnedDescriptor, scope: Scope) -> Self {
        Self {
            descriptor,
            scope,
            items: Vec::new(),
        }
    }

    /// Field name (e.g. `"components"`).
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.descriptor.name
    }

    /// Predicate linking the owner to each child.
    #[must_use]
    pub fn predicate(&self) -> &'static str {
        self.descriptor.predicate
    }

    /// Kinds this collection accepts; the first is created by [`create`](Self::create).
    #[must_use]
    pub fn kinds(&self) -> &'static [ObjectKind] {
        self.descriptor.kinds
    }

    /// The scope new identities are minted in.
    #[must_use]
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// Creates a child of the collection's default kind.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for an invalid displayId under a
    /// compliant scope and [`Error::UriNotUnique`] if the identity is taken.
    pub fn create(&mut self, display_id: &str) -> Result<ObjectMut<'_>> {
        let kind = self.default_kind()?;
        self.create_as(kind, display_id)
    }

    /// Creates a child of a specific kind.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the collection does not hold
    /// `kind`, plus the errors of [`create`](Self::create).
    pub fn create_as(&mut self, kind: ObjectKind, display_id: &str) -> Result<ObjectMut<'_>> {
        self.check_kind(kind)?;
        let ids = self.scope.mint(kind, display_id, None)?;
        let object = Identified::from_identifiers(kind, ids, self.scope.is_compliant());
        self.insert(object)
    }

    /// Inserts an existing object.
    ///
    /// A compliant object added to a nested collection is re-based under the
    /// owner's persistent identity and keeps its own version.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] for a kind the collection does not
    /// hold and [`Error::UriNotUnique`] if the identity is taken.
    pub fn add(&mut self, mut object: Identified) -> Result<ObjectMut<'_>> {
        self.check_kind(object.kind())?;
        if !self.is_top_level() {
            object.rebase(self.scope.base(), None);
        }
        self.insert(object)
    }

    /// True if an object matches `key`.
    #[must_use]
    pub fn find(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Alias for [`find`](Self::find).
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.find(key)
    }

    /// Position of the object matching `key`: by identity, then displayId,
    /// then persistent identity.
    #[must_use]
    pub fn position(&self, key: &str) -> Option<usize> {
        self.items
            .iter()
            .position(|o| o.identity() == key)
            .or_else(|| self.items.iter().position(|o| o.display_id() == Some(key)))
            .or_else(|| {
                self.items
                    .iter()
                    .position(|o| o.persistent_identity().is_some_and(|p| p == key))
            })
    }

    /// The object at an index or matching an id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] when nothing matches.
    pub fn get<'k>(&self, key: impl Into<Key<'k>>) -> Result<&Identified> {
        let index = self.resolve(key.into())?;
        self.items
            .get(index)
            .ok_or_else(|| Error::not_found(self.name(), format!("index {index}")))
    }

    /// Mutable access to the object at an index or matching an id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] when nothing matches.
    pub fn get_mut<'k>(&mut self, key: impl Into<Key<'k>>) -> Result<ObjectMut<'_>> {
        let index = self.resolve(key.into())?;
        Ok(ObjectMut {
            items: &mut self.items,
            index,
        })
    }

    /// Like [`get`](Self::get) but also requires the object's kind. With no
    /// key, the first object is returned.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] when nothing matches (or the collection
    /// is empty) and [`Error::TypeMismatch`] when the match has another kind.
    pub fn get_typed(&self, kind: ObjectKind, key: Option<&str>) -> Result<&Identified> {
        let object = match key {
            Some(key) => self.get(key)?,
            None => self
                .items
                .first()
                .ok_or_else(|| Error::not_found(self.name(), "first entry"))?,
        };
        if object.kind() == kind {
            Ok(object)
        } else {
            Err(Error::TypeMismatch(format!(
                "{} is a {}, not a {kind}",
                object.identity(),
                object.kind()
            )))
        }
    }

    /// Removes and returns an object.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] when nothing matches.
    pub fn remove<'k>(&mut self, key: impl Into<Key<'k>>) -> Result<Identified> {
        let index = self.resolve(key.into())?;
        let object = self.items.remove(index);
        debug!(collection = self.name(), identity = %object.identity(), "removed object");
        Ok(object)
    }

    /// Number of objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if the collection holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Objects in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Identified> {
        self.items.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, Identified> {
        self.items.iter_mut()
    }

    /// DisplayIds of the objects that have one, in insertion order.
    #[must_use]
    pub fn display_ids(&self) -> Vec<&str> {
        self.items.iter().filter_map(Identified::display_id).collect()
    }

    /// Identity URIs in insertion order.
    #[must_use]
    pub fn identities(&self) -> Vec<&Uri> {
        self.items.iter().map(Identified::identity).collect()
    }

    /// Inserts a loaded object without re-basing it.
    pub(crate) fn push_loaded(&mut self, object: Identified) -> Result<()> {
        self.check_kind(object.kind())?;
        self.insert(object).map(|_| ())
    }

    pub(crate) fn set_scope(&mut self, scope: Scope) {
        self.scope = scope;
    }

    /// Moves every compliant child under a new owner identity.
    pub(crate) fn rebase(&mut self, persistent_identity: &str, version: Option<&str>, compliant: bool) {
        self.scope = Scope::child_of(persistent_identity, version, compliant);
        for object in &mut self.items {
            object.rebase(persistent_identity, version);
        }
    }

    fn insert(&mut self, object: Identified) -> Result<ObjectMut<'_>> {
        if self.items.iter().any(|o| o.identity() == object.identity()) {
            return Err(Error::UriNotUnique(object.identity().to_string()));
        }
        debug!(collection = self.name(), identity = %object.identity(), "added object");
        let index = self.items.len();
        self.items.push(object);
        Ok(ObjectMut {
            items: &mut self.items,
            index,
        })
    }

    fn resolve(&self, key: Key<'_>) -> Result<usize> {
        match key {
            Key::Index(i) if i < self.items.len() => Ok(i),
            Key::Id(id) => self
                .position(id)
                .ok_or_else(|| Error::not_found(self.name(), id)),
            other => Err(Error::not_found(self.name(), other.to_string())),
        }
    }

    fn default_kind(&self) -> Result<ObjectKind> {
        self.descriptor
            .kinds
            .first()
            .copied()
            .ok_or_else(|| Error::TypeMismatch(format!("{} accepts no kinds", self.name())))
    }

    fn check_kind(&self, kind: ObjectKind) -> Result<()> {
        if self.descriptor.kinds.contains(&kind) {
            Ok(())
        } else {
            Err(Error::TypeMismatch(format!(
                "{} cannot hold a {kind}",
                self.name()
            )))
        }
    }

    fn is_top_level(&self) -> bool {
        self.descriptor.kinds.iter().all(|k| k.is_top_level())
    }
}

/// Mutable handle to an object held in an [`OwnedObjects`] collection.
///
/// Dereferences to the [`Identified`]. Its identity setters check the new
/// identity against the object's siblings; on a clash the object is left as
/// it was and [`Error::UriNotUnique`] is returned.
#[derive(Debug)]
pub struct ObjectMut<'a> {
    items: &'a mut Vec<Identified>,
    index: usize,
}

impl ObjectMut<'_> {
    /// See [`Identified::set_display_id`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::UriNotUnique`] if a sibling already has the new
    /// identity, plus the errors of [`Identified::set_display_id`].
    pub fn set_display_id(&mut self, display_id: impl Into<Input>) -> Result<()> {
        self.checked(|object| object.set_display_id(display_id))
    }

    /// See [`Identified::set_persistent_identity`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::UriNotUnique`] if a sibling already has the new
    /// identity, plus the errors of [`Identified::set_persistent_identity`].
    pub fn set_persistent_identity(&mut self, uri: impl Into<Input>) -> Result<()> {
        self.checked(|object| object.set_persistent_identity(uri))
    }

    /// See [`Identified::set_version`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::UriNotUnique`] if a sibling already has the new
    /// identity, plus the errors of [`Identified::set_version`].
    pub fn set_version(&mut self, version: impl Into<Input>) -> Result<()> {
        self.checked(|object| object.set_version(version))
    }

    /// See [`Identified::set`]. Identity slots get the sibling check.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UriNotUnique`] if a sibling already has the new
    /// identity, plus the errors of [`Identified::set`].
    pub fn set(&mut self, descriptor: &PropertyDescriptor, value: impl Into<Input>) -> Result<()> {
        match descriptor.predicate {
            SBOL_DISPLAY_ID | SBOL_PERSISTENT_IDENTITY | SBOL_VERSION => {
                self.checked(|object| object.set(descriptor, value))
            }
            _ => self.items[self.index].set(descriptor, value),
        }
    }

    fn checked(&mut self, change: impl FnOnce(&mut Identified) -> Result<()>) -> Result<()> {
        let index = self.index;
        let saved = self.items[index].clone();
        if let Err(err) = change(&mut self.items[index]) {
            self.items[index] = saved;
            return Err(err);
        }
        let identity = self.items[index].identity();
        let clash = self
            .items
            .iter()
            .enumerate()
            .any(|(i, other)| i != index && other.identity() == identity);
        if clash {
            let identity = identity.to_string();
            self.items[index] = saved;
            return Err(Error::UriNotUnique(identity));
        }
        Ok(())
    }
}

impl Deref for ObjectMut<'_> {
    type Target = Identified;

    fn deref(&self) -> &Identified {
        &self.items[self.index]
    }
}

impl DerefMut for ObjectMut<'_> {
    fn deref_mut(&mut self) -> &mut Identified {
        &mut self.items[self.index]
    }
}

impl<'a> IntoIterator for &'a OwnedObjects {
    type Item = &'a Identified;
    type IntoIter = std::slice::Iter<'a, Identified>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::error::ErrorCode;
    use crate::kinds::{component_definition as cd, location, sequence_annotation as sa};

    fn annotation() -> Identified {
        let config = Config::new("http://sbols.org/CRISPR_Example").typed(false);
        let mut target = cd::new(&config, "target").unwrap();
        target
            .owned_mut(&cd::SEQUENCE_ANNOTATIONS)
            .unwrap()
            .create("anno")
            .unwrap()
            .clone()
    }

    #[test]
    fn create_then_find() {
        let config = Config::default();
        let mut target = cd::new(&config, "target").unwrap();
        let components = target.owned_mut(&cd::COMPONENTS).unwrap();
        components.create("x").unwrap();
        assert!(components.find("x"));
        assert!(!components.find("y"));
        assert_eq!(components.get("y").unwrap_err().code(), ErrorCode::NotFound);
        let identity = components.get(0usize).unwrap().identity().clone();
        assert!(components.contains(identity.as_str()));
        assert!(components.contains("http://examples.org/ComponentDefinition/target/x"));
    }

    #[test]
    fn duplicate_create_is_rejected() {
        let mut target = cd::new(&Config::default(), "target").unwrap();
        let components = target.owned_mut(&cd::COMPONENTS).unwrap();
        components.create("x").unwrap();
        let err = components.create("x").unwrap_err();
        assert_eq!(err.code(), ErrorCode::UriNotUnique);
        assert_eq!(components.len(), 1);
    }

    #[test]
    fn remove_drops_every_index() {
        let mut target = cd::new(&Config::default(), "target").unwrap();
        let components = target.owned_mut(&cd::COMPONENTS).unwrap();
        components.create("a").unwrap();
        components.create("b").unwrap();
        let removed = components.remove("a").unwrap();
        assert_eq!(removed.display_id(), Some("a"));
        assert_eq!(components.get("a").unwrap_err().code(), ErrorCode::NotFound);
        assert_eq!(
            components.get(removed.identity()).unwrap_err().code(),
            ErrorCode::NotFound
        );
        assert_eq!(components.display_ids(), ["b"]);
        assert_eq!(components.remove(5usize).unwrap_err().code(), ErrorCode::NotFound);
    }

    #[test]
    fn handle_rejects_identity_clash() {
        let mut target = cd::new(&Config::default(), "target").unwrap();
        let components = target.owned_mut(&cd::COMPONENTS).unwrap();
        components.create("a").unwrap();
        components.create("b").unwrap();
        let mut b = components.get_mut("b").unwrap();
        assert_eq!(b.set_display_id("a").unwrap_err().code(), ErrorCode::UriNotUnique);
        assert_eq!(b.display_id(), Some("b"));
        b.set_display_id("c").unwrap();
        let ids = components.identities();
        assert_ne!(ids[0], ids[1]);
        assert_eq!(components.display_ids(), ["a", "c"]);
    }

    #[test]
    fn locations_hold_each_location_kind() {
        let mut anno = annotation();
        let locations = anno.owned_mut(&sa::LOCATIONS).unwrap();
        let range = locations.create("r").unwrap();
        assert_eq!(range.kind(), ObjectKind::Range);
        assert_eq!(range.integer(&location::START), Some(1));
        locations.create_as(ObjectKind::Cut, "c").unwrap();
        locations
            .create_as(ObjectKind::GenericLocation, "g")
            .unwrap();
        assert_eq!(locations.len(), 3);
        let first = locations.get_typed(ObjectKind::Range, None).unwrap();
        assert_eq!(first.display_id(), Some("r"));
        let cut = locations.get_typed(ObjectKind::Cut, Some("c")).unwrap();
        assert_eq!(cut.integer(&location::AT), Some(0));
        assert_eq!(
            locations
                .get_typed(ObjectKind::Range, Some("c"))
                .unwrap_err()
                .code(),
            ErrorCode::TypeMismatch
        );
        assert_eq!(
            locations
                .create_as(ObjectKind::Component, "nope")
                .unwrap_err()
                .code(),
            ErrorCode::TypeMismatch
        );
    }

    #[test]
    fn get_typed_checks_first_entry() {
        let mut anno = annotation();
        let locations = anno.owned_mut(&sa::LOCATIONS).unwrap();
        assert_eq!(
            locations
                .get_typed(ObjectKind::Range, None)
                .unwrap_err()
                .code(),
            ErrorCode::NotFound
        );
        locations.create_as(ObjectKind::Cut, "c").unwrap();
        locations.create("r").unwrap();
        assert_eq!(
            locations
                .get_typed(ObjectKind::Range, None)
                .unwrap_err()
                .code(),
            ErrorCode::TypeMismatch
        );
    }

    #[test]
    fn add_rebases_under_owner() {
        let config = Config::new("http://sbols.org/CRISPR_Example").typed(false);
        let mut gene = cd::new(&config, "gRNA_b_gene").unwrap();
        let other = cd::new(&config, "elsewhere").unwrap();
        let mut component = other
            .owned(&cd::COMPONENTS)
            .unwrap()
            .scope()
            .mint(ObjectKind::Component, "CRa_U6", Some("1.0.0"))
            .map(|ids| Identified::from_identifiers(ObjectKind::Component, ids, true))
            .unwrap();
        component.set_version("1.0.0").unwrap();
        let added = gene.owned_mut(&cd::COMPONENTS).unwrap().add(component).unwrap();
        assert_eq!(
            *added.identity(),
            "http://sbols.org/CRISPR_Example/gRNA_b_gene/CRa_U6/1.0.0"
        );
        let wrong = cd::new(&config, "wrong").unwrap();
        assert_eq!(
            gene.owned_mut(&cd::COMPONENTS)
                .unwrap()
                .add(wrong)
                .unwrap_err()
                .code(),
            ErrorCode::TypeMismatch
        );
    }
}
