//! SBOL 2 entity kinds and their schemas.
//!
//! Each submodule declares one class: its property slots, its owned-object
//! slots and, for top-level classes, a constructor. [`ObjectKind`] ties a
//! class to its `rdf:type` and schema tables.

pub mod base;
pub mod collection;
pub mod component;
pub mod component_definition;
pub mod functional_component;
pub mod interaction;
pub mod location;
pub mod maps_to;
pub mod model;
pub mod module;
pub mod module_definition;
pub mod participation;
pub mod sequence;
pub mod sequence_annotation;
pub mod sequence_constraint;

use crate::model::{OwnedDescriptor, PropertyDescriptor};

/// The SBOL class of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ObjectKind {
    /// `sbol:ComponentDefinition` (top level).
    ComponentDefinition,
    /// `sbol:ModuleDefinition` (top level).
    ModuleDefinition,
    /// `sbol:Sequence` (top level).
    Sequence,
    /// `sbol:Model` (top level).
    Model,
    /// `sbol:Collection` (top level).
    Collection,
    /// `sbol:Component`, owned by a ComponentDefinition.
    Component,
    /// `sbol:SequenceAnnotation`, owned by a ComponentDefinition.
    SequenceAnnotation,
    /// `sbol:SequenceConstraint`, owned by a ComponentDefinition.
    SequenceConstraint,
    /// `sbol:Range` location.
    Range,
    /// `sbol:Cut` location.
    Cut,
    /// `sbol:GenericLocation` location.
    GenericLocation,
    /// `sbol:Module`, owned by a ModuleDefinition.
    Module,
    /// `sbol:FunctionalComponent`, owned by a ModuleDefinition.
    FunctionalComponent,
    /// `sbol:Interaction`, owned by a ModuleDefinition.
    Interaction,
    /// `sbol:Participation`, owned by an Interaction.
    Participation,
    /// `sbol:MapsTo`, owned by a Component, FunctionalComponent or Module.
    MapsTo,
}

impl ObjectKind {
    /// Every kind, top-level first.
    pub const ALL: [ObjectKind; 16] = [
        ObjectKind::ComponentDefinition,
        ObjectKind::ModuleDefinition,
        ObjectKind::Sequence,
        ObjectKind::Model,
        ObjectKind::Collection,
        ObjectKind::Component,
        ObjectKind::SequenceAnnotation,
        ObjectKind::SequenceConstraint,
        ObjectKind::Range,
        ObjectKind::Cut,
        ObjectKind::GenericLocation,
        ObjectKind::Module,
        ObjectKind::FunctionalComponent,
        ObjectKind::Interaction,
        ObjectKind::Participation,
        ObjectKind::MapsTo,
    ];

    /// Kinds a Document holds directly, in collection order.
    pub const TOP_LEVEL: [ObjectKind; 5] = [
        ObjectKind::ComponentDefinition,
        ObjectKind::ModuleDefinition,
        ObjectKind::Sequence,
        ObjectKind::Model,
        ObjectKind::Collection,
    ];

    /// The class local name (e.g. `"ComponentDefinition"`).
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            ObjectKind::ComponentDefinition => "ComponentDefinition",
            ObjectKind::ModuleDefinition => "ModuleDefinition",
            ObjectKind::Sequence => "Sequence",
            ObjectKind::Model => "Model",
            ObjectKind::Collection => "Collection",
            ObjectKind::Component => "Component",
            ObjectKind::SequenceAnnotation => "SequenceAnnotation",
            ObjectKind::SequenceConstraint => "SequenceConstraint",
            ObjectKind::Range => "Range",
            ObjectKind::Cut => "Cut",
            ObjectKind::GenericLocation => "GenericLocation",
            ObjectKind::Module => "Module",
            ObjectKind::FunctionalComponent => "FunctionalComponent",
            ObjectKind::Interaction => "Interaction",
            ObjectKind::Participation => "Participation",
            ObjectKind::MapsTo => "MapsTo",
        }
    }

    /// The full `rdf:type` IRI.
    #[must_use]
    pub fn rdf_type(self) -> &'static str {
        match self {
            ObjectKind::ComponentDefinition => "http://sbols.org/v2#ComponentDefinition",
            ObjectKind::ModuleDefinition => "http://sbols.org/v2#ModuleDefinition",
            ObjectKind::Sequence => "http://sbols.org/v2#Sequence",
            ObjectKind::Model => "http://sbols.org/v2#Model",
            ObjectKind::Collection => "http://sbols.org/v2#Collection",
            ObjectKind::Component => "http://sbols.org/v2#Component",
            ObjectKind::SequenceAnnotation => "http://sbols.org/v2#SequenceAnnotation",
            ObjectKind::SequenceConstraint => "http://sbols.org/v2#SequenceConstraint",
            ObjectKind::Range => "http://sbols.org/v2#Range",
            ObjectKind::Cut => "http://sbols.org/v2#Cut",
            ObjectKind::GenericLocation => "http://sbols.org/v2#GenericLocation",
            ObjectKind::Module => "http://sbols.org/v2#Module",
            ObjectKind::FunctionalComponent => "http://sbols.org/v2#FunctionalComponent",
            ObjectKind::Interaction => "http://sbols.org/v2#Interaction",
            ObjectKind::Participation => "http://sbols.org/v2#Participation",
            ObjectKind::MapsTo => "http://sbols.org/v2#MapsTo",
        }
    }

    /// Looks up a kind by its `rdf:type` IRI.
    #[must_use]
    pub fn from_rdf_type(iri: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.rdf_type() == iri)
    }

    /// True for kinds held directly by a Document.
    #[must_use]
    pub fn is_top_level(self) -> bool {
        Self::TOP_LEVEL.contains(&self)
    }

    /// Property slots declared by this class (excluding the common ones in
    /// [`base::PROPERTIES`]).
    #[must_use]
    pub fn properties(self) -> &'static [PropertyDescriptor] {
        match self {
            ObjectKind::ComponentDefinition => component_definition::PROPERTIES,
            ObjectKind::ModuleDefinition => module_definition::PROPERTIES,
            ObjectKind::Sequence => sequence::PROPERTIES,
            ObjectKind::Model => model::PROPERTIES,
            ObjectKind::Collection => collection::PROPERTIES,
            ObjectKind::Component => component::PROPERTIES,
            ObjectKind::SequenceAnnotation => sequence_annotation::PROPERTIES,
            ObjectKind::SequenceConstraint => sequence_constraint::PROPERTIES,
            ObjectKind::Range => location::RANGE_PROPERTIES,
            ObjectKind::Cut => location::CUT_PROPERTIES,
            ObjectKind::GenericLocation => location::GENERIC_LOCATION_PROPERTIES,
            ObjectKind::Module => module::PROPERTIES,
            ObjectKind::FunctionalComponent => functional_component::PROPERTIES,
            ObjectKind::Interaction => interaction::PROPERTIES,
            ObjectKind::Participation => participation::PROPERTIES,
            ObjectKind::MapsTo => maps_to::PROPERTIES,
        }
    }

    /// Owned-object slots declared by this class.
    #[must_use]
    pub fn owned(self) -> &'static [OwnedDescriptor] {
        match self {
            ObjectKind::ComponentDefinition => component_definition::OWNED,
            ObjectKind::ModuleDefinition => module_definition::OWNED,
            ObjectKind::Component => component::OWNED,
            ObjectKind::SequenceAnnotation => sequence_annotation::OWNED,
            ObjectKind::Module => module::OWNED,
            ObjectKind::FunctionalComponent => functional_component::OWNED,
            ObjectKind::Interaction => interaction::OWNED,
            ObjectKind::Sequence
            | ObjectKind::Model
            | ObjectKind::Collection
            | ObjectKind::SequenceConstraint
            | ObjectKind::Range
            | ObjectKind::Cut
            | ObjectKind::GenericLocation
            | ObjectKind::Participation
            | ObjectKind::MapsTo => &[],
        }
    }

    /// Common and class-specific property slots.
    pub fn all_properties(self) -> impl Iterator<Item = &'static PropertyDescriptor> {
        base::PROPERTIES.iter().chain(self.properties())
    }

    /// Finds the property slot backed by `predicate`.
    #[must_use]
    pub fn find_property(self, predicate: &str) -> Option<&'static PropertyDescriptor> {
        self.all_properties().find(|d| d.predicate == predicate)
    }

    /// Finds the owned-object slot backed by `predicate`.
    #[must_use]
    pub fn find_owned(self, predicate: &str) -> Option<&'static OwnedDescriptor> {
        self.owned().iter().find(|d| d.predicate == predicate)
    }
}

impl std::fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.class_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn rdf_types_round_trip() {
        for kind in ObjectKind::ALL {
            assert_eq!(ObjectKind::from_rdf_type(kind.rdf_type()), Some(kind));
            assert!(kind.rdf_type().ends_with(kind.class_name()));
        }
        assert_eq!(ObjectKind::from_rdf_type("http://sbols.org/v2#Nope"), None);
    }

    #[test]
    fn predicates_are_unique_per_kind() {
        for kind in ObjectKind::ALL {
            let mut seen = HashSet::new();
            for d in kind.all_properties() {
                assert!(seen.insert(d.predicate), "{kind}: duplicate {}", d.predicate);
            }
            for d in kind.owned() {
                assert!(seen.insert(d.predicate), "{kind}: duplicate {}", d.predicate);
            }
        }
    }

    #[test]
    fn schemas_are_valid() {
        for kind in ObjectKind::ALL {
            for d in kind.all_properties() {
                assert!(d.validate().is_ok(), "{kind}.{}", d.name);
                assert!(d.coerce(d.default_input()).is_ok(), "{kind}.{} default", d.name);
            }
        }
    }

    #[test]
    fn owned_children_are_never_top_level() {
        for kind in ObjectKind::ALL {
            for slot in kind.owned() {
                assert!(!slot.kinds.is_empty());
                assert!(slot.kinds.iter().all(|k| !k.is_top_level()));
            }
        }
    }
}
