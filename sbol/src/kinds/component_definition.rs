//! `sbol:ComponentDefinition`: a structural genetic part or design.

use crate::config::Config;
use crate::error::Result;
use crate::identified::Identified;
use crate::kinds::ObjectKind;
use crate::model::{Cardinality, Input, OwnedDescriptor, PropertyDescriptor, ValueKind};
use crate::vocab::*;

pub use super::base::ROLES;

/// `sbol:type`; at least one, DNA unless told otherwise.
pub const TYPES: PropertyDescriptor = PropertyDescriptor::with_bounds(
    "types",
    SBOL_TYPES,
    ValueKind::Uri,
    Cardinality::One,
    Cardinality::Many,
)
.defaulting(&[BIOPAX_DNA]);

/// `sbol:sequence` references.
pub const SEQUENCES: PropertyDescriptor =
    PropertyDescriptor::list("sequences", SBOL_SEQUENCES, ValueKind::Reference);

/// Property slots.
pub const PROPERTIES: &[PropertyDescriptor] = &[TYPES, ROLES, SEQUENCES];

/// `sbol:component` children.
pub const COMPONENTS: OwnedDescriptor =
    OwnedDescriptor::new("components", SBOL_COMPONENTS, &[ObjectKind::Component]);

/// `sbol:sequenceAnnotation` children.
pub const SEQUENCE_ANNOTATIONS: OwnedDescriptor = OwnedDescriptor::new(
    "sequenceAnnotations",
    SBOL_SEQUENCE_ANNOTATIONS,
    &[ObjectKind::SequenceAnnotation],
);

/// `sbol:sequenceConstraint` children.
pub const SEQUENCE_CONSTRAINTS: OwnedDescriptor = OwnedDescriptor::new(
    "sequenceConstraints",
    SBOL_SEQUENCE_CONSTRAINTS,
    &[ObjectKind::SequenceConstraint],
);

/// Owned-object slots.
pub const OWNED: &[OwnedDescriptor] = &[COMPONENTS, SEQUENCE_ANNOTATIONS, SEQUENCE_CONSTRAINTS];

/// Creates a DNA component definition.
///
/// # Errors
///
/// Returns an error if `display_id` cannot be minted under `config`.
pub fn new(config: &Config, display_id: &str) -> Result<Identified> {
    Identified::new(ObjectKind::ComponentDefinition, config, display_id, None)
}

/// Creates a component definition with an explicit type and version.
///
/// # Errors
///
/// Returns an error if the identifiers cannot be minted or the type is not a URI.
pub fn with_type(
    config: &Config,
    display_id: &str,
    type_uri: &str,
    version: Option<&str>,
) -> Result<Identified> {
    let mut cd = Identified::new(ObjectKind::ComponentDefinition, config, display_id, version)?;
    cd.set(&TYPES, Input::from(vec![type_uri]))?;
    Ok(cd)
}
