//! `sbol:Interaction`: a functional relationship among components.

use crate::kinds::ObjectKind;
use crate::model::{OwnedDescriptor, PropertyDescriptor, ValueKind};
use crate::vocab::{SBOL_PARTICIPATIONS, SBOL_TYPES};

/// `sbol:type` (SBO interaction types).
pub const TYPES: PropertyDescriptor =
    PropertyDescriptor::list("types", SBOL_TYPES, ValueKind::Uri);

/// Property slots.
pub const PROPERTIES: &[PropertyDescriptor] = &[TYPES];

/// `sbol:participation` children.
pub const PARTICIPATIONS: OwnedDescriptor = OwnedDescriptor::new(
    "participations",
    SBOL_PARTICIPATIONS,
    &[ObjectKind::Participation],
);

/// Owned-object slots.
pub const OWNED: &[OwnedDescriptor] = &[PARTICIPATIONS];
