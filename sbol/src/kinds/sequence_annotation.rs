//! `sbol:SequenceAnnotation`: a located feature on a ComponentDefinition.

use crate::kinds::ObjectKind;
use crate::model::{OwnedDescriptor, PropertyDescriptor, ValueKind};
use crate::vocab::{SBOL_COMPONENTS, SBOL_LOCATIONS};

pub use super::base::ROLES;

/// `sbol:component`, the Component this annotation locates.
pub const COMPONENT: PropertyDescriptor =
    PropertyDescriptor::optional("component", SBOL_COMPONENTS, ValueKind::Reference);

/// Property slots.
pub const PROPERTIES: &[PropertyDescriptor] = &[ROLES, COMPONENT];

/// `sbol:location` children; `create` makes a Range.
pub const LOCATIONS: OwnedDescriptor = OwnedDescriptor::new(
    "locations",
    SBOL_LOCATIONS,
    &[ObjectKind::Range, ObjectKind::Cut, ObjectKind::GenericLocation],
);

/// Owned-object slots.
pub const OWNED: &[OwnedDescriptor] = &[LOCATIONS];
