//! `sbol:Component`: an instance of a ComponentDefinition inside another.

use crate::model::{OwnedDescriptor, PropertyDescriptor, ValueKind};
use crate::vocab::SBOL_ROLE_INTEGRATION;

pub use super::base::{ACCESS, DEFINITION, MAPS_TOS, ROLES};

/// `sbol:roleIntegration`.
pub const ROLE_INTEGRATION: PropertyDescriptor =
    PropertyDescriptor::optional("roleIntegration", SBOL_ROLE_INTEGRATION, ValueKind::Uri);

/// Property slots.
pub const PROPERTIES: &[PropertyDescriptor] = &[DEFINITION, ACCESS, ROLES, ROLE_INTEGRATION];

/// Owned-object slots.
pub const OWNED: &[OwnedDescriptor] = &[MAPS_TOS];
