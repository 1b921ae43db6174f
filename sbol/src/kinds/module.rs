//! `sbol:Module`: a ModuleDefinition instantiated inside another.

use crate::model::{OwnedDescriptor, PropertyDescriptor};

pub use super::base::{DEFINITION, MAPS_TOS};

/// Property slots.
pub const PROPERTIES: &[PropertyDescriptor] = &[DEFINITION];

/// Owned-object slots.
pub const OWNED: &[OwnedDescriptor] = &[MAPS_TOS];
