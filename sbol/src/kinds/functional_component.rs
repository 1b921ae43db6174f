//! `sbol:FunctionalComponent`: a component playing a role in a module.

use crate::model::{OwnedDescriptor, PropertyDescriptor, ValueKind};
use crate::vocab::*;

pub use super::base::{ACCESS, DEFINITION, MAPS_TOS};

/// `sbol:direction`, defaulting to none.
pub const DIRECTION: PropertyDescriptor =
    PropertyDescriptor::optional("direction", SBOL_DIRECTION, ValueKind::Uri)
        .allowing(&[
            SBOL_DIRECTION_IN,
            SBOL_DIRECTION_OUT,
            SBOL_DIRECTION_IN_OUT,
            SBOL_DIRECTION_NONE,
        ])
        .defaulting(&[SBOL_DIRECTION_NONE]);

/// Property slots.
pub const PROPERTIES: &[PropertyDescriptor] = &[DEFINITION, ACCESS, DIRECTION];

/// Owned-object slots.
pub const OWNED: &[OwnedDescriptor] = &[MAPS_TOS];
