//! `sbol:Participation`: a FunctionalComponent's role in an Interaction.

use crate::model::{PropertyDescriptor, ValueKind};
use crate::vocab::SBOL_PARTICIPANT;

pub use super::base::ROLES;

/// `sbol:participant`.
pub const PARTICIPANT: PropertyDescriptor =
    PropertyDescriptor::optional("participant", SBOL_PARTICIPANT, ValueKind::Reference);

/// Property slots.
pub const PROPERTIES: &[PropertyDescriptor] = &[ROLES, PARTICIPANT];
