//! `sbol:ModuleDefinition`: a functional design grouping components and
//! their interactions.

use crate::config::Config;
use crate::error::Result;
use crate::identified::Identified;
use crate::kinds::ObjectKind;
use crate::model::{OwnedDescriptor, PropertyDescriptor, ValueKind};
use crate::vocab::*;

pub use super::base::ROLES;

/// `sbol:model` references.
pub const MODELS: PropertyDescriptor =
    PropertyDescriptor::list("models", SBOL_MODELS, ValueKind::Reference);

/// Property slots.
pub const PROPERTIES: &[PropertyDescriptor] = &[ROLES, MODELS];

/// `sbol:module` children.
pub const MODULES: OwnedDescriptor =
    OwnedDescriptor::new("modules", SBOL_MODULES, &[ObjectKind::Module]);

/// `sbol:functionalComponent` children.
pub const FUNCTIONAL_COMPONENTS: OwnedDescriptor = OwnedDescriptor::new(
    "functionalComponents",
    SBOL_FUNCTIONAL_COMPONENTS,
    &[ObjectKind::FunctionalComponent],
);

/// `sbol:interaction` children.
pub const INTERACTIONS: OwnedDescriptor =
    OwnedDescriptor::new("interactions", SBOL_INTERACTIONS, &[ObjectKind::Interaction]);

/// Owned-object slots.
pub const OWNED: &[OwnedDescriptor] = &[MODULES, FUNCTIONAL_COMPONENTS, INTERACTIONS];

/// Creates a module definition.
///
/// # Errors
///
/// Returns an error if `display_id` cannot be minted under `config`.
pub fn new(config: &Config, display_id: &str) -> Result<Identified> {
    Identified::new(ObjectKind::ModuleDefinition, config, display_id, None)
}
