//! `sbol:Collection`: an unordered group of top-level objects.

use crate::config::Config;
use crate::error::Result;
use crate::identified::Identified;
use crate::kinds::ObjectKind;
use crate::model::{PropertyDescriptor, ValueKind};
use crate::vocab::SBOL_MEMBERS;

/// `sbol:member` references.
pub const MEMBERS: PropertyDescriptor =
    PropertyDescriptor::list("members", SBOL_MEMBERS, ValueKind::Reference);

/// Property slots.
pub const PROPERTIES: &[PropertyDescriptor] = &[MEMBERS];

/// Creates an empty collection.
///
/// # Errors
///
/// Returns an error if `display_id` cannot be minted under `config`.
pub fn new(config: &Config, display_id: &str) -> Result<Identified> {
    Identified::new(ObjectKind::Collection, config, display_id, None)
}
