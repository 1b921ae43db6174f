//! `sbol:Model`: a pointer to an external computational model.

use crate::config::Config;
use crate::error::Result;
use crate::identified::Identified;
use crate::kinds::ObjectKind;
use crate::model::{Input, PropertyDescriptor, ValueKind};
use crate::vocab::*;

/// `sbol:source`, where the model file lives.
pub const SOURCE: PropertyDescriptor =
    PropertyDescriptor::optional("source", SBOL_SOURCE, ValueKind::Uri);

/// `sbol:language`, SBML unless told otherwise.
pub const LANGUAGE: PropertyDescriptor =
    PropertyDescriptor::optional("language", SBOL_LANGUAGE, ValueKind::Uri)
        .defaulting(&[EDAM_SBML]);

/// `sbol:framework`, continuous unless told otherwise.
pub const FRAMEWORK: PropertyDescriptor =
    PropertyDescriptor::optional("framework", SBOL_FRAMEWORK, ValueKind::Uri)
        .defaulting(&[SBO_CONTINUOUS]);

/// Property slots.
pub const PROPERTIES: &[PropertyDescriptor] = &[SOURCE, LANGUAGE, FRAMEWORK];

/// Creates a model pointing at `source`.
///
/// # Errors
///
/// Returns an error if the identifiers cannot be minted.
pub fn new(config: &Config, display_id: &str, source: &str) -> Result<Identified> {
    let mut model = Identified::new(ObjectKind::Model, config, display_id, None)?;
    model.set(&SOURCE, Input::from(source))?;
    Ok(model)
}
