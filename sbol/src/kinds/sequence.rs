//! `sbol:Sequence`: the primary structure of a component.

use crate::config::Config;
use crate::error::Result;
use crate::identified::Identified;
use crate::kinds::ObjectKind;
use crate::model::{Input, PropertyDescriptor, ValueKind};
use crate::vocab::*;

/// `sbol:elements`.
pub const ELEMENTS: PropertyDescriptor =
    PropertyDescriptor::optional("elements", SBOL_ELEMENTS, ValueKind::Text);

/// `sbol:encoding`, IUPAC DNA unless told otherwise.
pub const ENCODING: PropertyDescriptor =
    PropertyDescriptor::optional("encoding", SBOL_ENCODING, ValueKind::Uri)
        .defaulting(&[SBOL_ENCODING_IUPAC]);

/// Property slots.
pub const PROPERTIES: &[PropertyDescriptor] = &[ELEMENTS, ENCODING];

/// Creates an empty IUPAC DNA sequence.
///
/// # Errors
///
/// Returns an error if `display_id` cannot be minted under `config`.
pub fn new(config: &Config, display_id: &str) -> Result<Identified> {
    Identified::new(ObjectKind::Sequence, config, display_id, None)
}

/// Creates a sequence with the given elements and encoding.
///
/// # Errors
///
/// Returns an error if the identifiers cannot be minted.
pub fn with_elements(
    config: &Config,
    display_id: &str,
    elements: &str,
    encoding: &str,
) -> Result<Identified> {
    let mut seq = new(config, display_id)?;
    seq.set(&ELEMENTS, Input::from(elements))?;
    seq.set(&ENCODING, Input::from(encoding))?;
    Ok(seq)
}
