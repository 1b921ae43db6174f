//! `sbol:MapsTo`: identifies a local component with one inside a sub-design.

use crate::model::{PropertyDescriptor, ValueKind};
use crate::vocab::*;

/// `sbol:local`.
pub const LOCAL: PropertyDescriptor =
    PropertyDescriptor::optional("local", SBOL_LOCAL, ValueKind::Reference);

/// `sbol:remote`.
pub const REMOTE: PropertyDescriptor =
    PropertyDescriptor::optional("remote", SBOL_REMOTE, ValueKind::Reference);

/// `sbol:refinement`.
pub const REFINEMENT: PropertyDescriptor =
    PropertyDescriptor::optional("refinement", SBOL_REFINEMENT, ValueKind::Uri)
        .allowing(&[
            SBOL_REFINEMENT_USE_REMOTE,
            SBOL_REFINEMENT_USE_LOCAL,
            SBOL_REFINEMENT_VERIFY_IDENTICAL,
            SBOL_REFINEMENT_MERGE,
        ])
        .defaulting(&[SBOL_REFINEMENT_VERIFY_IDENTICAL]);

/// Property slots.
pub const PROPERTIES: &[PropertyDescriptor] = &[LOCAL, REMOTE, REFINEMENT];
