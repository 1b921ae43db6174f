//! `sbol:SequenceConstraint`: a positional relation between two Components.

use crate::model::{PropertyDescriptor, ValueKind};
use crate::vocab::*;

/// `sbol:subject`.
pub const SUBJECT: PropertyDescriptor =
    PropertyDescriptor::optional("subject", SBOL_SUBJECT, ValueKind::Reference);

/// `sbol:object`.
pub const OBJECT: PropertyDescriptor =
    PropertyDescriptor::optional("object", SBOL_OBJECT, ValueKind::Reference);

/// `sbol:restriction`, defaulting to precedes.
pub const RESTRICTION: PropertyDescriptor =
    PropertyDescriptor::optional("restriction", SBOL_RESTRICTION, ValueKind::Uri)
        .defaulting(&[SBOL_RESTRICTION_PRECEDES]);

/// Property slots.
pub const PROPERTIES: &[PropertyDescriptor] = &[SUBJECT, OBJECT, RESTRICTION];
