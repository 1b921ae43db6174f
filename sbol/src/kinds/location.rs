//! Locations: `sbol:Range`, `sbol:Cut` and `sbol:GenericLocation`.

use crate::model::{PropertyDescriptor, ValueKind};
use crate::vocab::*;

/// `sbol:orientation`.
pub const ORIENTATION: PropertyDescriptor =
    PropertyDescriptor::optional("orientation", SBOL_ORIENTATION, ValueKind::Uri).allowing(&[
        SBOL_ORIENTATION_INLINE,
        SBOL_ORIENTATION_REVERSE_COMPLEMENT,
    ]);

/// `sbol:sequence`, the Sequence the location indexes into.
pub const SEQUENCE: PropertyDescriptor =
    PropertyDescriptor::optional("sequence", SBOL_SEQUENCES, ValueKind::Reference);

/// `sbol:start` (1-based, inclusive).
pub const START: PropertyDescriptor =
    PropertyDescriptor::optional("start", SBOL_START, ValueKind::Integer).defaulting(&["1"]);

/// `sbol:end` (1-based, inclusive).
pub const END: PropertyDescriptor =
    PropertyDescriptor::optional("end", SBOL_END, ValueKind::Integer).defaulting(&["1"]);

/// `sbol:at`, the position after which a Cut falls.
pub const AT: PropertyDescriptor =
    PropertyDescriptor::optional("at", SBOL_AT, ValueKind::Integer).defaulting(&["0"]);

/// Range slots.
pub const RANGE_PROPERTIES: &[PropertyDescriptor] = &[ORIENTATION, SEQUENCE, START, END];

/// Cut slots.
pub const CUT_PROPERTIES: &[PropertyDescriptor] = &[ORIENTATION, SEQUENCE, AT];

/// GenericLocation slots.
pub const GENERIC_LOCATION_PROPERTIES: &[PropertyDescriptor] = &[ORIENTATION, SEQUENCE];
