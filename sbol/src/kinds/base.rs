//! Slots shared by every SBOL object (the `Identified` base class) and a few
//! slots reused verbatim across classes.

use crate::kinds::ObjectKind;
use crate::model::{OwnedDescriptor, PropertyDescriptor, ValueKind};
use crate::vocab::*;

/// `sbol:persistentIdentity`.
pub const PERSISTENT_IDENTITY: PropertyDescriptor =
    PropertyDescriptor::optional("persistentIdentity", SBOL_PERSISTENT_IDENTITY, ValueKind::Uri);

/// `sbol:displayId`.
pub const DISPLAY_ID: PropertyDescriptor =
    PropertyDescriptor::optional("displayId", SBOL_DISPLAY_ID, ValueKind::Text);

/// `sbol:version`.
pub const VERSION: PropertyDescriptor =
    PropertyDescriptor::optional("version", SBOL_VERSION, ValueKind::Text);

/// `dcterms:title`.
pub const NAME: PropertyDescriptor =
    PropertyDescriptor::optional("name", SBOL_NAME, ValueKind::Text);

/// `dcterms:description`.
pub const DESCRIPTION: PropertyDescriptor =
    PropertyDescriptor::optional("description", SBOL_DESCRIPTION, ValueKind::Text);

/// `prov:wasDerivedFrom`.
pub const WAS_DERIVED_FROM: PropertyDescriptor =
    PropertyDescriptor::list("wasDerivedFrom", PROV_WAS_DERIVED_FROM, ValueKind::Uri);

/// `prov:wasGeneratedBy`.
pub const WAS_GENERATED_BY: PropertyDescriptor =
    PropertyDescriptor::list("wasGeneratedBy", PROV_WAS_GENERATED_BY, ValueKind::Reference);

/// Slots every object carries.
pub const PROPERTIES: &[PropertyDescriptor] = &[
    PERSISTENT_IDENTITY,
    DISPLAY_ID,
    VERSION,
    NAME,
    DESCRIPTION,
    WAS_DERIVED_FROM,
    WAS_GENERATED_BY,
];

/// `sbol:role`.
pub const ROLES: PropertyDescriptor =
    PropertyDescriptor::list("roles", SBOL_ROLES, ValueKind::Uri);

/// `sbol:definition`.
pub const DEFINITION: PropertyDescriptor =
    PropertyDescriptor::optional("definition", SBOL_DEFINITION, ValueKind::Reference);

/// `sbol:access`, defaulting to public.
pub const ACCESS: PropertyDescriptor =
    PropertyDescriptor::optional("access", SBOL_ACCESS, ValueKind::Uri)
        .allowing(&[SBOL_ACCESS_PUBLIC, SBOL_ACCESS_PRIVATE])
        .defaulting(&[SBOL_ACCESS_PUBLIC]);

/// `sbol:mapsTo` children.
pub const MAPS_TOS: OwnedDescriptor =
    OwnedDescriptor::new("mapsTos", SBOL_MAPS_TOS, &[ObjectKind::MapsTo]);
