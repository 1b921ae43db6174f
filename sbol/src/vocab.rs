//! IRI constants for the SBOL 2 vocabulary and the ontologies it borrows from.

/// SBOL 2 namespace.
pub const SBOL: &str = "http://sbols.org/v2#";
/// RDF namespace.
pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
/// W3C provenance namespace.
pub const PROV: &str = "http://www.w3.org/ns/prov#";
/// Dublin Core terms namespace.
pub const DCTERMS: &str = "http://purl.org/dc/terms/";
/// XSD namespace.
pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
/// BioPAX level 3 namespace.
pub const BIOPAX: &str = "http://www.biopax.org/release/biopax-level3.owl#";
/// Sequence Ontology term prefix.
pub const SO: &str = "http://identifiers.org/so/SO:";
/// Systems Biology Ontology term prefix.
pub const SBO: &str = "http://identifiers.org/biomodels.sbo/SBO:";

/// `rdf:type`.
pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
/// `xsd:string`.
pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
/// `xsd:integer`.
pub const XSD_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
/// `rdf:langString`.
pub const RDF_LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";

// Identified
/// `sbol:persistentIdentity`.
pub const SBOL_PERSISTENT_IDENTITY: &str = "http://sbols.org/v2#persistentIdentity";
/// `sbol:displayId`.
pub const SBOL_DISPLAY_ID: &str = "http://sbols.org/v2#displayId";
/// `sbol:version`.
pub const SBOL_VERSION: &str = "http://sbols.org/v2#version";
/// `dcterms:title`, exposed as `name`.
pub const SBOL_NAME: &str = "http://purl.org/dc/terms/title";
/// `dcterms:description`.
pub const SBOL_DESCRIPTION: &str = "http://purl.org/dc/terms/description";
/// `prov:wasDerivedFrom`.
pub const PROV_WAS_DERIVED_FROM: &str = "http://www.w3.org/ns/prov#wasDerivedFrom";
/// `prov:wasGeneratedBy`.
pub const PROV_WAS_GENERATED_BY: &str = "http://www.w3.org/ns/prov#wasGeneratedBy";

// Shared predicates
/// `sbol:type`.
pub const SBOL_TYPES: &str = "http://sbols.org/v2#type";
/// `sbol:role`.
pub const SBOL_ROLES: &str = "http://sbols.org/v2#role";
/// `sbol:roleIntegration`.
pub const SBOL_ROLE_INTEGRATION: &str = "http://sbols.org/v2#roleIntegration";
/// `sbol:definition`.
pub const SBOL_DEFINITION: &str = "http://sbols.org/v2#definition";
/// `sbol:access`.
pub const SBOL_ACCESS: &str = "http://sbols.org/v2#access";
/// `sbol:direction`.
pub const SBOL_DIRECTION: &str = "http://sbols.org/v2#direction";
/// `sbol:orientation`.
pub const SBOL_ORIENTATION: &str = "http://sbols.org/v2#orientation";
/// `sbol:mapsTo`.
pub const SBOL_MAPS_TOS: &str = "http://sbols.org/v2#mapsTo";

// ComponentDefinition
/// `sbol:sequence`.
pub const SBOL_SEQUENCES: &str = "http://sbols.org/v2#sequence";
/// `sbol:component`.
pub const SBOL_COMPONENTS: &str = "http://sbols.org/v2#component";
/// `sbol:sequenceAnnotation`.
pub const SBOL_SEQUENCE_ANNOTATIONS: &str = "http://sbols.org/v2#sequenceAnnotation";
/// `sbol:sequenceConstraint`.
pub const SBOL_SEQUENCE_CONSTRAINTS: &str = "http://sbols.org/v2#sequenceConstraint";
/// `sbol:location`.
pub const SBOL_LOCATIONS: &str = "http://sbols.org/v2#location";
/// `sbol:start`.
pub const SBOL_START: &str = "http://sbols.org/v2#start";
/// `sbol:end`.
pub const SBOL_END: &str = "http://sbols.org/v2#end";
/// `sbol:at`.
pub const SBOL_AT: &str = "http://sbols.org/v2#at";
/// `sbol:subject`.
pub const SBOL_SUBJECT: &str = "http://sbols.org/v2#subject";
/// `sbol:object`.
pub const SBOL_OBJECT: &str = "http://sbols.org/v2#object";
/// `sbol:restriction`.
pub const SBOL_RESTRICTION: &str = "http://sbols.org/v2#restriction";

// Sequence
/// `sbol:elements`.
pub const SBOL_ELEMENTS: &str = "http://sbols.org/v2#elements";
/// `sbol:encoding`.
pub const SBOL_ENCODING: &str = "http://sbols.org/v2#encoding";

// ModuleDefinition
/// `sbol:module`.
pub const SBOL_MODULES: &str = "http://sbols.org/v2#module";
/// `sbol:functionalComponent`.
pub const SBOL_FUNCTIONAL_COMPONENTS: &str = "http://sbols.org/v2#functionalComponent";
/// `sbol:interaction`.
pub const SBOL_INTERACTIONS: &str = "http://sbols.org/v2#interaction";
/// `sbol:participation`.
pub const SBOL_PARTICIPATIONS: &str = "http://sbols.org/v2#participation";
/// `sbol:participant`.
pub const SBOL_PARTICIPANT: &str = "http://sbols.org/v2#participant";
/// `sbol:model`.
pub const SBOL_MODELS: &str = "http://sbols.org/v2#model";
/// `sbol:local`.
pub const SBOL_LOCAL: &str = "http://sbols.org/v2#local";
/// `sbol:remote`.
pub const SBOL_REMOTE: &str = "http://sbols.org/v2#remote";
/// `sbol:refinement`.
pub const SBOL_REFINEMENT: &str = "http://sbols.org/v2#refinement";

// Model / Collection
/// `sbol:source`.
pub const SBOL_SOURCE: &str = "http://sbols.org/v2#source";
/// `sbol:language`.
pub const SBOL_LANGUAGE: &str = "http://sbols.org/v2#language";
/// `sbol:framework`.
pub const SBOL_FRAMEWORK: &str = "http://sbols.org/v2#framework";
/// `sbol:member`.
pub const SBOL_MEMBERS: &str = "http://sbols.org/v2#member";

// Controlled values
/// `sbol:public`.
pub const SBOL_ACCESS_PUBLIC: &str = "http://sbols.org/v2#public";
/// `sbol:private`.
pub const SBOL_ACCESS_PRIVATE: &str = "http://sbols.org/v2#private";
/// `sbol:in`.
pub const SBOL_DIRECTION_IN: &str = "http://sbols.org/v2#in";
/// `sbol:out`.
pub const SBOL_DIRECTION_OUT: &str = "http://sbols.org/v2#out";
/// `sbol:inout`.
pub const SBOL_DIRECTION_IN_OUT: &str = "http://sbols.org/v2#inout";
/// `sbol:none`.
pub const SBOL_DIRECTION_NONE: &str = "http://sbols.org/v2#none";
/// `sbol:inline`.
pub const SBOL_ORIENTATION_INLINE: &str = "http://sbols.org/v2#inline";
/// `sbol:reverseComplement`.
pub const SBOL_ORIENTATION_REVERSE_COMPLEMENT: &str = "http://sbols.org/v2#reverseComplement";
/// `sbol:precedes`.
pub const SBOL_RESTRICTION_PRECEDES: &str = "http://sbols.org/v2#precedes";
/// `sbol:sameOrientationAs`.
pub const SBOL_RESTRICTION_SAME_ORIENTATION_AS: &str = "http://sbols.org/v2#sameOrientationAs";
/// `sbol:oppositeOrientationAs`.
pub const SBOL_RESTRICTION_OPPOSITE_ORIENTATION_AS: &str =
    "http://sbols.org/v2#oppositeOrientationAs";
/// `sbol:differentFrom`.
pub const SBOL_RESTRICTION_DIFFERENT_FROM: &str = "http://sbols.org/v2#differentFrom";
/// `sbol:useRemote`.
pub const SBOL_REFINEMENT_USE_REMOTE: &str = "http://sbols.org/v2#useRemote";
/// `sbol:useLocal`.
pub const SBOL_REFINEMENT_USE_LOCAL: &str = "http://sbols.org/v2#useLocal";
/// `sbol:verifyIdentical`.
pub const SBOL_REFINEMENT_VERIFY_IDENTICAL: &str = "http://sbols.org/v2#verifyIdentical";
/// `sbol:merge`.
pub const SBOL_REFINEMENT_MERGE: &str = "http://sbols.org/v2#merge";

// Component types
/// `biopax:DnaRegion`.
pub const BIOPAX_DNA: &str = "http://www.biopax.org/release/biopax-level3.owl#DnaRegion";
/// `biopax:RnaRegion`.
pub const BIOPAX_RNA: &str = "http://www.biopax.org/release/biopax-level3.owl#RnaRegion";
/// `biopax:Protein`.
pub const BIOPAX_PROTEIN: &str = "http://www.biopax.org/release/biopax-level3.owl#Protein";
/// `biopax:SmallMolecule`.
pub const BIOPAX_SMALL_MOLECULE: &str =
    "http://www.biopax.org/release/biopax-level3.owl#SmallMolecule";
/// `biopax:Complex`.
pub const BIOPAX_COMPLEX: &str = "http://www.biopax.org/release/biopax-level3.owl#Complex";

// Sequence encodings
/// IUPAC nucleic acid encoding.
pub const SBOL_ENCODING_IUPAC: &str = "http://www.chem.qmul.ac.uk/iubmb/misc/naseq.html";
/// IUPAC amino acid encoding.
pub const SBOL_ENCODING_IUPAC_PROTEIN: &str = "http://www.chem.qmul.ac.uk/iupac/AminoAcid/";
/// SMILES encoding.
pub const SBOL_ENCODING_SMILES: &str = "http://www.opensmiles.org/opensmiles.html";

// Sequence Ontology roles
/// `SO:0000167` promoter.
pub const SO_PROMOTER: &str = "http://identifiers.org/so/SO:0000167";
/// `SO:0000139` ribosome entry site.
pub const SO_RBS: &str = "http://identifiers.org/so/SO:0000139";
/// `SO:0000316` coding sequence.
pub const SO_CDS: &str = "http://identifiers.org/so/SO:0000316";
/// `SO:0000141` terminator.
pub const SO_TERMINATOR: &str = "http://identifiers.org/so/SO:0000141";
/// `SO:0000704` gene.
pub const SO_GENE: &str = "http://identifiers.org/so/SO:0000704";
/// `SO:0000155` plasmid.
pub const SO_PLASMID: &str = "http://identifiers.org/so/SO:0000155";
/// `SO:0000988` circular.
pub const SO_CIRCULAR: &str = "http://identifiers.org/so/SO:0000988";
/// `SO:0000804` engineered region.
pub const SO_ENGINEERED_REGION: &str = "http://identifiers.org/so/SO:0000804";
/// `SO:0001998` sgRNA.
pub const SO_SGRNA: &str = "http://identifiers.org/so/SO:0001998";

// Systems Biology Ontology interaction types and participant roles
/// `SBO:0000169` inhibition.
pub const SBO_INHIBITION: &str = "http://identifiers.org/biomodels.sbo/SBO:0000169";
/// `SBO:0000170` stimulation.
pub const SBO_STIMULATION: &str = "http://identifiers.org/biomodels.sbo/SBO:0000170";
/// `SBO:0000177` non-covalent binding.
pub const SBO_NONCOVALENT_BINDING: &str = "http://identifiers.org/biomodels.sbo/SBO:0000177";
/// `SBO:0000589` genetic production.
pub const SBO_GENETIC_PRODUCTION: &str = "http://identifiers.org/biomodels.sbo/SBO:0000589";
/// `SBO:0000020` inhibitor.
pub const SBO_INHIBITOR: &str = "http://identifiers.org/biomodels.sbo/SBO:0000020";
/// `SBO:0000642` inhibited.
pub const SBO_INHIBITED: &str = "http://identifiers.org/biomodels.sbo/SBO:0000642";
/// `SBO:0000010` reactant.
pub const SBO_REACTANT: &str = "http://identifiers.org/biomodels.sbo/SBO:0000010";
/// `SBO:0000011` product.
pub const SBO_PRODUCT: &str = "http://identifiers.org/biomodels.sbo/SBO:0000011";
/// `SBO:0000598` promoter.
pub const SBO_PROMOTER: &str = "http://identifiers.org/biomodels.sbo/SBO:0000598";

// Model languages and frameworks
/// EDAM `format_2585` SBML.
pub const EDAM_SBML: &str = "http://identifiers.org/edam/format_2585";
/// SBO `0000062` continuous framework.
pub const SBO_CONTINUOUS: &str = "http://identifiers.org/biomodels.sbo/SBO:0000062";
