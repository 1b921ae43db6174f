//! Loading and writing whole SBOL documents.
//!
//! The fixtures are the CRISPR repression example (25 component definitions,
//! two module definitions, four sequences) and an excerpt of the Cello part
//! library carrying PROV annotations.

use std::collections::HashSet;
use std::path::PathBuf;

use sbol::kinds::{
    base, component_definition as cd, interaction, location, maps_to, module,
    module_definition as md, sequence, sequence_annotation as sa,
};
use sbol::vocab::{SBOL_ACCESS_PUBLIC, SBOL_REFINEMENT_USE_REMOTE, SO_ENGINEERED_REGION};
use sbol::{Config, Document, ErrorCode, ObjectKind, RdfFormat, Triple};

const CRISPR: &str = "http://sbols.org/CRISPR_Example";

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn crispr() -> Document {
    let mut doc = Document::with_config(Config::new(CRISPR).typed(false));
    doc.read(fixture("crispr_example.xml")).unwrap();
    doc
}

fn triple_set(doc: &Document) -> HashSet<Triple> {
    doc.triples().into_iter().collect()
}

#[test]
fn crispr_collections_have_expected_sizes() {
    let doc = crispr();
    assert_eq!(doc.component_definitions().len(), 25);
    assert_eq!(doc.module_definitions().len(), 2);
    assert_eq!(doc.sequences().len(), 4);
    assert!(doc.models().is_empty());
    assert!(doc.collections().is_empty());
    assert_eq!(doc.len(), 31);
    assert!(doc.unrecognized().is_empty());
}

#[test]
fn crispr_display_ids() {
    let doc = crispr();
    let mut ids = doc.component_definitions().display_ids();
    ids.sort_unstable();
    let expected = [
        "CRP_b",
        "CRa_U6",
        "EYFP",
        "EYFP_cds",
        "EYFP_gene",
        "Gal4VP16",
        "Gal4VP16_cds",
        "Gal4VP16_gene",
        "cas9_gRNA_complex",
        "cas9_generic",
        "cas9m_BFP",
        "cas9m_BFP_cds",
        "cas9m_BFP_gRNA_b",
        "cas9m_BFP_gene",
        "gRNA_b",
        "gRNA_b_gene",
        "gRNA_b_nc",
        "gRNA_b_terminator",
        "gRNA_generic",
        "mKate",
        "mKate_cds",
        "mKate_gene",
        "pConst",
        "target",
        "target_gene",
    ];
    assert_eq!(ids, expected);
}

#[test]
fn loaded_objects_are_compliant() {
    let doc = crispr();
    for object in doc.iter() {
        assert!(object.is_compliant(), "{} should be compliant", object.identity());
        let pid = object.persistent_identity().unwrap();
        assert_eq!(
            object.identity().as_str(),
            format!("{pid}/{}", object.version().unwrap())
        );
    }
    let gene = doc.get("gRNA_b_gene").unwrap();
    let promoter = gene.owned(&cd::COMPONENTS).unwrap().get("CRa_U6").unwrap();
    assert!(promoter.is_compliant());
}

#[test]
fn nested_components_keep_their_identity() {
    let doc = crispr();
    let gene = doc
        .get(&format!("{CRISPR}/gRNA_b_gene/1.0.0"))
        .unwrap();
    let components = gene.owned(&cd::COMPONENTS).unwrap();
    assert_eq!(components.len(), 3);
    assert!(components.find(&format!("{CRISPR}/gRNA_b_gene/CRa_U6/1.0.0")));
    let promoter = components.get("CRa_U6").unwrap();
    assert_eq!(
        promoter.uri(&base::DEFINITION).unwrap().as_str(),
        format!("{CRISPR}/CRa_U6/1.0.0")
    );
    assert_eq!(promoter.uri(&base::ACCESS).unwrap(), SBOL_ACCESS_PUBLIC);

    assert_eq!(gene.owned(&cd::SEQUENCE_ANNOTATIONS).unwrap().len(), 3);
    assert_eq!(gene.owned(&cd::SEQUENCE_CONSTRAINTS).unwrap().len(), 2);
}

#[test]
fn engineered_region_has_two_parts_and_one_role() {
    let doc = crispr();
    let gene = doc.get("EYFP_gene").unwrap();
    assert_eq!(gene.owned(&cd::COMPONENTS).unwrap().len(), 2);
    assert_eq!(gene.texts(&cd::ROLES), [SO_ENGINEERED_REGION]);
}

#[test]
fn promoter_without_provenance() {
    let doc = crispr();
    let promoter = doc.get(&format!("{CRISPR}/CRP_b/1.0.0")).unwrap();
    assert!(promoter.was_derived_from().is_empty());
    assert!(promoter.was_generated_by().is_empty());
    assert_eq!(promoter.name(), Some("CRP_b promoter"));
    assert_eq!(
        promoter.uris(&cd::SEQUENCES),
        [&sbol::Uri::new(format!("{CRISPR}/CRP_b_seq/1.0.0"))]
    );
}

#[test]
fn ranges_load_as_integers() {
    let doc = crispr();
    let gene = doc.get("gRNA_b_gene").unwrap();
    let annotation = gene
        .owned(&cd::SEQUENCE_ANNOTATIONS)
        .unwrap()
        .get("CRa_U6_annotation")
        .unwrap();
    assert_eq!(
        annotation.uri(&sa::COMPONENT).unwrap().as_str(),
        format!("{CRISPR}/gRNA_b_gene/CRa_U6/1.0.0")
    );
    let range = annotation
        .owned(&sa::LOCATIONS)
        .unwrap()
        .get_typed(ObjectKind::Range, None)
        .unwrap();
    assert_eq!(range.integer(&location::START), Some(1));
    assert_eq!(range.integer(&location::END), Some(264));
}

#[test]
fn module_definitions_own_their_parts() {
    let doc = crispr();
    let template = doc.get("CRISPR_Template").unwrap();
    assert_eq!(template.kind(), ObjectKind::ModuleDefinition);
    assert_eq!(template.owned(&md::FUNCTIONAL_COMPONENTS).unwrap().len(), 5);
    let interactions = template.owned(&md::INTERACTIONS).unwrap();
    assert_eq!(interactions.len(), 3);
    assert!(template.get(&md::ROLES).is_empty());
    let formation = interactions.get("cas9_complex_formation").unwrap();
    assert_eq!(formation.owned(&interaction::PARTICIPATIONS).unwrap().len(), 3);

    let circuit = doc.get("CRPb_characterization_Circuit").unwrap();
    let modules = circuit.owned(&md::MODULES).unwrap();
    let template_module = modules.get(0usize).unwrap();
    assert_eq!(
        template_module.uri(&module::DEFINITION).unwrap(),
        template.identity()
    );
    let maps = template_module.owned(&module::MAPS_TOS).unwrap();
    assert_eq!(maps.len(), 5);
    for map in maps {
        assert_eq!(map.uri(&maps_to::REFINEMENT).unwrap(), SBOL_REFINEMENT_USE_REMOTE);
    }
}

#[test]
fn sequences_keep_their_elements() {
    let doc = crispr();
    let seq = doc.get("CRa_U6_seq").unwrap();
    assert_eq!(seq.kind(), ObjectKind::Sequence);
    assert!(seq.text(&sequence::ELEMENTS).unwrap().starts_with("ggtttaccgagctc"));
    assert_eq!(seq.uri(&sequence::ENCODING).unwrap(), sbol::vocab::SBOL_ENCODING_IUPAC);
}

#[test]
fn provenance_from_cello_parts() {
    let mut doc = Document::new();
    doc.read(fixture("parts.xml")).unwrap();
    let amer = doc
        .component_definitions()
        .get("http://examples.org/ComponentDefinition/AmeR/1")
        .unwrap();
    assert_eq!(amer.name(), Some("AmeR"));
    assert_eq!(
        amer.was_derived_from(),
        [&sbol::Uri::from(
            "https://synbiohub.programmingbiology.org/public/Cello_Parts/AmeR/1"
        )]
    );
    assert_eq!(
        amer.was_generated_by(),
        [&sbol::Uri::from("http://examples.org/Activity/CelloUCF2sbol_Activity/1")]
    );
}

#[test]
fn foreign_resources_are_preserved() {
    let mut doc = Document::new();
    doc.read(fixture("parts.xml")).unwrap();
    assert_eq!(doc.component_definitions().len(), 2);
    assert_eq!(doc.sequences().len(), 2);
    let activity = "http://examples.org/Activity/CelloUCF2sbol_Activity/1";
    assert_eq!(doc.unrecognized().len(), 3);
    assert!(doc.unrecognized().iter().all(|t| t.subject == activity));
    assert!(doc.to_ntriples().unwrap().contains("<http://www.w3.org/ns/prov#endedAtTime>"));
}

#[test]
fn turtle_round_trip() {
    let doc = crispr();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("crispr.ttl");
    doc.write(&path).unwrap();

    let reloaded = Document::open(&path).unwrap();
    assert_eq!(reloaded.len(), doc.len());
    assert_eq!(triple_set(&reloaded), triple_set(&doc));
}

#[test]
fn ntriples_round_trip() {
    let mut doc = Document::new();
    doc.read(fixture("parts.xml")).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("parts.nt");
    doc.write(&path).unwrap();

    let mut reloaded = Document::new();
    reloaded.read(&path).unwrap();
    assert_eq!(triple_set(&reloaded), triple_set(&doc));
    assert_eq!(reloaded.unrecognized().len(), 3);
}

#[test]
fn rdf_xml_output_is_refused() {
    let doc = crispr();
    let dir = tempfile::tempdir().unwrap();
    let err = doc.write(dir.path().join("out.xml")).unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidArgument);
}

#[test]
fn missing_file_leaves_document_untouched() {
    let mut doc = crispr();
    let err = doc.read(fixture("no_such_file.xml")).unwrap_err();
    assert_eq!(err.code(), ErrorCode::FileNotFound);
    assert_eq!(doc.len(), 31);
}

#[test]
fn append_merges_and_rejects_duplicates() {
    let mut doc = crispr();
    doc.append(fixture("parts.xml")).unwrap();
    assert_eq!(doc.component_definitions().len(), 27);
    assert!(doc.find("AmeR"));

    let err = doc.append(fixture("parts.xml")).unwrap_err();
    assert_eq!(err.code(), ErrorCode::UriNotUnique);
    assert_eq!(doc.component_definitions().len(), 27);
}

#[test]
fn removing_a_definition_drops_its_children() {
    let mut doc = crispr();
    let removed = doc.remove("gRNA_b_gene").unwrap();
    assert_eq!(removed.owned(&cd::COMPONENTS).unwrap().len(), 3);
    assert_eq!(doc.get("gRNA_b_gene").unwrap_err().code(), ErrorCode::NotFound);
    let subjects: HashSet<String> = doc
        .triples()
        .into_iter()
        .map(|t| t.subject.into_string())
        .collect();
    assert!(!subjects.contains(&format!("{CRISPR}/gRNA_b_gene/CRa_U6/1.0.0")));
}

#[test]
fn turtle_text_can_be_read_back() {
    let doc = crispr();
    let mut copy = Document::with_config(doc.config().clone());
    copy.read_str(&doc.to_turtle().unwrap(), RdfFormat::Turtle).unwrap();
    assert_eq!(copy.summary(), doc.summary());
}
