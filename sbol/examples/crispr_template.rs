//! Builds the CRISPR repression template module and prints it as Turtle.
//!
//! Run with: `cargo run --example crispr_template -p sbol`

use sbol::kinds::{
    base, component_definition as cd, interaction, module_definition as md, participation,
};
use sbol::vocab::{BIOPAX_COMPLEX, BIOPAX_PROTEIN, BIOPAX_RNA, SBO};
use sbol::{Config, Document, ObjectKind};

fn main() -> sbol::Result<()> {
    let config = Config::new("http://sbols.org/CRISPR_Example").typed(false);
    let mut doc = Document::with_config(config.clone());

    for (id, kind) in [
        ("cas9_generic", BIOPAX_PROTEIN),
        ("gRNA_generic", BIOPAX_RNA),
        ("cas9_gRNA_complex", BIOPAX_COMPLEX),
    ] {
        doc.add(cd::with_type(&config, id, kind, None)?)?;
    }

    let definitions: Vec<(String, sbol::Uri)> = doc
        .component_definitions()
        .iter()
        .filter_map(|d| Some((d.display_id()?.to_string(), d.identity().clone())))
        .collect();
    let mut template = doc.create(ObjectKind::ModuleDefinition, "CRISPR_Template")?;
    template.set_name("CRISPR-based Repression Template")?;

    let mut participants = Vec::new();
    for (id, definition) in definitions {
        let mut fc = template.owned_mut(&md::FUNCTIONAL_COMPONENTS)?.create(&id)?;
        fc.set(&base::DEFINITION, definition)?;
        participants.push((id, fc.identity().clone()));
    }

    let mut formation = template
        .owned_mut(&md::INTERACTIONS)?
        .create("cas9_complex_formation")?;
    formation.set(&interaction::TYPES, format!("{SBO}0000177"))?;
    for (i, (id, fc)) in participants.iter().enumerate() {
        let role = if i == 2 { "0000011" } else { "0000010" };
        let mut p = formation
            .owned_mut(&interaction::PARTICIPATIONS)?
            .create(&format!("participant_{id}"))?;
        p.set(&participation::ROLES, format!("{SBO}{role}"))?;
        p.set(&participation::PARTICIPANT, fc)?;
    }

    for (name, count) in doc.summary() {
        println!("# {name:<22} {count}");
    }
    println!();
    println!("{}", doc.to_turtle()?);
    Ok(())
}
