//! Protein-side sub-structures: targets, carriers, pathways and the
//! polypeptide description nested inside them.
//!
//! Decoded for completeness of the record model; these do not fan out into
//! relations of their own.

use serde::Deserialize;

use crate::model::drug::{EnzymeList, ExternalIdentifiers, ReferenceList, Sequence};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Targets {
    pub target: Vec<Target>,
}

/// A molecule the drug binds to for its therapeutic effect — most commonly
/// an enzyme, ion channel or receptor.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Target {
    #[serde(rename = "@position")]
    pub position: String,
    pub id: String,
    pub name: String,
    pub organism: String,
    pub actions: Actions,
    pub references: ReferenceList,
    pub known_action: String,
    pub polypeptide: Vec<Polypeptide>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Carriers {
    pub carrier: Vec<Carrier>,
}

/// A secreted protein that binds the drug and moves it toward cell
/// transporters. Carriers and targets can switch roles depending on the
/// drug they bind, so both share the polypeptide shape.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Carrier {
    #[serde(rename = "@position")]
    pub position: String,
    pub id: String,
    pub name: String,
    pub organism: String,
    pub actions: Actions,
    pub references: ReferenceList,
    pub known_action: String,
    pub polypeptide: Vec<Polypeptide>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Actions {
    pub action: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Polypeptide {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@source")]
    pub source: String,
    pub name: String,
    pub general_function: String,
    pub specific_function: String,
    pub gene_name: String,
    pub locus: String,
    pub cellular_location: String,
    pub transmembrane_regions: String,
    pub signal_regions: String,
    pub theoretical_pi: String,
    pub molecular_weight: String,
    pub chromosome_location: String,
    pub organism: TaxonomyRef,
    pub external_identifiers: ExternalIdentifiers,
    pub synonyms: PolypeptideSynonyms,
    pub amino_acid_sequence: Sequence,
    pub gene_sequence: Sequence,
    pub pfams: Pfams,
    pub go_classifiers: GoClassifiers,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TaxonomyRef {
    #[serde(rename = "@ncbi-taxonomy-id")]
    pub ncbi_taxonomy_id: String,
    #[serde(rename = "$text")]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PolypeptideSynonyms {
    pub synonym: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Pfams {
    pub pfam: Vec<Pfam>,
}

/// Name and identifier of a PFAM domain.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Pfam {
    pub identifier: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct GoClassifiers {
    pub go_classifier: Vec<GoClassifier>,
}

/// Gene-ontology classification: function, process or location.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GoClassifier {
    pub category: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Pathways {
    pub pathway: Vec<Pathway>,
}

/// A process (from SMPDB) the molecule takes part in.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Pathway {
    pub smpdb_id: String,
    pub name: String,
    pub category: String,
    pub drugs: PathwayDrugs,
    pub enzymes: EnzymeList,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PathwayDrugs {
    pub drug: Vec<PathwayDrug>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PathwayDrug {
    pub drugbank_id: String,
    pub name: String,
}
