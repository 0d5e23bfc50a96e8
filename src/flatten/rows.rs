//! Output row shapes, one set of fields per relation.
//!
//! Every row carries the owning drug's natural key under `drugbank-id`,
//! with two exceptions: reaction rows are keyed by their own sequence
//! identifier, and ATC level rows are keyed by the parent code string
//! (codes are shared by value across drugs). No surrogate ids anywhere.

use serde::Serialize;

/// Scalar projection of one drug record — the `drugs` node table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct DrugRow {
    pub drugbank_id: String,
    pub record_creation: String,
    pub record_update: String,
    pub drug_type: String,
    pub name: String,
    pub description: String,
    pub cas_number: String,
    pub unii: String,
    pub state: String,
    pub indication: String,
    pub pharmacodynamics: String,
    pub mechanism_of_action: String,
    pub toxicity: String,
    pub metabolism: String,
    pub absorption: String,
    pub half_life: String,
    pub route_of_elimination: String,
    pub volume_of_distribution: String,
    pub clearance: String,
    pub fda_label: String,
    pub msds: String,
    pub synthesis_reference: String,
    pub protein_binding: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ClassificationRow {
    pub drugbank_id: String,
    pub description: String,
    pub direct_parent: String,
    pub kingdom: String,
    pub superclass: String,
    pub class: String,
    pub subclass: String,
}

/// Manufacturer entity, keyed by its own name.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ManufacturerRow {
    pub name: String,
    pub url: String,
}

/// Edge: drug ↔ manufacturer, both sides by natural key.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct DrugManufacturerRow {
    pub drugbank_id: String,
    pub manufacturer_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ProductRow {
    pub name: String,
    pub labeller: String,
    pub ndc_id: String,
    pub ndc_product_code: String,
    pub dpd_id: String,
    pub ema_product_code: String,
    pub ema_product_number: String,
    pub started_marketing_on: String,
    pub ended_marketing_on: String,
    pub dosage_form: String,
    pub strength: String,
    pub route: String,
    pub fda_application_number: String,
    pub generic: bool,
    pub over_the_counter: bool,
    pub approved: bool,
    pub country: String,
    pub source: String,
}

/// Edge: drug ↔ product, the product side keyed by name.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct DrugProductRow {
    pub drugbank_id: String,
    pub name: String,
}

/// Keyed by the reaction's own sequence identifier, not the drug key.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ReactionRow {
    pub sequence: String,
    pub left_id: String,
    pub left_name: String,
    pub right_id: String,
    pub right_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct AdverseReactionRow {
    pub drugbank_id: String,
    pub protein_name: String,
    pub gene_symbol: String,
    pub uniprot_id: String,
    pub allele: String,
    pub adverse_reaction: String,
    pub description: String,
    pub pubmed_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct SnpEffectRow {
    pub drugbank_id: String,
    pub protein_name: String,
    pub gene_symbol: String,
    pub rs_id: String,
    pub uniprot_id: String,
    pub allele: String,
    pub defining_change: String,
    pub description: String,
    pub pubmed_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct GroupRow {
    pub drugbank_id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ArticleRow {
    pub drugbank_id: String,
    pub pubmed_id: String,
    pub citation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct BookRow {
    pub drugbank_id: String,
    pub isbn: String,
    pub citation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct LinkRow {
    pub drugbank_id: String,
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct SynonymRow {
    pub drugbank_id: String,
    pub language: String,
    pub coder: String,
    pub synonym: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct MixtureRow {
    pub drugbank_id: String,
    pub name: String,
    pub ingredients: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct PackagerRow {
    pub drugbank_id: String,
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct PriceRow {
    pub drugbank_id: String,
    pub description: String,
    pub cost: f64,
    pub currency: String,
    pub sale_unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct CategoryRow {
    pub drugbank_id: String,
    pub category: String,
    pub mesh_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct OrganismRow {
    pub drugbank_id: String,
    pub organism: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct AtcCodeRow {
    pub atc_code: String,
    pub drugbank_id: String,
}

/// Keyed by the parent code string — one code is shared across drugs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct AtcLevelRow {
    pub atc_code: String,
    pub atc_level: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct DosageRow {
    pub drugbank_id: String,
    pub form: String,
    pub route: String,
    pub strength: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct PatentRow {
    pub drugbank_id: String,
    pub number: String,
    pub country: String,
    pub approved: String,
    pub expiration: String,
    pub pediatric: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct DrugInteractionRow {
    pub drugbank_id: String,
    pub reagent_id: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct FoodInteractionRow {
    pub drugbank_id: String,
    pub interaction: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct PropertyRow {
    pub drugbank_id: String,
    pub kind: String,
    pub value: String,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ExternalLinkRow {
    pub drugbank_id: String,
    pub resource: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ExternalIdentifierRow {
    pub drugbank_id: String,
    pub resource: String,
    pub identifier: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct AhfsCodeRow {
    pub drugbank_id: String,
    pub ahfs_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct PdbEntryRow {
    pub drugbank_id: String,
    pub pdb_entry: String,
}
