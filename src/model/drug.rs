//! The decoded shape of one `<drug>` record.
//!
//! Pure data: every struct derives `Deserialize` with the quick-xml
//! conventions (`@name` for attributes, `$text` for element text) and
//! `Default`, so a missing or empty element decodes to its default value
//! instead of erroring. Absence means "omit from output", never a failure.
//!
//! Repeated child elements always live behind an explicit wrapper struct
//! (`<synonyms><synonym>…`), so the nesting is a compile-time invariant
//! rather than a runtime scan.

use serde::Deserialize;

use crate::model::protein::{Carriers, Pathways, Targets};

/// One compound entity and all its nested sub-structures.
///
/// The natural key is the primary DrugBank identifier (see
/// [`Drug::primary_id`]); it is the sole join key relating this record to
/// every row it produces. A record is decoded in one shot, fanned out into
/// relation rows, and dropped — nothing about it outlives its own fan-out.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Drug {
    /// All `<drugbank-id>` elements; the primary one carries
    /// `primary="true"`.
    pub drugbank_id: Vec<DrugbankId>,
    #[serde(rename = "@type")]
    pub drug_type: String,
    #[serde(rename = "@created")]
    pub created: String,
    #[serde(rename = "@updated")]
    pub updated: String,
    pub name: String,
    pub description: String,
    pub cas_number: String,
    pub unii: String,
    pub state: String,
    pub groups: Groups,
    pub general_references: ReferenceList,
    pub synthesis_reference: String,
    pub indication: String,
    pub pharmacodynamics: String,
    pub mechanism_of_action: String,
    pub toxicity: String,
    pub metabolism: String,
    pub absorption: String,
    pub half_life: String,
    pub protein_binding: String,
    pub route_of_elimination: String,
    pub volume_of_distribution: String,
    pub clearance: String,
    pub classification: Classification,
    pub salts: Salts,
    pub synonyms: Synonyms,
    pub products: Products,
    pub international_brands: InternationalBrands,
    pub mixtures: Mixtures,
    pub packagers: Packagers,
    pub manufacturers: Manufacturers,
    pub prices: Prices,
    pub categories: Categories,
    pub affected_organisms: AffectedOrganisms,
    pub dosages: Dosages,
    pub atc_codes: AtcCodes,
    pub ahfs_codes: AhfsCodes,
    pub pdb_entries: PdbEntries,
    pub fda_label: String,
    pub msds: String,
    pub patents: Patents,
    pub food_interactions: FoodInteractions,
    pub drug_interactions: DrugInteractions,
    pub sequences: Sequences,
    pub experimental_properties: ExperimentalProperties,
    pub external_identifiers: ExternalIdentifiers,
    pub external_links: ExternalLinks,
    pub pathways: Pathways,
    pub reactions: Reactions,
    pub snp_effects: SnpEffects,
    pub snp_adverse_drug_reactions: SnpAdverseDrugReactions,
    pub targets: Targets,
    pub carriers: Carriers,
}

impl Drug {
    /// The record's natural key: the identifier flagged `primary="true"`,
    /// or the first identifier when none is flagged.
    pub fn primary_id(&self) -> &str {
        self.drugbank_id
            .iter()
            .find(|id| id.primary)
            .or_else(|| self.drugbank_id.first())
            .map(|id| id.value.as_str())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DrugbankId {
    #[serde(rename = "@primary")]
    pub primary: bool,
    #[serde(rename = "$text")]
    pub value: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Groups {
    pub group: Vec<String>,
}

/// Publications backing a drug record: papers, textbooks and web links.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReferenceList {
    pub articles: Articles,
    pub textbooks: Textbooks,
    pub links: Links,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Articles {
    pub article: Vec<Article>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Article {
    pub pubmed_id: String,
    pub citation: String,
}

impl Article {
    pub fn is_populated(&self) -> bool {
        !self.pubmed_id.is_empty()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Textbooks {
    pub textbook: Vec<Textbook>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Textbook {
    pub isbn: String,
    pub citation: String,
}

impl Textbook {
    pub fn is_populated(&self) -> bool {
        !self.isbn.is_empty()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Links {
    pub link: Vec<LinkRef>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LinkRef {
    pub title: String,
    pub url: String,
}

impl LinkRef {
    pub fn is_populated(&self) -> bool {
        !self.url.is_empty()
    }
}

/// Chemical taxonomy of the substance. Always emitted, 1:1 with the drug,
/// even when every field is empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Classification {
    pub description: String,
    pub direct_parent: String,
    pub kingdom: String,
    pub superclass: String,
    pub class: String,
    pub subclass: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Salts {
    pub salt: Vec<Salt>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Salt {
    pub drugbank_id: String,
    pub name: String,
    pub unii: String,
    pub cas_number: String,
    pub inchikey: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Synonyms {
    pub synonym: Vec<Synonym>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Synonym {
    #[serde(rename = "@language")]
    pub language: String,
    #[serde(rename = "@coder")]
    pub coder: String,
    #[serde(rename = "$text")]
    pub value: String,
}

impl Synonym {
    pub fn is_populated(&self) -> bool {
        !self.value.is_empty()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Products {
    pub product: Vec<Product>,
}

/// A marketed product containing the drug. Emitted unconditionally: the
/// source feed has no meaningful "empty" product shape.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Product {
    pub name: String,
    pub labeller: String,
    pub ndc_id: String,
    pub ndc_product_code: String,
    pub dpd_id: String,
    pub ema_product_code: String,
    pub ema_ma_number: String,
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

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct InternationalBrands {
    pub international_brand: Vec<Brand>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Brand {
    pub name: String,
    pub company: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Mixtures {
    pub mixture: Vec<Mixture>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Mixture {
    pub name: String,
    pub ingredients: String,
}

impl Mixture {
    pub fn is_populated(&self) -> bool {
        !self.name.is_empty()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Packagers {
    pub packager: Vec<Packager>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Packager {
    pub name: String,
    pub url: String,
}

impl Packager {
    pub fn is_populated(&self) -> bool {
        !self.name.is_empty()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Manufacturers {
    pub manufacturer: Vec<Manufacturer>,
}

/// A manufacturer is a shared lookup entity keyed by its own name, so the
/// name doubles as the join key in `drugs-manufacturers-join`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Manufacturer {
    #[serde(rename = "@url")]
    pub url: String,
    #[serde(rename = "$text")]
    pub name: String,
}

impl Manufacturer {
    pub fn is_populated(&self) -> bool {
        !self.name.is_empty()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Prices {
    pub price: Vec<Price>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Price {
    pub description: String,
    pub cost: Cost,
    pub unit: String,
}

impl Price {
    /// The distinguishing field is numeric: a zero amount marks a price
    /// entry with no usable cost.
    pub fn is_populated(&self) -> bool {
        self.cost.amount != 0.0
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Cost {
    #[serde(rename = "@currency")]
    pub currency: String,
    #[serde(rename = "$text")]
    pub amount: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Categories {
    pub category: Vec<Category>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Category {
    pub category: String,
    pub mesh_id: String,
}

impl Category {
    pub fn is_populated(&self) -> bool {
        !self.category.is_empty()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct AffectedOrganisms {
    pub affected_organism: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Dosages {
    pub dosage: Vec<Dosage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Dosage {
    pub form: String,
    pub route: String,
    pub strength: String,
}

impl Dosage {
    pub fn is_populated(&self) -> bool {
        !self.form.is_empty()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct AtcCodes {
    pub atc_code: Vec<AtcCode>,
}

/// WHO ATC classification entry: the code itself plus its named levels.
///
/// Levels are owned by the code, not the drug — one code is shared, by
/// value, across records — so level rows are keyed by the code string.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AtcCode {
    #[serde(rename = "@code")]
    pub code: String,
    #[serde(rename = "level")]
    pub levels: Vec<AtcLevel>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AtcLevel {
    #[serde(rename = "@code")]
    pub code: String,
    #[serde(rename = "$text")]
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct AhfsCodes {
    pub ahfs_code: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PdbEntries {
    pub pdb_entry: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Patents {
    pub patent: Vec<Patent>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Patent {
    pub number: String,
    pub country: String,
    pub approved: String,
    pub expires: String,
    pub pediatric_extension: bool,
}

impl Patent {
    pub fn is_populated(&self) -> bool {
        !self.number.is_empty()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct FoodInteractions {
    pub food_interaction: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct DrugInteractions {
    pub drug_interaction: Vec<DrugInteraction>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct DrugInteraction {
    pub drugbank_id: String,
    pub name: String,
    pub description: String,
}

impl DrugInteraction {
    pub fn is_populated(&self) -> bool {
        !self.drugbank_id.is_empty()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Sequences {
    pub sequence: Vec<Sequence>,
}

/// A biological sequence and the format it is expressed in. Shared by the
/// drug-level sequence list and the polypeptide amino-acid/gene sequences.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Sequence {
    #[serde(rename = "@format")]
    pub format: String,
    #[serde(rename = "$text")]
    pub sequence: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ExperimentalProperties {
    pub property: Vec<Property>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Property {
    pub kind: String,
    pub value: String,
    pub source: String,
}

impl Property {
    pub fn is_populated(&self) -> bool {
        !self.value.is_empty()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ExternalIdentifiers {
    pub external_identifier: Vec<ExternalIdentifier>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ExternalIdentifier {
    pub resource: String,
    pub identifier: String,
}

impl ExternalIdentifier {
    pub fn is_populated(&self) -> bool {
        !self.identifier.is_empty()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ExternalLinks {
    pub external_link: Vec<ExternalLink>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ExternalLink {
    pub resource: String,
    pub url: String,
}

impl ExternalLink {
    pub fn is_populated(&self) -> bool {
        !self.url.is_empty()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Reactions {
    pub reaction: Vec<Reaction>,
}

/// A transformation the compound undergoes. Keyed by its sequence
/// identifier, which is also the per-record dedup key.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Reaction {
    pub sequence: String,
    pub left_element: ReactionElement,
    pub right_element: ReactionElement,
    pub enzymes: EnzymeList,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ReactionElement {
    pub drugbank_id: String,
    pub name: String,
}

/// UNIPROT identifiers of the enzymes involved in a reaction or pathway.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct EnzymeList {
    pub uniprot_id: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SnpEffects {
    pub effect: Vec<SnpEffect>,
}

/// A protein-level effect tied to a single-nucleotide polymorphism.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SnpEffect {
    pub protein_name: String,
    pub gene_symbol: String,
    pub rs_id: String,
    pub uniprot_id: String,
    pub allele: String,
    pub defining_change: String,
    pub description: String,
    pub pubmed_id: String,
}

impl SnpEffect {
    pub fn is_populated(&self) -> bool {
        !self.uniprot_id.is_empty()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SnpAdverseDrugReactions {
    pub reaction: Vec<AdverseReaction>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct AdverseReaction {
    pub protein_name: String,
    pub gene_symbol: String,
    pub uniprot_id: String,
    pub allele: String,
    pub adverse_reaction: String,
    pub description: String,
    pub pubmed_id: String,
}

impl AdverseReaction {
    pub fn is_populated(&self) -> bool {
        !self.uniprot_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_id_prefers_flagged_identifier() {
        let xml = r#"<drug type="small molecule">
            <drugbank-id>DB09999</drugbank-id>
            <drugbank-id primary="true">DB00001</drugbank-id>
            <name>Lepirudin</name>
        </drug>"#;
        let drug: Drug = quick_xml::de::from_str(xml).unwrap();
        assert_eq!(drug.primary_id(), "DB00001");
        assert_eq!(drug.name, "Lepirudin");
        assert_eq!(drug.drug_type, "small molecule");
    }

    #[test]
    fn primary_id_falls_back_to_first() {
        let xml = "<drug><drugbank-id>DB00002</drugbank-id></drug>";
        let drug: Drug = quick_xml::de::from_str(xml).unwrap();
        assert_eq!(drug.primary_id(), "DB00002");
    }

    #[test]
    fn atc_code_keeps_its_levels() {
        let xml = r#"<atc-code code="B01AE02">
            <level code="B01AE">Direct thrombin inhibitors</level>
            <level code="B01A">Antithrombotic agents</level>
        </atc-code>"#;
        let code: AtcCode = quick_xml::de::from_str(xml).unwrap();
        assert_eq!(code.code, "B01AE02");
        assert_eq!(code.levels.len(), 2);
        assert_eq!(code.levels[0].code, "B01AE");
        assert_eq!(code.levels[0].description, "Direct thrombin inhibitors");
    }

    #[test]
    fn price_amount_drives_the_emptiness_test() {
        let xml = r#"<price>
            <description>Box of ten</description>
            <cost currency="USD">12.5</cost>
            <unit>box</unit>
        </price>"#;
        let price: Price = quick_xml::de::from_str(xml).unwrap();
        assert!(price.is_populated());
        assert_eq!(price.cost.amount, 12.5);
        assert_eq!(price.cost.currency, "USD");

        let empty: Price =
            quick_xml::de::from_str("<price><description>n/a</description></price>").unwrap();
        assert!(!empty.is_populated());
    }

    #[test]
    fn manufacturer_name_comes_from_element_text() {
        let xml = r#"<manufacturer url="http://acme.example">Acme Pharma</manufacturer>"#;
        let m: Manufacturer = quick_xml::de::from_str(xml).unwrap();
        assert_eq!(m.name, "Acme Pharma");
        assert_eq!(m.url, "http://acme.example");
        assert!(m.is_populated());
    }

    #[test]
    fn missing_sub_structures_decode_to_defaults() {
        let xml = "<drug><drugbank-id>DB00003</drugbank-id><name>Test</name></drug>";
        let drug: Drug = quick_xml::de::from_str(xml).unwrap();
        assert!(drug.manufacturers.manufacturer.is_empty());
        assert!(drug.groups.group.is_empty());
        assert_eq!(drug.classification.kingdom, "");
    }
}
