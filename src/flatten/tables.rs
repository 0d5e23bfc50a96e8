//! Per-relation row accumulator.
//!
//! One explicit `Vec` per relation — never process-wide state. A batch is
//! produced per record by the fan-out engine and merged, in document
//! order, into the run-scoped batch owned by the sink.

use crate::flatten::rows::*;

/// Relation file stems in write order. Entity/node tables come before the
/// `-join` edge tables that foreign-key into them; the upload collaborator
/// relies on that naming convention for load ordering.
pub const RELATIONS: &[&str] = &[
    "drugs",
    "classifications",
    "manufacturers",
    "drugs-manufacturers-join",
    "products",
    "drugs-products-join",
    "reactions",
    "adverse-reactions",
    "snp-effects",
    "groups",
    "articles",
    "books",
    "links",
    "synonyms",
    "mixtures",
    "packagers",
    "prices",
    "categories",
    "organisms",
    "atc_codes",
    "atc_levels",
    "dosages",
    "patents",
    "drug_interactions",
    "food_interactions",
    "experimental_properties",
    "external_links",
    "external_identifiers",
    "ahfs_codes",
    "pdb_entries",
];

/// Rows produced for every relation, in emission order.
#[derive(Debug, Default)]
pub struct TableBatch {
    pub drugs: Vec<DrugRow>,
    pub classifications: Vec<ClassificationRow>,
    pub manufacturers: Vec<ManufacturerRow>,
    pub drug_manufacturers: Vec<DrugManufacturerRow>,
    pub products: Vec<ProductRow>,
    pub drug_products: Vec<DrugProductRow>,
    pub reactions: Vec<ReactionRow>,
    pub adverse_reactions: Vec<AdverseReactionRow>,
    pub snp_effects: Vec<SnpEffectRow>,
    pub groups: Vec<GroupRow>,
    pub articles: Vec<ArticleRow>,
    pub books: Vec<BookRow>,
    pub links: Vec<LinkRow>,
    pub synonyms: Vec<SynonymRow>,
    pub mixtures: Vec<MixtureRow>,
    pub packagers: Vec<PackagerRow>,
    pub prices: Vec<PriceRow>,
    pub categories: Vec<CategoryRow>,
    pub organisms: Vec<OrganismRow>,
    pub atc_codes: Vec<AtcCodeRow>,
    pub atc_levels: Vec<AtcLevelRow>,
    pub dosages: Vec<DosageRow>,
    pub patents: Vec<PatentRow>,
    pub drug_interactions: Vec<DrugInteractionRow>,
    pub food_interactions: Vec<FoodInteractionRow>,
    pub experimental_properties: Vec<PropertyRow>,
    pub external_links: Vec<ExternalLinkRow>,
    pub external_identifiers: Vec<ExternalIdentifierRow>,
    pub ahfs_codes: Vec<AhfsCodeRow>,
    pub pdb_entries: Vec<PdbEntryRow>,
}

impl TableBatch {
    /// Append another batch, preserving arrival order per relation.
    pub fn merge(&mut self, other: TableBatch) {
        self.drugs.extend(other.drugs);
        self.classifications.extend(other.classifications);
        self.manufacturers.extend(other.manufacturers);
        self.drug_manufacturers.extend(other.drug_manufacturers);
        self.products.extend(other.products);
        self.drug_products.extend(other.drug_products);
        self.reactions.extend(other.reactions);
        self.adverse_reactions.extend(other.adverse_reactions);
        self.snp_effects.extend(other.snp_effects);
        self.groups.extend(other.groups);
        self.articles.extend(other.articles);
        self.books.extend(other.books);
        self.links.extend(other.links);
        self.synonyms.extend(other.synonyms);
        self.mixtures.extend(other.mixtures);
        self.packagers.extend(other.packagers);
        self.prices.extend(other.prices);
        self.categories.extend(other.categories);
        self.organisms.extend(other.organisms);
        self.atc_codes.extend(other.atc_codes);
        self.atc_levels.extend(other.atc_levels);
        self.dosages.extend(other.dosages);
        self.patents.extend(other.patents);
        self.drug_interactions.extend(other.drug_interactions);
        self.food_interactions.extend(other.food_interactions);
        self.experimental_properties
            .extend(other.experimental_properties);
        self.external_links.extend(other.external_links);
        self.external_identifiers.extend(other.external_identifiers);
        self.ahfs_codes.extend(other.ahfs_codes);
        self.pdb_entries.extend(other.pdb_entries);
    }

    /// Total rows across every relation.
    pub fn row_count(&self) -> usize {
        self.drugs.len()
            + self.classifications.len()
            + self.manufacturers.len()
            + self.drug_manufacturers.len()
            + self.products.len()
            + self.drug_products.len()
            + self.reactions.len()
            + self.adverse_reactions.len()
            + self.snp_effects.len()
            + self.groups.len()
            + self.articles.len()
            + self.books.len()
            + self.links.len()
            + self.synonyms.len()
            + self.mixtures.len()
            + self.packagers.len()
            + self.prices.len()
            + self.categories.len()
            + self.organisms.len()
            + self.atc_codes.len()
            + self.atc_levels.len()
            + self.dosages.len()
            + self.patents.len()
            + self.drug_interactions.len()
            + self.food_interactions.len()
            + self.experimental_properties.len()
            + self.external_links.len()
            + self.external_identifiers.len()
            + self.ahfs_codes.len()
            + self.pdb_entries.len()
    }
}
