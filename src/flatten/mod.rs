//! Normalizer: fan one decoded record out into relation rows.
//!
//! Pure function, no I/O. For each relation: locate the sub-structure,
//! iterate its elements, skip the ones whose distinguishing field is
//! empty (the `is_populated` predicates beside the schema), project the
//! fields plus the owning drug's natural key, and append in source order.
//! Reaction rows are additionally deduplicated per record by their
//! sequence key — dedup never spans records.

pub mod rows;
pub mod tables;

use std::collections::HashSet;

use crate::model::Drug;

pub use rows::*;
pub use tables::{TableBatch, RELATIONS};

/// Decompose one record into rows for every relation it touches.
pub fn flatten_drug(drug: &Drug) -> TableBatch {
    let mut out = TableBatch::default();
    let id = drug.primary_id().to_string();

    out.drugs.push(DrugRow {
        drugbank_id: id.clone(),
        record_creation: drug.created.clone(),
        record_update: drug.updated.clone(),
        drug_type: drug.drug_type.clone(),
        name: drug.name.clone(),
        description: drug.description.clone(),
        cas_number: drug.cas_number.clone(),
        unii: drug.unii.clone(),
        state: drug.state.clone(),
        indication: drug.indication.clone(),
        pharmacodynamics: drug.pharmacodynamics.clone(),
        mechanism_of_action: drug.mechanism_of_action.clone(),
        toxicity: drug.toxicity.clone(),
        metabolism: drug.metabolism.clone(),
        absorption: drug.absorption.clone(),
        half_life: drug.half_life.clone(),
        route_of_elimination: drug.route_of_elimination.clone(),
        volume_of_distribution: drug.volume_of_distribution.clone(),
        clearance: drug.clearance.clone(),
        fda_label: drug.fda_label.clone(),
        msds: drug.msds.clone(),
        synthesis_reference: drug.synthesis_reference.clone(),
        protein_binding: drug.protein_binding.clone(),
    });

    // Classification joins 1:1 to the drug and is emitted even when every
    // field is empty.
    out.classifications.push(ClassificationRow {
        drugbank_id: id.clone(),
        description: drug.classification.description.clone(),
        direct_parent: drug.classification.direct_parent.clone(),
        kingdom: drug.classification.kingdom.clone(),
        superclass: drug.classification.superclass.clone(),
        class: drug.classification.class.clone(),
        subclass: drug.classification.subclass.clone(),
    });

    // Manufacturers are shared lookup entities keyed by name; the join row
    // carries both natural keys.
    for m in &drug.manufacturers.manufacturer {
        if !m.is_populated() {
            continue;
        }
        out.manufacturers.push(ManufacturerRow {
            name: m.name.clone(),
            url: m.url.clone(),
        });
        out.drug_manufacturers.push(DrugManufacturerRow {
            drugbank_id: id.clone(),
            manufacturer_id: m.name.clone(),
        });
    }

    for p in &drug.products.product {
        out.products.push(ProductRow {
            name: p.name.clone(),
            labeller: p.labeller.clone(),
            ndc_id: p.ndc_id.clone(),
            ndc_product_code: p.ndc_product_code.clone(),
            dpd_id: p.dpd_id.clone(),
            ema_product_code: p.ema_product_code.clone(),
            ema_product_number: p.ema_ma_number.clone(),
            started_marketing_on: p.started_marketing_on.clone(),
            ended_marketing_on: p.ended_marketing_on.clone(),
            dosage_form: p.dosage_form.clone(),
            strength: p.strength.clone(),
            route: p.route.clone(),
            fda_application_number: p.fda_application_number.clone(),
            generic: p.generic,
            over_the_counter: p.over_the_counter,
            approved: p.approved,
            country: p.country.clone(),
            source: p.source.clone(),
        });
        out.drug_products.push(DrugProductRow {
            drugbank_id: id.clone(),
            name: p.name.clone(),
        });
    }

    // Reactions are keyed by sequence; a sequence seen twice in the same
    // record collapses to one row.
    let mut seen_reactions: HashSet<&str> = HashSet::new();
    for r in &drug.reactions.reaction {
        if !seen_reactions.insert(r.sequence.as_str()) {
            continue;
        }
        out.reactions.push(ReactionRow {
            sequence: r.sequence.clone(),
            left_id: r.left_element.drugbank_id.clone(),
            left_name: r.left_element.name.clone(),
            right_id: r.right_element.drugbank_id.clone(),
            right_name: r.right_element.name.clone(),
        });
    }

    for r in &drug.snp_adverse_drug_reactions.reaction {
        if !r.is_populated() {
            continue;
        }
        out.adverse_reactions.push(AdverseReactionRow {
            drugbank_id: id.clone(),
            protein_name: r.protein_name.clone(),
            gene_symbol: r.gene_symbol.clone(),
            uniprot_id: r.uniprot_id.clone(),
            allele: r.allele.clone(),
            adverse_reaction: r.adverse_reaction.clone(),
            description: r.description.clone(),
            pubmed_id: r.pubmed_id.clone(),
        });
    }

    for e in &drug.snp_effects.effect {
        if !e.is_populated() {
            continue;
        }
        out.snp_effects.push(SnpEffectRow {
            drugbank_id: id.clone(),
            protein_name: e.protein_name.clone(),
            gene_symbol: e.gene_symbol.clone(),
            rs_id: e.rs_id.clone(),
            uniprot_id: e.uniprot_id.clone(),
            allele: e.allele.clone(),
            defining_change: e.defining_change.clone(),
            description: e.description.clone(),
            pubmed_id: e.pubmed_id.clone(),
        });
    }

    for g in &drug.groups.group {
        if g.is_empty() {
            continue;
        }
        out.groups.push(GroupRow {
            drugbank_id: id.clone(),
            name: g.clone(),
        });
    }

    for a in &drug.general_references.articles.article {
        if !a.is_populated() {
            continue;
        }
        out.articles.push(ArticleRow {
            drugbank_id: id.clone(),
            pubmed_id: a.pubmed_id.clone(),
            citation: a.citation.clone(),
        });
    }

    for b in &drug.general_references.textbooks.textbook {
        if !b.is_populated() {
            continue;
        }
        out.books.push(BookRow {
            drugbank_id: id.clone(),
            isbn: b.isbn.clone(),
            citation: b.citation.clone(),
        });
    }

    for l in &drug.general_references.links.link {
        if !l.is_populated() {
            continue;
        }
        out.links.push(LinkRow {
            drugbank_id: id.clone(),
            title: l.title.clone(),
            url: l.url.clone(),
        });
    }

    for s in &drug.synonyms.synonym {
        if !s.is_populated() {
            continue;
        }
        out.synonyms.push(SynonymRow {
            drugbank_id: id.clone(),
            language: s.language.clone(),
            coder: s.coder.clone(),
            synonym: s.value.clone(),
        });
    }

    for m in &drug.mixtures.mixture {
        if !m.is_populated() {
            continue;
        }
        out.mixtures.push(MixtureRow {
            drugbank_id: id.clone(),
            name: m.name.clone(),
            ingredients: m.ingredients.clone(),
        });
    }

    for p in &drug.packagers.packager {
        if !p.is_populated() {
            continue;
        }
        out.packagers.push(PackagerRow {
            drugbank_id: id.clone(),
            name: p.name.clone(),
            url: p.url.clone(),
        });
    }

    // The price filter is the one numeric emptiness test: a zero amount
    // means "no usable cost recorded".
    for p in &drug.prices.price {
        if !p.is_populated() {
            continue;
        }
        out.prices.push(PriceRow {
            drugbank_id: id.clone(),
            description: p.description.clone(),
            cost: p.cost.amount,
            currency: p.cost.currency.clone(),
            sale_unit: p.unit.clone(),
        });
    }

    for c in &drug.categories.category {
        if !c.is_populated() {
            continue;
        }
        out.categories.push(CategoryRow {
            drugbank_id: id.clone(),
            category: c.category.clone(),
            mesh_id: c.mesh_id.clone(),
        });
    }

    for o in &drug.affected_organisms.affected_organism {
        if o.is_empty() {
            continue;
        }
        out.organisms.push(OrganismRow {
            drugbank_id: id.clone(),
            organism: o.clone(),
        });
    }

    // Two-level fan-out: one row per code, plus one row per nested level
    // keyed by the code string rather than the drug.
    for code in &drug.atc_codes.atc_code {
        out.atc_codes.push(AtcCodeRow {
            atc_code: code.code.clone(),
            drugbank_id: id.clone(),
        });
        for level in &code.levels {
            out.atc_levels.push(AtcLevelRow {
                atc_code: code.code.clone(),
                atc_level: level.code.clone(),
                description: level.description.clone(),
            });
        }
    }

    for d in &drug.dosages.dosage {
        if !d.is_populated() {
            continue;
        }
        out.dosages.push(DosageRow {
            drugbank_id: id.clone(),
            form: d.form.clone(),
            route: d.route.clone(),
            strength: d.strength.clone(),
        });
    }

    for p in &drug.patents.patent {
        if !p.is_populated() {
            continue;
        }
        out.patents.push(PatentRow {
            drugbank_id: id.clone(),
            number: p.number.clone(),
            country: p.country.clone(),
            approved: p.approved.clone(),
            expiration: p.expires.clone(),
            pediatric: p.pediatric_extension,
        });
    }

    for i in &drug.drug_interactions.drug_interaction {
        if !i.is_populated() {
            continue;
        }
        out.drug_interactions.push(DrugInteractionRow {
            drugbank_id: id.clone(),
            reagent_id: i.drugbank_id.clone(),
            name: i.name.clone(),
            description: i.description.clone(),
        });
    }

    for f in &drug.food_interactions.food_interaction {
        if f.is_empty() {
            continue;
        }
        out.food_interactions.push(FoodInteractionRow {
            drugbank_id: id.clone(),
            interaction: f.clone(),
        });
    }

    for p in &drug.experimental_properties.property {
        if !p.is_populated() {
            continue;
        }
        out.experimental_properties.push(PropertyRow {
            drugbank_id: id.clone(),
            kind: p.kind.clone(),
            value: p.value.clone(),
            source: p.source.clone(),
        });
    }

    for l in &drug.external_links.external_link {
        if !l.is_populated() {
            continue;
        }
        out.external_links.push(ExternalLinkRow {
            drugbank_id: id.clone(),
            resource: l.resource.clone(),
            url: l.url.clone(),
        });
    }

    for e in &drug.external_identifiers.external_identifier {
        if !e.is_populated() {
            continue;
        }
        out.external_identifiers.push(ExternalIdentifierRow {
            drugbank_id: id.clone(),
            resource: e.resource.clone(),
            identifier: e.identifier.clone(),
        });
    }

    for c in &drug.ahfs_codes.ahfs_code {
        if c.is_empty() {
            continue;
        }
        out.ahfs_codes.push(AhfsCodeRow {
            drugbank_id: id.clone(),
            ahfs_code: c.clone(),
        });
    }

    for p in &drug.pdb_entries.pdb_entry {
        if p.is_empty() {
            continue;
        }
        out.pdb_entries.push(PdbEntryRow {
            drugbank_id: id.clone(),
            pdb_entry: p.clone(),
        });
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::drug::*;

    fn drug_with_id(id: &str) -> Drug {
        Drug {
            drugbank_id: vec![DrugbankId {
                primary: true,
                value: id.to_string(),
            }],
            name: "Testdrug".to_string(),
            ..Drug::default()
        }
    }

    #[test]
    fn every_record_gets_one_drug_and_one_classification_row() {
        let drug = drug_with_id("DB00001");
        let batch = flatten_drug(&drug);
        assert_eq!(batch.drugs.len(), 1);
        assert_eq!(batch.drugs[0].drugbank_id, "DB00001");
        // Unconditional even though the classification is entirely empty.
        assert_eq!(batch.classifications.len(), 1);
        assert_eq!(batch.classifications[0].drugbank_id, "DB00001");
    }

    #[test]
    fn empty_name_manufacturer_is_dropped_from_entity_and_join() {
        let mut drug = drug_with_id("DB00001");
        drug.manufacturers.manufacturer = vec![
            Manufacturer {
                name: "Acme".to_string(),
                url: String::new(),
            },
            Manufacturer {
                name: String::new(),
                url: "http://nameless.example".to_string(),
            },
        ];
        let batch = flatten_drug(&drug);
        assert_eq!(batch.manufacturers.len(), 1);
        assert_eq!(batch.manufacturers[0].name, "Acme");
        assert_eq!(batch.drug_manufacturers.len(), 1);
        assert_eq!(batch.drug_manufacturers[0].drugbank_id, "DB00001");
        assert_eq!(batch.drug_manufacturers[0].manufacturer_id, "Acme");
    }

    #[test]
    fn zero_amount_price_is_dropped() {
        let mut drug = drug_with_id("DB00001");
        drug.prices.price = vec![
            Price {
                description: "free sample".to_string(),
                cost: Cost {
                    currency: "USD".to_string(),
                    amount: 0.0,
                },
                unit: "vial".to_string(),
            },
            Price {
                description: "retail".to_string(),
                cost: Cost {
                    currency: "USD".to_string(),
                    amount: 12.5,
                },
                unit: "vial".to_string(),
            },
        ];
        let batch = flatten_drug(&drug);
        assert_eq!(batch.prices.len(), 1);
        assert_eq!(batch.prices[0].cost, 12.5);
        assert_eq!(batch.prices[0].currency, "USD");
    }

    #[test]
    fn reactions_dedup_by_sequence_within_one_record() {
        let mut drug = drug_with_id("DB00001");
        let reaction = |seq: &str| Reaction {
            sequence: seq.to_string(),
            ..Reaction::default()
        };
        drug.reactions.reaction = vec![reaction("1"), reaction("1"), reaction("2")];
        let batch = flatten_drug(&drug);
        let sequences: Vec<_> = batch.reactions.iter().map(|r| r.sequence.as_str()).collect();
        assert_eq!(sequences, vec!["1", "2"]);
    }

    #[test]
    fn reaction_dedup_does_not_span_records() {
        let mut a = drug_with_id("DB00001");
        let mut b = drug_with_id("DB00002");
        a.reactions.reaction = vec![Reaction {
            sequence: "7".to_string(),
            ..Reaction::default()
        }];
        b.reactions.reaction = vec![Reaction {
            sequence: "7".to_string(),
            ..Reaction::default()
        }];
        let mut merged = flatten_drug(&a);
        merged.merge(flatten_drug(&b));
        assert_eq!(merged.reactions.len(), 2);
    }

    #[test]
    fn atc_codes_fan_out_to_two_relations_keyed_by_code() {
        let mut drug = drug_with_id("DB00001");
        drug.atc_codes.atc_code = vec![AtcCode {
            code: "B01AE02".to_string(),
            levels: vec![
                AtcLevel {
                    code: "B01AE".to_string(),
                    description: "Direct thrombin inhibitors".to_string(),
                },
                AtcLevel {
                    code: "B01A".to_string(),
                    description: "Antithrombotic agents".to_string(),
                },
                AtcLevel {
                    code: "B01".to_string(),
                    description: "Antithrombotics".to_string(),
                },
            ],
        }];
        let batch = flatten_drug(&drug);
        assert_eq!(batch.atc_codes.len(), 1);
        assert_eq!(batch.atc_codes[0].atc_code, "B01AE02");
        assert_eq!(batch.atc_codes[0].drugbank_id, "DB00001");
        assert_eq!(batch.atc_levels.len(), 3);
        // Levels belong to the code, not the drug.
        assert!(batch.atc_levels.iter().all(|l| l.atc_code == "B01AE02"));
    }

    #[test]
    fn string_list_relations_filter_empty_strings() {
        let mut drug = drug_with_id("DB00001");
        drug.food_interactions.food_interaction =
            vec!["Take with food.".to_string(), String::new()];
        drug.ahfs_codes.ahfs_code = vec!["20:12.04".to_string(), String::new()];
        drug.pdb_entries.pdb_entry = vec![String::new(), "1G37".to_string()];
        let batch = flatten_drug(&drug);
        assert_eq!(batch.food_interactions.len(), 1);
        assert_eq!(batch.food_interactions[0].interaction, "Take with food.");
        assert_eq!(batch.ahfs_codes.len(), 1);
        assert_eq!(batch.pdb_entries.len(), 1);
        assert_eq!(batch.pdb_entries[0].pdb_entry, "1G37");
    }

    #[test]
    fn uniprot_filter_applies_to_snp_relations() {
        let mut drug = drug_with_id("DB00001");
        drug.snp_effects.effect = vec![
            SnpEffect {
                uniprot_id: "P05023".to_string(),
                gene_symbol: "ATP1A1".to_string(),
                ..SnpEffect::default()
            },
            SnpEffect::default(),
        ];
        drug.snp_adverse_drug_reactions.reaction = vec![AdverseReaction::default()];
        let batch = flatten_drug(&drug);
        assert_eq!(batch.snp_effects.len(), 1);
        assert_eq!(batch.snp_effects[0].uniprot_id, "P05023");
        assert!(batch.adverse_reactions.is_empty());
    }

    #[test]
    fn rows_carry_the_owning_drug_key() {
        let mut drug = drug_with_id("DB00042");
        drug.groups.group = vec!["approved".to_string()];
        drug.synonyms.synonym = vec![Synonym {
            language: "english".to_string(),
            coder: String::new(),
            value: "Testine".to_string(),
        }];
        drug.dosages.dosage = vec![Dosage {
            form: "tablet".to_string(),
            route: "oral".to_string(),
            strength: "5 mg".to_string(),
        }];
        drug.patents.patent = vec![Patent {
            number: "1338068".to_string(),
            country: "Canada".to_string(),
            ..Patent::default()
        }];
        let batch = flatten_drug(&drug);
        assert_eq!(batch.groups[0].drugbank_id, "DB00042");
        assert_eq!(batch.synonyms[0].drugbank_id, "DB00042");
        assert_eq!(batch.dosages[0].drugbank_id, "DB00042");
        assert_eq!(batch.patents[0].drugbank_id, "DB00042");
    }

    #[test]
    fn products_emit_unconditionally_with_their_join_rows() {
        let mut drug = drug_with_id("DB00001");
        drug.products.product = vec![
            Product {
                name: "Refludan".to_string(),
                country: "Canada".to_string(),
                generic: false,
                ..Product::default()
            },
            Product::default(),
        ];
        let batch = flatten_drug(&drug);
        assert_eq!(batch.products.len(), 2);
        assert_eq!(batch.drug_products.len(), 2);
        assert_eq!(batch.drug_products[0].name, "Refludan");
    }
}
