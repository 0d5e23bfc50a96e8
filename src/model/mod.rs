//! Schema model: the typed shape of one source drug record.

pub mod drug;
pub mod protein;

pub use drug::{
    AdverseReaction, Article, AtcCode, AtcLevel, Category, Classification, Dosage, Drug,
    DrugInteraction, DrugbankId, ExternalIdentifier, ExternalLink, LinkRef, Manufacturer, Mixture,
    Packager, Patent, Price, Product, Property, Reaction, Sequence, SnpEffect, Synonym, Textbook,
};
pub use protein::{Carrier, Pathway, Polypeptide, Target};
