//! Relation sink: accumulate rows across the whole record sequence, then
//! serialize each relation to its own newline-delimited JSON file.
//!
//! Each file is written to a temporary sibling and renamed into place, so
//! a relation file is either complete or absent — a failure in one
//! relation never leaves another half-written. A relation with zero rows
//! still produces an (empty) file.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::error::PipelineError;
use crate::flatten::TableBatch;

/// Owns the per-relation row lists for the lifetime of one run. Nothing
/// else mutates them once a batch is absorbed.
#[derive(Debug, Default)]
pub struct TableSink {
    batch: TableBatch,
    records: usize,
}

impl TableSink {
    pub fn new() -> Self {
        TableSink::default()
    }

    /// Fold one record's rows into the run, preserving document order.
    pub fn absorb(&mut self, batch: TableBatch) {
        self.records += 1;
        self.batch.merge(batch);
    }

    /// Records absorbed so far.
    pub fn records(&self) -> usize {
        self.records
    }

    /// Total rows across every relation.
    pub fn row_count(&self) -> usize {
        self.batch.row_count()
    }

    /// Serialize every relation into `dir`, creating it if absent.
    pub fn write_to_dir<P: AsRef<Path>>(&self, dir: P) -> Result<(), PipelineError> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(PipelineError::OutputDir)?;

        write_table(dir, "drugs", &self.batch.drugs)?;
        write_table(dir, "classifications", &self.batch.classifications)?;
        write_table(dir, "manufacturers", &self.batch.manufacturers)?;
        write_table(dir, "drugs-manufacturers-join", &self.batch.drug_manufacturers)?;
        write_table(dir, "products", &self.batch.products)?;
        write_table(dir, "drugs-products-join", &self.batch.drug_products)?;
        write_table(dir, "reactions", &self.batch.reactions)?;
        write_table(dir, "adverse-reactions", &self.batch.adverse_reactions)?;
        write_table(dir, "snp-effects", &self.batch.snp_effects)?;
        write_table(dir, "groups", &self.batch.groups)?;
        write_table(dir, "articles", &self.batch.articles)?;
        write_table(dir, "books", &self.batch.books)?;
        write_table(dir, "links", &self.batch.links)?;
        write_table(dir, "synonyms", &self.batch.synonyms)?;
        write_table(dir, "mixtures", &self.batch.mixtures)?;
        write_table(dir, "packagers", &self.batch.packagers)?;
        write_table(dir, "prices", &self.batch.prices)?;
        write_table(dir, "categories", &self.batch.categories)?;
        write_table(dir, "organisms", &self.batch.organisms)?;
        write_table(dir, "atc_codes", &self.batch.atc_codes)?;
        write_table(dir, "atc_levels", &self.batch.atc_levels)?;
        write_table(dir, "dosages", &self.batch.dosages)?;
        write_table(dir, "patents", &self.batch.patents)?;
        write_table(dir, "drug_interactions", &self.batch.drug_interactions)?;
        write_table(dir, "food_interactions", &self.batch.food_interactions)?;
        write_table(dir, "experimental_properties", &self.batch.experimental_properties)?;
        write_table(dir, "external_links", &self.batch.external_links)?;
        write_table(dir, "external_identifiers", &self.batch.external_identifiers)?;
        write_table(dir, "ahfs_codes", &self.batch.ahfs_codes)?;
        write_table(dir, "pdb_entries", &self.batch.pdb_entries)?;

        Ok(())
    }
}

/// Write one relation: rows as NDJSON into `<relation>.json`, via a
/// temporary file renamed into place on success.
fn write_table<T: Serialize>(
    dir: &Path,
    relation: &'static str,
    rows: &[T],
) -> Result<(), PipelineError> {
    let tmp_path = dir.join(format!("{relation}.json.tmp"));
    let final_path = dir.join(format!("{relation}.json"));

    let written = (|| -> io::Result<()> {
        let mut out = BufWriter::new(File::create(&tmp_path)?);
        for row in rows {
            let line = serde_json::to_string(row).map_err(io::Error::from)?;
            writeln!(out, "{line}")?;
        }
        out.flush()
    })();

    if let Err(source) = written {
        // Best effort: don't leave a partial temp file behind.
        let _ = fs::remove_file(&tmp_path);
        return Err(PipelineError::Output { relation, source });
    }

    fs::rename(&tmp_path, &final_path)
        .map_err(|source| PipelineError::Output { relation, source })?;
    debug!(relation, rows = rows.len(), "wrote relation file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flatten::rows::{DrugManufacturerRow, ManufacturerRow};
    use crate::flatten::RELATIONS;

    fn sample_sink() -> TableSink {
        let mut batch = TableBatch::default();
        batch.manufacturers.push(ManufacturerRow {
            name: "Acme".to_string(),
            url: String::new(),
        });
        batch.drug_manufacturers.push(DrugManufacturerRow {
            drugbank_id: "DB00001".to_string(),
            manufacturer_id: "Acme".to_string(),
        });
        let mut sink = TableSink::new();
        sink.absorb(batch);
        sink
    }

    #[test]
    fn every_relation_gets_a_file_even_when_empty() {
        let dir = tempfile::tempdir().unwrap();
        sample_sink().write_to_dir(dir.path()).unwrap();

        for relation in RELATIONS {
            let path = dir.path().join(format!("{relation}.json"));
            assert!(path.exists(), "missing relation file {relation}.json");
        }
        let empty = fs::read_to_string(dir.path().join("prices.json")).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn rows_serialize_as_one_json_document_per_line() {
        let dir = tempfile::tempdir().unwrap();
        sample_sink().write_to_dir(dir.path()).unwrap();

        let contents = fs::read_to_string(dir.path().join("manufacturers.json")).unwrap();
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines.len(), 1);
        let row: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(row["name"], "Acme");

        let join = fs::read_to_string(dir.path().join("drugs-manufacturers-join.json")).unwrap();
        let row: serde_json::Value = serde_json::from_str(join.lines().next().unwrap()).unwrap();
        assert_eq!(row["drugbank-id"], "DB00001");
        assert_eq!(row["manufacturer-id"], "Acme");
    }

    #[test]
    fn writing_twice_is_byte_identical() {
        let a = tempfile::tempdir().unwrap();
        let b = tempfile::tempdir().unwrap();
        let sink = sample_sink();
        sink.write_to_dir(a.path()).unwrap();
        sink.write_to_dir(b.path()).unwrap();

        for relation in RELATIONS {
            let file = format!("{relation}.json");
            let left = fs::read(a.path().join(&file)).unwrap();
            let right = fs::read(b.path().join(&file)).unwrap();
            assert_eq!(left, right, "relation {relation} differs between runs");
        }
    }

    #[test]
    fn no_temp_files_remain_after_a_successful_write() {
        let dir = tempfile::tempdir().unwrap();
        sample_sink().write_to_dir(dir.path()).unwrap();
        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().is_some_and(|ext| ext == "tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }
}
