//! Upload boundary: hand completed relation files to a bulk loader.
//!
//! This is an external collaborator with no real protocol behind it. The
//! one contract that matters is ordering: entity/node tables load before
//! the `-join` edge tables that foreign-key into them, which the relation
//! naming convention signals.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::flatten::RELATIONS;

/// Receives one relation's rows at a time, nodes before edges.
pub trait BulkLoader {
    fn load_table(&mut self, relation: &str, rows: &[String]) -> Result<()>;
}

/// Stub loader: logs what a real loader would transmit.
pub struct LogLoader {
    pub host: String,
}

impl BulkLoader for LogLoader {
    fn load_table(&mut self, relation: &str, rows: &[String]) -> Result<()> {
        info!(host = %self.host, relation, rows = rows.len(), "would bulk-load table");
        Ok(())
    }
}

fn is_join_table(relation: &str) -> bool {
    relation.ends_with("-join")
}

/// Read every relation file under `dir` and feed it to the loader, node
/// tables first.
pub fn upload_dir(dir: &Path, loader: &mut dyn BulkLoader) -> Result<()> {
    let nodes = RELATIONS.iter().copied().filter(|r| !is_join_table(r));
    let edges = RELATIONS.iter().copied().filter(|r| is_join_table(r));

    for relation in nodes.chain(edges) {
        let path = dir.join(format!("{relation}.json"));
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("failed to read relation file {}", path.display()))?;
        let rows: Vec<String> = contents.lines().map(str::to_string).collect();
        loader
            .load_table(relation, &rows)
            .with_context(|| format!("loader rejected relation `{relation}`"))?;
    }
    Ok(())
}
