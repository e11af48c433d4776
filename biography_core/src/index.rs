//! Index of all individuals, for pickers and navigation.

use record_graph::{RecordGraph, RecordId};
use serde::{Deserialize, Serialize};

use crate::composer::life_span;
use crate::context::RenderContext;
use crate::error::Result;
use crate::template::Evaluator;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub id: RecordId,
    /// `Surname, Given (1900-1980)`, unique within the index.
    pub label: String,
}

/// Every individual with an identifier, sorted case-insensitively by label.
///
/// Equal labels are numbered `-1`, `-2`, ... in sorted order so each label
/// names exactly one individual.
pub fn build_index(graph: &RecordGraph, ctx: RenderContext<'_>) -> Result<Vec<IndexEntry>> {
    let eval = Evaluator::new(graph, ctx);
    let mut entries = Vec::with_capacity(graph.individuals().len());
    for individual in graph.individuals() {
        let Some(id) = &individual.id else {
            continue;
        };
        let mut label = eval.evaluate(individual, "[NAME:surname,given]", None)?;
        label.push_str(&life_span(&eval, individual)?);
        entries.push(IndexEntry {
            id: id.clone(),
            label: label.trim().to_string(),
        });
    }
    entries.sort_by_cached_key(|entry| entry.label.to_uppercase());

    let mut start = 0;
    while start < entries.len() {
        let end = entries[start..]
            .iter()
            .position(|entry| entry.label != entries[start].label)
            .map_or(entries.len(), |offset| start + offset);
        if end - start > 1 {
            for (n, entry) in entries[start..end].iter_mut().enumerate() {
                entry.label.push_str(&format!("-{}", n + 1));
            }
        }
        start = end;
    }
    Ok(entries)
}
