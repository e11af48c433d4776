//! Reference Collector - citation markup with per-document deduplication.
//!
//! The first citation of a source emits the full `<ref name="KEY">...</ref>`
//! block; later citations of the same source in the same document emit the
//! short `<ref name="KEY" />` back-reference. A collector lives for exactly
//! one document.

use record_graph::{GraphError, Record, RecordGraph, RecordId};
use std::collections::HashSet;
use tracing::debug;

use crate::context::RenderContext;
use crate::error::Result;

/// A source cited in the current document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    /// Source identifier without its `@` delimiters.
    pub key: String,
    pub citation: String,
    /// Position of first use, starting at 1.
    pub ordinal: usize,
}

#[derive(Debug, Clone, Default)]
pub struct ReferenceCollector {
    cited: Vec<Reference>,
}

impl ReferenceCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// References in order of first use.
    pub fn references(&self) -> &[Reference] {
        &self.cited
    }

    pub fn len(&self) -> usize {
        self.cited.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cited.is_empty()
    }

    pub fn is_cited(&self, key: &str) -> bool {
        self.cited.iter().any(|r| r.key == key)
    }

    /// Markup for a list of source citations attached to a record.
    ///
    /// Citations without a source identifier are skipped. A source cited
    /// twice in the same list is emitted once.
    pub fn add(&mut self, graph: &RecordGraph, ctx: &RenderContext<'_>, sources: &[Record]) -> Result<String> {
        let mut seen = HashSet::new();
        let mut out = String::new();
        for citation in sources {
            let Some(id) = &citation.id else {
                debug!("skipping citation without source identifier");
                continue;
            };
            let key = id.short().to_string();
            if !seen.insert(key.clone()) {
                continue;
            }
            if self.is_cited(&key) {
                out.push_str(&format!("<ref name=\"{}\" />", key));
                continue;
            }

            let body = citation_body(graph, ctx, id, citation)?;
            let markup = format!("<ref name=\"{}\">{}</ref>", key, body);
            out.push_str(&markup);
            self.cited.push(Reference {
                key,
                citation: markup,
                ordinal: self.cited.len() + 1,
            });
        }
        Ok(out)
    }
}

/// `TITLE accessed via REPOSITORY.` and a line break; empty when the source
/// is missing or untitled.
pub fn source_title(graph: &RecordGraph, ctx: &RenderContext<'_>, id: &RecordId) -> Result<String> {
    let source = match graph.by_id(id) {
        Ok(source) => source,
        Err(GraphError::NotFound(_)) => {
            debug!(id = %id, "cited source not found");
            return Ok(String::new());
        }
        Err(e) => return Err(e.into()),
    };
    let Some(title) = source.text_of("TITL") else {
        return Ok(String::new());
    };

    let mut out = title.to_string();
    let repository = graph.by_path_str(source, "REPO")?;
    if let Some(name) = repository.first().and_then(|repo| repo.text_of("NAME")) {
        out.push_str(&format!(" {} {}.", ctx.tr("accessed via"), name));
    }
    out.push('\n');
    Ok(out)
}

fn citation_body(graph: &RecordGraph, ctx: &RenderContext<'_>, id: &RecordId, citation: &Record) -> Result<String> {
    let mut body = source_title(graph, ctx, id)?;
    if let Some(page) = citation.text_of("PAGE") {
        match citation.text_of("_LINK") {
            Some(link) => body.push_str(&format!("''[{} {}]''", link, page)),
            None => body.push_str(&format!("''{}''", page)),
        }
    }
    if let Some(quality) = citation.text_of("QUAY") {
        body.push_str(&format!(", {} {}/4", ctx.tr("reliability"), quality));
    }
    if let Some(note) = citation.text_of("NOTE") {
        body.push_str(&format!(" ({})", note));
    }
    if let Some(text) = citation.first("DATA").and_then(|data| data.text_of("TEXT")) {
        body.push_str(&format!(".\n{}", text));
    }
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::PlaceRules;
    use crate::locale::{Catalog, Locale};

    fn graph() -> RecordGraph {
        let mut graph = RecordGraph::new();
        graph
            .insert(
                Record::new()
                    .with_id("@S1@")
                    .with_text("TITL", "Burgerlijke stand Tholen")
                    .with_field("REPO", Record::pointer("@R1@")),
            )
            .unwrap();
        graph
            .insert(Record::new().with_id("@S2@").with_text("TITL", "Family bible"))
            .unwrap();
        graph
            .insert(Record::new().with_id("@R1@").with_text("NAME", "Zeeuws Archief"))
            .unwrap();
        graph
    }

    fn citation(id: &str) -> Record {
        Record::pointer(id)
    }

    #[test]
    fn test_first_use_is_full_then_short() {
        let graph = graph();
        let (catalog, places) = (Catalog::builtin(), PlaceRules::new());
        let ctx = RenderContext::new(Locale::English, &catalog, &places);
        let mut refs = ReferenceCollector::new();

        let first = refs.add(&graph, &ctx, &[citation("@S1@")]).unwrap();
        assert_eq!(
            first,
            "<ref name=\"S1\">Burgerlijke stand Tholen accessed via Zeeuws Archief.\n</ref>"
        );
        let second = refs.add(&graph, &ctx, &[citation("@S1@")]).unwrap();
        assert_eq!(second, "<ref name=\"S1\" />");

        let mut fresh = ReferenceCollector::new();
        assert_eq!(fresh.add(&graph, &ctx, &[citation("@S1@")]).unwrap(), first);
    }

    #[test]
    fn test_duplicates_within_one_call() {
        let graph = graph();
        let (catalog, places) = (Catalog::builtin(), PlaceRules::new());
        let ctx = RenderContext::new(Locale::English, &catalog, &places);
        let mut refs = ReferenceCollector::new();

        let out = refs
            .add(&graph, &ctx, &[citation("@S2@"), citation("@S2@"), citation("@S1@")])
            .unwrap();
        assert_eq!(out.matches("name=\"S2\"").count(), 1);
        assert_eq!(refs.len(), 2);
        assert_eq!(refs.references()[0].key, "S2");
        assert_eq!(refs.references()[0].ordinal, 1);
        assert_eq!(refs.references()[1].ordinal, 2);
    }

    #[test]
    fn test_citation_details() {
        let graph = graph();
        let (catalog, places) = (Catalog::builtin(), PlaceRules::new());
        let ctx = RenderContext::new(Locale::Dutch, &catalog, &places);
        let mut refs = ReferenceCollector::new();

        let detailed = citation("@S2@")
            .with_text("PAGE", "p. 3")
            .with_text("_LINK", "https://example.org/bible")
            .with_text("QUAY", "3")
            .with_text("NOTE", "front page")
            .with_field("DATA", Record::new().with_text("TEXT", "Born this day"));

        let out = refs.add(&graph, &ctx, &[detailed]).unwrap();
        assert_eq!(
            out,
            "<ref name=\"S2\">Family bible\n''[https://example.org/bible p. 3]'', betrouwbaarheid 3/4 (front page).\nBorn this day</ref>"
        );
    }

    #[test]
    fn test_missing_source_has_empty_title() {
        let graph = graph();
        let (catalog, places) = (Catalog::builtin(), PlaceRules::new());
        let ctx = RenderContext::new(Locale::English, &catalog, &places);
        let mut refs = ReferenceCollector::new();

        let out = refs.add(&graph, &ctx, &[citation("@S9@").with_text("PAGE", "12")]).unwrap();
        assert_eq!(out, "<ref name=\"S9\">''12''</ref>");
    }

    #[test]
    fn test_inline_citation_without_id_is_skipped() {
        let graph = graph();
        let (catalog, places) = (Catalog::builtin(), PlaceRules::new());
        let ctx = RenderContext::new(Locale::English, &catalog, &places);
        let mut refs = ReferenceCollector::new();

        assert_eq!(refs.add(&graph, &ctx, &[Record::text("oral history")]).unwrap(), "");
        assert!(refs.is_empty());
    }
}
