//! Narrative Composer - assembles a biography from the lower components.
//!
//! A biography has up to four kinds of sections, each skipped when it would
//! be empty:
//! 1. **Introduction**: name, birth and baptism, parents and siblings
//! 2. **Personal facts**: occupation and life events
//! 3. **Relationships**: one per family the individual is a spouse in
//! 4. **Final days**: death, or burial when no death is recorded
//!
//! The locale and the reference birth date travel in a [`RenderContext`]
//! built per call; citations are collected per call as well, so one composer
//! can serve any number of documents.

mod clauses;
mod events;
mod section;

pub use clauses::life_span;
pub use events::*;
pub use section::*;

use record_graph::{Record, RecordGraph, RecordId, RecordKind};
use tracing::{debug, info};

use crate::config::BiographyConfig;
use crate::context::RenderContext;
use crate::date::{QualifiedDate, Qualifier};
use crate::error::{BiographyError, Result};
use crate::format::PlaceRules;
use crate::locale::{Catalog, Locale};
use crate::references::{Reference, ReferenceCollector};
use crate::template::Evaluator;

/// Tags holding a baptism, in order of preference.
pub const BAPTISM_TAGS: [&str; 3] = ["BAPM", "BAPT", "CHR"];

/// Writes biographies. Holds only configuration; every call starts fresh.
#[derive(Debug, Clone)]
pub struct BiographyComposer {
    config: BiographyConfig,
    catalog: Catalog,
    place_rules: PlaceRules,
}

impl BiographyComposer {
    /// Create a composer, compiling the configured place rules and merging the
    /// phrase overrides.
    pub fn new(config: BiographyConfig) -> Result<Self> {
        let catalog = config.catalog()?;
        let place_rules = PlaceRules::from_config(&config.place)?;
        Ok(Self {
            config,
            catalog,
            place_rules,
        })
    }

    /// Create a composer with the default configuration.
    pub fn with_defaults() -> Result<Self> {
        Self::new(BiographyConfig::default())
    }

    pub fn config(&self) -> &BiographyConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// A render context for `locale` without a reference birth date.
    pub fn context(&self, locale: Locale) -> RenderContext<'_> {
        RenderContext::new(locale, &self.catalog, &self.place_rules)
    }

    /// The locale for an individual, from the places of birth, baptism and
    /// death as written in the file.
    pub fn select_locale(&self, individual: &Record) -> Locale {
        let places: Vec<&str> = std::iter::once("BIRT")
            .chain(BAPTISM_TAGS)
            .chain(std::iter::once("DEAT"))
            .filter_map(|tag| individual.first(tag).and_then(|event| event.text_of("PLAC")))
            .collect();
        let locale = self.config.locale_for(places.iter().copied());
        debug!(locale = %locale, places = ?places, "selected locale");
        locale
    }

    /// Compose the biography of one individual.
    pub fn compose(&self, graph: &RecordGraph, id: &RecordId) -> Result<Biography> {
        if id.kind()? != RecordKind::Individual {
            return Err(BiographyError::NotAnIndividual(id.clone()));
        }
        let individual = graph.by_id(id)?;
        let locale = self.select_locale(individual);
        let ctx = self.context(locale).with_birth(reference_birth(individual));
        let eval = Evaluator::new(graph, ctx);

        let mut narrator = Narrator::new(graph);
        let sections = narrator.sections(&eval, individual)?;
        let references = narrator.into_references();

        info!(
            individual = %id,
            locale = %locale,
            sections = sections.len(),
            references = references.len(),
            "composed biography"
        );
        Ok(Biography {
            individual: id.clone(),
            locale,
            heading: eval.tr("Biography"),
            sources_heading: eval.tr("Sources"),
            sections,
            references,
        })
    }

    /// Compose a biography for every individual in file order.
    pub fn compose_all(&self, graph: &RecordGraph) -> Result<Vec<Biography>> {
        graph
            .individuals()
            .iter()
            .filter_map(|individual| individual.id.as_ref())
            .map(|id| self.compose(graph, id))
            .collect()
    }
}

/// The date ages are measured from: the birth date, unless it is only known
/// to precede a baptism whose date is better known; the baptism date when no
/// birth date is recorded.
pub fn reference_birth(individual: &Record) -> Option<QualifiedDate> {
    let birth = event_date(individual, "BIRT");
    let baptism = baptism_date(individual);
    match (birth, baptism) {
        (Some(birth), Some(baptism))
            if birth.qualifier == Qualifier::Before && baptism.qualifier != Qualifier::Before =>
        {
            Some(baptism)
        }
        (Some(birth), _) => Some(birth),
        (None, baptism) => baptism,
    }
}

/// The parsed date of the first event under `tag`.
pub fn event_date(record: &Record, tag: &str) -> Option<QualifiedDate> {
    record
        .first(tag)
        .and_then(|event| event.text_of("DATE"))
        .map(QualifiedDate::parse)
}

fn baptism_date(record: &Record) -> Option<QualifiedDate> {
    BAPTISM_TAGS.iter().find_map(|tag| event_date(record, tag))
}

/// The first baptism tag the record carries a dated event under.
pub(crate) fn baptism_tag(record: &Record) -> Option<&'static str> {
    BAPTISM_TAGS
        .into_iter()
        .find(|tag| record.first(tag).is_some_and(|event| event.has("DATE")))
}

/// Composes the sections of one document, collecting its citations.
pub(crate) struct Narrator<'a> {
    graph: &'a RecordGraph,
    refs: ReferenceCollector,
}

impl<'a> Narrator<'a> {
    pub(crate) fn new(graph: &'a RecordGraph) -> Self {
        Self {
            graph,
            refs: ReferenceCollector::new(),
        }
    }

    pub(crate) fn into_references(self) -> Vec<Reference> {
        self.refs.references().to_vec()
    }

    /// Evaluate a template, citing the sources of what it emits.
    fn cite(&mut self, eval: &Evaluator<'_>, record: &Record, template: &str) -> Result<String> {
        eval.evaluate(record, template, Some(&mut self.refs))
    }

    /// Evaluate a template without citing anything; for checks and sort keys.
    fn plain(&self, eval: &Evaluator<'_>, record: &Record, template: &str) -> Result<String> {
        eval.evaluate(record, template, None)
    }

    fn sections(&mut self, eval: &Evaluator<'_>, individual: &'a Record) -> Result<Vec<NarrativeSection>> {
        let mut sections = vec![NarrativeSection::new(
            SectionKind::Introduction,
            self.introduction(eval, individual)?,
        )];
        if let Some(facts) = self.personal_facts(eval, individual)? {
            sections.push(facts);
        }
        sections.extend(self.relationships(eval, individual)?);
        if let Some(final_days) = self.final_days(eval, individual)? {
            sections.push(final_days);
        }
        sections.retain(|section| !section.is_empty());
        debug!(count = sections.len(), "assembled sections");
        Ok(sections)
    }

    /// Resolved records under a tag path.
    fn related(&self, record: &'a Record, selector: &str) -> Result<Vec<&'a Record>> {
        Ok(self.graph.by_path_str(record, selector)?)
    }

    /// Stable ascending order by ISO birth date; a missing date sorts first.
    fn by_birth_date(&self, eval: &Evaluator<'_>, mut people: Vec<&'a Record>) -> Result<Vec<&'a Record>> {
        let mut keyed = Vec::with_capacity(people.len());
        for person in people.drain(..) {
            keyed.push((self.plain(eval, person, "[BIRT.DATE:iso]")?, person));
        }
        keyed.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(keyed.into_iter().map(|(_, person)| person).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_birth_prefers_birth() {
        let person = Record::new()
            .with_field("BIRT", Record::new().with_text("DATE", "2 MAR 1900"))
            .with_field("BAPM", Record::new().with_text("DATE", "5 MAR 1900"));
        assert_eq!(reference_birth(&person).unwrap().original, "2 MAR 1900");
    }

    #[test]
    fn test_reference_birth_uses_baptism_for_before_bound() {
        let person = Record::new()
            .with_field("BIRT", Record::new().with_text("DATE", "BEF 5 MAR 1900"))
            .with_field("BAPM", Record::new().with_text("DATE", "5 MAR 1900"));
        assert_eq!(reference_birth(&person).unwrap().original, "5 MAR 1900");

        let both_bounded = Record::new()
            .with_field("BIRT", Record::new().with_text("DATE", "BEF 5 MAR 1900"))
            .with_field("BAPM", Record::new().with_text("DATE", "BEF 6 MAR 1900"));
        assert_eq!(reference_birth(&both_bounded).unwrap().original, "BEF 5 MAR 1900");
    }

    #[test]
    fn test_reference_birth_falls_back_to_baptism() {
        let person = Record::new().with_field("CHR", Record::new().with_text("DATE", "1 APR 1850"));
        assert_eq!(reference_birth(&person).unwrap().original, "1 APR 1850");
        assert!(reference_birth(&Record::new()).is_none());
    }

    #[test]
    fn test_select_locale() {
        let composer = BiographyComposer::with_defaults().unwrap();
        let dutch = Record::new().with_field(
            "DEAT",
            Record::new().with_text("PLAC", "Tholen, Zeeland, Netherlands"),
        );
        assert_eq!(composer.select_locale(&dutch), Locale::Dutch);
        let christened = Record::new().with_field(
            "CHR",
            Record::new().with_text("PLAC", "Bonn, Germany"),
        );
        assert_eq!(composer.select_locale(&christened), Locale::German);
        assert_eq!(composer.select_locale(&Record::new()), Locale::English);
    }

    #[test]
    fn test_compose_rejects_non_individuals() {
        let composer = BiographyComposer::with_defaults().unwrap();
        let mut graph = RecordGraph::new();
        graph.insert(Record::new().with_id("@F1@")).unwrap();

        let err = composer.compose(&graph, &RecordId::new("@F1@")).unwrap_err();
        assert!(matches!(err, BiographyError::NotAnIndividual(_)));

        let err = composer.compose(&graph, &RecordId::new("@I404@")).unwrap_err();
        assert!(matches!(err, BiographyError::Graph(_)));
    }
}
