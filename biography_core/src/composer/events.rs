//! Personal facts: occupation and life events.

use record_graph::Record;

use super::{NarrativeSection, Narrator, SectionKind};
use crate::error::Result;
use crate::template::Evaluator;

/// Life events listed among the personal facts, in listing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifeEventTag {
    Address,
    Event,
    Adoption,
    Arrival,
    Departure,
    Description,
    Education,
    Emigration,
    Engagement,
    Graduation,
    Immigration,
    Loan,
    Naturalization,
    Religion,
}

impl LifeEventTag {
    pub const ALL: [LifeEventTag; 14] = [
        LifeEventTag::Address,
        LifeEventTag::Event,
        LifeEventTag::Adoption,
        LifeEventTag::Arrival,
        LifeEventTag::Departure,
        LifeEventTag::Description,
        LifeEventTag::Education,
        LifeEventTag::Emigration,
        LifeEventTag::Engagement,
        LifeEventTag::Graduation,
        LifeEventTag::Immigration,
        LifeEventTag::Loan,
        LifeEventTag::Naturalization,
        LifeEventTag::Religion,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            LifeEventTag::Address => "ADDR",
            LifeEventTag::Event => "EVEN",
            LifeEventTag::Adoption => "ADOP",
            LifeEventTag::Arrival => "ARVL",
            LifeEventTag::Departure => "DPRT",
            LifeEventTag::Description => "DESC",
            LifeEventTag::Education => "EDUC",
            LifeEventTag::Emigration => "EMIG",
            LifeEventTag::Engagement => "ENGA",
            LifeEventTag::Graduation => "GRAD",
            LifeEventTag::Immigration => "IMML",
            LifeEventTag::Loan => "LOAN",
            LifeEventTag::Naturalization => "NATU",
            LifeEventTag::Religion => "RELI",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|event| event.tag() == tag)
    }

    /// English catalog key of the label.
    pub fn label(&self) -> &'static str {
        match self {
            LifeEventTag::Address => "address",
            LifeEventTag::Event => "event",
            LifeEventTag::Adoption => "adoption",
            LifeEventTag::Arrival => "arrival",
            LifeEventTag::Departure => "departure",
            LifeEventTag::Description => "physical description",
            LifeEventTag::Education => "education",
            LifeEventTag::Emigration => "emigration",
            LifeEventTag::Engagement => "engagement",
            LifeEventTag::Graduation => "graduation",
            LifeEventTag::Immigration => "immigration",
            LifeEventTag::Loan => "loan",
            LifeEventTag::Naturalization => "naturalization",
            LifeEventTag::Religion => "religion",
        }
    }
}

impl<'a> Narrator<'a> {
    /// Occupation and one bullet per life event, titled by the first name.
    pub(super) fn personal_facts(
        &mut self,
        eval: &Evaluator<'_>,
        individual: &'a Record,
    ) -> Result<Option<NarrativeSection>> {
        let mut lines = Vec::new();
        if individual.has("OCCU") {
            lines.push(self.cite(eval, individual, "[SEX:Pronoun]| worked as [OCCU].")?);
        }
        for event in LifeEventTag::ALL {
            for fact in self.related(individual, event.tag())? {
                lines.push(self.fact_line(eval, event, fact)?);
            }
        }
        lines.retain(|line| !line.is_empty());
        if lines.is_empty() {
            return Ok(None);
        }

        let title = self.plain(eval, individual, "[NAME:first]")?;
        let section = NarrativeSection::new(SectionKind::PersonalFacts, lines.join("\n"));
        Ok(Some(if title.is_empty() {
            section
        } else {
            section.with_title(title)
        }))
    }

    /// `* ''label'', date type in place value.`
    fn fact_line(&mut self, eval: &Evaluator<'_>, event: LifeEventTag, fact: &Record) -> Result<String> {
        let kind = fact.text_of("TYPE").map(str::to_lowercase);
        let (label, kind) = match (event, kind) {
            (LifeEventTag::Event, Some(kind)) => (kind, None),
            (_, kind) => (event.label().to_string(), kind),
        };

        let mut line = format!("* ''{}'',", eval.tr(&label));
        line.push_str(&self.cite(eval, fact, " [DATE]")?);
        if let Some(kind) = kind {
            line.push(' ');
            line.push_str(&eval.tr(&kind));
        }
        line.push_str(&self.cite(eval, fact, " in [PLAC]")?);
        if let Some(value) = fact.value.as_deref().filter(|v| !v.trim().is_empty()) {
            line.push(' ');
            line.push_str(value.trim());
        }
        line.push_str(&self.refs.add(self.graph, eval.context(), fact.sources())?);
        line.push('.');
        Ok(line)
    }
}
