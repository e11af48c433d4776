//! Key facts of an individual as a serializable value.

use record_graph::{Record, RecordGraph, RecordId};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::template::Evaluator;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryName {
    pub given: String,
    pub surname: String,
}

/// Date and place of an event, as far as they are known.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,
}

/// An individual with parents and siblings summarized to a chosen depth.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonSummary {
    pub id: Option<RecordId>,
    pub name: SummaryName,
    /// The sex code as recorded.
    pub gender: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth: Option<SummaryEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub death: Option<SummaryEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub father: Option<Box<PersonSummary>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mother: Option<Box<PersonSummary>>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub siblings: Vec<PersonSummary>,
}

impl PersonSummary {
    /// Summarize an individual. `depth` is how many generations of parents
    /// and siblings to include; 0 summarizes the individual alone.
    pub fn build(eval: &Evaluator<'_>, individual: &Record, depth: u32) -> Result<Self> {
        let graph = eval.graph();
        let mut summary = Self {
            id: individual.id.clone(),
            name: SummaryName {
                given: eval.evaluate(individual, "[NAME:given]", None)?,
                surname: eval.evaluate(individual, "[NAME:surname]", None)?,
            },
            gender: eval.evaluate(individual, "[SEX]", None)?,
            birth: event(eval, individual, "BIRT")?,
            death: event(eval, individual, "DEAT")?,
            ..Self::default()
        };
        if depth == 0 {
            return Ok(summary);
        }

        let families = graph.by_path_str(individual, "FAMC")?;
        let Some(family) = families.first() else {
            return Ok(summary);
        };
        if let Some(father) = graph.by_path_str(family, "HUSB")?.first() {
            summary.father = Some(Box::new(Self::build(eval, father, depth - 1)?));
        }
        if let Some(mother) = graph.by_path_str(family, "WIFE")?.first() {
            summary.mother = Some(Box::new(Self::build(eval, mother, depth - 1)?));
        }
        for sibling in graph.by_path_str(family, "CHIL")? {
            if sibling.id.is_some() && sibling.id == individual.id {
                continue;
            }
            summary.siblings.push(Self::build(eval, sibling, depth - 1)?);
        }
        Ok(summary)
    }

    /// Summaries of every individual with one generation of relatives.
    pub fn all(eval: &Evaluator<'_>, graph: &RecordGraph) -> Result<Vec<Self>> {
        graph
            .individuals()
            .iter()
            .map(|individual| Self::build(eval, individual, 1))
            .collect()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn event(eval: &Evaluator<'_>, individual: &Record, tag: &str) -> Result<Option<SummaryEvent>> {
    let non_empty = |text: String| (!text.is_empty()).then_some(text);
    let date = non_empty(eval.evaluate(individual, &format!("[{}.DATE:us]", tag), None)?);
    let place = non_empty(eval.evaluate(individual, &format!("[{}.PLAC:full]", tag), None)?);
    if date.is_none() && place.is_none() {
        return Ok(None);
    }
    Ok(Some(SummaryEvent { date, place }))
}
