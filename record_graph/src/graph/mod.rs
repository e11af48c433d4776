//! The record graph - the central structure holding one parsed genealogical file.

mod selector;

pub use selector::*;

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

use crate::error::{GraphError, Result};
use crate::record::{Record, RecordId, RecordKind};

/// Records of one kind, in file order, with an identifier index.
#[derive(Debug, Clone, Default)]
struct Partition {
    records: Vec<Record>,
    index: HashMap<RecordId, usize>,
}

/// Typed collections of tagged records linked by pointer identifiers.
///
/// The graph is read-only while a biography is generated; every accessor
/// borrows from it, so resolved records share the graph's lifetime.
#[derive(Debug, Clone, Default)]
pub struct RecordGraph {
    partitions: HashMap<RecordKind, Partition>,
}

impl RecordGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from the keyword-partitioned shape produced by a parser:
    /// `{"INDI": [...], "FAM": [...], "SOUR": [...], "REPO": [...]}`.
    ///
    /// Partitions with other keywords (headers, submitters, notes) are skipped.
    pub fn from_partitions(partitions: BTreeMap<String, Vec<Record>>) -> Self {
        let mut graph = Self::new();
        for (keyword, records) in partitions {
            let Some(kind) = RecordKind::from_keyword(&keyword) else {
                debug!(keyword = %keyword, count = records.len(), "skipping unsupported partition");
                continue;
            };
            for record in records {
                graph.add_record(kind, record);
            }
        }
        graph
    }

    /// Parse a graph from its JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        let partitions: BTreeMap<String, Vec<Record>> = serde_json::from_str(json)?;
        Ok(Self::from_partitions(partitions))
    }

    /// Serialize the graph back into its keyword-partitioned JSON form.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Add a record to a partition. Records without an identifier are kept
    /// but cannot be looked up.
    pub fn add_record(&mut self, kind: RecordKind, record: Record) {
        let partition = self.partitions.entry(kind).or_default();
        if let Some(id) = &record.id {
            partition.index.insert(id.clone(), partition.records.len());
        }
        partition.records.push(record);
    }

    /// Add a record to the partition its identifier encodes.
    pub fn insert(&mut self, record: Record) -> Result<RecordId> {
        let id = record
            .id
            .clone()
            .ok_or_else(|| GraphError::UnsupportedIdentifierFormat(String::new()))?;
        let kind = id.kind()?;
        self.add_record(kind, record);
        Ok(id)
    }

    /// All records of one kind, in file order.
    pub fn records(&self, kind: RecordKind) -> &[Record] {
        self.partitions
            .get(&kind)
            .map(|p| p.records.as_slice())
            .unwrap_or(&[])
    }

    pub fn individuals(&self) -> &[Record] {
        self.records(RecordKind::Individual)
    }

    /// Total number of records over all partitions.
    pub fn len(&self) -> usize {
        self.partitions.values().map(|p| p.records.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up a record by identifier in the partition its encoding selects.
    pub fn by_id(&self, id: &RecordId) -> Result<&Record> {
        let kind = id.kind()?;
        self.partitions
            .get(&kind)
            .and_then(|p| p.index.get(id).map(|&idx| &p.records[idx]))
            .ok_or_else(|| GraphError::NotFound(id.0.clone()))
    }

    /// Follow pointer indirection until the identifier stops changing.
    ///
    /// Records without an identifier resolve to themselves. A dangling pointer
    /// resolves to `None`.
    pub fn resolve<'g>(&'g self, record: &'g Record) -> Result<Option<&'g Record>> {
        let mut current = record;
        let mut last: Option<&RecordId> = None;
        while let Some(id) = current.id.as_ref() {
            if last == Some(id) {
                break;
            }
            last = Some(id);
            match self.by_id(id) {
                Ok(found) => current = found,
                Err(GraphError::NotFound(_)) => {
                    debug!(id = %id, "dangling pointer");
                    return Ok(None);
                }
                Err(e) => return Err(e),
            }
        }
        Ok(Some(current))
    }

    /// Resolve a selector against a record.
    ///
    /// Intermediate segments must match exactly one record; the final segment
    /// may match several. A missing segment yields an empty result.
    pub fn by_path<'g>(&'g self, record: &'g Record, selector: &Selector) -> Result<Vec<&'g Record>> {
        self.walk(record, selector, selector.segments())
    }

    /// Convenience wrapper around [`RecordGraph::by_path`] taking the selector text.
    pub fn by_path_str<'g>(&'g self, record: &'g Record, selector: &str) -> Result<Vec<&'g Record>> {
        self.by_path(record, &Selector::parse(selector))
    }

    fn walk<'g>(
        &'g self,
        record: &'g Record,
        selector: &Selector,
        segments: &[String],
    ) -> Result<Vec<&'g Record>> {
        let Some(record) = self.resolve(record)? else {
            return Ok(Vec::new());
        };
        let Some((field, rest)) = segments.split_first() else {
            return Ok(vec![record]);
        };
        let children = record.field(field);

        if rest.is_empty() {
            let mut resolved = Vec::with_capacity(children.len());
            for child in children {
                if let Some(child) = self.resolve(child)? {
                    resolved.push(child);
                }
            }
            return Ok(resolved);
        }

        match children {
            [] => Ok(Vec::new()),
            [only] => self.walk(only, selector, rest),
            _ => Err(GraphError::SelectorDivergence {
                selector: selector.to_string(),
                field: field.clone(),
            }),
        }
    }

    /// The other spouse of `individual` in `family`.
    ///
    /// Both spousal slots must be filled; a family with a single partner has
    /// no spouse to report.
    pub fn spouse<'g>(&'g self, family: &'g Record, individual: &Record) -> Result<Option<&'g Record>> {
        let husband = self.by_path_str(family, "HUSB")?;
        let wife = self.by_path_str(family, "WIFE")?;
        match (husband.first(), wife.first()) {
            (Some(husband), Some(wife)) => {
                if husband.id.is_some() && husband.id == individual.id {
                    Ok(Some(*wife))
                } else {
                    Ok(Some(*husband))
                }
            }
            _ => Ok(None),
        }
    }
}

impl Serialize for RecordGraph {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let partitions: BTreeMap<&str, &[Record]> = self
            .partitions
            .iter()
            .map(|(kind, partition)| (kind.keyword(), partition.records.as_slice()))
            .collect();
        partitions.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RecordGraph {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let partitions = BTreeMap::<String, Vec<Record>>::deserialize(deserializer)?;
        Ok(Self::from_partitions(partitions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_test_graph() -> RecordGraph {
        let mut graph = RecordGraph::new();

        graph
            .insert(
                Record::new()
                    .with_id("@I1@")
                    .with_text("NAME", "Jan /Vonk/")
                    .with_text("SEX", "M")
                    .with_field("FAMS", Record::pointer("@F1@")),
            )
            .unwrap();
        graph
            .insert(
                Record::new()
                    .with_id("@I2@")
                    .with_text("NAME", "Maria /Smit/")
                    .with_text("SEX", "F")
                    .with_field("FAMS", Record::pointer("@F1@")),
            )
            .unwrap();
        graph
            .insert(
                Record::new()
                    .with_id("@I3@")
                    .with_text("NAME", "Kees /Vonk/")
                    .with_field("FAMC", Record::pointer("@F1@")),
            )
            .unwrap();
        graph
            .insert(
                Record::new()
                    .with_id("@F1@")
                    .with_field("HUSB", Record::pointer("@I1@"))
                    .with_field("WIFE", Record::pointer("@I2@"))
                    .with_field("CHIL", Record::pointer("@I3@")),
            )
            .unwrap();

        graph
    }

    #[test]
    fn test_by_id() {
        let graph = setup_test_graph();
        let record = graph.by_id(&RecordId::new("@I2@")).unwrap();
        assert_eq!(record.text_of("NAME"), Some("Maria /Smit/"));

        assert!(matches!(
            graph.by_id(&RecordId::new("@I9@")),
            Err(GraphError::NotFound(_))
        ));
        assert!(matches!(
            graph.by_id(&RecordId::new("@X1@")),
            Err(GraphError::UnsupportedIdentifierFormat(_))
        ));
    }

    #[test]
    fn test_by_path_follows_pointers() {
        let graph = setup_test_graph();
        let child = graph.by_id(&RecordId::new("@I3@")).unwrap();

        let names = graph.by_path_str(child, "FAMC.HUSB.NAME").unwrap();
        assert_eq!(names.len(), 1);
        assert_eq!(names[0].value.as_deref(), Some("Jan /Vonk/"));
    }

    #[test]
    fn test_by_path_missing_segment_is_empty() {
        let graph = setup_test_graph();
        let child = graph.by_id(&RecordId::new("@I3@")).unwrap();

        assert!(graph.by_path_str(child, "BIRT.DATE").unwrap().is_empty());
        assert!(graph.by_path_str(child, "FAMS.HUSB").unwrap().is_empty());
    }

    #[test]
    fn test_by_path_terminal_sequence() {
        let mut graph = setup_test_graph();
        graph
            .insert(
                Record::new()
                    .with_id("@F2@")
                    .with_field("CHIL", Record::pointer("@I1@"))
                    .with_field("CHIL", Record::pointer("@I2@")),
            )
            .unwrap();
        let family = graph.by_id(&RecordId::new("@F2@")).unwrap();

        let children = graph.by_path_str(family, "CHIL").unwrap();
        assert_eq!(children.len(), 2);
        assert_eq!(children[1].text_of("NAME"), Some("Maria /Smit/"));
    }

    #[test]
    fn test_by_path_divergence() {
        let mut graph = setup_test_graph();
        graph
            .insert(
                Record::new()
                    .with_id("@F2@")
                    .with_field("CHIL", Record::pointer("@I1@"))
                    .with_field("CHIL", Record::pointer("@I2@")),
            )
            .unwrap();
        let family = graph.by_id(&RecordId::new("@F2@")).unwrap();

        let err = graph.by_path_str(family, "CHIL.NAME").unwrap_err();
        assert!(matches!(err, GraphError::SelectorDivergence { ref field, .. } if field == "CHIL"));
    }

    #[test]
    fn test_self_reference_terminates() {
        let mut graph = RecordGraph::new();
        graph.insert(Record::pointer("@I7@")).unwrap();

        let stub = Record::pointer("@I7@");
        let resolved = graph.resolve(&stub).unwrap().unwrap();
        assert_eq!(resolved.id, Some(RecordId::new("@I7@")));
    }

    #[test]
    fn test_dangling_pointer_resolves_to_none() {
        let graph = setup_test_graph();
        let stub = Record::pointer("@I99@");
        assert!(graph.resolve(&stub).unwrap().is_none());
    }

    #[test]
    fn test_spouse() {
        let graph = setup_test_graph();
        let family = graph.by_id(&RecordId::new("@F1@")).unwrap();
        let husband = graph.by_id(&RecordId::new("@I1@")).unwrap();
        let wife = graph.by_id(&RecordId::new("@I2@")).unwrap();

        let spouse = graph.spouse(family, husband).unwrap().unwrap();
        assert_eq!(spouse.id, wife.id);
        let spouse = graph.spouse(family, wife).unwrap().unwrap();
        assert_eq!(spouse.id, husband.id);
    }

    #[test]
    fn test_spouse_requires_both_slots() {
        let mut graph = setup_test_graph();
        graph
            .insert(Record::new().with_id("@F3@").with_field("HUSB", Record::pointer("@I1@")))
            .unwrap();
        let family = graph.by_id(&RecordId::new("@F3@")).unwrap();
        let husband = graph.by_id(&RecordId::new("@I1@")).unwrap();

        assert!(graph.spouse(family, husband).unwrap().is_none());
    }

    #[test]
    fn test_json_round_trip_keeps_lookups() {
        let json = r#"{
            "INDI": [{"id": "@I1@", "NAME": "Jan /Vonk/"}],
            "SOUR": [{"id": "@S1@", "TITL": "Civil records"}],
            "HEAD": [{"value": "ignored"}]
        }"#;
        let graph = RecordGraph::from_json(json).unwrap();
        assert_eq!(graph.len(), 2);

        let again = RecordGraph::from_json(&graph.to_json().unwrap()).unwrap();
        let source = again.by_id(&RecordId::new("@S1@")).unwrap();
        assert_eq!(source.text_of("TITL"), Some("Civil records"));
    }
}
