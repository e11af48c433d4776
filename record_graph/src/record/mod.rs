//! Record definitions - the tagged nodes of a genealogical file.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{GraphError, Result};

/// Identifier of a top-level record, kept in its decorated form (e.g. `@I42@`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub String);

impl RecordId {
    /// Create an identifier from its decorated form.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The identifier with the decorative `@` delimiters stripped (`@S1@` -> `S1`).
    pub fn short(&self) -> &str {
        let id = self.0.strip_prefix('@').unwrap_or(&self.0);
        id.strip_suffix('@').unwrap_or(id)
    }

    /// The record kind encoded in the identifier.
    ///
    /// The second character of the decorated form selects the kind, so `@F3@`
    /// is a family and `@I3@` an individual.
    pub fn kind(&self) -> Result<RecordKind> {
        self.0
            .chars()
            .nth(1)
            .and_then(RecordKind::from_marker)
            .ok_or_else(|| GraphError::UnsupportedIdentifierFormat(self.0.clone()))
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// The four record partitions of a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordKind {
    Family,
    Individual,
    Source,
    Repository,
}

impl RecordKind {
    pub const ALL: [RecordKind; 4] = [
        RecordKind::Family,
        RecordKind::Individual,
        RecordKind::Source,
        RecordKind::Repository,
    ];

    /// The partition keyword used by the interchange file.
    pub fn keyword(&self) -> &'static str {
        match self {
            RecordKind::Family => "FAM",
            RecordKind::Individual => "INDI",
            RecordKind::Source => "SOUR",
            RecordKind::Repository => "REPO",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.keyword() == keyword)
    }

    /// Identifier marker character, the first letter of the keyword.
    pub fn marker(&self) -> char {
        match self {
            RecordKind::Family => 'F',
            RecordKind::Individual => 'I',
            RecordKind::Source => 'S',
            RecordKind::Repository => 'R',
        }
    }

    pub fn from_marker(marker: char) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.marker() == marker)
    }
}

/// A tagged node: an optional identifier, an optional scalar value and a map
/// from tag to the ordered records filed under it.
///
/// A record carrying an identifier but nothing the caller needs is a pointer
/// stub; the graph resolves it to the full record with that identifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawRecord")]
pub struct Record {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(flatten)]
    pub fields: BTreeMap<String, Vec<Record>>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pointer stub referencing another record.
    pub fn pointer(id: impl Into<RecordId>) -> Self {
        Self::new().with_id(id)
    }

    /// Create a leaf record holding a scalar value.
    pub fn text(value: impl Into<String>) -> Self {
        Self::new().with_value(value)
    }

    /// Set the identifier.
    pub fn with_id(mut self, id: impl Into<RecordId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the scalar value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Append a record under a tag.
    pub fn with_field(mut self, tag: impl Into<String>, record: Record) -> Self {
        self.fields.entry(tag.into()).or_default().push(record);
        self
    }

    /// Append a scalar leaf under a tag.
    pub fn with_text(self, tag: impl Into<String>, value: impl Into<String>) -> Self {
        self.with_field(tag, Record::text(value))
    }

    /// All records filed under a tag, in file order.
    pub fn field(&self, tag: &str) -> &[Record] {
        self.fields.get(tag).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// The first record filed under a tag.
    pub fn first(&self, tag: &str) -> Option<&Record> {
        self.field(tag).first()
    }

    /// Check if any record is filed under a tag.
    pub fn has(&self, tag: &str) -> bool {
        !self.field(tag).is_empty()
    }

    /// Scalar value of the first record under a tag.
    pub fn text_of(&self, tag: &str) -> Option<&str> {
        self.first(tag).and_then(|r| r.value.as_deref())
    }

    /// Source citations attached directly to this record.
    pub fn sources(&self) -> &[Record] {
        self.field("SOUR")
    }

    /// Check whether this record is only an identifier with no content.
    pub fn is_pointer(&self) -> bool {
        self.id.is_some() && self.value.is_none() && self.fields.is_empty()
    }
}

impl From<&str> for Record {
    fn from(value: &str) -> Self {
        Record::text(value)
    }
}

/// Wire shape accepted when deserializing: a tag may hold a bare string, a
/// single nested object, or an array of either.
#[derive(Deserialize)]
struct RawRecord {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    value: Option<String>,
    #[serde(flatten)]
    fields: BTreeMap<String, RawField>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawField {
    Text(String),
    Many(Vec<RawField>),
    One(RawRecord),
}

impl RawField {
    fn flatten_into(self, out: &mut Vec<Record>) {
        match self {
            RawField::Text(value) => out.push(Record::text(value)),
            RawField::One(raw) => out.push(raw.into()),
            RawField::Many(items) => {
                for item in items {
                    item.flatten_into(out);
                }
            }
        }
    }
}

impl From<RawRecord> for Record {
    fn from(raw: RawRecord) -> Self {
        let fields = raw
            .fields
            .into_iter()
            .map(|(tag, field)| {
                let mut records = Vec::new();
                field.flatten_into(&mut records);
                (tag, records)
            })
            .collect();
        Record {
            id: raw.id.map(RecordId),
            value: raw.value,
            fields,
        }
    }
}
