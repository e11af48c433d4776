//! Narrative sections and the finished biography document.

use record_graph::RecordId;
use serde::{Deserialize, Serialize};

use crate::locale::Locale;
use crate::references::Reference;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionKind {
    Introduction,
    PersonalFacts,
    Relationship,
    FinalDays,
}

/// One titled block of a biography.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrativeSection {
    pub kind: SectionKind,
    pub title: Option<String>,
    pub body: String,
}

impl NarrativeSection {
    pub fn new(kind: SectionKind, body: impl Into<String>) -> Self {
        Self {
            kind,
            title: None,
            body: body.into(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.body.trim().is_empty()
    }

    /// Wiki markup: the title in bold on its own line, then the body.
    pub fn to_text(&self) -> String {
        match &self.title {
            Some(title) => format!("'''{}'''\n{}", title, self.body),
            None => self.body.clone(),
        }
    }
}

/// A composed biography of one individual.
#[derive(Debug, Clone)]
pub struct Biography {
    pub individual: RecordId,
    pub locale: Locale,
    pub heading: String,
    pub sources_heading: String,
    pub sections: Vec<NarrativeSection>,
    /// Sources cited, in order of first use.
    pub references: Vec<Reference>,
}

impl Biography {
    pub fn section(&self, kind: SectionKind) -> Option<&NarrativeSection> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    /// The document as wiki markup. Citations are inline, so the sources
    /// section only needs the `<references />` placeholder.
    pub fn to_text(&self) -> String {
        let body = self
            .sections
            .iter()
            .map(NarrativeSection::to_text)
            .collect::<Vec<_>>()
            .join("\n\n");
        format!(
            "== {} ==\n{}\n\n== {} ==\n<references />",
            self.heading, body, self.sources_heading
        )
    }
}

impl std::fmt::Display for Biography {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_text() {
        let plain = NarrativeSection::new(SectionKind::Introduction, "Jan Vonk.");
        assert_eq!(plain.to_text(), "Jan Vonk.");

        let titled = NarrativeSection::new(SectionKind::FinalDays, "Jan died.").with_title("Final days");
        assert_eq!(titled.to_text(), "'''Final days'''\nJan died.");
        assert!(NarrativeSection::new(SectionKind::PersonalFacts, " \n").is_empty());
    }

    #[test]
    fn test_biography_layout() {
        let biography = Biography {
            individual: RecordId::new("@I1@"),
            locale: Locale::English,
            heading: "Biography".to_string(),
            sources_heading: "Sources".to_string(),
            sections: vec![
                NarrativeSection::new(SectionKind::Introduction, "Jan Vonk."),
                NarrativeSection::new(SectionKind::FinalDays, "Jan died.").with_title("Final days"),
            ],
            references: Vec::new(),
        };
        assert_eq!(
            biography.to_string(),
            "== Biography ==\nJan Vonk.\n\n'''Final days'''\nJan died.\n\n== Sources ==\n<references />"
        );
        assert!(biography.section(SectionKind::Relationship).is_none());
    }
}
