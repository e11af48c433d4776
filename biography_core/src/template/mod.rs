//! Template Fragment Evaluator - conditional prose from field references.
//!
//! A template is a `|`-separated list of fragments. A fragment holds at most
//! one field reference in brackets, with literal text around it:
//!
//! ```text
//! [NAME:full]| born [BIRT:us]| in [BIRT.PLAC]
//! ```
//!
//! A fragment whose field resolves to nothing is dropped whole, literals
//! included, so one template can describe several optional clauses. Literal
//! text is localized with its leading and trailing punctuation left alone.

use record_graph::{Record, RecordGraph, Selector};

use crate::context::RenderContext;
use crate::date::{DateFormat, QualifiedDate};
use crate::error::Result;
use crate::format::{parse_format, FieldKind, PersonName, Sex, SexFormat};
use crate::references::ReferenceCollector;

/// One `|`-delimited unit of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub pre: String,
    pub selector: Option<Selector>,
    pub post: String,
}

impl Fragment {
    /// Split on the first `[` and the `]` after it. Without a bracket pair
    /// the whole fragment is literal.
    pub fn parse(text: &str) -> Self {
        let bracketed = text.split_once('[').and_then(|(pre, rest)| {
            let (field, post) = rest.split_once(']')?;
            Some((pre, field, post))
        });
        match bracketed {
            Some((pre, field, post)) => Self {
                pre: pre.to_string(),
                selector: Some(Selector::parse(field)),
                post: post.to_string(),
            },
            None => Self {
                pre: text.to_string(),
                selector: None,
                post: String::new(),
            },
        }
    }

    pub fn is_literal(&self) -> bool {
        self.selector.is_none()
    }
}

/// A parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    fragments: Vec<Fragment>,
}

impl Template {
    pub fn parse(text: &str) -> Self {
        Self {
            fragments: text.split('|').map(Fragment::parse).collect(),
        }
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }
}

/// Localize the interior of a literal, keeping the non-word characters that
/// surround it.
pub fn localize_literal(ctx: &RenderContext<'_>, literal: &str) -> String {
    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    let Some(start) = literal.find(is_word) else {
        return literal.to_string();
    };
    let end = literal
        .rfind(is_word)
        .map(|idx| idx + literal[idx..].chars().next().map_or(1, char::len_utf8))
        .unwrap_or(literal.len());
    format!(
        "{}{}{}",
        &literal[..start],
        ctx.tr(&literal[start..end]),
        &literal[end..]
    )
}

/// Evaluates templates against records of one graph.
#[derive(Debug, Clone)]
pub struct Evaluator<'a> {
    graph: &'a RecordGraph,
    ctx: RenderContext<'a>,
}

impl<'a> Evaluator<'a> {
    pub fn new(graph: &'a RecordGraph, ctx: RenderContext<'a>) -> Self {
        Self { graph, ctx }
    }

    pub fn graph(&self) -> &'a RecordGraph {
        self.graph
    }

    pub fn context(&self) -> &RenderContext<'a> {
        &self.ctx
    }

    /// An evaluator measuring ages from another birth date.
    pub fn with_birth(&self, birth: Option<QualifiedDate>) -> Self {
        Self {
            graph: self.graph,
            ctx: self.ctx.with_birth(birth),
        }
    }

    /// Localize a phrase in this evaluator's locale.
    pub fn tr(&self, phrase: &str) -> String {
        self.ctx.tr(phrase)
    }

    /// Evaluate a template against a record. Citations for every emitted
    /// field go to `refs` when given.
    pub fn evaluate(
        &self,
        record: &Record,
        template: &str,
        mut refs: Option<&mut ReferenceCollector>,
    ) -> Result<String> {
        let mut out = String::new();
        for fragment in Template::parse(template).fragments() {
            let Some(selector) = &fragment.selector else {
                out.push_str(&fragment.pre);
                continue;
            };
            let values = self.graph.by_path(record, selector)?;
            if values.is_empty() {
                continue;
            }
            let text = self.render_field(&values, selector, refs.as_deref_mut())?;
            if text.is_empty() {
                continue;
            }
            out.push_str(&localize_literal(&self.ctx, &fragment.pre));
            out.push_str(&text);
            out.push_str(&localize_literal(&self.ctx, &fragment.post));
        }
        Ok(out)
    }

    /// Like [`Evaluator::evaluate`], yielding an empty string without a record.
    pub fn evaluate_opt(
        &self,
        record: Option<&Record>,
        template: &str,
        refs: Option<&mut ReferenceCollector>,
    ) -> Result<String> {
        match record {
            Some(record) => self.evaluate(record, template, refs),
            None => Ok(String::new()),
        }
    }

    /// Render resolved values by the kind of their final tag, then append the
    /// citations of the first value.
    fn render_field(
        &self,
        values: &[&Record],
        selector: &Selector,
        mut refs: Option<&mut ReferenceCollector>,
    ) -> Result<String> {
        let Some(first) = values.first() else {
            return Ok(String::new());
        };
        let value = first.value.as_deref().unwrap_or_default();
        let format = selector.format();
        let kind = selector.last_tag().map(FieldKind::from_tag).unwrap_or(FieldKind::Text);

        let mut text = match kind {
            FieldKind::Name => PersonName::from_records(values)
                .map(|name| name.render(parse_format(format)))
                .unwrap_or_default(),
            FieldKind::Sex => match format {
                None => value.to_string(),
                Some(_) => {
                    let words: SexFormat = parse_format(format);
                    self.ctx.tr(words.word(Sex::from_code(value)))
                }
            },
            FieldKind::Place => self.ctx.places.format(value, parse_format(format)),
            FieldKind::Date => {
                let date_format: DateFormat = parse_format(format);
                QualifiedDate::parse(value).render(&self.ctx, date_format)
            }
            FieldKind::Event => {
                let template = format!("[DATE:{}]| in [PLAC]", format.unwrap_or("us"));
                self.evaluate(first, &template, refs.as_deref_mut())?
            }
            FieldKind::Text => value.to_string(),
        };

        if !text.is_empty() {
            if let Some(refs) = refs {
                text.push_str(&refs.add(self.graph, &self.ctx, first.sources())?);
            }
        }
        Ok(text)
    }
}
