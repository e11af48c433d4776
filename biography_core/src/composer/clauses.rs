//! Introduction, relationship and final-days clauses.

use record_graph::Record;

use super::{baptism_tag, event_date, reference_birth, NarrativeSection, Narrator, SectionKind, BAPTISM_TAGS};
use crate::date::{age_at, Qualifier};
use crate::error::Result;
use crate::template::Evaluator;

/// How a death clause is phrased.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeathStyle {
    /// `Jan died on 3 Mar 1980 in Leiden, at age 80 years due to ...`
    Long,
    /// `, died at age 80 years`, appended to a list entry.
    Short,
}

/// ` (1900-1980)` from birth (or baptism) and death years; empty when
/// neither is known.
pub fn life_span(eval: &Evaluator<'_>, individual: &Record) -> Result<String> {
    let mut birth = eval.evaluate(individual, "[BIRT.DATE:year]", None)?;
    for tag in BAPTISM_TAGS {
        if !birth.is_empty() {
            break;
        }
        birth = eval.evaluate(individual, &format!("[{}.DATE:year]", tag), None)?;
    }
    let death = eval.evaluate(individual, "[DEAT.DATE:year]", None)?;
    if birth.is_empty() && death.is_empty() {
        return Ok(String::new());
    }
    Ok(format!(" ({}-{})", birth, death))
}

impl<'a> Narrator<'a> {
    /// Name, birth and parentage, then the siblings.
    pub(super) fn introduction(&mut self, eval: &Evaluator<'_>, individual: &'a Record) -> Result<String> {
        let mut text = self.birth_clause(eval, individual)?;
        text.push('.');
        text.push_str(&self.parentage(eval, individual)?);

        let families = self.related(individual, "FAMC")?;
        if !families.is_empty() {
            let mut lines = Vec::new();
            for family in families {
                lines.extend(self.siblings(eval, individual, family)?);
            }
            if !lines.is_empty() {
                text.push_str(&format!("\n\n{}:", eval.tr("Siblings")));
                for line in lines {
                    text.push_str(&format!("\n* {}.", line));
                }
            }
        }
        Ok(text)
    }

    /// `Jan Vonk born 12 Nov 1900 in Leiden and baptized 14-11-1900`.
    fn birth_clause(&mut self, eval: &Evaluator<'_>, individual: &Record) -> Result<String> {
        let born = !self.plain(eval, individual, "[BIRT.DATE:year]")?.is_empty();
        let mut baptism = None;
        if let Some(tag) = baptism_tag(individual) {
            if !self.plain(eval, individual, &format!("[{}.DATE:year]", tag))?.is_empty() {
                baptism = Some(tag);
            }
        }
        let baptized = baptism.is_some();

        let mut text = self.cite(eval, individual, "[NAME:full]")?;
        if born {
            text.push_str(&self.cite(eval, individual, " born [BIRT:us]")?);
        }
        if born && baptized {
            text.push_str(&format!(" {}", eval.tr("and")));
        }
        if let Some(tag) = baptism {
            text.push_str(&self.cite(eval, individual, &format!(" baptized [{}:world]", tag))?);
        }
        Ok(text)
    }

    /// ` He is a son of Jan Vonk (1870-1940), carpenter and Maria Smit.`
    fn parentage(&mut self, eval: &Evaluator<'_>, person: &'a Record) -> Result<String> {
        let mut parents = String::new();
        for family in self.related(person, "FAMC")? {
            let father = self.related(family, "HUSB")?.first().copied();
            let mother = self.related(family, "WIFE")?.first().copied();
            if let Some(father) = father {
                parents.push_str(&self.parent(eval, father)?);
            }
            if father.is_some() && mother.is_some() {
                parents.push_str(&format!(" {}", eval.tr("and")));
            }
            if let Some(mother) = mother {
                parents.push_str(&self.parent(eval, mother)?);
            }
        }
        if parents.is_empty() {
            return Ok(parents);
        }
        let lead = self.cite(eval, person, " [SEX:Pronoun]| is a [SEX:child] of")?;
        Ok(format!("{}{}.", lead, parents))
    }

    fn parent(&mut self, eval: &Evaluator<'_>, parent: &Record) -> Result<String> {
        let mut text = self.cite(eval, parent, " [NAME:full]")?;
        text.push_str(&life_span(eval, parent)?);
        text.push_str(&self.cite(eval, parent, ", [OCCU]| from [BIRT.PLAC]")?);
        Ok(text)
    }

    /// One list entry per child of a parental family, the individual included.
    /// Children of a family that does not list the individual are half
    /// siblings.
    fn siblings(&mut self, eval: &Evaluator<'_>, individual: &Record, family: &'a Record) -> Result<Vec<String>> {
        let children = self.related(family, "CHIL")?;
        let half = !children.iter().any(|child| child.id.is_some() && child.id == individual.id);
        let mut lines = Vec::new();
        for sibling in self.by_birth_date(eval, children)? {
            if sibling.id.is_some() && sibling.id == individual.id {
                lines.push(self.cite(eval, sibling, "[SEX:reflexive]|, [NAME:givenaka]")?);
                continue;
            }
            let mut line = String::new();
            if half {
                line.push_str(&eval.tr("half"));
                line.push(' ');
            }
            line.push_str(&self.cite(eval, sibling, "[SEX:sibling]|, [NAME:givenaka]")?);
            line.push_str(&self.age_difference(eval, sibling)?);
            line.push_str(&self.cite(eval, sibling, ", [OCCU]")?);
            let own = eval.with_birth(reference_birth(sibling));
            line.push_str(&self.death(&own, sibling, DeathStyle::Short)?);
            lines.push(line);
        }
        Ok(lines)
    }

    /// `, 3 years older` relative to the individual's birth, or the sibling's
    /// own birth or baptism date when no difference can be computed.
    fn age_difference(&mut self, eval: &Evaluator<'_>, sibling: &Record) -> Result<String> {
        let difference = match (&eval.context().birth, reference_birth(sibling)) {
            (Some(own), Some(theirs)) if theirs.qualifier != Qualifier::Stillborn => age_at(own, &theirs).ok(),
            _ => None,
        };
        if let Some(age) = difference.filter(|age| age.is_known()) {
            let relation = if age.is_negative() { "older" } else { "younger" };
            return Ok(format!(", {} {}", age.abs().render(eval.context()), eval.tr(relation)));
        }

        if event_date(sibling, "BIRT").is_some_and(|d| d.qualifier == Qualifier::Stillborn) {
            return Ok(format!(", {}", eval.tr("stillborn")));
        }
        let born = self.plain(eval, sibling, "[BIRT.DATE:world]")?;
        if !born.is_empty() {
            return Ok(format!(", {} {}", eval.tr("born"), born));
        }
        let baptized = match baptism_tag(sibling) {
            Some(tag) => self.plain(eval, sibling, &format!("[{}.DATE:world]", tag))?,
            None => String::new(),
        };
        if !baptized.is_empty() {
            return Ok(format!(", {} {}", eval.tr("baptized"), baptized));
        }
        Ok(String::new())
    }

    /// Death phrased for `person`; `eval` must measure ages from that
    /// person's own birth.
    fn death(&mut self, eval: &Evaluator<'_>, person: &Record, style: DeathStyle) -> Result<String> {
        if !person.has("DEAT") {
            return Ok(String::new());
        }
        let stillborn = event_date(person, "DEAT").is_some_and(|d| d.qualifier == Qualifier::Stillborn);
        let age = match &eval.context().birth {
            Some(birth) if !birth.is_empty() => self.plain(eval, person, "[DEAT.DATE:age]")?,
            _ => String::new(),
        };
        let age_phrase = |lead: &str| {
            if stillborn {
                eval.tr("stillborn")
            } else {
                format!("{} {}", eval.tr(lead), age)
            }
        };

        match style {
            DeathStyle::Short => {
                if !age.is_empty() {
                    return Ok(format!(", {}", age_phrase("died at age")));
                }
                let date = self.plain(eval, person, "[DEAT.DATE:world]")?;
                if date.is_empty() {
                    return Ok(String::new());
                }
                Ok(if stillborn {
                    format!(", {}", date)
                } else {
                    format!(", {} {}", eval.tr("died on"), date)
                })
            }
            DeathStyle::Long => {
                let died = self.cite(eval, person, " died on [DEAT:us]")?;
                let cause = self.cite(eval, person, " due to [DEAT.CAUS]")?;
                if died.is_empty() && cause.is_empty() {
                    return Ok(String::new());
                }
                let mut text = self.plain(eval, person, "[NAME:first]")?;
                text.push_str(&died);
                if !age.is_empty() {
                    text.push_str(&format!(", {}", age_phrase("at age")));
                }
                text.push_str(&cause);
                Ok(text)
            }
        }
    }

    /// One section per family the individual is a spouse in.
    pub(super) fn relationships(
        &mut self,
        eval: &Evaluator<'_>,
        individual: &'a Record,
    ) -> Result<Vec<NarrativeSection>> {
        let mut sections = Vec::new();
        for family in self.related(individual, "FAMS")? {
            let spouse = self.graph.spouse(family, individual)?;
            let mut spouse_name = eval.evaluate_opt(spouse, "[NAME:first]", None)?;
            if spouse_name.is_empty() {
                spouse_name = eval.tr("unknown partner");
            }

            let mut paragraphs = Vec::new();
            if let Some(spouse) = spouse {
                let mut partner = self.marriages(eval, family)?;
                partner.push_str(&self.separations(eval, family)?);
                partner.push_str(&self.spouse_details(eval, spouse)?);
                let name = self.plain(eval, individual, "[NAME:first]")?;
                paragraphs.push(format!("{}{}", name, partner));
            }

            let children = self.children_list(eval, family, individual)?;
            if !children.is_empty() {
                let mut heading = self.plain(eval, individual, "Children of [NAME:first]")?;
                heading.push_str(&eval.evaluate_opt(spouse, " and [NAME:first]", None)?);
                paragraphs.push(format!("{}:{}", heading, children));
            }

            if let Some(spouse) = spouse {
                let step_children = self.step_children(eval, family, spouse, individual)?;
                if !step_children.is_empty() {
                    paragraphs.push(format!("{}:{}", eval.tr("Step-children"), step_children));
                }
            }

            if paragraphs.is_empty() {
                continue;
            }
            let title = format!("{} {}", eval.tr("Relationship with"), spouse_name);
            sections.push(NarrativeSection::new(SectionKind::Relationship, paragraphs.join("\n\n")).with_title(title));
        }
        Ok(sections)
    }

    /// ` (25 years), married 12 May 1925 in Leiden` per marriage event, or
    /// ` is in a relation` when the family records none.
    fn marriages(&mut self, eval: &Evaluator<'_>, family: &'a Record) -> Result<String> {
        let mut text = String::new();
        for marriage in self.related(family, "MARR")? {
            text.push_str(&self.cite(eval, marriage, " ([DATE:age])|, married [DATE]| in [PLAC]")?);
        }
        if text.is_empty() {
            text = format!(" {}", eval.tr("is in a relation"));
        }
        Ok(text)
    }

    /// `, divorce 1950` and `, annulment 1951`.
    fn separations(&mut self, eval: &Evaluator<'_>, family: &'a Record) -> Result<String> {
        let mut text = String::new();
        for (tag, word) in [("DIV", "divorce"), ("ANUL", "annulment")] {
            for event in self.related(family, tag)? {
                text.push_str(&self.cite(eval, event, &format!(", {} [DATE]", word))?);
            }
        }
        Ok(text)
    }

    /// ` with Maria Smit from Tholen, seamstress.` followed by the spouse's
    /// parentage and death, with ages measured from the spouse's birth.
    fn spouse_details(&mut self, eval: &Evaluator<'_>, spouse: &'a Record) -> Result<String> {
        let spouse_eval = eval.with_birth(reference_birth(spouse));
        let mut text = self.cite(&spouse_eval, spouse, " with [NAME:full]")?;
        text.push_str(&life_span(&spouse_eval, spouse)?);
        text.push_str(&self.cite(&spouse_eval, spouse, " from [BIRT.PLAC]|, [OCCU]")?);
        text.push('.');
        text.push_str(&self.parentage(&spouse_eval, spouse)?);
        let death = self.death(&spouse_eval, spouse, DeathStyle::Long)?;
        if !death.is_empty() {
            text.push_str(&format!(" {}.", death));
        }
        Ok(text)
    }

    /// Bulleted children of a family, oldest first.
    fn children_list(&mut self, eval: &Evaluator<'_>, family: &'a Record, individual: &Record) -> Result<String> {
        let children: Vec<&Record> = self
            .related(family, "CHIL")?
            .into_iter()
            .filter(|child| child.id.is_none() || child.id != individual.id)
            .collect();
        let mut text = String::new();
        for child in self.by_birth_date(eval, children)? {
            text.push_str(&format!("\n* {}.", self.child(eval, child)?));
        }
        Ok(text)
    }

    /// Children the spouse had in other families.
    fn step_children(
        &mut self,
        eval: &Evaluator<'_>,
        family: &Record,
        spouse: &'a Record,
        individual: &Record,
    ) -> Result<String> {
        let mut text = String::new();
        for other in self.related(spouse, "FAMS")? {
            if other.id.is_some() && other.id == family.id {
                continue;
            }
            text.push_str(&self.children_list(eval, other, individual)?);
        }
        Ok(text)
    }

    /// `son Kees, born in 1930, farmer, died at age 70 years`.
    fn child(&mut self, eval: &Evaluator<'_>, child: &Record) -> Result<String> {
        let mut text = self.cite(eval, child, "[SEX:child]| [NAME:givenaka]")?;
        let year = self.plain(eval, child, "[BIRT.DATE:year]")?;
        if !year.is_empty() {
            let plain = year.split('-').all(|part| part.chars().all(|c| c.is_ascii_digit()));
            if plain {
                text.push_str(&format!(", {} {}", eval.tr("born in"), year));
            } else if event_date(child, "BIRT").is_some_and(|d| d.qualifier == Qualifier::Stillborn) {
                text.push_str(&format!(", {}", year));
            } else {
                text.push_str(&format!(", {} {}", eval.tr("born"), year));
            }
        }
        text.push_str(&self.cite(eval, child, ", [OCCU]")?);
        let own = eval.with_birth(reference_birth(child));
        text.push_str(&self.death(&own, child, DeathStyle::Short)?);
        Ok(text)
    }

    /// Death of the individual, or the burial when no death is recorded.
    pub(super) fn final_days(&mut self, eval: &Evaluator<'_>, individual: &'a Record) -> Result<Option<NarrativeSection>> {
        let mut text = self.death(eval, individual, DeathStyle::Long)?;
        if text.is_empty() && !individual.has("DEAT") {
            let buried = self.cite(eval, individual, " was buried [BURI:us]")?;
            if !buried.is_empty() {
                text = format!("{}{}", self.plain(eval, individual, "[NAME:first]")?, buried);
            }
        }
        if text.is_empty() {
            return Ok(None);
        }
        text.push('.');
        Ok(Some(
            NarrativeSection::new(SectionKind::FinalDays, text).with_title(eval.tr("Final days")),
        ))
    }
}
