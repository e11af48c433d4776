//! End-to-end composition over a small three-generation family.

use biography_core::{
    build_index, BiographyComposer, BiographyConfig, BiographyError, Evaluator, Locale, SectionKind,
};
use record_graph::{GraphError, Record, RecordGraph, RecordId};
use serde_json::json;

fn family() -> RecordGraph {
    let registry = json!([{"id": "@S1@", "PAGE": "akte 12"}]);
    let graph = json!({
        "INDI": [
            {
                "id": "@I1@", "NAME": "Jan /Vonk/", "SEX": "M", "OCCU": "carpenter",
                "BIRT": {"DATE": "12 NOV 1900", "PLAC": "Leiden, Netherlands", "SOUR": registry},
                "DEAT": {"DATE": "3 MAR 1980", "PLAC": "Leiden, Netherlands", "SOUR": registry},
                "FAMC": {"id": "@F1@"}, "FAMS": {"id": "@F2@"}
            },
            {"id": "@I2@", "NAME": "Pieter /Vonk/", "SEX": "M", "OCCU": "farmer",
             "BIRT": {"DATE": "1870"}, "FAMS": {"id": "@F1@"}},
            {"id": "@I3@", "NAME": "Maria /Smit/", "SEX": "F", "FAMS": {"id": "@F1@"}},
            {"id": "@I4@", "NAME": "Anna /Vonk/", "SEX": "F",
             "BIRT": {"DATE": "5 JUL 1898"}, "FAMC": {"id": "@F1@"}},
            {"id": "@I5@", "NAME": "Kees /Vonk/", "SEX": "M",
             "BIRT": {"DATE": "1 JAN 1905"}, "FAMC": {"id": "@F1@"}},
            {"id": "@I6@", "NAME": "Grietje /Bos/", "SEX": "F",
             "BIRT": {"DATE": "1902"}, "FAMS": {"id": "@F2@"}},
            {"id": "@I7@", "NAME": "Klaas /Vonk/", "SEX": "M",
             "BIRT": {"DATE": "1930"}, "FAMC": {"id": "@F2@"}}
        ],
        "FAM": [
            {"id": "@F1@", "HUSB": {"id": "@I2@"}, "WIFE": {"id": "@I3@"},
             "CHIL": [{"id": "@I5@"}, {"id": "@I1@"}, {"id": "@I4@"}]},
            {"id": "@F2@", "HUSB": {"id": "@I1@"}, "WIFE": {"id": "@I6@"},
             "MARR": {"DATE": "12 MAY 1925", "PLAC": "Leiden, Netherlands"},
             "CHIL": [{"id": "@I7@"}]}
        ],
        "SOUR": [{"id": "@S1@", "TITL": "Civil registry Leiden", "REPO": {"id": "@R1@"}}],
        "REPO": [{"id": "@R1@", "NAME": "Erfgoed Leiden"}]
    });
    RecordGraph::from_json(&graph.to_string()).unwrap()
}

/// A composer that writes English whatever the places say.
fn english() -> BiographyComposer {
    BiographyComposer::new(BiographyConfig {
        locale_rules: Vec::new(),
        ..BiographyConfig::default()
    })
    .unwrap()
}

const FIRST_CITATION: &str =
    "<ref name=\"S1\">Civil registry Leiden accessed via Erfgoed Leiden.\n''akte 12''</ref>";

#[test]
fn test_birth_clause_needs_a_birth() {
    let graph = RecordGraph::new();
    let composer = english();
    let eval = Evaluator::new(&graph, composer.context(Locale::English));

    let born = Record::new().with_field("BIRT", Record::new().with_text("DATE", "12 NOV 2010"));
    assert_eq!(eval.evaluate(&born, " born [BIRT:us]", None).unwrap(), " born 12 Nov 2010");
    assert_eq!(eval.evaluate(&Record::new(), " born [BIRT:us]", None).unwrap(), "");
}

#[test]
fn test_compose_in_english() {
    let graph = family();
    let biography = english().compose(&graph, &RecordId::new("@I1@")).unwrap();
    assert_eq!(biography.locale, Locale::English);

    let intro = format!(
        "Jan Vonk born 12 Nov 1900 in Leiden{}. He is a son of Pieter Vonk (1870-), farmer and Maria Smit.\n\n\
         Siblings:\n\
         * sister, Anna, 2 years older.\n\
         * himself, Jan.\n\
         * brother, Kees, 4 years younger.",
        FIRST_CITATION
    );
    let expected = format!(
        "== Biography ==\n{}\n\n\
         '''Jan'''\nHe worked as carpenter.\n\n\
         '''Relationship with Grietje'''\n\
         Jan (24 years), married 12 May 1925 in Leiden with Grietje Bos (1902-).\n\n\
         Children of Jan and Grietje:\n\
         * son Klaas, born in 1930.\n\n\
         '''Final days'''\n\
         Jan died on 03 Mar 1980 in Leiden<ref name=\"S1\" />, at age 79 years.\n\n\
         == Sources ==\n<references />",
        intro
    );
    assert_eq!(biography.to_text(), expected);
    assert_eq!(biography.sections.len(), 4);
}

#[test]
fn test_compose_in_dutch() {
    let graph = family();
    let composer = BiographyComposer::with_defaults().unwrap();
    let biography = composer.compose(&graph, &RecordId::new("@I1@")).unwrap();
    assert_eq!(biography.locale, Locale::Dutch);

    let intro = &biography.section(SectionKind::Introduction).unwrap().body;
    assert!(intro.starts_with("Jan Vonk geboren 12 nov 1900 in Leiden<ref name=\"S1\">"));
    assert!(intro.contains("geraadpleegd via Erfgoed Leiden."));
    assert!(intro.contains(" Hij is een zoon van Pieter Vonk (1870-), farmer en Maria Smit."));
    assert!(intro.contains("Broers en zussen:\n* zus, Anna, 2 jaar ouder."));

    let text = biography.to_text();
    assert!(text.starts_with("== Biografie ==\n"));
    assert!(text.contains("'''Relatie met Grietje'''"));
    assert!(text.contains("'''Laatste dagen'''\nJan overleed op 03 mrt 1980 in Leiden"));
    assert!(text.ends_with("== Bronnen ==\n<references />"));
}

#[test]
fn test_citations_are_deduplicated_per_document() {
    let graph = family();
    let composer = english();
    let biography = composer.compose(&graph, &RecordId::new("@I1@")).unwrap();
    let text = biography.to_text();

    assert_eq!(biography.references.len(), 1);
    assert_eq!(biography.references[0].key, "S1");
    assert_eq!(biography.references[0].ordinal, 1);
    assert_eq!(text.matches(FIRST_CITATION).count(), 1);
    assert_eq!(text.matches("<ref name=\"S1\" />").count(), 1);

    // A second document starts with an empty collector.
    let again = composer.compose(&graph, &RecordId::new("@I1@")).unwrap();
    assert_eq!(again.to_text(), text);
}

#[test]
fn test_siblings_follow_birth_order() {
    let graph = family();
    let biography = english().compose(&graph, &RecordId::new("@I5@")).unwrap();
    let intro = &biography.section(SectionKind::Introduction).unwrap().body;

    let anna = intro.find("sister, Anna").unwrap();
    let jan = intro.find("brother, Jan").unwrap();
    let kees = intro.find("himself, Kees").unwrap();
    assert!(anna < jan && jan < kees);
}

#[test]
fn test_sparse_individual() {
    let graph = family();
    let biography = english().compose(&graph, &RecordId::new("@I3@")).unwrap();
    assert_eq!(biography.section(SectionKind::Introduction).unwrap().body, "Maria Smit.");
    assert!(biography.section(SectionKind::PersonalFacts).is_none());
    assert!(biography.section(SectionKind::FinalDays).is_none());
    assert!(biography.references.is_empty());
}

#[test]
fn test_diverging_selector_is_an_error() {
    let mut graph = family();
    graph
        .insert(
            Record::new()
                .with_id("@I9@")
                .with_text("NAME", "Twice /Born/")
                .with_field("BIRT", Record::new().with_text("DATE", "1900"))
                .with_field("BIRT", Record::new().with_text("DATE", "1901")),
        )
        .unwrap();

    let err = english().compose(&graph, &RecordId::new("@I9@")).unwrap_err();
    assert!(matches!(
        err,
        BiographyError::Graph(GraphError::SelectorDivergence { .. })
    ));
}

#[test]
fn test_compose_all_and_index() {
    let graph = family();
    let composer = english();
    assert_eq!(composer.compose_all(&graph).unwrap().len(), 7);

    let index = build_index(&graph, composer.context(Locale::English)).unwrap();
    let labels: Vec<&str> = index.iter().map(|entry| entry.label.as_str()).collect();
    assert_eq!(labels[0], "Bos, Grietje (1902-)");
    assert_eq!(labels[1], "Smit, Maria");
    assert!(labels.contains(&"Vonk, Jan (1900-1980)"));
}

/// Half siblings, a partner without a marriage, step-children, life events,
/// a burial without a death, and a cause of death.
fn household() -> RecordGraph {
    let graph = json!({
        "INDI": [
            {
                "id": "@I1@", "NAME": "Jan /Vonk/", "SEX": "M",
                "BIRT": {"DATE": "12 NOV 1900"},
                "EVEN": {"DATE": "1918", "PLAC": "Breda, Netherlands", "TYPE": "Military"},
                "RELI": {"value": "Catholic", "DATE": "1910", "SOUR": [{"id": "@S1@"}]},
                "BURI": {"DATE": "5 MAR 1980", "PLAC": "Leiden, Netherlands"},
                "FAMC": [{"id": "@F1@"}, {"id": "@F2@"}],
                "FAMS": {"id": "@F3@"}
            },
            {"id": "@I2@", "NAME": "Half /Vonk/", "SEX": "F",
             "BIRT": {"DATE": "STILLBORN"}, "FAMC": {"id": "@F2@"}},
            {"id": "@I3@", "NAME": "Grietje /Bos/", "SEX": "F",
             "BIRT": {"DATE": "1902"}, "FAMS": [{"id": "@F3@"}, {"id": "@F4@"}]},
            {"id": "@I4@", "NAME": "Other /Man/", "SEX": "M",
             "DEAT": {"DATE": "1921", "CAUS": "flu"}, "FAMS": {"id": "@F4@"}},
            {"id": "@I5@", "NAME": "Piet /Man/", "SEX": "M",
             "BIRT": {"DATE": "1922"}, "FAMC": {"id": "@F4@"}},
            {"id": "@I6@", "NAME": "Wim /Bos/", "SEX": "M",
             "CHR": {"DATE": "14 NOV 1903"}}
        ],
        "FAM": [
            {"id": "@F1@", "CHIL": {"id": "@I1@"}},
            {"id": "@F2@", "CHIL": {"id": "@I2@"}},
            {"id": "@F3@", "HUSB": {"id": "@I1@"}, "WIFE": {"id": "@I3@"},
             "DIV": {"DATE": "1950"}},
            {"id": "@F4@", "HUSB": {"id": "@I4@"}, "WIFE": {"id": "@I3@"},
             "MARR": {"DATE": "1919"}, "ANUL": {"DATE": "1920"},
             "CHIL": {"id": "@I5@"}}
        ],
        "SOUR": [{"id": "@S1@", "TITL": "Church book"}]
    });
    RecordGraph::from_json(&graph.to_string()).unwrap()
}

#[test]
fn test_household_document() {
    let graph = household();
    let biography = english().compose(&graph, &RecordId::new("@I1@")).unwrap();

    let expected = "== Biography ==\n\
        Jan Vonk born 12 Nov 1900.\n\n\
        Siblings:\n\
        * himself, Jan.\n\
        * half sister, Half, stillborn.\n\n\
        '''Jan'''\n\
        * ''military'', 1918 in Breda.\n\
        * ''religion'', 1910 Catholic<ref name=\"S1\">Church book\n</ref>.\n\n\
        '''Relationship with Grietje'''\n\
        Jan is in a relation, divorce 1950 with Grietje Bos (1902-).\n\n\
        Step-children:\n\
        * son Piet, born in 1922.\n\n\
        '''Final days'''\n\
        Jan was buried 05 Mar 1980 in Leiden.\n\n\
        == Sources ==\n<references />";
    assert_eq!(biography.to_text(), expected);
}

#[test]
fn test_life_event_lines() {
    let graph = household();
    let biography = english().compose(&graph, &RecordId::new("@I1@")).unwrap();
    let facts = biography.section(SectionKind::PersonalFacts).unwrap();

    assert_eq!(facts.title.as_deref(), Some("Jan"));
    let lines: Vec<&str> = facts.body.lines().collect();
    assert_eq!(lines[0], "* ''military'', 1918 in Breda.");
    assert_eq!(lines[1], "* ''religion'', 1910 Catholic<ref name=\"S1\">Church book");
    assert_eq!(biography.references.len(), 1);
}

#[test]
fn test_half_siblings_are_labelled() {
    let graph = household();
    let biography = english().compose(&graph, &RecordId::new("@I1@")).unwrap();
    let intro = &biography.section(SectionKind::Introduction).unwrap().body;
    assert!(intro.ends_with("\n* half sister, Half, stillborn."));
}

#[test]
fn test_relation_without_marriage_and_step_children() {
    let graph = household();
    let biography = english().compose(&graph, &RecordId::new("@I1@")).unwrap();
    let relationship = biography.section(SectionKind::Relationship).unwrap();

    assert_eq!(relationship.title.as_deref(), Some("Relationship with Grietje"));
    assert_eq!(
        relationship.body,
        "Jan is in a relation, divorce 1950 with Grietje Bos (1902-).\n\n\
         Step-children:\n* son Piet, born in 1922."
    );
}

#[test]
fn test_burial_stands_in_for_death() {
    let graph = household();
    let biography = english().compose(&graph, &RecordId::new("@I1@")).unwrap();
    let final_days = biography.section(SectionKind::FinalDays).unwrap();
    assert_eq!(final_days.body, "Jan was buried 05 Mar 1980 in Leiden.");
}

#[test]
fn test_annulment_and_cause_of_death() {
    let graph = household();
    let biography = english().compose(&graph, &RecordId::new("@I4@")).unwrap();

    let expected = "== Biography ==\n\
        Other Man.\n\n\
        '''Relationship with Grietje'''\n\
        Other, married 1919, annulment 1920 with Grietje Bos (1902-).\n\n\
        Children of Other and Grietje:\n\
        * son Piet, born in 1922.\n\n\
        '''Final days'''\n\
        Other died on 1921 due to flu.\n\n\
        == Sources ==\n<references />";
    assert_eq!(biography.to_text(), expected);
}

#[test]
fn test_christening_counts_as_baptism() {
    let graph = household();
    let composer = english();
    let biography = composer.compose(&graph, &RecordId::new("@I6@")).unwrap();
    assert_eq!(
        biography.section(SectionKind::Introduction).unwrap().body,
        "Wim Bos baptized 14-11-1903."
    );

    let index = build_index(&graph, composer.context(Locale::English)).unwrap();
    assert!(index.iter().any(|entry| entry.label == "Bos, Wim (1903-)"));
}
