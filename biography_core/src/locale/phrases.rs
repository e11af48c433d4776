//! Built-in phrase tables, keyed by the English phrase.

pub(super) const DUTCH: &[(&str, &str)] = &[
    // qualifiers and ranges
    ("about", "ongeveer"),
    ("before", "voor"),
    ("after", "na"),
    ("between", "tussen"),
    ("and", "en"),
    ("stillborn", "doodgeboren"),
    // intervals
    ("day", "dag"),
    ("days", "dagen"),
    ("month", "maand"),
    ("months", "maanden"),
    ("year", "jaar"),
    ("years", "jaar"),
    ("at least", "minstens"),
    ("at most", "hoogstens"),
    ("birth date is not exact", "geboortedatum is niet exact"),
    // months
    ("Jan", "jan"),
    ("Feb", "feb"),
    ("Mar", "mrt"),
    ("Apr", "apr"),
    ("May", "mei"),
    ("Jun", "jun"),
    ("Jul", "jul"),
    ("Aug", "aug"),
    ("Sep", "sep"),
    ("Oct", "okt"),
    ("Nov", "nov"),
    ("Dec", "dec"),
    // sex words
    ("male", "man"),
    ("female", "vrouw"),
    ("unknown", "onbekend"),
    ("Male", "Man"),
    ("Female", "Vrouw"),
    ("Unknown", "Onbekend"),
    ("son", "zoon"),
    ("daughter", "dochter"),
    ("child", "kind"),
    ("brother", "broer"),
    ("sister", "zus"),
    ("sibling", "broer/zus"),
    ("he", "hij"),
    ("she", "zij"),
    ("they", "hij/zij"),
    ("He", "Hij"),
    ("She", "Zij"),
    ("They", "Hij/Zij"),
    ("him", "hem"),
    ("her", "haar"),
    ("them", "hem/haar"),
    ("himself", "zichzelf"),
    ("herself", "zichzelf"),
    ("themself", "zichzelf"),
    // narrative phrases
    ("born", "geboren"),
    ("born in", "geboren in"),
    ("baptized", "gedoopt"),
    ("is a", "is een"),
    ("of", "van"),
    ("in", "in"),
    ("worked as", "werkte als"),
    ("died on", "overleed op"),
    ("at age", "op de leeftijd van"),
    ("died at age", "overleed op de leeftijd van"),
    ("due to", "als gevolg van"),
    ("was buried", "werd begraven"),
    ("married", "getrouwd"),
    ("divorce", "scheiding"),
    ("annulment", "nietigverklaring"),
    ("is in a relation", "heeft een relatie"),
    ("with", "met"),
    ("from", "uit"),
    ("Children of", "Kinderen van"),
    ("Step-children", "Stiefkinderen"),
    ("Relationship with", "Relatie met"),
    ("unknown partner", "onbekende partner"),
    ("Siblings", "Broers en zussen"),
    ("half", "half"),
    ("older", "ouder"),
    ("younger", "jonger"),
    ("Biography", "Biografie"),
    ("Sources", "Bronnen"),
    ("Final days", "Laatste dagen"),
    ("accessed via", "geraadpleegd via"),
    ("reliability", "betrouwbaarheid"),
    // life events
    ("address", "adres"),
    ("event", "gebeurtenis"),
    ("adoption", "adoptie"),
    ("arrival", "aankomst"),
    ("departure", "vertrek"),
    ("physical description", "beschrijving"),
    ("education", "opleiding"),
    ("emigration", "emigratie"),
    ("engagement", "verloving"),
    ("graduation", "afstuderen"),
    ("immigration", "immigratie"),
    ("loan", "lening"),
    ("naturalization", "naturalisatie"),
    ("religion", "religie"),
];

pub(super) const GERMAN: &[(&str, &str)] = &[
    ("about", "etwa"),
    ("before", "vor"),
    ("after", "nach"),
    ("between", "zwischen"),
    ("and", "und"),
    ("stillborn", "totgeboren"),
    ("day", "Tag"),
    ("days", "Tage"),
    ("month", "Monat"),
    ("months", "Monate"),
    ("year", "Jahr"),
    ("years", "Jahre"),
    ("at least", "mindestens"),
    ("at most", "höchstens"),
    ("birth date is not exact", "Geburtsdatum ist nicht genau"),
    ("Mar", "Mär"),
    ("May", "Mai"),
    ("Oct", "Okt"),
    ("Dec", "Dez"),
    ("male", "männlich"),
    ("female", "weiblich"),
    ("unknown", "unbekannt"),
    ("Male", "Männlich"),
    ("Female", "Weiblich"),
    ("Unknown", "Unbekannt"),
    ("son", "Sohn"),
    ("daughter", "Tochter"),
    ("child", "Kind"),
    ("brother", "Bruder"),
    ("sister", "Schwester"),
    ("sibling", "Geschwister"),
    ("he", "er"),
    ("she", "sie"),
    ("they", "er/sie"),
    ("He", "Er"),
    ("She", "Sie"),
    ("They", "Er/Sie"),
    ("him", "ihn"),
    ("her", "sie"),
    ("them", "ihn/sie"),
    ("himself", "sich selbst"),
    ("herself", "sich selbst"),
    ("themself", "sich selbst"),
    ("born", "geboren"),
    ("born in", "geboren in"),
    ("baptized", "getauft"),
    ("is a", "ist ein"),
    ("of", "von"),
    ("in", "in"),
    ("worked as", "arbeitete als"),
    ("died on", "starb am"),
    ("at age", "im Alter von"),
    ("died at age", "starb im Alter von"),
    ("due to", "an"),
    ("was buried", "wurde begraben"),
    ("married", "verheiratet"),
    ("divorce", "Scheidung"),
    ("annulment", "Annullierung"),
    ("is in a relation", "ist in einer Beziehung"),
    ("with", "mit"),
    ("from", "aus"),
    ("Children of", "Kinder von"),
    ("Step-children", "Stiefkinder"),
    ("Relationship with", "Beziehung mit"),
    ("unknown partner", "unbekannter Partner"),
    ("Siblings", "Geschwister"),
    ("half", "Halb"),
    ("older", "älter"),
    ("younger", "jünger"),
    ("Biography", "Biographie"),
    ("Sources", "Quellen"),
    ("Final days", "Letzte Tage"),
    ("accessed via", "abgerufen über"),
    ("reliability", "Zuverlässigkeit"),
    ("address", "Adresse"),
    ("event", "Ereignis"),
    ("adoption", "Adoption"),
    ("arrival", "Ankunft"),
    ("departure", "Abreise"),
    ("physical description", "Beschreibung"),
    ("education", "Ausbildung"),
    ("emigration", "Auswanderung"),
    ("engagement", "Verlobung"),
    ("graduation", "Abschluss"),
    ("immigration", "Einwanderung"),
    ("loan", "Darlehen"),
    ("naturalization", "Einbürgerung"),
    ("religion", "Religion"),
];
