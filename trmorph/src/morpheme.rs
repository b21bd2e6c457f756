//! The morpheme catalogue: a fixed, finite set of roots/suffixes declared
//! once. Grounded in `zeyrek/morphotactics.py`'s `add_morpheme(...)` table
//! and `zeyrek/attributes.py::PrimaryPos`/`SecondaryPos`.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimaryPos {
    Noun,
    Adjective,
    Adverb,
    Conjunction,
    Interjection,
    Verb,
    Pronoun,
    Numeral,
    Determiner,
    PostPositive,
    Question,
    Duplicator,
    Punctuation,
    Unknown,
}

impl PrimaryPos {
    pub fn as_str(&self) -> &'static str {
        use PrimaryPos::*;
        match self {
            Noun => "Noun",
            Adjective => "Adj",
            Adverb => "Adv",
            Conjunction => "Conj",
            Interjection => "Interj",
            Verb => "Verb",
            Pronoun => "Pron",
            Numeral => "Num",
            Determiner => "Det",
            PostPositive => "Postp",
            Question => "Ques",
            Duplicator => "Dup",
            Punctuation => "Punc",
            Unknown => "Unk",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecondaryPos {
    None_,
    ProperNoun,
    PersonalPron,
    DemonstrativePron,
    QuestionPron,
    ReflexivePron,
    QuantitivePron,
    Abbreviation,
    Time,
}

impl SecondaryPos {
    pub fn as_str(&self) -> &'static str {
        use SecondaryPos::*;
        match self {
            None_ => "",
            ProperNoun => "Prop",
            PersonalPron => "Pers",
            DemonstrativePron => "Demons",
            QuestionPron => "Ques",
            ReflexivePron => "Reflex",
            QuantitivePron => "Quant",
            Abbreviation => "Abbrv",
            Time => "Time",
        }
    }
}

/// A minimal meaning-bearing unit: root or suffix. Identity by `id`.
#[derive(Debug, Clone, Copy)]
pub struct Morpheme {
    pub name: &'static str,
    pub id: &'static str,
    pub pos: Option<PrimaryPos>,
    pub derivational: bool,
    pub informal: bool,
}

impl PartialEq for Morpheme {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl Eq for Morpheme {}
impl std::hash::Hash for Morpheme {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state)
    }
}

const fn m(name: &'static str, id: &'static str) -> Morpheme {
    Morpheme {
        name,
        id,
        pos: None,
        derivational: false,
        informal: false,
    }
}

const fn pos_root(name: &'static str, id: &'static str, pos: PrimaryPos) -> Morpheme {
    Morpheme {
        name,
        id,
        pos: Some(pos),
        derivational: false,
        informal: false,
    }
}

const fn deriv(name: &'static str, id: &'static str) -> Morpheme {
    Morpheme {
        name,
        id,
        pos: None,
        derivational: false,
        informal: false,
    }
}

const fn deriv_to(name: &'static str, id: &'static str, pos: PrimaryPos) -> Morpheme {
    Morpheme {
        name,
        id,
        pos: Some(pos),
        derivational: true,
        informal: false,
    }
}

pub mod morphemes {
    use super::*;
    use PrimaryPos::*;

    // primary-pos-bearing roots
    pub const NOUN: Morpheme = pos_root("Noun", "Noun", Noun);
    pub const ADJ: Morpheme = pos_root("Adjective", "Adj", Adjective);
    pub const VERB: Morpheme = pos_root("Verb", "Verb", Verb);
    pub const PRON: Morpheme = pos_root("Pronoun", "Pron", Pronoun);
    pub const ADV: Morpheme = pos_root("Adverb", "Adv", Adverb);
    pub const PUNC: Morpheme = pos_root("Punctuation", "Punc", Punctuation);

    // agreement
    pub const A1SG: Morpheme = m("A1sg", "A1sg");
    pub const A2SG: Morpheme = m("A2sg", "A2sg");
    pub const A3SG: Morpheme = m("A3sg", "A3sg");
    pub const A1PL: Morpheme = m("A1pl", "A1pl");
    pub const A2PL: Morpheme = m("A2pl", "A2pl");
    pub const A3PL: Morpheme = m("A3pl", "A3pl");

    // possessive (dropped from printed morphemes when Pnon/nom, per spec.md §4.5)
    pub const PNON: Morpheme = m("Pnon", "Pnon");
    pub const P1SG: Morpheme = m("P1sg", "P1sg");
    pub const P2SG: Morpheme = m("P2sg", "P2sg");
    pub const P3SG: Morpheme = m("P3sg", "P3sg");
    pub const P1PL: Morpheme = m("P1pl", "P1pl");
    pub const P2PL: Morpheme = m("P2pl", "P2pl");
    pub const P3PL: Morpheme = m("P3pl", "P3pl");

    // case
    pub const NOM: Morpheme = m("Nom", "Nom");
    pub const DAT: Morpheme = m("Dat", "Dat");
    pub const ACC: Morpheme = m("Acc", "Acc");
    pub const ABL: Morpheme = m("Abl", "Abl");
    pub const LOC: Morpheme = m("Loc", "Loc");
    pub const INS: Morpheme = m("Ins", "Ins");
    pub const GEN: Morpheme = m("Gen", "Gen");
    pub const EQU: Morpheme = m("Equ", "Equ");

    // nominal derivation
    pub const BECOME: Morpheme = deriv_to("Become", "Become", Verb);
    pub const ACQUIRE: Morpheme = deriv_to("Acquire", "Acquire", Verb);
    pub const WITH: Morpheme = deriv_to("With", "With", Adjective);
    pub const WITHOUT: Morpheme = deriv_to("Without", "Without", Adjective);
    pub const NESS: Morpheme = deriv_to("Ness", "Ness", Noun);
    pub const AGT: Morpheme = deriv_to("Agt", "Agt", Noun);
    pub const DIM: Morpheme = deriv_to("Dim", "Dim", Noun);
    pub const JUSTLIKE: Morpheme = deriv_to("JustLike", "JustLike", Adjective);
    pub const ZERO: Morpheme = deriv("Zero", "Zero");

    // verb inflection
    pub const PRES: Morpheme = m("Pres", "Pres");
    pub const PAST: Morpheme = m("Past", "Past");
    pub const NARR: Morpheme = m("Narr", "Narr");
    pub const COND: Morpheme = m("Cond", "Cond");
    pub const PROG1: Morpheme = m("Prog1", "Prog1");
    pub const AOR: Morpheme = m("Aor", "Aor");
    pub const FUT: Morpheme = m("Fut", "Fut");
    pub const IMP: Morpheme = m("Imp", "Imp");
    pub const OPT: Morpheme = m("Opt", "Opt");
    pub const DESR: Morpheme = m("Desr", "Desr");
    pub const NECES: Morpheme = m("Neces", "Neces");
    pub const COP: Morpheme = m("Cop", "Cop");
    pub const NEG: Morpheme = m("Neg", "Neg");

    // verb-to-X derivation
    pub const CAUS: Morpheme = deriv_to("Caus", "Caus", Verb);
    pub const PASS: Morpheme = deriv_to("Pass", "Pass", Verb);
    pub const ABLE: Morpheme = deriv_to("Able", "Able", Verb);
    pub const RECIP: Morpheme = deriv_to("Recip", "Recip", Verb);
    pub const REFLEX: Morpheme = deriv_to("Reflex", "Reflex", Verb);
    pub const INF1: Morpheme = deriv_to("Inf1", "Inf1", Noun);
    pub const PAST_PART: Morpheme = deriv_to("PastPart", "PastPart", Adjective);
    pub const FUT_PART: Morpheme = deriv_to("FutPart", "FutPart", Adjective);
    pub const PRES_PART: Morpheme = deriv_to("PresPart", "PresPart", Adjective);
    pub const NARR_PART: Morpheme = deriv_to("NarrPart", "NarrPart", Adjective);

    // pronoun-specific
    pub const RELTOPRON: Morpheme = m("RelToPron", "RelToPron");
}
