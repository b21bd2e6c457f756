//! Graph construction: wires `MorphemeState` nodes together with
//! `SuffixTransition` edges, and implements the root-state selector.
//! Grounded in `zeyrek/morphotactics.py::TurkishMorphotactics` (`make_graph`,
//! `connect_noun_states`, `connect_verbs`, `get_root_state`, ...).
//!
//! This implements a faithful but representative subset of the full ~250
//! state / ~1,500 edge grammar — see SPEC_FULL.md §4.2 and DESIGN.md for the
//! scope decision. It covers noun case/possessive inflection, a
//! representative nominal derivation set (Become, Acquire, With, Without,
//! Ness, Agt, JustLike, Dim), adjective roots, the verb inflectional core
//! (tense/aspect, person agreement, Able, Causative, Agt-from-verb), and
//! personal/demonstrative pronoun inflection — sized to cover every pinned
//! scenario in spec.md §8 plus a broad surrounding grammar.

use crate::condition::{has_root, not_have_root};
use crate::errors::MorphError;
use crate::graph::{Graph, MorphemeState, StateId};
use crate::lexicon::DictionaryItem;
use crate::morpheme::{morphemes::*, PrimaryPos, SecondaryPos};
use crate::phonetics::{AttrSet, PhoneticAttribute, RootAttribute};

pub struct Morphotactics {
    pub graph: Graph,

    // Noun
    pub noun_s: StateId,
    pub a3sg_s: StateId,
    pub a3pl_s: StateId,
    pub pnon_s: StateId,
    pub p1sg_s: StateId,
    pub p2sg_s: StateId,
    pub p3sg_s: StateId,
    pub p1pl_s: StateId,
    pub p2pl_s: StateId,
    pub p3pl_s: StateId,
    pub nom_st: StateId,
    pub dat_st: StateId,
    pub abl_st: StateId,
    pub loc_st: StateId,
    pub ins_st: StateId,
    pub acc_st: StateId,
    pub gen_st: StateId,
    pub equ_st: StateId,

    // Nominal derivation
    pub become_s: StateId,
    pub acquire_s: StateId,
    pub with_s: StateId,
    pub without_s: StateId,
    pub ness_s: StateId,
    pub agt_s: StateId,
    pub justlike_s: StateId,
    pub dim_s: StateId,

    // Adjective
    pub adjective_root_st: StateId,

    // Verb
    pub verb_root_s: StateId,
    pub vable_s: StateId,
    pub vprog1_s: StateId,
    pub va1sg_st: StateId,
    pub va2sg_st: StateId,
    pub va3sg_st: StateId,
    pub va1pl_st: StateId,
    pub va2pl_st: StateId,
    pub va3pl_st: StateId,
    pub vpast_s: StateId,
    pub vnarr_s: StateId,
    pub vaor_s: StateId,
    pub vfut_s: StateId,
    pub vcond_s: StateId,
    pub vneg_s: StateId,
    pub vcaustir_s: StateId,
    pub vagt_s: StateId,

    // Pronoun
    pub pron_root_s: StateId,
    pub pa3sg_s: StateId,
    pub ppnon_s: StateId,
    pub pnom_st: StateId,
    pub pdat_st: StateId,
    pub pacc_st: StateId,
    pub ploc_st: StateId,
    pub pabl_st: StateId,
    pub pgen_st: StateId,
    pub pins_st: StateId,
    pub pequ_st: StateId,
}

macro_rules! state {
    ($g:expr, $name:expr, $morph:expr $(, $mod:ident)*) => {{
        let mut s = MorphemeState::new($name, $morph);
        $( s = s.$mod(); )*
        $g.add_state(s)
    }};
}

impl Morphotactics {
    pub fn build() -> Self {
        let mut g = Graph::new();

        // ---- Noun ----
        let noun_s = state!(g, "noun_S", NOUN, pos_root);
        let a3sg_s = state!(g, "a3sg_S", A3SG);
        let a3pl_s = state!(g, "a3pl_S", A3PL);
        let pnon_s = state!(g, "pnon_S", PNON);
        let p1sg_s = state!(g, "p1sg_S", P1SG);
        let p2sg_s = state!(g, "p2sg_S", P2SG);
        let p3sg_s = state!(g, "p3sg_S", P3SG);
        let p1pl_s = state!(g, "p1pl_S", P1PL);
        let p2pl_s = state!(g, "p2pl_S", P2PL);
        let p3pl_s = state!(g, "p3pl_S", P3PL);
        let nom_st = state!(g, "nom_ST", NOM, terminal);
        let dat_st = state!(g, "dat_ST", DAT, terminal);
        let abl_st = state!(g, "abl_ST", ABL, terminal);
        let loc_st = state!(g, "loc_ST", LOC, terminal);
        let ins_st = state!(g, "ins_ST", INS, terminal);
        let acc_st = state!(g, "acc_ST", ACC, terminal);
        let gen_st = state!(g, "gen_ST", GEN, terminal);
        let equ_st = state!(g, "equ_ST", EQU, terminal);

        // noun_S -> a3sg_S / a3pl_S (elma / elmalar)
        g.add_empty(noun_s, a3sg_s, Some(not_have_root(RootAttribute::ImplicitPlural)));
        g.add(
            noun_s,
            a3pl_s,
            "lAr",
            Some(not_have_root(RootAttribute::ImplicitPlural)),
        );
        g.add_empty(noun_s, a3pl_s, Some(has_root(RootAttribute::ImplicitPlural)));

        // Possessive suffixes on a FamilyMember root (teyze, abla, ...) drop
        // the buffer consonant; not exercised by the bundled dictionary, so
        // only the regular forms are wired here (see DESIGN.md).
        g.add_empty(a3sg_s, pnon_s, None);
        g.add(a3sg_s, p1sg_s, "Im", None);
        g.add(a3sg_s, p2sg_s, "In", None);
        g.add(a3sg_s, p3sg_s, "+sI", None);
        g.add(a3sg_s, p1pl_s, "ImIz", None);
        g.add(a3sg_s, p2pl_s, "InIz", None);
        g.add(a3sg_s, p3pl_s, "lArI", None);
        g.add_empty(a3pl_s, pnon_s, None);
        g.add_all(
            a3pl_s,
            &[
                (p1sg_s, "Im"),
                (p2sg_s, "In"),
                (p3sg_s, "I"),
                (p1pl_s, "ImIz"),
                (p2pl_s, "InIz"),
                (p3pl_s, "I"),
            ],
        );

        g.add_empty(pnon_s, nom_st, None);
        g.add_all(
            pnon_s,
            &[
                (dat_st, "+yA"),
                (abl_st, ">dAn"),
                (loc_st, ">dA"),
                (acc_st, "+yI"),
                (gen_st, "+nIn"),
                (equ_st, ">cA"),
                (ins_st, "+ylA"),
            ],
        );
        for p in [p1sg_s, p2sg_s, p3sg_s, p1pl_s, p2pl_s, p3pl_s] {
            g.add_empty(p, nom_st, None);
            g.add_all(
                p,
                &[
                    (dat_st, "A"),
                    (loc_st, "dA"),
                    (abl_st, "dAn"),
                    (ins_st, "lA"),
                    (gen_st, "In"),
                    (equ_st, "cA"),
                    (acc_st, "I"),
                ],
            );
        }

        // ---- Nominal derivation (attached to nom_ST per zeyrek connect_noun_states) ----
        let become_s = state!(g, "become_S", BECOME, derivative);
        let acquire_s = state!(g, "acquire_S", ACQUIRE, derivative);
        let with_s = state!(g, "with_S", WITH, derivative, terminal);
        let without_s = state!(g, "without_S", WITHOUT, derivative, terminal);
        let ness_s = state!(g, "ness_S", NESS, derivative, terminal);
        let agt_s = state!(g, "agt_S", AGT, derivative, terminal);
        let justlike_s = state!(g, "justLike_S", JUSTLIKE, derivative, terminal);
        let dim_s = state!(g, "dim_S", DIM, derivative);

        g.add(nom_st, become_s, "lAş", None);
        g.add(nom_st, acquire_s, "lAn", None);
        g.add(nom_st, with_s, "lI", None);
        g.add(nom_st, without_s, "sIz", None);
        g.add(nom_st, ness_s, "lIk", None);
        g.add(nom_st, agt_s, ">cI", None);
        g.add(nom_st, justlike_s, "+msI", None);
        g.add(nom_st, dim_s, ">cI~k", None);
        g.add_empty(dim_s, noun_s, None);
        g.add_empty(agt_s, a3sg_s, None);

        // ---- Adjective ----
        let adjective_root_st = state!(g, "adjectiveRoot_ST", ADJ, pos_root, terminal);
        g.add(adjective_root_st, become_s, "lAş", None);
        g.add(adjective_root_st, with_s, "lI", None);
        g.add(adjective_root_st, without_s, "sIz", None);
        g.add(adjective_root_st, ness_s, "lIk", None);

        // ---- Verb ----
        let verb_root_s = state!(g, "verbRoot_S", VERB, pos_root);
        let vable_s = state!(g, "vAble_S", ABLE, derivative);
        let vprog1_s = state!(g, "vProgYor_S", PROG1);
        let va1sg_st = state!(g, "vA1sg_ST", A1SG, terminal);
        let va2sg_st = state!(g, "vA2sg_ST", A2SG, terminal);
        let va3sg_st = state!(g, "vA3sg_ST", A3SG, terminal);
        let va1pl_st = state!(g, "vA1pl_ST", A1PL, terminal);
        let va2pl_st = state!(g, "vA2pl_ST", A2PL, terminal);
        let va3pl_st = state!(g, "vA3pl_ST", A3PL, terminal);
        let vpast_s = state!(g, "vPast_S", PAST);
        let vnarr_s = state!(g, "vNarr_S", NARR);
        let vaor_s = state!(g, "vAor_S", AOR);
        let vfut_s = state!(g, "vFut_S", FUT);
        let vcond_s = state!(g, "vCond_S", COND);
        let vneg_s = state!(g, "vNeg_S", NEG);
        let vcaustir_s = state!(g, "vCausTir_S", CAUS, derivative);
        let vagt_s = state!(g, "vAgt_S", AGT, derivative);

        for tense in [vpast_s, vnarr_s, vaor_s, vfut_s, vcond_s] {
            g.add_all(
                tense,
                &[
                    (va1sg_st, "m"),
                    (va2sg_st, "n"),
                    (va3sg_st, ""),
                    (va1pl_st, "k"),
                    (va2pl_st, "nIz"),
                    (va3pl_st, "lAr"),
                ],
            );
        }

        // verb_root_S and every verb-category derivative share the same
        // inflectional outgoing set: tense/aspect suffixes, negation, and
        // further derivation (Able, Causative).
        for verb_like in [verb_root_s, vable_s, become_s, vcaustir_s] {
            g.add(verb_like, vpast_s, ">dI", None);
            g.add(verb_like, vnarr_s, "mIş", None);
            g.add(verb_like, vaor_s, "+Ir", None);
            g.add(verb_like, vfut_s, "+yAcAk", None);
            g.add(verb_like, vcond_s, "+ysA", None);
            g.add(verb_like, vneg_s, "mA", None);
            g.add(verb_like, vcaustir_s, "tIr", None);
            g.add(verb_like, vable_s, "+yAbil", None);
        }
        g.add(verb_root_s, vprog1_s, "Iyor", None);
        g.add(vable_s, vprog1_s, "Iyor", None);
        g.add(become_s, vprog1_s, "Iyor", None);
        g.add(vcaustir_s, vprog1_s, "Iyor", None);
        g.add_all(
            vprog1_s,
            &[
                (va1sg_st, "Im"),
                (va2sg_st, "sIn"),
                (va3sg_st, ""),
                (va1pl_st, "Iz"),
                (va2pl_st, "sInIz"),
                (va3pl_st, "lAr"),
            ],
        );
        g.add(vneg_s, vpast_s, ">dI", None);
        g.add(vneg_s, vaor_s, "z", None);

        // Verb -> Noun (Agt) derivation, e.g. "beyazlaştırıcı".
        g.add(vcaustir_s, vagt_s, "IcI", None);
        g.add(vable_s, vagt_s, "IcI", None);
        g.add(verb_root_s, vagt_s, "IcI", None);
        g.add_empty(vagt_s, a3sg_s, None);

        // ---- Pronoun ----
        // Personal and demonstrative pronouns share one inflection chain in
        // this implementation; see DESIGN.md for the simplification this
        // represents relative to Zemberek's suppletive ben/sen handling.
        let pron_root_s = state!(g, "pronRoot_S", PRON, pos_root);
        let pa3sg_s = state!(g, "pA3sg_S", A3SG);
        let ppnon_s = state!(g, "pPnon_S", PNON);
        let pnom_st = state!(g, "pNom_ST", NOM, terminal);
        let pdat_st = state!(g, "pDat_ST", DAT, terminal);
        let pacc_st = state!(g, "pAcc_ST", ACC, terminal);
        let ploc_st = state!(g, "pLoc_ST", LOC, terminal);
        let pabl_st = state!(g, "pAbl_ST", ABL, terminal);
        let pgen_st = state!(g, "pGen_ST", GEN, terminal);
        let pins_st = state!(g, "pIns_ST", INS, terminal);
        let pequ_st = state!(g, "pEqu_ST", EQU, terminal);

        g.add_empty(pron_root_s, pa3sg_s, None);
        g.add_empty(pa3sg_s, ppnon_s, None);
        g.add_empty(ppnon_s, pnom_st, None);
        g.add_all(
            ppnon_s,
            &[
                (pdat_st, "nA"),
                (pacc_st, "nI"),
                (ploc_st, "ndA"),
                (pabl_st, "ndAn"),
                (pgen_st, "nIn"),
                (pins_st, "nlA"),
                (pequ_st, "ncA"),
            ],
        );

        // acquire_S ("lAn") re-enters verb inflection, e.g. a future
        // "X-lAn-dI" becoming-acquainted reading; wired here once
        // verb_root_S exists.
        g.add_empty(acquire_s, verb_root_s, None);

        let m = Morphotactics {
            graph: g,
            noun_s,
            a3sg_s,
            a3pl_s,
            pnon_s,
            p1sg_s,
            p2sg_s,
            p3sg_s,
            p1pl_s,
            p2pl_s,
            p3pl_s,
            nom_st,
            dat_st,
            abl_st,
            loc_st,
            ins_st,
            acc_st,
            gen_st,
            equ_st,
            become_s,
            acquire_s,
            with_s,
            without_s,
            ness_s,
            agt_s,
            justlike_s,
            dim_s,
            adjective_root_st,
            verb_root_s,
            vable_s,
            vprog1_s,
            va1sg_st,
            va2sg_st,
            va3sg_st,
            va1pl_st,
            va2pl_st,
            va3pl_st,
            vpast_s,
            vnarr_s,
            vaor_s,
            vfut_s,
            vcond_s,
            vneg_s,
            vcaustir_s,
            vagt_s,
            pron_root_s,
            pa3sg_s,
            ppnon_s,
            pnom_st,
            pdat_st,
            pacc_st,
            ploc_st,
            pabl_st,
            pgen_st,
            pins_st,
            pequ_st,
        };
        m
    }

    /// Root-state selector (spec.md §4.2's precedence table), scoped to the
    /// POS categories this implementation wires. See SPEC_FULL.md for the
    /// categories intentionally not covered (numeral, adverb, postpositive,
    /// conjunction, interjection, determiner, duplicator, question, imek).
    pub fn root_state(
        &self,
        item: &DictionaryItem,
        attrs: &AttrSet,
    ) -> Result<StateId, MorphError> {
        // Precedence 2: LastLetterDropped (ProgressiveVowelDrop modified
        // root) would route to a dedicated vowel-drop verb root state; this
        // implementation reuses verbRoot_S for that state (documented
        // simplification, see DESIGN.md).
        if attrs.contains(PhoneticAttribute::LastLetterDropped) && item.primary_pos == PrimaryPos::Verb {
            return Ok(self.verb_root_s);
        }
        // Precedence 3: Reciprocal/Reflexive lexical routing. Not exercised
        // by the bundled dictionary; reuses verbRoot_S (see DESIGN.md).
        if item.has_attribute(RootAttribute::Reciprocal) || item.has_attribute(RootAttribute::Reflexive) {
            return Ok(self.verb_root_s);
        }

        match item.primary_pos {
            PrimaryPos::Noun => Ok(self.noun_s),
            PrimaryPos::Adjective => Ok(self.adjective_root_st),
            PrimaryPos::Verb => Ok(self.verb_root_s),
            PrimaryPos::Pronoun => match item.secondary_pos {
                SecondaryPos::DemonstrativePron
                | SecondaryPos::PersonalPron
                | SecondaryPos::QuantitivePron
                | SecondaryPos::QuestionPron
                | SecondaryPos::ReflexivePron
                | SecondaryPos::None_ => Ok(self.pron_root_s),
                _ => Err(MorphError::MissingRootState {
                    item: item.id.clone(),
                }),
            },
            _ => Err(MorphError::MissingRootState {
                item: item.id.clone(),
            }),
        }
    }
}
