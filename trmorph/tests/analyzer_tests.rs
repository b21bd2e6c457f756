//! End-to-end analyzer tests covering the pinned scenarios this crate's
//! morphotactics subset was sized to cover.

use trmorph::morpheme::PrimaryPos;
use trmorph::Analyzer;

fn analyzer() -> Analyzer {
    Analyzer::with_bundled_dictionary().expect("bundled dictionary analyzer builds")
}

fn has_stem(analyzer: &Analyzer, word: &str, expected_stem: &str) -> bool {
    analyzer
        .analyze(word)
        .iter()
        .any(|a| a.stem == expected_stem)
}

fn has_morpheme(analyzer: &Analyzer, word: &str, morpheme_id: &str) -> bool {
    analyzer.analyze(word).iter().any(|a| {
        a.morphemes
            .iter()
            .any(|m| m.morpheme_id == morpheme_id)
    })
}

#[test]
fn elma_is_bare_noun() {
    let a = analyzer();
    assert!(has_stem(&a, "elma", "elma"));
    let analyses = a.analyze("elma");
    assert!(analyses
        .iter()
        .any(|an| an.morphemes.iter().all(|m| m.morpheme_id != "A3pl")));
}

#[test]
fn elmalar_is_plural_noun() {
    let a = analyzer();
    assert!(has_stem(&a, "elmalar", "elma"));
    assert!(has_morpheme(&a, "elmalar", "A3pl"));
}

#[test]
fn evime_is_dative_possessed_noun() {
    let a = analyzer();
    let analyses = a.analyze("evime");
    assert!(analyses.iter().any(|an| {
        an.stem == "ev"
            && an.morphemes.iter().any(|m| m.morpheme_id == "P1sg" && m.surface == "im")
            && an.morphemes.iter().any(|m| m.morpheme_id == "Dat" && m.surface == "e")
    }));
}

#[test]
fn beyazlasti_derives_adjective_to_verb_past() {
    let a = analyzer();
    let analyses = a.analyze("beyazlaştı");
    assert!(analyses.iter().any(|an| {
        an.stem == "beyaz"
            && an.morphemes.iter().any(|m| m.morpheme_id == "Become")
            && an.morphemes.iter().any(|m| m.morpheme_id == "Past")
            && an.pos == Some(PrimaryPos::Verb)
    }));
}

#[test]
fn beyazlastirici_derives_to_noun_via_causative_agt() {
    let a = analyzer();
    let analyses = a.analyze("beyazlaştırıcı");
    assert!(analyses.iter().any(|an| {
        an.stem == "beyaz"
            && an.morphemes.iter().any(|m| m.morpheme_id == "Become")
            && an.morphemes.iter().any(|m| m.morpheme_id == "Caus")
            && an.morphemes.iter().any(|m| m.morpheme_id == "Agt")
            && an.pos == Some(PrimaryPos::Noun)
    }));
}

#[test]
fn okuyabiliyorum_chains_able_and_progressive() {
    let a = analyzer();
    let analyses = a.analyze("okuyabiliyorum");
    assert!(analyses.iter().any(|an| {
        an.stem == "oku"
            && an.morphemes.iter().any(|m| m.morpheme_id == "Able")
            && an.morphemes.iter().any(|m| m.morpheme_id == "Prog1")
            && an.morphemes.iter().any(|m| m.morpheme_id == "A1sg")
    }));
}

#[test]
fn kitabi_voices_root_before_accusative() {
    let a = analyzer();
    let analyses = a.analyze("kitabı");
    assert!(analyses.iter().any(|an| {
        an.stem == "kitab" && an.morphemes.iter().any(|m| m.morpheme_id == "Acc")
    }));
}

#[test]
fn bunu_lowercases_and_inflects_demonstrative_pronoun() {
    let a = analyzer();
    let analyses = a.analyze("Bunu");
    assert!(analyses.iter().any(|an| {
        an.stem == "bu" && an.morphemes.iter().any(|m| m.morpheme_id == "Acc" && m.surface == "nu")
    }));
}

#[test]
fn unknown_word_yields_no_analysis() {
    let a = analyzer();
    assert!(a.analyze("zzxxqqyy").is_empty());
}
