//! Dictionary line parsing: `word [P:...; A:...; Ref:...; Roots:...; Pr:...; Index:...]`.
//! An external collaborator per spec.md §1; implemented here as a thin, real
//! loader grounded in `zeyrek/lexicon.py`/`zeyrek/lexicon_helpers.py`.

use crate::errors::MorphError;
use crate::lexicon::{generate_id, DictionaryItem, Lexicon};
use crate::morpheme::{PrimaryPos, SecondaryPos};
use crate::phonetics::{RootAttribute, RootAttrSet};
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Strips hyphens and apostrophes from a root candidate. Mirrors the
/// teacher's `Word::match_replace`/`Lemma::match_replace` regex-substitution
/// idiom rather than a plain `.replace` chain.
fn strip_root_punctuation(word: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"[-']").unwrap());
    re.replace_all(word, "").into_owned()
}

fn parse_primary_pos(token: &str) -> Option<PrimaryPos> {
    use PrimaryPos::*;
    Some(match token {
        "Noun" => Noun,
        "Adj" => Adjective,
        "Adv" => Adverb,
        "Conj" => Conjunction,
        "Interj" => Interjection,
        "Verb" => Verb,
        "Pron" => Pronoun,
        "Num" => Numeral,
        "Det" => Determiner,
        "Postp" => PostPositive,
        "Ques" => Question,
        "Dup" => Duplicator,
        "Punc" => Punctuation,
        _ => return None,
    })
}

fn parse_secondary_pos(token: &str) -> Option<SecondaryPos> {
    use SecondaryPos::*;
    Some(match token {
        "Prop" => ProperNoun,
        "Pers" => PersonalPron,
        "Demons" => DemonstrativePron,
        "Ques" => QuestionPron,
        "Reflex" => ReflexivePron,
        "Quant" => QuantitivePron,
        "Abbrv" => Abbreviation,
        "Time" => Time,
        _ => return None,
    })
}

fn parse_root_attribute(token: &str) -> Option<RootAttribute> {
    use RootAttribute::*;
    Some(match token {
        "Voicing" => Voicing,
        "NoVoicing" => NoVoicing,
        "Doubling" => Doubling,
        "LastVowelDrop" => LastVowelDrop,
        "ProgressiveVowelDrop" => ProgressiveVowelDrop,
        "InverseHarmony" => InverseHarmony,
        "Passive_In" => PassiveIn,
        "Causative_t" => CausativeT,
        "Aorist_I" => AoristI,
        "Aorist_A" => AoristA,
        "CompoundP3sg" => CompoundP3sg,
        "CompoundP3sgRoot" => CompoundP3sgRoot,
        "ImplicitPlural" => ImplicitPlural,
        "ImplicitP1sg" => ImplicitP1sg,
        "ImplicitP2sg" => ImplicitP2sg,
        "FamilyMember" => FamilyMember,
        "NoQuote" => NoQuote,
        "Dummy" => Dummy,
        "Reflexive" => Reflexive,
        "Reciprocal" => Reciprocal,
        "NonReciprocal" => NonReciprocal,
        "ImplicitDative" => ImplicitDative,
        "PronunciationGuessed" => PronunciationGuessed,
        "Ext" => Ext,
        "Runtime" => Runtime,
        "NounConsInsert_n" => NounConsInsertN,
        "NoSuffix" => NoSuffix,
        "Informal" => Informal,
        "Unknown" => Unknown,
        _ => return None,
    })
}

fn is_verb_lemma(word: &str) -> bool {
    word.len() > 3
        && (word.ends_with("mek") || word.ends_with("mak"))
        && word.chars().next().map_or(false, |c| c.is_lowercase())
}

fn infer_primary_pos(word: &str) -> PrimaryPos {
    if is_verb_lemma(word) {
        PrimaryPos::Verb
    } else {
        PrimaryPos::Noun
    }
}

fn infer_secondary_pos(word: &str) -> SecondaryPos {
    if word.chars().next().map_or(false, |c| c.is_uppercase()) {
        SecondaryPos::ProperNoun
    } else {
        SecondaryPos::None_
    }
}

fn generate_root(word: &str, primary_pos: PrimaryPos) -> String {
    let mut w = word.to_string();
    if primary_pos == PrimaryPos::Verb && is_verb_lemma(word) {
        w.truncate(w.chars().count() - 3);
    }
    let w = crate::phonetics::normalize_circumflex(&w.to_lowercase());
    strip_root_punctuation(&w)
}

/// Guesses a pronunciation for consonant-only / abbreviation-like words by
/// spelling out each letter name. Simplified subset of
/// `lexicon_helpers.guess_for_abbreviation`/`to_turkish_letter_pronunciation`
/// — the digit/number-to-words path is out of scope (belongs to the
/// formatter facade, not the morphology core).
fn guess_pronunciation(word: &str) -> String {
    if crate::phonetics::contains_vowel(word) {
        return word.to_string();
    }
    letter_names(word)
}

fn letter_names(word: &str) -> String {
    let mut out = String::new();
    for c in word.to_lowercase().chars() {
        let name = match c {
            'a' => "a",
            'b' => "be",
            'c' => "ce",
            'ç' => "çe",
            'd' => "de",
            'e' => "e",
            'f' => "fe",
            'g' => "ge",
            'ğ' => "yumuşakge",
            'h' => "he",
            'ı' => "ı",
            'i' => "i",
            'j' => "je",
            'k' => "ke",
            'l' => "le",
            'm' => "me",
            'n' => "ne",
            'o' => "o",
            'ö' => "ö",
            'p' => "pe",
            'r' => "re",
            's' => "se",
            'ş' => "şe",
            't' => "te",
            'u' => "u",
            'ü' => "ü",
            'v' => "ve",
            'y' => "ye",
            'z' => "ze",
            _ => continue,
        };
        out.push_str(name);
    }
    out
}

fn parse_metadata(line: &str, meta: &str) -> Result<HashMap<&str, String>, MorphError> {
    let mut result = HashMap::new();
    for chunk in meta.split(';') {
        let chunk = chunk.trim();
        if chunk.is_empty() {
            continue;
        }
        let Some((key, val)) = chunk.split_once(':') else {
            return Err(MorphError::InvalidLexiconLine {
                line: line.to_string(),
                reason: format!("malformed metadata chunk {chunk:?}, expected 'key:value'"),
            });
        };
        let key = key.trim();
        let val = val.trim();
        if val.is_empty() {
            return Err(MorphError::InvalidLexiconLine {
                line: line.to_string(),
                reason: format!("empty value for metadata key {key:?}"),
            });
        }
        let canonical = match key {
            "P" => "P",
            "A" => "A",
            "Ref" => "Ref",
            "Roots" => "Roots",
            "Pr" => "Pr",
            "Index" => "Index",
            other => {
                return Err(MorphError::InvalidLexiconLine {
                    line: line.to_string(),
                    reason: format!("unknown metadata key {other:?}"),
                })
            }
        };
        result.insert(canonical, val.to_string());
    }
    Ok(result)
}

/// Parses a single dictionary line into a `DictionaryItem`.
pub fn parse_line(line: &str) -> Result<DictionaryItem, MorphError> {
    let trimmed = line.trim();
    let word = trimmed
        .split(' ')
        .next()
        .filter(|w| !w.is_empty())
        .ok_or_else(|| MorphError::InvalidLexiconLine {
            line: line.to_string(),
            reason: "line has no word data".to_string(),
        })?;
    let rest = trimmed[word.len()..].trim();

    let metadata = if rest.is_empty() {
        HashMap::new()
    } else {
        if !rest.starts_with('[') || !rest.ends_with(']') {
            return Err(MorphError::InvalidLexiconLine {
                line: line.to_string(),
                reason: "malformed metadata, missing brackets".to_string(),
            });
        }
        parse_metadata(line, &rest[1..rest.len() - 1])?
    };

    let (primary_pos, secondary_pos) = match metadata.get("P") {
        None => (infer_primary_pos(word), infer_secondary_pos(word)),
        Some(pos_str) => {
            let tokens: Vec<&str> = pos_str.split(',').map(|t| t.trim()).collect();
            if tokens.len() > 2 {
                return Err(MorphError::InvalidLexiconLine {
                    line: line.to_string(),
                    reason: format!("only two POS tokens allowed: {pos_str}"),
                });
            }
            let mut primary = None;
            let mut secondary = None;
            if pos_str == "Pron,Ques" {
                primary = Some(PrimaryPos::Pronoun);
                secondary = Some(SecondaryPos::QuestionPron);
            } else {
                for tok in &tokens {
                    if let Some(p) = parse_primary_pos(tok) {
                        if primary.is_some() {
                            return Err(MorphError::InvalidLexiconLine {
                                line: line.to_string(),
                                reason: format!("multiple primary pos in {pos_str}"),
                            });
                        }
                        primary = Some(p);
                    } else if let Some(s) = parse_secondary_pos(tok) {
                        if secondary.is_some() {
                            return Err(MorphError::InvalidLexiconLine {
                                line: line.to_string(),
                                reason: format!("multiple secondary pos in {pos_str}"),
                            });
                        }
                        secondary = Some(s);
                    } else {
                        return Err(MorphError::InvalidLexiconLine {
                            line: line.to_string(),
                            reason: format!("unrecognized pos token {tok:?}"),
                        });
                    }
                }
            }
            (
                primary.unwrap_or_else(|| infer_primary_pos(word)),
                secondary.unwrap_or_else(|| infer_secondary_pos(word)),
            )
        }
    };

    let mut attributes = RootAttrSet::new();
    let mut pronunciation_guessed = false;
    if let Some(attrs_str) = metadata.get("A") {
        for tok in attrs_str.split(',').map(|t| t.trim()) {
            if tok.is_empty() {
                continue;
            }
            let a = parse_root_attribute(tok).ok_or_else(|| MorphError::InvalidLexiconLine {
                line: line.to_string(),
                reason: format!("unknown root attribute {tok:?}"),
            })?;
            attributes.insert(a);
        }
    }

    let pronunciation = match metadata.get("Pr") {
        Some(p) => p.clone(),
        None => {
            pronunciation_guessed = true;
            guess_pronunciation(word)
        }
    };
    if pronunciation_guessed {
        attributes.insert(RootAttribute::PronunciationGuessed);
    }

    let index: u32 = match metadata.get("Index") {
        Some(s) => s
            .parse()
            .map_err(|_| MorphError::InvalidLexiconLine {
                line: line.to_string(),
                reason: format!("invalid Index value {s:?}"),
            })?,
        None => 0,
    };

    let root = generate_root(word, primary_pos);
    let lemma = word.to_string();
    let id = generate_id(&lemma, primary_pos, secondary_pos, index);

    Ok(DictionaryItem {
        id,
        lemma,
        root,
        primary_pos,
        secondary_pos,
        attributes,
        pronunciation,
        index,
        ref_item: metadata.get("Ref").cloned(),
    })
}

pub fn from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Result<Lexicon, MorphError> {
    let mut lex = Lexicon::new();
    for line in lines {
        let line = line.trim();
        if line.is_empty() || line.starts_with("##") {
            continue;
        }
        lex.add(parse_line(line)?);
    }
    Ok(lex)
}

/// A small, hand-curated bundled dictionary covering every lemma exercised
/// by the pinned end-to-end scenarios plus a representative spread of
/// nouns/verbs/adjectives/pronouns. Stands in for the six Zemberek resource
/// files spec.md §6 names; the full ~700k-entry resource set is not present
/// in this retrieval pack.
pub const BUNDLED_DICTIONARY: &str = include_str!("bundled_dictionary.txt");

pub fn bundled() -> Lexicon {
    from_lines(BUNDLED_DICTIONARY.lines()).expect("bundled dictionary must parse")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_noun() {
        let item = parse_line("elma").unwrap();
        assert_eq!(item.lemma, "elma");
        assert_eq!(item.primary_pos, PrimaryPos::Noun);
        assert_eq!(item.id, "elma_Noun");
    }

    #[test]
    fn parses_verb_with_attributes() {
        let item = parse_line("adamak [P:Verb; A:Voicing]").unwrap();
        assert_eq!(item.root, "adama");
        assert!(item.has_attribute(RootAttribute::Voicing));
    }

    #[test]
    fn rejects_missing_bracket() {
        let err = parse_line("elma P:Noun").unwrap_err();
        assert!(matches!(err, MorphError::InvalidLexiconLine { .. }));
    }

    #[test]
    fn infers_proper_noun() {
        let item = parse_line("Ankara").unwrap();
        assert_eq!(item.secondary_pos, SecondaryPos::ProperNoun);
    }
}
