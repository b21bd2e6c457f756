//! Stem-transition generation and the prefix index used to seed analysis.
//! Grounded in `zeyrek/stem_transitions.py::StemTransitionsMapBased` and its
//! `generate_modified_root_nodes`/`generate_unmodified_root_node`.

use crate::errors::MorphError;
use crate::graph::StateId;
use crate::lexicon::{DictionaryItem, Lexicon};
use crate::morphotactics::Morphotactics;
use crate::phonetics::{compute_attrs, is_vowel, voice, AttrSet, PhoneticAttribute::*, RootAttribute};
use std::collections::HashMap;

/// One way a dictionary item's root can enter the morphotactics graph.
/// Phonotactically mutated roots (Voicing, Doubling, ...) produce two of
/// these per item: the "original" (pre-suffix) and "modified" (post-suffix)
/// surfaces.
#[derive(Debug, Clone)]
pub struct StemTransition {
    pub surface: String,
    pub to_state: StateId,
    pub attrs: AttrSet,
    pub item_id: String,
}

/// Indexes `StemTransition`s by surface prefix so a word can be matched in
/// O(len(word)) instead of scanning the whole lexicon (spec.md §4.3).
#[derive(Debug, Default)]
pub struct StemTransitionIndex {
    by_prefix: HashMap<String, Vec<StemTransition>>,
}

impl StemTransitionIndex {
    pub fn build(lexicon: &Lexicon, morphotactics: &Morphotactics) -> Result<Self, MorphError> {
        let mut index = StemTransitionIndex::default();
        for item in lexicon.items() {
            for st in generate_transitions(item, morphotactics)? {
                index
                    .by_prefix
                    .entry(st.surface.clone())
                    .or_default()
                    .push(st);
            }
        }
        Ok(index)
    }

    /// Every stem transition whose surface is a prefix of `word`, walked
    /// progressively from the shortest prefix so the whole operation stays
    /// O(len(word)) rather than O(len(word)^2) in practice (the number of
    /// distinct prefixes that are themselves root surfaces is small).
    pub fn prefix_matches(&self, word: &str) -> Vec<&StemTransition> {
        let chars: Vec<char> = word.chars().collect();
        let mut matches = Vec::new();
        for len in 1..=chars.len() {
            let prefix: String = chars[..len].iter().collect();
            if let Some(sts) = self.by_prefix.get(&prefix) {
                matches.extend(sts.iter());
            }
        }
        matches
    }
}

const MODIFYING: [RootAttribute; 4] = [
    RootAttribute::Voicing,
    RootAttribute::Doubling,
    RootAttribute::LastVowelDrop,
    RootAttribute::ProgressiveVowelDrop,
];

fn generate_transitions(
    item: &DictionaryItem,
    morphotactics: &Morphotactics,
) -> Result<Vec<StemTransition>, MorphError> {
    if item.attributes.contains_any(&MODIFYING) || item.attributes.contains(RootAttribute::InverseHarmony) {
        generate_modified(item, morphotactics)
    } else {
        let attrs = compute_attrs(&item.root, None);
        let to_state = morphotactics.root_state(item, &attrs)?;
        Ok(vec![StemTransition {
            surface: item.root.clone(),
            to_state,
            attrs,
            item_id: item.id.clone(),
        }])
    }
}

/// Builds the "original" (unsuffixed) and "modified" (suffix-ready) surface
/// variants of a phonotactically mutating root, then resolves each to its
/// own root state. Mirrors `generate_modified_root_nodes` in zeyrek, applying
/// Voicing, Doubling, LastVowelDrop, InverseHarmony, and ProgressiveVowelDrop
/// in that fixed order (the bundled dictionary never combines more than one
/// of these on a single item, so composition order is not exercised).
fn generate_modified(
    item: &DictionaryItem,
    morphotactics: &Morphotactics,
) -> Result<Vec<StemTransition>, MorphError> {
    let mut original_surface = item.root.clone();
    let mut modified_surface = item.root.clone();
    let mut original_attrs = compute_attrs(&item.root, None);
    let mut modified_attrs = original_attrs;

    if item.has_attribute(RootAttribute::Voicing) {
        let chars: Vec<char> = original_surface.chars().collect();
        let last = *chars.last().ok_or_else(|| MorphError::InvalidRootMutation {
            item: item.id.clone(),
            letter: ' ',
        })?;
        let second_last = if chars.len() >= 2 {
            Some(chars[chars.len() - 2])
        } else {
            None
        };
        let voiced = if last == 'k' && second_last == Some('n') {
            'g'
        } else {
            voice(last).ok_or(MorphError::InvalidRootMutation {
                item: item.id.clone(),
                letter: last,
            })?
        };
        modified_surface.pop();
        modified_surface.push(voiced);
        modified_attrs = compute_attrs(&modified_surface, None);
        original_attrs.insert(ExpectsConsonant);
        modified_attrs.insert(ExpectsVowel);
        modified_attrs.insert(CannotTerminate);
    }

    if item.has_attribute(RootAttribute::Doubling) {
        let last = original_surface.chars().last().unwrap();
        modified_surface.push(last);
        modified_attrs = compute_attrs(&modified_surface, None);
        original_attrs.insert(ExpectsConsonant);
        modified_attrs.insert(ExpectsVowel);
        modified_attrs.insert(CannotTerminate);
    }

    if item.has_attribute(RootAttribute::LastVowelDrop) {
        let chars: Vec<char> = modified_surface.chars().collect();
        if let Some(&last) = chars.last() {
            if is_vowel(last) {
                modified_surface.pop();
            } else if chars.len() >= 2 {
                modified_surface = chars[..chars.len() - 2]
                    .iter()
                    .chain(chars[chars.len() - 1..].iter())
                    .collect();
            }
        }
        modified_attrs = compute_attrs(&modified_surface, None);
        modified_attrs.insert(ExpectsVowel);
        modified_attrs.insert(CannotTerminate);
        if item.primary_pos != crate::morpheme::PrimaryPos::Verb {
            original_attrs.insert(ExpectsConsonant);
        }
    }

    if item.has_attribute(RootAttribute::InverseHarmony) {
        original_attrs.remove(LastVowelBack);
        original_attrs.insert(LastVowelFrontal);
        modified_attrs.remove(LastVowelBack);
        modified_attrs.insert(LastVowelFrontal);
    }

    if item.has_attribute(RootAttribute::ProgressiveVowelDrop) && modified_surface.chars().count() > 1 {
        modified_surface.pop();
        if crate::phonetics::contains_vowel(&modified_surface) {
            modified_attrs = compute_attrs(&modified_surface, None);
        }
        modified_attrs.insert(LastLetterDropped);
    }

    let original_state = morphotactics.root_state(item, &original_attrs)?;
    let modified_state = morphotactics.root_state(item, &modified_attrs)?;

    let original = StemTransition {
        surface: original_surface,
        to_state: original_state,
        attrs: original_attrs,
        item_id: item.id.clone(),
    };
    let modified = StemTransition {
        surface: modified_surface,
        to_state: modified_state,
        attrs: modified_attrs,
        item_id: item.id.clone(),
    };

    if original.surface == modified.surface && original.to_state == modified.to_state {
        Ok(vec![original])
    } else {
        Ok(vec![original, modified])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::parse_line;

    fn mt() -> Morphotactics {
        Morphotactics::build()
    }

    #[test]
    fn voicing_root_produces_two_surfaces() {
        let m = mt();
        let item = parse_line("kitap [A:Voicing]").unwrap();
        let sts = generate_transitions(&item, &m).unwrap();
        assert_eq!(sts.len(), 2);
        let surfaces: Vec<&str> = sts.iter().map(|s| s.surface.as_str()).collect();
        assert!(surfaces.contains(&"kitap"));
        assert!(surfaces.contains(&"kitab"));
    }

    #[test]
    fn plain_root_produces_one_surface() {
        let m = mt();
        let item = parse_line("elma").unwrap();
        let sts = generate_transitions(&item, &m).unwrap();
        assert_eq!(sts.len(), 1);
        assert_eq!(sts[0].surface, "elma");
    }

    #[test]
    fn prefix_index_finds_stem() {
        let m = mt();
        let mut lex = Lexicon::new();
        lex.add(parse_line("elma").unwrap());
        lex.add(parse_line("kitap [A:Voicing]").unwrap());
        let index = StemTransitionIndex::build(&lex, &m).unwrap();
        let matches = index.prefix_matches("elmalar");
        assert!(matches.iter().any(|s| s.surface == "elma"));
        let matches = index.prefix_matches("kitabı");
        assert!(matches.iter().any(|s| s.surface == "kitab"));
    }
}
