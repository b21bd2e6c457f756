//! The graph walker: `SearchPath`, `advance`, and the `analyze` entry point.
//! Grounded in `zeyrek/analyzer.py::_search`/`TurkishMorphAnalyzer.analyze`.

use crate::condition::accepts;
use crate::graph::{Graph, StateId};
use crate::morpheme::{Morpheme, SecondaryPos};
use crate::phonetics::{compute_attrs, AttrSet};
use crate::stem::{StemTransition, StemTransitionIndex};
use crate::template::instantiate;

/// A single step recorded in a `SearchPath`'s history: the surface produced
/// by a transition (possibly empty) plus the state it landed on.
#[derive(Debug, Clone)]
pub struct HistEntry {
    pub surface: String,
    pub state: StateId,
    pub morpheme: Morpheme,
    pub is_derivative: bool,
}

/// One in-progress (or completed) walk through the morphotactics graph.
/// Cloned and extended on every `advance` step; spec.md §5 calls this the
/// unit of the search frontier.
#[derive(Debug, Clone)]
pub struct SearchPath {
    pub tail: String,
    pub current_state: StateId,
    pub history: Vec<HistEntry>,
    pub attrs: AttrSet,
    pub terminal: bool,
    pub contains_derivation: bool,
    pub contains_suffix_with_surface: bool,
    pub root_attrs: crate::phonetics::RootAttrSet,
    pub root_secondary_pos: SecondaryPos,
    pub dict_item_id: String,
    pub root_surface: String,
}

impl SearchPath {
    fn seed(
        stem: &StemTransition,
        word: &str,
        root: &crate::lexicon::DictionaryItem,
        graph: &Graph,
    ) -> Self {
        let surface = stem.surface.clone();
        let tail = word[surface.len()..].to_string();
        SearchPath {
            tail,
            current_state: stem.to_state,
            history: vec![HistEntry {
                surface: surface.clone(),
                state: stem.to_state,
                morpheme: root.primary_pos_morpheme(),
                is_derivative: false,
            }],
            attrs: stem.attrs,
            terminal: graph.state(stem.to_state).terminal,
            contains_derivation: false,
            contains_suffix_with_surface: false,
            root_attrs: root.attributes,
            root_secondary_pos: root.secondary_pos,
            dict_item_id: root.id.clone(),
            root_surface: surface,
        }
    }
}

impl crate::lexicon::DictionaryItem {
    fn primary_pos_morpheme(&self) -> Morpheme {
        use crate::morpheme::morphemes::*;
        use crate::morpheme::PrimaryPos::*;
        match self.primary_pos {
            Noun => NOUN,
            Adjective => ADJ,
            Verb => VERB,
            Pronoun => PRON,
            Adverb => ADV,
            _ => NOUN,
        }
    }
}

/// Threshold from spec.md §9's Open Question: a suffix-type repeating more
/// than this many times within one path is treated as a runaway cycle.
const MAX_REPEATING_SUFFIX_TYPE_COUNT: usize = 3;
/// Cycle pruning only kicks in once the live frontier grows past this size,
/// per spec.md §4.4 (small frontiers are cheap enough to let run to their
/// natural dead end).
const CYCLE_GUARD_FRONTIER_SIZE: usize = 30;

/// Tries every outgoing edge from `path.current_state`. Returns the set of
/// successor paths reachable by one transition (zero, one, or several).
pub fn advance(path: &SearchPath, graph: &Graph) -> Vec<SearchPath> {
    use crate::phonetics::PhoneticAttribute::{CannotTerminate, ExpectsConsonant, ExpectsVowel};
    use crate::template::EndMarker;

    let mut results = Vec::new();
    for (_tid, target, transition) in graph.outgoing(path.current_state) {
        if path.tail.is_empty() && transition.has_surface_form() {
            continue;
        }

        let produced = instantiate(&transition.template, &path.attrs);

        if !path.tail.starts_with(&produced) {
            continue;
        }

        // Implicit template-start constraint (spec.md §4.2): a
        // consonant-initial template requires ¬ExpectsVowel, a
        // vowel-initial one requires ¬ExpectsConsonant.
        match transition.template.starts_with_consonant {
            Some(true) if path.attrs.contains(ExpectsVowel) => continue,
            Some(false) if path.attrs.contains(ExpectsConsonant) => continue,
            _ => {}
        }

        if let Some(cond) = &transition.condition {
            if !accepts(cond, path) {
                continue;
            }
        }

        let new_tail = path.tail[produced.len()..].to_string();
        let mut new_attrs = if produced.is_empty() {
            path.attrs
        } else if path.tail == produced {
            path.attrs
        } else {
            compute_attrs(&produced, Some(path.attrs))
        };

        if !produced.is_empty() {
            new_attrs.remove(CannotTerminate);
            match transition.template.end_marker {
                EndMarker::LastVoiced => new_attrs.insert(ExpectsConsonant),
                EndMarker::LastNotVoiced => {
                    new_attrs.insert(ExpectsVowel);
                    new_attrs.insert(CannotTerminate);
                }
                EndMarker::None => {}
            }
        }

        let state = graph.state(target);
        let mut history = path.history.clone();
        history.push(HistEntry {
            surface: produced.clone(),
            state: target,
            morpheme: state.morpheme,
            is_derivative: state.derivative,
        });

        results.push(SearchPath {
            tail: new_tail,
            current_state: target,
            history,
            attrs: new_attrs,
            terminal: state.terminal,
            contains_derivation: path.contains_derivation || state.derivative,
            contains_suffix_with_surface: path.contains_suffix_with_surface || !produced.is_empty(),
            root_attrs: path.root_attrs,
            root_secondary_pos: path.root_secondary_pos,
            dict_item_id: path.dict_item_id.clone(),
            root_surface: path.root_surface.clone(),
        });
    }
    results
}

/// True if `path` has repeated the same morpheme id enough times in a row to
/// be considered a runaway cycle rather than legitimate iteration (spec.md
/// §9's resolved Open Question, threshold 3).
fn is_cyclic(path: &SearchPath) -> bool {
    let mut counts: std::collections::HashMap<&'static str, usize> = std::collections::HashMap::new();
    for h in &path.history {
        let c = counts.entry(h.morpheme.id).or_insert(0);
        *c += 1;
        if *c > MAX_REPEATING_SUFFIX_TYPE_COUNT {
            return true;
        }
    }
    false
}

/// Seeds the search from every stem transition whose surface is a prefix of
/// `word`, then repeatedly calls `advance` until every live path has either
/// terminated (empty tail and current state is `terminal`) or died (no
/// further transitions matched). Cycle pruning only applies once the
/// frontier exceeds `CYCLE_GUARD_FRONTIER_SIZE`.
pub fn analyze<'a>(
    word: &str,
    lexicon: &crate::lexicon::Lexicon,
    stem_index: &StemTransitionIndex,
    graph: &Graph,
) -> Vec<SearchPath> {
    let mut frontier: Vec<SearchPath> = Vec::new();
    for stem in stem_index.prefix_matches(word) {
        let Some(item) = lexicon.get_by_id(&stem.item_id) else {
            continue;
        };
        if word.len() < stem.surface.len() {
            continue;
        }
        frontier.push(SearchPath::seed(stem, word, item, graph));
    }

    let mut finished = Vec::new();
    while !frontier.is_empty() {
        let mut next = Vec::new();
        for path in frontier {
            if path.tail.is_empty()
                && path.current_state_is_terminal(graph)
                && !path.attrs.contains(crate::phonetics::PhoneticAttribute::CannotTerminate)
            {
                finished.push(path.clone());
            }
            // A terminal-but-extendable path both finishes an analysis and
            // may still continue (e.g. nom_ST before derivation), so its
            // children are still explored below.
            let children = advance(&path, graph);
            for child in children {
                if frontier_len_would_require_guard(next.len()) && is_cyclic(&child) {
                    continue;
                }
                next.push(child);
            }
        }
        frontier = next;
    }
    finished
}

impl SearchPath {
    fn current_state_is_terminal(&self, graph: &Graph) -> bool {
        graph.state(self.current_state).terminal
    }
}

fn frontier_len_would_require_guard(len: usize) -> bool {
    len > CYCLE_GUARD_FRONTIER_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::parse_line;
    use crate::morphotactics::Morphotactics;

    fn one_item_lexicon(line: &str) -> (crate::lexicon::Lexicon, Morphotactics, StemTransitionIndex) {
        let mut lex = crate::lexicon::Lexicon::new();
        lex.add(parse_line(line).unwrap());
        let m = Morphotactics::build();
        let index = StemTransitionIndex::build(&lex, &m).unwrap();
        (lex, m, index)
    }

    #[test]
    fn analyzes_bare_noun() {
        let (lex, m, index) = one_item_lexicon("elma");
        let results = analyze("elma", &lex, &index, &m.graph);
        assert!(results.iter().any(|p| p.tail.is_empty()));
    }

    #[test]
    fn analyzes_plural_noun() {
        let (lex, m, index) = one_item_lexicon("elma");
        let results = analyze("elmalar", &lex, &index, &m.graph);
        assert!(results.iter().any(|p| p.tail.is_empty()));
    }

    #[test]
    fn analyzes_voicing_noun_with_accusative() {
        let (lex, m, index) = one_item_lexicon("kitap [A:Voicing]");
        let results = analyze("kitabı", &lex, &index, &m.graph);
        assert!(results.iter().any(|p| p.tail.is_empty() && p.root_surface == "kitab"));
    }
}
