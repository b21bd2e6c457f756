//! The condition predicate algebra gating `SuffixTransition`s. A tagged sum
//! type with one variant per predicate in spec.md §4.2 plus And/Or/Not
//! combinators, evaluated by a single `accepts` function against a
//! `SearchPath`. Grounded in `zeyrek/conditions.py`.

use crate::graph::StateId;
use crate::morpheme::SecondaryPos;
use crate::phonetics::{PhoneticAttribute, RootAttribute};
use crate::search::SearchPath;
use petgraph::graph::NodeIndex;

#[derive(Debug, Clone)]
pub enum Condition {
    HasRootAttribute(RootAttribute),
    HasAnyRootAttribute(Vec<RootAttribute>),
    HasPhoneticAttribute(PhoneticAttribute),
    DictionaryItemIs(&'static str),
    DictionaryItemIsAny(Vec<&'static str>),
    SecondaryPosIs(SecondaryPos),
    HasTail,
    HasAnySuffixSurface,
    HasDerivation,
    NoSurfaceAfterDerivation,
    LastDerivationIs(&'static str),
    LastDerivationIsAny(Vec<&'static str>),
    HasTailSequence(Vec<&'static str>),
    ContainsMorpheme(Vec<&'static str>),
    ContainsMorphemeSequence(Vec<&'static str>),
    PreviousMorphemeIs(&'static str),
    PreviousMorphemeIsAny(Vec<&'static str>),
    PreviousStateIs(NodeIndex),
    PreviousStateIsNot(NodeIndex),
    PreviousStateIsAny(Vec<NodeIndex>),
    CurrentGroupContainsAny(Vec<NodeIndex>),
    PreviousGroupContains(Vec<NodeIndex>),
    PreviousGroupContainsMorpheme(Vec<&'static str>),
    RootSurfaceIs(&'static str),
    RootSurfaceIsAny(Vec<&'static str>),
    And(Box<Condition>, Box<Condition>),
    Or(Box<Condition>, Box<Condition>),
    Not(Box<Condition>),
}

impl Condition {
    pub fn and(self, other: Condition) -> Condition {
        Condition::And(Box::new(self), Box::new(other))
    }
    pub fn or(self, other: Condition) -> Condition {
        Condition::Or(Box::new(self), Box::new(other))
    }
    pub fn and_not(self, other: Condition) -> Condition {
        Condition::And(Box::new(self), Box::new(Condition::Not(Box::new(other))))
    }
    pub fn not_(self) -> Condition {
        Condition::Not(Box::new(self))
    }
}

pub fn has_root(a: RootAttribute) -> Condition {
    Condition::HasRootAttribute(a)
}

pub fn not_have_root(a: RootAttribute) -> Condition {
    Condition::Not(Box::new(Condition::HasRootAttribute(a)))
}

pub fn has_phon(a: PhoneticAttribute) -> Condition {
    Condition::HasPhoneticAttribute(a)
}

/// Evaluates `cond` against `path` as it stands *before* the transition
/// under consideration is appended (spec.md §8 property 4).
pub fn accepts(cond: &Condition, path: &SearchPath) -> bool {
    use Condition::*;
    match cond {
        HasRootAttribute(a) => path.root_attrs.contains(*a),
        HasAnyRootAttribute(set) => path.root_attrs.contains_any(set),
        HasPhoneticAttribute(a) => path.attrs.contains(*a),
        DictionaryItemIs(id) => path.dict_item_id == *id,
        DictionaryItemIsAny(ids) => ids.iter().any(|i| path.dict_item_id == *i),
        SecondaryPosIs(p) => path.root_secondary_pos == *p,
        HasTail => !path.tail.is_empty(),
        HasAnySuffixSurface => path.history[1..].iter().any(|h| !h.surface.is_empty()),
        HasDerivation => path.history.iter().any(|h| h.is_derivative),
        NoSurfaceAfterDerivation => {
            for h in path.history.iter().rev() {
                if h.is_derivative {
                    return true;
                }
                if !h.surface.is_empty() {
                    return false;
                }
            }
            true
        }
        LastDerivationIs(id) => last_derivation_morpheme(path).map_or(false, |m| m == *id),
        LastDerivationIsAny(ids) => {
            last_derivation_morpheme(path).map_or(false, |m| ids.iter().any(|i| *i == m))
        }
        HasTailSequence(ids) => {
            if ids.len() > path.history.len() - 1 {
                return false;
            }
            let tail_hist = &path.history[path.history.len() - ids.len()..];
            tail_hist
                .iter()
                .zip(ids.iter())
                .all(|(h, id)| h.morpheme.id == *id)
        }
        ContainsMorpheme(ids) => path.history[1..]
            .iter()
            .any(|h| ids.iter().any(|i| *i == h.morpheme.id)),
        ContainsMorphemeSequence(ids) => contains_subsequence(path, ids),
        PreviousMorphemeIs(id) => previous_morpheme(path).map_or(false, |m| m == *id),
        PreviousMorphemeIsAny(ids) => {
            previous_morpheme(path).map_or(false, |m| ids.iter().any(|i| *i == m))
        }
        PreviousStateIs(s) => previous_state(path).map_or(false, |st| st == *s),
        PreviousStateIsNot(s) => previous_state(path).map_or(false, |st| st != *s),
        PreviousStateIsAny(states) => {
            previous_state(path).map_or(false, |st| states.iter().any(|s| *s == st))
        }
        CurrentGroupContainsAny(states) => {
            for h in path.history.iter().rev() {
                if h.is_derivative {
                    break;
                }
                if states.iter().any(|s| *s == h.state) {
                    return true;
                }
            }
            false
        }
        PreviousGroupContains(states) => {
            let mut past_current = false;
            for h in path.history.iter().rev() {
                if !past_current {
                    if h.is_derivative {
                        past_current = true;
                    }
                    continue;
                }
                if h.is_derivative {
                    break;
                }
                if states.iter().any(|s| *s == h.state) {
                    return true;
                }
            }
            false
        }
        PreviousGroupContainsMorpheme(ids) => {
            let mut past_current = false;
            for h in path.history.iter().rev() {
                if !past_current {
                    if h.is_derivative {
                        past_current = true;
                    }
                    continue;
                }
                if h.is_derivative {
                    break;
                }
                if ids.iter().any(|i| *i == h.morpheme.id) {
                    return true;
                }
            }
            false
        }
        RootSurfaceIs(s) => path.root_surface == *s,
        RootSurfaceIsAny(set) => set.iter().any(|s| path.root_surface == *s),
        And(a, b) => accepts(a, path) && accepts(b, path),
        Or(a, b) => accepts(a, path) || accepts(b, path),
        Not(c) => !accepts(c, path),
    }
}

fn last_derivation_morpheme(path: &SearchPath) -> Option<&'static str> {
    path.history
        .iter()
        .rev()
        .find(|h| h.is_derivative)
        .map(|h| h.morpheme.id)
}

fn previous_morpheme(path: &SearchPath) -> Option<&'static str> {
    if path.history.len() < 2 {
        return None;
    }
    Some(path.history[path.history.len() - 2].morpheme.id)
}

fn previous_state(path: &SearchPath) -> Option<StateId> {
    if path.history.len() < 2 {
        return None;
    }
    Some(path.history[path.history.len() - 2].state)
}

fn contains_subsequence(path: &SearchPath, ids: &[&'static str]) -> bool {
    if ids.is_empty() {
        return true;
    }
    let morphemes: Vec<&'static str> = path.history.iter().map(|h| h.morpheme.id).collect();
    morphemes
        .windows(ids.len())
        .any(|w| w.iter().zip(ids.iter()).all(|(a, b)| a == b))
}
