//! Pure functions over Turkish strings: vowel/consonant classification,
//! voicing/devoicing, circumflex normalization, and `compute_attrs`.
//!
//! Grounded in `zeyrek/tr.py` (alphabet tables, voice/devoice, last-vowel
//! scan) and `zeyrek/attributes.py::calculate_phonetic_attributes`.

use lru::LruCache;
use std::fmt;
use std::num::NonZeroUsize;
use std::sync::{Mutex, OnceLock};

const VOWELS: &str = "aeıioöuü";
const BACK_VOWELS: &str = "aıou";
const ROUNDED_VOWELS: &str = "oöuü";
const VOICELESS: &str = "fstkçşhp";
const VOICELESS_STOP: &str = "çkpt";

pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(c)
}

pub fn is_back_vowel(c: char) -> bool {
    BACK_VOWELS.contains(c)
}

pub fn is_rounded_vowel(c: char) -> bool {
    ROUNDED_VOWELS.contains(c)
}

pub fn is_voiceless(c: char) -> bool {
    VOICELESS.contains(c)
}

pub fn is_voiceless_stop(c: char) -> bool {
    VOICELESS_STOP.contains(c)
}

/// ç->c, g->ğ, k->ğ, p->b, t->d. Returns `None` if `c` does not voice.
pub fn voice(c: char) -> Option<char> {
    match c {
        'ç' => Some('c'),
        'g' => Some('ğ'),
        'k' => Some('ğ'),
        'p' => Some('b'),
        't' => Some('d'),
        _ => None,
    }
}

/// b->p, c->ç, d->t, g->k, ğ->k.
pub fn devoice(c: char) -> Option<char> {
    match c {
        'b' => Some('p'),
        'c' => Some('ç'),
        'd' => Some('t'),
        'g' => Some('k'),
        'ğ' => Some('k'),
        _ => None,
    }
}

pub fn normalize_circumflex(word: &str) -> String {
    word.chars()
        .map(|c| match c {
            'â' => 'a',
            'î' => 'i',
            'û' => 'u',
            'Â' => 'A',
            'Î' => 'İ',
            'Û' => 'U',
            other => other,
        })
        .collect()
}

pub fn get_last_vowel(word: &str) -> Option<char> {
    word.chars().rev().find(|c| is_vowel(*c))
}

pub fn contains_vowel(word: &str) -> bool {
    word.chars().any(is_vowel)
}

/// Closed 19-value enum over phonetic attributes of an accumulated surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PhoneticAttribute {
    HasVowel = 0,
    HasNoVowel = 1,
    LastLetterVowel = 2,
    LastLetterConsonant = 3,
    LastLetterVoiceless = 4,
    LastLetterVoicelessStop = 5,
    LastLetterVoicedStop = 6,
    LastLetterDropped = 7,
    LastVowelFrontal = 8,
    LastVowelBack = 9,
    LastVowelRounded = 10,
    LastVowelUnrounded = 11,
    FirstLetterVowel = 12,
    FirstLetterConsonant = 13,
    ExpectsVowel = 14,
    ExpectsConsonant = 15,
    ModifiedPronoun = 16,
    UnmodifiedPronoun = 17,
    CannotTerminate = 18,
}

/// A bitset over `PhoneticAttribute`. O(1) membership/insert/remove, as
/// spec.md §9 recommends.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct AttrSet(u32);

impl AttrSet {
    pub fn new() -> Self {
        AttrSet(0)
    }

    pub fn insert(&mut self, a: PhoneticAttribute) {
        self.0 |= 1 << (a as u32);
    }

    pub fn remove(&mut self, a: PhoneticAttribute) {
        self.0 &= !(1 << (a as u32));
    }

    pub fn contains(&self, a: PhoneticAttribute) -> bool {
        self.0 & (1 << (a as u32)) != 0
    }

    pub fn with(mut self, a: PhoneticAttribute) -> Self {
        self.insert(a);
        self
    }

    pub fn union(&self, other: &AttrSet) -> AttrSet {
        AttrSet(self.0 | other.0)
    }
}

impl fmt::Debug for AttrSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use PhoneticAttribute::*;
        let all = [
            HasVowel,
            HasNoVowel,
            LastLetterVowel,
            LastLetterConsonant,
            LastLetterVoiceless,
            LastLetterVoicelessStop,
            LastLetterVoicedStop,
            LastLetterDropped,
            LastVowelFrontal,
            LastVowelBack,
            LastVowelRounded,
            LastVowelUnrounded,
            FirstLetterVowel,
            FirstLetterConsonant,
            ExpectsVowel,
            ExpectsConsonant,
            ModifiedPronoun,
            UnmodifiedPronoun,
            CannotTerminate,
        ];
        let present: Vec<String> = all
            .iter()
            .filter(|a| self.contains(**a))
            .map(|a| format!("{:?}", a))
            .collect();
        write!(f, "AttrSet({})", present.join("|"))
    }
}

type AttrCache = Mutex<LruCache<(String, Option<AttrSet>), AttrSet>>;

fn attr_cache() -> &'static AttrCache {
    static CACHE: OnceLock<AttrCache> = OnceLock::new();
    CACHE.get_or_init(|| Mutex::new(LruCache::new(NonZeroUsize::new(128).unwrap())))
}

/// Derives the `PhoneticAttribute` set for an accumulated surface, given the
/// attributes of the path that preceded it. Pure, total; memoized behind a
/// small LRU cache since `advance` recomputes the same short surfaces
/// repeatedly across sibling search paths.
pub fn compute_attrs(word: &str, predecessor: Option<AttrSet>) -> AttrSet {
    let key = (word.to_string(), predecessor);
    if let Some(hit) = attr_cache().lock().unwrap().get(&key) {
        return *hit;
    }
    let computed = compute_attrs_uncached(word, predecessor);
    attr_cache().lock().unwrap().put(key, computed);
    computed
}

fn compute_attrs_uncached(word: &str, predecessor: Option<AttrSet>) -> AttrSet {
    use PhoneticAttribute::*;

    if word.is_empty() {
        return predecessor.unwrap_or_default();
    }

    let mut attrs = AttrSet::new();

    let last = word.chars().last().unwrap();
    let last_vowel;
    if is_vowel(last) {
        attrs.insert(LastLetterVowel);
        last_vowel = Some(last);
    } else {
        attrs.insert(LastLetterConsonant);
        if is_voiceless(last) {
            attrs.insert(LastLetterVoiceless);
        }
        if is_voiceless_stop(last) {
            attrs.insert(LastLetterVoicelessStop);
        }
        last_vowel = get_last_vowel(word);
    }

    let first = word.chars().next().unwrap();
    if is_vowel(first) {
        attrs.insert(FirstLetterVowel);
    } else {
        attrs.insert(FirstLetterConsonant);
    }

    match last_vowel {
        Some(v) => {
            if is_back_vowel(v) {
                attrs.insert(LastVowelBack);
            } else {
                attrs.insert(LastVowelFrontal);
            }
            if is_rounded_vowel(v) {
                attrs.insert(LastVowelRounded);
            } else {
                attrs.insert(LastVowelUnrounded);
            }
            attrs
        }
        None => {
            // No vowel anywhere in `word`: inherit predecessor, force the
            // no-vowel triple, discard LastLetterVowel/ExpectsConsonant.
            let mut merged = predecessor.unwrap_or_default().union(&attrs);
            merged.insert(LastLetterConsonant);
            merged.insert(FirstLetterConsonant);
            merged.insert(HasNoVowel);
            merged.remove(LastLetterVowel);
            merged.remove(ExpectsConsonant);
            merged
        }
    }
}

/// Closed enum on dictionary items (~30 values). Grounded in
/// `zeyrek/attributes.py::RootAttribute`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RootAttribute {
    Voicing,
    NoVoicing,
    Doubling,
    LastVowelDrop,
    ProgressiveVowelDrop,
    InverseHarmony,
    PassiveIn,
    CausativeT,
    AoristI,
    AoristA,
    CompoundP3sg,
    CompoundP3sgRoot,
    ImplicitPlural,
    ImplicitP1sg,
    ImplicitP2sg,
    FamilyMember,
    NoQuote,
    Dummy,
    Reflexive,
    Reciprocal,
    NonReciprocal,
    ImplicitDative,
    PronunciationGuessed,
    Ext,
    Runtime,
    NounConsInsertN,
    NoSuffix,
    Informal,
    Unknown,
}

#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct RootAttrSet(u64);

impl RootAttrSet {
    pub fn new() -> Self {
        RootAttrSet(0)
    }
    pub fn insert(&mut self, a: RootAttribute) {
        self.0 |= 1 << (a as u64);
    }
    pub fn contains(&self, a: RootAttribute) -> bool {
        self.0 & (1 << (a as u64)) != 0
    }
    pub fn contains_any(&self, attrs: &[RootAttribute]) -> bool {
        attrs.iter().any(|a| self.contains(*a))
    }
    pub fn iter(&self) -> impl Iterator<Item = RootAttribute> + '_ {
        use RootAttribute::*;
        [
            Voicing,
            NoVoicing,
            Doubling,
            LastVowelDrop,
            ProgressiveVowelDrop,
            InverseHarmony,
            PassiveIn,
            CausativeT,
            AoristI,
            AoristA,
            CompoundP3sg,
            CompoundP3sgRoot,
            ImplicitPlural,
            ImplicitP1sg,
            ImplicitP2sg,
            FamilyMember,
            NoQuote,
            Dummy,
            Reflexive,
            Reciprocal,
            NonReciprocal,
            ImplicitDative,
            PronunciationGuessed,
            Ext,
            Runtime,
            NounConsInsertN,
            NoSuffix,
            Informal,
            Unknown,
        ]
        .into_iter()
        .filter(move |a| self.contains(*a))
    }
}

impl fmt::Debug for RootAttrSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RootAttrSet({:?})", self.iter().collect::<Vec<_>>())
    }
}

impl FromIterator<RootAttribute> for RootAttrSet {
    fn from_iter<T: IntoIterator<Item = RootAttribute>>(iter: T) -> Self {
        let mut s = RootAttrSet::new();
        for a in iter {
            s.insert(a);
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PhoneticAttribute::*;

    #[test]
    fn voice_devoice() {
        assert_eq!(voice('p'), Some('b'));
        assert_eq!(voice('k'), Some('ğ'));
        assert_eq!(voice('a'), None);
        assert_eq!(devoice('b'), Some('p'));
        assert_eq!(devoice('ğ'), Some('k'));
    }

    #[test]
    fn attrs_of_elma() {
        let attrs = compute_attrs("elma", None);
        assert!(attrs.contains(LastLetterVowel));
        assert!(attrs.contains(LastVowelBack));
        assert!(attrs.contains(LastVowelUnrounded));
        assert!(attrs.contains(FirstLetterVowel));
    }

    #[test]
    fn attrs_of_kitap() {
        let attrs = compute_attrs("kitap", None);
        assert!(attrs.contains(LastLetterConsonant));
        assert!(attrs.contains(LastLetterVoiceless));
        assert!(attrs.contains(LastLetterVoicelessStop));
        assert!(attrs.contains(LastVowelBack));
        assert!(attrs.contains(LastVowelUnrounded));
    }

    #[test]
    fn attrs_with_no_vowel_inherits_predecessor() {
        let pred = compute_attrs("oku", None);
        let attrs = compute_attrs("m", Some(pred));
        assert!(attrs.contains(HasNoVowel));
        assert!(attrs.contains(LastLetterConsonant));
        assert!(attrs.contains(FirstLetterConsonant));
        assert!(!attrs.contains(LastLetterVowel));
    }

    #[test]
    fn empty_word_returns_predecessor() {
        let pred = compute_attrs("ev", None);
        let attrs = compute_attrs("", Some(pred));
        assert_eq!(attrs, pred);
    }

    #[test]
    fn circumflex_normalization() {
        assert_eq!(normalize_circumflex("hâlâ"), "hala");
    }
}
