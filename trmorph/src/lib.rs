//! Turkish morphological analyzer core: morphotactics graph, stem-transition
//! index, phonotactic root mutation, and the search/walker procedure that
//! parses a surface word into zero or more `Analysis` results.
//!
//! External collaborators this crate does *not* own: tokenization (the
//! caller splits text into words before calling `Analyzer::analyze`) and
//! full dictionary-resource management beyond the bundled starter lexicon
//! and line parser in [`dictionary`].

pub mod analysis;
pub mod condition;
pub mod dictionary;
pub mod errors;
pub mod format;
pub mod graph;
pub mod lexicon;
pub mod morpheme;
pub mod morphotactics;
pub mod phonetics;
pub mod search;
pub mod stem;
pub mod template;

pub use analysis::Analysis;
pub use errors::MorphError;
pub use lexicon::{DictionaryItem, Lexicon};

use morphotactics::Morphotactics;
use stem::StemTransitionIndex;

/// A built analyzer: an immutable `Lexicon`, `Morphotactics` graph, and
/// `StemTransitionIndex`, ready to answer `analyze(word)` calls. Safe to
/// share across threads once constructed (`Send + Sync`, spec.md §5).
pub struct Analyzer {
    lexicon: Lexicon,
    morphotactics: Morphotactics,
    stem_index: StemTransitionIndex,
}

impl Analyzer {
    pub fn new(lexicon: Lexicon) -> Result<Self, MorphError> {
        let morphotactics = Morphotactics::build();
        let stem_index = StemTransitionIndex::build(&lexicon, &morphotactics)?;
        Ok(Analyzer {
            lexicon,
            morphotactics,
            stem_index,
        })
    }

    pub fn with_bundled_dictionary() -> Result<Self, MorphError> {
        Analyzer::new(dictionary::bundled())
    }

    /// Analyzes one already-tokenized surface word. Total: never errors,
    /// returns an empty `Vec` rather than an Unknown placeholder — callers
    /// that want a placeholder synthesize it themselves (spec.md §4.4's
    /// Failure clause).
    pub fn analyze(&self, word: &str) -> Vec<Analysis> {
        let normalized = phonetics::normalize_circumflex(&word.to_lowercase());
        let paths = search::analyze(
            &normalized,
            &self.lexicon,
            &self.stem_index,
            &self.morphotactics.graph,
        );
        paths.iter().map(|p| analysis::parse(p, &self.lexicon)).collect()
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Rebuilds the stem-transition index after the lexicon has been
    /// extended (spec.md §5's mutation rule — must not run concurrently
    /// with in-flight analyses).
    pub fn add_item(&mut self, item: DictionaryItem) -> Result<(), MorphError> {
        self.lexicon.add(item);
        self.stem_index = StemTransitionIndex::build(&self.lexicon, &self.morphotactics)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_dictionary_analyzer_builds() {
        let analyzer = Analyzer::with_bundled_dictionary().unwrap();
        assert!(!analyzer.lexicon().is_empty());
    }

    #[test]
    fn analyzes_elma() {
        let analyzer = Analyzer::with_bundled_dictionary().unwrap();
        let results = analyzer.analyze("elma");
        assert!(results.iter().any(|a| a.stem == "elma"));
    }

    #[test]
    fn unknown_word_returns_empty() {
        let analyzer = Analyzer::with_bundled_dictionary().unwrap();
        let results = analyzer.analyze("zzzqqqxyz");
        assert!(results.is_empty());
    }
}
