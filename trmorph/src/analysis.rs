//! Turns a terminal `SearchPath` into an `Analysis`. Grounded in
//! `zeyrek/analyzer.py::_map_analysis`/`SingleAnalysis` construction.

use crate::lexicon::{DictionaryItem, Lexicon};
use crate::morpheme::PrimaryPos;
use crate::phonetics::RootAttribute;
use crate::search::SearchPath;

/// One morpheme/surface pair printed in an `Analysis`'s morpheme list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MorphemeSurface {
    pub morpheme_id: &'static str,
    pub surface: String,
}

/// A fully parsed morphological analysis of one surface word.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub dict_item_id: String,
    pub stem: String,
    pub morphemes: Vec<MorphemeSurface>,
    pub group_boundaries: Vec<usize>,
    pub pos: Option<PrimaryPos>,
}

/// Non-printing morphemes dropped from the morpheme list (spec.md §4.5).
fn is_non_printing(id: &str) -> bool {
    id == "Nom" || id == "Pnon"
}

pub fn parse(path: &SearchPath, lexicon: &Lexicon) -> Analysis {
    let dict_item_id = resolve_dict_item_id(&path.dict_item_id, lexicon);
    let stem = path.history[0].surface.clone();

    let printed: Vec<(bool, Option<PrimaryPos>, MorphemeSurface)> = path.history[1..]
        .iter()
        .filter(|h| !is_non_printing(h.morpheme.id))
        .map(|h| {
            (
                h.is_derivative,
                h.morpheme.pos,
                MorphemeSurface {
                    morpheme_id: h.morpheme.id,
                    surface: h.surface.clone(),
                },
            )
        })
        .collect();

    let morphemes: Vec<MorphemeSurface> = printed.iter().map(|(_, _, ms)| ms.clone()).collect();

    // Every derivational morpheme starts a new inflection group, including
    // one at index 0 (a root that derives immediately, with no inflection
    // of its own first).
    let group_boundaries: Vec<usize> = printed
        .iter()
        .enumerate()
        .filter(|(_, (is_derivative, _, _))| *is_derivative)
        .map(|(idx, _)| idx)
        .collect();

    let last_group_start = *group_boundaries.last().unwrap_or(&0);
    let pos = printed[last_group_start..]
        .iter()
        .find_map(|(_, pos, _)| *pos)
        .or_else(|| lexicon.get_by_id(&dict_item_id).map(|i| i.primary_pos));

    Analysis {
        dict_item_id,
        stem,
        morphemes,
        group_boundaries,
        pos,
    }
}

/// Substitutes `ref_item` when the stem's dictionary entry is a `Dummy`
/// compound placeholder (spec.md §4.5).
fn resolve_dict_item_id(id: &str, lexicon: &Lexicon) -> String {
    match lexicon.get_by_id(id) {
        Some(item) if item.has_attribute(RootAttribute::Dummy) => {
            item.ref_item.clone().unwrap_or_else(|| id.to_string())
        }
        _ => id.to_string(),
    }
}

pub fn dict_item<'a>(analysis: &Analysis, lexicon: &'a Lexicon) -> Option<&'a DictionaryItem> {
    lexicon.get_by_id(&analysis.dict_item_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::parse_line;
    use crate::morphotactics::Morphotactics;
    use crate::search::analyze;
    use crate::stem::StemTransitionIndex;

    #[test]
    fn parses_elmalar_dropping_pnon_and_nom() {
        let mut lex = Lexicon::new();
        lex.add(parse_line("elma").unwrap());
        let m = Morphotactics::build();
        let index = StemTransitionIndex::build(&lex, &m).unwrap();
        let results = analyze("elmalar", &lex, &index, &m.graph);
        let finished: Vec<&SearchPath> = results.iter().filter(|p| p.tail.is_empty()).collect();
        assert!(!finished.is_empty());
        let analysis = parse(finished[0], &lex);
        assert_eq!(analysis.stem, "elma");
        assert!(analysis.morphemes.iter().all(|m| m.morpheme_id != "Nom" && m.morpheme_id != "Pnon"));
        assert!(analysis.morphemes.iter().any(|m| m.morpheme_id == "A3pl"));
    }
}
