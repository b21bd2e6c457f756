//! Default human-readable rendering of an `Analysis`. This is the one
//! external-interface collaborator implemented in-crate rather than left as
//! an external seam (spec.md §6 treats output formatting as out of core
//! scope, but SPEC_FULL.md §6 provides a thin default implementation).

use crate::analysis::Analysis;
use crate::lexicon::Lexicon;
use std::fmt::Write as _;

pub struct DefaultFormatter;

impl DefaultFormatter {
    /// `stem:morph1+morph2|derivation→morph3`: a derivational morpheme's
    /// entry gets a leading `|` at its group boundary *and* a trailing `→`
    /// before whatever follows it, per spec.md §6.
    pub fn format(analysis: &Analysis, lexicon: &Lexicon) -> String {
        let lemma = lexicon
            .get_by_id(&analysis.dict_item_id)
            .map(|i| i.lemma.as_str())
            .unwrap_or(&analysis.dict_item_id);
        let pos = analysis
            .pos
            .map(|p| p.as_str())
            .unwrap_or("Unk");

        let mut out = String::new();
        write!(out, "[{lemma}:{pos}] {}", analysis.stem).unwrap();

        for (idx, ms) in analysis.morphemes.iter().enumerate() {
            let is_derivation = analysis.group_boundaries.contains(&idx);
            let sep = if is_derivation { "|" } else { "+" };
            write!(out, "{sep}{}", ms.morpheme_id).unwrap();
            if !ms.surface.is_empty() {
                write!(out, ":{}", ms.surface).unwrap();
            }
            if is_derivation {
                out.push('→');
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::parse_line;
    use crate::morphotactics::Morphotactics;
    use crate::search::analyze;
    use crate::stem::StemTransitionIndex;

    #[test]
    fn formats_elmalar() {
        let mut lex = Lexicon::new();
        lex.add(parse_line("elma").unwrap());
        let m = Morphotactics::build();
        let index = StemTransitionIndex::build(&lex, &m).unwrap();
        let results = analyze("elmalar", &lex, &index, &m.graph);
        let finished = results.into_iter().find(|p| p.tail.is_empty()).unwrap();
        let analysis = crate::analysis::parse(&finished, &lex);
        let rendered = DefaultFormatter::format(&analysis, &lex);
        assert!(rendered.starts_with("[elma:Noun] elma"));
    }
}
