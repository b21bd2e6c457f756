//! The lexicon model: `DictionaryItem` plus an index supporting lookup by id
//! and by lemma. Grounded in `zeyrek/lexicon.py::DictionaryItem`/`RootLexicon`.

use crate::morpheme::{PrimaryPos, SecondaryPos};
use crate::phonetics::RootAttrSet;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct DictionaryItem {
    pub id: String,
    pub lemma: String,
    pub root: String,
    pub primary_pos: PrimaryPos,
    pub secondary_pos: SecondaryPos,
    pub attributes: RootAttrSet,
    pub pronunciation: String,
    pub index: u32,
    /// Late-bound reference to another item, e.g. a `Dummy` compound stand-in
    /// substituting its `ref_item` during analysis parsing (spec.md §4.5).
    pub ref_item: Option<String>,
}

impl DictionaryItem {
    pub fn has_attribute(&self, a: crate::phonetics::RootAttribute) -> bool {
        self.attributes.contains(a)
    }

    pub fn has_any_attribute(&self, attrs: &[crate::phonetics::RootAttribute]) -> bool {
        self.attributes.contains_any(attrs)
    }
}

/// `lemma_PrimaryPos[_SecondaryPos][_index]`, per spec.md §3's id invariant.
pub fn generate_id(
    lemma: &str,
    primary_pos: PrimaryPos,
    secondary_pos: SecondaryPos,
    index: u32,
) -> String {
    let mut id = format!("{lemma}_{}", primary_pos.as_str());
    if secondary_pos != SecondaryPos::None_ {
        id = format!("{id}_{}", secondary_pos.as_str());
    }
    if index > 0 {
        id = format!("{id}_{index}");
    }
    id
}

#[derive(Debug, Default)]
pub struct Lexicon {
    items: Vec<DictionaryItem>,
    by_id: HashMap<String, usize>,
    by_lemma: HashMap<String, Vec<usize>>,
}

impl Lexicon {
    pub fn new() -> Self {
        Lexicon::default()
    }

    /// Adds an item. A duplicate id whose attributes match the existing
    /// entry is dropped with a warning and the existing entry retained; if
    /// attributes differ, the incoming item is retried under a bumped index
    /// (and thus a distinct id), per spec.md §7's runtime non-errors.
    pub fn add(&mut self, mut item: DictionaryItem) {
        if let Some(&existing_idx) = self.by_id.get(&item.id) {
            if self.items[existing_idx].attributes == item.attributes {
                log::warn!("dropping duplicate dictionary id {}", item.id);
                return;
            }
            item.index += 1;
            item.id = generate_id(&item.lemma, item.primary_pos, item.secondary_pos, item.index);
            self.add(item);
            return;
        }
        let idx = self.items.len();
        self.by_lemma
            .entry(item.lemma.clone())
            .or_default()
            .push(idx);
        self.by_id.insert(item.id.clone(), idx);
        self.items.push(item);
    }

    pub fn get_by_id(&self, id: &str) -> Option<&DictionaryItem> {
        self.by_id.get(id).map(|i| &self.items[*i])
    }

    pub fn get_by_lemma(&self, lemma: &str) -> Vec<&DictionaryItem> {
        self.by_lemma
            .get(lemma)
            .map(|idxs| idxs.iter().map(|i| &self.items[*i]).collect())
            .unwrap_or_default()
    }

    pub fn items(&self) -> impl Iterator<Item = &DictionaryItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
