//! Whitespace/punctuation tokenizer standing in for the NLTK-based
//! tokenizer `zeyrek` leans on; tokenization is an external-collaborator
//! concern per spec.md §1, so this is deliberately minimal.
//!
//! Iterates by grapheme cluster rather than `char`, matching the teacher's
//! `Lemma`/`lemma.rs` use of `unicode_segmentation` for boundary-safe
//! splitting (Turkish itself has no multi-codepoint graphemes, but input
//! text handed to the CLI is not guaranteed to be pure Turkish).

use unicode_segmentation::UnicodeSegmentation;

pub fn tokenize(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    for g in text.graphemes(true) {
        if g.chars().all(char::is_whitespace) {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }
        if g.chars().all(char::is_alphanumeric) {
            current.push_str(g);
        } else {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            words.push(g.to_string());
        }
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_whitespace_and_punctuation() {
        assert_eq!(tokenize("Bunu nereye koydun?"), vec!["Bunu", "nereye", "koydun", "?"]);
    }
}
