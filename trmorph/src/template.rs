//! Surface-template tokenization and instantiation. Pre-tokenized once at
//! graph-construction time so `advance` does no string parsing per step, per
//! spec.md §9.

use crate::phonetics::{AttrSet, PhoneticAttribute::*};

/// One token of a pre-tokenized surface template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateToken {
    /// Literal character, always produced.
    Literal(char),
    /// `I` vowel placeholder: harmonizes to {i, ü, ı, u}.
    VowelI,
    /// `A` vowel placeholder: harmonizes to {e, a}.
    VowelA,
    /// `+X`: produced only if prior LastLetter is a vowel.
    OptionalVowelI,
    OptionalVowelA,
    OptionalLiteral(char),
    /// `>X`: X devoiced if LastLetter is voiceless.
    Devoicing(char),
    /// `~X`: LAST_VOICED marker token — append X, then mark ExpectsConsonant.
    LastVoiced(char),
    /// `!X`: LAST_NOT_VOICED marker token — append X, then mark ExpectsVowel + CannotTerminate.
    LastNotVoiced(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndMarker {
    None,
    LastVoiced,
    LastNotVoiced,
}

/// A template string pre-tokenized into template tokens plus its derived
/// implicit vowel/consonant-start constraint (spec.md §4.2, last paragraph).
#[derive(Debug, Clone)]
pub struct Template {
    pub tokens: Vec<TemplateToken>,
    pub end_marker: EndMarker,
    /// Derived once at construction: true if the template (after stripping
    /// sigils) begins with a consonant, implying ¬ExpectsVowel.
    pub starts_with_consonant: Option<bool>,
}

pub fn tokenize(raw: &str) -> Template {
    let mut tokens = Vec::new();
    let mut end_marker = EndMarker::None;
    let chars: Vec<char> = raw.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        match c {
            'I' => tokens.push(TemplateToken::VowelI),
            'A' => tokens.push(TemplateToken::VowelA),
            '+' => {
                i += 1;
                if i >= chars.len() {
                    break;
                }
                match chars[i] {
                    'I' => tokens.push(TemplateToken::OptionalVowelI),
                    'A' => tokens.push(TemplateToken::OptionalVowelA),
                    lit => tokens.push(TemplateToken::OptionalLiteral(lit)),
                }
            }
            '>' => {
                i += 1;
                if i >= chars.len() {
                    break;
                }
                tokens.push(TemplateToken::Devoicing(chars[i]));
            }
            '~' => {
                i += 1;
                if i >= chars.len() {
                    break;
                }
                tokens.push(TemplateToken::LastVoiced(chars[i]));
                end_marker = EndMarker::LastVoiced;
            }
            '!' => {
                i += 1;
                if i >= chars.len() {
                    break;
                }
                tokens.push(TemplateToken::LastNotVoiced(chars[i]));
                end_marker = EndMarker::LastNotVoiced;
            }
            lit => tokens.push(TemplateToken::Literal(lit)),
        }
        i += 1;
    }

    let starts_with_consonant = first_surface_char_class(&tokens);

    Template {
        tokens,
        end_marker,
        starts_with_consonant,
    }
}

/// `Some(true)` if the template's first always-or-sometimes-produced
/// character is a consonant, `Some(false)` if a vowel, `None` if the
/// template is empty (epsilon edge, no implicit constraint).
fn first_surface_char_class(tokens: &[TemplateToken]) -> Option<bool> {
    for t in tokens {
        let c = match t {
            TemplateToken::Literal(c) => *c,
            TemplateToken::OptionalLiteral(c) => *c,
            TemplateToken::Devoicing(c) => *c,
            TemplateToken::LastVoiced(c) => *c,
            TemplateToken::LastNotVoiced(c) => *c,
            TemplateToken::VowelI | TemplateToken::VowelA => return Some(false),
            TemplateToken::OptionalVowelI | TemplateToken::OptionalVowelA => continue,
        };
        return Some(!crate::phonetics::is_vowel(c));
    }
    None
}

fn harmonize_i(attrs: &AttrSet) -> char {
    let back = attrs.contains(LastVowelBack);
    let rounded = attrs.contains(LastVowelRounded);
    match (back, rounded) {
        (false, false) => 'i',
        (false, true) => 'ü',
        (true, false) => 'ı',
        (true, true) => 'u',
    }
}

fn harmonize_a(attrs: &AttrSet) -> char {
    if attrs.contains(LastVowelBack) {
        'a'
    } else {
        'e'
    }
}

/// Materializes the surface string for `template` given the accumulated
/// `attrs` of the path so far. Mirrors `generate_surface` in
/// `zeyrek/morphotactics.py`.
pub fn instantiate(template: &Template, attrs: &AttrSet) -> String {
    let mut out = String::new();
    let last_is_vowel = attrs.contains(LastLetterVowel);
    let last_voiceless = attrs.contains(LastLetterVoiceless);

    for (idx, tok) in template.tokens.iter().enumerate() {
        match tok {
            TemplateToken::Literal(c) => out.push(*c),
            TemplateToken::VowelI => {
                // A_VOWEL/I_VOWEL elision: if this is the first token and the
                // prior last letter is already a vowel, yield nothing.
                if idx == 0 && last_is_vowel {
                    continue;
                }
                out.push(harmonize_i(attrs));
            }
            TemplateToken::VowelA => {
                if idx == 0 && last_is_vowel {
                    continue;
                }
                out.push(harmonize_a(attrs));
            }
            TemplateToken::OptionalLiteral(c) => {
                if last_is_vowel {
                    out.push(*c);
                }
            }
            TemplateToken::OptionalVowelI => {
                if last_is_vowel {
                    out.push(harmonize_i(attrs));
                }
            }
            TemplateToken::OptionalVowelA => {
                if last_is_vowel {
                    out.push(harmonize_a(attrs));
                }
            }
            TemplateToken::Devoicing(c) => {
                if last_voiceless {
                    out.push(crate::phonetics::devoice(*c).unwrap_or(*c));
                } else {
                    out.push(*c);
                }
            }
            TemplateToken::LastVoiced(c) => out.push(*c),
            TemplateToken::LastNotVoiced(c) => out.push(*c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phonetics::compute_attrs;

    #[test]
    fn dative_harmonizes_and_drops_y_after_consonant() {
        let tmpl = tokenize("+yA");
        let attrs = compute_attrs("ev", None);
        assert_eq!(instantiate(&tmpl, &attrs), "e");
    }

    #[test]
    fn dative_keeps_y_after_vowel() {
        let tmpl = tokenize("+yA");
        let attrs = compute_attrs("elma", None);
        assert_eq!(instantiate(&tmpl, &attrs), "ya");
    }

    #[test]
    fn devoicing_template() {
        let tmpl = tokenize(">dAn");
        let attrs = compute_attrs("kitap", None);
        assert_eq!(instantiate(&tmpl, &attrs), "tan");
    }

    #[test]
    fn plain_lar_suffix() {
        let tmpl = tokenize("lAr");
        let attrs = compute_attrs("elma", None);
        assert_eq!(instantiate(&tmpl, &attrs), "lar");
    }
}
