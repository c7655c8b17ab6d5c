// Default word tokenizer.
//
// Rule: lower-case and NFC-compose the text, then a word is a maximal run of
// letters, combining marks, numbers and format characters (Unicode L*, M*,
// N*, Cf). Everything else (punctuation, symbols, whitespace) separates
// words, so "good—bad" and "a/b" split. The one exception is an apostrophe
// between two word characters, which is dropped so "don't" stays one token
// ("dont"). Single characters and numbers are ordinary tokens. No stemming.

use std::collections::HashSet;

use stop_words::{get, LANGUAGE};
use unicode_general_category::{get_general_category, GeneralCategory};
use unicode_normalization::UnicodeNormalization;

use super::traits::Tokenizer;

/// Lower-case, punctuation-stripped word tokenizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        split_words(text)
    }
}

/// English stop words from the `stop-words` crate.
///
/// Normalized with the same rule as document text, so "don't" in the list
/// matches "dont".
pub fn english_stop_words() -> HashSet<String> {
    let raw: Vec<String> = get(LANGUAGE::English);
    raw.iter().flat_map(|w| split_words(w)).collect()
}

/// Apply the normalization rule to `text` and split it into words.
pub fn split_words(text: &str) -> Vec<String> {
    let normalized: Vec<char> = text.to_lowercase().nfc().collect();

    let mut words = Vec::new();
    let mut current = String::new();
    for (i, &c) in normalized.iter().enumerate() {
        if is_word_char(c) {
            current.push(c);
        } else if is_apostrophe(c)
            && !current.is_empty()
            && normalized.get(i + 1).is_some_and(|&next| is_word_char(next))
        {
            // in-word apostrophe: join both halves
        } else if !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn is_word_char(c: char) -> bool {
    use GeneralCategory::*;
    matches!(
        get_general_category(c),
        UppercaseLetter
            | LowercaseLetter
            | TitlecaseLetter
            | ModifierLetter
            | OtherLetter
            | NonspacingMark
            | SpacingMark
            | EnclosingMark
            | DecimalNumber
            | LetterNumber
            | OtherNumber
            | Format
    )
}

fn is_apostrophe(c: char) -> bool {
    matches!(c, '\'' | '\u{2019}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        let tokens = split_words("It was not good, it was actually quite BAD!");
        assert_eq!(
            tokens,
            vec!["it", "was", "not", "good", "it", "was", "actually", "quite", "bad"]
        );
    }

    #[test]
    fn test_contractions_stay_whole() {
        assert_eq!(split_words("don't stop"), vec!["dont", "stop"]);
        assert_eq!(split_words("it\u{2019}s"), vec!["its"]);
        assert_eq!(split_words("rock 'n' roll"), vec!["rock", "n", "roll"]);
    }

    #[test]
    fn test_punctuation_between_words_separates() {
        assert_eq!(
            split_words("good\u{2014}bad end.Start a/b well-known"),
            vec!["good", "bad", "end", "start", "a", "b", "well", "known"]
        );
    }

    #[test]
    fn test_punctuation_only_yields_nothing() {
        assert!(split_words("... --- !!!").is_empty());
        assert!(split_words("").is_empty());
    }

    #[test]
    fn test_unicode_words_survive() {
        assert_eq!(split_words("Café  NAÏVE\tx"), vec!["café", "naïve", "x"]);
    }

    #[test]
    fn test_combining_marks_are_kept() {
        // Devanagari virama (U+094D) is a mark, not punctuation
        assert_eq!(split_words("हिन्दी"), vec!["हिन्दी"]);
    }

    #[test]
    fn test_decomposed_and_composed_forms_agree() {
        let composed = split_words("caf\u{e9}");
        let decomposed = split_words("cafe\u{301}");
        assert_eq!(composed, decomposed);
        assert_ne!(decomposed, split_words("cafe"));
    }

    #[test]
    fn test_english_stop_words() {
        let stop_words = english_stop_words();
        assert!(stop_words.contains("it"));
        assert!(stop_words.contains("was"));
        assert!(!stop_words.contains("embedding"));
    }
}
