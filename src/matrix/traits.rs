// Tokenizer trait — swap-ready abstraction.
//
// The builder only needs "text in, word tokens out". The default rule lives
// in `tokenize::WordTokenizer`; anything else (a stemmer, an n-gram splitter)
// can be plugged in without touching matrix construction.

/// Trait for splitting raw document text into word tokens.
pub trait Tokenizer {
    /// Split `text` into tokens, in order of appearance. Duplicates are kept.
    fn tokenize(&self, text: &str) -> Vec<String>;
}

impl<F> Tokenizer for F
where
    F: Fn(&str) -> Vec<String>,
{
    fn tokenize(&self, text: &str) -> Vec<String> {
        self(text)
    }
}
