// Vocabulary — the sorted set of distinct terms in a corpus.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

/// Distinct terms in lexicographic (byte) order, with term -> column lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Vocabulary {
    terms: Vec<String>,
    index: HashMap<String, usize>,
}

impl Vocabulary {
    /// Build a vocabulary from any collection of token lists.
    pub fn from_tokens<'a, I, T>(token_lists: I) -> Self
    where
        I: IntoIterator<Item = &'a T>,
        T: AsRef<[String]> + 'a + ?Sized,
    {
        let unique: BTreeSet<&str> = token_lists
            .into_iter()
            .flat_map(|tokens| tokens.as_ref().iter().map(String::as_str))
            .collect();
        Self::from(unique.into_iter().map(str::to_string).collect::<Vec<_>>())
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Column index of `term`, if it is in the vocabulary.
    pub fn position(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.index.contains_key(term)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl From<Vec<String>> for Vocabulary {
    /// Sorts and deduplicates, so any term list yields a valid vocabulary.
    fn from(mut terms: Vec<String>) -> Self {
        terms.sort();
        terms.dedup();
        let index = terms
            .iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), i))
            .collect();
        Self { terms, index }
    }
}

impl From<Vocabulary> for Vec<String> {
    fn from(vocab: Vocabulary) -> Self {
        vocab.terms
    }
}
