// DocTermBuilder — turns a small corpus into a document-term matrix.
//
// Each document is tokenized once, the vocabulary is the sorted union of all
// tokens, and each row records which vocabulary terms the document contains.
// Rows keep input order and columns keep vocabulary order, so the output is
// reproducible for identical input.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::error::{DocTermError, Result};
use super::tokenize::{english_stop_words, WordTokenizer};
use super::traits::Tokenizer;
use super::vocabulary::Vocabulary;

/// A named piece of raw text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub name: String,
    pub text: String,
}

impl Document {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

impl<N: Into<String>, T: Into<String>> From<(N, T)> for Document {
    fn from((name, text): (N, T)) -> Self {
        Self::new(name, text)
    }
}

/// How a cell records a term's presence in a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// 1 if the term occurs at least once, else 0
    #[default]
    Binary,
    /// Number of occurrences of the term
    Count,
}

/// Rows are documents (input order), columns are vocabulary terms (sorted).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocTermMatrix {
    pub documents: Vec<String>,
    pub vocabulary: Vocabulary,
    pub encoding: Encoding,
    /// `cells[row][column]`
    pub cells: Vec<Vec<u32>>,
}

impl DocTermMatrix {
    /// (documents, terms)
    pub fn shape(&self) -> (usize, usize) {
        (self.documents.len(), self.vocabulary.len())
    }

    pub fn terms(&self) -> &[String] {
        self.vocabulary.terms()
    }

    /// Iterate `(document name, row)` pairs in input order.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &[u32])> {
        self.documents
            .iter()
            .map(String::as_str)
            .zip(self.cells.iter().map(Vec::as_slice))
    }

    pub fn row(&self, document: &str) -> Option<&[u32]> {
        let i = self.documents.iter().position(|d| d == document)?;
        Some(&self.cells[i])
    }

    /// One value per document, in row order.
    pub fn column(&self, term: &str) -> Option<Vec<u32>> {
        let j = self.vocabulary.position(term)?;
        Some(self.cells.iter().map(|row| row[j]).collect())
    }

    pub fn get(&self, document: &str, term: &str) -> Option<u32> {
        let j = self.vocabulary.position(term)?;
        self.row(document).map(|row| row[j])
    }

    /// Number of documents containing `term`.
    pub fn document_frequency(&self, term: &str) -> Option<usize> {
        self.column(term)
            .map(|col| col.into_iter().filter(|&v| v > 0).count())
    }
}

/// Builds document-term matrices with a configurable tokenizer and encoding.
pub struct DocTermBuilder {
    tokenizer: Box<dyn Tokenizer>,
    encoding: Encoding,
    /// Dropped from every tokenizer's output when set
    stop_words: Option<HashSet<String>>,
}

impl Default for DocTermBuilder {
    fn default() -> Self {
        Self {
            tokenizer: Box::new(WordTokenizer::new()),
            encoding: Encoding::Binary,
            stop_words: None,
        }
    }
}

impl DocTermBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Drop English stop words from the tokenizer's output, whichever
    /// tokenizer is in use.
    pub fn stop_words(mut self, enabled: bool) -> Self {
        self.stop_words = enabled.then(english_stop_words);
        self
    }

    pub fn tokenizer(mut self, tokenizer: impl Tokenizer + 'static) -> Self {
        self.tokenizer = Box::new(tokenizer);
        self
    }

    /// Build the matrix over the vocabulary of `documents` themselves.
    pub fn build(&self, documents: &[Document]) -> Result<DocTermMatrix> {
        validate(documents)?;

        let token_lists = self.tokenize_all(documents);
        let vocabulary = Vocabulary::from_tokens(&token_lists);

        info!(
            documents = documents.len(),
            terms = vocabulary.len(),
            encoding = ?self.encoding,
            "Built document-term matrix"
        );

        Ok(self.encode(documents, &token_lists, vocabulary))
    }

    /// Encode `documents` against an existing vocabulary. Tokens outside the
    /// vocabulary are ignored.
    pub fn transform(&self, vocabulary: &Vocabulary, documents: &[Document]) -> Result<DocTermMatrix> {
        validate(documents)?;

        let token_lists = self.tokenize_all(documents);
        Ok(self.encode(documents, &token_lists, vocabulary.clone()))
    }

    fn tokenize_all(&self, documents: &[Document]) -> Vec<Vec<String>> {
        documents
            .iter()
            .map(|doc| {
                let mut tokens = self.tokenizer.tokenize(&doc.text);
                if let Some(stop_words) = &self.stop_words {
                    tokens.retain(|t| !stop_words.contains(t));
                }
                debug!(document = %doc.name, tokens = tokens.len(), "Tokenized document");
                tokens
            })
            .collect()
    }

    fn encode(
        &self,
        documents: &[Document],
        token_lists: &[Vec<String>],
        vocabulary: Vocabulary,
    ) -> DocTermMatrix {
        let cells = token_lists
            .iter()
            .map(|tokens| {
                let mut row = vec![0u32; vocabulary.len()];
                for token in tokens {
                    if let Some(j) = vocabulary.position(token) {
                        match self.encoding {
                            Encoding::Binary => row[j] = 1,
                            Encoding::Count => row[j] += 1,
                        }
                    }
                }
                row
            })
            .collect();

        DocTermMatrix {
            documents: documents.iter().map(|d| d.name.clone()).collect(),
            vocabulary,
            encoding: self.encoding,
            cells,
        }
    }
}

/// A corpus must be non-empty with unique document names.
fn validate(documents: &[Document]) -> Result<()> {
    if documents.is_empty() {
        return Err(DocTermError::EmptyCorpus);
    }

    let mut seen = HashSet::with_capacity(documents.len());
    for doc in documents {
        if !seen.insert(doc.name.as_str()) {
            return Err(DocTermError::DuplicateName(doc.name.clone()));
        }
    }
    Ok(())
}
