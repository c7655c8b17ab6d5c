// Corpus assembly — gathering named documents from CLI arguments and files.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::matrix::Document;

/// The two sentences from the bag-of-words walkthrough. Same words, opposite
/// meaning, identical binary rows.
pub fn sample_documents() -> Vec<Document> {
    vec![
        Document::new("sen1", "it was not good, it was actually quite bad"),
        Document::new("sen2", "it was not bad, it was actually quite good"),
    ]
}

/// Parse a `NAME=TEXT` argument. Only the first `=` splits, so the text may
/// itself contain `=`.
pub fn parse_document_arg(arg: &str) -> Result<Document> {
    let (name, text) = arg
        .split_once('=')
        .with_context(|| format!("Malformed document {arg:?}: expected NAME=TEXT"))?;
    let name = name.trim();
    if name.is_empty() {
        anyhow::bail!("Malformed document {arg:?}: the name before '=' is empty");
    }
    Ok(Document::new(name, text))
}

/// Read a text file as a document named after the file stem.
pub fn read_document(path: &Path) -> Result<Document> {
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .with_context(|| format!("Cannot derive a document name from {}", path.display()))?;
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read document {}", path.display()))?;

    debug!(path = %path.display(), bytes = text.len(), "Read document");
    Ok(Document::new(name, text))
}

/// Collect inline `NAME=TEXT` documents followed by file documents, keeping
/// the order they were given in.
pub fn collect_documents<P: AsRef<Path>>(inline: &[String], files: &[P]) -> Result<Vec<Document>> {
    let mut documents = Vec::with_capacity(inline.len() + files.len());
    for arg in inline {
        documents.push(parse_document_arg(arg)?);
    }
    for path in files {
        documents.push(read_document(path.as_ref())?);
    }
    Ok(documents)
}
