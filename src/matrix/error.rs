use thiserror::Error;

pub type Result<T> = std::result::Result<T, DocTermError>;

/// Invalid input handed to the matrix builder.
///
/// Documents with no words are not errors; they produce all-zero rows.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocTermError {
    #[error("No documents given: a corpus needs at least one document")]
    EmptyCorpus,

    #[error("Duplicate document name: {0}")]
    DuplicateName(String),
}
