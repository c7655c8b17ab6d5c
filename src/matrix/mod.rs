// Document-term matrices — tokenization, vocabulary, and matrix construction.

pub mod builder;
pub mod error;
pub mod tokenize;
pub mod traits;
pub mod vocabulary;

pub use builder::{DocTermBuilder, DocTermMatrix, Document, Encoding};
pub use error::{DocTermError, Result};
pub use vocabulary::Vocabulary;
