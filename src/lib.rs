// docterm: binary document-term matrices from small text corpora.
//
// This is the library root. `matrix` holds tokenization and matrix
// construction; the other modules are the CLI's supporting layers.

pub mod config;
pub mod corpus;
pub mod matrix;
pub mod output;
