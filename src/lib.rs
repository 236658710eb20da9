//! Character n-gram language identification.
//!
//! A corpus of reference texts (one file per language) is turned into a
//! TF-IDF vector space over character n-grams. Orders 1 and 2 are literal
//! substrings; longer windows keep only their first and last character. A
//! query is vectorized the same way and ranked against every reference
//! document by cosine similarity.
//!
//! ```text
//! corpus ─▶ ngrams ─▶ vocabulary ─▶ idf ─▶ weights ─▶ LanguageModel
//!                                                         │
//! query  ─▶ ngrams ─────────────────────────▶ weights ─▶ similarity ─▶ ranking
//! ```
//!
//! The model is built once and never mutated afterwards.

pub mod cli;
pub mod config;
pub mod corpus;
pub mod error;
pub mod export;
pub mod idf;
pub mod model;
pub mod ngrams;
pub mod repl;
pub mod similarity;
pub mod vocabulary;
pub mod weights;

pub use config::{DetectorConfig, QueryOrders};
pub use corpus::{Corpus, CorpusLoader, Document};
pub use error::DetectorError;
pub use model::LanguageModel;
pub use similarity::LanguageScore;
