//! Core study-guide library for checking typed definitions.
//!
//! Provides:
//! - Punctuation normalization and word tokenization
//! - Word-overlap answer matching against a reference definition
//! - Matching settings (mode, correctness threshold)

pub mod error;
pub mod matching;
pub mod tokenize;
pub mod types;

pub use error::{MatchError, Result};
pub use matching::{count_matched_tokens, DefinitionMatcher, MatchReport};
pub use tokenize::{normalize_punctuation, tokenize, tokens_eq_ignore_case};
pub use types::{MatchSettings, MatchingMode, CORRECTNESS_THRESHOLD};
