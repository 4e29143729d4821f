//! Answer matching for typed definitions.
//!
//! A typed answer is correct when enough of its words line up with the words
//! of the reference definition. The score is the number of definition words
//! found in the answer divided by the length of the longer of the two word
//! lists.

use crate::error::{MatchError, Result};
use crate::tokenize::{tokenize, tokens_eq_ignore_case};
use crate::types::{MatchSettings, MatchingMode};
use serde::{Deserialize, Serialize};

/// Result of checking a typed answer against a definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    /// Whether the answer reached the correctness threshold.
    pub is_correct: bool,
    /// Matched tokens over total tokens, between 0.0 and 1.0.
    pub ratio: f64,
    /// Number of definition tokens found in the answer.
    pub matched_tokens: usize,
    /// The larger of the two token counts.
    pub total_tokens: usize,
    /// The matching mode used.
    pub matching_mode: MatchingMode,
    /// Definition tokens with no counterpart in the answer, in definition order.
    pub missing_tokens: Vec<String>,
}

impl MatchReport {
    fn empty_answer(mode: MatchingMode) -> Self {
        Self {
            is_correct: false,
            ratio: 0.0,
            matched_tokens: 0,
            total_tokens: 0,
            matching_mode: mode,
            missing_tokens: Vec::new(),
        }
    }
}

/// A reference definition that typed answers are checked against.
///
/// The token list is always derived from the current reference text. The
/// confirmed-correct flag is only ever set by the caller.
#[derive(Debug, Clone)]
pub struct DefinitionMatcher {
    reference_text: String,
    reference_tokens: Vec<String>,
    confirmed_correct: bool,
    settings: MatchSettings,
}

impl DefinitionMatcher {
    /// Create a matcher with default settings.
    pub fn new(reference_text: impl Into<String>) -> Self {
        Self::build(reference_text.into(), MatchSettings::default())
    }

    /// Create a matcher from a reference text that may be absent.
    pub fn from_optional(reference_text: Option<String>) -> Result<Self> {
        reference_text
            .map(Self::new)
            .ok_or(MatchError::MissingReference)
    }

    /// Create a matcher with custom settings.
    pub fn with_settings(reference_text: impl Into<String>, settings: MatchSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self::build(reference_text.into(), settings))
    }

    fn build(reference_text: String, settings: MatchSettings) -> Self {
        let mut matcher = Self {
            reference_text,
            reference_tokens: Vec::new(),
            confirmed_correct: false,
            settings,
        };
        matcher.retokenize();
        matcher
    }

    fn retokenize(&mut self) {
        self.reference_tokens = tokenize(&self.reference_text, self.settings.mode);
        tracing::debug!(
            tokens = self.reference_tokens.len(),
            mode = ?self.settings.mode,
            "tokenized reference text"
        );
    }

    /// The reference text, exactly as it was given.
    pub fn reference_text(&self) -> &str {
        &self.reference_text
    }

    /// Replace the reference text. Does not reset the confirmed-correct flag.
    pub fn set_reference_text(&mut self, reference_text: impl Into<String>) {
        self.reference_text = reference_text.into();
        self.retokenize();
    }

    pub fn reference_tokens(&self) -> &[String] {
        &self.reference_tokens
    }

    pub fn is_confirmed_correct(&self) -> bool {
        self.confirmed_correct
    }

    pub fn set_confirmed_correct(&mut self, confirmed_correct: bool) {
        self.confirmed_correct = confirmed_correct;
    }

    pub fn settings(&self) -> &MatchSettings {
        &self.settings
    }

    /// Replace the settings, re-deriving tokens for the new mode.
    pub fn set_settings(&mut self, settings: MatchSettings) -> Result<()> {
        settings.validate()?;
        self.settings = settings;
        self.retokenize();
        Ok(())
    }

    /// Whether `answer` matches the definition closely enough.
    pub fn matches(&self, answer: &str) -> bool {
        self.evaluate(Some(answer)).is_correct
    }

    /// Like [`matches`](Self::matches), treating a missing answer as wrong.
    pub fn matches_optional(&self, answer: Option<&str>) -> bool {
        self.evaluate(answer).is_correct
    }

    /// Score `answer` against the definition.
    pub fn evaluate(&self, answer: Option<&str>) -> MatchReport {
        let mode = self.settings.mode;
        let answer = match answer {
            Some(text) if !text.is_empty() => text,
            _ => {
                tracing::trace!("empty answer");
                return MatchReport::empty_answer(mode);
            }
        };

        let answer_tokens = tokenize(answer, mode);
        let total_tokens = answer_tokens.len().max(self.reference_tokens.len());
        let (matched_tokens, missing_tokens) =
            match_tokens(&self.reference_tokens, &answer_tokens, mode);

        // Only reachable when both sides are nothing but delimiters.
        let ratio = if total_tokens == 0 {
            0.0
        } else {
            matched_tokens as f64 / total_tokens as f64
        };
        let is_correct = total_tokens > 0 && ratio >= self.settings.threshold;

        tracing::debug!(
            matched_tokens,
            total_tokens,
            ratio,
            is_correct,
            "evaluated answer"
        );

        MatchReport {
            is_correct,
            ratio,
            matched_tokens,
            total_tokens,
            matching_mode: mode,
            missing_tokens,
        }
    }
}

/// Count how many reference tokens have a case-insensitive match among the answer tokens.
///
/// Each reference token counts at most once. In naive mode an answer token
/// may be counted for several reference tokens; in strict mode it is used up
/// by the first reference token it matches.
pub fn count_matched_tokens(reference: &[String], answer: &[String], mode: MatchingMode) -> usize {
    match_tokens(reference, answer, mode).0
}

fn match_tokens(reference: &[String], answer: &[String], mode: MatchingMode) -> (usize, Vec<String>) {
    let mut used = vec![false; answer.len()];
    let mut matched = 0;
    let mut missing = Vec::new();

    for reference_token in reference {
        let found = answer.iter().enumerate().position(|(idx, answer_token)| {
            !(mode == MatchingMode::Strict && used[idx])
                && tokens_eq_ignore_case(reference_token, answer_token)
        });

        match found {
            Some(idx) => {
                matched += 1;
                if mode == MatchingMode::Strict {
                    used[idx] = true;
                }
            }
            None => missing.push(reference_token.clone()),
        }
    }

    (matched, missing)
}
