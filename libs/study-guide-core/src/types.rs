//! Matching configuration types.

use crate::error::{MatchError, Result};
use serde::{Deserialize, Serialize};

/// Share of words an answer must have in common with the definition to count as correct.
pub const CORRECTNESS_THRESHOLD: f64 = 0.65;

/// How typed answers are tokenized and compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchingMode {
    /// Split on single spaces, keep empty tokens, and let one answer word
    /// satisfy any number of definition words.
    Naive,
    /// Split on any whitespace, drop empty tokens, and use each answer word
    /// at most once.
    Strict,
}

impl Default for MatchingMode {
    fn default() -> Self {
        Self::Naive
    }
}

/// Settings for a definition matcher.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchSettings {
    #[serde(default)]
    pub mode: MatchingMode,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

fn default_threshold() -> f64 {
    CORRECTNESS_THRESHOLD
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            mode: MatchingMode::default(),
            threshold: CORRECTNESS_THRESHOLD,
        }
    }
}

impl MatchSettings {
    /// Strict-mode settings with the default threshold.
    pub fn strict() -> Self {
        Self {
            mode: MatchingMode::Strict,
            ..Self::default()
        }
    }

    /// Check that the threshold is a ratio in `[0.0, 1.0]`.
    pub fn validate(&self) -> Result<()> {
        if self.threshold.is_finite() && (0.0..=1.0).contains(&self.threshold) {
            Ok(())
        } else {
            Err(MatchError::InvalidThreshold {
                value: self.threshold,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_use_naive_mode_and_fixed_threshold() {
        let settings = MatchSettings::default();
        assert_eq!(settings.mode, MatchingMode::Naive);
        assert_eq!(settings.threshold, 0.65);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn validate_rejects_out_of_range_thresholds() {
        for value in [-0.1, 1.01, f64::NAN, f64::INFINITY] {
            let settings = MatchSettings {
                threshold: value,
                ..MatchSettings::default()
            };
            assert!(matches!(
                settings.validate(),
                Err(MatchError::InvalidThreshold { .. })
            ));
        }
    }

    #[test]
    fn validate_accepts_bounds() {
        for value in [0.0, 1.0] {
            let settings = MatchSettings {
                threshold: value,
                ..MatchSettings::default()
            };
            assert!(settings.validate().is_ok());
        }
    }

    #[test]
    fn settings_deserialize_with_defaults() {
        let settings: MatchSettings = serde_json::from_str(r#"{"mode":"strict"}"#).unwrap();
        assert_eq!(settings.mode, MatchingMode::Strict);
        assert_eq!(settings.threshold, CORRECTNESS_THRESHOLD);

        let settings: MatchSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, MatchSettings::default());
    }

    #[test]
    fn mode_serializes_snake_case() {
        let json = serde_json::to_string(&MatchingMode::Naive).unwrap();
        assert_eq!(json, r#""naive""#);
    }
}
