use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_SEPARATOR: &str = "-";
const DEFAULT_WORD_COUNT: usize = 2;
const DEFAULT_MAX_ATTEMPTS: usize = 100;

/// Options for composing a username out of descriptive and subject words.
///
/// Every field has a default, so a partial JSON object (or `{}`) deserializes
/// into a usable config.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationConfig {
    /// Joins the drawn words
    pub separator: String,
    /// Total number of words, the last of which is a subject word
    pub word_count: usize,
    /// Replaces the default descriptive list when present and non-empty
    #[serde(alias = "customAdjectives")]
    pub descriptive_words: Option<Vec<String>>,
    /// Replaces the default subject list when present and non-empty
    #[serde(alias = "customNouns")]
    pub subject_words: Option<Vec<String>>,
    /// Inclusive lower bound on the username length, in chars (Unicode scalar
    /// values, so a non-BMP char counts once rather than as two UTF-16 units)
    pub min_length: usize,
    /// Inclusive upper bound on the username length, in chars as for `min_length`.
    /// `None` means unbounded
    pub max_length: Option<usize>,
    /// Candidates drawn per username before giving up
    pub max_attempts: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            word_count: DEFAULT_WORD_COUNT,
            descriptive_words: None,
            subject_words: None,
            min_length: 0,
            max_length: None,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl GenerationConfig {
    pub(crate) fn accepts_len(&self, len: usize) -> bool {
        len >= self.min_length && self.max_length.is_none_or(|max| len <= max)
    }

    /// Checks for configurations that can never produce a username.
    ///
    /// Generation itself does not call this; a degenerate config simply
    /// yields `None` or an empty batch.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.word_count == 0 {
            return Err(ConfigError::ZeroWordCount);
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::ZeroMaxAttempts);
        }
        if let Some(max) = self.max_length
            && self.min_length > max
        {
            return Err(ConfigError::InvertedLengthBounds {
                min: self.min_length,
                max,
            });
        }

        Ok(())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("word count must be at least 1")]
    ZeroWordCount,
    #[error("max attempts must be at least 1")]
    ZeroMaxAttempts,
    #[error("min length {min} is greater than max length {max}")]
    InvertedLengthBounds { min: usize, max: usize },
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GenerationConfig::default();
        assert_eq!(config.separator, "-");
        assert_eq!(config.word_count, 2);
        assert_eq!(config.min_length, 0);
        assert_eq!(config.max_length, None);
        assert_eq!(config.max_attempts, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_json_is_default() {
        let config: GenerationConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, GenerationConfig::default());
    }

    #[test]
    fn test_partial_json_config() {
        let json = r#"{
            "separator": "_",
            "wordCount": 3,
            "customAdjectives": ["x"],
            "subjectWords": ["y", "z"],
            "maxLength": 20
        }"#;

        let config: GenerationConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.separator, "_");
        assert_eq!(config.word_count, 3);
        assert_eq!(config.descriptive_words, Some(vec!["x".to_string()]));
        assert_eq!(
            config.subject_words,
            Some(vec!["y".to_string(), "z".to_string()])
        );
        assert_eq!(config.max_length, Some(20));
        assert_eq!(config.max_attempts, 100);
    }

    #[test]
    fn test_validate_rejects_degenerate_configs() {
        let zero_words = GenerationConfig {
            word_count: 0,
            ..Default::default()
        };
        assert_eq!(zero_words.validate(), Err(ConfigError::ZeroWordCount));

        let zero_attempts = GenerationConfig {
            max_attempts: 0,
            ..Default::default()
        };
        assert_eq!(zero_attempts.validate(), Err(ConfigError::ZeroMaxAttempts));

        let inverted = GenerationConfig {
            min_length: 10,
            max_length: Some(5),
            ..Default::default()
        };
        assert_eq!(
            inverted.validate(),
            Err(ConfigError::InvertedLengthBounds { min: 10, max: 5 })
        );
    }

    #[test]
    fn test_length_bounds_inclusive() {
        let config = GenerationConfig {
            min_length: 3,
            max_length: Some(5),
            ..Default::default()
        };
        assert!(!config.accepts_len(2));
        assert!(config.accepts_len(3));
        assert!(config.accepts_len(5));
        assert!(!config.accepts_len(6));
    }
}
