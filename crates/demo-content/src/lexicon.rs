//! Word lexicon types and JSON parsing.
//!
//! This module defines the lexicon structure that holds the heading words and
//! sentences record generation draws from. The lexicon is loaded from JSON
//! and validated before use.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::LexiconError;

/// Current supported lexicon version.
const SUPPORTED_VERSION: u32 = 1;

/// A validated word lexicon for record content generation.
///
/// The lexicon is loaded from a JSON document and provides the word and
/// sentence banks generated records are assembled from.
///
/// # Example
///
/// ```
/// use demo_content::Lexicon;
///
/// let json = r#"{
///     "version": 1,
///     "headingWords": ["harbour", "lantern"],
///     "sentences": ["The tide tables were wrong again."]
/// }"#;
///
/// let lexicon = Lexicon::from_json(json).expect("valid lexicon");
/// assert_eq!(lexicon.heading_words().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    version: u32,
    heading_words: Vec<String>,
    sentences: Vec<String>,
}

impl Lexicon {
    /// Parses a lexicon from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError`] if:
    /// - The JSON is malformed
    /// - Required fields are missing
    /// - The version is unsupported
    /// - Either bank is empty or contains blank entries
    pub fn from_json(json: &str) -> Result<Self, LexiconError> {
        let raw: RawLexicon = serde_json::from_str(json).map_err(|e| LexiconError::ParseError {
            message: e.to_string(),
        })?;

        Self::from_raw(raw)
    }

    /// Loads a lexicon from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, LexiconError> {
        let contents = fs::read_to_string(path).map_err(|e| LexiconError::IoError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::from_json(&contents)
    }

    fn from_raw(raw: RawLexicon) -> Result<Self, LexiconError> {
        if raw.version != SUPPORTED_VERSION {
            return Err(LexiconError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        if raw.heading_words.is_empty() {
            return Err(LexiconError::EmptyHeadingWords);
        }
        if raw.sentences.is_empty() {
            return Err(LexiconError::EmptySentences);
        }

        validate_entries(&raw.heading_words, |index| LexiconError::InvalidHeadingWord {
            index,
        })?;
        validate_entries(&raw.sentences, |index| LexiconError::InvalidSentence { index })?;

        Ok(Self {
            version: raw.version,
            heading_words: raw.heading_words,
            sentences: raw.sentences,
        })
    }

    /// Returns the lexicon version.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Returns the heading word bank.
    #[must_use]
    pub fn heading_words(&self) -> &[String] {
        &self.heading_words
    }

    /// Returns the sentence bank.
    #[must_use]
    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }
}

fn validate_entries<F>(entries: &[String], make_error: F) -> Result<(), LexiconError>
where
    F: Fn(usize) -> LexiconError,
{
    for (index, entry) in entries.iter().enumerate() {
        if entry.is_empty() || entry.trim() != entry {
            return Err(make_error(index));
        }
    }
    Ok(())
}

/// Raw JSON representation for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawLexicon {
    version: u32,
    heading_words: Vec<String>,
    sentences: Vec<String>,
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const VALID_JSON: &str = r#"{
        "version": 1,
        "headingWords": ["ambergris", "harbour", "lantern", "mooring"],
        "sentences": [
            "The tide tables were wrong again.",
            "Nobody checked the charts.",
            "A lantern swung from the mooring post."
        ]
    }"#;

    #[test]
    fn parses_valid_lexicon() {
        let lexicon = Lexicon::from_json(VALID_JSON).expect("valid lexicon");

        assert_eq!(lexicon.version(), 1);
        assert_eq!(lexicon.heading_words().len(), 4);
        assert_eq!(lexicon.sentences().len(), 3);
    }

    /// Tests that use pattern matching for parse errors (message content varies).
    #[rstest]
    #[case::malformed_json("not valid json")]
    #[case::missing_version(r#"{"headingWords": ["a"], "sentences": ["b."]}"#)]
    fn rejects_json_with_parse_error(#[case] json: &str) {
        let result = Lexicon::from_json(json);
        assert!(matches!(result, Err(LexiconError::ParseError { .. })));
    }

    /// Tests that check exact error variants.
    #[rstest]
    #[case::unsupported_version(
        r#"{"version": 9, "headingWords": ["a"], "sentences": ["b."]}"#,
        LexiconError::UnsupportedVersion { expected: 1, actual: 9 }
    )]
    #[case::empty_heading_words(
        r#"{"version": 1, "headingWords": [], "sentences": ["b."]}"#,
        LexiconError::EmptyHeadingWords
    )]
    #[case::empty_sentences(
        r#"{"version": 1, "headingWords": ["a"], "sentences": []}"#,
        LexiconError::EmptySentences
    )]
    #[case::blank_heading_word(
        r#"{"version": 1, "headingWords": ["a", ""], "sentences": ["b."]}"#,
        LexiconError::InvalidHeadingWord { index: 1 }
    )]
    #[case::padded_heading_word(
        r#"{"version": 1, "headingWords": [" a"], "sentences": ["b."]}"#,
        LexiconError::InvalidHeadingWord { index: 0 }
    )]
    #[case::blank_sentence(
        r#"{"version": 1, "headingWords": ["a"], "sentences": ["b.", "  "]}"#,
        LexiconError::InvalidSentence { index: 1 }
    )]
    fn rejects_invalid_lexicon(#[case] json: &str, #[case] expected: LexiconError) {
        let result = Lexicon::from_json(json);
        assert_eq!(result, Err(expected));
    }

    #[test]
    fn from_file_reports_missing_file() {
        let result = Lexicon::from_file(Path::new("/nonexistent/lexicon.json"));
        assert!(matches!(result, Err(LexiconError::IoError { .. })));
    }
}
