//! Error types for the demo-content crate.
//!
//! This module defines semantic error enums for lexicon parsing and record
//! generation, following the workspace's error handling conventions with
//! `thiserror`.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when parsing or validating a word lexicon.
///
/// These errors cover file I/O, JSON parsing, and schema validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexiconError {
    /// The lexicon file could not be read.
    #[error("failed to read lexicon file at '{path}': {message}")]
    IoError {
        /// Path to the lexicon file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The lexicon JSON is malformed or missing required fields.
    #[error("invalid lexicon JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The lexicon version is not supported.
    #[error("unsupported lexicon version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the lexicon.
        actual: u32,
    },

    /// The lexicon contains no heading words.
    #[error("lexicon contains no heading words")]
    EmptyHeadingWords,

    /// The lexicon contains no sentences.
    #[error("lexicon contains no sentences")]
    EmptySentences,

    /// A heading word is blank or carries surrounding whitespace.
    #[error("invalid heading word at index {index}: must be trimmed and non-empty")]
    InvalidHeadingWord {
        /// Index of the invalid word in the array.
        index: usize,
    },

    /// A sentence is blank or carries surrounding whitespace.
    #[error("invalid sentence at index {index}: must be trimmed and non-empty")]
    InvalidSentence {
        /// Index of the invalid sentence in the array.
        index: usize,
    },
}

/// Errors that can occur during record generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// Failed to derive a usable slug after the maximum number of retries.
    #[error("failed to derive a valid slug after {max_attempts} attempts")]
    SlugDerivationFailed {
        /// Number of attempts made before giving up.
        max_attempts: usize,
    },
}
