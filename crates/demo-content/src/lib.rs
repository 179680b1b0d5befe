//! Deterministic placeholder record content for demonstration purposes.
//!
//! This crate generates believable, reproducible record content (titles,
//! slugs, teasers, and body text) from a JSON word lexicon. It is designed to
//! be independent of any content-management domain types so that it can be
//! wired behind a generator boundary without circular dependencies.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Loading word lexicons from JSON strings or files
//! - Deterministic record generation from a numeric seed
//! - Slug derivation matching common CMS constraints
//!
//! # Example
//!
//! ```
//! use demo_content::{GenerationSpec, Lexicon, generate_demo_records};
//!
//! let json = r#"{
//!     "version": 1,
//!     "headingWords": ["ambergris", "harbour", "lantern"],
//!     "sentences": ["The tide tables were wrong again.", "Nobody checked the charts."]
//! }"#;
//!
//! let lexicon = Lexicon::from_json(json).expect("valid lexicon");
//! let spec = GenerationSpec { seed: 42, record_count: 3 };
//! let records = generate_demo_records(&lexicon, &spec).expect("generation succeeds");
//!
//! assert_eq!(records.len(), 3);
//! ```

mod error;
mod generator;
mod lexicon;
mod record;

pub use error::{GenerationError, LexiconError};
pub use generator::generate_demo_records;
pub use lexicon::Lexicon;
pub use record::{DemoRecordSeed, GenerationSpec};
