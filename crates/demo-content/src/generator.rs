//! Deterministic record generation from a word lexicon.
//!
//! This module provides the core generation function that produces
//! reproducible record content from a validated lexicon. The same seed value
//! always produces identical output.

use fake::Fake;
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::EN;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

use crate::error::GenerationError;
use crate::lexicon::Lexicon;
use crate::record::{DemoRecordSeed, GenerationSpec};

/// Maximum number of attempts to derive a non-empty slug.
const MAX_SLUG_ATTEMPTS: usize = 50;

/// Minimum number of heading words in a title.
const MIN_TITLE_WORDS: usize = 2;

/// Maximum number of heading words in a title.
const MAX_TITLE_WORDS: usize = 4;

/// Minimum number of sentences in a record body.
const MIN_BODY_SENTENCES: usize = 3;

/// Maximum number of sentences in a record body.
const MAX_BODY_SENTENCES: usize = 6;

/// Generates placeholder records from a lexicon.
///
/// Uses the spec's `seed` value to initialise a deterministic RNG, ensuring
/// identical output for the same lexicon and spec. The generated records have:
///
/// - Unique UUIDs (deterministically generated)
/// - Title-cased headings built from the lexicon's heading words
/// - Slugs derived from the title (lowercase ASCII letters, digits, hyphens)
/// - A single-sentence teaser and a multi-sentence body
/// - An attributed author name
///
/// # Errors
///
/// Returns [`GenerationError`] if slug derivation fails after the maximum
/// number of retries (possible only when every heading word lacks
/// alphanumeric characters).
///
/// # Example
///
/// ```
/// use demo_content::{GenerationSpec, Lexicon, generate_demo_records};
///
/// let json = r#"{
///     "version": 1,
///     "headingWords": ["harbour", "lantern"],
///     "sentences": ["The tide tables were wrong again.", "Nobody checked the charts.", "It rained."]
/// }"#;
///
/// let lexicon = Lexicon::from_json(json).expect("valid");
/// let spec = GenerationSpec { seed: 7, record_count: 2 };
/// let records = generate_demo_records(&lexicon, &spec).expect("generated");
///
/// assert_eq!(records.len(), 2);
/// // Same seed produces identical records
/// let again = generate_demo_records(&lexicon, &spec).expect("generated");
/// assert_eq!(records, again);
/// ```
pub fn generate_demo_records(
    lexicon: &Lexicon,
    spec: &GenerationSpec,
) -> Result<Vec<DemoRecordSeed>, GenerationError> {
    let mut rng = ChaCha8Rng::seed_from_u64(spec.seed);
    let mut records = Vec::with_capacity(spec.record_count);

    for _ in 0..spec.record_count {
        let record = generate_single_record(&mut rng, lexicon)?;
        records.push(record);
    }

    Ok(records)
}

/// Generates a single record with the provided RNG.
fn generate_single_record(
    rng: &mut ChaCha8Rng,
    lexicon: &Lexicon,
) -> Result<DemoRecordSeed, GenerationError> {
    // Generate deterministic UUID from RNG
    let id = Uuid::from_u128(rng.random());

    let (title, slug) = generate_title_and_slug(rng, lexicon)?;

    let teaser = lexicon
        .sentences()
        .choose(rng)
        .cloned()
        .unwrap_or_default();

    let body = select_subset(rng, lexicon.sentences(), MIN_BODY_SENTENCES, MAX_BODY_SENTENCES)
        .join(" ");

    let first: String = FirstName(EN).fake_with_rng(rng);
    let last: String = LastName(EN).fake_with_rng(rng);
    let author = format!("{first} {last}");

    Ok(DemoRecordSeed {
        id,
        title,
        slug,
        teaser,
        body,
        author,
    })
}

/// Generates a title and its slug using the provided RNG.
///
/// Retries up to `MAX_SLUG_ATTEMPTS` times if the derived slug is empty,
/// which can only happen when the selected heading words contain no
/// alphanumeric characters.
fn generate_title_and_slug(
    rng: &mut ChaCha8Rng,
    lexicon: &Lexicon,
) -> Result<(String, String), GenerationError> {
    for _ in 0..MAX_SLUG_ATTEMPTS {
        let words = select_subset(rng, lexicon.heading_words(), MIN_TITLE_WORDS, MAX_TITLE_WORDS);
        let title = words
            .iter()
            .map(|word| title_case(word))
            .collect::<Vec<_>>()
            .join(" ");

        let slug = derive_slug(&title);
        if !slug.is_empty() {
            return Ok((title, slug));
        }
    }

    Err(GenerationError::SlugDerivationFailed {
        max_attempts: MAX_SLUG_ATTEMPTS,
    })
}

/// Derives a URL-safe slug from a title.
///
/// Lowercases ASCII alphanumeric characters; any run of other characters
/// collapses to a single hyphen. Leading and trailing hyphens are trimmed.
fn derive_slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Uppercases the first character of a word, leaving the rest untouched.
fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Selects a deterministic subset of entries from the provided slice.
///
/// The selection count is determined by the RNG state, bounded by `min_count`
/// and `max_count`. If the source slice has fewer elements than `max_count`,
/// all elements may be selected.
fn select_subset(
    rng: &mut ChaCha8Rng,
    entries: &[String],
    min_count: usize,
    max_count: usize,
) -> Vec<String> {
    if entries.is_empty() {
        return Vec::new();
    }

    // Clamp bounds to available entries
    let clamped_min = min_count.min(entries.len());
    let clamped_max = max_count.min(entries.len());

    // Determine count (handle case where min == max)
    let count = if clamped_min == clamped_max {
        clamped_min
    } else {
        rng.random_range(clamped_min..=clamped_max)
    };

    // Shuffle and take the first `count` elements
    let mut shuffled = entries.to_vec();
    shuffled.shuffle(rng);
    shuffled.truncate(count);
    shuffled
}
