//! Deterministic local generator adapter over the `demo-content` crate.
//!
//! Each content type gets its own RNG seed derived from the factory's base
//! seed and the type name, so repeated runs produce identical records per
//! type while different types diverge.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use demo_content::{GenerationSpec, Lexicon, generate_demo_records};

use crate::domain::ContentTypeName;
use crate::domain::ports::{
    CreatedRecord, GeneratorError, RecordContentGenerator, RecordGeneratorFactory,
};

/// Factory producing [`DemoContentGenerator`] instances sharing one lexicon.
pub struct DemoRecordGeneratorFactory {
    lexicon: Arc<Lexicon>,
    base_seed: u64,
}

impl DemoRecordGeneratorFactory {
    /// Creates a factory over the given lexicon and base seed.
    pub fn new(lexicon: Lexicon, base_seed: u64) -> Self {
        Self {
            lexicon: Arc::new(lexicon),
            base_seed,
        }
    }
}

impl RecordGeneratorFactory for DemoRecordGeneratorFactory {
    fn create(&self, content_type: &ContentTypeName) -> Arc<dyn RecordContentGenerator> {
        Arc::new(DemoContentGenerator {
            lexicon: Arc::clone(&self.lexicon),
            seed: content_type_seed(self.base_seed, content_type),
        })
    }
}

/// Generator that produces lexicon-derived records without any I/O.
pub struct DemoContentGenerator {
    lexicon: Arc<Lexicon>,
    seed: u64,
}

#[async_trait]
impl RecordContentGenerator for DemoContentGenerator {
    async fn generate(&self, count: u64) -> Result<Vec<CreatedRecord>, GeneratorError> {
        let record_count = usize::try_from(count)
            .map_err(|_| GeneratorError::payload("requested count exceeds addressable size"))?;
        let spec = GenerationSpec {
            seed: self.seed,
            record_count,
        };

        let seeds = generate_demo_records(&self.lexicon, &spec)
            .map_err(|error| GeneratorError::payload(error.to_string()))?;

        Ok(seeds
            .into_iter()
            .map(|seed| CreatedRecord {
                id: seed.id,
                title: seed.title,
                slug: seed.slug,
                created_at: Utc::now(),
            })
            .collect())
    }
}

/// Derives a stable per-type seed (FNV-1a over the name, folded into the
/// base seed).
fn content_type_seed(base_seed: u64, content_type: &ContentTypeName) -> u64 {
    const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

    let mut hash = FNV_OFFSET;
    for byte in content_type.as_str().bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    base_seed ^ hash
}
