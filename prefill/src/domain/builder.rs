//! Quota-aware prefill orchestration.
//!
//! Walks the requested content types in order, decides per type how many
//! placeholder records to request from the generator, and folds the outcomes
//! into a [`PrefillReport`]. Routine conditions (missing schema, full types,
//! populated singletons) never abort the batch; a generator transport
//! failure does, returning the partial report accumulated so far.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::domain::ports::{
    ContentStorage, ContentStorageError, GeneratorError, RecordGeneratorFactory,
};
use crate::domain::{ContentTypeName, PrefillReport};

/// Errors that abort a prefill pass entirely.
///
/// Only failures outside the report's per-type vocabulary land here; see
/// [`PrefillBuilder::build`] for which conditions stay inside the report.
#[derive(Debug, Error)]
pub enum PrefillError {
    /// Storage failed in a way the report cannot absorb.
    #[error("content storage error: {0}")]
    Storage(#[from] ContentStorageError),
    /// The generator answered with an unusable payload.
    #[error("content generation failed: {0}")]
    Generation(#[from] GeneratorError),
}

/// Builder of prefilled records for a set of content types.
///
/// Holds the storage port, a replaceable generator factory, and the soft
/// ceiling on existing records per content type. Not intended for concurrent
/// use: configuration setters assume a single owner.
pub struct PrefillBuilder<S> {
    storage: Arc<S>,
    generator_factory: Arc<dyn RecordGeneratorFactory>,
    max_count: u64,
}

impl<S> PrefillBuilder<S> {
    /// Creates a builder with the given storage, factory, and ceiling.
    pub fn new(
        storage: Arc<S>,
        generator_factory: Arc<dyn RecordGeneratorFactory>,
        max_count: u64,
    ) -> Self {
        Self {
            storage,
            generator_factory,
            max_count,
        }
    }

    /// Returns the maximum number of existing records allowed before a
    /// content type is skipped.
    #[must_use]
    pub const fn max_count(&self) -> u64 {
        self.max_count
    }

    /// Overrides the existing-record ceiling; chainable.
    pub fn set_max_count(&mut self, max_count: u64) -> &mut Self {
        self.max_count = max_count;
        self
    }

    /// Replaces the generator factory for subsequent [`PrefillBuilder::build`]
    /// calls.
    pub fn set_generator_factory(&mut self, generator_factory: Arc<dyn RecordGeneratorFactory>) {
        self.generator_factory = generator_factory;
    }
}

impl<S> PrefillBuilder<S>
where
    S: ContentStorage,
{
    /// Builds up to `count` prefilled records for each named content type.
    ///
    /// Types are processed sequentially in input order. Per type:
    ///
    /// - a missing backing store records an error and processing continues;
    /// - a type at or over the ceiling records a warning unless
    ///   `can_exceed_max` is set;
    /// - singletons are capped at one record and skipped with a warning when
    ///   already populated;
    /// - in non-exceeding mode the existing count is subtracted from the
    ///   requested count, and types needing no work are skipped silently;
    /// - a generator transport failure records one error for the current
    ///   type and ends the batch, returning the partial report.
    ///
    /// # Errors
    ///
    /// Returns [`PrefillError`] when storage fails for reasons other than a
    /// missing schema, or when the generator fails with a non-transport
    /// error.
    pub async fn build(
        &self,
        content_type_names: &[ContentTypeName],
        count: u64,
        can_exceed_max: bool,
    ) -> Result<PrefillReport, PrefillError> {
        let mut report = PrefillReport::new();

        for content_type in content_type_names {
            let existing = match self.storage.count_records(content_type).await {
                Ok(existing) => existing,
                Err(ContentStorageError::SchemaMissing { .. }) => {
                    warn!(content_type = %content_type, "backing store missing, skipping");
                    report.record_error(
                        content_type.clone(),
                        format!(
                            "the database needs to be updated before '{content_type}' records can be created"
                        ),
                    );
                    continue;
                }
                Err(storage_error) => return Err(storage_error.into()),
            };

            // Over 'max' and not allowed to exceed: notice and move on.
            if existing >= self.max_count && !can_exceed_max {
                debug!(
                    content_type = %content_type,
                    existing,
                    max_count = self.max_count,
                    "content type already has content, skipping"
                );
                report.record_warning(
                    content_type.clone(),
                    format!("skipped '{content_type}': already has content"),
                );
                continue;
            }

            // Singletons are always limited to one record.
            let meta = self.storage.content_type_meta(content_type).await?;
            let mut effective_count = count;
            if meta.singleton {
                effective_count = 1;

                if existing > 0 {
                    debug!(content_type = %content_type, "singleton already populated, skipping");
                    report.record_warning(
                        content_type.clone(),
                        format!("skipped '{content_type}': singleton already populated"),
                    );
                    continue;
                }
            }

            // Take the current amount of records into consideration when
            // adding more.
            let create_count = if can_exceed_max {
                effective_count
            } else {
                effective_count.saturating_sub(existing)
            };
            if create_count == 0 {
                continue;
            }

            let generator = self.generator_factory.create(content_type);
            match generator.generate(create_count).await {
                Ok(records) => {
                    info!(
                        content_type = %content_type,
                        created = records.len(),
                        "prefilled content type"
                    );
                    report.record_created(content_type.clone(), records);
                }
                Err(GeneratorError::Transport { message }) => {
                    error!(
                        content_type = %content_type,
                        message,
                        "content generator unreachable, ending batch"
                    );
                    report.record_error(
                        content_type.clone(),
                        "connection timeout while requesting generated content".to_owned(),
                    );
                    return Ok(report);
                }
                Err(generator_error) => return Err(generator_error.into()),
            }
        }

        Ok(report)
    }
}
