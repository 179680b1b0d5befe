//! Port abstraction for record content generation.
//!
//! The prefill service never creates record content itself; it asks a
//! factory for a generator bound to one content type and requests a batch of
//! records from it. Adapters may generate locally or call out to a remote
//! placeholder-content service.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::ContentTypeName;

/// A record created by a generator.
///
/// The payload a generator hands back for each created record: enough for a
/// caller to link to or display the new content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedRecord {
    /// Unique identifier of the created record.
    pub id: Uuid,
    /// Record title.
    pub title: String,
    /// URL-safe slug derived from the title.
    pub slug: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Failures raised by record content generators.
///
/// `Transport` is the batch-fatal class: the prefill loop records one error
/// and stops, returning the partial report. Every other failure propagates
/// to the caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    /// The generator's transport failed (unreachable endpoint, timeout).
    #[error("content generator transport failure: {message}")]
    Transport {
        /// Description of the transport failure.
        message: String,
    },
    /// The generator answered but its payload was unusable.
    #[error("content generator returned an invalid payload: {message}")]
    Payload {
        /// Description of the payload problem.
        message: String,
    },
}

impl GeneratorError {
    /// Builds a transport-class failure.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Builds a payload-class failure.
    pub fn payload(message: impl Into<String>) -> Self {
        Self::Payload {
            message: message.into(),
        }
    }
}

/// Capability to produce a batch of new records for one content type.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordContentGenerator: Send + Sync {
    /// Generates `count` new records.
    ///
    /// The prefill service only ever requests a count of at least 1.
    async fn generate(&self, count: u64) -> Result<Vec<CreatedRecord>, GeneratorError>;
}

/// Factory producing a generator bound to a specific content type.
///
/// The factory is the prefill service's replaceable dependency-injection
/// point: swapping it redirects all subsequent generation.
#[cfg_attr(test, mockall::automock)]
pub trait RecordGeneratorFactory: Send + Sync {
    /// Returns a generator for the named content type.
    fn create(&self, content_type: &ContentTypeName) -> Arc<dyn RecordContentGenerator>;
}

#[derive(Debug, Default)]
struct FixtureState {
    scripted_failures: HashMap<ContentTypeName, GeneratorError>,
    calls: Vec<(ContentTypeName, u64)>,
}

/// Test fixture factory with scriptable per-type outcomes.
///
/// Unscripted content types succeed and return `count` placeholder records.
/// Every `generate` call is recorded so tests can assert which types were
/// submitted and with which counts.
#[derive(Debug, Default)]
pub struct FixtureRecordGeneratorFactory {
    state: Arc<Mutex<FixtureState>>,
}

impl FixtureRecordGeneratorFactory {
    /// Scripts a generation failure for one content type.
    pub fn fail_with(&self, content_type: &ContentTypeName, error: GeneratorError) {
        if let Ok(mut state) = self.state.lock() {
            state.scripted_failures.insert(content_type.clone(), error);
        }
    }

    /// Returns the recorded `(content type, count)` generation calls, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<(ContentTypeName, u64)> {
        self.state
            .lock()
            .map(|state| state.calls.clone())
            .unwrap_or_default()
    }
}

impl RecordGeneratorFactory for FixtureRecordGeneratorFactory {
    fn create(&self, content_type: &ContentTypeName) -> Arc<dyn RecordContentGenerator> {
        Arc::new(FixtureRecordContentGenerator {
            content_type: content_type.clone(),
            state: Arc::clone(&self.state),
        })
    }
}

/// Generator handed out by [`FixtureRecordGeneratorFactory`].
struct FixtureRecordContentGenerator {
    content_type: ContentTypeName,
    state: Arc<Mutex<FixtureState>>,
}

#[async_trait]
impl RecordContentGenerator for FixtureRecordContentGenerator {
    async fn generate(&self, count: u64) -> Result<Vec<CreatedRecord>, GeneratorError> {
        let scripted_failure = {
            let Ok(mut state) = self.state.lock() else {
                return Err(GeneratorError::payload("fixture state poisoned"));
            };
            state.calls.push((self.content_type.clone(), count));
            state.scripted_failures.get(&self.content_type).cloned()
        };

        if let Some(error) = scripted_failure {
            return Err(error);
        }

        let records = (0..count)
            .map(|n| {
                let title = format!("{} record {}", self.content_type, n + 1);
                CreatedRecord {
                    id: Uuid::new_v4(),
                    slug: format!("{}-record-{}", self.content_type, n + 1),
                    title,
                    created_at: Utc::now(),
                }
            })
            .collect();
        Ok(records)
    }
}
