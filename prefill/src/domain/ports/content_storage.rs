//! Port abstraction for content record storage.
//!
//! The prefill service treats the application's storage layer as an opaque
//! record-count oracle plus a content-type metadata source. Adapters decide
//! what backs it: an ORM repository, a fixture, or an in-memory map.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{ContentTypeMeta, ContentTypeName};

/// Failures raised by content storage adapters.
///
/// `SchemaMissing` is the per-type recoverable class: the prefill loop turns
/// it into a report error for that content type and moves on. The remaining
/// variants propagate to the caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentStorageError {
    /// The backing table or collection for the type has not been provisioned.
    #[error("content type '{content_type}' has no backing store; database update required")]
    SchemaMissing {
        /// Content type whose schema is missing.
        content_type: String,
    },
    /// The content type is not configured at all.
    #[error("unknown content type '{content_type}'")]
    UnknownContentType {
        /// The unrecognised content type name.
        content_type: String,
    },
    /// Storage connection could not be established.
    #[error("content storage connection failed: {message}")]
    Connection {
        /// Description of the connection failure.
        message: String,
    },
    /// Query failed during execution.
    #[error("content storage query failed: {message}")]
    Query {
        /// Description of the query failure.
        message: String,
    },
}

impl ContentStorageError {
    /// Builds a schema-missing error for the given content type.
    pub fn schema_missing(content_type: impl Into<String>) -> Self {
        Self::SchemaMissing {
            content_type: content_type.into(),
        }
    }

    /// Builds an unknown-content-type error.
    pub fn unknown_content_type(content_type: impl Into<String>) -> Self {
        Self::UnknownContentType {
            content_type: content_type.into(),
        }
    }

    /// Builds a connection error.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Builds a query error.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for counting existing records and looking up content-type metadata.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentStorage: Send + Sync {
    /// Returns the number of existing records for the content type.
    ///
    /// Fails with [`ContentStorageError::SchemaMissing`] when the backing
    /// store for the type does not exist.
    async fn count_records(&self, content_type: &ContentTypeName)
    -> Result<u64, ContentStorageError>;

    /// Returns the metadata for the content type.
    async fn content_type_meta(
        &self,
        content_type: &ContentTypeName,
    ) -> Result<ContentTypeMeta, ContentStorageError>;
}
