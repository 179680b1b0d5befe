//! Quota-aware prefill of placeholder records for configured content types.
//!
//! This crate decides, per content type, how many synthetic records to
//! request from an injected generator, respecting an existing-record ceiling
//! and singleton semantics, and aggregates created payloads, errors, and
//! warnings into a single report. Storage and generation sit behind port
//! traits so the library stays independent of any particular ORM or
//! transport.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use prefill::domain::ports::FixtureRecordGeneratorFactory;
//! use prefill::domain::{ContentTypeName, PrefillBuilder};
//! use prefill::outbound::InMemoryContentStorage;
//!
//! # async fn run() -> Result<(), prefill::domain::PrefillError> {
//! let storage = InMemoryContentStorage::default();
//! storage.insert_content_type("pages", false);
//!
//! let factory = Arc::new(FixtureRecordGeneratorFactory::default());
//! let builder = PrefillBuilder::new(Arc::new(storage), factory, 15);
//!
//! let report = builder
//!     .build(&[ContentTypeName::from("pages")], 3, false)
//!     .await?;
//! assert!(report.errors().is_empty());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod domain;
pub mod outbound;
pub mod widgets;
