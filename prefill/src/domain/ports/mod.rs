//! Domain ports for the hexagonal boundary.
//!
//! Each port pairs a trait with its semantic error enum. Mock implementations
//! are available to unit tests via `mockall`; the fixture factory is exported
//! for integration tests and demos.

mod content_storage;
mod record_generator;

#[cfg(test)]
pub use content_storage::MockContentStorage;
pub use content_storage::{ContentStorage, ContentStorageError};
#[cfg(test)]
pub use record_generator::{MockRecordContentGenerator, MockRecordGeneratorFactory};
pub use record_generator::{
    CreatedRecord, FixtureRecordGeneratorFactory, GeneratorError, RecordContentGenerator,
    RecordGeneratorFactory,
};
