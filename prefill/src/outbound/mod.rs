//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! Adapters are thin translators that convert between domain types and
//! infrastructure-specific representations. They contain no quota logic:
//!
//! - **memory**: hash-map backed content storage for tests and demos
//! - **http**: reqwest-backed remote placeholder-content generator
//! - **demo**: deterministic local generator over the `demo-content` crate

pub mod demo;
pub mod http;
mod memory;

pub use demo::{DemoContentGenerator, DemoRecordGeneratorFactory};
pub use http::{RemoteContentGenerator, RemoteGeneratorFactory};
pub use memory::InMemoryContentStorage;
