//! HTTP outbound adapters.
//!
//! This module provides a thin reqwest implementation of the record
//! generation ports against a remote placeholder-content endpoint.

mod remote_generator;

pub use remote_generator::{RemoteContentGenerator, RemoteGeneratorFactory};
