//! # Quill Core
//!
//! The domain layer of the Quill fixture generator.
//! This crate holds the record types, the compiled-in content pools and the
//! deterministic generator. It performs no I/O; output goes through the
//! [`ports::FixtureSink`] port.

pub mod domain;
pub mod error;
pub mod generator;
pub mod pools;
pub mod ports;
pub mod template;

pub use error::DomainError;
pub use generator::{FixtureGenerator, GenerationPlan};
