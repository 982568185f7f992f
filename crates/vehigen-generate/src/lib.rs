//! Fake vehicle registration record generation for vehigen.
//!
//! This crate samples records from the reference tables in `vehigen-core`
//! through an injectable [`FakeSource`], checks them, and writes the batch to
//! a pretty-printed JSON document.

pub mod checks;
pub mod engine;
pub mod errors;
pub mod generators;
pub mod model;
pub mod output;
pub mod source;

pub use engine::{GenerationEngine, GenerationResult};
pub use errors::GenerationError;
pub use model::{GenerateOptions, GenerationReport};
pub use source::{FakeSource, Faker};
