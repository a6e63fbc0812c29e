//! # Core models and helpers for juno pipelines
//!
//! Shared building blocks used by the sample discovery engine and the
//! workflow runner: the [`Manifest`](models::Manifest) of samples and their
//! files, the error taxonomy, and small stateless file and text helpers.
//!
pub mod errors;
pub mod models;
pub mod text;
pub mod utils;

// re-expose the most used items
pub use errors::{JunoError, Result};
pub use models::{FileRole, FileThreshold, InputType, Manifest, SampleRecord};
