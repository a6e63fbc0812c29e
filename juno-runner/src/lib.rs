//! # Running juno pipelines
//!
//! Hands a validated sample sheet to snakemake, either locally or through LSF
//! cluster submission, and keeps an audit trail of what was run, where and
//! with which code.
//!
//! ```rust,no_run
//! use juno_runner::{RunnerConfig, SnakemakeRunner, run_pipeline};
//!
//! # fn main() -> juno_runner::Result<()> {
//! let config = RunnerConfig {
//!     pipeline_name: "juno_typing".to_string(),
//!     local: true,
//!     ..RunnerConfig::default()
//! };
//! let audit_trail = run_pipeline(&SnakemakeRunner::new(), &config)?;
//! # Ok(())
//! # }
//! ```
pub mod audit;
pub mod cluster;
pub mod config;
pub mod consts;
pub mod errors;
pub mod git;
pub mod kwargs;
pub mod runner;

pub use audit::{AuditTrail, GitInfo, PipelineInfo};
pub use config::RunnerConfig;
pub use errors::{Result, RunnerError};
pub use kwargs::{ExtraArgument, ExtraArguments, parse_extra_arguments};
pub use runner::{SnakemakeRunner, WorkflowRunner, run_pipeline};
