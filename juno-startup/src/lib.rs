//! # Sample discovery for juno pipelines
//!
//! Before a pipeline run, the input directory is scanned for paired-end read
//! files (`fastq`), assemblies (`fasta`) or both. The files are grouped per
//! sample into a [`Manifest`](juno_core::Manifest) that the workflow engine
//! uses as its list of work.
//!
//! Two layouts are supported: a flat directory, or the output directory of
//! the assembly pipeline with `clean_fastq/` and `de_novo_assembly_filtered/`
//! children.
//!
//! ```rust,no_run
//! use juno_startup::{PipelineStartup, write_sample_sheet};
//!
//! # fn main() -> juno_core::Result<()> {
//! let manifest = PipelineStartup::builder()
//!     .with_input_dir("output_assembly/")
//!     .with_input_type("both")
//!     .finish()?
//!     .start()?;
//! write_sample_sheet(&manifest, "config/sample_sheet.yaml".as_ref())?;
//! # Ok(())
//! # }
//! ```
pub mod consts;
pub mod discovery;
pub mod exclusion;
pub mod layout;
pub mod metadata;
pub mod patterns;
pub mod sample_sheet;
pub mod startup;

pub use discovery::{build_manifest, collect_samples, enlist_samples, validate_manifest};
pub use layout::{
    InputLayout, InputSubdirs, detect_layout, resolve_subdirs, validate_has_extension,
};
pub use metadata::{Metadata, load_metadata};
pub use patterns::{FileKindSpec, match_assembly, match_paired};
pub use sample_sheet::{read_sample_sheet, write_sample_sheet};
pub use startup::{PipelineStartup, PipelineStartupBuilder};
