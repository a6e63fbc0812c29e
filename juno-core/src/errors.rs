use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while discovering and validating the input samples of a
/// pipeline run. None of them are recoverable: every variant aborts the run.
#[derive(Error, Debug)]
pub enum JunoError {
    #[error(
        "The provided input directory ({0}) does not exist. Please provide an existing directory"
    )]
    InvalidInputDirectory(PathBuf),

    #[error("input_type to be checked can only be 'fastq', 'fasta' or 'both', got: '{0}'")]
    InvalidInputType(String),

    #[error(
        "Input directory ({dir}) does not contain files that end with one of the expected extensions {suffixes:?}."
    )]
    ValidationError {
        dir: PathBuf,
        suffixes: Vec<String>,
    },

    #[error(
        "The input directory ({dir}) does not contain any files with the expected format/naming.{}",
        threshold_note(.min_lines)
    )]
    EmptyManifestError {
        dir: PathBuf,
        min_lines: Option<u64>,
    },

    #[error(
        "Either the R1 or R2 files are missing for sample {0}. Paired-end reads are expected by the Juno pipelines. If you are sure you have paired-end reads, it might be that the names of some of your files are not being properly recognized"
    )]
    IncompletePairError(String),

    #[error("The assembly is missing for sample {0}. This pipeline expects an assembly per sample.")]
    MissingAssemblyError(String),

    #[error(
        "The metadata file ({file}) does not contain one or more of the expected column names ({expected:?})."
    )]
    MetadataColumnError {
        file: PathBuf,
        expected: Vec<String>,
    },

    #[error("The exclusion file ({0}) does not exist or is not a regular file")]
    InvalidExclusionFile(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

fn threshold_note(min_lines: &Option<u64>) -> String {
    match min_lines {
        Some(0) => " Empty files are ignored.".to_string(),
        Some(n) => format!(" Files with fewer than {n} lines are ignored."),
        None => String::new(),
    }
}

/// Result type alias for juno operations.
pub type Result<T> = std::result::Result<T, JunoError>;
