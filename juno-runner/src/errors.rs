use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error(
        "The sample sheet ({0}) does not exist. This sample sheet is generated before starting your pipeline. Something must have gone wrong while creating it."
    )]
    MissingSampleSheet(PathBuf),

    #[error(
        "The provided user parameters ({0}) were not created properly or were deleted before starting the pipeline"
    )]
    MissingUserParameters(PathBuf),

    #[error(
        "The argument {0} is not valid. Extra arguments for snakemake must be given in the form arg=value."
    )]
    InvalidExtraArgument(String),

    #[error("An error occured while running the {0} pipeline.")]
    WorkflowFailed(String),

    #[error("Could not start {program}: {source}")]
    CommandFailed {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read config file {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, RunnerError>;
