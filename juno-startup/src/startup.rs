//! Entry point of a discovery run.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::info;
use uuid::Uuid;

use juno_core::{FileThreshold, InputType, JunoError, Manifest, Result};

use crate::consts::{DEFAULT_METADATA_COLUMNS, DEFAULT_METADATA_FILE};
use crate::discovery::{collect_samples, validate_manifest};
use crate::exclusion::{exclude_samples, read_exclusion_file};
use crate::layout::{
    InputLayout, InputSubdirs, detect_layout, resolve_subdirs, validate_has_extension,
};
use crate::metadata::{Metadata, load_metadata};
use crate::patterns::FileKindSpec;

/// Builder for a [`PipelineStartup`].
///
/// # Examples
///
/// ```rust,no_run
/// use juno_startup::PipelineStartup;
///
/// # fn main() -> juno_core::Result<()> {
/// let startup = PipelineStartup::builder()
///     .with_input_dir("reads/")
///     .with_input_type("both")
///     .with_min_num_lines(4)
///     .finish()?;
/// let manifest = startup.start()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct PipelineStartupBuilder {
    input_dir: Option<PathBuf>,
    input_type: String,
    threshold: FileThreshold,
    exclusion_file: Option<PathBuf>,
}

impl Default for PipelineStartupBuilder {
    fn default() -> Self {
        Self {
            input_dir: None,
            input_type: InputType::Fastq.to_string(),
            threshold: FileThreshold::default(),
            exclusion_file: None,
        }
    }
}

impl PipelineStartupBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory holding the input files.
    pub fn with_input_dir<P: Into<PathBuf>>(mut self, input_dir: P) -> Self {
        self.input_dir = Some(input_dir.into());
        self
    }

    /// Sets the expected input type: `fastq`, `fasta` or `both`.
    pub fn with_input_type<S: Into<String>>(mut self, input_type: S) -> Self {
        self.input_type = input_type.into();
        self
    }

    /// Skip files smaller than `min_file_size` bytes.
    pub fn with_min_file_size(mut self, min_file_size: u64) -> Self {
        self.threshold = FileThreshold::MinFileSize(min_file_size);
        self
    }

    /// Skip files with fewer than `min_num_lines` lines.
    pub fn with_min_num_lines(mut self, min_num_lines: u64) -> Self {
        self.threshold = FileThreshold::MinLines(min_num_lines);
        self
    }

    pub fn with_threshold(mut self, threshold: FileThreshold) -> Self {
        self.threshold = threshold;
        self
    }

    /// Sets a file listing samples that must be left out of the run.
    pub fn with_exclusion_file<P: Into<PathBuf>>(mut self, exclusion_file: P) -> Self {
        self.exclusion_file = Some(exclusion_file.into());
        self
    }

    /// Consumes the builder, checking the input directory and input type.
    pub fn finish(self) -> Result<PipelineStartup> {
        let input_dir = self.input_dir.unwrap_or_default();
        if !input_dir.is_dir() {
            return Err(JunoError::InvalidInputDirectory(input_dir));
        }
        let input_type = InputType::from_str(&self.input_type)?;

        let layout = detect_layout(&input_dir);
        let subdirs = resolve_subdirs(&input_dir, layout);

        Ok(PipelineStartup {
            run_id: Uuid::new_v4(),
            input_dir,
            input_type,
            threshold: self.threshold,
            exclusion_file: self.exclusion_file,
            layout,
            subdirs,
        })
    }
}

///
/// One discovery run over an input directory: detects the layout, checks
/// that the expected kinds of file are present, groups them per sample and
/// validates that every sample is complete.
///
#[derive(Debug)]
pub struct PipelineStartup {
    run_id: Uuid,
    input_dir: PathBuf,
    input_type: InputType,
    threshold: FileThreshold,
    exclusion_file: Option<PathBuf>,
    layout: InputLayout,
    subdirs: InputSubdirs,
}

impl PipelineStartup {
    pub fn builder() -> PipelineStartupBuilder {
        PipelineStartupBuilder::new()
    }

    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    pub fn input_type(&self) -> InputType {
        self.input_type
    }

    pub fn threshold(&self) -> &FileThreshold {
        &self.threshold
    }

    pub fn layout(&self) -> InputLayout {
        self.layout
    }

    pub fn subdirs(&self) -> &InputSubdirs {
        &self.subdirs
    }

    ///
    /// Check that each directory to be scanned holds at least one file with
    /// an accepted extension.
    ///
    pub fn validate_input_dir(&self) -> Result<()> {
        if self.input_type.requires_paired() {
            validate_has_extension(
                &self.subdirs.fastq,
                FileKindSpec::PairedRead.accepted_suffixes(),
            )?;
        }
        if self.input_type.requires_assembly() {
            validate_has_extension(
                &self.subdirs.fasta,
                FileKindSpec::Assembly.accepted_suffixes(),
            )?;
        }
        Ok(())
    }

    ///
    /// Run the discovery and return the validated manifest. Nothing is
    /// returned unless every remaining sample is complete.
    ///
    pub fn start(&self) -> Result<Manifest> {
        info!(
            "Starting run {} on {} ({:?} layout, input type {})",
            self.run_id,
            self.input_dir.display(),
            self.layout,
            self.input_type
        );
        self.validate_input_dir()?;

        info!("Making a list of samples to be processed in this pipeline run...");
        let mut manifest = collect_samples(&self.subdirs, self.input_type, &self.threshold)?;

        if let Some(exclusion_file) = &self.exclusion_file {
            let excluded = read_exclusion_file(exclusion_file)?;
            exclude_samples(&mut manifest, &excluded);
        }

        info!(
            "Validating that all expected input files per sample are present in the input directory..."
        );
        validate_manifest(&manifest, self.input_type, &self.input_dir, &self.threshold)?;

        info!("{} samples will be processed", manifest.len());
        Ok(manifest)
    }

    ///
    /// Load the per-sample metadata table. Without a path the species report
    /// of the assembly pipeline under the input directory is used; without
    /// columns `sample`, `genus` and `species` are expected.
    ///
    pub fn get_metadata_from_csv_file(
        &self,
        path: Option<&Path>,
        expected_columns: Option<&[&str]>,
    ) -> Result<Option<Metadata>> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => self.input_dir.join(DEFAULT_METADATA_FILE),
        };
        load_metadata(&path, expected_columns.unwrap_or(DEFAULT_METADATA_COLUMNS))
    }
}
