use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::errors::{Result, RunnerError};
use crate::kwargs::ExtraArguments;

///
/// Everything the workflow engine needs for one pipeline run. Missing keys in
/// a YAML config take their default.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    pub pipeline_name: String,
    pub pipeline_version: String,
    pub output_dir: PathBuf,
    pub workdir: PathBuf,
    pub sample_sheet: PathBuf,
    pub user_parameters: PathBuf,
    pub fixed_parameters: PathBuf,
    pub snakefile: PathBuf,
    pub cores: u32,
    /// Run jobs on this machine instead of submitting them to the cluster.
    pub local: bool,
    pub queue: String,
    /// Wall clock limit of a cluster job in minutes.
    pub time_limit: u32,
    pub unlock: bool,
    pub rerun_incomplete: bool,
    pub dry_run: bool,
    pub use_conda: bool,
    pub conda_frontend: String,
    pub use_singularity: bool,
    pub singularity_args: String,
    pub restart_times: u32,
    /// Seconds to wait for an output file to appear.
    pub latency_wait: u32,
    pub report_name: String,
    pub extra_args: ExtraArguments,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            pipeline_name: DEFAULT_PIPELINE_NAME.to_string(),
            pipeline_version: DEFAULT_PIPELINE_VERSION.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            workdir: PathBuf::from(DEFAULT_WORKDIR),
            sample_sheet: PathBuf::from(DEFAULT_SAMPLE_SHEET),
            user_parameters: PathBuf::from(DEFAULT_USER_PARAMETERS),
            fixed_parameters: PathBuf::from(DEFAULT_FIXED_PARAMETERS),
            snakefile: PathBuf::from(DEFAULT_SNAKEFILE),
            cores: DEFAULT_CORES,
            local: false,
            queue: DEFAULT_QUEUE.to_string(),
            time_limit: DEFAULT_TIME_LIMIT,
            unlock: false,
            rerun_incomplete: true,
            dry_run: false,
            use_conda: true,
            conda_frontend: DEFAULT_CONDA_FRONTEND.to_string(),
            use_singularity: true,
            singularity_args: String::new(),
            restart_times: 0,
            latency_wait: DEFAULT_LATENCY_WAIT,
            report_name: DEFAULT_REPORT_NAME.to_string(),
            extra_args: ExtraArguments::new(),
        }
    }
}

impl RunnerConfig {
    /// Absolute paths are kept, relative ones are joined onto `base_dir`.
    fn resolve_config_path(path: &Path, base_dir: &Path) -> PathBuf {
        if path.is_absolute() || path.as_os_str().is_empty() {
            path.to_path_buf()
        } else {
            base_dir.join(path)
        }
    }

    ///
    /// Load a config from a YAML file. Relative paths inside the file are
    /// resolved against the directory holding it.
    ///
    pub fn from_yaml(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let mut config: Self =
            serde_yaml::from_str(&content).map_err(|source| RunnerError::Config {
                path: path.to_path_buf(),
                source,
            })?;

        let config_dir = path.parent().unwrap_or(Path::new(""));
        for field in [
            &mut config.output_dir,
            &mut config.workdir,
            &mut config.sample_sheet,
            &mut config.user_parameters,
            &mut config.fixed_parameters,
            &mut config.snakefile,
        ] {
            *field = Self::resolve_config_path(field, config_dir);
        }

        Ok(config)
    }

    pub fn audit_trail_dir(&self) -> PathBuf {
        self.output_dir.join(AUDIT_TRAIL_DIR)
    }

    pub fn cluster_log_dir(&self) -> PathBuf {
        self.output_dir.join(CLUSTER_LOG_DIR)
    }

    pub fn report_path(&self) -> PathBuf {
        self.audit_trail_dir().join(&self.report_name)
    }
}
