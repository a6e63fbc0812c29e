//! Audit trail written next to the results of every (non dry) run.

use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;

use chrono::Local;
use log::info;
use serde::{Deserialize, Serialize};

use crate::config::RunnerConfig;
use crate::consts::*;
use crate::errors::{Result, RunnerError};
use crate::git::{get_commit_git, get_conda_list, get_repo_url};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GitInfo {
    pub repo: String,
    pub commit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineInfo {
    pub pipeline_name: String,
    pub pipeline_version: String,
    pub timestamp: String,
    pub hostname: String,
}

pub fn hostname() -> String {
    if let Ok(n) = ::hostname::get() {
        return n.to_string_lossy().into_owned();
    }
    UNKNOWN_HOSTNAME.to_string()
}

///
/// Records which code, environment and inputs produced a run. The timestamp
/// and hostname are taken when the trail is created.
///
#[derive(Debug)]
pub struct AuditTrail<'a> {
    config: &'a RunnerConfig,
    timestamp: String,
    hostname: String,
}

impl<'a> AuditTrail<'a> {
    pub fn new(config: &'a RunnerConfig) -> Self {
        Self {
            config,
            timestamp: Local::now().format(AUDIT_TIMESTAMP_FORMAT).to_string(),
            hostname: hostname(),
        }
    }

    pub fn dir(&self) -> PathBuf {
        self.config.audit_trail_dir()
    }

    pub fn pipeline_info(&self) -> PipelineInfo {
        PipelineInfo {
            pipeline_name: self.config.pipeline_name.clone(),
            pipeline_version: self.config.pipeline_version.clone(),
            timestamp: self.timestamp.clone(),
            hostname: self.hostname.clone(),
        }
    }

    ///
    /// Write the audit trail and return the paths of the files written.
    /// Nothing is written on a dry run.
    ///
    pub fn generate(&self) -> Result<Vec<PathBuf>> {
        if self.config.dry_run {
            info!("Dry run, no audit trail is generated");
            return Ok(Vec::new());
        }

        if !self.config.sample_sheet.exists() {
            return Err(RunnerError::MissingSampleSheet(self.config.sample_sheet.clone()));
        }
        if !self.config.user_parameters.exists() {
            return Err(RunnerError::MissingUserParameters(
                self.config.user_parameters.clone(),
            ));
        }

        let dir = self.dir();
        fs::create_dir_all(&dir)?;

        let git_file = dir.join(GIT_AUDIT_FILE);
        info!(
            "Collecting information about the Git repository of this pipeline (see {})",
            git_file.display()
        );
        let git_info = GitInfo {
            repo: get_repo_url(&self.config.workdir),
            commit: get_commit_git(&self.config.workdir),
        };
        fs::write(&git_file, serde_yaml::to_string(&git_info)?)?;

        let conda_file = dir.join(CONDA_AUDIT_FILE);
        info!("Getting information of the master environment used for this pipeline.");
        let mut conda = File::create(&conda_file)?;
        writeln!(conda, "Master environment list:\n")?;
        write!(conda, "{}", get_conda_list())?;

        let pipeline_file = dir.join(PIPELINE_AUDIT_FILE);
        info!(
            "Collecting information about the pipeline (see {})",
            pipeline_file.display()
        );
        fs::write(&pipeline_file, serde_yaml::to_string(&self.pipeline_info())?)?;

        let user_parameters_file = dir.join(USER_PARAMETERS_AUDIT_FILE);
        fs::copy(&self.config.user_parameters, &user_parameters_file)?;

        let sample_sheet_file = dir.join(SAMPLE_SHEET_AUDIT_FILE);
        fs::copy(&self.config.sample_sheet, &sample_sheet_file)?;

        Ok(vec![
            git_file,
            conda_file,
            pipeline_file,
            user_parameters_file,
            sample_sheet_file,
        ])
    }
}
