//! The workflow engine behind a pipeline run.

use std::fs;
use std::path::PathBuf;
use std::process::Command;

use log::info;

use crate::audit::AuditTrail;
use crate::cluster::{cluster_job_name, cluster_submit_template};
use crate::config::RunnerConfig;
use crate::consts::SNAKEMAKE_BIN;
use crate::errors::{Result, RunnerError};
use crate::kwargs::to_command_args;

pub trait WorkflowRunner {
    /// Run the workflow. `Ok(true)` when it finished successfully.
    fn run(&self, config: &RunnerConfig) -> Result<bool>;

    /// Render the report of a finished run into the audit trail.
    fn report(&self, config: &RunnerConfig) -> Result<bool>;
}

#[derive(Debug, Clone)]
pub struct SnakemakeRunner {
    executable: String,
}

impl Default for SnakemakeRunner {
    fn default() -> Self {
        Self {
            executable: SNAKEMAKE_BIN.to_string(),
        }
    }
}

impl SnakemakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use another executable instead of `snakemake` from the `PATH`.
    pub fn with_executable<S: Into<String>>(mut self, executable: S) -> Self {
        self.executable = executable.into();
        self
    }

    /// Arguments shared by a run and its report.
    fn base_command(&self, config: &RunnerConfig) -> Command {
        let mut command = Command::new(&self.executable);
        command
            .arg("--snakefile")
            .arg(&config.snakefile)
            .arg("--directory")
            .arg(&config.workdir)
            .arg("--configfiles")
            .arg(&config.user_parameters)
            .arg(&config.fixed_parameters)
            .arg("--config")
            .arg(format!("sample_sheet={}", config.sample_sheet.display()));
        command
    }

    pub fn build_command(&self, config: &RunnerConfig) -> Command {
        let mut command = self.base_command(config);
        command
            .arg("--cores")
            .arg(config.cores.to_string())
            .arg("--jobs")
            .arg(config.cores.to_string())
            .arg("--keep-going")
            .arg("--printshellcmds")
            .arg("--latency-wait")
            .arg(config.latency_wait.to_string())
            .arg("--restart-times")
            .arg(config.restart_times.to_string());

        if config.rerun_incomplete {
            command.arg("--rerun-incomplete");
        }
        if config.use_conda {
            command
                .arg("--use-conda")
                .arg("--conda-frontend")
                .arg(&config.conda_frontend);
        }
        if config.use_singularity {
            command.arg("--use-singularity");
            if !config.singularity_args.is_empty() {
                command.arg("--singularity-args").arg(&config.singularity_args);
            }
        }
        if config.unlock {
            command.arg("--unlock");
        }
        if config.dry_run {
            command.arg("--dry-run");
        }
        if !config.local {
            command
                .arg("--cluster")
                .arg(cluster_submit_template(
                    &config.queue,
                    &config.cluster_log_dir(),
                    config.time_limit,
                ))
                .arg("--jobname")
                .arg(cluster_job_name(&config.pipeline_name));
        }

        command.args(to_command_args(&config.extra_args));
        command
    }

    pub fn build_report_command(&self, config: &RunnerConfig) -> Command {
        let mut command = self.base_command(config);
        command.arg("--report").arg(config.report_path());
        command
    }

    fn execute(&self, mut command: Command, config: &RunnerConfig) -> Result<bool> {
        let status = command.status().map_err(|source| RunnerError::CommandFailed {
            program: self.executable.clone(),
            source,
        })?;
        if !status.success() {
            return Err(RunnerError::WorkflowFailed(config.pipeline_name.clone()));
        }
        Ok(true)
    }
}

impl WorkflowRunner for SnakemakeRunner {
    fn run(&self, config: &RunnerConfig) -> Result<bool> {
        info!("Running {} pipeline.", config.pipeline_name);

        if config.local {
            info!("Jobs will run locally");
        } else {
            info!("Jobs will be sent to the cluster");
            fs::create_dir_all(config.cluster_log_dir())?;
        }

        self.execute(self.build_command(config), config)?;
        info!("Finished running {} pipeline!", config.pipeline_name);
        Ok(true)
    }

    fn report(&self, config: &RunnerConfig) -> Result<bool> {
        fs::create_dir_all(config.audit_trail_dir())?;
        info!("Writing report to {}", config.report_path().display());
        self.execute(self.build_report_command(config), config)
    }
}

///
/// Full run of a pipeline whose sample sheet and user parameters are already
/// written: audit trail, workflow and report. A dry run only asks the engine
/// what it would do. Returns the paths of the audit trail.
///
pub fn run_pipeline<R: WorkflowRunner + ?Sized>(
    runner: &R,
    config: &RunnerConfig,
) -> Result<Vec<PathBuf>> {
    let audit_trail = AuditTrail::new(config).generate()?;
    runner.run(config)?;
    if !config.dry_run {
        runner.report(config)?;
    }
    Ok(audit_trail)
}
