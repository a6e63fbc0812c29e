use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;
use serde::Serialize;

use juno_runner::{RunnerConfig, SnakemakeRunner, parse_extra_arguments, run_pipeline};

use crate::startup::handlers::{discover_samples, write_manifest};

/// Parameters of this run handed to the pipeline next to its fixed parameters.
#[derive(Debug, Serialize)]
pub struct UserParameters {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub exclusion_file: Option<PathBuf>,
}

fn override_with<T: Clone + Send + Sync + 'static>(
    matches: &ArgMatches,
    id: &str,
    target: &mut T,
) {
    if let Some(value) = matches.get_one::<T>(id) {
        *target = value.clone();
    }
}

///
/// Settings from `--config` (or the defaults) with every option given on the
/// command line applied on top.
///
pub fn load_runner_config(matches: &ArgMatches) -> Result<RunnerConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => RunnerConfig::from_yaml(path)
            .with_context(|| format!("Could not load {}", path.display()))?,
        None => RunnerConfig::default(),
    };

    override_with(matches, "pipelinename", &mut config.pipeline_name);
    override_with(matches, "pipelineversion", &mut config.pipeline_version);
    override_with(matches, "output", &mut config.output_dir);
    override_with(matches, "workingdir", &mut config.workdir);
    override_with(matches, "samplesheet", &mut config.sample_sheet);
    override_with(matches, "pipelineparameters", &mut config.fixed_parameters);
    override_with(matches, "userparameters", &mut config.user_parameters);
    override_with(matches, "snakefile", &mut config.snakefile);
    override_with(matches, "cores", &mut config.cores);
    override_with(matches, "conda-frontend", &mut config.conda_frontend);
    override_with(matches, "singularityargs", &mut config.singularity_args);
    override_with(matches, "restarttimes", &mut config.restart_times);
    override_with(matches, "latencywait", &mut config.latency_wait);
    override_with(matches, "queue", &mut config.queue);
    override_with(matches, "time-limit", &mut config.time_limit);

    for (id, target) in [
        ("useconda", &mut config.use_conda),
        ("usesingularity", &mut config.use_singularity),
        ("local", &mut config.local),
        ("unlock", &mut config.unlock),
        ("dryrun", &mut config.dry_run),
        ("rerunincomplete", &mut config.rerun_incomplete),
    ] {
        if matches.get_flag(id) {
            *target = true;
        }
    }

    if let Some(tokens) = matches.get_many::<String>("snakemake-args") {
        let tokens: Vec<&String> = tokens.collect();
        config.extra_args.extend(parse_extra_arguments(&tokens)?);
    }

    Ok(config)
}

pub fn write_user_parameters(path: &Path, parameters: &UserParameters) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_yaml::to_string(parameters)?)
        .with_context(|| format!("Could not write {}", path.display()))?;
    Ok(())
}

pub fn run_run(matches: &ArgMatches) -> Result<()> {
    let config = load_runner_config(matches)?;

    let (startup, manifest) = discover_samples(matches)?;
    write_manifest(&manifest, &config.sample_sheet)?;

    let parameters = UserParameters {
        input_dir: startup.input_dir().to_path_buf(),
        output_dir: config.output_dir.clone(),
        exclusion_file: matches.get_one::<PathBuf>("exclusion-file").cloned(),
    };
    write_user_parameters(&config.user_parameters, &parameters)?;

    let audit_trail = run_pipeline(&SnakemakeRunner::new(), &config)?;
    info!(
        "Run {} finished, audit trail in {} ({} files)",
        startup.run_id(),
        config.audit_trail_dir().display(),
        audit_trail.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build_parser;
    use juno_runner::ExtraArgument;
    use pretty_assertions::assert_eq;

    fn run_matches(args: &[&str]) -> ArgMatches {
        let mut argv = vec!["juno", "run", "-i", "."];
        argv.extend_from_slice(args);
        let matches = build_parser().try_get_matches_from(argv).unwrap();
        let (_, matches) = matches.subcommand().unwrap();
        matches.clone()
    }

    #[test]
    fn test_defaults_without_options() {
        let config = load_runner_config(&run_matches(&[])).unwrap();
        assert_eq!(config, RunnerConfig::default());
    }

    #[test]
    fn test_command_line_overrides_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_file = dir.path().join("runner.yaml");
        fs::write(&config_file, "queue: long\ncores: 10\nlocal: false\n").unwrap();

        let config = load_runner_config(&run_matches(&[
            "--config",
            config_file.to_str().unwrap(),
            "--cores",
            "4",
            "-l",
            "-n",
            "--snakemake-args",
            "until=[a,b]",
        ]))
        .unwrap();

        assert_eq!(config.queue, "long");
        assert_eq!(config.cores, 4);
        assert!(config.local);
        assert!(config.dry_run);
        assert_eq!(
            config.extra_args.get("until"),
            Some(&ExtraArgument::List(vec!["a".to_string(), "b".to_string()]))
        );
    }

    #[test]
    fn test_invalid_snakemake_argument() {
        let result = load_runner_config(&run_matches(&["--snakemake-args", "novalue"]));
        assert!(result.is_err());
    }

    #[test]
    fn test_write_user_parameters() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config/user_parameters.yaml");
        let parameters = UserParameters {
            input_dir: PathBuf::from("reads"),
            output_dir: PathBuf::from("output"),
            exclusion_file: None,
        };

        write_user_parameters(&path, &parameters).unwrap();

        let written: serde_yaml::Value =
            serde_yaml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["input_dir"], "reads");
        assert_eq!(written["output_dir"], "output");
    }
}
