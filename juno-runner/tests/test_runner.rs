use std::cell::RefCell;
use std::fs;

use pretty_assertions::assert_eq;
use rstest::*;
use tempfile::TempDir;

use juno_runner::{Result, RunnerConfig, RunnerError, WorkflowRunner, run_pipeline};

/// Records the calls made to it instead of starting an engine.
#[derive(Default)]
struct RecordingRunner {
    calls: RefCell<Vec<&'static str>>,
    fail: bool,
}

impl WorkflowRunner for RecordingRunner {
    fn run(&self, config: &RunnerConfig) -> Result<bool> {
        self.calls.borrow_mut().push("run");
        if self.fail {
            return Err(RunnerError::WorkflowFailed(config.pipeline_name.clone()));
        }
        Ok(true)
    }

    fn report(&self, _config: &RunnerConfig) -> Result<bool> {
        self.calls.borrow_mut().push("report");
        Ok(true)
    }
}

#[fixture]
fn prepared_run() -> (TempDir, RunnerConfig) {
    let dir = tempfile::tempdir().unwrap();
    let config_dir = dir.path().join("config");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("sample_sheet.yaml"), "1234:\n  assembly: in/1234.fasta\n").unwrap();
    fs::write(config_dir.join("user_parameters.yaml"), "input_dir: in\n").unwrap();

    let config = RunnerConfig {
        pipeline_name: "fake_pipeline".to_string(),
        output_dir: dir.path().join("output"),
        workdir: dir.path().to_path_buf(),
        sample_sheet: config_dir.join("sample_sheet.yaml"),
        user_parameters: config_dir.join("user_parameters.yaml"),
        local: true,
        ..RunnerConfig::default()
    };
    (dir, config)
}

#[rstest]
fn test_full_run(prepared_run: (TempDir, RunnerConfig)) {
    let (_dir, config) = prepared_run;
    let runner = RecordingRunner::default();

    let audit_trail = run_pipeline(&runner, &config).unwrap();

    assert_eq!(*runner.calls.borrow(), vec!["run", "report"]);
    assert_eq!(audit_trail.len(), 5);
    assert!(audit_trail.iter().all(|p| p.starts_with(config.audit_trail_dir())));
}

#[rstest]
fn test_dry_run_skips_audit_and_report(prepared_run: (TempDir, RunnerConfig)) {
    let (_dir, mut config) = prepared_run;
    config.dry_run = true;
    let runner = RecordingRunner::default();

    let audit_trail = run_pipeline(&runner, &config).unwrap();

    assert_eq!(*runner.calls.borrow(), vec!["run"]);
    assert!(audit_trail.is_empty());
    assert!(!config.audit_trail_dir().exists());
}

#[rstest]
fn test_failed_run_has_no_report(prepared_run: (TempDir, RunnerConfig)) {
    let (_dir, config) = prepared_run;
    let runner = RecordingRunner {
        fail: true,
        ..RecordingRunner::default()
    };

    let result = run_pipeline(&runner, &config);

    assert!(matches!(result, Err(RunnerError::WorkflowFailed(name)) if name == "fake_pipeline"));
    assert_eq!(*runner.calls.borrow(), vec!["run"]);
    // the audit trail is written before the engine starts
    assert!(config.audit_trail_dir().is_dir());
}

#[rstest]
fn test_missing_sample_sheet_stops_before_run(prepared_run: (TempDir, RunnerConfig)) {
    let (_dir, config) = prepared_run;
    fs::remove_file(&config.sample_sheet).unwrap();
    let runner = RecordingRunner::default();

    let result = run_pipeline(&runner, &config);

    assert!(matches!(result, Err(RunnerError::MissingSampleSheet(_))));
    assert!(runner.calls.borrow().is_empty());
}
