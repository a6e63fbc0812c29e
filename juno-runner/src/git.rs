//! Provenance of the pipeline code and environment, with fallbacks when the
//! tools are not installed.

use std::path::Path;
use std::process::Command;

use log::debug;

use crate::consts::{NOT_AVAILABLE_CONDA, NOT_AVAILABLE_GIT};

/// Stdout of a command that exited successfully, trimmed.
fn capture_stdout(command: &mut Command) -> Option<String> {
    let output = command.output().ok()?;
    if !output.status.success() {
        debug!("{:?} exited with {}", command, output.status);
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// URL of the `origin` remote of the repository at `repo_dir`.
pub fn get_repo_url(repo_dir: &Path) -> String {
    capture_stdout(
        Command::new("git")
            .args(["config", "--get", "remote.origin.url"])
            .current_dir(repo_dir),
    )
    .filter(|url| !url.is_empty())
    .unwrap_or_else(|| NOT_AVAILABLE_GIT.to_string())
}

/// Hash of the last commit of the repository at `repo_dir`.
pub fn get_commit_git(repo_dir: &Path) -> String {
    let git_dir = repo_dir.join(".git");
    capture_stdout(
        Command::new("git")
            .arg("--git-dir")
            .arg(&git_dir)
            .args(["log", "-n", "1", "--pretty=format:%H"]),
    )
    .filter(|commit| !commit.is_empty())
    .unwrap_or_else(|| NOT_AVAILABLE_GIT.to_string())
}

/// Packages of the active conda environment.
pub fn get_conda_list() -> String {
    capture_stdout(Command::new("conda").arg("list"))
        .unwrap_or_else(|| NOT_AVAILABLE_CONDA.to_string())
}
