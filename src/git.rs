use std::process::{Command, Output};

use colored::Colorize;

use crate::error::AppError;

/// Builds the SSH-style remote URL for a provider host
pub fn remote_url(host: &str, user: &str, repo_name: &str) -> String {
    format!("git@{}:{}/{}.git", host, user, repo_name)
}

/// Initializes a Git repository in the current directory
pub fn init_repository() -> Result<(), AppError> {
    run_git(&["init"])
}

/// Registers a named remote with its URL
pub fn add_remote(name: &str, url: &str) -> Result<(), AppError> {
    run_git(&["remote", "add", name, url])
}

/// Sets a local Git config key
pub fn set_config(key: &str, value: &str) -> Result<(), AppError> {
    run_git(&["config", key, value])
}

/// Sets a global Git config key
pub fn set_global_config(key: &str, value: &str) -> Result<(), AppError> {
    run_git(&["config", "--global", key, value])
}

/// Runs a git command under the best-effort policy: failure to launch the
/// binary is an error, a non-zero exit status is a warning and the setup
/// sequence continues.
fn run_git(args: &[&str]) -> Result<(), AppError> {
    let git_command_output: Output = Command::new("git")
        .args(args)
        .output()
        .map_err(|err| AppError::GitCommand(format!("git {}: {}", args.join(" "), err)))?;

    if !git_command_output.status.success() {
        let stderr = String::from_utf8_lossy(&git_command_output.stderr);
        eprintln!(
            "{} git {}: {}",
            "warning:".yellow(),
            args.join(" "),
            stderr.trim()
        );
    }

    Ok(())
}
