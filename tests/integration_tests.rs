//! Integration tests for the gitduo CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const CONFIG_FILE_NAME: &str = ".git-init-private-users-config.txt";

fn git_available() -> bool {
    std::process::Command::new("git")
        .arg("--version")
        .output()
        .is_ok()
}

/// Command with HOME and the working directory pinned to temp dirs
fn gitduo(home: &TempDir, workdir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("gitduo").unwrap();
    cmd.env("HOME", home.path())
        .env_remove("XDG_CONFIG_HOME")
        .env_remove("GIT_CONFIG_GLOBAL")
        .current_dir(workdir.path());
    cmd
}

#[test]
fn help_shows_description() {
    let mut cmd = Command::cargo_bin("gitduo").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("GitHub and GitLab remotes"));
}

#[test]
fn missing_repo_name_is_a_usage_error() {
    let home = TempDir::new().unwrap();
    let workdir = TempDir::new().unwrap();

    gitduo(&home, &workdir)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage"));

    assert!(!workdir.path().join(".git").exists());
    assert!(!home.path().join(CONFIG_FILE_NAME).exists());
}

#[test]
fn unknown_flag_is_a_usage_error() {
    let home = TempDir::new().unwrap();
    let workdir = TempDir::new().unwrap();

    gitduo(&home, &workdir)
        .args(["myrepo", "--bogus"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage"));

    assert!(!workdir.path().join(".git").exists());
}

#[test]
fn empty_repo_name_exits_before_any_side_effect() {
    let home = TempDir::new().unwrap();
    let workdir = TempDir::new().unwrap();

    gitduo(&home, &workdir)
        .args(["", "--private-user"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("repository name cannot be empty"));

    assert!(!workdir.path().join(".git").exists());
    assert!(!home.path().join(CONFIG_FILE_NAME).exists());
}

#[test]
fn private_mode_with_existing_config_skips_prompts_and_sets_up_remotes() {
    if !git_available() {
        eprintln!("git not found, skipping");
        return;
    }

    let home = TempDir::new().unwrap();
    let workdir = TempDir::new().unwrap();

    fs::write(
        home.path().join(CONFIG_FILE_NAME),
        "GITHUB_USER=priv_gh\n\
         GITLAB_USER=priv_gl\n\
         GITHUB_EMAIL=priv_gh@users.noreply.github.com\n\
         GITLAB_EMAIL=priv_gl@users.noreply.gitlab.com\n",
    )
    .unwrap();

    gitduo(&home, &workdir)
        .args(["myrepo", "--private-user"])
        .assert()
        .success()
        .stdout(predicate::str::contains("loaded private user configuration"))
        .stdout(predicate::str::contains("priv_gh@users.noreply.github.com"))
        .stdout(predicate::str::contains("git@github.com:priv_gh/myrepo.git"))
        .stdout(predicate::str::contains("git@gitlab.com:priv_gl/myrepo.git"));

    assert!(workdir.path().join(".git").exists());

    let local_config = fs::read_to_string(workdir.path().join(".git/config")).unwrap();
    assert!(local_config.contains("git@github.com:priv_gh/myrepo.git"));
    assert!(local_config.contains("git@gitlab.com:priv_gl/myrepo.git"));
    assert!(local_config.contains("priv_gh@users.noreply.github.com"));

    let global_config = fs::read_to_string(home.path().join(".gitconfig")).unwrap();
    assert!(global_config.contains("priv_gh@users.noreply.github.com"));
    assert!(global_config.contains("priv_gh"));
}

#[test]
fn private_mode_with_short_config_fails_before_git_runs() {
    let home = TempDir::new().unwrap();
    let workdir = TempDir::new().unwrap();

    fs::write(home.path().join(CONFIG_FILE_NAME), "GITHUB_USER=alice\n").unwrap();

    gitduo(&home, &workdir)
        .args(["myrepo", "--private-user"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error loading configuration file"));

    assert!(!workdir.path().join(".git").exists());
}

#[test]
fn incomplete_identity_in_config_fails_before_git_runs() {
    let home = TempDir::new().unwrap();
    let workdir = TempDir::new().unwrap();

    fs::write(
        home.path().join(CONFIG_FILE_NAME),
        "GITHUB_USER=alice\n\
         GITLAB_USER=\n\
         GITHUB_EMAIL=alice@users.noreply.github.com\n\
         GITLAB_EMAIL=alice@users.noreply.gitlab.com\n",
    )
    .unwrap();

    gitduo(&home, &workdir)
        .args(["myrepo", "--private-user"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("gitlab username"));

    assert!(!workdir.path().join(".git").exists());
}
