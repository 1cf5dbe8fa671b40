use colored::Colorize;

use crate::{
    cli::Cli, config, error::AppError, git, identity::IdentityRecord, prompt, spinner,
};

/// Derived SSH remote URLs for both providers
pub struct RemoteUrls {
    pub github: String,
    pub gitlab: String,
}

/// Runs the setup flow: resolve identity, derive remote URLs, apply git commands
pub fn run(cli: &Cli) -> Result<(), AppError> {
    if cli.repo_name.is_empty() {
        return Err(AppError::Validation(
            "repository name cannot be empty".to_string(),
        ));
    }

    let identity: IdentityRecord = resolve_identity(cli.private_user)?;
    identity.validate_complete()?;

    let urls = RemoteUrls {
        github: git::remote_url("github.com", &identity.github_user, &cli.repo_name),
        gitlab: git::remote_url("gitlab.com", &identity.gitlab_user, &cli.repo_name),
    };

    apply(&identity, &urls, cli.private_user)?;
    report(&urls, cli.private_user);
    Ok(())
}

/// Resolves the identity record, branching on private vs public mode
fn resolve_identity(private_user: bool) -> Result<IdentityRecord, AppError> {
    if !private_user {
        println!("{}", "initializing with public user details".blue());
        return prompt::public_identity();
    }

    let path = config::config_path()?;
    if path.exists() {
        let identity: IdentityRecord = config::load(&path)?;
        println!("{}", "loaded private user configuration".green());
        println!("{} {}", "github username:".blue(), identity.github_user);
        println!("{} {}", "gitlab username:".blue(), identity.gitlab_user);
        println!("{} {}", "github private email:".blue(), identity.github_email);
        println!("{} {}", "gitlab private email:".blue(), identity.gitlab_email);
        Ok(identity)
    } else {
        println!(
            "{}",
            "configuration file not found, setting up private user details".blue()
        );
        let identity: IdentityRecord = prompt::private_identity()?;
        config::save(&path, &identity)?;
        println!(
            "{} {}",
            "private user configuration saved to".green(),
            path.display()
        );
        Ok(identity)
    }
}

/// Applies the git command sequence for the resolved identity
fn apply(identity: &IdentityRecord, urls: &RemoteUrls, private_user: bool) -> Result<(), AppError> {
    git::init_repository()?;

    let progress = spinner::start("adding remotes");
    git::add_remote("github", &urls.github)?;
    git::set_config("remote.github.url", &urls.github)?;
    git::add_remote("gitlab", &urls.gitlab)?;
    git::set_config("remote.gitlab.url", &urls.gitlab)?;
    progress.finish_and_clear();

    git::set_config("user.email", &identity.github_email)?;
    git::set_config("user.name", &identity.github_user)?;

    if private_user {
        git::set_config("remote.github.email", &identity.github_email)?;
        git::set_config("remote.gitlab.email", &identity.gitlab_email)?;
        git::set_global_config("user.email", &identity.github_email)?;
        git::set_global_config("user.name", &identity.github_user)?;
    }

    Ok(())
}

/// Prints the derived URLs and a mode-dependent confirmation
fn report(urls: &RemoteUrls, private_user: bool) {
    if private_user {
        println!(
            "{}",
            "github and gitlab remotes added with private email configuration".green()
        );
    } else {
        println!(
            "{}",
            "github and gitlab remotes added with public user emails".green()
        );
    }

    println!("{} {}", "github remote url:".blue(), urls.github);
    println!("{} {}", "gitlab remote url:".blue(), urls.gitlab);
}
