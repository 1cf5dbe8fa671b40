use colored::Colorize;
use inquire::Text;

use crate::{
    error::AppError,
    identity::{self, GITHUB_NOREPLY_DOMAIN, GITLAB_NOREPLY_DOMAIN, IdentityRecord},
    validation,
};

/// Prompts for private (no-reply) identity details for both providers
pub fn private_identity() -> Result<IdentityRecord, AppError> {
    let github_user: String = prompt_text("enter your github username:")?;
    let gitlab_user: String = prompt_text("enter your gitlab username:")?;

    let github_email: String = prompt_email(
        "enter your github no-reply email address:",
        &github_user,
        &identity::github_noreply_email(&github_user),
    )?;
    validation::warn_unless_noreply("github", &github_email, GITHUB_NOREPLY_DOMAIN);

    let gitlab_email: String = prompt_email(
        "enter your gitlab no-reply email address:",
        &gitlab_user,
        &identity::gitlab_noreply_email(&gitlab_user),
    )?;
    validation::warn_unless_noreply("gitlab", &gitlab_email, GITLAB_NOREPLY_DOMAIN);

    Ok(IdentityRecord {
        github_user,
        gitlab_user,
        github_email,
        gitlab_email,
    })
}

/// Prompts for public identity details for both providers
pub fn public_identity() -> Result<IdentityRecord, AppError> {
    let github_user: String = prompt_text("enter your github username:")?;
    let gitlab_user: String = prompt_text("enter your gitlab username:")?;

    let github_email: String = prompt_text("enter your github email address:")?;
    validation::warn_unless_well_formed("github", &github_email);

    let gitlab_email: String = prompt_text("enter your gitlab email address:")?;
    validation::warn_unless_well_formed("gitlab", &gitlab_email);

    Ok(IdentityRecord {
        github_user,
        gitlab_user,
        github_email,
        gitlab_email,
    })
}

fn prompt_text(message: &str) -> Result<String, AppError> {
    Ok(Text::new(&format!("{}", message.blue())).prompt()?)
}

/// Email prompt that suggests the derived no-reply address once the username is known
fn prompt_email(message: &str, username: &str, suggestion: &str) -> Result<String, AppError> {
    let styled: String = format!("{}", message.blue());
    let mut text = Text::new(&styled);
    if !username.is_empty() {
        text = text.with_default(suggestion);
    }
    Ok(text.prompt()?)
}
