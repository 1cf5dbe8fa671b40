use crate::error::AppError;

/// Domain of GitHub no-reply addresses
pub const GITHUB_NOREPLY_DOMAIN: &str = "users.noreply.github.com";
/// Domain of GitLab no-reply addresses
pub const GITLAB_NOREPLY_DOMAIN: &str = "users.noreply.gitlab.com";

/// Resolved author identity for both hosting providers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityRecord {
    /// GitHub username
    pub github_user: String,
    /// GitLab username
    pub gitlab_user: String,
    /// Email for commits pushed to the github remote
    pub github_email: String,
    /// Email for commits pushed to the gitlab remote
    pub gitlab_email: String,
}

impl IdentityRecord {
    /// Ensures every field is populated before any remote is registered
    pub fn validate_complete(&self) -> Result<(), AppError> {
        let mut missing: Vec<&str> = Vec::new();
        if self.github_user.is_empty() {
            missing.push("github username");
        }
        if self.gitlab_user.is_empty() {
            missing.push("gitlab username");
        }
        if self.github_email.is_empty() {
            missing.push("github email");
        }
        if self.gitlab_email.is_empty() {
            missing.push("gitlab email");
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(format!(
                "missing required details: {}",
                missing.join(", ")
            )))
        }
    }
}

/// GitHub no-reply email address for a username
pub fn github_noreply_email(github_user: &str) -> String {
    format!("{}@{}", github_user, GITHUB_NOREPLY_DOMAIN)
}

/// GitLab no-reply email address for a username
pub fn gitlab_noreply_email(gitlab_user: &str) -> String {
    format!("{}@{}", gitlab_user, GITLAB_NOREPLY_DOMAIN)
}
