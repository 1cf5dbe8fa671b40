use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{error::AppError, identity::IdentityRecord};

/// Private user configuration file in user's home directory
const CONFIG_FILE_NAME: &str = ".git-init-private-users-config.txt";

/// Gets the path to the private user configuration file
pub fn config_path() -> Result<PathBuf, AppError> {
    let home_dir: PathBuf = dirs::home_dir().ok_or(AppError::MissingHomeDir)?;
    Ok(home_dir.join(CONFIG_FILE_NAME))
}

/// Loads the four identity fields from the configuration file.
///
/// Lines are read positionally: github username, gitlab username, github
/// email, gitlab email. Keys are not checked; the value is whatever follows
/// the first `=` on each line.
pub fn load(path: &Path) -> Result<IdentityRecord, AppError> {
    let file_contents: String = fs::read_to_string(path)?;
    let lines: Vec<&str> = file_contents.lines().collect();

    if lines.len() < 4 {
        return Err(AppError::Config(format!(
            "expected 4 lines, found {}",
            lines.len()
        )));
    }

    Ok(IdentityRecord {
        github_user: line_value(lines[0]),
        gitlab_user: line_value(lines[1]),
        github_email: line_value(lines[2]),
        gitlab_email: line_value(lines[3]),
    })
}

/// Saves the four identity fields as `KEY=value` lines, overwriting any prior content
pub fn save(path: &Path, identity: &IdentityRecord) -> Result<(), AppError> {
    let contents: String = format!(
        "GITHUB_USER={}\nGITLAB_USER={}\nGITHUB_EMAIL={}\nGITLAB_EMAIL={}\n",
        identity.github_user, identity.gitlab_user, identity.github_email, identity.gitlab_email
    );
    fs::write(path, contents)?;
    Ok(())
}

/// Value portion of a `KEY=value` line, or the whole line when no `=` is present
fn line_value(line: &str) -> String {
    match line.split_once('=') {
        Some((_, value)) => value.to_string(),
        None => line.to_string(),
    }
}
