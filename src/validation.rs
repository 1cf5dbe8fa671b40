use colored::Colorize;
use validator::ValidateEmail;

/// Checks that an email is a well-formed address on the given no-reply domain
pub fn is_noreply_email(email: &str, domain: &str) -> bool {
    if !email.validate_email() {
        return false;
    }

    match email
        .strip_suffix(domain)
        .and_then(|rest| rest.strip_suffix('@'))
    {
        Some(local) => !local.is_empty() && local.chars().all(is_local_char),
        None => false,
    }
}

/// Warns when a private email is not a no-reply address on the expected domain
pub fn warn_unless_noreply(provider: &str, email: &str, domain: &str) {
    if !is_noreply_email(email, domain) {
        eprintln!(
            "{}",
            format!(
                "warning: {} email should be a no-reply address on {}",
                provider, domain
            )
            .yellow()
        );
    }
}

/// Warns when a public email does not look like a valid address
pub fn warn_unless_well_formed(provider: &str, email: &str) {
    if !email.validate_email() {
        eprintln!(
            "{}",
            format!("warning: {} email does not look like a valid address", provider).yellow()
        );
    }
}

/// Characters permitted in the local part of a no-reply address
fn is_local_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '%' | '+' | '-')
}
