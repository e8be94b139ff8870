/// RFC 5321 path limit
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Trim and lower-case an email so lookups and the unique constraint agree.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Shape check for an already-normalized email: `local@domain.tld`.
///
/// Deliverability is the mail transport's problem; this only rejects input
/// that cannot possibly be an address.
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("email cannot be empty".to_string());
    }

    if email.len() > MAX_EMAIL_LENGTH {
        return Err(format!(
            "email must not exceed {} characters",
            MAX_EMAIL_LENGTH
        ));
    }

    if email.chars().any(char::is_whitespace) {
        return Err("email cannot contain whitespace".to_string());
    }

    let Some((local, domain)) = email.split_once('@') else {
        return Err("email must contain '@'".to_string());
    };

    if local.is_empty() || domain.contains('@') {
        return Err("email is not a valid address".to_string());
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|label| label.is_empty()) {
        return Err("email domain is not valid".to_string());
    }

    Ok(())
}
