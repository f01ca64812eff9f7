//! Local form validation. Anything rejected here never reaches the network,
//! which also means it never counts as a login attempt against the rate
//! limiter.

use super::otp::OTP_LEN;

/// Minimum password length enforced by the client for early UX feedback.
pub const MIN_PASSWORD_LENGTH: usize = 6;
/// Minimum display name length for signup.
pub const MIN_NAME_LENGTH: usize = 2;

/// Normalizes emails for stable rate-limiter keys and API requests.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Light syntactic email check: one `@` with a non-empty local part and a
/// dotted domain. The server performs the authoritative validation.
pub fn validate_email(email: &str) -> Result<(), String> {
    let email = email.trim();
    let invalid = || "Invalid email address".to_string();

    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.is_empty() || email.contains(char::is_whitespace) {
        return Err(invalid());
    }
    let (host, tld) = domain.rsplit_once('.').ok_or_else(invalid)?;
    if host.is_empty() || tld.is_empty() {
        return Err(invalid());
    }

    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), String> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters"
        ));
    }
    Ok(())
}

pub fn validate_name(name: &str) -> Result<(), String> {
    if name.trim().len() < MIN_NAME_LENGTH {
        return Err("Name is required".to_string());
    }
    Ok(())
}

/// A one-time code must be exactly six decimal digits.
pub fn validate_otp(code: &str) -> Result<(), String> {
    if code.len() != OTP_LEN || !code.chars().all(|digit| digit.is_ascii_digit()) {
        return Err(format!("Please enter the {OTP_LEN}-digit code"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_email_trims_and_lowercases() {
        assert_eq!(normalize_email("  User@X.Com "), "user@x.com");
    }

    #[test]
    fn validate_email_accepts_plausible_addresses() {
        assert!(validate_email("a@x.com").is_ok());
        assert!(validate_email("first.last@sub.domain.org").is_ok());
        assert!(validate_email("  padded@x.com  ").is_ok());
    }

    #[test]
    fn validate_email_rejects_malformed_addresses() {
        assert!(validate_email("").is_err());
        assert!(validate_email("plainaddress").is_err());
        assert!(validate_email("@x.com").is_err());
        assert!(validate_email("a@").is_err());
        assert!(validate_email("a@nodot").is_err());
        assert!(validate_email("a@x.").is_err());
        assert!(validate_email("a b@x.com").is_err());
    }

    #[test]
    fn validate_password_enforces_minimum_length() {
        assert!(validate_password("12345").is_err());
        assert!(validate_password("123456").is_ok());
    }

    #[test]
    fn validate_name_requires_two_characters() {
        assert!(validate_name(" ").is_err());
        assert!(validate_name("J").is_err());
        assert!(validate_name("Jo").is_ok());
    }

    #[test]
    fn validate_otp_requires_exactly_six_digits() {
        assert!(validate_otp("123456").is_ok());
        assert!(validate_otp("1234").is_err());
        assert!(validate_otp("1234567").is_err());
        assert!(validate_otp("12345a").is_err());
    }
}
