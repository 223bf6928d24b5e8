//! Local input validation for the user form. Runs synchronously before any
//! network call; a rejected input never reaches the API.

use crate::{app_lib::AppError, features::users::types::UserRecord};

/// Trims both fields and builds a `UserRecord`, rejecting empty fields and
/// malformed email addresses with user-facing messages.
pub fn validate_new_user(name: &str, email: &str) -> Result<UserRecord, AppError> {
    let name = name.trim();
    let email = email.trim();

    if name.is_empty() || email.is_empty() {
        return Err(AppError::Validation(
            "Please fill in all fields".to_string(),
        ));
    }

    if !is_valid_email(email) {
        return Err(AppError::Validation(
            "Please enter a valid email address".to_string(),
        ));
    }

    Ok(UserRecord {
        name: name.to_string(),
        email: email.to_string(),
    })
}

/// Checks the `local@domain.tld` shape: no whitespace, exactly one `@` with a
/// non-empty local part, and a dot inside the domain with characters on both
/// sides.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // '.' is ASCII, so byte offsets are safe for the boundary checks.
    domain
        .char_indices()
        .any(|(index, c)| c == '.' && index > 0 && index + 1 < domain.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("ada@example.com"));
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(is_valid_email("odd..but@fine..io"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("ada"));
        assert!(!is_valid_email("ada@example"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ada@.com"));
        assert!(!is_valid_email("ada@com."));
        assert!(!is_valid_email("ada@@example.com"));
        assert!(!is_valid_email("ada smith@example.com"));
        assert!(!is_valid_email("ada@exam ple.com"));
    }

    #[test]
    fn trims_fields_before_validating() {
        let user = validate_new_user("  Ada  ", " ada@example.com ").expect("should validate");
        assert_eq!(user.name, "Ada");
        assert_eq!(user.email, "ada@example.com");
    }

    #[test]
    fn rejects_missing_fields() {
        assert!(matches!(
            validate_new_user("   ", "ada@example.com"),
            Err(AppError::Validation(message)) if message == "Please fill in all fields"
        ));
        assert!(matches!(
            validate_new_user("Ada", "   "),
            Err(AppError::Validation(message)) if message == "Please fill in all fields"
        ));
    }

    #[test]
    fn rejects_invalid_email_with_its_own_message() {
        assert!(matches!(
            validate_new_user("Ada", "not-an-email"),
            Err(AppError::Validation(message)) if message == "Please enter a valid email address"
        ));
    }
}
