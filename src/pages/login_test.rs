use super::*;

#[test]
fn validate_login_input_trims_mail_and_keeps_password() {
    assert_eq!(
        validate_login_input("  jan@gym.pl ", " pass "),
        Ok(LoginRequest { mail: "jan@gym.pl".to_owned(), password: " pass ".to_owned() })
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "secret"), Err(MISSING_CREDENTIALS));
    assert_eq!(validate_login_input("jan@gym.pl", ""), Err(MISSING_CREDENTIALS));
}

#[test]
fn login_error_message_hides_details_for_bad_credentials() {
    assert_eq!(login_error_message(&ApiError::Unauthenticated), "Invalid email or password.");
}

#[test]
fn login_error_message_reports_other_failures() {
    assert_eq!(login_error_message(&ApiError::Status(500)), "Login failed: unexpected status: 500");
}
