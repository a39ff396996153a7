use super::*;

#[test]
fn validate_register_input_trims_name_and_mail() {
    assert_eq!(
        validate_register_input(" Jan Kowalski ", " jan@gym.pl ", "secret1"),
        Ok(RegisterRequest {
            name: "Jan Kowalski".to_owned(),
            mail: "jan@gym.pl".to_owned(),
            password: "secret1".to_owned(),
        })
    );
}

#[test]
fn validate_register_input_requires_every_field() {
    assert_eq!(validate_register_input("", "jan@gym.pl", "secret1"), Err("Fill in all fields."));
    assert_eq!(validate_register_input("Jan", "  ", "secret1"), Err("Fill in all fields."));
    assert_eq!(validate_register_input("Jan", "jan@gym.pl", ""), Err("Fill in all fields."));
}

#[test]
fn validate_register_input_rejects_mail_without_at() {
    assert_eq!(validate_register_input("Jan", "jan.gym.pl", "secret1"), Err("Enter a valid email address."));
}

#[test]
fn validate_register_input_rejects_short_password() {
    assert_eq!(
        validate_register_input("Jan", "jan@gym.pl", "12345"),
        Err("Password must be at least 6 characters.")
    );
}

#[test]
fn validate_register_input_counts_chars_not_bytes() {
    assert!(validate_register_input("Jan", "jan@gym.pl", "żółćęą").is_ok());
}

#[test]
fn register_error_message_explains_conflict() {
    assert_eq!(register_error_message(&ApiError::Conflict), "An account with this email already exists.");
    assert_eq!(register_error_message(&ApiError::Status(400)), "Registration failed: unexpected status: 400");
}
