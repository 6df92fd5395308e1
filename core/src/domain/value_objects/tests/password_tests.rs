//! Unit tests for the Password value object

use acct_shared::HashingConfig;
use chrono::{Duration, TimeZone, Utc};

use crate::domain::value_objects::{
    Password, GENERATED_PASSWORD_LENGTH, MAX_PASSWORD_BYTES, MAX_PASSWORD_LENGTH,
    MIN_PASSWORD_LENGTH,
};
use crate::errors::PasswordError;

fn create(plaintext: &str) -> Result<Password, PasswordError> {
    Password::create_with_config(plaintext, &HashingConfig::fast())
}

#[test]
fn test_rejects_missing_password() {
    assert_eq!(Password::try_create(None), Err(PasswordError::Blank));
}

#[test]
fn test_rejects_empty_password() {
    assert_eq!(create(""), Err(PasswordError::Blank));
}

#[test]
fn test_rejects_whitespace_password() {
    assert_eq!(create(" "), Err(PasswordError::Blank));
    assert_eq!(create("         \t"), Err(PasswordError::Blank));
}

#[test]
fn test_rejects_short_password() {
    assert_eq!(
        create("1234567"),
        Err(PasswordError::TooShort {
            min: MIN_PASSWORD_LENGTH,
            actual: 7
        })
    );
}

#[test]
fn test_rejects_long_password() {
    let plaintext = "a".repeat(49);
    assert_eq!(
        create(&plaintext),
        Err(PasswordError::TooLong {
            max: MAX_PASSWORD_LENGTH,
            actual: 49
        })
    );
}

#[test]
fn test_accepts_length_bounds() {
    let shortest = "a".repeat(MIN_PASSWORD_LENGTH);
    let longest = "b".repeat(MAX_PASSWORD_LENGTH);

    let password = create(&shortest).unwrap();
    assert!(Password::matches(password.hash(), &shortest));

    let password = create(&longest).unwrap();
    assert!(Password::matches(password.hash(), &longest));
}

#[test]
fn test_length_counts_characters_not_bytes() {
    // 8 characters, 16 bytes
    let plaintext = "ééééééé1";
    assert!(create(plaintext).is_ok());
}

#[test]
fn test_rejects_password_beyond_hashable_bytes() {
    // 48 characters, 108 bytes; only the trailing letters differ
    let first = "😀".repeat(20) + &"A".repeat(28);
    let second = "😀".repeat(20) + &"B".repeat(28);
    assert_eq!(first.chars().count(), MAX_PASSWORD_LENGTH);

    assert_eq!(
        create(&first),
        Err(PasswordError::TooManyBytes {
            max_bytes: MAX_PASSWORD_BYTES,
            actual_bytes: 108
        })
    );
    assert!(create(&second).is_err());
}

#[test]
fn test_accepts_password_at_hashable_byte_limit() {
    // 18 characters, exactly 72 bytes
    let plaintext = "😀".repeat(18);
    assert_eq!(plaintext.len(), MAX_PASSWORD_BYTES);

    let password = create(&plaintext).unwrap();
    assert!(Password::matches(password.hash(), &plaintext));
    assert!(!Password::matches(password.hash(), &"😀".repeat(17)));
}

#[test]
fn test_hashes_password() {
    let password = create("password").unwrap();

    assert_ne!(password.hash(), "password");
    assert!(Password::matches(password.hash(), "password"));
    assert!(!Password::matches(password.hash(), "Password"));
}

#[test]
fn test_hashes_are_salted() {
    let first = create("password").unwrap();
    let second = create("password").unwrap();
    assert_ne!(first.hash(), second.hash());
}

#[test]
fn test_default_create_uses_default_cost() {
    let password = Password::create("password").unwrap();
    assert!(password.hash().starts_with("$2b$12$"));
    assert!(Password::matches(password.hash(), "password"));
}

#[test]
fn test_matches_tolerates_malformed_hash() {
    assert!(!Password::matches("not-a-bcrypt-hash", "password"));
    assert!(!Password::matches("", "password"));
}

#[test]
fn test_new_password_has_no_expiration_or_rotation() {
    let password = create("password").unwrap();
    assert!(password.expires_at_utc().is_none());
    assert!(!password.must_change());
}

#[test]
fn test_display_returns_hash() {
    let password = create("password").unwrap();
    assert_eq!(password.to_string(), password.hash());
}

#[test]
fn test_conversion_to_string_returns_hash() {
    let password = create("password").unwrap();
    let hash = password.hash().to_string();

    let converted: String = password.into();
    assert_eq!(converted, hash);
}

#[test]
fn test_generate_secret_shape() {
    for _ in 0..50 {
        let secret = Password::generate_secret();
        assert_eq!(secret.chars().count(), GENERATED_PASSWORD_LENGTH);
        assert!(secret.chars().any(|c| c.is_ascii_uppercase()));
        assert!(secret.chars().any(|c| c.is_ascii_lowercase()));
        assert!(secret.chars().any(|c| c.is_ascii_digit()));
        assert!(secret.chars().any(|c| !c.is_ascii_alphanumeric()));
    }
}

#[test]
fn test_generate_secret_is_random() {
    let first = Password::generate_secret();
    let second = Password::generate_secret();
    assert_ne!(first, second);
}

#[test]
fn test_generate_hashes_the_secret() {
    let generated = Password::generate_with_config(&HashingConfig::fast()).unwrap();

    assert_eq!(generated.secret().len(), GENERATED_PASSWORD_LENGTH);
    assert!(Password::matches(generated.password().hash(), generated.secret()));
    assert!(!format!("{:?}", generated).contains(generated.secret()));

    let (password, secret) = generated.into_parts();
    assert_ne!(password.hash(), secret);
}

#[test]
fn test_mark_password_as_expired() {
    let now = Utc.with_ymd_and_hms(2024, 10, 29, 22, 0, 0).unwrap();
    let mut password = create("password").unwrap();

    password.set_expiration(Some(now - Duration::days(1)));

    assert!(password.expires_at_utc().is_some());
    assert!(password.expires_at_utc().unwrap() < now);
}

#[test]
fn test_expired_password_fails_validation() {
    let now = Utc.with_ymd_and_hms(2024, 10, 29, 22, 0, 0).unwrap();
    let expired_at = now - Duration::days(1);
    let mut password = create("password").unwrap();
    password.set_expiration(Some(expired_at));

    assert_eq!(
        password.validate_expiration(now),
        Err(PasswordError::Expired { expired_at })
    );
}

#[test]
fn test_future_or_cleared_expiration_passes_validation() {
    let now = Utc.with_ymd_and_hms(2024, 10, 29, 22, 0, 0).unwrap();
    let mut password = create("password").unwrap();

    assert!(password.validate_expiration(now).is_ok());

    password.set_expiration(Some(now + Duration::days(30)));
    assert!(password.validate_expiration(now).is_ok());

    // Expiring exactly now is not yet expired
    password.set_expiration(Some(now));
    assert!(password.validate_expiration(now).is_ok());

    password.set_expiration(None);
    assert!(password.validate_expiration(now + Duration::days(365)).is_ok());
}

#[test]
fn test_mark_password_as_must_change() {
    let mut password = create("password").unwrap();
    password.set_must_change();
    assert!(password.must_change());
}

#[test]
fn test_must_change_password_fails_validation() {
    let mut password = create("password").unwrap();
    assert!(password.validate_must_change().is_ok());

    password.set_must_change();
    assert_eq!(password.validate_must_change(), Err(PasswordError::MustChange));
}

#[test]
fn test_setters_chain() {
    let now = Utc.with_ymd_and_hms(2024, 10, 29, 22, 0, 0).unwrap();
    let mut password = create("password").unwrap();

    password.set_expiration(Some(now)).set_must_change();

    assert_eq!(password.expires_at_utc(), Some(now));
    assert!(password.must_change());
}

#[test]
fn test_validate_checks_expiration_first() {
    let now = Utc.with_ymd_and_hms(2024, 10, 29, 22, 0, 0).unwrap();
    let mut password = create("password").unwrap();
    assert!(password.validate(now).is_ok());

    password.set_must_change();
    assert_eq!(password.validate(now), Err(PasswordError::MustChange));

    password.set_expiration(Some(now - Duration::minutes(1)));
    assert!(matches!(password.validate(now), Err(PasswordError::Expired { .. })));
}

#[test]
fn test_serialization_shape() {
    let now = Utc.with_ymd_and_hms(2024, 10, 29, 22, 0, 0).unwrap();
    let mut password = create("password").unwrap();
    password.set_expiration(Some(now)).set_must_change();

    let json = serde_json::to_value(&password).unwrap();
    assert_eq!(json["hash"], password.hash());
    assert_eq!(json["must_change"], true);
    assert!(json["expires_at_utc"].is_string());

    let restored: Password = serde_json::from_value(json).unwrap();
    assert_eq!(restored, password);
}
