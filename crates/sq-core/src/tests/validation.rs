use crate::Captcha;
use crate::validation::{
    EMAIL_REGEX, coerce_age, is_valid_email, validate_credentials, validate_password,
    validate_profile_age,
};

#[test]
fn test_email_pattern() {
    assert!(is_valid_email("kid@school.org"));
    assert!(is_valid_email("a.b+c@sub.domain.io"));

    assert!(!is_valid_email(""));
    assert!(!is_valid_email("kid@school"));
    assert!(!is_valid_email("kid school@x.org"));
    assert!(!is_valid_email("kid@@school.org"));
    assert!(!is_valid_email("@school.org"));
}

#[test]
fn test_email_pattern_compiles_once() {
    assert!(EMAIL_REGEX.as_ref().is_ok());
    assert!(is_valid_email("kid@school.org"));
    assert!(is_valid_email("kid@school.org"));
}

#[test]
fn test_password_minimum_length() {
    assert!(validate_password("12345").is_err());
    assert!(validate_password("123456").is_ok());
}

#[test]
fn test_credentials_require_both_fields_first() {
    let err = validate_credentials("", "secret1").unwrap_err();
    assert_eq!(err.user_message(), "Please fill in all fields");

    let err = validate_credentials("kid@school.org", "").unwrap_err();
    assert_eq!(err.user_message(), "Please fill in all fields");

    let err = validate_credentials("kid", "secret1").unwrap_err();
    assert_eq!(err.user_message(), "Please enter a valid email address");

    let err = validate_credentials("kid@school.org", "abc").unwrap_err();
    assert_eq!(
        err.user_message(),
        "Password must be at least 6 characters long"
    );

    assert!(validate_credentials("kid@school.org", "secret1").is_ok());
}

#[test]
fn test_coerce_age_reads_leading_integer() {
    assert_eq!(coerce_age("7"), Some(7));
    assert_eq!(coerce_age(" 10 "), Some(10));
    assert_eq!(coerce_age("9 years"), Some(9));
    assert_eq!(coerce_age("-3"), Some(-3));
    assert_eq!(coerce_age(""), None);
    assert_eq!(coerce_age("seven"), None);
}

#[test]
fn test_coerce_age_saturates_instead_of_dropping_large_values() {
    assert_eq!(coerce_age("99999999999"), Some(i32::MAX));
    assert_eq!(coerce_age("-99999999999"), Some(-i32::MAX));

    for oversized in ["99999999999", "-99999999999"] {
        let age = coerce_age(oversized).unwrap();
        assert!(validate_profile_age(age).is_err());
    }
}

#[test]
fn test_profile_age_boundaries_are_inclusive() {
    assert!(validate_profile_age(4).is_err());
    assert!(validate_profile_age(5).is_ok());
    assert!(validate_profile_age(12).is_ok());
    assert!(validate_profile_age(13).is_err());
}

#[test]
fn test_captcha_accepts_only_exact_answer() {
    let captcha = Captcha::standard();

    assert_eq!(captcha.question(), "What is 5 + 3?");
    assert!(captcha.check("8").is_ok());

    for wrong in ["", "9", " 8", "8 ", "eight", "08"] {
        let err = captcha.check(wrong).unwrap_err();
        assert_eq!(
            err.user_message(),
            "Incorrect answer. Please try again. What is 5 + 3?"
        );
    }
}
