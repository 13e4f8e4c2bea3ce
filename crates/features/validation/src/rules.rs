//! Static rule set: patterns and user-facing messages.

use regform_domain::{FailureReason, FieldId};
use regex::Regex;
use std::sync::LazyLock;

/// Punctuation accepted as a "special character" in passwords.
pub const SPECIAL_CHARACTERS: &str = r#"!@#$%^&*(),.?":{}|<>"#;

/// Minimum password length, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Required number of digits in a phone number.
pub const PHONE_DIGITS: usize = 10;

pub(crate) static FULL_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s]{2,}$").expect("valid regex"));

pub(crate) static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid regex")
});

// ASCII only: `\d` would accept any Unicode decimal digit.
pub(crate) static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("valid regex"));

pub(crate) static MIN_LENGTH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r".{8,}").expect("valid regex"));

pub(crate) static DIGIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]").expect("valid regex"));

pub(crate) static LOWERCASE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z]").expect("valid regex"));

pub(crate) static UPPERCASE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z]").expect("valid regex"));

pub(crate) static SPECIAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("[{}]", regex::escape(SPECIAL_CHARACTERS))).expect("valid regex")
});

/// Whether the password satisfies the minimum length.
pub fn has_min_length(password: &str) -> bool {
    MIN_LENGTH_RE.is_match(password)
}

/// Whether the password contains an ASCII digit.
pub fn has_digit(password: &str) -> bool {
    DIGIT_RE.is_match(password)
}

/// Whether the password contains one of [`SPECIAL_CHARACTERS`].
pub fn has_special(password: &str) -> bool {
    SPECIAL_RE.is_match(password)
}

pub(crate) fn has_lowercase(password: &str) -> bool {
    LOWERCASE_RE.is_match(password)
}

pub(crate) fn has_uppercase(password: &str) -> bool {
    UPPERCASE_RE.is_match(password)
}

/// Message displayed next to `field` when it fails with `reason`.
///
/// Pairs that no validator produces fall back to a generic message.
pub const fn message(field: FieldId, reason: FailureReason) -> &'static str {
    use FailureReason::{Empty, Invalid, Mismatch, Unchecked, Weak};
    use FieldId::{ConfirmPassword, Email, FullName, Gender, Password, Phone, Terms};

    match (field, reason) {
        (FullName, Empty) => "Full name is required",
        (FullName, Invalid) => "Please enter a valid name (letters only)",
        (Email, Empty) => "Email address is required",
        (Email, Invalid) => "Please enter a valid email address",
        (Password, Empty) => "Password is required",
        (Password, Weak) => {
            "Password must be at least 8 characters with 1 number and 1 special character"
        },
        (ConfirmPassword, Empty) => "Please confirm your password",
        (ConfirmPassword, Mismatch) => "Passwords do not match",
        (Phone, Empty) => "Phone number is required",
        (Phone, Invalid) => "Phone number must be exactly 10 digits",
        (Gender, Empty) => "Please select your gender",
        (Terms, Unchecked) => "You must agree to the Terms & Conditions",
        _ => "This field is invalid",
    }
}
