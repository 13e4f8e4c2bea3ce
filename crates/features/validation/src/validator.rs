//! # Field Validators
//!
//! One pure predicate per field. Text fields are checked on their trimmed value,
//! except the two password fields which are checked raw. Each validator reports the
//! first failing reason: emptiness is checked before the field's shape.

use crate::error::ValidationResult;
use crate::rules::{self, EMAIL_RE, FULL_NAME_RE, PHONE_RE};
use regform_domain::{FailureReason, FieldId, FormValues, Gender};

/// Full name: letters and whitespace only, at least two characters.
pub fn validate_full_name(value: &str) -> ValidationResult {
    let value = value.trim();

    if value.is_empty() {
        return ValidationResult::fail(FieldId::FullName, FailureReason::Empty);
    }

    if !FULL_NAME_RE.is_match(value) {
        return ValidationResult::fail(FieldId::FullName, FailureReason::Invalid);
    }

    ValidationResult::Valid
}

/// Email: conventional `local@domain.tld` shape with a TLD of two or more letters.
pub fn validate_email(value: &str) -> ValidationResult {
    let value = value.trim();

    if value.is_empty() {
        return ValidationResult::fail(FieldId::Email, FailureReason::Empty);
    }

    if !EMAIL_RE.is_match(value) {
        return ValidationResult::fail(FieldId::Email, FailureReason::Invalid);
    }

    ValidationResult::Valid
}

/// Password: minimum length, at least one digit and one special character.
pub fn validate_password(value: &str) -> ValidationResult {
    if value.is_empty() {
        return ValidationResult::fail(FieldId::Password, FailureReason::Empty);
    }

    let strong_enough =
        rules::has_min_length(value) && rules::has_digit(value) && rules::has_special(value);

    if !strong_enough {
        return ValidationResult::fail(FieldId::Password, FailureReason::Weak);
    }

    ValidationResult::Valid
}

/// Confirmation: must equal the current password exactly.
pub fn validate_confirm_password(value: &str, password: &str) -> ValidationResult {
    if value.is_empty() {
        return ValidationResult::fail(FieldId::ConfirmPassword, FailureReason::Empty);
    }

    if value != password {
        return ValidationResult::fail(FieldId::ConfirmPassword, FailureReason::Mismatch);
    }

    ValidationResult::Valid
}

/// Phone: exactly ten ASCII digits.
pub fn validate_phone(value: &str) -> ValidationResult {
    let value = value.trim();

    if value.is_empty() {
        return ValidationResult::fail(FieldId::Phone, FailureReason::Empty);
    }

    if !PHONE_RE.is_match(value) {
        return ValidationResult::fail(FieldId::Phone, FailureReason::Invalid);
    }

    ValidationResult::Valid
}

pub const fn validate_gender(selected: Option<Gender>) -> ValidationResult {
    match selected {
        Some(_) => ValidationResult::Valid,
        None => ValidationResult::fail(FieldId::Gender, FailureReason::Empty),
    }
}

pub const fn validate_terms(accepted: bool) -> ValidationResult {
    if accepted {
        ValidationResult::Valid
    } else {
        ValidationResult::fail(FieldId::Terms, FailureReason::Unchecked)
    }
}

/// Runs the validator registered for `field` against the current form values.
pub fn validate_field(field: FieldId, values: &FormValues) -> ValidationResult {
    match field {
        FieldId::FullName => validate_full_name(&values.full_name),
        FieldId::Email => validate_email(&values.email),
        FieldId::Password => validate_password(&values.password),
        FieldId::ConfirmPassword => {
            validate_confirm_password(&values.confirm_password, &values.password)
        },
        FieldId::Phone => validate_phone(&values.phone),
        FieldId::Gender => validate_gender(values.gender),
        FieldId::Terms => validate_terms(values.terms),
    }
}

/// Validates every field in document order without short-circuiting.
pub fn validate_all(values: &FormValues) -> [(FieldId, ValidationResult); 7] {
    FieldId::ALL.map(|field| (field, validate_field(field, values)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(result: ValidationResult) -> Option<FailureReason> {
        result.violation().map(|v| v.reason)
    }

    #[test]
    fn full_name_rules() {
        assert!(validate_full_name("Jane Doe").is_valid());
        assert!(validate_full_name("  Jo  ").is_valid());
        assert_eq!(reason(validate_full_name("   ")), Some(FailureReason::Empty));
        assert_eq!(reason(validate_full_name("J")), Some(FailureReason::Invalid));
        assert_eq!(reason(validate_full_name("Jane D0e")), Some(FailureReason::Invalid));
        assert_eq!(reason(validate_full_name("O'Brien")), Some(FailureReason::Invalid));
    }

    #[test]
    fn email_rules() {
        assert!(validate_email("jane@example.com").is_valid());
        assert!(validate_email(" JANE.DOE-1@Mail.Example.ORG ").is_valid());
        assert_eq!(reason(validate_email("")), Some(FailureReason::Empty));
        assert_eq!(reason(validate_email("jane@example")), Some(FailureReason::Invalid));
        assert_eq!(reason(validate_email("jane@example.c")), Some(FailureReason::Invalid));
        assert_eq!(reason(validate_email("jane@example.c0m")), Some(FailureReason::Invalid));
        assert_eq!(reason(validate_email("jane example.com")), Some(FailureReason::Invalid));
        assert_eq!(reason(validate_email("jane+tag@example.com")), Some(FailureReason::Invalid));
    }

    #[test]
    fn password_rules() {
        assert!(validate_password("abc123!@").is_valid());
        assert_eq!(reason(validate_password("abc12345")), Some(FailureReason::Weak));
        assert_eq!(reason(validate_password("abcdefg!")), Some(FailureReason::Weak));
        assert_eq!(reason(validate_password("ab1!")), Some(FailureReason::Weak));
        assert_eq!(reason(validate_password("")), Some(FailureReason::Empty));
    }

    #[test]
    fn password_is_not_trimmed() {
        assert_eq!(reason(validate_password(" ")), Some(FailureReason::Weak));
        assert!(validate_password(" ab1!  x").is_valid());
    }

    #[test]
    fn confirm_password_rules() {
        assert!(validate_confirm_password("abc123!@", "abc123!@").is_valid());
        assert_eq!(
            reason(validate_confirm_password("abc123!", "abc123!@")),
            Some(FailureReason::Mismatch)
        );
        assert_eq!(
            reason(validate_confirm_password("abc123!@ ", "abc123!@")),
            Some(FailureReason::Mismatch)
        );
        assert_eq!(reason(validate_confirm_password("", "abc123!@")), Some(FailureReason::Empty));
    }

    #[test]
    fn phone_rules() {
        assert!(validate_phone("1234567890").is_valid());
        assert!(validate_phone(" 1234567890 ").is_valid());
        assert_eq!(reason(validate_phone(" ")), Some(FailureReason::Empty));
        assert_eq!(reason(validate_phone("123456789")), Some(FailureReason::Invalid));
        assert_eq!(reason(validate_phone("12345678901")), Some(FailureReason::Invalid));
        assert_eq!(reason(validate_phone("123-456-78")), Some(FailureReason::Invalid));
    }

    #[test]
    fn choice_rules() {
        assert!(validate_gender(Some(Gender::Other)).is_valid());
        assert_eq!(reason(validate_gender(None)), Some(FailureReason::Empty));
        assert!(validate_terms(true).is_valid());
        assert_eq!(reason(validate_terms(false)), Some(FailureReason::Unchecked));
    }

    #[test]
    fn validate_all_reports_every_field_in_order() {
        let results = validate_all(&FormValues::default());

        let fields: Vec<FieldId> = results.iter().map(|(field, _)| *field).collect();
        assert_eq!(fields, FieldId::ALL.to_vec());
        assert!(results.iter().all(|(_, result)| !result.is_valid()));
        assert!(
            results
                .iter()
                .all(|(field, result)| result.violation().is_some_and(|v| v.field == *field))
        );
    }

    #[test]
    fn violation_displays_rule_message() {
        let result = validate_terms(false);
        let violation = result.into_result().expect_err("terms unchecked");

        assert_eq!(violation.to_string(), "You must agree to the Terms & Conditions");
        assert_eq!(result.message(), violation.message());
        assert_eq!(ValidationResult::Valid.message(), "");
    }
}
