//! Per-field visual feedback derived from validation results.

use regform_domain::FieldId;
use regform_validation::{ValidationResult, Violation};

/// Visual state of one field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldStatus {
    /// Neutral: no marker, no error text.
    #[default]
    Untouched,
    Valid,
    Invalid(Violation),
}

impl FieldStatus {
    pub const fn from_result(result: ValidationResult) -> Self {
        match result {
            ValidationResult::Valid => Self::Valid,
            ValidationResult::Invalid(violation) => Self::Invalid(violation),
        }
    }

    /// Error text for the field's error element; empty unless invalid.
    #[must_use]
    pub const fn error_text(&self) -> &'static str {
        match self {
            Self::Invalid(violation) => violation.message(),
            Self::Untouched | Self::Valid => "",
        }
    }

    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }
}

/// Statuses of all seven fields, indexed in document order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Feedback {
    statuses: [FieldStatus; FieldId::ALL.len()],
}

impl Feedback {
    /// Replaces the field's status with the one implied by `result`.
    ///
    /// Applying the same result again leaves the status unchanged. Returns whether the
    /// field passed.
    pub fn apply(&mut self, field: FieldId, result: ValidationResult) -> bool {
        self.statuses[field as usize] = FieldStatus::from_result(result);
        result.is_valid()
    }

    /// Returns the field to neutral.
    pub fn clear(&mut self, field: FieldId) {
        self.statuses[field as usize] = FieldStatus::Untouched;
    }

    #[must_use]
    pub const fn status(&self, field: FieldId) -> FieldStatus {
        self.statuses[field as usize]
    }

    /// The first invalid field in document order.
    #[must_use]
    pub fn first_invalid(&self) -> Option<FieldId> {
        FieldId::ALL.into_iter().find(|field| self.status(*field).is_invalid())
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldId, FieldStatus)> + '_ {
        FieldId::ALL.into_iter().zip(self.statuses.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regform_validation::validator::{validate_email, validate_phone};

    #[test]
    fn failure_marks_invalid_and_shows_message() {
        let mut feedback = Feedback::default();
        let passed = feedback.apply(FieldId::Email, validate_email("nope"));

        assert!(!passed);
        let status = feedback.status(FieldId::Email);
        assert!(status.is_invalid());
        assert_eq!(status.error_text(), "Please enter a valid email address");
    }

    #[test]
    fn success_replaces_invalid_marking() {
        let mut feedback = Feedback::default();
        feedback.apply(FieldId::Phone, validate_phone("12"));
        let passed = feedback.apply(FieldId::Phone, validate_phone("1234567890"));

        assert!(passed);
        assert_eq!(feedback.status(FieldId::Phone), FieldStatus::Valid);
        assert_eq!(feedback.status(FieldId::Phone).error_text(), "");
    }

    #[test]
    fn applying_twice_is_idempotent() {
        let mut once = Feedback::default();
        once.apply(FieldId::Email, validate_email(""));

        let mut twice = once;
        twice.apply(FieldId::Email, validate_email(""));

        assert_eq!(once, twice);
    }

    #[test]
    fn first_invalid_follows_document_order() {
        let mut feedback = Feedback::default();
        feedback.apply(FieldId::Phone, validate_phone(""));
        feedback.apply(FieldId::Email, validate_email(""));
        assert_eq!(feedback.first_invalid(), Some(FieldId::Email));

        feedback.clear(FieldId::Email);
        assert_eq!(feedback.status(FieldId::Email), FieldStatus::Untouched);
        assert_eq!(feedback.first_invalid(), Some(FieldId::Phone));
    }
}
