use crate::rules;
use regform_domain::{FailureReason, FieldId};

/// A field that failed its rule, and why.
///
/// `Display` renders the user-facing message from the rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{}", self.message())]
pub struct Violation {
    pub field: FieldId,
    pub reason: FailureReason,
}

impl Violation {
    #[must_use]
    pub const fn new(field: FieldId, reason: FailureReason) -> Self {
        Self { field, reason }
    }

    /// The message shown next to the field.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        rules::message(self.field, self.reason)
    }
}

/// Outcome of checking one field's current value against its rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationResult {
    Valid,
    Invalid(Violation),
}

impl ValidationResult {
    pub(crate) const fn fail(field: FieldId, reason: FailureReason) -> Self {
        Self::Invalid(Violation::new(field, reason))
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// The violation, if the field failed.
    #[must_use]
    pub const fn violation(&self) -> Option<&Violation> {
        match self {
            Self::Valid => None,
            Self::Invalid(violation) => Some(violation),
        }
    }

    /// The error text to display; empty when the field passed.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Valid => "",
            Self::Invalid(violation) => violation.message(),
        }
    }

    /// Converts into a `Result`, for callers that want `?`.
    ///
    /// # Errors
    /// Returns the [`Violation`] when the field failed.
    pub const fn into_result(self) -> Result<(), Violation> {
        match self {
            Self::Valid => Ok(()),
            Self::Invalid(violation) => Err(violation),
        }
    }
}
