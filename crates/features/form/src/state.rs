//! The form's single state object.

use crate::dialog::Dialog;
use crate::feedback::Feedback;
use regform_domain::{FieldId, FormValues, PasswordField};
use regform_validation::{Requirements, StrengthReport};

/// Whether a password field shows its characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Masked,
    Revealed,
}

impl Visibility {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Masked => Self::Revealed,
            Self::Revealed => Self::Masked,
        }
    }

    /// Label of the toggle control: it names the action, not the state.
    #[must_use]
    pub const fn toggle_label(self) -> &'static str {
        match self {
            Self::Masked => "SHOW",
            Self::Revealed => "HIDE",
        }
    }

    /// HTML input type matching this visibility.
    #[must_use]
    pub const fn input_type(self) -> &'static str {
        match self {
            Self::Masked => "password",
            Self::Revealed => "text",
        }
    }
}

/// Submission state machine: `Idle -> Validating -> {Succeeded, Rejected}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Validating,
    Succeeded,
    Rejected,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub(crate) values: FormValues,
    pub(crate) feedback: Feedback,
    pub(crate) strength: Option<StrengthReport>,
    pub(crate) requirements: Requirements,
    pub(crate) password_visibility: Visibility,
    pub(crate) confirm_visibility: Visibility,
    pub(crate) dialog: Dialog,
    pub(crate) phase: SubmissionPhase,
    pub(crate) focus: Option<FieldId>,
}

impl FormState {
    #[must_use]
    pub const fn values(&self) -> &FormValues {
        &self.values
    }

    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    #[must_use]
    pub const fn strength(&self) -> Option<&StrengthReport> {
        self.strength.as_ref()
    }

    #[must_use]
    pub const fn requirements(&self) -> Requirements {
        self.requirements
    }

    #[must_use]
    pub const fn visibility(&self, field: PasswordField) -> Visibility {
        match field {
            PasswordField::Password => self.password_visibility,
            PasswordField::ConfirmPassword => self.confirm_visibility,
        }
    }

    pub(crate) fn visibility_mut(&mut self, field: PasswordField) -> &mut Visibility {
        match field {
            PasswordField::Password => &mut self.password_visibility,
            PasswordField::ConfirmPassword => &mut self.confirm_visibility,
        }
    }

    #[must_use]
    pub const fn dialog(&self) -> &Dialog {
        &self.dialog
    }

    #[must_use]
    pub const fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    /// Field that should receive focus after the last dispatch, if any.
    #[must_use]
    pub const fn focus(&self) -> Option<FieldId> {
        self.focus
    }
}
