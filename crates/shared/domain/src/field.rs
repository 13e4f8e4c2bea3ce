//! Field registry: the seven form controls and the reasons they can fail.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, IntoStaticStr};

/// Identifies one form control.
///
/// Variants are declared in document order, so `Ord` and [`FieldId::ALL`] both
/// yield the order in which the controls appear on the form.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum FieldId {
    FullName,
    Email,
    Password,
    ConfirmPassword,
    Phone,
    Gender,
    Terms,
}

impl FieldId {
    /// All fields in document order.
    pub const ALL: [Self; 7] = [
        Self::FullName,
        Self::Email,
        Self::Password,
        Self::ConfirmPassword,
        Self::Phone,
        Self::Gender,
        Self::Terms,
    ];

    /// Id of the element that displays this field's error text (e.g. `emailError`).
    #[must_use]
    pub fn error_element_id(self) -> String {
        format!("{self}Error")
    }

    /// Whether the field is a free-text input (as opposed to a choice or a checkbox).
    #[must_use]
    pub const fn is_text(self) -> bool {
        !matches!(self, Self::Gender | Self::Terms)
    }
}

/// The mutually exclusive gender options.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Named reason a field failed validation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display, IntoStaticStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum FailureReason {
    Empty,
    Invalid,
    Weak,
    Mismatch,
    Unchecked,
}

/// The two password inputs that carry a show/hide toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display)]
#[strum(serialize_all = "camelCase")]
pub enum PasswordField {
    Password,
    ConfirmPassword,
}

impl From<PasswordField> for FieldId {
    fn from(field: PasswordField) -> Self {
        match field {
            PasswordField::Password => Self::Password,
            PasswordField::ConfirmPassword => Self::ConfirmPassword,
        }
    }
}
