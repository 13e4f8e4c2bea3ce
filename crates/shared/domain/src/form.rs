use crate::field::{FieldId, Gender};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current raw values of every form control.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct FormValues {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub phone: String,
    pub gender: Option<Gender>,
    pub terms: bool,
}

impl FormValues {
    /// Returns the raw text of a text field, or `None` for gender and terms.
    #[must_use]
    pub fn text(&self, field: FieldId) -> Option<&str> {
        match field {
            FieldId::FullName => Some(&self.full_name),
            FieldId::Email => Some(&self.email),
            FieldId::Password => Some(&self.password),
            FieldId::ConfirmPassword => Some(&self.confirm_password),
            FieldId::Phone => Some(&self.phone),
            FieldId::Gender | FieldId::Terms => None,
        }
    }

    /// Mutable access to a text field's buffer, or `None` for gender and terms.
    pub fn text_mut(&mut self, field: FieldId) -> Option<&mut String> {
        match field {
            FieldId::FullName => Some(&mut self.full_name),
            FieldId::Email => Some(&mut self.email),
            FieldId::Password => Some(&mut self.password),
            FieldId::ConfirmPassword => Some(&mut self.confirm_password),
            FieldId::Phone => Some(&mut self.phone),
            FieldId::Gender | FieldId::Terms => None,
        }
    }
}

/// The validated form values captured at a successful submission.
///
/// Serialized in `camelCase` and stands in for a future network payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSnapshot {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub gender: Gender,
    pub agreed_to_terms: bool,
    pub timestamp: DateTime<Utc>,
}
