use regform_domain::{FieldId, FormSnapshot, Gender, PasswordField};

/// A key press relevant to the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Escape,
    Character(char),
    Other,
}

/// Everything a user can do to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// A text field's value changed. Ignored for gender and terms.
    Input { field: FieldId, value: String },
    /// A text field lost focus.
    Blur(FieldId),
    /// A key went down in a text field, before the value changes.
    KeyDown { field: FieldId, key: Key },
    SelectGender(Gender),
    SetTerms(bool),
    /// Show/hide toggle of a password field was clicked.
    ToggleVisibility(PasswordField),
    Submit,
    /// Close control inside the confirmation dialog.
    CloseDialog,
    /// Click on the dialog backdrop, outside its body.
    BackdropClick,
    /// Key pressed while the dialog is shown.
    DialogKey(Key),
}

/// What the front end should do after a dispatch, beyond re-rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// State changed; re-render.
    Updated,
    /// Nothing changed.
    Ignored,
    /// The triggering key event must not reach the input.
    DefaultPrevented,
    /// Every field passed; the dialog is now shown.
    Submitted(FormSnapshot),
    /// At least one field failed; `first_invalid` should receive focus.
    Rejected { first_invalid: FieldId },
    /// The dialog closed and the form was reset.
    DialogClosed,
}

impl Outcome {
    /// Whether the front end must cancel the native default action of the triggering event.
    ///
    /// A key that closes the dialog is consumed: its default (e.g. activating a focused
    /// submit button) would otherwise act on the freshly reset form.
    #[must_use]
    pub const fn suppresses_default(&self) -> bool {
        matches!(self, Self::DefaultPrevented | Self::DialogClosed)
    }
}
