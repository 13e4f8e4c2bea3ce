use crate::dialog::CloseTrigger;
use crate::error::FormError;
use crate::event::{FormEvent, Key, Outcome};
use crate::state::{FormState, SubmissionPhase};
use crate::view::{self, FormView};
use chrono::{DateTime, Utc};
use regform_domain::{FieldId, FormSnapshot, FormValues, Gender, PasswordField};
use regform_validation::validator::{validate_all, validate_field};
use regform_validation::{Requirements, strength};
use tracing::{debug, info};

/// Source of the submission timestamp.
pub type Clock = fn() -> DateTime<Utc>;

/// Owns the form state and applies every event to it.
///
/// All handlers are synchronous and run to completion; call [`FormController::view`]
/// after each dispatch to obtain the new view.
#[derive(Debug, Clone)]
pub struct FormController {
    state: FormState,
    clock: Clock,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}

impl FormController {
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Utc::now)
    }

    /// Builds a controller whose snapshots are stamped by `clock`.
    #[must_use]
    pub fn with_clock(clock: Clock) -> Self {
        Self { state: FormState::default(), clock }
    }

    #[must_use]
    pub const fn state(&self) -> &FormState {
        &self.state
    }

    #[must_use]
    pub fn view(&self) -> FormView {
        view::render(&self.state)
    }

    /// Applies one event to the form.
    ///
    /// While the confirmation dialog is shown, only dialog events are handled.
    ///
    /// # Errors
    /// Returns [`FormError`] if a successful submission cannot be turned into a snapshot
    /// record. Validation failures are never errors.
    pub fn dispatch(&mut self, event: FormEvent) -> Result<Outcome, FormError> {
        self.state.focus = None;

        if self.state.dialog.is_shown() {
            return Ok(match event {
                FormEvent::CloseDialog => self.close_dialog(CloseTrigger::CloseButton),
                FormEvent::BackdropClick => self.close_dialog(CloseTrigger::Backdrop),
                FormEvent::DialogKey(key) => self.close_dialog(CloseTrigger::Key(key)),
                _ => Outcome::Ignored,
            });
        }

        let outcome = match event {
            FormEvent::Input { field, value } => self.input(field, value),
            FormEvent::Blur(field) => self.blur(field),
            FormEvent::KeyDown { field, key } => self.key_down(field, key),
            FormEvent::SelectGender(gender) => self.select_gender(gender),
            FormEvent::SetTerms(accepted) => self.set_terms(accepted),
            FormEvent::ToggleVisibility(field) => self.toggle_visibility(field),
            FormEvent::Submit => return self.submit(),
            FormEvent::CloseDialog | FormEvent::BackdropClick | FormEvent::DialogKey(_) => {
                Outcome::Ignored
            },
        };

        Ok(outcome)
    }

    fn input(&mut self, field: FieldId, value: String) -> Outcome {
        let value = match field {
            FieldId::Gender | FieldId::Terms => return Outcome::Ignored,
            FieldId::Phone => value.chars().filter(char::is_ascii_digit).collect(),
            _ => value,
        };

        if let Some(buffer) = self.state.values.text_mut(field) {
            *buffer = value;
        }

        match field {
            FieldId::Password => {
                let password = &self.state.values.password;
                self.state.strength = strength::analyze(password);
                self.state.requirements = Requirements::of(password);
                // Strength feedback replaces the password's own verdict while typing.
                self.state.feedback.clear(FieldId::Password);

                if !self.state.values.confirm_password.is_empty() {
                    self.validate(FieldId::ConfirmPassword);
                }
            },
            FieldId::ConfirmPassword => self.validate_if_filled(field, false),
            _ => self.validate_if_filled(field, true),
        }

        Outcome::Updated
    }

    /// Validates `field` if it has content, otherwise returns it to neutral so no stale
    /// verdict outlives the value it was computed for.
    fn validate_if_filled(&mut self, field: FieldId, trim: bool) {
        let filled = self.state.values.text(field).is_some_and(|value| {
            let value = if trim { value.trim() } else { value };
            !value.is_empty()
        });

        if filled {
            self.validate(field);
        } else {
            self.state.feedback.clear(field);
        }
    }

    fn blur(&mut self, field: FieldId) -> Outcome {
        if !field.is_text() {
            return Outcome::Ignored;
        }
        self.validate(field);
        Outcome::Updated
    }

    fn key_down(&self, field: FieldId, key: Key) -> Outcome {
        let leading_space = matches!(field, FieldId::FullName | FieldId::Email)
            && key == Key::Character(' ')
            && self.state.values.text(field).is_some_and(str::is_empty);

        if leading_space { Outcome::DefaultPrevented } else { Outcome::Ignored }
    }

    fn select_gender(&mut self, gender: Gender) -> Outcome {
        self.state.values.gender = Some(gender);
        self.validate(FieldId::Gender);
        Outcome::Updated
    }

    fn set_terms(&mut self, accepted: bool) -> Outcome {
        self.state.values.terms = accepted;
        self.validate(FieldId::Terms);
        Outcome::Updated
    }

    fn toggle_visibility(&mut self, field: PasswordField) -> Outcome {
        let visibility = self.state.visibility_mut(field);
        *visibility = visibility.toggled();
        Outcome::Updated
    }

    fn validate(&mut self, field: FieldId) -> bool {
        let result = validate_field(field, &self.state.values);
        self.state.feedback.apply(field, result)
    }

    fn submit(&mut self) -> Result<Outcome, FormError> {
        self.transition(SubmissionPhase::Validating);

        let mut all_valid = true;
        for (field, result) in validate_all(&self.state.values) {
            all_valid &= self.state.feedback.apply(field, result);
        }

        if !all_valid {
            self.transition(SubmissionPhase::Rejected);
            let first_invalid =
                self.state.feedback.first_invalid().ok_or_else(|| FormError::Incomplete {
                    message: "Rejected submission has no invalid field".into(),
                    context: Some("Submission focus".into()),
                })?;
            self.state.focus = Some(first_invalid);
            debug!(%first_invalid, "Submission rejected");
            return Ok(Outcome::Rejected { first_invalid });
        }

        let snapshot = capture(&self.state.values, (self.clock)())?;
        let record = serde_json::to_string(&snapshot).map_err(|source| {
            FormError::SerdeSerialize { source, context: Some("Submission record".into()) }
        })?;
        info!(%record, "Form submitted successfully");

        self.transition(SubmissionPhase::Succeeded);
        self.state.dialog.open();
        info!("Confirmation dialog shown");

        Ok(Outcome::Submitted(snapshot))
    }

    fn close_dialog(&mut self, trigger: CloseTrigger) -> Outcome {
        if !self.state.dialog.close(trigger) {
            return Outcome::Ignored;
        }

        // Fresh state: values, feedback, meter, requirements and toggles all reset.
        self.state = FormState::default();
        info!(?trigger, "Confirmation dialog closed, form reset");

        Outcome::DialogClosed
    }

    fn transition(&mut self, to: SubmissionPhase) {
        debug!(from = ?self.state.phase, ?to, "Submission phase");
        self.state.phase = to;
    }
}

/// Assembles the submission record from validated values.
fn capture(values: &FormValues, timestamp: DateTime<Utc>) -> Result<FormSnapshot, FormError> {
    let gender = values.gender.ok_or_else(|| FormError::Incomplete {
        message: "No gender selected".into(),
        context: Some("Snapshot assembly".into()),
    })?;

    Ok(FormSnapshot {
        name: values.full_name.trim().to_owned(),
        email: values.email.trim().to_owned(),
        password: values.password.clone(),
        phone: values.phone.trim().to_owned(),
        gender,
        agreed_to_terms: values.terms,
        timestamp,
    })
}
