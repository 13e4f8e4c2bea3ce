//! Dioxus components that draw a [`FormView`] and feed user actions back to the controller.
//!
//! Every component re-renders from `controller.read().view()`; none of them hold
//! visual state of their own.

use dioxus::prelude::*;
use regform::domain::{FieldId, Gender, PasswordField};
use regform::form::view::{DialogView, FieldView, MeterView, RequirementView, ToggleView};
use regform::form::{self, FormController, Outcome};

/// Alias that keeps the controller's event type apart from Dioxus' `FormEvent`.
type Action = form::FormEvent;

const GENDERS: [(Gender, &str); 3] =
    [(Gender::Male, "Male"), (Gender::Female, "Female"), (Gender::Other, "Other")];

/// Applies `action` to the shared controller. Errors are logged and treated as no-ops.
fn dispatch(mut controller: Signal<FormController>, action: Action) -> Outcome {
    match controller.write().dispatch(action) {
        Ok(outcome) => outcome,
        Err(err) => {
            tracing::error!(%err, "Form event failed");
            Outcome::Ignored
        },
    }
}

fn key_of(event: &KeyboardEvent) -> form::Key {
    match event.key() {
        Key::Enter => form::Key::Enter,
        Key::Escape => form::Key::Escape,
        Key::Character(text) => {
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => form::Key::Character(ch),
                _ => form::Key::Other,
            }
        },
        _ => form::Key::Other,
    }
}

/// Root component: owns the controller signal and the document-level side effects.
#[component]
pub fn App() -> Element {
    let controller = use_signal(FormController::new);

    // Background scroll follows the dialog.
    use_effect(move || {
        let locked = controller.read().state().dialog().locks_scroll();
        let overflow = if locked { "hidden" } else { "" };
        document::eval(&format!("document.body.style.overflow = '{overflow}';"));
    });

    // Focus requests are one-shot: the controller clears them on the next event.
    use_effect(move || {
        if let Some(field) = controller.read().state().focus() {
            document::eval(&format!(
                "const el = document.getElementById('{field}'); \
                 if (el) {{ el.scrollIntoView({{ behavior: 'smooth', block: 'center' }}); el.focus(); }}"
            ));
        }
    });

    // Dialog keys go to the dialog element, so it takes focus when shown.
    use_effect(move || {
        if controller.read().state().dialog().is_shown() {
            document::eval("document.getElementById('successModal')?.focus();");
        }
    });

    let view = controller.read().view();

    rsx! {
        div { class: "container",
            h1 { "Create Account" }

            form {
                id: "registrationForm",
                novalidate: true,
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    dispatch(controller, Action::Submit);
                },

                TextField {
                    controller,
                    label: "Full Name",
                    input_type: "text",
                    value: view.values.full_name.clone(),
                    feedback: view.field(FieldId::FullName).clone(),
                }
                TextField {
                    controller,
                    label: "Email Address",
                    input_type: "email",
                    value: view.values.email.clone(),
                    feedback: view.field(FieldId::Email).clone(),
                }
                TextField {
                    controller,
                    label: "Password",
                    input_type: view.password_toggle.input_type,
                    value: view.values.password.clone(),
                    feedback: view.field(FieldId::Password).clone(),
                    toggle: view.password_toggle,
                }
                StrengthMeter { meter: view.meter, requirements: view.requirements }
                TextField {
                    controller,
                    label: "Confirm Password",
                    input_type: view.confirm_toggle.input_type,
                    value: view.values.confirm_password.clone(),
                    feedback: view.field(FieldId::ConfirmPassword).clone(),
                    toggle: view.confirm_toggle,
                }
                TextField {
                    controller,
                    label: "Phone Number",
                    input_type: "tel",
                    value: view.values.phone.clone(),
                    feedback: view.field(FieldId::Phone).clone(),
                }
                GenderChoice {
                    controller,
                    selected: view.values.gender,
                    feedback: view.field(FieldId::Gender).clone(),
                }
                TermsCheckbox {
                    controller,
                    checked: view.values.terms,
                    feedback: view.field(FieldId::Terms).clone(),
                }

                button { id: "submitBtn", r#type: "submit", "REGISTER" }
            }

            ConfirmationDialog { controller, dialog: view.dialog }
        }
    }
}

#[component]
fn TextField(
    controller: Signal<FormController>,
    label: &'static str,
    input_type: &'static str,
    value: String,
    feedback: FieldView,
    toggle: Option<ToggleView>,
) -> Element {
    let field = feedback.id;

    rsx! {
        div { class: "form-group",
            label { r#for: "{field}", "{label}" }
            div { class: "input-wrapper",
                input {
                    id: "{field}",
                    name: "{field}",
                    r#type: input_type,
                    class: feedback.marker.class(),
                    value: "{value}",
                    oninput: move |evt: FormEvent| {
                        dispatch(controller, Action::Input { field, value: evt.value() });
                    },
                    onblur: move |_| {
                        dispatch(controller, Action::Blur(field));
                    },
                    onkeydown: move |evt: KeyboardEvent| {
                        let key = key_of(&evt);
                        if dispatch(controller, Action::KeyDown { field, key }).suppresses_default() {
                            evt.prevent_default();
                        }
                    },
                }
                if let Some(toggle) = toggle {
                    PasswordToggle { controller, toggle }
                }
            }
            span { id: "{feedback.error_element_id}", class: "error-message", "{feedback.error}" }
        }
    }
}

#[component]
fn PasswordToggle(controller: Signal<FormController>, toggle: ToggleView) -> Element {
    let id = match toggle.field {
        PasswordField::Password => "togglePassword",
        PasswordField::ConfirmPassword => "toggleConfirmPassword",
    };

    rsx! {
        button {
            id,
            r#type: "button",
            class: "toggle-password",
            onclick: move |_| {
                dispatch(controller, Action::ToggleVisibility(toggle.field));
            },
            span { class: "toggle-text", "{toggle.label}" }
        }
    }
}

#[component]
fn StrengthMeter(meter: MeterView, requirements: [RequirementView; 3]) -> Element {
    rsx! {
        div { class: "password-strength",
            div { class: "strength-bars",
                for (index, segment) in meter.segments.iter().enumerate() {
                    div { key: "{index}", id: "bar{index + 1}", class: segment.class() }
                }
            }
            span { id: "strengthText", class: meter.label_class(), "{meter.label()}" }
        }
        ul { class: "password-requirements",
            for requirement in requirements {
                li {
                    key: "{requirement.requirement.element_id()}",
                    id: requirement.requirement.element_id(),
                    class: requirement.class(),
                    "{requirement.requirement.text()}"
                }
            }
        }
    }
}

#[component]
fn GenderChoice(
    controller: Signal<FormController>,
    selected: Option<Gender>,
    feedback: FieldView,
) -> Element {
    rsx! {
        div { class: "form-group",
            span { class: "group-label", "Gender" }
            div { id: "gender", tabindex: "-1", class: "radio-group {feedback.marker.class()}",
                for (gender, text) in GENDERS {
                    label { key: "{gender}", class: "radio-label",
                        input {
                            r#type: "radio",
                            name: "gender",
                            value: "{gender}",
                            checked: selected == Some(gender),
                            onchange: move |_| {
                                dispatch(controller, Action::SelectGender(gender));
                            },
                        }
                        "{text}"
                    }
                }
            }
            span { id: "{feedback.error_element_id}", class: "error-message", "{feedback.error}" }
        }
    }
}

#[component]
fn TermsCheckbox(controller: Signal<FormController>, checked: bool, feedback: FieldView) -> Element {
    rsx! {
        div { class: "form-group",
            label { class: "checkbox-label {feedback.marker.class()}",
                input {
                    id: "terms",
                    r#type: "checkbox",
                    checked,
                    onchange: move |evt: FormEvent| {
                        dispatch(controller, Action::SetTerms(evt.checked()));
                    },
                }
                "I agree to the Terms & Conditions"
            }
            span { id: "{feedback.error_element_id}", class: "error-message", "{feedback.error}" }
        }
    }
}

#[component]
fn ConfirmationDialog(controller: Signal<FormController>, dialog: DialogView) -> Element {
    if !dialog.shown {
        return rsx! {};
    }

    rsx! {
        div {
            id: "successModal",
            class: dialog.class(),
            tabindex: "-1",
            onclick: move |_| {
                dispatch(controller, Action::BackdropClick);
            },
            onkeydown: move |evt: KeyboardEvent| {
                if dispatch(controller, Action::DialogKey(key_of(&evt))).suppresses_default() {
                    evt.prevent_default();
                }
            },
            div {
                class: "modal-content",
                onclick: move |evt| evt.stop_propagation(),
                h2 { "REGISTRATION SUCCESSFUL" }
                p { "Your account has been created." }
                button {
                    id: "closeModal",
                    r#type: "button",
                    onclick: move |evt| {
                        evt.stop_propagation();
                        dispatch(controller, Action::CloseDialog);
                    },
                    "CLOSE"
                }
            }
        }
    }
}
