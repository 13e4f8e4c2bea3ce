use chrono::{DateTime, TimeZone, Utc};
use regform_domain::{FailureReason, FieldId, Gender, PasswordField};
use regform_form::feedback::FieldStatus;
use regform_form::view::Marker;
use regform_form::{FormController, FormEvent, Key, Outcome, SubmissionPhase};

fn fixed_clock() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap()
}

fn type_into(form: &mut FormController, field: FieldId, value: &str) {
    form.dispatch(FormEvent::Input { field, value: value.to_owned() }).unwrap();
}

fn fill_valid(form: &mut FormController, accept_terms: bool) {
    type_into(form, FieldId::FullName, "Jane Doe");
    type_into(form, FieldId::Email, "jane@example.com");
    type_into(form, FieldId::Password, "abc123!@");
    type_into(form, FieldId::ConfirmPassword, "abc123!@");
    type_into(form, FieldId::Phone, "1234567890");
    form.dispatch(FormEvent::SelectGender(Gender::Female)).unwrap();
    if accept_terms {
        form.dispatch(FormEvent::SetTerms(true)).unwrap();
    }
}

#[test]
fn valid_form_submits_and_opens_dialog() {
    let mut form = FormController::with_clock(fixed_clock);
    fill_valid(&mut form, true);

    let outcome = form.dispatch(FormEvent::Submit).unwrap();

    let Outcome::Submitted(snapshot) = outcome else {
        panic!("expected a submission, got {outcome:?}");
    };
    assert_eq!(snapshot.name, "Jane Doe");
    assert_eq!(snapshot.email, "jane@example.com");
    assert_eq!(snapshot.password, "abc123!@");
    assert_eq!(snapshot.phone, "1234567890");
    assert_eq!(snapshot.gender, Gender::Female);
    assert!(snapshot.agreed_to_terms);
    assert_eq!(snapshot.timestamp, fixed_clock());

    assert_eq!(form.state().phase(), SubmissionPhase::Succeeded);
    let view = form.view();
    assert!(view.dialog.shown);
    assert!(view.scroll_locked);
    assert!(view.fields.iter().all(|f| f.marker == Marker::Valid));
}

#[test]
fn snapshot_trims_text_fields() {
    let mut form = FormController::with_clock(fixed_clock);
    fill_valid(&mut form, true);
    type_into(&mut form, FieldId::FullName, "  Jane Doe ");
    type_into(&mut form, FieldId::Email, " jane@example.com");

    let Outcome::Submitted(snapshot) = form.dispatch(FormEvent::Submit).unwrap() else {
        panic!("expected a submission");
    };
    assert_eq!(snapshot.name, "Jane Doe");
    assert_eq!(snapshot.email, "jane@example.com");
}

#[test]
fn missing_terms_rejects_and_focuses_terms() {
    let mut form = FormController::new();
    fill_valid(&mut form, false);

    let outcome = form.dispatch(FormEvent::Submit).unwrap();

    assert_eq!(outcome, Outcome::Rejected { first_invalid: FieldId::Terms });
    assert_eq!(form.state().phase(), SubmissionPhase::Rejected);

    let view = form.view();
    let flagged: Vec<FieldId> =
        view.fields.iter().filter(|f| f.marker == Marker::Invalid).map(|f| f.id).collect();
    assert_eq!(flagged, vec![FieldId::Terms]);
    assert_eq!(view.field(FieldId::Terms).error, "You must agree to the Terms & Conditions");
    assert_eq!(view.focus, Some(FieldId::Terms));
    assert!(!view.dialog.shown);
}

#[test]
fn empty_submit_flags_every_field() {
    let mut form = FormController::new();

    let outcome = form.dispatch(FormEvent::Submit).unwrap();

    assert_eq!(outcome, Outcome::Rejected { first_invalid: FieldId::FullName });
    let reasons: Vec<Option<FailureReason>> = FieldId::ALL
        .iter()
        .map(|field| match form.state().feedback().status(*field) {
            FieldStatus::Invalid(violation) => Some(violation.reason),
            _ => None,
        })
        .collect();
    assert_eq!(
        reasons,
        vec![
            Some(FailureReason::Empty),
            Some(FailureReason::Empty),
            Some(FailureReason::Empty),
            Some(FailureReason::Empty),
            Some(FailureReason::Empty),
            Some(FailureReason::Empty),
            Some(FailureReason::Unchecked),
        ]
    );
}

#[test]
fn focus_is_a_one_shot_directive() {
    let mut form = FormController::new();
    form.dispatch(FormEvent::Submit).unwrap();
    assert_eq!(form.view().focus, Some(FieldId::FullName));

    type_into(&mut form, FieldId::FullName, "Jane");
    assert_eq!(form.view().focus, None);
}

#[test]
fn user_can_correct_and_resubmit() {
    let mut form = FormController::new();
    fill_valid(&mut form, false);
    form.dispatch(FormEvent::Submit).unwrap();

    form.dispatch(FormEvent::SetTerms(true)).unwrap();
    let outcome = form.dispatch(FormEvent::Submit).unwrap();

    assert!(matches!(outcome, Outcome::Submitted(_)));
}

#[test]
fn closing_dialog_resets_to_untouched_appearance() {
    let pristine = FormController::new().view();

    for close in [FormEvent::CloseDialog, FormEvent::BackdropClick, FormEvent::DialogKey(Key::Enter)]
    {
        let mut form = FormController::new();
        fill_valid(&mut form, true);
        form.dispatch(FormEvent::ToggleVisibility(PasswordField::Password)).unwrap();
        form.dispatch(FormEvent::ToggleVisibility(PasswordField::ConfirmPassword)).unwrap();
        assert!(matches!(form.dispatch(FormEvent::Submit).unwrap(), Outcome::Submitted(_)));

        assert_eq!(form.dispatch(close).unwrap(), Outcome::DialogClosed);

        let view = form.view();
        assert_eq!(view, pristine);
        assert_eq!(view.password_toggle.label, "SHOW");
        assert_eq!(view.values.full_name, "");
        assert!(!view.values.terms);
        assert_eq!(form.state().phase(), SubmissionPhase::Idle);
    }
}

#[test]
fn dialog_ignores_other_keys_and_form_events() {
    let mut form = FormController::new();
    fill_valid(&mut form, true);
    form.dispatch(FormEvent::Submit).unwrap();

    assert_eq!(form.dispatch(FormEvent::DialogKey(Key::Escape)).unwrap(), Outcome::Ignored);
    assert_eq!(form.dispatch(FormEvent::Submit).unwrap(), Outcome::Ignored);
    assert_eq!(
        form.dispatch(FormEvent::Input { field: FieldId::FullName, value: "X".into() }).unwrap(),
        Outcome::Ignored
    );
    assert!(form.view().dialog.shown);
    assert_eq!(form.state().values().full_name, "Jane Doe");
}

#[test]
fn dialog_events_while_hidden_are_ignored() {
    let mut form = FormController::new();
    type_into(&mut form, FieldId::FullName, "Jane");

    assert_eq!(form.dispatch(FormEvent::BackdropClick).unwrap(), Outcome::Ignored);
    assert_eq!(form.dispatch(FormEvent::DialogKey(Key::Enter)).unwrap(), Outcome::Ignored);
    assert_eq!(form.state().values().full_name, "Jane");
}

#[test]
fn enter_that_closes_dialog_is_consumed_and_leaves_form_pristine() {
    let pristine = FormController::new().view();
    let mut form = FormController::new();
    fill_valid(&mut form, true);
    form.dispatch(FormEvent::Submit).unwrap();

    let outcome = form.dispatch(FormEvent::DialogKey(Key::Enter)).unwrap();

    assert_eq!(outcome, Outcome::DialogClosed);
    assert!(outcome.suppresses_default(), "native Enter activation would resubmit the reset form");
    assert_eq!(form.view(), pristine);

    // A submit reaching the reset form is exactly what the consumed key prevents.
    let late = form.dispatch(FormEvent::Submit).unwrap();
    assert_eq!(late, Outcome::Rejected { first_invalid: FieldId::FullName });
}
