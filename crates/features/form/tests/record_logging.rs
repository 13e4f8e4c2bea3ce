use std::io;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, TimeZone, Utc};
use regform_domain::{FieldId, Gender};
use regform_form::{FormController, FormEvent, Outcome};
use serde_json::Value;
use tracing_subscriber::fmt::MakeWriter;

/// In-memory sink shared between the subscriber and the test.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn lines(&self) -> Vec<String> {
        let bytes = self.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap().lines().map(str::to_owned).collect()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn fixed_clock() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap()
}

#[test]
fn successful_submission_logs_the_record_as_json() {
    let sink = Captured::default();
    let subscriber = tracing_subscriber::fmt().json().with_writer(sink.clone()).finish();

    tracing::subscriber::with_default(subscriber, || {
        let mut form = FormController::with_clock(fixed_clock);
        for (field, value) in [
            (FieldId::FullName, " Jane Doe "),
            (FieldId::Email, "jane@example.com"),
            (FieldId::Password, "abc123!@"),
            (FieldId::ConfirmPassword, "abc123!@"),
            (FieldId::Phone, "1234567890"),
        ] {
            form.dispatch(FormEvent::Input { field, value: value.to_owned() }).unwrap();
        }
        form.dispatch(FormEvent::SelectGender(Gender::Other)).unwrap();
        form.dispatch(FormEvent::SetTerms(true)).unwrap();

        assert!(matches!(form.dispatch(FormEvent::Submit).unwrap(), Outcome::Submitted(_)));
    });

    let event = sink
        .lines()
        .iter()
        .map(|line| serde_json::from_str::<Value>(line).unwrap())
        .find(|event| event["fields"]["message"] == "Form submitted successfully")
        .expect("submission event logged");
    assert_eq!(event["level"], "INFO");

    let raw = event["fields"]["record"].as_str().expect("record field is a string");
    let record: Value = serde_json::from_str(raw).expect("record is JSON");

    assert_eq!(record["name"], "Jane Doe");
    assert_eq!(record["email"], "jane@example.com");
    assert_eq!(record["password"], "abc123!@");
    assert_eq!(record["phone"], "1234567890");
    assert_eq!(record["gender"], "other");
    assert_eq!(record["agreedToTerms"], true);
    assert_eq!(record["timestamp"], "2026-10-16T12:00:00Z");
    assert_eq!(record.as_object().map(serde_json::Map::len), Some(7));
}
