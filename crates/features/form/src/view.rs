//! # Declarative View
//!
//! [`render`] is a pure function from [`FormState`] to a [`FormView`]: a complete
//! description of what the form should look like. Front ends re-render from it after each
//! dispatch instead of toggling markers themselves, so a field's appearance can never drift
//! from its last verdict.

use crate::feedback::FieldStatus;
use crate::state::FormState;
use regform_domain::{FieldId, FormValues, PasswordField};
use regform_validation::strength::METER_SEGMENTS;
use regform_validation::{StrengthLevel, StrengthReport};

/// Validity marker on a field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Marker {
    #[default]
    None,
    Valid,
    Invalid,
}

impl Marker {
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Valid => "valid",
            Self::Invalid => "invalid",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub id: FieldId,
    pub marker: Marker,
    /// Error text; empty when there is nothing to report.
    pub error: &'static str,
    pub error_element_id: String,
}

/// Color tone of a strength segment or label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Weak,
    Medium,
    Strong,
}

impl Tone {
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Medium => "medium",
            Self::Strong => "strong",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SegmentView {
    pub active: bool,
    pub tone: Option<Tone>,
}

impl SegmentView {
    #[must_use]
    pub fn class(&self) -> String {
        let mut class = String::from("strength-bar");
        if self.active {
            class.push_str(" active");
        }
        if let Some(tone) = self.tone {
            class.push(' ');
            class.push_str(tone.class());
        }
        class
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MeterView {
    pub segments: [SegmentView; METER_SEGMENTS],
    pub level: Option<StrengthLevel>,
}

impl MeterView {
    fn from_report(report: Option<&StrengthReport>) -> Self {
        let Some(report) = report else {
            return Self::default();
        };

        // Only the two lowest bands tint their segments.
        let tone = match report.level {
            StrengthLevel::Weak => Some(Tone::Weak),
            StrengthLevel::Fair => Some(Tone::Medium),
            StrengthLevel::Good | StrengthLevel::Strong => None,
        };

        let lit = report.segments();
        let mut segments = [SegmentView::default(); METER_SEGMENTS];
        for segment in segments.iter_mut().take(lit) {
            *segment = SegmentView { active: true, tone };
        }

        Self { segments, level: Some(report.level) }
    }

    pub fn active_segments(&self) -> usize {
        self.segments.iter().filter(|s| s.active).count()
    }

    /// Label text; empty when there is no password.
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.level.map_or("", Into::into)
    }

    #[must_use]
    pub const fn label_tone(&self) -> Option<Tone> {
        match self.level {
            None => None,
            Some(StrengthLevel::Weak) => Some(Tone::Weak),
            Some(StrengthLevel::Fair | StrengthLevel::Good) => Some(Tone::Medium),
            Some(StrengthLevel::Strong) => Some(Tone::Strong),
        }
    }

    #[must_use]
    pub fn label_class(&self) -> String {
        self.label_tone()
            .map_or_else(|| "strength-label".to_owned(), |t| format!("strength-label {}", t.class()))
    }
}

/// One of the three password requirement indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Length,
    Digit,
    Special,
}

impl Requirement {
    pub const ALL: [Self; 3] = [Self::Length, Self::Digit, Self::Special];

    #[must_use]
    pub const fn element_id(self) -> &'static str {
        match self {
            Self::Length => "req-length",
            Self::Digit => "req-number",
            Self::Special => "req-special",
        }
    }

    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::Length => "At least 8 characters",
            Self::Digit => "At least 1 number",
            Self::Special => "At least 1 special character",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequirementView {
    pub requirement: Requirement,
    pub met: bool,
}

impl RequirementView {
    #[must_use]
    pub const fn class(&self) -> &'static str {
        if self.met { "requirement met" } else { "requirement" }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleView {
    pub field: PasswordField,
    pub label: &'static str,
    pub input_type: &'static str,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DialogView {
    pub shown: bool,
}

impl DialogView {
    #[must_use]
    pub const fn class(&self) -> &'static str {
        if self.shown { "modal show" } else { "modal" }
    }
}

/// Everything needed to draw the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub values: FormValues,
    /// One entry per field, in document order.
    pub fields: Vec<FieldView>,
    pub meter: MeterView,
    pub requirements: [RequirementView; 3],
    pub password_toggle: ToggleView,
    pub confirm_toggle: ToggleView,
    pub dialog: DialogView,
    /// Background scrolling suppressed (dialog open).
    pub scroll_locked: bool,
    /// Field to focus and scroll into view, if any.
    pub focus: Option<FieldId>,
}

impl FormView {
    /// View of one field.
    #[must_use]
    pub fn field(&self, id: FieldId) -> &FieldView {
        &self.fields[id as usize]
    }

    #[must_use]
    pub const fn toggle(&self, field: PasswordField) -> &ToggleView {
        match field {
            PasswordField::Password => &self.password_toggle,
            PasswordField::ConfirmPassword => &self.confirm_toggle,
        }
    }
}

pub fn render(state: &FormState) -> FormView {
    let fields = state
        .feedback()
        .iter()
        .map(|(id, status)| FieldView {
            id,
            marker: match status {
                FieldStatus::Untouched => Marker::None,
                FieldStatus::Valid => Marker::Valid,
                FieldStatus::Invalid(_) => Marker::Invalid,
            },
            error: status.error_text(),
            error_element_id: id.error_element_id(),
        })
        .collect();

    let met = state.requirements();
    let requirements = Requirement::ALL.map(|requirement| RequirementView {
        requirement,
        met: match requirement {
            Requirement::Length => met.length,
            Requirement::Digit => met.digit,
            Requirement::Special => met.special,
        },
    });

    let toggle = |field| {
        let visibility = state.visibility(field);
        ToggleView { field, label: visibility.toggle_label(), input_type: visibility.input_type() }
    };

    FormView {
        values: state.values().clone(),
        fields,
        meter: MeterView::from_report(state.strength()),
        requirements,
        password_toggle: toggle(PasswordField::Password),
        confirm_toggle: toggle(PasswordField::ConfirmPassword),
        dialog: DialogView { shown: state.dialog().is_shown() },
        scroll_locked: state.dialog().locks_scroll(),
        focus: state.focus(),
    }
}
