//! Confirmation dialog shown after a successful submission.

use crate::event::Key;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DialogState {
    #[default]
    Hidden,
    Shown,
}

/// What asked the dialog to close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    /// The explicit close control inside the dialog.
    CloseButton,
    /// A click on the backdrop, outside the dialog body.
    Backdrop,
    /// A key pressed while the dialog has focus.
    Key(Key),
}

impl CloseTrigger {
    /// Only the acknowledgement key closes the dialog; other keys fall through.
    #[must_use]
    pub const fn acknowledges(self) -> bool {
        match self {
            Self::CloseButton | Self::Backdrop => true,
            Self::Key(key) => matches!(key, Key::Enter),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dialog {
    state: DialogState,
}

impl Dialog {
    /// Shows the dialog. Returns `false` if it was already shown.
    pub fn open(&mut self) -> bool {
        let changed = self.state == DialogState::Hidden;
        self.state = DialogState::Shown;
        changed
    }

    /// Hides the dialog if `trigger` acknowledges it. Returns whether it closed.
    pub fn close(&mut self, trigger: CloseTrigger) -> bool {
        if self.state == DialogState::Hidden || !trigger.acknowledges() {
            return false;
        }
        self.state = DialogState::Hidden;
        true
    }

    #[must_use]
    pub const fn state(&self) -> DialogState {
        self.state
    }

    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.state == DialogState::Shown
    }

    /// Background scrolling is suppressed while the dialog is shown.
    #[must_use]
    pub fn locks_scroll(&self) -> bool {
        self.is_shown()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_shown_hidden() {
        let mut dialog = Dialog::default();
        assert!(!dialog.locks_scroll());

        assert!(dialog.open());
        assert!(!dialog.open(), "opening twice is a no-op");
        assert!(dialog.locks_scroll());

        assert!(dialog.close(CloseTrigger::Backdrop));
        assert_eq!(dialog.state(), DialogState::Hidden);
        assert!(!dialog.locks_scroll());
    }

    #[test]
    fn only_enter_acknowledges() {
        let mut dialog = Dialog::default();
        dialog.open();

        assert!(!dialog.close(CloseTrigger::Key(Key::Escape)));
        assert!(!dialog.close(CloseTrigger::Key(Key::Character(' '))));
        assert!(dialog.is_shown());

        assert!(dialog.close(CloseTrigger::Key(Key::Enter)));
    }

    #[test]
    fn closing_hidden_dialog_does_nothing() {
        let mut dialog = Dialog::default();
        assert!(!dialog.close(CloseTrigger::CloseButton));
    }
}
