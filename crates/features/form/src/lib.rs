//! # Registration Form
//!
//! The form is one explicit state object owned by a [`FormController`]. Front ends feed it
//! typed [`FormEvent`]s and re-render from the pure [`view::render`] output after every
//! dispatch; nothing here touches a UI toolkit.
//!
//! ```rust
//! use regform_form::{FormController, FormEvent, Outcome};
//! use regform_domain::FieldId;
//!
//! let mut form = FormController::new();
//! form.dispatch(FormEvent::Input { field: FieldId::Email, value: "jane@".into() })?;
//! assert_eq!(form.view().field(FieldId::Email).error, "Please enter a valid email address");
//!
//! let outcome = form.dispatch(FormEvent::Submit)?;
//! assert_eq!(outcome, Outcome::Rejected { first_invalid: FieldId::FullName });
//! # Ok::<(), regform_form::FormError>(())
//! ```

mod controller;
pub mod dialog;
mod error;
pub mod event;
pub mod feedback;
pub mod state;
pub mod view;

pub use crate::controller::{Clock, FormController};
pub use crate::error::FormError;
pub use crate::event::{FormEvent, Key, Outcome};
pub use crate::state::{FormState, SubmissionPhase, Visibility};
pub use crate::view::FormView;
