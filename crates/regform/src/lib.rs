//! Facade crate for the registration form.
//! Re-exports the domain, kernel and feature crates so front ends depend on one crate.
//! Keep this crate thin: it should compose other crates, not implement form logic.

pub use regform_domain as domain;
pub use regform_form as form;
pub use regform_kernel as kernel;
pub use regform_validation as validation;

pub mod prelude {
    pub use regform_domain::{FailureReason, FieldId, FormSnapshot, Gender, PasswordField};
    pub use regform_form::view::FormView;
    pub use regform_form::{FormController, FormError, FormEvent, Key, Outcome};
}
