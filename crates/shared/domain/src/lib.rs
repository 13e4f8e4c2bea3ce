//! # Domain Models
//!
//! This crate contains pure domain types with minimal dependencies (`serde`, `strum`, `chrono`).
//! Keep it lean: no I/O or validation logic, just data and simple helpers.

pub mod config;
pub mod field;
pub mod form;

pub use field::{FailureReason, FieldId, Gender, PasswordField};
pub use form::{FormSnapshot, FormValues};
